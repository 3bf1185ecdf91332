//! Configuration types for record generation.

use serde::{Deserialize, Serialize};

/// Configuration for generating activity records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Session length in whole minutes (inclusive range).
    pub session_minutes: (u32, u32),

    /// Body weight in kilograms (range).
    pub weight_kg: (f64, f64),

    /// Body height in centimeters (range).
    pub height_cm: (f64, f64),

    /// Activity labels the library does not recognize, for negative cases.
    pub unknown_labels: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            session_minutes: (5, 180),
            weight_kg: (45.0, 120.0),
            height_cm: (150.0, 205.0),
            unknown_labels: vec![
                "Плавание".into(),
                "Велосипед".into(),
                "Йога".into(),
                "ходьба".into(),
                "Walking".into(),
            ],
        }
    }
}

impl GeneratorConfig {
    /// Short sessions only, useful for keeping numbers small in assertions.
    pub fn short_sessions() -> Self {
        Self {
            session_minutes: (1, 30),
            ..Default::default()
        }
    }
}
