//! Integration tests for the daily steps and training report flows.
//!
//! These tests exercise the public entry points end to end:
//! - Fixed scenarios with known numbers
//! - Randomly generated records (seeded, reproducible) checked against the formulas
//! - Error propagation for malformed records and unknown activity labels
//!
//! Run with `RUST_LOG=strides=debug cargo nextest run -p strides` to see the logs.

use rand::{SeedableRng, rngs::StdRng};
use strides::{
    Activity, Biometrics, Calculator, Error, MetricsConfig, ParseError, ValidationError,
    daily_steps_report, training_report,
};
use test_data::prelude::*;
use tracing_subscriber::EnvFilter;

const SAMPLES: usize = 500;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

fn report_line<'a>(report: &'a str, prefix: &str) -> &'a str {
    report
        .lines()
        .find(|line| line.starts_with(prefix))
        .unwrap_or_else(|| panic!("no line starting with {prefix:?} in {report:?}"))
}

#[test]
fn test_daily_scenario() {
    init_logging();

    let report = daily_steps_report("1000,30m0s", 75.0, 175.0).expect("valid record");
    assert_eq!(
        report,
        "Количество шагов: 1000.\nДистанция составила: 0.65 км.\nВы сожгли: 5906.25 ккал.\n"
    );
}

#[test]
fn test_walking_training_scenario() {
    init_logging();

    let report = training_report("3000,Ходьба,45m0s", 70.0, 180.0).expect("valid record");
    assert_eq!(
        report,
        "Тип тренировки: Ходьба.\nДлительность: 45m0s,\nДистанция составила: 243.00 км.\nСкорость: 324.00 км/ч\nСожгли калорий: 17010.00 ккал.\n"
    );
}

#[test]
fn test_running_training_scenario_matches_walking_numbers() {
    init_logging();

    let walking = training_report("3000,Ходьба,45m0s", 70.0, 180.0).unwrap();
    let running = training_report("3000,Бег,45m0s", 70.0, 180.0).unwrap();

    assert!(running.starts_with("Тип тренировки: Бег.\n"));
    assert_eq!(
        report_line(&walking, "Сожгли калорий"),
        report_line(&running, "Сожгли калорий")
    );
}

#[test]
fn test_malformed_steps() {
    init_logging();

    let err = daily_steps_report("abc,10m", 75.0, 175.0).unwrap_err();
    assert!(matches!(err, Error::Parse(ParseError::Steps(_))));
}

#[test]
fn test_unknown_activity() {
    init_logging();

    let err = training_report("500,Плавание,20m", 70.0, 180.0).unwrap_err();
    assert_eq!(err, Error::UnknownActivity("Плавание".to_string()));
    assert!(err.to_string().contains("Плавание"));
}

#[test]
fn test_negative_inputs_rejected() {
    init_logging();

    assert_eq!(
        daily_steps_report("-100,10m", 75.0, 175.0),
        Err(Error::Parse(ParseError::NegativeSteps(-100)))
    );
    assert_eq!(
        daily_steps_report("100,-10m", 75.0, 175.0),
        Err(Error::Validation(ValidationError::NegativeDuration(
            "-10m".to_string()
        )))
    );
    assert_eq!(
        training_report("100,Бег,10m", -70.0, 180.0),
        Err(Error::Validation(ValidationError::Weight(-70.0)))
    );
}

#[test]
fn test_zero_duration_gives_zero_speed() {
    let calc = Calculator::default();
    assert_eq!(calc.mean_speed(1000, 175.0, time::Duration::ZERO), 0.0);
}

#[test]
fn test_generated_daily_records_always_report() {
    init_logging();

    let generator = RecordGenerator::new(GeneratorConfig::default());
    let calc = Calculator::default();
    let mut rng = StdRng::seed_from_u64(12345);

    for _ in 0..SAMPLES {
        let generated = generator.day_record(&mut rng);
        let body = Biometrics::new(generated.weight_kg, generated.height_cm);

        let summary = calc
            .daily_summary(&generated.record, body)
            .unwrap_or_else(|e| panic!("{}: {e}", generated.record));

        assert_eq!(summary.steps, generated.steps);
        let expected = generated.steps as f64 * 0.65 / 1000.0;
        assert!((summary.distance_km - expected).abs() < 1e-9);

        let report = daily_steps_report(&generated.record, body.weight, body.height).unwrap();
        assert!(report.starts_with(&format!("Количество шагов: {}.\n", generated.steps)));
    }
}

#[test]
fn test_generated_training_records_match_distance_formula() {
    init_logging();

    let generator = RecordGenerator::new(GeneratorConfig::default());
    let calc = Calculator::default();
    let mut rng = StdRng::seed_from_u64(54321);
    let profiles: [&dyn AthleteProfile; 4] = [
        &WalkerProfile::default(),
        &WalkerProfile::brisk(),
        &RunnerProfile::default(),
        &RunnerProfile::elite(),
    ];

    for i in 0..SAMPLES {
        let profile = profiles[i % profiles.len()];
        let generated = generator.training_record(profile, &mut rng);
        let body = Biometrics::new(generated.weight_kg, generated.height_cm);

        let summary = calc
            .training_summary(&generated.record, body)
            .unwrap_or_else(|e| panic!("{}: {e}", generated.record));

        assert_eq!(summary.activity.label(), profile.label());
        let expected = generated.height_cm * 0.45 * generated.steps as f64 / 1000.0;
        assert!((summary.metrics.distance_km - expected).abs() < 1e-6);

        let report = training_report(&generated.record, body.weight, body.height).unwrap();
        assert_eq!(
            report_line(&report, "Дистанция"),
            format!("Дистанция составила: {expected:.2} км.")
        );
    }
}

#[test]
fn test_generated_unknown_labels_are_named() {
    init_logging();

    let generator = RecordGenerator::new(GeneratorConfig::short_sessions());
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        let generated = generator.unknown_training_record(&mut rng);
        let label = generated.label.clone().unwrap();

        let err = training_report(&generated.record, generated.weight_kg, generated.height_cm)
            .unwrap_err();
        assert_eq!(err, Error::UnknownActivity(label));
    }
}

#[test]
fn test_custom_config_changes_running_calories_only() {
    let config: MetricsConfig =
        serde_json::from_str(r#"{ "running_calories_multiplier": 1.5 }"#).unwrap();
    let calc = Calculator::new(config);
    let body = Biometrics::new(70.0, 180.0);

    let walking = calc.training_summary("3000,Ходьба,45m0s", body).unwrap();
    let running = calc.training_summary("3000,Бег,45m0s", body).unwrap();

    assert_eq!(walking.activity, Activity::Walking);
    assert_eq!(walking.metrics.distance_km, running.metrics.distance_km);
    assert!((running.metrics.calories - walking.metrics.calories * 1.5).abs() < 1e-6);
}
