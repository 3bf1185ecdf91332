//! Parsers for the compact comma-separated activity records.
//!
//! Two shapes are supported:
//! - daily records, `<steps>,<duration>` (e.g. `1000,30m0s`)
//! - training records, `<steps>,<label>,<duration>` (e.g. `3000,Ходьба,45m0s`)
//!
//! Every field is trimmed before conversion.

use crate::duration::parse_duration;
use crate::errors::ParseError;
use crate::models::{DayRecord, ParsedActivity};

const DAY_FIELDS: usize = 2;
const TRAINING_FIELDS: usize = 3;

fn split_fields(record: &str, expected: usize) -> Result<Vec<&str>, ParseError> {
    let fields: Vec<&str> = record.split(',').map(str::trim).collect();
    if fields.len() != expected {
        return Err(ParseError::FieldCount {
            expected,
            actual: fields.len(),
        });
    }
    Ok(fields)
}

/// Negative counts are rejected here even though the integer conversion accepts them.
fn parse_steps(field: &str) -> Result<u64, ParseError> {
    let steps: i64 = field.parse()?;
    u64::try_from(steps).map_err(|_| ParseError::NegativeSteps(steps))
}

/// Parse a daily record: `<steps>,<duration>`.
pub fn parse_day_record(record: &str) -> Result<DayRecord, ParseError> {
    let fields = split_fields(record, DAY_FIELDS)?;

    let steps = parse_steps(fields[0])?;
    let duration = parse_duration(fields[1])?;

    Ok(DayRecord {
        steps,
        duration,
        duration_text: fields[1].to_string(),
    })
}

/// Parse a training record: `<steps>,<label>,<duration>`.
///
/// The label is passed through untouched; resolving it is left to
/// [`ParsedActivity::activity`].
pub fn parse_training_record(record: &str) -> Result<ParsedActivity, ParseError> {
    let fields = split_fields(record, TRAINING_FIELDS)?;

    let steps = parse_steps(fields[0])?;
    let duration = parse_duration(fields[2])?;

    Ok(ParsedActivity {
        steps,
        label: fields[1].to_string(),
        duration,
        duration_text: fields[2].to_string(),
    })
}
