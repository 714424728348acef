//! Coercion of raw inbound values into scores.
//!
//! The two use cases deliberately disagree on malformed input: statistics
//! reject the whole request, grade entry treats the field as absent.

use serde_json::Value;
use thiserror::Error;

/// Rejection of a statistics request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// An entry is neither null nor a finite number.
    #[error("invalid input: entry {index} is not numeric ({value})")]
    NotNumeric { index: usize, value: String },
}

/// Outcome of coercing one raw value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coerced {
    /// Null-like: dropped from statistics, absent for grades.
    Null,
    Number(f64),
    Invalid,
}

/// Coerce a JSON value: numbers pass through, numeric strings are parsed,
/// `null` is null-like, anything else is invalid.
pub fn coerce(value: &Value) -> Coerced {
    match value {
        Value::Null => Coerced::Null,
        Value::Number(n) => n.as_f64().map_or(Coerced::Invalid, Coerced::Number),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_or(Coerced::Invalid, Coerced::Number),
        Value::Bool(_) | Value::Array(_) | Value::Object(_) => Coerced::Invalid,
    }
}

/// Drop nulls and require every remaining entry to be a finite number.
pub fn statistics_scores(raw: &[Value]) -> Result<Vec<f64>, InputError> {
    let mut scores = Vec::with_capacity(raw.len());
    for (index, value) in raw.iter().enumerate() {
        match coerce(value) {
            Coerced::Null => {}
            Coerced::Number(x) if x.is_finite() => scores.push(x),
            Coerced::Number(_) | Coerced::Invalid => {
                return Err(InputError::NotNumeric {
                    index,
                    value: value.to_string(),
                })
            }
        }
    }
    Ok(scores)
}

/// Typed variant of [`statistics_scores`] for callers that already hold floats.
pub fn statistics_values(raw: &[Option<f64>]) -> Result<Vec<f64>, InputError> {
    let mut scores = Vec::with_capacity(raw.len());
    for (index, value) in raw.iter().enumerate() {
        match value {
            None => {}
            Some(x) if x.is_finite() => scores.push(*x),
            Some(x) => {
                return Err(InputError::NotNumeric {
                    index,
                    value: x.to_string(),
                })
            }
        }
    }
    Ok(scores)
}

/// Read an exam score from a JSON value. Anything unusable is absent.
pub fn exam_from_value(value: &Value) -> Option<f64> {
    match coerce(value) {
        Coerced::Number(x) => Some(x),
        Coerced::Null => None,
        Coerced::Invalid => {
            tracing::debug!(%value, "ignoring non-numeric exam score");
            None
        }
    }
}

/// Read an exam score from submitted form text. Blank or unparsable text is absent.
pub fn exam_from_text(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    match text.parse::<f64>() {
        Ok(x) => Some(x),
        Err(_) => {
            tracing::debug!(text, "ignoring unparsable exam score");
            None
        }
    }
}
