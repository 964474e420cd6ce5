//! Input adapter for the testcase file format.
//!
//! The format is a JSON object with an optional `"keys"` member carrying
//! `n` (entry count) and `k` (points to fit), plus numbered members, each a
//! `{ "base": ..., "value": ... }` pair. The data files encode numbers as
//! strings, so both string and number forms are accepted. Entries are
//! ordered by their numeric key; that order defines the implicit
//! x-coordinates downstream.
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" },
//!     "3": { "base": "10", "value": "12" },
//!     "6": { "base": "4", "value": "213" }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use polyrec_engine::Sample;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Could not read input file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Input root must be a JSON object")]
    NotAnObject,
    #[error("Entry \"{entry}\": missing field \"{field}\"")]
    MissingField { entry: String, field: &'static str },
    #[error("Entry \"{entry}\": field \"{field}\" is not usable as a number")]
    BadNumber { entry: String, field: &'static str },
}

/// A parsed testcase: ordered samples plus whatever the `keys` header
/// declared.
#[derive(Debug, Clone)]
pub struct TestCase {
    pub samples: Vec<Sample>,
    pub declared_n: Option<usize>,
    pub declared_k: Option<usize>,
}

pub fn read_test_case(path: &Path) -> Result<TestCase, InputError> {
    let text = fs::read_to_string(path)?;
    parse_test_case(&text)
}

pub fn parse_test_case(text: &str) -> Result<TestCase, InputError> {
    let root: Value = serde_json::from_str(text)?;
    let obj = root.as_object().ok_or(InputError::NotAnObject)?;

    let (declared_n, declared_k) = match obj.get("keys") {
        Some(keys) => (
            opt_usize_field(keys, "keys", "n")?,
            opt_usize_field(keys, "keys", "k")?,
        ),
        None => (None, None),
    };

    // Numbered entries, ordered by index (file order in canonical files)
    let mut entries: Vec<(u64, &Value)> = obj
        .iter()
        .filter_map(|(key, value)| key.parse::<u64>().ok().map(|i| (i, value)))
        .collect();
    entries.sort_by_key(|(index, _)| *index);

    let samples = entries
        .into_iter()
        .map(|(index, entry)| {
            let name = index.to_string();
            let base = u64_field(entry, &name, "base")?;
            let base = u32::try_from(base).map_err(|_| InputError::BadNumber {
                entry: name.clone(),
                field: "base",
            })?;
            let digits = string_field(entry, &name, "value")?;
            Ok(Sample::new(base, digits))
        })
        .collect::<Result<Vec<_>, InputError>>()?;

    Ok(TestCase {
        samples,
        declared_n,
        declared_k,
    })
}

/// Read a numeric field that may be encoded as a JSON number or a string.
fn u64_field(entry: &Value, name: &str, field: &'static str) -> Result<u64, InputError> {
    let value = entry.get(field).ok_or_else(|| InputError::MissingField {
        entry: name.to_string(),
        field,
    })?;
    let parsed = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| InputError::BadNumber {
        entry: name.to_string(),
        field,
    })
}

fn opt_usize_field(entry: &Value, name: &str, field: &'static str) -> Result<Option<usize>, InputError> {
    if entry.get(field).is_none() {
        return Ok(None);
    }
    let value = u64_field(entry, name, field)?;
    usize::try_from(value)
        .map(Some)
        .map_err(|_| InputError::BadNumber {
            entry: name.to_string(),
            field,
        })
}

/// Read the digit string; a bare JSON number is accepted and stringified.
fn string_field(entry: &Value, name: &str, field: &'static str) -> Result<String, InputError> {
    let value = entry.get(field).ok_or_else(|| InputError::MissingField {
        entry: name.to_string(),
        field,
    })?;
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(InputError::BadNumber {
            entry: name.to_string(),
            field,
        }),
    }
}
