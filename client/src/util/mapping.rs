//! Field-mapping engine used to preview how an integration translates
//! provider records into TrainFlow fields.
//!
//! RULES
//! =====
//! - Only mapped source fields reach the output; everything else is dropped.
//! - A transform that is unknown or malformed leaves the value unchanged.
//! - Transforms stringify non-string values before operating on them.
//! - `substring(start, length)` selects characters `start..start + length`.
//!   Negative bounds count back from the end of the text and both bounds
//!   clamp to the text, so `substring(-3, 2)` of `"abcdef"` is `"de"` while
//!   `substring(-2, 2)` is empty because its end resolves to index 0.

#[cfg(test)]
#[path = "mapping_test.rs"]
mod mapping_test;

use serde_json::{Map, Value};

use crate::net::types::FieldMapping;

/// A value transform attached to a mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transform {
    Upper,
    Lower,
    Trim,
    /// Character slice from `start` to `start + length`.
    Substring { start: i64, length: i64 },
}

impl Transform {
    /// Parse a transform expression such as `upper` or `substring(0, 3)`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        match raw {
            "upper" => return Some(Self::Upper),
            "lower" => return Some(Self::Lower),
            "trim" => return Some(Self::Trim),
            _ => {}
        }
        let args = raw.strip_prefix("substring(")?.strip_suffix(')')?;
        let (start, length) = args.split_once(',')?;
        Some(Self::Substring { start: start.trim().parse().ok()?, length: length.trim().parse().ok()? })
    }

    #[must_use]
    pub fn apply(self, value: &Value) -> Value {
        let text = value_text(value);
        let out = match self {
            Self::Upper => text.to_uppercase(),
            Self::Lower => text.to_lowercase(),
            Self::Trim => text.trim().to_owned(),
            Self::Substring { start, length } => slice_chars(&text, start, start.saturating_add(length)),
        };
        Value::String(out)
    }
}

/// Characters between `from` and `to`, where negative bounds are offsets
/// from the end.
fn slice_chars(text: &str, from: i64, to: i64) -> String {
    let chars: Vec<char> = text.chars().collect();
    let len = i64::try_from(chars.len()).unwrap_or(i64::MAX);
    let bound = |index: i64| {
        let resolved = if index < 0 { index.saturating_add(len) } else { index };
        usize::try_from(resolved.clamp(0, len)).unwrap_or_default()
    };
    let (from, to) = (bound(from), bound(to));
    if from >= to {
        return String::new();
    }
    chars[from..to].iter().collect()
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Map one source record through `mappings`.
#[must_use]
pub fn map_record(mappings: &[FieldMapping], source: &Map<String, Value>) -> Map<String, Value> {
    let mut out = Map::new();
    for mapping in mappings {
        let Some(value) = source.get(&mapping.source_field) else {
            continue;
        };
        let mapped = match mapping.transform_function.as_deref().and_then(Transform::parse) {
            Some(transform) => transform.apply(value),
            None => value.clone(),
        };
        out.insert(mapping.target_field.clone(), mapped);
    }
    out
}

/// Source fields marked required that `source` lacks, in mapping order.
#[must_use]
pub fn missing_required<'a>(mappings: &'a [FieldMapping], source: &Map<String, Value>) -> Vec<&'a str> {
    mappings
        .iter()
        .filter(|m| m.required && !source.contains_key(&m.source_field))
        .map(|m| m.source_field.as_str())
        .collect()
}

/// Why a sample record could not be previewed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PreviewError {
    #[error("sample is not valid JSON: {0}")]
    InvalidJson(String),
    #[error("sample must be a JSON object")]
    NotAnObject,
    #[error("missing required fields: {}", .0.join(", "))]
    MissingRequired(Vec<String>),
}

/// Parse a pasted sample record and return the mapped output, pretty-printed.
///
/// # Errors
///
/// Returns a [`PreviewError`] when the sample does not parse, is not an
/// object, or lacks a required source field.
pub fn preview(mappings: &[FieldMapping], sample: &str) -> Result<String, PreviewError> {
    let parsed: Value = serde_json::from_str(sample).map_err(|e| PreviewError::InvalidJson(e.to_string()))?;
    let Value::Object(source) = parsed else {
        return Err(PreviewError::NotAnObject);
    };
    let missing = missing_required(mappings, &source);
    if !missing.is_empty() {
        return Err(PreviewError::MissingRequired(missing.into_iter().map(str::to_owned).collect()));
    }
    let mapped = Value::Object(map_record(mappings, &source));
    serde_json::to_string_pretty(&mapped).map_err(|e| PreviewError::InvalidJson(e.to_string()))
}
