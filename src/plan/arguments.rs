//! The delimited `Key=Value` argument grammar.
//!
//! Every test kind encodes its parameters as a single raw string: fields
//! separated by `|`, each field split on the first `=` into a key and a
//! value, whitespace around both insignificant. This module is the single
//! implementation of that convention; the kind validators all parse through
//! [`parse`] so the delimiters stay centralized.
//!
//! Parsing is pure: no IO, no state. Semantic interpretation of the resulting
//! map belongs to the per-kind validators in [`super::kind`].

use std::collections::BTreeMap;

use thiserror::Error;

/// Separates `Key=Value` fields within a raw argument string, and test ids
/// within a group's member list.
pub const FIELD_SEPARATOR: char = '|';

/// Separates a key from its value within one field. Only the first occurrence
/// splits; values may themselves contain `=`.
pub const KEY_VALUE_SEPARATOR: char = '=';

/// Parsed argument mapping, keys unique within one test definition.
pub type ArgumentMap = BTreeMap<String, String>;

/// A raw argument string that does not follow the grammar.
///
/// Carries only the offending fragment; the kind validators wrap this with
/// the owning test's id and kind (see [`super::error::PlanError`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RawArgumentError {
    #[error("field '{field}' has no '='; expected 'Key=Value'")]
    MissingSeparator { field: String },

    #[error("field '{field}' has an empty key")]
    EmptyKey { field: String },

    #[error("key '{key}' appears more than once")]
    DuplicateKey { key: String },
}

/// Split a raw argument string into its key/value mapping.
///
/// Fields are split on [`FIELD_SEPARATOR`], each field on the first
/// [`KEY_VALUE_SEPARATOR`], and both halves are trimmed. Fails on a field
/// with no `=`, an empty key, or a repeated key.
pub fn parse(raw: &str) -> Result<ArgumentMap, RawArgumentError> {
    let mut map = ArgumentMap::new();
    for field in raw.split(FIELD_SEPARATOR) {
        let Some((key, value)) = field.split_once(KEY_VALUE_SEPARATOR) else {
            return Err(RawArgumentError::MissingSeparator {
                field: field.trim().to_string(),
            });
        };
        let key = key.trim();
        let value = value.trim();
        if key.is_empty() {
            return Err(RawArgumentError::EmptyKey {
                field: field.trim().to_string(),
            });
        }
        if map.insert(key.to_string(), value.to_string()).is_some() {
            return Err(RawArgumentError::DuplicateKey {
                key: key.to_string(),
            });
        }
    }
    Ok(map)
}

/// Re-serialize a mapping with the canonical delimiters.
///
/// The output parses back to an equivalent mapping; field order follows the
/// map's key order, not the original authoring order.
pub fn render(map: &ArgumentMap) -> String {
    map.iter()
        .map(|(key, value)| format!("{key}{KEY_VALUE_SEPARATOR}{value}"))
        .collect::<Vec<_>>()
        .join(&FIELD_SEPARATOR.to_string())
}
