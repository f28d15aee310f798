//! The closed failure taxonomy for plan loading and group resolution.
//!
//! Every failure here is raised at configuration-load or group-selection time
//! and is never locally recovered: a malformed test definition must block the
//! run rather than risk executing a misconfigured hardware procedure. Messages
//! carry the test id, the kind, and the actual value received so an authoring
//! error can be fixed without consulting source code.

use thiserror::Error;

use super::arguments::RawArgumentError;

/// Errors produced while validating test definitions or resolving a group.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// A raw argument field did not follow the `Key=Value` grammar.
    #[error("test '{test_id}' ({kind}): malformed arguments '{raw}': {source}")]
    MalformedArgument {
        test_id: String,
        kind: &'static str,
        raw: String,
        #[source]
        source: RawArgumentError,
    },

    /// The declared kind tag matches no known validator.
    #[error("test '{test_id}': unknown kind '{kind}'; known kinds are {known}")]
    UnknownKind {
        test_id: String,
        kind: String,
        known: String,
    },

    /// The number of key/value pairs does not match the kind's arity.
    #[error(
        "test '{test_id}' ({kind}): expected {expected} key=value argument(s), got {actual}\n  example: '{example}'\n  actual:  '{raw}'"
    )]
    InvalidArgumentCount {
        test_id: String,
        kind: &'static str,
        expected: String,
        actual: usize,
        example: &'static str,
        raw: String,
    },

    /// A mandatory key is absent from the argument mapping.
    #[error("test '{test_id}' ({kind}): missing required key '{key}' in '{raw}'")]
    MissingRequiredKey {
        test_id: String,
        kind: &'static str,
        key: &'static str,
        raw: String,
    },

    /// A value failed the kind's semantic validation (non-numeric bound,
    /// inverted bounds, nonexistent path).
    #[error("test '{test_id}' ({kind}): {detail}")]
    InvalidValueFormat {
        test_id: String,
        kind: &'static str,
        detail: String,
    },

    /// A group references a test identifier absent from the registry.
    #[error("group '{group_id}' references test '{test_id}', which is not defined in the plan")]
    UndefinedTestReference { group_id: String, test_id: String },
}
