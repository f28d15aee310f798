//! TOML plan-file loading.
//!
//! A plan file declares an ordered collection of `[[test]]` records (five
//! string fields: id, description, revision, kind, args) and an ordered
//! collection of `[[group]]` records (id, description, `|`-delimited member
//! list). This module owns deserialization and the structural checks that
//! belong to the configuration store: non-empty identifiers and id
//! uniqueness. Kind and argument validation belong to the plan engine.
//!
//! There is no ambient configuration access: callers construct a
//! [`PlanConfig`] explicitly and pass it to [`crate::plan::TestRegistry::load`].

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors surfaced while reading or structurally validating a plan file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read plan file '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse plan file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("test definition #{index} has an empty id")]
    EmptyTestId { index: usize },

    #[error("duplicate test id '{id}'")]
    DuplicateTestId { id: String },

    #[error("group definition #{index} has an empty id")]
    EmptyGroupId { index: usize },

    #[error("duplicate group id '{id}'")]
    DuplicateGroupId { id: String },
}

/// One raw `[[test]]` record, unvalidated beyond its shape.
///
/// Field accessors trim, so stray whitespace in hand-edited plan files never
/// leaks into identifiers or raw argument strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TestDefinition {
    id: String,
    description: String,
    revision: String,
    kind: String,
    args: String,
}

impl TestDefinition {
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        revision: impl Into<String>,
        kind: impl Into<String>,
        args: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            revision: revision.into(),
            kind: kind.into(),
            args: args.into(),
        }
    }

    pub fn id(&self) -> &str {
        self.id.trim()
    }

    pub fn description(&self) -> &str {
        self.description.trim()
    }

    pub fn revision(&self) -> &str {
        self.revision.trim()
    }

    pub fn kind(&self) -> &str {
        self.kind.trim()
    }

    pub fn args(&self) -> &str {
        self.args.trim()
    }
}

/// One raw `[[group]]` record: an ordered, `|`-delimited member list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupDefinition {
    id: String,
    #[serde(default)]
    description: String,
    tests: String,
}

impl GroupDefinition {
    pub fn new(id: impl Into<String>, description: impl Into<String>, tests: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            tests: tests.into(),
        }
    }

    pub fn id(&self) -> &str {
        self.id.trim()
    }

    pub fn description(&self) -> &str {
        self.description.trim()
    }

    /// The raw member list, order significant.
    pub fn tests(&self) -> &str {
        self.tests.trim()
    }
}

/// A structurally valid plan: tests and groups in declaration order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanConfig {
    #[serde(default, rename = "test")]
    tests: Vec<TestDefinition>,
    #[serde(default, rename = "group")]
    groups: Vec<GroupDefinition>,
}

impl PlanConfig {
    /// Read and structurally validate a plan file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parse and structurally validate plan text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: PlanConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (index, test) in self.tests.iter().enumerate() {
            if test.id().is_empty() {
                return Err(ConfigError::EmptyTestId { index: index + 1 });
            }
            if !seen.insert(test.id().to_string()) {
                return Err(ConfigError::DuplicateTestId {
                    id: test.id().to_string(),
                });
            }
        }
        let mut seen = HashSet::new();
        for (index, group) in self.groups.iter().enumerate() {
            if group.id().is_empty() {
                return Err(ConfigError::EmptyGroupId { index: index + 1 });
            }
            if !seen.insert(group.id().to_string()) {
                return Err(ConfigError::DuplicateGroupId {
                    id: group.id().to_string(),
                });
            }
        }
        debug!(tests = self.tests.len(), groups = self.groups.len(), "plan config validated");
        Ok(())
    }

    /// Declared tests, in declaration order.
    pub fn tests(&self) -> &[TestDefinition] {
        &self.tests
    }

    /// Declared groups, in declaration order.
    pub fn groups(&self) -> &[GroupDefinition] {
        &self.groups
    }

    /// Look up a group by trimmed identifier.
    pub fn group(&self, id: &str) -> Option<&GroupDefinition> {
        self.groups.iter().find(|g| g.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tests_and_groups_in_order() {
        let config = PlanConfig::from_toml_str(
            r#"
            [[test]]
            id = " T1 "
            description = "first"
            revision = "A"
            kind = "Textual"
            args = " Text=hi "

            [[test]]
            id = "T2"
            description = "second"
            revision = "A"
            kind = "Textual"
            args = "Text=bye"

            [[group]]
            id = "G1"
            tests = "T1|T2"
            "#,
        )
        .unwrap();

        assert_eq!(config.tests().len(), 2);
        // Accessors trim.
        assert_eq!(config.tests()[0].id(), "T1");
        assert_eq!(config.tests()[0].args(), "Text=hi");
        assert_eq!(config.group("G1").unwrap().tests(), "T1|T2");
        // Group description is optional.
        assert_eq!(config.group("G1").unwrap().description(), "");
    }

    #[test]
    fn rejects_duplicate_test_ids() {
        let err = PlanConfig::from_toml_str(
            r#"
            [[test]]
            id = "T1"
            description = ""
            revision = ""
            kind = "Textual"
            args = "Text=a"

            [[test]]
            id = " T1 "
            description = ""
            revision = ""
            kind = "Textual"
            args = "Text=b"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateTestId { id } if id == "T1"));
    }

    #[test]
    fn rejects_empty_test_ids() {
        let err = PlanConfig::from_toml_str(
            r#"
            [[test]]
            id = "  "
            description = ""
            revision = ""
            kind = "Textual"
            args = "Text=a"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::EmptyTestId { index: 1 }));
    }

    #[test]
    fn rejects_duplicate_group_ids() {
        let err = PlanConfig::from_toml_str(
            r#"
            [[group]]
            id = "G1"
            tests = "T1"

            [[group]]
            id = "G1"
            tests = "T2"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateGroupId { id } if id == "G1"));
    }

    #[test]
    fn rejects_missing_required_test_fields() {
        // `revision` omitted entirely.
        let err = PlanConfig::from_toml_str(
            r#"
            [[test]]
            id = "T1"
            description = ""
            kind = "Textual"
            args = "Text=a"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn empty_plan_is_structurally_valid() {
        let config = PlanConfig::from_toml_str("").unwrap();
        assert!(config.tests().is_empty());
        assert!(config.groups().is_empty());
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = PlanConfig::from_path(Path::new("/no/such/plan.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("/no/such/plan.toml"));
    }
}
