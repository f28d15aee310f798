//! Ordered, fail-fast resolution of an operator-selected group.
//!
//! A group names its members as a `|`-delimited identifier list. Resolution
//! is a single linear scan: trim each entry, look it up in the registry, and
//! stop at the first unknown reference. A group referencing a nonexistent
//! test is an authoring error that must block the entire run, not silently
//! skip a step, so no partial selection is ever returned.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::GroupDefinition;

use super::arguments::FIELD_SEPARATOR;
use super::error::PlanError;
use super::registry::{Test, TestRegistry};

/// The ordered subset of tests belonging to one selected group.
///
/// Holds its own copies of the registry's tests: a selection is created
/// fresh per operator choice and discarded after the run it serves.
#[derive(Debug, Clone, Serialize)]
pub struct GroupSelection {
    group_id: String,
    description: String,
    tests: IndexMap<String, Test>,
    label_width: usize,
}

impl GroupSelection {
    /// Resolve a group's member list against the full registry.
    ///
    /// Member order is preserved; a duplicate member collapses onto its first
    /// position and is surfaced as a warning. `label_width` is the longest
    /// member identifier length plus one, for aligned log output.
    pub fn resolve(group: &GroupDefinition, registry: &TestRegistry) -> Result<Self, PlanError> {
        let mut tests = IndexMap::new();
        let mut width = 0usize;
        for member in group.tests().split(FIELD_SEPARATOR) {
            let id = member.trim();
            if id.len() > width {
                width = id.len();
            }
            let Some(test) = registry.get(id) else {
                return Err(PlanError::UndefinedTestReference {
                    group_id: group.id().to_string(),
                    test_id: id.to_string(),
                });
            };
            if tests.insert(id.to_string(), test.clone()).is_some() {
                warn!(group = group.id(), test = id, "duplicate group member collapsed");
            }
        }
        debug!(group = group.id(), tests = tests.len(), "group resolved");
        Ok(Self {
            group_id: group.id().to_string(),
            description: group.description().to_string(),
            tests,
            // Leave room for a trailing space when labels are padded.
            label_width: width + 1,
        })
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Longest member identifier length plus one.
    pub fn label_width(&self) -> usize {
        self.label_width
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Test> {
        self.tests.get(id)
    }

    /// Tests in the group's declared order.
    pub fn tests(&self) -> impl Iterator<Item = &Test> {
        self.tests.values()
    }

    /// Identifiers in the group's declared order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.tests.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlanConfig;

    fn fixture() -> (PlanConfig, TestRegistry) {
        let config = PlanConfig::from_toml_str(
            r#"
            [[test]]
            id = "T1"
            description = "Operator prompt"
            revision = "A"
            kind = "Textual"
            args = "Text=Hello"

            [[test]]
            id = "T2"
            description = "Rail voltage"
            revision = "A"
            kind = "Numerical"
            args = "High=5|Low=1|Unit=V|UnitType=DC"

            [[group]]
            id = "G1"
            description = "Smoke"
            tests = " T1 | T2 "

            [[group]]
            id = "G2"
            description = "Broken"
            tests = "T1|T3"

            [[group]]
            id = "G3"
            description = "Repeats"
            tests = "T2|T1|T2"
            "#,
        )
        .unwrap();
        let registry = TestRegistry::load(&config).unwrap();
        (config, registry)
    }

    #[test]
    fn preserves_declared_order_and_trims_members() {
        let (config, registry) = fixture();
        let selection = GroupSelection::resolve(config.group("G1").unwrap(), &registry).unwrap();
        assert_eq!(selection.ids().collect::<Vec<_>>(), ["T1", "T2"]);
        assert_eq!(selection.label_width(), 3);
        assert_eq!(selection.get("T2").unwrap().kind_name(), "Numerical");
    }

    #[test]
    fn fails_fast_on_an_undefined_reference() {
        let (config, registry) = fixture();
        let err = GroupSelection::resolve(config.group("G2").unwrap(), &registry).unwrap_err();
        assert_eq!(
            err,
            PlanError::UndefinedTestReference {
                group_id: "G2".to_string(),
                test_id: "T3".to_string(),
            }
        );
    }

    #[test]
    fn duplicate_members_collapse_onto_first_position() {
        let (config, registry) = fixture();
        let selection = GroupSelection::resolve(config.group("G3").unwrap(), &registry).unwrap();
        assert_eq!(selection.ids().collect::<Vec<_>>(), ["T2", "T1"]);
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn empty_member_entry_reads_as_an_undefined_reference() {
        let config = PlanConfig::from_toml_str(
            r#"
            [[test]]
            id = "T1"
            description = ""
            revision = ""
            kind = "Textual"
            args = "Text=hi"

            [[group]]
            id = "G4"
            description = ""
            tests = "T1|"
            "#,
        )
        .unwrap();
        let registry = TestRegistry::load(&config).unwrap();
        let err = GroupSelection::resolve(config.group("G4").unwrap(), &registry).unwrap_err();
        assert_eq!(
            err,
            PlanError::UndefinedTestReference {
                group_id: "G4".to_string(),
                test_id: String::new(),
            }
        );
    }
}
