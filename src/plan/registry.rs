//! The full universe of validated tests, keyed by identifier.
//!
//! [`TestRegistry::load`] walks every declared test definition, dispatches
//! its kind through [`Kind::resolve`], and stores the resulting [`Test`] in
//! declaration order. Construction is all-or-nothing: the first invalid
//! definition aborts the load and no partial registry is ever returned.
//!
//! Duplicate identifiers are rejected by the configuration layer before this
//! module runs (a uniqueness constraint on load, not an engine concern).

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::{PlanConfig, TestDefinition};

use super::error::PlanError;
use super::kind::Kind;

/// A resolved test: its descriptive fields plus the validated kind object.
///
/// `measurement` and `result` stay `None` until the execution engine fills
/// them in; the result value space is an externally-owned event-code string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Test {
    pub id: String,
    pub description: String,
    pub revision: String,
    pub kind: Kind,
    pub measurement: Option<String>,
    pub result: Option<String>,
}

impl Test {
    /// Validate one raw definition into a resolved test.
    pub fn from_definition(def: &TestDefinition) -> Result<Self, PlanError> {
        let kind = Kind::resolve(def.kind(), def.id(), def.args())?;
        Ok(Self {
            id: def.id().to_string(),
            description: def.description().to_string(),
            revision: def.revision().to_string(),
            kind,
            measurement: None,
            result: None,
        })
    }

    /// Canonical spelling of this test's kind.
    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }
}

/// All declared tests, keyed by identifier in declaration order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TestRegistry {
    tests: IndexMap<String, Test>,
}

impl TestRegistry {
    /// Validate every declared test definition and build the registry.
    ///
    /// Expected to run once per process, but idempotent if invoked again:
    /// it reads the given config fresh and caches nothing across calls.
    pub fn load(config: &PlanConfig) -> Result<Self, PlanError> {
        let mut tests = IndexMap::with_capacity(config.tests().len());
        for def in config.tests() {
            let test = Test::from_definition(def)?;
            debug!(test = %test.id, kind = test.kind_name(), "validated test definition");
            tests.insert(test.id.clone(), test);
        }
        info!(tests = tests.len(), "test registry loaded");
        Ok(Self { tests })
    }

    pub fn get(&self, id: &str) -> Option<&Test> {
        self.tests.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tests.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Tests in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Test> {
        self.tests.values()
    }

    /// Identifiers in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.tests.keys().map(String::as_str)
    }
}
