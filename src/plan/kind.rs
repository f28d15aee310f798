//! Per-kind argument validators and the string-tag dispatcher.
//!
//! A test definition declares its kind as a plain string; [`Kind::resolve`]
//! maps that tag onto one of the closed set of variants and runs the
//! variant's validator against the raw argument string. Validation order is
//! the same for every kind: grammar parse, arity check, per-key presence,
//! then variant-specific semantic checks.
//!
//! The filesystem existence checks for [`InSystemProgramming`] are a
//! deliberate synchronous pre-flight: a missing firmware image or programmer
//! executable surfaces at plan-load time, before any instrument session
//! opens.

use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use benchplan_core::kinds::{self, KindId};
use serde::Serialize;

use super::arguments::{self, ArgumentMap};
use super::error::PlanError;

/// A validated, strongly-typed kind object, owned by exactly one test.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Kind {
    Customizable(Customizable),
    InSystemProgramming(InSystemProgramming),
    Numerical(Numerical),
    Textual(Textual),
}

impl Kind {
    /// Dispatch a configured kind tag to its validator.
    ///
    /// An unknown tag is a configuration-time hard stop: the surrounding
    /// system cannot safely run a test whose kind it does not recognize.
    /// A known tag delegates to the variant's validator and propagates its
    /// failure unchanged.
    pub fn resolve(kind: &str, test_id: &str, raw: &str) -> Result<Kind, PlanError> {
        match kinds::from_str(kind) {
            Some(KindId::Customizable) => Customizable::from_raw(test_id, raw).map(Kind::Customizable),
            Some(KindId::InSystemProgramming) => {
                InSystemProgramming::from_raw(test_id, raw).map(Kind::InSystemProgramming)
            }
            Some(KindId::Numerical) => Numerical::from_raw(test_id, raw).map(Kind::Numerical),
            Some(KindId::Textual) => Textual::from_raw(test_id, raw).map(Kind::Textual),
            None => Err(PlanError::UnknownKind {
                test_id: test_id.to_string(),
                kind: kind.to_string(),
                known: kinds::canonical_list(),
            }),
        }
    }

    pub fn id(&self) -> KindId {
        match self {
            Kind::Customizable(_) => KindId::Customizable,
            Kind::InSystemProgramming(_) => KindId::InSystemProgramming,
            Kind::Numerical(_) => KindId::Numerical,
            Kind::Textual(_) => KindId::Textual,
        }
    }

    /// Canonical spelling of this kind, as written in plan files.
    pub fn name(&self) -> &'static str {
        kinds::as_str(self.id())
    }
}

/// Free-form key/value arguments, kept verbatim for the test program.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customizable {
    pub arguments: ArgumentMap,
}

impl Customizable {
    pub fn from_raw(test_id: &str, raw: &str) -> Result<Self, PlanError> {
        const ID: KindId = KindId::Customizable;
        let arguments = parse_arguments(ID, test_id, raw)?;
        check_arity(ID, test_id, &arguments, raw)?;
        Ok(Self { arguments })
    }
}

/// In-system-programming step: programmer executable plus expected result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InSystemProgramming {
    /// Normalized with a trailing path separator.
    pub executable_folder: String,
    pub executable: String,
    pub executable_arguments: String,
    pub expected_result: String,
}

impl InSystemProgramming {
    pub fn from_raw(test_id: &str, raw: &str) -> Result<Self, PlanError> {
        const ID: KindId = KindId::InSystemProgramming;
        let map = parse_arguments(ID, test_id, raw)?;
        check_arity(ID, test_id, &map, raw)?;
        let folder = require(&map, ID, test_id, "ExecutableFolder", raw)?;
        let executable = require(&map, ID, test_id, "Executable", raw)?;
        let executable_arguments = require(&map, ID, test_id, "ExecutableArguments", raw)?;
        let expected_result = require(&map, ID, test_id, "ExpectedResult", raw)?;

        let mut executable_folder = folder.to_string();
        if !executable_folder.ends_with(MAIN_SEPARATOR) {
            executable_folder.push(MAIN_SEPARATOR);
        }
        if !Path::new(&executable_folder).is_dir() {
            return Err(invalid_value(
                ID,
                test_id,
                format!("ExecutableFolder '{executable_folder}' does not exist"),
            ));
        }
        let executable_path = format!("{executable_folder}{executable}");
        if !Path::new(&executable_path).is_file() {
            return Err(invalid_value(
                ID,
                test_id,
                format!("Executable '{executable_path}' does not exist"),
            ));
        }

        Ok(Self {
            executable_folder,
            executable: executable.to_string(),
            executable_arguments: executable_arguments.to_string(),
            expected_result: expected_result.to_string(),
        })
    }

    /// Full path to the programmer executable.
    pub fn executable_path(&self) -> PathBuf {
        PathBuf::from(format!("{}{}", self.executable_folder, self.executable))
    }
}

/// Numeric limit check: a measurement must land within `[low, high]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Numerical {
    pub high: f64,
    pub low: f64,
    pub unit: String,
    pub unit_type: String,
}

impl Numerical {
    pub fn from_raw(test_id: &str, raw: &str) -> Result<Self, PlanError> {
        const ID: KindId = KindId::Numerical;
        let map = parse_arguments(ID, test_id, raw)?;
        check_arity(ID, test_id, &map, raw)?;
        let high_raw = require(&map, ID, test_id, "High", raw)?;
        let low_raw = require(&map, ID, test_id, "Low", raw)?;
        let unit = require(&map, ID, test_id, "Unit", raw)?;
        let unit_type = require(&map, ID, test_id, "UnitType", raw)?;

        let high = parse_bound(test_id, "High", high_raw)?;
        let low = parse_bound(test_id, "Low", low_raw)?;
        if low > high {
            return Err(invalid_value(
                ID,
                test_id,
                format!("Low '{low}' is greater than High '{high}'"),
            ));
        }

        Ok(Self {
            high,
            low,
            unit: unit.to_string(),
            unit_type: unit_type.to_string(),
        })
    }

    /// Whether a measured value lands within the configured bounds.
    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }
}

/// Operator-facing fixed text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Textual {
    pub text: String,
}

impl Textual {
    pub fn from_raw(test_id: &str, raw: &str) -> Result<Self, PlanError> {
        const ID: KindId = KindId::Textual;
        let map = parse_arguments(ID, test_id, raw)?;
        check_arity(ID, test_id, &map, raw)?;
        let text = require(&map, ID, test_id, "Text", raw)?;
        Ok(Self {
            text: text.to_string(),
        })
    }
}

// ============================================================================
// Shared validation steps
// ============================================================================

fn parse_arguments(id: KindId, test_id: &str, raw: &str) -> Result<ArgumentMap, PlanError> {
    arguments::parse(raw).map_err(|source| PlanError::MalformedArgument {
        test_id: test_id.to_string(),
        kind: kinds::as_str(id),
        raw: raw.to_string(),
        source,
    })
}

fn check_arity(id: KindId, test_id: &str, map: &ArgumentMap, raw: &str) -> Result<(), PlanError> {
    let info = kinds::info_for(id);
    let expected = match info.arity {
        Some(arity) if map.len() != arity => format!("exactly {arity}"),
        None if map.is_empty() => "1 or more".to_string(),
        _ => return Ok(()),
    };
    Err(PlanError::InvalidArgumentCount {
        test_id: test_id.to_string(),
        kind: info.canonical,
        expected,
        actual: map.len(),
        example: info.example,
        raw: raw.to_string(),
    })
}

fn require<'m>(
    map: &'m ArgumentMap,
    id: KindId,
    test_id: &str,
    key: &'static str,
    raw: &str,
) -> Result<&'m str, PlanError> {
    map.get(key)
        .map(String::as_str)
        .ok_or_else(|| PlanError::MissingRequiredKey {
            test_id: test_id.to_string(),
            kind: kinds::as_str(id),
            key,
            raw: raw.to_string(),
        })
}

fn parse_bound(test_id: &str, key: &'static str, value: &str) -> Result<f64, PlanError> {
    let parsed = value.parse::<f64>().map_err(|_| {
        invalid_value(
            KindId::Numerical,
            test_id,
            format!("'{value}' is not a valid number for key '{key}'"),
        )
    })?;
    // NaN/infinity would make the low <= high invariant unenforceable.
    if !parsed.is_finite() {
        return Err(invalid_value(
            KindId::Numerical,
            test_id,
            format!("'{value}' is not a finite number for key '{key}'"),
        ));
    }
    Ok(parsed)
}

fn invalid_value(id: KindId, test_id: &str, detail: String) -> PlanError {
    PlanError::InvalidValueFormat {
        test_id: test_id.to_string(),
        kind: kinds::as_str(id),
        detail,
    }
}
