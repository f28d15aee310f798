//! Define the test-kind vocabulary for the benchplan engine.
//!
//! This module is the single source of truth for test kinds: a stable identifier
//! ([`KindId`]) plus a const metadata table ([`KINDS`]) that records canonical
//! spellings, required argument keys, arity, and a worked example of well-formed
//! raw arguments.
//!
//! The design goal is to avoid stringly-typed kind checks scattered across the
//! engine. Callers work with [`KindId`] and look up spellings/metadata via the
//! registry table; the configured tag is resolved once, via [`from_str`].
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**: `"numerical"` is not a kind.
//! - This registry is intentionally **pure** (no IO, no side effects). The
//!   engine's validators own the semantic checks; this table only names what
//!   they expect.
//!
//! ## Examples
//! ```rust
//! use benchplan_core::kinds::{self, KindId};
//!
//! assert_eq!(kinds::from_str("Numerical"), Some(KindId::Numerical));
//! assert_eq!(kinds::as_str(KindId::Numerical), "Numerical");
//! assert_eq!(kinds::required_keys(KindId::Textual), &["Text"]);
//! ```

/// Stable identifier for every test kind the engine can validate.
///
/// The vocabulary is closed: a configured kind tag either resolves to one of
/// these variants or the definition is rejected outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KindId {
    /// Free-form key/value arguments, kept verbatim.
    Customizable,
    /// In-system-programming step: external programmer executable plus
    /// expected result code.
    InSystemProgramming,
    /// Numeric limit check: high/low bounds with unit metadata.
    Numerical,
    /// Operator-facing free text.
    Textual,
}

/// Metadata for a test kind.
///
/// ## Notes
/// - `canonical` is the spelling expected in plan files.
/// - `required_keys` is empty for kinds with a free key set.
/// - `arity` is `None` where any count of at least one pair is accepted.
/// - `example` is a complete, well-formed raw argument string; diagnostics
///   quote it verbatim so an authoring error can be fixed without consulting
///   source code.
#[derive(Debug, Clone, Copy)]
pub struct KindInfo {
    pub id: KindId,
    pub canonical: &'static str,
    pub description: &'static str,
    pub required_keys: &'static [&'static str],
    pub arity: Option<usize>,
    pub example: &'static str,
}

/// Registry of all test kinds.
pub const KINDS: &[KindInfo] = &[
    info(
        KindId::Customizable,
        "Customizable",
        "Free-form key/value arguments, interpreted by the test program",
        &[],
        None,
        "Fixture=FX-101|Polarity=Reverse|DwellSeconds=2",
    ),
    info(
        KindId::InSystemProgramming,
        "InSystemProgramming",
        "Program a device in-system via an external programmer executable",
        &["ExecutableFolder", "Executable", "ExecutableArguments", "ExpectedResult"],
        Some(4),
        "ExecutableFolder=/opt/programmer/bin|Executable=flashload|ExecutableArguments=--image u1_firmware.hex|ExpectedResult=0xAC0E",
    ),
    info(
        KindId::Numerical,
        "Numerical",
        "Compare a measurement against low/high bounds",
        &["High", "Low", "Unit", "UnitType"],
        Some(4),
        "High=0.004|Low=0.002|Unit=A|UnitType=DC",
    ),
    info(
        KindId::Textual,
        "Textual",
        "Display or record a fixed text value",
        &["Text"],
        Some(1),
        "Text=The quick brown fox jumps over the lazy dog.",
    ),
];

/// Canonical spelling.
pub fn as_str(id: KindId) -> &'static str {
    info_for(id).canonical
}

/// Required argument keys, in diagnostic order.
pub fn required_keys(id: KindId) -> &'static [&'static str] {
    info_for(id).required_keys
}

/// Worked example of well-formed raw arguments.
pub fn example(id: KindId) -> &'static str {
    info_for(id).example
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a
///   programming error).
pub fn info_for(id: KindId) -> &'static KindInfo {
    KINDS.iter().find(|k| k.id == id).expect("kind info missing")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KindId)` if the spelling matches this registry.
/// - `None` otherwise.
///
/// ## Notes
/// - Matching is **case-sensitive**; there are no aliases.
pub fn from_str(s: &str) -> Option<KindId> {
    KINDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

/// Comma-separated list of all canonical spellings, for diagnostics.
pub fn canonical_list() -> String {
    KINDS
        .iter()
        .map(|k| k.canonical)
        .collect::<Vec<_>>()
        .join(", ")
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KindId,
    canonical: &'static str,
    description: &'static str,
    required_keys: &'static [&'static str],
    arity: Option<usize>,
    example: &'static str,
) -> KindInfo {
    KindInfo {
        id,
        canonical,
        description,
        required_keys,
        arity,
        example,
    }
}
