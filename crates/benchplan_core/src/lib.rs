//! Provide the shared, pure test-kind vocabulary for the benchplan engine.
//!
//! This crate is intentionally small and dependency-light. It contains the
//! canonical vocabulary both:
//! - the plan engine uses to dispatch a configured kind tag to its validator, and
//! - tooling/diagnostics use to render consistent spellings, required-key lists,
//!   and worked examples.
//!
//! ## Notes
//!
//! - This is a "vocabulary core" crate: **no IO**, no global state, and no
//!   engine-specific types. Validation semantics (filesystem checks, numeric
//!   bounds) live in the `benchplan` crate; this crate only describes the kinds.

pub mod kinds;
