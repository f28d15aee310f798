#![forbid(unsafe_code)]
//! benchplan - declarative bench-test plan validation and group resolution.
//!
//! Operators describe named test procedures in a TOML plan file; each
//! procedure declares a kind that selects one of a few small typed argument
//! grammars. The engine validates every declared procedure at load time,
//! before any instrument hardware is touched, then materializes an ordered,
//! named subset of procedures (a group) for execution by the bench runner.
//!
//! This crate defines, validates, and selects tests; it does not execute
//! them, talk to instruments, or persist results.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or_else` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents an engine bug (logic error), use `.expect("INVARIANT: reason")` with a
//!   clear explanation.

pub mod cli;
pub mod config;
pub mod plan;

pub use config::{ConfigError, GroupDefinition, PlanConfig, TestDefinition};
pub use plan::{GroupSelection, Kind, PlanError, Test, TestRegistry};
