//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::path::Path;

use tracing::info;

use crate::config::PlanConfig;
use crate::plan::{GroupSelection, TestRegistry};

use super::{CliError, CliResult, ExitCode};

/// Load a plan file and build the validated test registry.
fn load_plan(path: &Path) -> CliResult<(PlanConfig, TestRegistry)> {
    let config = PlanConfig::from_path(path).map_err(|e| CliError::failure(render_chain(&e)))?;
    let registry = TestRegistry::load(&config).map_err(|e| CliError::failure(e.to_string()))?;
    Ok((config, registry))
}

/// Render an error with its full cause chain, one cause per line.
fn render_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(&format!("\n  caused by: {cause}"));
        source = cause.source();
    }
    message
}

/// `check`: validate every test definition and resolve every declared group.
pub fn check(plan: &Path) -> CliResult<ExitCode> {
    let (config, registry) = load_plan(plan)?;
    for group in config.groups() {
        let selection = GroupSelection::resolve(group, &registry)
            .map_err(|e| CliError::failure(e.to_string()))?;
        info!(group = group.id(), tests = selection.len(), "group resolved");
    }
    println!(
        "plan OK: {} test(s), {} group(s)",
        registry.len(),
        config.groups().len()
    );
    Ok(ExitCode::SUCCESS)
}

/// `groups`: list declared groups with member counts.
pub fn groups(plan: &Path) -> CliResult<ExitCode> {
    let (config, registry) = load_plan(plan)?;
    let width = config
        .groups()
        .iter()
        .map(|g| g.id().len())
        .max()
        .unwrap_or(0)
        + 1;
    for group in config.groups() {
        let selection = GroupSelection::resolve(group, &registry)
            .map_err(|e| CliError::failure(e.to_string()))?;
        println!(
            "{:<width$} {} test(s)  {}",
            group.id(),
            selection.len(),
            group.description(),
        );
    }
    Ok(ExitCode::SUCCESS)
}

/// `show`: resolve one group and print its ordered member table.
pub fn show(plan: &Path, group_id: &str, json: bool) -> CliResult<ExitCode> {
    let (config, registry) = load_plan(plan)?;
    let Some(group) = config.group(group_id) else {
        return Err(CliError::failure(format!(
            "group '{group_id}' is not defined in the plan"
        )));
    };
    let selection =
        GroupSelection::resolve(group, &registry).map_err(|e| CliError::failure(e.to_string()))?;

    if json {
        let rendered = serde_json::to_string_pretty(&selection)
            .map_err(|e| CliError::failure(format!("failed to render selection: {e}")))?;
        println!("{rendered}");
        return Ok(ExitCode::SUCCESS);
    }

    println!("group '{}': {}", selection.group_id(), selection.description());
    for test in selection.tests() {
        println!(
            "{:<width$} {:<20} {}",
            test.id,
            test.kind_name(),
            test.description,
            width = selection.label_width()
        );
    }
    Ok(ExitCode::SUCCESS)
}
