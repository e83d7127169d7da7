//! Package installation through the detected system package manager.
//!
//! Command construction is pure and covered by tests; only [`Installer::run`]
//! actually spawns processes, and it goes through the [`CommandRunner`] seam
//! so tests can record instead of install.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::catalog::{Catalog, ToolSpec};
use crate::error::{Result, SetupError};
use crate::exec::CommandRunner;
use crate::platform::PlatformContext;
use crate::report::StepResult;
use crate::utils::render_command;

/// Builds the exact argv that installs `tool` on this platform.
///
/// Fails when no manager was detected or when the tool has no package for
/// the detected manager. Never touches the system.
pub fn build_install_command(
    catalog: &Catalog,
    tool: &ToolSpec,
    ctx: &PlatformContext,
) -> Result<Vec<String>> {
    let manager = ctx
        .manager
        .ok_or_else(|| SetupError::no_package_manager(ctx.os))?;
    let package = catalog
        .package_name(tool, manager)
        .ok_or_else(|| SetupError::unsupported_tool(tool.id, manager))?;
    Ok(manager.install_command(package))
}

/// Runs the install phase for a list of tools.
pub struct Installer<'a> {
    catalog: &'a Catalog,
    runner: &'a dyn CommandRunner,
}

impl<'a> Installer<'a> {
    pub fn new(catalog: &'a Catalog, runner: &'a dyn CommandRunner) -> Self {
        Self { catalog, runner }
    }

    /// Installs every tool in order, collecting one result per tool.
    ///
    /// A missing package manager aborts the whole phase up front; any
    /// failure for an individual tool is recorded and the loop continues.
    /// With `dry_run` set, no process is spawned for any tool.
    pub async fn run(
        &self,
        tools: &[ToolSpec],
        ctx: &PlatformContext,
        dry_run: bool,
    ) -> Result<Vec<StepResult>> {
        if ctx.manager.is_none() {
            return Err(SetupError::no_package_manager(ctx.os));
        }
        let mut results = Vec::with_capacity(tools.len());
        for tool in tools {
            let result = self.install_tool(tool, ctx, dry_run).await;
            result.print_line();
            results.push(result);
        }
        Ok(results)
    }

    async fn install_tool(&self, tool: &ToolSpec, ctx: &PlatformContext, dry_run: bool) -> StepResult {
        let argv = match build_install_command(self.catalog, tool, ctx) {
            Ok(argv) => argv,
            Err(e) => {
                tracing::warn!("skipping {}: {}", tool.id, e);
                return StepResult::skipped(tool.id, None, e.to_string());
            }
        };
        // Not named `display`: tracing macros bring `tracing::field::display`
        // into scope around their arguments, shadowing a local of that name.
        let rendered = render_command(&argv);
        if dry_run {
            return StepResult::skipped(tool.id, Some(rendered), "dry run");
        }
        tracing::info!("installing {} with '{}'", tool.id, rendered);
        let spinner = install_spinner(tool.name);
        let outcome = self.runner.run(&argv).await;
        spinner.finish_and_clear();
        match outcome {
            Ok(out) if out.success() => {
                let result = StepResult::success(tool.id, Some(rendered));
                match path_probe_note(tool) {
                    Some(note) => result.with_note(note),
                    None => result,
                }
            }
            Ok(out) => StepResult::failed(tool.id, Some(rendered), out.diagnostic()),
            Err(e) => StepResult::failed(tool.id, Some(rendered), format!("failed to start: {}", e)),
        }
    }
}

fn install_spinner(name: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner().with_message(format!("installing {}...", name));
    spinner.set_style(
        ProgressStyle::with_template("  {spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

/// After a real install, report whether one of the tool's binaries landed
/// on PATH. Purely informational; managers on Windows often need a new
/// shell before PATH catches up.
fn path_probe_note(tool: &ToolSpec) -> Option<String> {
    if tool.path_probes.is_empty() {
        return None;
    }
    for probe in tool.path_probes {
        if which::which(probe).is_ok() {
            return Some(format!("{} verified on PATH", probe));
        }
    }
    Some("not on PATH yet".to_string())
}
