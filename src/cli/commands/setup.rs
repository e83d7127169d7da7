use std::path::PathBuf;

use console::style;

use crate::catalog::Catalog;
use crate::error::{Result, SetupError};
use crate::exec::SystemRunner;
use crate::install::Installer;
use crate::platform;
use crate::report::{RunReport, StepResult};
use crate::scaffold;
use crate::vscode;

/// The full pipeline: tools, then VS Code, then starter projects.
///
/// Phases run in order and every phase runs even when an earlier one had
/// failures; the summary and exit code report them all at the end. The one
/// exception is a missing package manager, which makes the whole install
/// phase impossible and is recorded as a single failure.
pub async fn execute(
    profile_name: &str,
    dry_run: bool,
    output_dir: &str,
    skip_install: bool,
    skip_vscode: bool,
    skip_samples: bool,
) -> Result<()> {
    let catalog = Catalog::load()?;
    let resolved = catalog.resolve(profile_name)?;
    let ctx = platform::detect();
    let samples_dir = PathBuf::from(shellexpand::tilde(output_dir).as_ref());

    println!();
    println!("  {}", style("rigup setup").cyan().bold());
    println!();
    println!(
        "  {}         {}",
        style("Profile").dim(),
        style(resolved.profile.as_str()).cyan()
    );
    println!("  {}          {}", style("System").dim(), ctx.os);
    match ctx.manager {
        Some(manager) => {
            println!("  {} {}", style("Package manager").dim(), manager);
        }
        None => {
            println!(
                "  {} {}",
                style("Package manager").dim(),
                style("none found").red()
            );
        }
    }
    println!(
        "  {}         {} tools, {} extensions",
        style("Planned").dim(),
        resolved.tools.len(),
        resolved.extensions.len()
    );
    if dry_run {
        println!();
        println!(
            "  {} {}",
            style("[>]").yellow(),
            style("Dry run: commands are shown, nothing is changed.").yellow()
        );
    }

    let runner = SystemRunner;
    let mut report = RunReport::new();

    if !skip_install {
        println!();
        println!("  {}", style("Tools").dim().bold());
        let installer = Installer::new(&catalog, &runner);
        match installer.run(&resolved.tools, &ctx, dry_run).await {
            Ok(results) => report.add_section("tools", results),
            Err(e @ SetupError::NoPackageManager { .. }) => {
                tracing::error!("{}", e);
                println!("    {} {}", style("[!]").red(), style(&e).red());
                report.add_section(
                    "tools",
                    vec![StepResult::failed("package-manager", None, e.to_string())],
                );
            }
            Err(e) => return Err(e),
        }
    }

    if !skip_vscode {
        println!();
        println!("  {}", style("VS Code").dim().bold());
        let results = vscode::configure(&resolved.extensions, &ctx, dry_run, &runner).await;
        report.add_section("vscode", results);
    }

    if !skip_samples {
        println!();
        println!("  {}", style("Starter projects").dim().bold());
        let tools = resolved.tool_ids();
        let results = scaffold::generate(&tools, &samples_dir, dry_run);
        report.add_section("samples", results);
    }

    report.finish()
}
