use console::style;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::exec::SystemRunner;
use crate::platform;
use crate::report::RunReport;
use crate::vscode;

pub async fn execute(profile_name: &str, dry_run: bool) -> Result<()> {
    let catalog = Catalog::load()?;
    let resolved = catalog.resolve(profile_name)?;
    let ctx = platform::detect();

    println!();
    println!(
        "  {} {}",
        style("Profile").dim(),
        style(resolved.profile.as_str()).cyan()
    );
    match &ctx.editor {
        Some(path) => {
            println!(
                "  {}  {}",
                style("Editor").dim(),
                style(path.display()).green()
            );
        }
        None => {
            println!(
                "  {}  {}",
                style("Editor").dim(),
                style("'code' not on PATH").yellow()
            );
        }
    }
    if dry_run {
        println!();
        println!(
            "  {} {}",
            style("[>]").yellow(),
            style("Dry run: commands are shown, nothing is changed.").yellow()
        );
    }
    println!();

    let runner = SystemRunner;
    let results = vscode::configure(&resolved.extensions, &ctx, dry_run, &runner).await;

    let mut report = RunReport::new();
    report.add_section("vscode", results);
    report.finish()
}
