use console::style;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::exec::SystemRunner;
use crate::install::Installer;
use crate::platform;
use crate::report::RunReport;

pub async fn execute(profile_name: &str, dry_run: bool) -> Result<()> {
    let catalog = Catalog::load()?;
    let resolved = catalog.resolve(profile_name)?;
    let ctx = platform::detect();

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
    if dry_run {
        println!();
        println!(
            "  {} {}",
            style("[>]").yellow(),
            style("Dry run: commands are shown, nothing is installed.").yellow()
        );
    }
    println!();

    let runner = SystemRunner;
    let installer = Installer::new(&catalog, &runner);
    let results = installer.run(&resolved.tools, &ctx, dry_run).await?;

    let mut report = RunReport::new();
    report.add_section("tools", results);
    report.finish()
}
