use std::path::PathBuf;

use console::style;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::report::RunReport;
use crate::scaffold;

pub async fn execute(profile_name: &str, output_dir: &str) -> Result<()> {
    let catalog = Catalog::load()?;
    let resolved = catalog.resolve(profile_name)?;
    let dir = PathBuf::from(shellexpand::tilde(output_dir).as_ref());

    println!();
    println!(
        "  {} {}",
        style("Profile").dim(),
        style(resolved.profile.as_str()).cyan()
    );
    println!("  {}  {}", style("Output").dim(), dir.display());
    println!();

    let tools = resolved.tool_ids();
    let results = scaffold::generate(&tools, &dir, false);

    let mut report = RunReport::new();
    report.add_section("samples", results);
    report.finish()
}
