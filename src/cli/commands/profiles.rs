use crate::catalog::Profile;
use crate::error::Result;

/// Bare names, one per line, for shell completion and scripts.
pub async fn execute() -> Result<()> {
    for profile in Profile::all() {
        println!("{}", profile);
    }
    Ok(())
}
