pub mod commands;

use clap::{Parser, Subcommand};

use crate::error::Result;

#[derive(Parser)]
#[command(name = "rigup")]
#[command(version)]
#[command(about = "Developer workstation setup that just works")]
#[command(long_about = "Install toolchains, configure VS Code, and scaffold starter projects\nwith one command, on Windows, macOS, or Linux.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full setup: install tools, configure VS Code, scaffold samples
    Setup {
        /// Profile to set up (see `rigup profiles`)
        #[arg(short, long, default_value = "fullstack")]
        profile: String,

        /// Print what would happen without changing anything
        #[arg(long)]
        dry_run: bool,

        /// Directory for starter projects
        #[arg(short, long, default_value = "sample-projects")]
        output_dir: String,

        /// Skip the package installation phase
        #[arg(long)]
        skip_install: bool,

        /// Skip VS Code extensions and settings
        #[arg(long)]
        skip_vscode: bool,

        /// Skip starter project scaffolding
        #[arg(long)]
        skip_samples: bool,
    },

    /// Install a profile's tools through the system package manager
    Install {
        /// Profile to install (see `rigup profiles`)
        #[arg(short, long, default_value = "fullstack")]
        profile: String,

        /// Print what would happen without changing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Install VS Code extensions and write settings for a profile
    ConfigureVscode {
        /// Profile whose extensions to install (see `rigup profiles`)
        #[arg(short, long, default_value = "fullstack")]
        profile: String,

        /// Print what would happen without changing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Scaffold starter projects for a profile
    InitSamples {
        /// Profile whose starters to scaffold (see `rigup profiles`)
        #[arg(short, long, default_value = "fullstack")]
        profile: String,

        /// Directory for starter projects
        #[arg(short, long, default_value = "sample-projects")]
        output_dir: String,
    },

    /// List the available profiles
    Profiles,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Setup {
                profile,
                dry_run,
                output_dir,
                skip_install,
                skip_vscode,
                skip_samples,
            } => {
                commands::setup::execute(
                    &profile,
                    dry_run,
                    &output_dir,
                    skip_install,
                    skip_vscode,
                    skip_samples,
                )
                .await
            }
            Commands::Install { profile, dry_run } => {
                commands::install::execute(&profile, dry_run).await
            }
            Commands::ConfigureVscode { profile, dry_run } => {
                commands::configure_vscode::execute(&profile, dry_run).await
            }
            Commands::InitSamples {
                profile,
                output_dir,
            } => commands::init_samples::execute(&profile, &output_dir).await,
            Commands::Profiles => commands::profiles::execute().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_setup_defaults() {
        let cli = Cli::try_parse_from(["rigup", "setup"]).unwrap();
        match cli.command {
            Commands::Setup {
                profile,
                dry_run,
                output_dir,
                skip_install,
                skip_vscode,
                skip_samples,
            } => {
                assert_eq!(profile, "fullstack");
                assert!(!dry_run);
                assert_eq!(output_dir, "sample-projects");
                assert!(!skip_install && !skip_vscode && !skip_samples);
            }
            _ => panic!("expected setup"),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn test_setup_flags() {
        let cli = Cli::try_parse_from([
            "rigup",
            "setup",
            "--profile",
            "web",
            "--dry-run",
            "--output-dir",
            "~/work",
            "--skip-vscode",
            "--verbose",
        ])
        .unwrap();
        match cli.command {
            Commands::Setup {
                profile,
                dry_run,
                output_dir,
                skip_vscode,
                ..
            } => {
                assert_eq!(profile, "web");
                assert!(dry_run);
                assert_eq!(output_dir, "~/work");
                assert!(skip_vscode);
            }
            _ => panic!("expected setup"),
        }
        assert!(cli.verbose);
    }

    #[test]
    fn test_configure_vscode_subcommand_name() {
        let cli = Cli::try_parse_from(["rigup", "configure-vscode", "-p", "python"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::ConfigureVscode { profile, .. } if profile == "python"
        ));
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["rigup", "teardown"]).is_err());
    }
}
