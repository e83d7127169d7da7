//! VS Code configuration: extension installs through the `code` CLI and an
//! opinionated `settings.json`.

use std::path::{Path, PathBuf};

use console::style;
use serde_json::json;

use crate::error::{Result, SetupError};
use crate::exec::CommandRunner;
use crate::platform::{PlatformContext, EDITOR_BINARY};
use crate::report::StepResult;
use crate::utils::render_command;

/// Argv that installs one extension. `--force` keeps the call idempotent
/// when the extension is already present.
pub fn extension_command(extension: &str) -> Vec<String> {
    vec![
        EDITOR_BINARY.to_string(),
        "--install-extension".to_string(),
        extension.to_string(),
        "--force".to_string(),
    ]
}

/// Installs every extension in order, one result per extension.
///
/// Without the `code` CLI on PATH nothing is attempted: every extension is
/// recorded as skipped and the run moves on.
pub async fn apply_extensions(
    extensions: &[&str],
    ctx: &PlatformContext,
    dry_run: bool,
    runner: &dyn CommandRunner,
) -> Vec<StepResult> {
    if !ctx.editor_available() {
        tracing::warn!("'{}' not found on PATH, skipping extensions", EDITOR_BINARY);
        println!(
            "    {} {}",
            style("[!]").yellow(),
            style("VS Code CLI not found, skipping extensions").yellow()
        );
        let reason = SetupError::EditorNotFound.to_string();
        return extensions
            .iter()
            .map(|ext| {
                let result = StepResult::skipped(*ext, None, reason.clone());
                result.print_line();
                result
            })
            .collect();
    }
    let mut results = Vec::with_capacity(extensions.len());
    for extension in extensions {
        let argv = extension_command(extension);
        let rendered = render_command(&argv);
        let result = if dry_run {
            StepResult::skipped(*extension, Some(rendered), "dry run")
        } else {
            tracing::info!("installing extension {}", extension);
            match runner.run(&argv).await {
                Ok(out) if out.success() => StepResult::success(*extension, Some(rendered)),
                Ok(out) => StepResult::failed(*extension, Some(rendered), out.diagnostic()),
                Err(e) => {
                    StepResult::failed(*extension, Some(rendered), format!("failed to start: {}", e))
                }
            }
        };
        result.print_line();
        results.push(result);
    }
    results
}

/// The settings document written for every profile.
fn default_settings() -> serde_json::Value {
    json!({
        "editor.formatOnSave": true,
        "files.autoSave": "onFocusChange",
        "python.defaultInterpreterPath": "python",
        "terminal.integrated.defaultProfile.windows": "PowerShell",
        "editor.codeActionsOnSave": {
            "source.fixAll": "explicit",
            "source.organizeImports": "explicit"
        }
    })
}

/// Platform-correct path of the user-level `settings.json`.
pub fn settings_path() -> Result<PathBuf> {
    let base = dirs::config_dir()
        .ok_or_else(|| SetupError::Config("Cannot determine the user config directory".into()))?;
    Ok(base.join("Code").join("User").join("settings.json"))
}

/// Writes the settings document, replacing whatever is there.
pub fn write_settings(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(&default_settings())?;
    std::fs::write(path, contents)?;
    Ok(())
}

/// The whole VS Code phase: extensions, then settings.
///
/// Settings are written even when the `code` CLI is missing; the editor may
/// be installed without its CLI shim, and it picks the file up either way.
pub async fn configure(
    extensions: &[&str],
    ctx: &PlatformContext,
    dry_run: bool,
    runner: &dyn CommandRunner,
) -> Vec<StepResult> {
    let mut results = apply_extensions(extensions, ctx, dry_run, runner).await;
    let settings = match settings_path() {
        Ok(path) => {
            if dry_run {
                StepResult::skipped(
                    "settings.json",
                    None,
                    format!("dry run (would write {})", path.display()),
                )
            } else {
                match write_settings(&path) {
                    Ok(()) => StepResult::success("settings.json", None)
                        .with_note(path.display().to_string()),
                    Err(e) => StepResult::failed("settings.json", None, e.to_string()),
                }
            }
        }
        Err(e) => StepResult::failed("settings.json", None, e.to_string()),
    };
    settings.print_line();
    results.push(settings);
    results
}
