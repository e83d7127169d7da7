//! Per-step outcome tracking and the end-of-run summary.
//!
//! Every phase produces a list of [`StepResult`]s instead of unwinding on
//! the first failure, so one broken package never blocks the rest of a
//! setup. The final exit code comes from [`RunReport::finish`].

use chrono::{DateTime, Utc};
use console::style;

use crate::error::{Result, SetupError};
use crate::utils::{format_duration, truncate};

/// What happened to a single step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// Not attempted, with the reason (dry run, already present, no package
    /// for this manager, editor missing).
    Skipped(String),
    /// Attempted and failed, with a short diagnostic.
    Failed(String),
}

/// One unit of work: a package install, an extension install, a file write.
#[derive(Debug, Clone)]
pub struct StepResult {
    pub name: String,
    /// The command this step ran or would run, when there is one.
    pub command: Option<String>,
    /// Extra detail shown after the name (PATH probe result, file path).
    pub note: Option<String>,
    pub outcome: Outcome,
}

impl StepResult {
    pub fn success(name: impl Into<String>, command: Option<String>) -> Self {
        Self {
            name: name.into(),
            command,
            note: None,
            outcome: Outcome::Success,
        }
    }

    pub fn skipped(
        name: impl Into<String>,
        command: Option<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            command,
            note: None,
            outcome: Outcome::Skipped(reason.into()),
        }
    }

    pub fn failed(
        name: impl Into<String>,
        command: Option<String>,
        diagnostic: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            command,
            note: None,
            outcome: Outcome::Failed(diagnostic.into()),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, Outcome::Failed(_))
    }

    /// Prints the one-line live view of this step.
    ///
    /// A skipped step that carries a command is a dry-run preview and shows
    /// the exact argv; a skipped step without one just shows the reason.
    pub fn print_line(&self) {
        match &self.outcome {
            Outcome::Success => {
                let note = match &self.note {
                    Some(note) => format!(" {}", style(format!("({})", note)).dim()),
                    None => String::new(),
                };
                println!(
                    "    {} {}{}",
                    style("[x]").green(),
                    style(&self.name).green(),
                    note
                );
            }
            Outcome::Skipped(reason) => match &self.command {
                Some(command) => {
                    println!(
                        "    {} {} {} {}",
                        style("[ ]").dim(),
                        style(&self.name).dim(),
                        style("would run:").dim(),
                        style(command).cyan()
                    );
                }
                None => {
                    println!(
                        "    {} {} {}",
                        style("[ ]").dim(),
                        style(&self.name).dim(),
                        style(format!("({})", reason)).dim()
                    );
                }
            },
            Outcome::Failed(diagnostic) => {
                println!(
                    "    {} {} - {}",
                    style("[!]").red(),
                    style(&self.name).red(),
                    style(truncate(diagnostic, 160)).red()
                );
            }
        }
    }
}

/// Accumulated results across all phases of a run.
pub struct RunReport {
    started_at: DateTime<Utc>,
    sections: Vec<(String, Vec<StepResult>)>,
}

impl RunReport {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            sections: Vec::new(),
        }
    }

    pub fn add_section(&mut self, title: impl Into<String>, results: Vec<StepResult>) {
        self.sections.push((title.into(), results));
    }

    pub fn failed_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|(_, results)| results)
            .filter(|r| r.is_failed())
            .count()
    }

    fn print_summary(&self) {
        println!();
        println!("  {}", style("Summary").dim().bold());
        for (title, results) in &self.sections {
            let ok = results
                .iter()
                .filter(|r| r.outcome == Outcome::Success)
                .count();
            let skipped = results
                .iter()
                .filter(|r| matches!(r.outcome, Outcome::Skipped(_)))
                .count();
            let failed = results.iter().filter(|r| r.is_failed()).count();
            let line = format!("{}: {} ok, {} skipped, {} failed", title, ok, skipped, failed);
            if failed > 0 {
                println!("    {}", style(line).red());
            } else {
                println!("    {}", style(line).dim());
            }
        }
        for (title, results) in &self.sections {
            for result in results {
                if let Outcome::Failed(diagnostic) = &result.outcome {
                    println!(
                        "    {} {}/{} - {}",
                        style("[!]").red(),
                        title,
                        result.name,
                        style(truncate(diagnostic, 160)).red()
                    );
                }
            }
        }
        let elapsed = (Utc::now() - self.started_at).num_seconds();
        println!(
            "  {} {}",
            style("→").dim(),
            style(format!("finished in {}", format_duration(elapsed))).dim()
        );
    }

    /// Prints the summary and converts accumulated failures into the final
    /// error, which the top level maps to a non-zero exit.
    pub fn finish(self) -> Result<()> {
        self.print_summary();
        let count = self.failed_count();
        if count > 0 {
            return Err(SetupError::StepsFailed { count });
        }
        Ok(())
    }
}

impl Default for RunReport {
    fn default() -> Self {
        Self::new()
    }
}
