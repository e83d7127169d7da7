//! Subprocess execution behind a trait, so install and extension steps can
//! be tested without touching the host system.

use async_trait::async_trait;

/// Captured result of a finished command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Short human-readable failure description: exit status plus whichever
    /// stream has something to say.
    pub fn diagnostic(&self) -> String {
        let status = match self.code {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string(),
        };
        let detail = if !self.stderr.trim().is_empty() {
            self.stderr.trim()
        } else {
            self.stdout.trim()
        };
        if detail.is_empty() {
            status
        } else {
            format!("{}: {}", status, detail)
        }
    }
}

/// Runs an argv and captures its output.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, argv: &[String]) -> std::io::Result<CommandOutput>;
}

/// The real thing: spawns via tokio and waits for completion.
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, argv: &[String]) -> std::io::Result<CommandOutput> {
        let (program, args) = argv.split_first().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command")
        })?;
        let output = tokio::process::Command::new(program)
            .args(args)
            .output()
            .await?;
        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_requires_zero_exit() {
        let ok = CommandOutput {
            code: Some(0),
            stdout: String::new(),
            stderr: String::new(),
        };
        assert!(ok.success());
        let failed = CommandOutput {
            code: Some(1),
            stdout: String::new(),
            stderr: String::new(),
        };
        assert!(!failed.success());
        let signaled = CommandOutput {
            code: None,
            stdout: String::new(),
            stderr: String::new(),
        };
        assert!(!signaled.success());
    }

    #[test]
    fn test_diagnostic_prefers_stderr() {
        let out = CommandOutput {
            code: Some(2),
            stdout: "partial output\n".to_string(),
            stderr: "package not found\n".to_string(),
        };
        assert_eq!(out.diagnostic(), "exit code 2: package not found");
    }

    #[test]
    fn test_diagnostic_falls_back_to_stdout() {
        let out = CommandOutput {
            code: Some(1),
            stdout: "nothing matched\n".to_string(),
            stderr: "  \n".to_string(),
        };
        assert_eq!(out.diagnostic(), "exit code 1: nothing matched");
    }

    #[test]
    fn test_diagnostic_signal_without_output() {
        let out = CommandOutput {
            code: None,
            stdout: String::new(),
            stderr: String::new(),
        };
        assert_eq!(out.diagnostic(), "terminated by signal");
    }

    #[tokio::test]
    async fn test_empty_argv_is_rejected() {
        let err = SystemRunner.run(&[]).await.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }
}
