//! Command execution seam

use std::process::{Command, Stdio};

use crate::error::Result;

use super::InstallerCommand;

/// Raw outcome of running a command, before it is mapped to an
/// [`InstallerResult`](super::InstallerResult)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    /// `None` when the process was killed by a signal or never started
    pub exit_code: Option<i32>,
    pub output: Vec<String>,
    pub errors: Vec<String>,
}

impl CommandOutput {
    pub fn succeeded() -> Self {
        Self {
            success: true,
            exit_code: Some(0),
            ..Self::default()
        }
    }

    pub fn failed(exit_code: i32, error: impl Into<String>) -> Self {
        Self {
            success: false,
            exit_code: Some(exit_code),
            output: Vec::new(),
            errors: vec![error.into()],
        }
    }
}

/// Executes installer and uninstaller commands
pub trait CommandRunner {
    fn run(&self, command: &InstallerCommand) -> Result<CommandOutput>;
}

/// Runs commands as child processes, without a shell
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, command: &InstallerCommand) -> Result<CommandOutput> {
        tracing::debug!(program = %command.program, args = ?command.args, "spawning installer");

        let output = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output();

        let output = match output {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!(program = %command.program, error = %e, "failed to launch installer");
                return Ok(CommandOutput {
                    success: false,
                    exit_code: None,
                    output: Vec::new(),
                    errors: vec![format!("failed to launch {}: {e}", command.program)],
                });
            }
        };

        Ok(CommandOutput {
            success: output.status.success(),
            exit_code: output.status.code(),
            output: lines(&output.stdout),
            errors: lines(&output.stderr),
        })
    }
}

fn lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::to_string)
        .collect()
}
