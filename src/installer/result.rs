use super::{CommandOutput, InstallerCommand};

/// Outcome of one installer or uninstaller invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallerResult {
    /// Literal invocation, empty for synthetic results
    pub command: String,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl InstallerResult {
    /// Map a runner's output; a missing exit code becomes 0 or 1 from `success`
    pub fn from_output(command: &InstallerCommand, output: CommandOutput) -> Self {
        let exit_code = match (output.exit_code, output.success) {
            (Some(0), false) | (None, false) => 1,
            (Some(code), _) => code,
            (None, true) => 0,
        };
        Self {
            command: command.line.clone(),
            exit_code,
            stdout: output.output.join("\n"),
            stderr: output.errors.join("\n"),
        }
    }

    /// Result returned when an up-to-date install is skipped
    pub fn already_installed(app_id: &str) -> Self {
        Self {
            command: String::new(),
            exit_code: 0,
            stdout: format!("{app_id} is already installed"),
            stderr: String::new(),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.exit_code == 0
    }
}
