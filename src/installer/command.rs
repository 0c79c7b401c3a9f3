//! Installer command construction
//!
//! Pure mapping from catalog metadata to the program and arguments that
//! install or remove an application. Nothing here touches the filesystem.

use std::path::Path;

use crate::catalog::{AppMetadata, InstallerType};
use crate::error::{Better11Error, Result};

const POWERSHELL_FLAGS: [&str; 3] = ["-NoProfile", "-NonInteractive", "-Command"];
const MSI_FLAGS: [&str; 2] = ["/quiet", "/norestart"];

/// A program plus arguments, and the literal line reported to users
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallerCommand {
    pub program: String,
    pub args: Vec<String>,
    pub line: String,
}

impl InstallerCommand {
    /// Build from program and args; `line` is rendered with quoted args
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let program = program.into();
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let line = std::iter::once(quote_if_needed(&program))
            .chain(args.iter().map(|a| quote_if_needed(a)))
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            program,
            args,
            line,
        }
    }

    /// Run `command_line` through the platform shell
    pub fn shell(command_line: &str) -> Self {
        let (program, flag) = if cfg!(windows) {
            ("cmd", "/C")
        } else {
            ("sh", "-c")
        };
        Self {
            program: program.to_string(),
            args: vec![flag.to_string(), command_line.to_string()],
            line: command_line.to_string(),
        }
    }

    /// Command that installs `app` from the artifact at `path`
    pub fn install(app: &AppMetadata, path: &Path) -> Self {
        let path = path.display().to_string();
        match app.installer_type {
            InstallerType::Msi => msiexec("/i", &path),
            InstallerType::Exe => {
                let mut line = format!("\"{path}\"");
                for arg in &app.silent_args {
                    line.push(' ');
                    line.push_str(arg);
                }
                Self {
                    program: path,
                    args: app.silent_args.clone(),
                    line,
                }
            }
            InstallerType::Appx => powershell(&format!("Add-AppxPackage -Path \"{path}\"")),
        }
    }

    /// Command that removes `app`
    ///
    /// An explicit `uninstall_command` always wins. Otherwise MSI needs the
    /// recorded installer path, EXE cannot be removed generically and APPX removes
    /// by package identity.
    pub fn uninstall(app: &AppMetadata, known_installer_path: Option<&Path>) -> Result<Self> {
        if let Some(command) = &app.uninstall_command {
            return Ok(Self::shell(command));
        }

        match app.installer_type {
            InstallerType::Msi => {
                let path = known_installer_path.ok_or_else(|| {
                    Better11Error::unsupported(
                        &app.app_id,
                        "uninstall",
                        "no installer path was recorded for this MSI package",
                    )
                })?;
                Ok(msiexec("/x", &path.display().to_string()))
            }
            InstallerType::Exe => Err(Better11Error::unsupported(
                &app.app_id,
                "uninstall",
                "EXE installers need an UninstallCommand in the catalog",
            )),
            InstallerType::Appx => Ok(powershell(&format!(
                "Get-AppxPackage -Name \"{}\" | Remove-AppxPackage",
                app.package_identity()
            ))),
        }
    }
}

impl std::fmt::Display for InstallerCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.line)
    }
}

fn msiexec(action: &str, path: &str) -> InstallerCommand {
    let mut args = vec![action.to_string(), path.to_string()];
    args.extend(MSI_FLAGS.iter().map(ToString::to_string));
    InstallerCommand {
        program: "msiexec".to_string(),
        line: format!("msiexec {action} \"{path}\" {}", MSI_FLAGS.join(" ")),
        args,
    }
}

fn powershell(script: &str) -> InstallerCommand {
    let mut args: Vec<String> = POWERSHELL_FLAGS.iter().map(ToString::to_string).collect();
    args.push(script.to_string());
    InstallerCommand {
        program: "powershell".to_string(),
        line: format!("powershell {} {script}", POWERSHELL_FLAGS.join(" ")),
        args,
    }
}

fn quote_if_needed(value: &str) -> String {
    if value.is_empty() || value.contains(char::is_whitespace) {
        format!("\"{value}\"")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DIGEST: &str = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";

    fn app(installer_type: InstallerType) -> AppMetadata {
        AppMetadata::new("demo-app", "1.0", installer_type, "demo", DIGEST)
    }

    #[test]
    fn test_msi_install() {
        let cmd = InstallerCommand::install(&app(InstallerType::Msi), Path::new("/cache/demo.msi"));
        assert_eq!(cmd.program, "msiexec");
        assert_eq!(cmd.args, ["/i", "/cache/demo.msi", "/quiet", "/norestart"]);
        assert_eq!(cmd.line, "msiexec /i \"/cache/demo.msi\" /quiet /norestart");
    }

    #[test]
    fn test_exe_install_appends_silent_args_in_order() {
        let exe = app(InstallerType::Exe).with_silent_args(["/S", "/NORESTART"]);
        let cmd = InstallerCommand::install(&exe, Path::new("/cache/setup.exe"));

        assert_eq!(cmd.program, "/cache/setup.exe");
        assert_eq!(cmd.args, ["/S", "/NORESTART"]);
        assert_eq!(cmd.line, "\"/cache/setup.exe\" /S /NORESTART");
    }

    #[test]
    fn test_appx_install() {
        let cmd = InstallerCommand::install(&app(InstallerType::Appx), Path::new("/cache/a.appx"));
        assert_eq!(cmd.program, "powershell");
        assert_eq!(
            cmd.line,
            "powershell -NoProfile -NonInteractive -Command Add-AppxPackage -Path \"/cache/a.appx\""
        );
        assert_eq!(cmd.args.last().unwrap(), "Add-AppxPackage -Path \"/cache/a.appx\"");
    }

    #[test]
    fn test_msi_uninstall_uses_retained_path() {
        let temp = TempDir::new().unwrap();
        let msi = temp.path().join("demo.msi");
        std::fs::write(&msi, "payload").unwrap();

        let cmd = InstallerCommand::uninstall(&app(InstallerType::Msi), Some(&msi)).unwrap();
        assert_eq!(cmd.args[0], "/x");
        assert_eq!(cmd.args[1], msi.display().to_string());
    }

    #[test]
    fn test_msi_uninstall_without_path_is_unsupported() {
        let err = InstallerCommand::uninstall(&app(InstallerType::Msi), None).unwrap_err();
        assert!(matches!(err, Better11Error::UnsupportedOperation { .. }));
    }

    #[test]
    fn test_msi_uninstall_after_cache_cleared() {
        // msiexec reports a missing package through its exit code
        let gone = Path::new("/nonexistent/demo.msi");
        let cmd = InstallerCommand::uninstall(&app(InstallerType::Msi), Some(gone)).unwrap();
        assert_eq!(cmd.program, "msiexec");
        assert_eq!(cmd.args[0], "/x");
        assert_eq!(cmd.args[1], "/nonexistent/demo.msi");
    }

    #[test]
    fn test_exe_uninstall_requires_override() {
        let err = InstallerCommand::uninstall(&app(InstallerType::Exe), None).unwrap_err();
        assert!(matches!(err, Better11Error::UnsupportedOperation { .. }));
    }

    #[test]
    fn test_uninstall_override_wins() {
        let exe = app(InstallerType::Msi).with_uninstall_command("remove-demo --quiet");
        let cmd = InstallerCommand::uninstall(&exe, None).unwrap();

        assert_eq!(cmd.line, "remove-demo --quiet");
        assert_eq!(cmd.args.last().unwrap(), "remove-demo --quiet");
        if cfg!(windows) {
            assert_eq!(cmd.program, "cmd");
        } else {
            assert_eq!(cmd.program, "sh");
        }
    }

    #[test]
    fn test_appx_uninstall_by_package_identity() {
        let mut appx = app(InstallerType::Appx);
        appx.package_name = Some("Contoso.Demo".to_string());

        let cmd = InstallerCommand::uninstall(&appx, None).unwrap();
        assert_eq!(
            cmd.line,
            "powershell -NoProfile -NonInteractive -Command Get-AppxPackage -Name \"Contoso.Demo\" | Remove-AppxPackage"
        );
    }

    #[test]
    fn test_new_quotes_args_with_spaces() {
        let cmd = InstallerCommand::new("tool", ["--dir", "C:\\Program Files\\Demo"]);
        assert_eq!(cmd.line, "tool --dir \"C:\\Program Files\\Demo\"");
    }
}
