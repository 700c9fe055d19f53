//! Shell command execution
//!
//! Commands are opaque strings handed to the platform shell (`sh -c` on
//! Unix, `cmd /C` on Windows) and run to completion in a working directory.

use crate::error::Result;
use std::path::Path;
use std::process::{Command, Stdio};

/// Captured result of a finished shell command
#[derive(Debug, Clone)]
pub struct ShellOutput {
    /// Exit code, or `None` if the process was killed by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ShellOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Human-readable exit description for error messages
    pub fn describe_exit(&self) -> String {
        match self.exit_code {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

fn shell_command(command: &str) -> Command {
    if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", command]);
        cmd
    } else {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", command]);
        cmd
    }
}

/// Run `command` through the shell in `cwd`, capturing stdout and stderr.
///
/// Only failure to spawn is an error; a non-zero exit is reported through
/// [`ShellOutput::exit_code`].
pub fn run_shell(command: &str, cwd: &Path) -> Result<ShellOutput> {
    tracing::debug!(%command, cwd = %cwd.display(), "spawning shell");

    let output = shell_command(command)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()?;

    let result = ShellOutput {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };
    tracing::debug!(%command, exit = ?result.exit_code, "shell finished");
    Ok(result)
}
