//! External process execution with output passthrough.
//!
//! Build and setup runs are interactive and verbose by nature, so their
//! stdio is inherited and the operator sees progress directly. The exit
//! status comes back to the caller, which is required to inspect it.

use std::process::{Command, ExitStatus, Stdio};

use crate::error::{RevupError, Result};

/// Run a command to completion with inherited stdio.
pub fn run_passthrough(command: &mut Command) -> Result<ExitStatus> {
    let rendered = render(command);
    command
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| RevupError::ProcessSpawnFailed {
            command: rendered,
            reason: e.to_string(),
        })
}

/// Human-readable command line for error messages.
fn render(command: &Command) -> String {
    let mut parts = vec![command.get_program().to_string_lossy().into_owned()];
    parts.extend(command.get_args().map(|a| a.to_string_lossy().into_owned()));
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_includes_program_and_args() {
        let mut command = Command::new("php");
        command.arg("setup/index.php").arg("--installmode=new");
        assert_eq!(render(&command), "php setup/index.php --installmode=new");
    }

    #[cfg(unix)]
    #[test]
    fn test_run_passthrough_success() {
        let status = run_passthrough(&mut Command::new("true")).unwrap();
        assert!(status.success());
    }

    #[cfg(unix)]
    #[test]
    fn test_run_passthrough_nonzero_exit_is_not_an_error() {
        let status = run_passthrough(&mut Command::new("false")).unwrap();
        assert!(!status.success());
    }

    #[test]
    fn test_run_passthrough_missing_binary() {
        let result = run_passthrough(&mut Command::new("revup-no-such-binary"));
        assert!(matches!(
            result,
            Err(RevupError::ProcessSpawnFailed { .. })
        ));
    }
}
