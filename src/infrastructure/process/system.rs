//! Runs external programs with `std::process`

use std::process::Command;

use crate::domain::ports::{CommandLine, ProcessOutput, ProcessRunner};
use crate::error::{PlaisioError, PlaisioResult};

/// Runs commands synchronously, capturing stdout and stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, command: &CommandLine) -> PlaisioResult<ProcessOutput> {
        let output = Command::new(&command.program)
            .args(&command.args)
            .output()
            .map_err(|source| PlaisioError::CommandSpawn {
                program: command.program.clone(),
                source,
            })?;

        let lines = String::from_utf8_lossy(&output.stdout)
            .lines()
            .chain(String::from_utf8_lossy(&output.stderr).lines())
            .map(str::to_string)
            .collect();

        Ok(ProcessOutput {
            status: output.status.code(),
            lines,
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn captures_stdout_then_stderr() {
        let cmd = CommandLine::new("sh")
            .arg("-c")
            .arg("echo out; echo err >&2; exit 3");
        let output = SystemProcessRunner::new().run(&cmd).unwrap();

        assert_eq!(output.status, Some(3));
        assert_eq!(output.lines, vec!["out".to_string(), "err".to_string()]);
        assert!(!output.success());
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let cmd = CommandLine::new("/nonexistent/plaisio-tsc");
        let err = SystemProcessRunner::new().run(&cmd).unwrap_err();
        assert!(matches!(err, PlaisioError::CommandSpawn { .. }));
    }
}
