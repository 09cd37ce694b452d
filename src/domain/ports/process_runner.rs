//! Process runner port - run an external program to completion
//!
//! The compiler is only ever reached through this trait so tests can record
//! invocations instead of shelling out.

use std::ffi::OsString;

use crate::error::PlaisioResult;

/// A program and its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<OsString>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl std::fmt::Display for CommandLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Exit status and captured output of a finished program
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code; `None` when the program was killed by a signal
    pub status: Option<i32>,
    /// stdout followed by stderr, one entry per line
    pub lines: Vec<String>,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Runs a command synchronously and captures its output
pub trait ProcessRunner {
    fn run(&self, command: &CommandLine) -> PlaisioResult<ProcessOutput>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_display() {
        let cmd = CommandLine::new("/usr/local/bin/tsc")
            .arg("-m")
            .arg("amd")
            .arg("/js/a.ts");
        assert_eq!(cmd.to_string(), "/usr/local/bin/tsc -m amd /js/a.ts");
    }

    #[test]
    fn success_requires_zero_exit() {
        assert!(ProcessOutput {
            status: Some(0),
            lines: vec![]
        }
        .success());
        assert!(!ProcessOutput {
            status: Some(2),
            lines: vec![]
        }
        .success());
        assert!(!ProcessOutput::default().success());
    }
}
