//! Automate Options
//!
//! Configuration types for the TypeScript automator.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::ports::CommandLine;
use crate::domain::value_objects::ArtifactExtensions;

/// Default interval between shutdown checks while waiting for events
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 250;

/// How the TypeScript compiler is invoked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerSettings {
    /// Compiler executable
    pub program: String,
    /// Module format passed with `-m`
    pub module: String,
    /// Language level passed with `-t`
    pub target: String,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            program: "/usr/local/bin/tsc".to_string(),
            module: "amd".to_string(),
            target: "ES6".to_string(),
        }
    }
}

impl CompilerSettings {
    /// `<compiler> -m <module> -t <target> <source>`
    pub fn command_for(&self, source: &Path) -> CommandLine {
        CommandLine::new(self.program.clone())
            .arg("-m")
            .arg(self.module.as_str())
            .arg("-t")
            .arg(self.target.as_str())
            .arg(source.as_os_str())
    }
}

/// Options for the automate use case
#[derive(Debug, Clone)]
pub struct AutomateOptions {
    /// Asset root: the directory tree that is watched and compiled
    pub root: PathBuf,
    /// Recompile every source file at start regardless of timestamps
    pub force: bool,
    /// Source / output / map extensions
    pub extensions: ArtifactExtensions,
    /// Compiler invocation
    pub compiler: CompilerSettings,
    /// How long one wait blocks before the shutdown flag is checked again
    pub poll_interval: Duration,
    /// Run the output fixer on freshly compiled files
    pub fix_output: bool,
}

impl AutomateOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            force: false,
            extensions: ArtifactExtensions::default(),
            compiler: CompilerSettings::default(),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            fix_output: true,
        }
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn with_extensions(mut self, extensions: ArtifactExtensions) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn with_compiler(mut self, compiler: CompilerSettings) -> Self {
        self.compiler = compiler;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_fix_output(mut self, fix_output: bool) -> Self {
        self.fix_output = fix_output;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_command_line() {
        let cmd = CompilerSettings::default().command_for(Path::new("/www/js/a.ts"));
        assert_eq!(cmd.to_string(), "/usr/local/bin/tsc -m amd -t ES6 /www/js/a.ts");
    }

    #[test]
    fn builder_overrides_defaults() {
        let options = AutomateOptions::new("www/js")
            .with_force(true)
            .with_fix_output(false)
            .with_poll_interval(Duration::from_millis(10));

        assert!(options.force);
        assert!(!options.fix_output);
        assert_eq!(options.poll_interval, Duration::from_millis(10));
        assert_eq!(options.extensions, ArtifactExtensions::default());
    }
}
