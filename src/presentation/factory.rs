//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::application::{AutomateOptions, AutomateUseCase, CompilerSettings};
use crate::config::Config;
use crate::infrastructure::{AmdModuleFixer, SystemProcessRunner};

/// Type alias for the concrete AutomateUseCase with all dependencies
pub type ConcreteAutomateUseCase = AutomateUseCase<SystemProcessRunner, AmdModuleFixer>;

/// Command-line values that take precedence over the configuration
#[derive(Debug, Clone, Default)]
pub struct AutomateOverrides {
    pub path: Option<PathBuf>,
    pub force: bool,
}

/// Translate configuration plus CLI overrides into use case options
///
/// Relative asset roots are resolved against `cwd`.
pub fn automate_options(config: &Config, overrides: &AutomateOverrides, cwd: &Path) -> AutomateOptions {
    let root = overrides
        .path
        .clone()
        .unwrap_or_else(|| config.assets.root.clone());
    let root = if root.is_absolute() { root } else { cwd.join(root) };

    let compiler = CompilerSettings {
        program: config.typescript.compiler.clone(),
        module: config.typescript.module.clone(),
        target: config.typescript.target.clone(),
    };

    AutomateOptions::new(root)
        .with_force(overrides.force)
        .with_extensions(config.typescript.extensions())
        .with_compiler(compiler)
        .with_poll_interval(Duration::from_millis(config.watch.poll_interval_ms.max(1)))
        .with_fix_output(config.watch.fix_output)
}

/// Create an automate use case with all dependencies wired up
///
/// This is the main entry point for the `type-script-automator` command.
pub fn create_automate_use_case(
    config: &Config,
    overrides: &AutomateOverrides,
    cwd: &Path,
) -> ConcreteAutomateUseCase {
    let options = automate_options(config, overrides, cwd);
    AutomateUseCase::new(SystemProcessRunner::new(), AmdModuleFixer::new(), options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_root_resolves_against_cwd() {
        let options = automate_options(
            &Config::default(),
            &AutomateOverrides::default(),
            Path::new("/srv/site"),
        );
        assert_eq!(options.root, PathBuf::from("/srv/site/www/js"));
        assert!(!options.force);
        assert_eq!(options.poll_interval, Duration::from_millis(250));
    }

    #[test]
    fn cli_path_and_force_win_over_config() {
        let overrides = AutomateOverrides {
            path: Some(PathBuf::from("/tmp/assets")),
            force: true,
        };
        let options = automate_options(&Config::default(), &overrides, Path::new("/srv/site"));
        assert_eq!(options.root, PathBuf::from("/tmp/assets"));
        assert!(options.force);
    }

    #[test]
    fn compiler_settings_come_from_config() {
        let mut config = Config::default();
        config.typescript.compiler = "tsc".to_string();
        config.typescript.target = "ES2017".to_string();
        config.watch.fix_output = false;

        let options = automate_options(&config, &AutomateOverrides::default(), Path::new("/"));
        assert_eq!(options.compiler.program, "tsc");
        assert_eq!(options.compiler.module, "amd");
        assert_eq!(options.compiler.target, "ES2017");
        assert!(!options.fix_output);
    }

    #[test]
    fn use_case_root_is_normalized() {
        let overrides = AutomateOverrides {
            path: Some(PathBuf::from("/srv/site/www/js/../js")),
            force: false,
        };
        let use_case = create_automate_use_case(&Config::default(), &overrides, Path::new("/"));
        assert_eq!(use_case.options().root, PathBuf::from("/srv/site/www/js"));
    }
}
