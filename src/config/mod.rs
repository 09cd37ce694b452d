//! Configuration module for plaisio-console
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PLAISIO_*)
//! 3. Explicit `--config` file, or `plaisio.toml` in the working directory
//! 4. User config (`<config dir>/plaisio/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load, load_with_warnings, user_config_path, with_env_overrides, ConfigWarning,
    PROJECT_CONFIG_FILE,
};
pub use types::{AssetsConfig, ColorMode, Config, OutputConfig, TypeScriptConfig, WatchConfig};
