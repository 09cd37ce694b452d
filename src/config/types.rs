//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ArtifactExtensions, Verbosity};
use crate::error::PlaisioResult;

use super::loader::{self, ConfigWarning};

/// TypeScript compiler configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeScriptConfig {
    #[serde(default = "default_compiler")]
    pub compiler: String,

    #[serde(default = "default_module")]
    pub module: String,

    #[serde(default = "default_target")]
    pub target: String,

    #[serde(default = "default_source_extension")]
    pub source_extension: String,

    #[serde(default = "default_output_extension")]
    pub output_extension: String,

    #[serde(default = "default_map_extension")]
    pub map_extension: String,
}

impl Default for TypeScriptConfig {
    fn default() -> Self {
        Self {
            compiler: default_compiler(),
            module: default_module(),
            target: default_target(),
            source_extension: default_source_extension(),
            output_extension: default_output_extension(),
            map_extension: default_map_extension(),
        }
    }
}

impl TypeScriptConfig {
    /// Configured extensions, accepted with or without a leading dot
    pub fn extensions(&self) -> ArtifactExtensions {
        ArtifactExtensions {
            source: bare_extension(&self.source_extension),
            output: bare_extension(&self.output_extension),
            map: bare_extension(&self.map_extension),
        }
    }
}

fn bare_extension(extension: &str) -> String {
    extension.trim_start_matches('.').to_string()
}

fn default_compiler() -> String {
    "/usr/local/bin/tsc".to_string()
}

fn default_module() -> String {
    "amd".to_string()
}

fn default_target() -> String {
    "ES6".to_string()
}

fn default_source_extension() -> String {
    "ts".to_string()
}

fn default_output_extension() -> String {
    "js".to_string()
}

fn default_map_extension() -> String {
    "map".to_string()
}

/// Asset tree configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Root of the JavaScript/TypeScript asset tree
    #[serde(default = "default_asset_root")]
    pub root: PathBuf,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            root: default_asset_root(),
        }
    }
}

fn default_asset_root() -> PathBuf {
    PathBuf::from("www/js")
}

/// Watch loop configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    #[serde(default = "default_true")]
    pub fix_output: bool,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            fix_output: true,
        }
    }
}

fn default_poll_interval_ms() -> u64 {
    250
}

fn default_true() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub typescript: TypeScriptConfig,

    #[serde(default)]
    pub assets: AssetsConfig,

    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PlaisioResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PlaisioResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }
}
