//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::Verbosity;
use crate::error::{PlaisioError, PlaisioResult};

use super::types::Config;

/// Config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "plaisio.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A key in a config file that no setting uses
    UnknownKey {
        key: String,
        file: PathBuf,
        line: Option<usize>,
        suggestion: Option<String>,
    },
    /// An environment variable with a value that could not be parsed
    InvalidEnv {
        var: String,
        value: String,
        suggestion: Option<String>,
    },
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigWarning::UnknownKey {
                key,
                file,
                line,
                suggestion,
            } => {
                write!(f, "unknown config key '{}' in {}", key, file.display())?;
                if let Some(line) = line {
                    write!(f, ":{}", line)?;
                }
                if let Some(suggestion) = suggestion {
                    write!(f, " (did you mean '{}'?)", suggestion)?;
                }
                Ok(())
            }
            ConfigWarning::InvalidEnv {
                var,
                value,
                suggestion,
            } => {
                write!(f, "invalid {} value '{}', ignored", var, value)?;
                if let Some(suggestion) = suggestion {
                    write!(f, " (did you mean '{}'?)", suggestion)?;
                }
                Ok(())
            }
        }
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PlaisioResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PlaisioError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning::UnknownKey {
                line: find_line_number(&content, &key),
                suggestion: suggest(&key, CONFIG_KEYS),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// `<config dir>/plaisio/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("plaisio").join("config.toml"))
}

/// Load the configuration in effect for a command run in `cwd`
///
/// An explicit file must exist. Without one, `plaisio.toml` in `cwd` is used,
/// then the user config, then the defaults. Environment overrides are applied
/// last.
pub fn load(explicit: Option<&Path>, cwd: &Path) -> PlaisioResult<(Config, Vec<ConfigWarning>)> {
    let project = cwd.join(PROJECT_CONFIG_FILE);
    let file = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None if project.is_file() => Some(project),
        None => user_config_path().filter(|path| path.is_file()),
    };

    let (config, mut warnings) = match file {
        Some(path) => load_with_warnings(&path)?,
        None => (Config::default(), Vec::new()),
    };

    let (config, env_warnings) = with_env_overrides(config);
    warnings.extend(env_warnings);
    Ok((config, warnings))
}

/// Apply environment variable overrides (PLAISIO_* prefix)
pub fn with_env_overrides(config: Config) -> (Config, Vec<ConfigWarning>) {
    apply_env(config, |key| std::env::var(key).ok())
}

pub(super) fn apply_env(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> (Config, Vec<ConfigWarning>) {
    let mut warnings = Vec::new();

    // PLAISIO_TSC
    if let Some(compiler) = get_env("PLAISIO_TSC").filter(|v| !v.is_empty()) {
        config.typescript.compiler = compiler;
    }

    // PLAISIO_ASSET_ROOT
    if let Some(root) = get_env("PLAISIO_ASSET_ROOT").filter(|v| !v.is_empty()) {
        config.assets.root = PathBuf::from(root);
    }

    // PLAISIO_VERBOSITY
    if let Some(value) = get_env("PLAISIO_VERBOSITY") {
        match Verbosity::parse(&value) {
            Some(verbosity) => config.output.verbosity = verbosity,
            None => warnings.push(ConfigWarning::InvalidEnv {
                var: "PLAISIO_VERBOSITY".to_string(),
                suggestion: suggest(&value.to_lowercase(), Verbosity::NAMES),
                value,
            }),
        }
    }

    (config, warnings)
}

const CONFIG_KEYS: &[&str] = &[
    "typescript",
    "compiler",
    "module",
    "target",
    "source_extension",
    "output_extension",
    "map_extension",
    "assets",
    "root",
    "watch",
    "poll_interval_ms",
    "fix_output",
    "output",
    "verbosity",
    "color",
];

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest(unknown: &str, candidates: &[&str]) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for &candidate in candidates {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
