//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --config) are inherited by all subcommands

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::value_objects::EventMask;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Plaisio - developer tooling for Plaisio web applications
#[derive(Parser, Debug)]
#[command(name = "plaisio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (NDJSON events)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./plaisio.toml, then the user config)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Watch the asset tree and recompile TypeScript on change
    #[command(name = "type-script-automator", visible_alias = "automate")]
    TypeScriptAutomator {
        /// Asset root to watch (overrides [assets] root)
        #[arg(short, long, value_name = "DIR")]
        path: Option<PathBuf>,

        /// Recompile every source file at start, fresh or not
        #[arg(short, long)]
        force: bool,

        /// Compile stale sources and exit without watching
        #[arg(long)]
        once: bool,
    },

    /// Describe the filesystem event flags contained in a mask
    Mask {
        /// Mask value, decimal or 0x-prefixed hex
        #[arg(value_parser = parse_mask)]
        value: EventMask,
    },
}

/// Parse `256`, `0x100` or `0X100` into a mask
pub fn parse_mask(value: &str) -> Result<EventMask, String> {
    let value = value.trim();
    let parsed = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => value.parse::<u32>(),
    };
    parsed
        .map(EventMask::from_bits)
        .map_err(|e| format!("invalid mask '{}': {}", value, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["plaisio"]).is_err());
    }

    #[test]
    fn test_cli_parse_type_script_automator() {
        let cli = Cli::try_parse_from(["plaisio", "type-script-automator"]).unwrap();
        if let Commands::TypeScriptAutomator { path, force, once } = cli.command {
            assert_eq!(path, None);
            assert!(!force);
            assert!(!once);
        } else {
            panic!("Expected TypeScriptAutomator command");
        }
    }

    #[test]
    fn test_cli_parse_automate_alias_with_flags() {
        let cli = Cli::try_parse_from([
            "plaisio", "automate", "--path", "www/js", "--force", "--once",
        ])
        .unwrap();
        if let Commands::TypeScriptAutomator { path, force, once } = cli.command {
            assert_eq!(path, Some(PathBuf::from("www/js")));
            assert!(force);
            assert!(once);
        } else {
            panic!("Expected TypeScriptAutomator command");
        }
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "plaisio", "automate", "--json", "-vv", "--color", "never", "--config", "ci.toml",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.color, Some(ColorWhen::Never));
        assert_eq!(cli.config, Some(PathBuf::from("ci.toml")));
    }

    #[test]
    fn test_cli_parse_mask_decimal_and_hex() {
        let cli = Cli::try_parse_from(["plaisio", "mask", "1073742080"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Mask { value } if value == EventMask::CREATE | EventMask::ISDIR
        ));

        assert_eq!(parse_mask("0x100"), Ok(EventMask::CREATE));
        assert_eq!(parse_mask("0X8"), Ok(EventMask::CLOSE_WRITE));
    }

    #[test]
    fn test_cli_rejects_bad_mask() {
        assert!(Cli::try_parse_from(["plaisio", "mask", "create"]).is_err());
        assert!(parse_mask("0xZZ").is_err());
    }
}
