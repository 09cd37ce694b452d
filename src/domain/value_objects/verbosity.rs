//! Output verbosity and message levels

use serde::{Deserialize, Serialize};

/// How much the user asked to see
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    #[serde(alias = "very-verbose", alias = "debug")]
    VeryVerbose,
}

impl Verbosity {
    pub const NAMES: &'static [&'static str] = &["quiet", "normal", "verbose", "very_verbose"];

    /// Parse a configured name (`quiet`, `normal`, `verbose`, `very_verbose`)
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().replace('-', "_").as_str() {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "very_verbose" | "debug" => Some(Verbosity::VeryVerbose),
            _ => None,
        }
    }

    /// Map a `-v` count onto a verbosity, never lowering the configured level
    pub fn raised_by(self, count: u8) -> Self {
        let from_flags = match count {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::VeryVerbose,
        };
        if count == 0 {
            self
        } else {
            self.max(from_flags)
        }
    }

    /// Whether a message of `level` is shown at this verbosity
    pub fn allows(self, level: Level) -> bool {
        match level {
            Level::Error => true,
            Level::Warning | Level::Info => self >= Verbosity::Normal,
            Level::Verbose => self >= Verbosity::Verbose,
            Level::VeryVerbose => self >= Verbosity::VeryVerbose,
        }
    }
}

/// Severity of an emitted message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Error,
    Warning,
    Info,
    Verbose,
    VeryVerbose,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_shows_errors_only() {
        assert!(Verbosity::Quiet.allows(Level::Error));
        assert!(!Verbosity::Quiet.allows(Level::Info));
    }

    #[test]
    fn verbose_flags_raise_level() {
        assert_eq!(Verbosity::Normal.raised_by(0), Verbosity::Normal);
        assert_eq!(Verbosity::Normal.raised_by(1), Verbosity::Verbose);
        assert_eq!(Verbosity::Normal.raised_by(3), Verbosity::VeryVerbose);
        assert_eq!(Verbosity::VeryVerbose.raised_by(1), Verbosity::VeryVerbose);
        assert_eq!(Verbosity::Quiet.raised_by(0), Verbosity::Quiet);
    }

    #[test]
    fn parse_accepts_configured_names() {
        assert_eq!(Verbosity::parse("Quiet"), Some(Verbosity::Quiet));
        assert_eq!(Verbosity::parse("very-verbose"), Some(Verbosity::VeryVerbose));
        assert_eq!(Verbosity::parse("debug"), Some(Verbosity::VeryVerbose));
        assert_eq!(Verbosity::parse("loud"), None);
    }

    #[test]
    fn very_verbose_shows_everything() {
        for level in [
            Level::Error,
            Level::Warning,
            Level::Info,
            Level::Verbose,
            Level::VeryVerbose,
        ] {
            assert!(Verbosity::VeryVerbose.allows(level));
        }
        assert!(!Verbosity::Verbose.allows(Level::VeryVerbose));
    }
}
