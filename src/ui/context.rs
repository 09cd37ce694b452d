use plaisio_console::config::{ColorMode, Config};
use plaisio_console::presentation::ColorWhen;
use plaisio_console::Verbosity;

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Rendering decisions for one command invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbosity: Verbosity,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        Self::from_caps(json, verbose, cli_color, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            json,
            verbosity: config.output.verbosity.raised_by(verbose),
            color: color && !json,
            unicode: caps.supports_unicode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ci_caps() -> TerminalCapabilities {
        TerminalCapabilities {
            supports_color: true,
            supports_unicode: true,
            is_ci: true,
        }
    }

    #[test]
    fn ci_defaults_to_no_color_when_auto() {
        let config = Config::default();
        let ui = UiContext::from_caps(false, 0, None, &config, ci_caps());
        assert!(!ui.color);
    }

    #[test]
    fn ci_allows_explicit_color_always_flag() {
        let config = Config::default();
        let ui = UiContext::from_caps(false, 0, Some(ColorWhen::Always), &config, ci_caps());
        assert!(ui.color);
    }

    #[test]
    fn config_color_never_wins_over_auto_flag() {
        let mut config = Config::default();
        config.output.color = ColorMode::Never;
        let mut caps = ci_caps();
        caps.is_ci = false;
        let ui = UiContext::from_caps(false, 0, Some(ColorWhen::Auto), &config, caps);
        assert!(!ui.color);
    }

    #[test]
    fn verbose_flags_raise_configured_verbosity() {
        let mut config = Config::default();
        config.output.verbosity = Verbosity::Quiet;
        assert_eq!(
            UiContext::from_caps(false, 0, None, &config, ci_caps()).verbosity,
            Verbosity::Quiet
        );
        assert_eq!(
            UiContext::from_caps(false, 2, None, &config, ci_caps()).verbosity,
            Verbosity::VeryVerbose
        );
    }
}
