use plaisio_console::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;

pub fn print_config_warnings(warnings: &[ConfigWarning], supports_color: bool, supports_unicode: bool) {
    for warning in warnings {
        eprintln!(
            "{} {}",
            Icon::Warning.colored(supports_color, supports_unicode),
            warning
        );
    }
}
