use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use plaisio_console::domain::ports::AutomatorEventSink;
use plaisio_console::infrastructure::{JsonEventSink, NotifyFacility};
use plaisio_console::presentation::{create_automate_use_case, AutomateOverrides, ColorWhen};

use crate::ui::console::ConsoleEventSink;
use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;
use crate::ui::views::automate::render_automate_header;

pub struct AutomateArgs {
    pub path: Option<PathBuf>,
    pub force: bool,
    pub once: bool,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub verbose: u8,
    pub color: Option<ColorWhen>,
}

pub fn cmd_type_script_automator(args: AutomateArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to determine the working directory")?;
    let (config, warnings) = plaisio_console::config::load(args.config.as_deref(), &cwd)
        .context("Failed to load configuration")?;

    let ui = UiContext::new(args.json, args.verbose, args.color, &config);
    if !ui.json {
        print_config_warnings(&warnings, ui.color, ui.unicode);
    }

    let overrides = AutomateOverrides {
        path: args.path,
        force: args.force,
    };
    let use_case = create_automate_use_case(&config, &overrides, &cwd);
    let options = use_case.options();

    let sink: Box<dyn AutomatorEventSink> = if ui.json {
        Box::new(JsonEventSink::stdout().with_verbosity(ui.verbosity))
    } else {
        Box::new(ConsoleEventSink::new(&ui))
    };

    if !ui.json && ui.verbosity.allows(plaisio_console::domain::value_objects::Level::Info) {
        let compiler = &options.compiler;
        print!(
            "{}",
            render_automate_header(
                &display_root(&options.root, &cwd),
                &format!("{} -m {} -t {}", compiler.program, compiler.module, compiler.target),
                args.once,
                ui.color,
                ui.unicode
            )
        );
    }

    if args.once {
        let summary = use_case.reconcile(sink.as_ref())?;
        if !summary.is_success() {
            bail!(
                "{} of {} TypeScript sources failed to compile",
                summary.failed,
                summary.scanned
            );
        }
        return Ok(());
    }

    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("Error setting Ctrl+C handler")?;

    let mut facility = NotifyFacility::new()?;
    use_case.start(&mut facility, running, sink.as_ref())?;
    Ok(())
}

fn display_root(root: &Path, cwd: &Path) -> String {
    root.strip_prefix(cwd)
        .ok()
        .filter(|relative| !relative.as_os_str().is_empty())
        .unwrap_or(root)
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_shown_relative_to_cwd() {
        assert_eq!(
            display_root(Path::new("/srv/site/www/js"), Path::new("/srv/site")),
            "www/js"
        );
        assert_eq!(
            display_root(Path::new("/opt/js"), Path::new("/srv/site")),
            "/opt/js"
        );
        assert_eq!(display_root(Path::new("/srv"), Path::new("/srv")), "/srv");
    }
}
