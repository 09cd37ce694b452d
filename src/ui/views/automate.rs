use plaisio_console::AutomatorEvent;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_automate_header(
    root: &str,
    compiler: &str,
    once: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Watch, "Plaisio TypeScript Automator");
    header.add("Root", root);
    header.add("Compiler", compiler);
    if once {
        header.add("Mode", "compile stale sources and exit");
    } else {
        header.add("Hint", "Press Ctrl+C to stop");
    }
    header.render(supports_color, supports_unicode)
}

pub fn render_automator_event(
    timestamp: &str,
    event: &AutomatorEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = ColoredText::dim(format!("[{}]", timestamp)).render(supports_color);
    let icon = |icon: Icon| icon.colored(supports_color, supports_unicode);

    match event {
        AutomatorEvent::Started {
            root,
            directories,
            force,
        } => {
            let mode = if *force { ", recompiling everything" } else { "" };
            format!(
                "{} {} Watching {} {} under {}{}\n",
                prefix,
                icon(Icon::Watch),
                directories,
                plural(*directories, "directory", "directories"),
                root.display(),
                mode
            )
        }
        AutomatorEvent::WatchingDirectory { path, handle } => format!(
            "{} {} Watching {} (wd {})\n",
            prefix,
            icon(Icon::Arrow),
            path.display(),
            handle
        ),
        AutomatorEvent::StoppedWatching { path, handle } => format!(
            "{} {} Stopped watching {} (wd {})\n",
            prefix,
            icon(Icon::Pending),
            path.display(),
            handle
        ),
        AutomatorEvent::EventFlag {
            name,
            description,
            path,
            ..
        } => format!(
            "{} {} {} {}: {}\n",
            prefix,
            icon(Icon::Arrow),
            ColoredText::dim(*name).render(supports_color),
            path.display(),
            description
        ),
        AutomatorEvent::UnknownWatchHandle { handle, name } => format!(
            "{} {} {} ({})\n",
            prefix,
            icon(Icon::Warning),
            ColoredText::warning(format!("Event for unknown watch {}", handle))
                .render(supports_color),
            name.display()
        ),
        AutomatorEvent::ScanSkipped { message } => format!(
            "{} {} Skipped: {}\n",
            prefix,
            icon(Icon::Warning),
            message
        ),
        AutomatorEvent::Compiling { command } => {
            format!("{} {} {}\n", prefix, icon(Icon::Progress), command)
        }
        AutomatorEvent::CompileFailed {
            source,
            status,
            output,
        } => {
            let status = status
                .map(|code| format!("exit {}", code))
                .unwrap_or_else(|| "killed by signal".to_string());
            let mut out = format!(
                "{} {} {} ({})\n",
                prefix,
                icon(Icon::Error),
                ColoredText::error(format!("Compiling {} failed", source.display()))
                    .render(supports_color),
                status
            );
            for line in output {
                out.push_str(&format!("    {}\n", line));
            }
            out
        }
        AutomatorEvent::FileRemoved { path } => format!(
            "{} {} Removed {}\n",
            prefix,
            icon(Icon::Trash),
            path.display()
        ),
        AutomatorEvent::OutputFixed { path, rewritten } => {
            let what = if *rewritten {
                "Named module in"
            } else {
                "Module already named in"
            };
            format!(
                "{} {} {} {}\n",
                prefix,
                icon(Icon::Success),
                what,
                path.display()
            )
        }
        AutomatorEvent::ReconcileComplete {
            scanned,
            compiled,
            failed,
        } => {
            let summary = format!(
                "Reconciled {} {}: {} compiled",
                scanned,
                plural(*scanned, "source", "sources"),
                compiled
            );
            if *failed > 0 {
                format!(
                    "{} {} {}\n",
                    prefix,
                    icon(Icon::Warning),
                    ColoredText::warning(format!("{}, {} failed", summary, failed))
                        .render(supports_color)
                )
            } else {
                format!(
                    "{} {} {}\n",
                    prefix,
                    icon(Icon::Success),
                    ColoredText::success(summary).render(supports_color)
                )
            }
        }
        AutomatorEvent::EventFailed {
            path,
            message,
            causes,
        } => {
            let mut out = format!(
                "{} {} {}: {}\n",
                prefix,
                icon(Icon::Error),
                path.display(),
                ColoredText::error(message.as_str()).render(supports_color)
            );
            for cause in causes {
                out.push_str(&format!("    caused by: {}\n", cause));
            }
            out
        }
        AutomatorEvent::Stopped => format!(
            "\n{} {} Automator stopped.\n",
            prefix,
            icon(Icon::Watch)
        ),
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}
