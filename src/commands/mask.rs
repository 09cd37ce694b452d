use anyhow::Result;
use plaisio_console::config::Config;
use plaisio_console::presentation::ColorWhen;
use plaisio_console::EventMask;

use crate::ui::context::UiContext;
use crate::ui::views::mask::render_mask;

pub fn cmd_mask(value: EventMask, json: bool, color: Option<ColorWhen>) -> Result<()> {
    if json {
        let flags: Vec<serde_json::Value> = value
            .flags()
            .map(|info| {
                serde_json::json!({
                    "name": info.name,
                    "value": info.mask,
                    "description": info.description,
                })
            })
            .collect();
        let output = serde_json::json!({
            "event": "mask",
            "command": "mask",
            "mask": value,
            "flags": flags,
        });
        println!("{}", output);
        return Ok(());
    }

    let ui = UiContext::new(false, 0, color, &Config::default());
    print!("{}", render_mask(value, ui.color, ui.unicode));
    Ok(())
}
