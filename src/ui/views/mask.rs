use plaisio_console::domain::value_objects::{describe, MaskInfo};
use plaisio_console::EventMask;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_mask(mask: EventMask, supports_color: bool, supports_unicode: bool) -> String {
    let mut header = CommandHeader::new(Icon::Mask, format!("Event mask {}", mask));
    header.add("Hex", format!("0x{:08x}", mask.bits()));
    if let Some(info) = describe(mask).filter(|info| !info.is_single_flag()) {
        header.add("Alias", info.name);
    }
    let mut out = header.render(supports_color, supports_unicode);

    let flags: Vec<&MaskInfo> = mask.flags().collect();
    let width = flags.iter().map(|info| info.name.len()).max().unwrap_or(0);
    for info in &flags {
        out.push_str(&format!(
            "  {} {:>10}  {}\n",
            ColoredText::info(format!("{:width$}", info.name, width = width))
                .render(supports_color),
            info.mask.bits(),
            info.description
        ));
    }

    let known = flags
        .iter()
        .fold(EventMask::EMPTY, |acc, info| acc | info.mask);
    let unknown = mask.difference(known);
    if !unknown.is_empty() {
        out.push_str(&format!(
            "  {} Unknown bits 0x{:08x}\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            unknown.bits()
        ));
    } else if flags.is_empty() {
        out.push_str(&format!(
            "  {}\n",
            ColoredText::dim("No flags set").render(supports_color)
        ));
    }
    out
}
