use bmfont::{Font, Info};
use std::fmt::Write;

fn style(info: &Info) -> String {
    let flags = [
        (info.is_bold(), "bold"),
        (info.is_italic(), "italic"),
        (info.is_smooth(), "smooth"),
        (info.is_unicode(), "unicode"),
        (info.is_fixed_height(), "fixed-height"),
    ];
    let set: Vec<&str> = flags.iter().filter(|(on, _)| *on).map(|(_, name)| *name).collect();
    if set.is_empty() {
        "regular".to_string()
    } else {
        set.join(", ")
    }
}

/// Human readable summary for `inspect`.
pub fn summary(font: &Font) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    match &font.info {
        Some(info) => {
            writeln!(out, "BMFont: {} ({}px, {})", info.name(), info.font_size, style(info))?;
            writeln!(
                out,
                "  Padding: {} {} {} {}, spacing: {} {}, outline: {}",
                info.padding_up,
                info.padding_right,
                info.padding_down,
                info.padding_left,
                info.spacing_horiz,
                info.spacing_vert,
                info.outline
            )?;
        }
        None => writeln!(out, "BMFont: (no info block)")?,
    }
    if let Some(common) = &font.common {
        writeln!(
            out,
            "  Line height: {}, base: {}",
            common.line_height, common.base
        )?;
        writeln!(
            out,
            "  Atlas: {}x{}, {} page(s) declared{}",
            common.scale_w,
            common.scale_h,
            common.pages,
            if common.is_packed() { ", packed" } else { "" }
        )?;
    }
    for (i, page) in font.pages.iter().enumerate() {
        writeln!(out, "  Page {i}: {page}")?;
    }
    writeln!(out, "  Defined characters: {}", font.chars.len())?;
    write!(out, "  Kerning pairs: {}", font.kerning_pairs.len())?;
    Ok(out)
}

/// One line per glyph for `chars`.
pub fn char_table(font: &Font) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(out, "id\tchar\tx\ty\tw\th\txoff\tyoff\tadv\tpage\tchnl")?;
    for c in &font.chars {
        let shown = char::from_u32(c.id)
            .filter(|ch| !ch.is_control())
            .unwrap_or('?');
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            c.id, shown, c.x, c.y, c.width, c.height, c.xoffset, c.yoffset, c.xadvance, c.page, c.chnl
        )?;
    }
    Ok(out)
}
