// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump for laid-out sectors.

use kurbo::Rect;
use peniko::Color;
use vizir_pie::Sector;

/// Fill used for sectors without a palette color.
const DEFAULT_FILL: &str = "#808080";

pub(crate) fn to_svg_string(sectors: &[Sector]) -> String {
    let view_box = view_box(sectors).unwrap_or_else(|| Rect::new(0.0, 0.0, 100.0, 100.0));
    let mut out = String::new();

    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    out.push_str(&format!(
        r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
        view_box.x0,
        view_box.y0,
        view_box.width(),
        view_box.height(),
        view_box.width(),
        view_box.height()
    ));
    out.push('\n');

    // Layout order is paint order: larger sectors come last and end up on top.
    for sector in sectors {
        out.push_str(&format!(r#"<path d="{}""#, sector.path));
        write_fill_attr(&mut out, sector.color);
        out.push_str(&format!(
            r#" data-category="{}""#,
            escape_xml(&sector.category.to_string())
        ));
        if let Some(id) = &sector.id {
            out.push_str(&format!(r#" data-id="{}""#, escape_xml(&id.to_string())));
        }
        out.push_str("/>\n");
    }

    out.push_str("</svg>\n");
    out
}

fn view_box(sectors: &[Sector]) -> Option<Rect> {
    let rect = sectors
        .iter()
        .map(Sector::bounds)
        .reduce(|a, b| a.union(b))?;
    // Add a small padding margin.
    let pad = 10.0;
    Some(Rect::new(
        rect.x0 - pad,
        rect.y0 - pad,
        rect.x1 + pad,
        rect.y1 + pad,
    ))
}

pub(crate) fn hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

fn write_fill_attr(out: &mut String, color: Option<Color>) {
    let Some(color) = color else {
        out.push_str(&format!(r#" fill="{DEFAULT_FILL}""#));
        return;
    };
    out.push_str(&format!(r#" fill="{}""#, hex(color)));
    let a = color.to_rgba8().a;
    if a != 255 {
        out.push_str(&format!(r#" fill-opacity="{}""#, f64::from(a) / 255.0));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
