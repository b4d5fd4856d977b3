// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie/donut chart demo for `vizir_pie`.
//!
//! ```text
//! vizir_pie_demo 3 1 4 1 5 --inner-radius 40 --offset 4 > pie.svg
//! vizir_pie_demo --data items.json --format json
//! ```

mod svg;

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};
use log::info;
use peniko::Color;
use peniko::color::palette::css;
use peniko::color::{Srgb, parse_color};
use vizir_pie::{ChartConfig, DEFAULT_PRECISION, RawItem, RawNumber, Sector, layout, normalize};

#[derive(Parser, Debug)]
#[command(
    name = "vizir_pie_demo",
    version,
    about = "Lay out a pie/donut chart and print it as SVG or JSON"
)]
struct Cli {
    /// Values to chart. Ignored when --data is given.
    #[arg(allow_negative_numbers = true)]
    values: Vec<String>,
    /// JSON file with an array of numbers or {"value", "offset", "category", "id"} records.
    #[arg(long)]
    data: Option<PathBuf>,
    /// Outer radius.
    #[arg(short, long, default_value_t = 100.0)]
    radius: f64,
    /// Inner radius (0 for a pie).
    #[arg(long, default_value_t = 0.0)]
    inner_radius: f64,
    /// Explode distance applied to every sector.
    #[arg(long, default_value_t = 0.0)]
    offset: f64,
    /// Comma-separated CSS colors (e.g. "tomato,#4682b4").
    #[arg(long, value_delimiter = ',')]
    colors: Vec<String>,
    /// Decimal places kept in path data.
    #[arg(long, default_value_t = DEFAULT_PRECISION)]
    precision: u8,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutFormat::Svg)]
    format: OutFormat,
    /// Write to this file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutFormat {
    Svg,
    Json,
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let raw = read_items(&cli)?;
    let items = normalize(&raw).context("invalid input data")?;
    let config = ChartConfig::new(cli.radius)
        .with_inner_radius(cli.inner_radius)
        .with_offset(cli.offset)
        .with_colors(palette(&cli.colors)?)
        .with_precision(cli.precision);

    let sectors = layout(&items, &config).context("layout failed")?;
    info!("{} item(s) -> {} sector(s)", items.len(), sectors.len());

    let rendered = match cli.format {
        OutFormat::Svg => svg::to_svg_string(&sectors),
        OutFormat::Json => to_json(&sectors)?,
    };
    match &cli.out {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("writing {}", path.display()))?,
        None => print!("{rendered}"),
    }
    Ok(())
}

fn read_items(cli: &Cli) -> Result<Vec<RawItem>> {
    if let Some(path) = &cli.data {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        return serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", path.display()));
    }
    if cli.values.is_empty() {
        return Err(anyhow!("no values given (pass numbers or --data <file>)"));
    }
    Ok(cli
        .values
        .iter()
        .map(|v| RawItem::Value(RawNumber::from(v.as_str())))
        .collect())
}

fn palette(names: &[String]) -> Result<Vec<Color>> {
    if names.is_empty() {
        return Ok(vec![
            css::CORNFLOWER_BLUE,
            css::TOMATO,
            css::GOLD,
            css::MEDIUM_SEA_GREEN,
            css::ORCHID,
        ]);
    }
    names
        .iter()
        .map(|name| {
            parse_color(name.trim())
                .map(|c| c.to_alpha_color::<Srgb>())
                .map_err(|e| anyhow!("invalid color {name:?}: {e}"))
        })
        .collect()
}

fn to_json(sectors: &[Sector]) -> Result<String> {
    let rows: Vec<serde_json::Value> = sectors
        .iter()
        .map(|s| {
            serde_json::json!({
                "category": s.category,
                "id": s.id,
                "value": s.value,
                "start": s.start,
                "arc": s.arc,
                "offset": s.offset,
                "color": s.color.map(svg::hex),
                "path": s.path,
            })
        })
        .collect();
    Ok(serde_json::to_string_pretty(&rows)? + "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_values_become_text_items() {
        let cli = Cli::parse_from(["vizir_pie_demo", "1", "-2", "3.5"]);
        let raw = read_items(&cli).unwrap();
        let items = normalize(&raw).unwrap();
        let values: Vec<f64> = items.iter().map(|i| i.value).collect();
        assert_eq!(values, vec![1.0, -2.0, 3.5]);
    }

    #[test]
    fn missing_values_is_an_error() {
        let cli = Cli::parse_from(["vizir_pie_demo"]);
        assert!(read_items(&cli).is_err(), "no values and no --data");
    }

    #[test]
    fn palette_parses_css_colors() {
        let colors = palette(&["tomato".into(), " #000000 ".into()]).unwrap();
        assert_eq!(svg::hex(colors[0]), "#ff6347");
        assert_eq!(svg::hex(colors[1]), "#000000");
        assert!(palette(&["not-a-color".into()]).is_err(), "bad color name");
        assert_eq!(palette(&[]).unwrap().len(), 5);
    }

    #[test]
    fn json_output_lists_sectors_in_drawing_order() {
        let cli = Cli::parse_from(["vizir_pie_demo", "3", "1", "--format", "json"]);
        assert_eq!(cli.format, OutFormat::Json);
        let items = normalize(&read_items(&cli).unwrap()).unwrap();
        let sectors = layout(&items, &ChartConfig::new(cli.radius)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&to_json(&sectors).unwrap()).unwrap();
        assert_eq!(json[0]["value"], 1.0);
        assert_eq!(json[0]["category"], 2);
        let arc = json[1]["arc"].as_f64().unwrap();
        assert!((arc - 270.0).abs() < 1e-9, "{arc}");
        assert!(json[0]["color"].is_null(), "no palette configured");
    }
}
