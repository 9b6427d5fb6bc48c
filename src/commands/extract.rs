use std::collections::BTreeMap;
use std::fmt::Write as _;

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::{ExtractArgs, ListFormat};
use crate::document;
use crate::pipeline::extract::extract_color_counts;
use crate::pipeline::family::{filter_family, HueFamily};

#[derive(Debug, Serialize)]
struct CountedColor<'a> {
    color: &'a str,
    count: usize,
}

/// Load the document, collect its colors and render them in the requested
/// format.
///
/// # Errors
///
/// Fails if the document cannot be loaded.
pub fn run(args: &ExtractArgs) -> Result<String> {
    let doc = document::load(&args.file)?;
    let counts = extract_color_counts(&doc);
    info!(
        file = %args.file.display(),
        unique = counts.len(),
        "extracted colors"
    );

    let counts = match args.family {
        Some(family) => keep_family(counts, family),
        None => counts,
    };

    render(&counts, args.format, args.counts)
}

fn keep_family(counts: BTreeMap<String, usize>, family: HueFamily) -> BTreeMap<String, usize> {
    let kept = filter_family(counts.keys(), family);
    debug!(%family, kept = kept.len(), "filtered by hue family");
    counts
        .into_iter()
        .filter(|(hex, _)| kept.contains(hex))
        .collect()
}

/// Render colors, sorted by hex value.
///
/// # Errors
///
/// Fails only if JSON serialization fails.
pub fn render(counts: &BTreeMap<String, usize>, format: ListFormat, with_counts: bool) -> Result<String> {
    let mut out = String::new();
    match format {
        ListFormat::List => {
            if counts.is_empty() {
                out.push_str("no colors found\n");
                return Ok(out);
            }
            for (i, (hex, count)) in counts.iter().enumerate() {
                if with_counts {
                    writeln!(out, "{:2}. {hex}  ×{count}", i + 1)?;
                } else {
                    writeln!(out, "{:2}. {hex}", i + 1)?;
                }
            }
            writeln!(out, "\n{} unique colors", counts.len())?;
        }
        ListFormat::Css => {
            for (i, hex) in counts.keys().enumerate() {
                writeln!(out, "--color-{}: {hex};", i + 1)?;
            }
        }
        ListFormat::Json => {
            let json = if with_counts {
                let rows: Vec<CountedColor<'_>> = counts
                    .iter()
                    .map(|(color, count)| CountedColor {
                        color,
                        count: *count,
                    })
                    .collect();
                serde_json::to_string_pretty(&rows)?
            } else {
                let colors: Vec<&String> = counts.keys().collect();
                serde_json::to_string_pretty(&colors)?
            };
            out.push_str(&json);
            out.push('\n');
        }
    }
    Ok(out)
}
