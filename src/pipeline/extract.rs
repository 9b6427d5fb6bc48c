use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use crate::color::Color;
use crate::pipeline::detect::color_quad;

/// Collect every distinct color in the document as an uppercase `#RRGGBB`
/// string.
///
/// Every object is checked for the color node shape and then descended into
/// whether or not it matched, so colors nested inside other colors' siblings
/// (gradients, effects, precomps) are found too.
pub fn extract_colors(value: &Value) -> BTreeSet<String> {
    let mut colors = BTreeSet::new();
    visit(value, &mut |color| {
        colors.insert(color.to_hex());
    });
    colors
}

/// Like [`extract_colors`], but counts how many color nodes hold each color.
pub fn extract_color_counts(value: &Value) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    visit(value, &mut |color| {
        *counts.entry(color.to_hex()).or_insert(0) += 1;
    });
    counts
}

fn visit(value: &Value, found: &mut impl FnMut(Color)) {
    match value {
        Value::Object(map) => {
            if let Some([r, g, b, a]) = color_quad(map) {
                found(Color::from_rgba(r, g, b, a));
            }
            for child in map.values() {
                visit(child, found);
            }
        }
        Value::Array(items) => {
            for item in items {
                visit(item, found);
            }
        }
        _ => {}
    }
}
