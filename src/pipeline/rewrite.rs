use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde_json::Value;

use crate::color::{self, Color, FormatError};
use crate::pipeline::detect::{color_quad, color_slot};

/// Old-hex to new-hex lookup consulted once per color node.
///
/// Keys are compared against the uppercase `#RRGGBB` form of the node's
/// current color.
pub trait ColorLookup {
    fn target(&self, current: &str) -> Option<&str>;
}

impl<S: BuildHasher> ColorLookup for HashMap<String, String, S> {
    fn target(&self, current: &str) -> Option<&str> {
        self.get(current).map(String::as_str)
    }
}

impl ColorLookup for BTreeMap<String, String> {
    fn target(&self, current: &str) -> Option<&str> {
        self.get(current).map(String::as_str)
    }
}

impl<L: ColorLookup + ?Sized> ColorLookup for &L {
    fn target(&self, current: &str) -> Option<&str> {
        (**self).target(current)
    }
}

/// Replace every color node whose color is a key of `mapping` with the mapped
/// color, in place. Returns the number of nodes changed.
///
/// The written quadruple is always fully opaque. This is one substitution
/// pass: a target that is itself a key is not followed.
///
/// # Errors
///
/// Returns [`FormatError`] as soon as a mapped target is not a valid hex
/// color. Nodes visited before that point stay rewritten.
pub fn rewrite_colors<L: ColorLookup + ?Sized>(
    value: &mut Value,
    mapping: &L,
) -> Result<usize, FormatError> {
    rewrite_colors_with(value, mapping, |_, _| {})
}

/// [`rewrite_colors`] with a callback invoked as `(old, new)` for every node
/// that changed.
///
/// # Errors
///
/// Same as [`rewrite_colors`].
pub fn rewrite_colors_with<L, F>(
    value: &mut Value,
    mapping: &L,
    mut on_change: F,
) -> Result<usize, FormatError>
where
    L: ColorLookup + ?Sized,
    F: FnMut(&str, &str),
{
    let mut changes = 0;
    visit(value, mapping, &mut on_change, &mut changes)?;
    Ok(changes)
}

fn visit<L, F>(
    value: &mut Value,
    mapping: &L,
    on_change: &mut F,
    changes: &mut usize,
) -> Result<(), FormatError>
where
    L: ColorLookup + ?Sized,
    F: FnMut(&str, &str),
{
    match value {
        Value::Object(map) => {
            if let Some([r, g, b, a]) = color_quad(map) {
                let current = Color::from_rgba(r, g, b, a).to_hex();
                if let Some(new_hex) = mapping.target(&current) {
                    let rgba = color::encode(new_hex)?;
                    if let Some(slot) = color_slot(map) {
                        *slot = Value::Array(rgba.into_iter().map(Value::from).collect());
                        *changes += 1;
                        on_change(&current, new_hex);
                    }
                }
            }
            for child in map.values_mut() {
                visit(child, mapping, on_change, changes)?;
            }
        }
        Value::Array(items) => {
            for item in items {
                visit(item, mapping, on_change, changes)?;
            }
        }
        _ => {}
    }
    Ok(())
}
