use serde_json::{Map, Value};

/// Return the `[r, g, b, a]` channels if `object` has the color node shape
/// `{"c": {"k": [r, g, b, a]}}`.
///
/// Only that exact two-level shape counts. A `"k"` array of any other length,
/// or holding anything but numbers, is not a color node.
pub fn color_quad(object: &Map<String, Value>) -> Option<[f64; 4]> {
    let Some(Value::Object(c)) = object.get("c") else {
        return None;
    };
    let Some(Value::Array(k)) = c.get("k") else {
        return None;
    };
    match k.as_slice() {
        [r, g, b, a] => Some([r.as_f64()?, g.as_f64()?, b.as_f64()?, a.as_f64()?]),
        _ => None,
    }
}

/// Mutable access to the `"k"` array of a color node, for in-place rewrites.
pub(crate) fn color_slot(object: &mut Map<String, Value>) -> Option<&mut Value> {
    object.get_mut("c")?.as_object_mut()?.get_mut("k")
}
