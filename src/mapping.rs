use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use thiserror::Error;

use crate::color::{Color, FormatError};
use crate::pipeline::rewrite::ColorLookup;

/// Errors raised while building a [`ColorMapping`].
#[derive(Debug, Error)]
pub enum MappingError {
    #[error("bad source color in mapping")]
    Source(#[source] FormatError),
    #[error("bad target color for {source_hex}")]
    Target {
        source_hex: String,
        #[source]
        error: FormatError,
    },
    #[error("{source_hex} is mapped to both {first} and {second}")]
    Conflict {
        source_hex: String,
        first: String,
        second: String,
    },
    #[error("expected OLD=NEW, got {0:?}")]
    Pair(String),
    #[error("mapping file must be a JSON object of \"#OLD\": \"#NEW\" strings")]
    Shape,
}

/// Built-in remapping tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Preset {
    /// Navy and sky blues, plus pale pink highlights, to the teal palette.
    BlueToTeal,
    /// Magenta, coral and salmon pinks to calm teals of matching weight.
    PinkToTeal,
}

const BLUE_TO_TEAL: [(&str, &str); 7] = [
    ("#163C79", "#006d75"),
    ("#274F88", "#13c2c2"),
    ("#396CAA", "#5cdbd3"),
    ("#5692CE", "#5cdbd3"),
    ("#D3EBFF", "#b5f5ec"),
    ("#FFD3FD", "#b3ecff"),
    ("#FFD4FD", "#b3ecff"),
];

const PINK_TO_TEAL: [(&str, &str); 9] = [
    // deep pinks
    ("#AC0073", "#006d75"),
    ("#B70083", "#13c2c2"),
    ("#D2008D", "#5cdbd3"),
    // orange-leaning pinks
    ("#C13C1A", "#36cfc9"),
    ("#DB5125", "#5cdbd3"),
    ("#EE5F2D", "#87e8de"),
    // light pinks
    ("#EA9C92", "#b5f5ec"),
    ("#FF2C9C", "#b3ecff"),
    ("#FFC2AF", "#e6fffb"),
];

impl Preset {
    pub fn pairs(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Preset::BlueToTeal => &BLUE_TO_TEAL,
            Preset::PinkToTeal => &PINK_TO_TEAL,
        }
    }

    pub fn mapping(self) -> ColorMapping {
        // The tables are constants checked by the tests below.
        ColorMapping::parse(self.pairs().iter().copied()).unwrap_or_default()
    }
}

/// A validated old → new color table.
///
/// Every source and target has already been through the codec, so a rewrite
/// pass driven by a `ColorMapping` cannot fail half-way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorMapping {
    entries: BTreeMap<String, (Color, String)>,
}

impl ColorMapping {
    /// Build a table from `(old, new)` hex pairs. Sources are normalized to
    /// uppercase so they match the walker's decoded colors. Repeating a
    /// source with the same target is allowed.
    ///
    /// # Errors
    ///
    /// Fails on the first invalid color or conflicting repeated source.
    pub fn parse<I, K, V>(pairs: I) -> Result<Self, MappingError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut mapping = Self::default();
        for (old, new) in pairs {
            let source = Color::from_hex(old.as_ref()).map_err(MappingError::Source)?;
            let target = Color::from_hex(new.as_ref()).map_err(|error| MappingError::Target {
                source_hex: source.to_hex(),
                error,
            })?;
            if let Some((existing, _)) = mapping.entries.get(&source.to_hex()) {
                if *existing != target {
                    return Err(MappingError::Conflict {
                        source_hex: source.to_hex(),
                        first: existing.to_hex(),
                        second: target.to_hex(),
                    });
                }
            }
            mapping.insert(source, target);
        }
        Ok(mapping)
    }

    /// Load a JSON object of `"#OLD": "#NEW"` strings.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, is not JSON, has the wrong shape, or
    /// holds an invalid color.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read mapping file: {}", path.display()))?;
        let value: Value = serde_json::from_str(&text)
            .with_context(|| format!("invalid JSON in mapping file: {}", path.display()))?;
        Self::from_json(&value).with_context(|| format!("in mapping file: {}", path.display()))
    }

    /// Build a table from an already parsed JSON object.
    ///
    /// # Errors
    ///
    /// Fails on a non-object, non-string values, or invalid colors.
    pub fn from_json(value: &Value) -> Result<Self, MappingError> {
        let Value::Object(map) = value else {
            return Err(MappingError::Shape);
        };
        let pairs = map
            .iter()
            .map(|(old, new)| new.as_str().map(|new| (old.as_str(), new)))
            .collect::<Option<Vec<_>>>()
            .ok_or(MappingError::Shape)?;
        Self::parse(pairs)
    }

    /// Apply `other` on top of `self`; its entries win.
    pub fn merge(&mut self, other: ColorMapping) {
        self.entries.extend(other.entries);
    }

    pub fn insert(&mut self, source: Color, target: Color) {
        self.entries
            .insert(source.to_hex(), (target, target.to_hex()));
    }

    pub fn get(&self, source: Color) -> Option<Color> {
        self.entries.get(&source.to_hex()).map(|(target, _)| *target)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(old, new)` hex pairs in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(source, (_, target))| (source.as_str(), target.as_str()))
    }
}

impl ColorLookup for ColorMapping {
    fn target(&self, current: &str) -> Option<&str> {
        self.entries.get(current).map(|(_, target)| target.as_str())
    }
}

/// Parse a command-line `OLD=NEW` pair, e.g. `#FF0000=#00FF00`.
///
/// # Errors
///
/// Fails if there is no `=` or either side is not a hex color.
pub fn parse_pair(pair: &str) -> Result<(Color, Color), MappingError> {
    let (old, new) = pair
        .split_once('=')
        .ok_or_else(|| MappingError::Pair(pair.to_string()))?;
    let source = Color::from_hex(old.trim()).map_err(MappingError::Source)?;
    let target = Color::from_hex(new.trim()).map_err(|error| MappingError::Target {
        source_hex: source.to_hex(),
        error,
    })?;
    Ok((source, target))
}
