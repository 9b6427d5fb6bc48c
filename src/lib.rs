pub mod cli;
pub mod color;
pub mod commands;
pub mod document;
pub mod mapping;
pub mod pipeline;

pub use color::{Color, FormatError};
pub use mapping::{ColorMapping, MappingError, Preset};
pub use pipeline::{extract_colors, rewrite_colors, ColorLookup};
