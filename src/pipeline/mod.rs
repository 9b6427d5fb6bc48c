pub mod detect;
pub mod extract;
pub mod family;
pub mod rewrite;

pub use extract::{extract_color_counts, extract_colors};
pub use rewrite::{rewrite_colors, rewrite_colors_with, ColorLookup};
