use palette::{IntoColor, Oklch, Srgb};

use crate::color::Color;

/// Oklch chroma below which a color has no meaningful hue.
pub const NEUTRAL_CHROMA: f32 = 0.03;

/// Coarse hue buckets used to pick out a group of related colors, e.g. all
/// the pinks in an animation before remapping them to another palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, clap::ValueEnum)]
pub enum HueFamily {
    Neutral,
    Red,
    Orange,
    Yellow,
    Green,
    Teal,
    Blue,
    Purple,
    Pink,
}

/// Upper hue bound (exclusive, degrees) of each chromatic family, in order.
const HUE_BOUNDS: [(f32, HueFamily); 8] = [
    (45.0, HueFamily::Red),
    (85.0, HueFamily::Orange),
    (125.0, HueFamily::Yellow),
    (170.0, HueFamily::Green),
    (230.0, HueFamily::Teal),
    (285.0, HueFamily::Blue),
    (320.0, HueFamily::Purple),
    (360.0, HueFamily::Pink),
];

impl HueFamily {
    /// Classify by Oklch hue angle, or `Neutral` for near-gray colors.
    pub fn classify(color: Color) -> Self {
        let srgb: Srgb<f32> = color.to_srgb_u8().into_format();
        let oklch: Oklch = srgb.into_color();
        if oklch.chroma < NEUTRAL_CHROMA {
            return HueFamily::Neutral;
        }
        let hue = oklch.hue.into_positive_degrees();
        HUE_BOUNDS
            .iter()
            .find(|(upper, _)| hue < *upper)
            .map_or(HueFamily::Neutral, |(_, family)| *family)
    }
}

impl std::fmt::Display for HueFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            HueFamily::Neutral => "neutral",
            HueFamily::Red => "red",
            HueFamily::Orange => "orange",
            HueFamily::Yellow => "yellow",
            HueFamily::Green => "green",
            HueFamily::Teal => "teal",
            HueFamily::Blue => "blue",
            HueFamily::Purple => "purple",
            HueFamily::Pink => "pink",
        };
        f.write_str(name)
    }
}

/// Keep only the hex colors that belong to `family`. Strings that are not
/// valid hex colors are dropped.
pub fn filter_family<'a, I>(colors: I, family: HueFamily) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    colors
        .into_iter()
        .filter(|hex| {
            Color::from_hex(hex).is_ok_and(|color| HueFamily::classify(color) == family)
        })
        .cloned()
        .collect()
}
