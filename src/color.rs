use thiserror::Error;

/// A hex color string that does not hold exactly six hex digits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color {input:?}: expected 6 hex digits after an optional '#'")]
pub struct FormatError {
    pub input: String,
}

/// An opaque sRGB color as it appears in mapping tables and reports.
///
/// Ordering follows `(r, g, b)`, which is also the lexicographic order of
/// the uppercase hex form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Quantize a normalized RGBA quadruple. Alpha is dropped.
    ///
    /// Each channel is scaled by 255 and truncated toward zero. Out of range
    /// input saturates into `0..=255` and NaN becomes 0.
    pub fn from_rgba(r: f64, g: f64, b: f64, _a: f64) -> Self {
        Self {
            r: quantize(r),
            g: quantize(g),
            b: quantize(b),
        }
    }

    /// Parse a hex color string like `#ff8800`, `#FF8800` or `ff8800`.
    pub fn from_hex(hex: &str) -> Result<Self, FormatError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(FormatError {
                input: hex.to_string(),
            });
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| FormatError {
                input: hex.to_string(),
            })
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Serialize to uppercase hex `#RRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Normalized `[r, g, b, a]` with alpha fixed to fully opaque.
    pub fn to_rgba(self) -> [f64; 4] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
            1.0,
        ]
    }

    /// Convert to `palette::Srgb<u8>`.
    pub fn to_srgb_u8(self) -> palette::Srgb<u8> {
        palette::Srgb::new(self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

// Float-to-int `as` truncates toward zero and saturates.
fn quantize(channel: f64) -> u8 {
    (channel * 255.0) as u8
}

/// Hex string for a normalized RGBA quadruple.
pub fn decode(r: f64, g: f64, b: f64, a: f64) -> String {
    Color::from_rgba(r, g, b, a).to_hex()
}

/// Normalized RGBA quadruple for a hex string, alpha always `1.0`.
pub fn encode(hex: &str) -> Result<[f64; 4], FormatError> {
    Color::from_hex(hex).map(Color::to_rgba)
}
