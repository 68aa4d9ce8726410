//! Backdrop colors.
use arrayvec::ArrayVec;
use quick_error::quick_error;
use rgb::{ComponentMap, RGBA};

use super::{layout::MAX_AVATARS, pal::RGBAF32};

/// The colors of the backdrop discs drawn beneath avatar images, indexed by
/// avatar index.
///
/// A palette has between one and [`MAX_AVATARS`] entries. Avatar `i` uses the
/// entry `i % len`.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: ArrayVec<[RGBAF32; MAX_AVATARS]>,
}

quick_error! {
    #[derive(Debug, Clone, PartialEq)]
    pub enum ParseColorError {
        MissingHash {
            display("a color must start with '#'")
        }
        BadLength(len: usize) {
            display("a color must have 3, 4, 6, or 8 hexadecimal digits, not {}", len)
        }
        BadDigit(c: char) {
            display("'{}' is not a hexadecimal digit", c)
        }
    }
}

quick_error! {
    #[derive(Debug, Clone, PartialEq)]
    pub enum PaletteError {
        Empty {
            display("a palette must have at least one color")
        }
        TooManyColors(len: usize) {
            display("a palette can have at most 5 colors, not {}", len)
        }
        Color(index: usize, err: ParseColorError) {
            display("palette entry {}: {}", index, err)
        }
    }
}

impl Default for Palette {
    /// Pink, purple, blue, light green, and orange.
    fn default() -> Self {
        Self {
            colors: [
                rgb8(0xe9, 0x1e, 0x63),
                rgb8(0x9c, 0x27, 0xb0),
                rgb8(0x21, 0x96, 0xf3),
                rgb8(0x8b, 0xc3, 0x4a),
                rgb8(0xff, 0x98, 0x00),
            ]
            .into(),
        }
    }
}

impl Palette {
    /// Construct a `Palette` from a list of colors.
    pub fn new(colors: &[RGBAF32]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        if colors.len() > MAX_AVATARS {
            return Err(PaletteError::TooManyColors(colors.len()));
        }
        Ok(Self {
            colors: colors.iter().cloned().collect(),
        })
    }

    /// Parse a comma-separated list of hexadecimal colors, e.g.,
    /// `"#e91e63, #9c27b0"`.
    pub fn parse(list: &str) -> Result<Self, PaletteError> {
        let colors = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .enumerate()
            .map(|(i, s)| parse_hex_color(s).map_err(|e| PaletteError::Color(i, e)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&colors)
    }

    /// Get the color for the avatar `index`.
    pub fn color(&self, index: usize) -> RGBAF32 {
        self.colors[index % self.colors.len()]
    }

    pub fn colors(&self) -> &[RGBAF32] {
        &self.colors
    }
}

fn rgb8(r: u8, g: u8, b: u8) -> RGBAF32 {
    RGBA::new(r, g, b, 0xff).map(|x| x as f32 / 255.0)
}

/// Parse a CSS-style hexadecimal color (`#rgb`, `#rgba`, `#rrggbb`, or
/// `#rrggbbaa`).
pub fn parse_hex_color(s: &str) -> Result<RGBAF32, ParseColorError> {
    if !s.starts_with('#') {
        return Err(ParseColorError::MissingHash);
    }

    let hex = &s[1..];
    let len = hex.chars().count();
    if ![3, 4, 6, 8].contains(&len) {
        return Err(ParseColorError::BadLength(len));
    }

    let digits = hex
        .chars()
        .map(|c| {
            c.to_digit(16)
                .map(|d| d as u8)
                .ok_or(ParseColorError::BadDigit(c))
        })
        .collect::<Result<ArrayVec<[u8; 8]>, _>>()?;

    let channels: ArrayVec<[u8; 4]> = if len <= 4 {
        digits.iter().map(|&d| d * 0x11).collect()
    } else {
        digits.chunks(2).map(|p| p[0] * 16 + p[1]).collect()
    };

    let a = channels.get(3).cloned().unwrap_or(0xff);
    Ok(RGBA::new(channels[0], channels[1], channels[2], a).map(|x| x as f32 / 255.0))
}
