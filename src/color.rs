//! Colour maths: OKLCH to gamma-encoded sRGB, and deriving a legible 'brand colour' from a
//! [`Seed`].

use rgb::RGB8;
use thiserror::Error;

use crate::seed::Seed;

/// Hues span the full circle; chroma and lightness are kept in narrow bands so that every derived
/// colour is vivid but still legible under white or black overlay text.
const CHROMA_MIN: f64 = 0.10;
const CHROMA_RANGE: f64 = 0.06;
const LIGHTNESS_MIN: f64 = 0.55;
const LIGHTNESS_RANGE: f64 = 0.13;

/// Converts an OKLCH coordinate to an 8-bit sRGB colour.  Out-of-gamut inputs are clamped
/// component-wise, never wrapped.
pub fn oklch_to_srgb(lightness: f64, chroma: f64, hue_deg: f64) -> RGB8 {
    let hue = hue_deg.to_radians();
    let a = chroma * hue.cos();
    let b = chroma * hue.sin();

    // OKLab -> LMS (cube-rooted)
    let l_ = lightness + 0.3963377774 * a + 0.2158037573 * b;
    let m_ = lightness - 0.1055613458 * a - 0.0638541728 * b;
    let s_ = lightness - 0.0894841775 * a - 1.2914855480 * b;

    let l = l_.powf(3.0);
    let m = m_.powf(3.0);
    let s = s_.powf(3.0);

    // LMS -> linear sRGB
    let red = 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s;
    let green = -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s;
    let blue = -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s;

    RGB8::new(encode_channel(red), encode_channel(green), encode_channel(blue))
}

/// sRGB transfer function followed by truncation to a byte
fn encode_channel(linear: f64) -> u8 {
    let encoded = if linear <= 0.0031308 {
        12.92 * linear
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    };
    // NaN also ends up as 0 here, since every comparison with it fails
    let clamped = if encoded > 1.0 {
        1.0
    } else if encoded >= 0.0 {
        encoded
    } else {
        0.0
    };
    (clamped * 255.0) as u8
}

/// Derives the primary colour of a seed: bytes 0-1 pick the hue, byte 2 the chroma and byte 3 the
/// lightness.
pub fn derive_color(seed: &Seed) -> RGB8 {
    let hue = seed.u16_be(0) as f64 / u16::MAX as f64 * 360.0;
    let chroma = CHROMA_MIN + seed.unit(2) * CHROMA_RANGE;
    let lightness = LIGHTNESS_MIN + seed.unit(3) * LIGHTNESS_RANGE;
    oklch_to_srgb(lightness, chroma, hue)
}

/// Builds a colour from a `0xrrggbb` literal, for palette constants
pub const fn rgb_hex(hex: u32) -> RGB8 {
    RGB8 {
        r: (hex >> 16) as u8,
        g: (hex >> 8) as u8,
        b: hex as u8,
    }
}

pub const WHITE: RGB8 = rgb_hex(0xffffff);
pub const BLACK: RGB8 = rgb_hex(0x000000);

/// Formats a colour as lower-case `#rrggbb`
pub fn hex(color: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

/// The ways that a user-supplied colour string can be malformed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("colour `{0}` should have 3 or 6 hex digits")]
    BadLength(String),
    #[error("colour `{0}` contains non-hex characters")]
    BadDigit(String),
}

/// Parses `#rrggbb`, `rrggbb`, `#rgb` or `rgb`
pub fn parse_hex(s: &str) -> Result<RGB8, ParseColorError> {
    let trimmed = s.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ParseColorError::BadDigit(s.to_owned()));
    }
    // All chars are ASCII from here on, so byte slicing is safe
    let expanded = match digits.len() {
        6 => digits.to_owned(),
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        _ => return Err(ParseColorError::BadLength(s.to_owned())),
    };
    let channel = |i: usize| {
        u8::from_str_radix(&expanded[i..i + 2], 16)
            .map_err(|_| ParseColorError::BadDigit(s.to_owned()))
    };
    Ok(RGB8::new(channel(0)?, channel(2)?, channel(4)?))
}
