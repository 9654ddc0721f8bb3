//!
//! Conversion between hex strings and rgb channels, and
//! the linear interpolation used for all shades.
//!

use crate::error::ParseColorErr;

/// Rgb channels during mixing.
pub type Channels = (f64, f64, f64);

pub const WHITE: Channels = (255f64, 255f64, 255f64);
pub const BLACK: Channels = (0f64, 0f64, 0f64);

/// Parses a color of the form `#rrggbb` or `rrggbb`.
///
/// Exactly one leading '#' is stripped, the rest must be
/// 6 hex digits. Upper- and lowercase are both fine.
pub fn hex_to_rgb(hex: &str) -> Result<(u8, u8, u8), ParseColorErr> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return Err(ParseColorErr::Length(hex.to_string()));
    }
    // from_str_radix alone would accept a leading '+'.
    if !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
        return Err(ParseColorErr::Digit(hex.to_string()));
    }

    let channel = |n: usize| {
        u8::from_str_radix(&digits[n..n + 2], 16)
            .map_err(|_| ParseColorErr::Digit(hex.to_string()))
    };
    Ok((channel(0)?, channel(2)?, channel(4)?))
}

/// Formats the channels as `#rrggbb`.
///
/// Each channel is truncated toward zero, not rounded.
/// Values outside 0..=255 saturate, NaN gives 0.
pub fn rgb_to_hex(rgb: Channels) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        rgb.0 as u8, rgb.1 as u8, rgb.2 as u8
    )
}

/// Linear interpolation between two colors.
///
/// `c1 * weight + c2 * (1 - weight)` for each channel.
/// weight == 1 gives c1, weight == 0 gives c2.
/// The weight is not checked.
pub fn mix(c1: Channels, c2: Channels, weight: f64) -> Channels {
    (
        c1.0 * weight + c2.0 * (1f64 - weight),
        c1.1 * weight + c2.1 * (1f64 - weight),
        c1.2 * weight + c2.2 * (1f64 - weight),
    )
}

/// Widen u8 channels for mixing.
pub const fn rgb_to_f64(rgb: (u8, u8, u8)) -> Channels {
    (rgb.0 as f64, rgb.1 as f64, rgb.2 as f64)
}

