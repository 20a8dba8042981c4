//! Style color resolution for the inspector.
//!
//! Element styles are written as CSS-like color strings (named colors, hex
//! literals, `rgb()`/`rgba()` functions). The inspector needs one concrete
//! opaque RGB888 triple per style so it can report an RGB565 code, so this
//! module turns a style string into a [`ResolvedColor`]:
//!
//! | Input | Result | Code |
//! |-------|--------|------|
//! | `transparent`, any alpha of 0 | [`ResolvedColor::Transparent`] | `---` |
//! | named, hex, `rgb()`, `rgba()` | [`ResolvedColor::Opaque`] | `0xABCD` |
//! | anything else | [`ResolvedColor::Unknown`] | `UNKNOWN` |
//!
//! Non-zero alpha is dropped, not blended: `rgba(6, 78, 59, 0.3)` reports the
//! first three components as-is.
//!
//! [`parse_color`] is strict and returns a [`ColorParseError`]; [`resolve`]
//! never fails and degrades errors to `Unknown`.

use core::fmt;

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use heapless::String;
use thiserror::Error;

use crate::named_colors;
use crate::rgb565::Rgb565Code;

/// Maximum characters kept from an unresolvable style string.
pub const LABEL_LEN: usize = 24;

/// Why a color string could not be parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    #[error("unknown color name")]
    UnknownName,
    #[error("malformed hex color")]
    BadHex,
    #[error("malformed color function")]
    BadFunction,
    #[error("invalid color component")]
    BadComponent,
    #[error("expected at least 3 color components, found {0}")]
    MissingComponents(usize),
}

/// A style color resolved for display and RGB565 encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolvedColor {
    /// Fully transparent; has no numeric encoding.
    Transparent,
    /// A concrete RGB888 triple.
    Opaque(Rgb888),
    /// The style string could not be resolved. Holds the (truncated) input.
    Unknown(String<LABEL_LEN>),
}

impl ResolvedColor {
    /// The triple, if the color resolved to one.
    #[inline]
    pub const fn rgb(&self) -> Option<Rgb888> {
        match self {
            Self::Opaque(color) => Some(*color),
            Self::Transparent | Self::Unknown(_) => None,
        }
    }

    /// The RGB565 encoding of this color.
    #[inline]
    pub fn code(&self) -> ColorCode {
        match self {
            Self::Transparent => ColorCode::None,
            Self::Opaque(color) => ColorCode::Packed(Rgb565Code::from(*color)),
            Self::Unknown(_) => ColorCode::Unknown,
        }
    }
}

impl fmt::Display for ResolvedColor {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Transparent => f.write_str("Transparent"),
            Self::Opaque(c) => write!(f, "#{:02X}{:02X}{:02X}", c.r(), c.g(), c.b()),
            Self::Unknown(raw) => f.write_str(raw),
        }
    }
}

/// RGB565 encoding as reported by the inspector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorCode {
    /// No encoding (transparent).
    None,
    /// Packed RGB565 value.
    Packed(Rgb565Code),
    /// Resolution failed.
    Unknown,
}

impl fmt::Display for ColorCode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::None => f.write_str("---"),
            Self::Packed(code) => fmt::Display::fmt(code, f),
            Self::Unknown => f.write_str("UNKNOWN"),
        }
    }
}

/// Resolve a style color, degrading parse failures to [`ResolvedColor::Unknown`].
pub fn resolve(input: &str) -> ResolvedColor {
    match parse_color(input) {
        Ok(color) => color,
        Err(err) => {
            log::debug!("unresolvable color {input:?}: {err}");
            ResolvedColor::Unknown(truncate(input.trim()))
        }
    }
}

/// Strictly parse a color string.
///
/// Only ever returns `Transparent` or `Opaque` on success.
pub fn parse_color(input: &str) -> Result<ResolvedColor, ColorParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ColorParseError::Empty);
    }

    if let Some(digits) = input.strip_prefix('#') {
        return parse_hex(digits);
    }

    if let Some(args) = strip_function(input, "rgba").or_else(|| strip_function(input, "rgb")) {
        return parse_rgb_function(args?);
    }

    if input.eq_ignore_ascii_case("transparent") {
        return Ok(ResolvedColor::Transparent);
    }

    named_colors::lookup(input)
        .map(ResolvedColor::Opaque)
        .ok_or(ColorParseError::UnknownName)
}

/// `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`.
fn parse_hex(digits: &str) -> Result<ResolvedColor, ColorParseError> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorParseError::BadHex);
    }

    let channel = |i: usize, width: usize| -> Result<u8, ColorParseError> {
        let part = digits.get(i * width..(i + 1) * width).ok_or(ColorParseError::BadHex)?;
        let value = u8::from_str_radix(part, 16).map_err(|_| ColorParseError::BadHex)?;
        // Short form repeats the nibble: #f80 == #ff8800
        Ok(if width == 1 { value * 17 } else { value })
    };

    let (width, has_alpha) = match digits.len() {
        3 => (1, false),
        4 => (1, true),
        6 => (2, false),
        8 => (2, true),
        _ => return Err(ColorParseError::BadHex),
    };

    if has_alpha && channel(3, width)? == 0 {
        return Ok(ResolvedColor::Transparent);
    }

    Ok(ResolvedColor::Opaque(Rgb888::new(
        channel(0, width)?,
        channel(1, width)?,
        channel(2, width)?,
    )))
}

/// Returns the argument list of `name(...)`, or `None` if `input` is not that function.
fn strip_function<'a>(
    input: &'a str,
    name: &str,
) -> Option<Result<&'a str, ColorParseError>> {
    let head = input.get(..name.len())?;
    if !head.eq_ignore_ascii_case(name) {
        return None;
    }
    let rest = input[name.len()..].trim_start();
    let inner = rest.strip_prefix('(')?;
    Some(inner.strip_suffix(')').ok_or(ColorParseError::BadFunction))
}

/// `r, g, b[, a]` or `r g b[ / a]`.
fn parse_rgb_function(args: &str) -> Result<ResolvedColor, ColorParseError> {
    let mut values = [0.0f32; 4];
    let mut count = 0;

    for token in args
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        if count == values.len() {
            return Err(ColorParseError::BadFunction);
        }
        values[count] = parse_component(token, count == 3)?;
        count += 1;
    }

    if count < 3 {
        return Err(ColorParseError::MissingComponents(count));
    }
    if count == 4 && values[3] <= 0.0 {
        return Ok(ResolvedColor::Transparent);
    }

    Ok(ResolvedColor::Opaque(Rgb888::new(
        to_channel(values[0]),
        to_channel(values[1]),
        to_channel(values[2]),
    )))
}

/// Channels are `0..=255` (or a percentage); alpha is `0..=1` (or a percentage).
fn parse_component(
    token: &str,
    is_alpha: bool,
) -> Result<f32, ColorParseError> {
    let (number, percent) = match token.strip_suffix('%') {
        Some(n) => (n, true),
        None => (token, false),
    };
    let value: f32 = number.parse().map_err(|_| ColorParseError::BadComponent)?;
    if !value.is_finite() {
        return Err(ColorParseError::BadComponent);
    }
    Ok(match (percent, is_alpha) {
        (true, true) => value / 100.0,
        (true, false) => value * 2.55,
        (false, _) => value,
    })
}

fn to_channel(value: f32) -> u8 {
    let clamped = value.clamp(0.0, 255.0);
    // Round half up; clamped is non-negative so the cast truncates toward zero.
    (clamped + 0.5) as u8
}

fn truncate(raw: &str) -> String<LABEL_LEN> {
    let mut out = String::new();
    for c in raw.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn opaque(
        r: u8,
        g: u8,
        b: u8,
    ) -> ResolvedColor {
        ResolvedColor::Opaque(Rgb888::new(r, g, b))
    }

    #[test]
    fn test_transparent_keyword() {
        let color = resolve("transparent");
        assert_eq!(color, ResolvedColor::Transparent);
        assert_eq!(color.rgb(), None);
        assert_eq!(color.code(), ColorCode::None);

        let mut label = std::string::String::new();
        core::fmt::write(&mut label, format_args!("{color} {}", color.code())).unwrap();
        assert_eq!(label, "Transparent ---");
    }

    #[test]
    fn test_zero_alpha_is_transparent() {
        assert_eq!(resolve("rgba(0, 0, 0, 0)"), ResolvedColor::Transparent);
        assert_eq!(resolve("rgba(255, 0, 0, 0.0)"), ResolvedColor::Transparent);
        assert_eq!(resolve("rgb(12 34 56 / 0%)"), ResolvedColor::Transparent);
        assert_eq!(resolve("#ff000000"), ResolvedColor::Transparent);
        assert_eq!(resolve("#f000"), ResolvedColor::Transparent);
    }

    #[test]
    fn test_translucent_keeps_first_three_components() {
        assert_eq!(resolve("rgba(6, 78, 59, 0.3)"), opaque(6, 78, 59));
        assert_eq!(resolve("#22c55e1a"), opaque(0x22, 0xC5, 0x5E));
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(resolve("orange"), opaque(255, 165, 0));
        assert_eq!(resolve("  White "), opaque(255, 255, 255));
        assert_eq!(resolve("orange").code().to_string(), "0xFD20");
    }

    #[test]
    fn test_hex_forms() {
        assert_eq!(resolve("#0e7490"), opaque(0x0E, 0x74, 0x90));
        assert_eq!(resolve("#F80"), opaque(0xFF, 0x88, 0x00));
        assert_eq!(resolve("#f80f"), opaque(0xFF, 0x88, 0x00));
    }

    #[test]
    fn test_rgb_function_forms() {
        assert_eq!(resolve("rgb(24, 24, 27)"), opaque(24, 24, 27));
        assert_eq!(resolve("RGB(24,24,27)"), opaque(24, 24, 27));
        assert_eq!(resolve("rgb(24 24 27)"), opaque(24, 24, 27));
        assert_eq!(resolve("rgb(100%, 0%, 20%)"), opaque(255, 0, 51));
        assert_eq!(resolve("rgb(300, -4, 12.6)"), opaque(255, 0, 13));
    }

    #[test]
    fn test_display_hex_is_uppercase() {
        assert_eq!(opaque(0xea, 0x58, 0x0c).to_string(), "#EA580C");
    }

    #[test]
    fn test_unknown_degrades() {
        let color = resolve("zinc-900");
        assert_eq!(color.code(), ColorCode::Unknown);
        assert_eq!(color.code().to_string(), "UNKNOWN");
        assert_eq!(color.to_string(), "zinc-900");
        assert_eq!(color.rgb(), None);
    }

    #[test]
    fn test_unknown_label_is_truncated() {
        let color = resolve("this-is-a-very-long-color-name-that-overflows");
        match color {
            ResolvedColor::Unknown(raw) => assert_eq!(raw.len(), LABEL_LEN),
            other => panic!("expected Unknown, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_color(""), Err(ColorParseError::Empty));
        assert_eq!(parse_color("   "), Err(ColorParseError::Empty));
        assert_eq!(parse_color("#12"), Err(ColorParseError::BadHex));
        assert_eq!(parse_color("#ggg"), Err(ColorParseError::BadHex));
        assert_eq!(parse_color("rgb(1, 2"), Err(ColorParseError::BadFunction));
        assert_eq!(parse_color("rgb(1, 2)"), Err(ColorParseError::MissingComponents(2)));
        assert_eq!(parse_color("rgb(1, 2, 3, 4, 5)"), Err(ColorParseError::BadFunction));
        assert_eq!(parse_color("rgb(a, b, c)"), Err(ColorParseError::BadComponent));
        assert_eq!(parse_color("notacolor"), Err(ColorParseError::UnknownName));
    }

    #[test]
    fn test_resolve_never_panics_on_odd_input() {
        for input in ["#", "rgb", "rgb(", "rgba()", "()", "#ééé", "rgb(inf, 0, 0)", "rgb(NaN 0 0)"] {
            let _ = resolve(input);
        }
    }

    proptest! {
        #[test]
        fn prop_hex_roundtrips_to_triple(r: u8, g: u8, b: u8) {
            let input = format!("#{r:02x}{g:02x}{b:02x}");
            prop_assert_eq!(resolve(&input), opaque(r, g, b));
        }

        #[test]
        fn prop_rgb_function_matches_encoder(r: u8, g: u8, b: u8) {
            let input = format!("rgb({r}, {g}, {b})");
            prop_assert_eq!(resolve(&input).code(), ColorCode::Packed(Rgb565Code::from_rgb(r, g, b)));
        }

        #[test]
        fn prop_resolve_is_total(input in ".{0,40}") {
            let _ = resolve(&input);
        }
    }
}
