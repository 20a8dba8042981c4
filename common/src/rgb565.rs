//! RGB888 → RGB565 quantization.
//!
//! Rgb565 packs a color into 16 bits: 5 bits red, 6 bits green, 5 bits blue.
//! The conversion here truncates (drops the low-order bits of each channel)
//! and never rounds, which matches what 16-bit display controllers and LVGL's
//! `lv_color_hex()` produce. It is one-way: many RGB888 inputs share one code.
//!
//! ```text
//!  15      11 10        5 4       0
//! +----------+-----------+---------+
//! | r >> 3   |  g >> 2   |  b >> 3 |
//! +----------+-----------+---------+
//! ```
//!
//! `embedded_graphics`' own `Rgb888` → `Rgb565` conversion scales each channel
//! with rounding, so it is not used for the reported codes.

use core::fmt::{self, Write};

use embedded_graphics::pixelcolor::{Rgb565, Rgb888, RgbColor};
use heapless::String;

/// Length of the formatted code, `0x` plus four hex digits.
pub const CODE_LEN: usize = 6;

/// A packed 16-bit RGB565 value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb565Code(pub u16);

impl Rgb565Code {
    /// Pack 8-bit channels. Total over all `u8` inputs.
    #[inline]
    pub const fn from_rgb(
        r: u8,
        g: u8,
        b: u8,
    ) -> Self {
        let r5 = (r >> 3) as u16 & 0x1f;
        let g6 = (g >> 2) as u16 & 0x3f;
        let b5 = (b >> 3) as u16 & 0x1f;
        Self((r5 << 11) | (g6 << 5) | b5)
    }

    /// Pack integer channels, clamping each one to `0..=255` first.
    ///
    /// Used for components parsed from style strings, where out-of-range
    /// values such as `rgb(300, -4, 12)` clamp like CSS does.
    #[inline]
    pub const fn from_clamped(
        r: i32,
        g: i32,
        b: i32,
    ) -> Self {
        Self::from_rgb(clamp_channel(r), clamp_channel(g), clamp_channel(b))
    }

    /// Raw 16-bit value.
    #[inline]
    pub const fn value(self) -> u16 { self.0 }

    /// The 5/6/5 fields as `(r5, g6, b5)`.
    #[inline]
    pub const fn fields(self) -> (u8, u8, u8) {
        (
            ((self.0 >> 11) & 0x1f) as u8,
            ((self.0 >> 5) & 0x3f) as u8,
            (self.0 & 0x1f) as u8,
        )
    }

    /// Expand back to 8-bit channels by shifting each field into the high
    /// bits. The low bits lost to truncation come back as zero.
    #[inline]
    pub const fn to_rgb888(self) -> Rgb888 {
        let (r5, g6, b5) = self.fields();
        Rgb888::new(r5 << 3, g6 << 2, b5 << 3)
    }

    /// Color usable with `embedded_graphics` draw targets.
    #[inline]
    pub const fn to_color(self) -> Rgb565 {
        let (r5, g6, b5) = self.fields();
        Rgb565::new(r5, g6, b5)
    }

    /// Formatted `0xABCD` string without allocation.
    pub fn to_hex(self) -> String<CODE_LEN> {
        let mut out = String::new();
        // Always fits: exactly CODE_LEN characters.
        let _ = write!(out, "0x{:04X}", self.0);
        out
    }
}

impl From<Rgb888> for Rgb565Code {
    #[inline]
    fn from(color: Rgb888) -> Self { Self::from_rgb(color.r(), color.g(), color.b()) }
}

impl From<Rgb565Code> for Rgb565 {
    #[inline]
    fn from(code: Rgb565Code) -> Self { code.to_color() }
}

impl fmt::Display for Rgb565Code {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}

/// Truncating RGB888 → `Rgb565` conversion for drawing.
#[inline]
pub fn quantize(color: Rgb888) -> Rgb565 { Rgb565Code::from_rgb(color.r(), color.g(), color.b()).to_color() }

const fn clamp_channel(value: i32) -> u8 {
    if value < 0 {
        0
    } else if value > 255 {
        255
    } else {
        value as u8
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::raw::{RawData, RawU16};
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_orange_example() {
        // r5 = 31, g6 = 41, b5 = 0
        let code = Rgb565Code::from_rgb(255, 165, 0);
        assert_eq!(code.fields(), (31, 41, 0));
        assert_eq!(code.value(), 0xFD20);
        assert_eq!(code.to_hex().as_str(), "0xFD20");
    }

    #[test]
    fn test_extremes() {
        assert_eq!(Rgb565Code::from_rgb(0, 0, 0).to_hex().as_str(), "0x0000");
        assert_eq!(Rgb565Code::from_rgb(255, 255, 255).to_hex().as_str(), "0xFFFF");
        assert_eq!(Rgb565Code::from_rgb(255, 0, 0).value(), 0xF800);
        assert_eq!(Rgb565Code::from_rgb(0, 255, 0).value(), 0x07E0);
        assert_eq!(Rgb565Code::from_rgb(0, 0, 255).value(), 0x001F);
    }

    #[test]
    fn test_zero_padding() {
        // Blue only: value 0x001F must keep its leading zeros.
        let hex = Rgb565Code::from_rgb(0, 0, 255).to_hex();
        assert_eq!(hex.as_str(), "0x001F");
    }

    #[test]
    fn test_palette_values() {
        // zinc-900 #18181B and cyan-700 #0E7490
        assert_eq!(Rgb565Code::from_rgb(0x18, 0x18, 0x1B).to_hex().as_str(), "0x18C3");
        assert_eq!(Rgb565Code::from_rgb(0x0E, 0x74, 0x90).to_hex().as_str(), "0x0BB2");
    }

    #[test]
    fn test_truncates_instead_of_rounding() {
        // 7 >> 3 == 0 even though 7 is closer to 8 than to 0.
        assert_eq!(Rgb565Code::from_rgb(7, 3, 7).value(), 0);
        assert_eq!(Rgb565Code::from_rgb(8, 4, 8).value(), (1 << 11) | (1 << 5) | 1);
    }

    #[test]
    fn test_clamped_inputs() {
        assert_eq!(Rgb565Code::from_clamped(300, -4, 12), Rgb565Code::from_rgb(255, 0, 12));
        assert_eq!(Rgb565Code::from_clamped(i32::MIN, i32::MAX, 0), Rgb565Code::from_rgb(0, 255, 0));
    }

    #[test]
    fn test_to_color_matches_raw_value() {
        let code = Rgb565Code::from_rgb(0xEA, 0x58, 0x0C);
        let raw: RawU16 = code.to_color().into();
        assert_eq!(raw.into_inner(), code.value());
    }

    #[test]
    fn test_every_triple_within_truncation_tolerance() {
        for r in 0..=255u8 {
            for g in 0..=255u8 {
                for b in 0..=255u8 {
                    let back = Rgb565Code::from_rgb(r, g, b).to_rgb888();
                    assert!(r - back.r() <= 7);
                    assert!(g - back.g() <= 3);
                    assert!(b - back.b() <= 7);
                }
            }
        }
    }

    proptest! {
        #[test]
        fn prop_decode_recovers_high_bits(r: u8, g: u8, b: u8) {
            let back = Rgb565Code::from_rgb(r, g, b).to_rgb888();
            prop_assert_eq!(back.r(), r & 0xF8);
            prop_assert_eq!(back.g(), g & 0xFC);
            prop_assert_eq!(back.b(), b & 0xF8);
        }

        #[test]
        fn prop_hex_is_six_uppercase_chars(r: u8, g: u8, b: u8) {
            let hex = Rgb565Code::from_rgb(r, g, b).to_hex();
            prop_assert_eq!(hex.len(), CODE_LEN);
            prop_assert!(hex.starts_with("0x"));
            prop_assert!(hex[2..].chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
            prop_assert_eq!(u16::from_str_radix(&hex[2..], 16).ok(), Some(Rgb565Code::from_rgb(r, g, b).value()));
        }

        #[test]
        fn prop_clamped_matches_u8_in_range(r in 0i32..=255, g in 0i32..=255, b in 0i32..=255) {
            prop_assert_eq!(
                Rgb565Code::from_clamped(r, g, b),
                Rgb565Code::from_rgb(r as u8, g as u8, b as u8)
            );
        }
    }
}
