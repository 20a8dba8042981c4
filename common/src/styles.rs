//! Pre-computed fonts and text layout styles.
//!
//! Panel text colors come from style strings and are resolved per draw, so
//! only the font and the alignment are fixed here; widgets build the
//! `MonoTextStyle` with [`text_style`].
//!
//! All layouts use a top baseline: the anchor point of a label is the top
//! edge of its text, which keeps the pixel positions in the view code equal
//! to the box model they were taken from.
//!
//! Fonts are ISO 8859-1 variants so `°` renders.

use embedded_graphics::{
    mono_font::{
        MonoFont,
        MonoTextStyle,
        iso_8859_1::{FONT_6X10, FONT_7X13, FONT_9X15, FONT_10X20},
    },
    pixelcolor::{Rgb565, RgbColor},
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

use crate::colors::paint_or;

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Left-aligned, anchored at the top-left corner.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Centered, anchored at the top-center point.
pub const TOP_CENTER: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Top)
    .build();

/// Right-aligned, anchored at the top-right corner.
pub const TOP_RIGHT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Right)
    .baseline(Baseline::Top)
    .build();

// =============================================================================
// Font Scale
// =============================================================================

/// Captions, axis ticks, console values (6x10).
pub const TEXT_XS: &MonoFont<'static> = &FONT_6X10;

/// Secondary text, button labels (7x13).
pub const TEXT_SM: &MonoFont<'static> = &FONT_7X13;

/// Body text (9x15).
pub const TEXT_MD: &MonoFont<'static> = &FONT_9X15;

/// Titles and card headings (10x20).
pub const TEXT_LG: &MonoFont<'static> = &FONT_10X20;

/// Hero headings.
pub const TEXT_XL: &MonoFont<'static> = &PROFONT_18_POINT;

/// Large numeric readouts.
pub const TEXT_NUM: &MonoFont<'static> = &PROFONT_24_POINT;

/// Character style for `font` in the color named by `style`.
///
/// Transparent text falls back to white so it stays visible in the preview.
#[inline]
pub fn text_style(
    font: &'static MonoFont<'static>,
    style: &str,
) -> MonoTextStyle<'static, Rgb565> {
    MonoTextStyle::new(font, paint_or(style, Rgb565::WHITE))
}

/// Pixel width of `chars` characters in `font`, including spacing.
#[inline]
pub const fn text_width(
    font: &MonoFont<'_>,
    chars: u32,
) -> u32 {
    if chars == 0 {
        return 0;
    }
    chars * font.character_size.width + (chars - 1) * font.character_spacing
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width() {
        assert_eq!(text_width(TEXT_XS, 0), 0);
        assert_eq!(text_width(TEXT_XS, 1), 6);
        assert_eq!(text_width(TEXT_LG, 7), 70);
    }

    #[test]
    fn test_transparent_text_falls_back_to_white() {
        assert_eq!(text_style(TEXT_XS, "transparent").text_color, Some(Rgb565::WHITE));
    }
}
