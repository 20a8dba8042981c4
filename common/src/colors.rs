//! Panel palette.
//!
//! Colors are kept as style strings so the inspector resolves exactly what
//! the widgets paint. Names follow the Tailwind scale the mockup was
//! designed with; every entry quantizes cleanly to RGB565.
//!
//! Widgets turn a style into a drawable color with [`paint`]; overlay colors
//! that never need inspecting are plain `Rgb565` constants.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

use crate::resolver::{ResolvedColor, resolve};
use crate::rgb565::{Rgb565Code, quantize};

// =============================================================================
// Neutrals
// =============================================================================

pub const ZINC_950: &str = "#09090b";
pub const ZINC_900: &str = "#18181b";
pub const ZINC_800: &str = "#27272a";
pub const ZINC_700: &str = "#3f3f46";
pub const ZINC_600: &str = "#52525b";
pub const ZINC_500: &str = "#71717a";
pub const ZINC_400: &str = "#a1a1aa";
pub const ZINC_300: &str = "#d4d4d8";
pub const ZINC_200: &str = "#e4e4e7";
pub const ZINC_100: &str = "#f4f4f5";
pub const WHITE: &str = "white";
pub const TRANSPARENT: &str = "transparent";

// =============================================================================
// Accents
// =============================================================================

/// Accent 1 (pairing group, active controls).
pub const CYAN_700: &str = "#0e7490";
pub const CYAN_600: &str = "#0891b2";
pub const CYAN_500: &str = "#06b6d4";
pub const CYAN_400: &str = "#22d3ee";

/// Accent 2 (control group, open valves, chart line).
pub const ORANGE_700: &str = "#c2410c";
pub const ORANGE_600: &str = "#ea580c";
pub const ORANGE_500: &str = "#f97316";
pub const ORANGE_400: &str = "#fb923c";

/// Gateway online badge.
pub const EMERALD_500: &str = "#10b981";
pub const EMERALD_800: &str = "#065f46";
pub const EMERALD_900_30: &str = "rgba(6, 78, 59, 0.3)";

/// Console tag name.
pub const GREEN_400: &str = "#4ade80";

/// Chart target line.
pub const EMERALD_600: &str = "#059669";

// =============================================================================
// Simulator Chrome (not inspectable)
// =============================================================================

/// Screen bezel around the canvas.
pub const BEZEL: Rgb565 = Rgb565Code::from_rgb(0x12, 0x12, 0x12).to_color();

/// Inspector highlight and "DEV MODE" accents (green-500).
pub const INSPECT_GREEN: Rgb565 = Rgb565Code::from_rgb(0x22, 0xC5, 0x5E).to_color();

/// Darker inspector green for label backgrounds (green-600).
pub const INSPECT_GREEN_DARK: Rgb565 = Rgb565Code::from_rgb(0x16, 0xA3, 0x4A).to_color();

/// Symbol macro text in the console (yellow-500).
pub const SYMBOL_YELLOW: Rgb565 = Rgb565Code::from_rgb(0xEA, 0xB3, 0x08).to_color();

/// Fallback when a style fails to resolve; loud on purpose so it gets noticed.
pub const UNRESOLVED: Rgb565 = Rgb565::MAGENTA;

/// Resolve a style to a drawable color. `None` for transparent styles.
pub fn paint(style: &str) -> Option<Rgb565> {
    match resolve(style) {
        ResolvedColor::Opaque(rgb) => Some(quantize(rgb)),
        ResolvedColor::Transparent => None,
        ResolvedColor::Unknown(_) => Some(UNRESOLVED),
    }
}

/// Like [`paint`], substituting `fallback` for transparent styles.
#[inline]
pub fn paint_or(
    style: &str,
    fallback: Rgb565,
) -> Rgb565 {
    paint(style).unwrap_or(fallback)
}
