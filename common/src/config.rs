//! Panel configuration constants.
//!
//! Layout values are compile-time constants so drawing code and the
//! inspector share one coordinate system. Positions follow the 800x480
//! virtual canvas; everything outside it (console, toggle strip) belongs to
//! the simulator window only.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

// =============================================================================
// Display Configuration
// =============================================================================

/// Canvas width in pixels (target panel: 800x480, RGB565).
pub const SCREEN_WIDTH: u32 = 800;

/// Canvas height in pixels.
pub const SCREEN_HEIGHT: u32 = 480;

/// The virtual canvas, anchored at the display origin.
pub const CANVAS: Rectangle = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));

// =============================================================================
// Layout
// =============================================================================

/// Header bar height.
pub const HEADER_HEIGHT: u32 = 60;

/// Height of header buttons (back, pairing, control).
pub const HEADER_BUTTON_HEIGHT: u32 = 40;

/// Top edge of the view area below the header.
pub const CONTENT_TOP: i32 = HEADER_HEIGHT as i32;

/// Height of the view area below the header.
pub const CONTENT_HEIGHT: u32 = SCREEN_HEIGHT - HEADER_HEIGHT;

/// Fixed width of side columns on the home and room detail views.
pub const SIDE_COLUMN_WIDTH: u32 = 280;

/// Inspector labels flip below the highlight box when it starts above this row.
pub const LABEL_FLIP_Y: i32 = 30;

// =============================================================================
// Simulator Window
// =============================================================================

/// Width of the inspector console to the right of the canvas.
pub const CONSOLE_WIDTH: u32 = 320;

/// Height of the strip under the canvas holding the inspector toggle.
pub const TOGGLE_STRIP_HEIGHT: u32 = 60;

/// Full simulator window width.
pub const WINDOW_WIDTH: u32 = SCREEN_WIDTH + CONSOLE_WIDTH;

/// Full simulator window height.
pub const WINDOW_HEIGHT: u32 = SCREEN_HEIGHT + TOGGLE_STRIP_HEIGHT;

// =============================================================================
// Thermostat Limits
// =============================================================================

/// Lowest selectable target temperature (°C).
pub const TARGET_TEMP_MIN: f32 = 16.0;

/// Highest selectable target temperature (°C).
pub const TARGET_TEMP_MAX: f32 = 32.0;

/// Slider step (°C).
pub const TARGET_TEMP_STEP: f32 = 0.5;

const _: () = assert!(TARGET_TEMP_MIN < TARGET_TEMP_MAX);

// =============================================================================
// Capacities
// =============================================================================

/// Maximum nodes recorded per rendered frame.
pub const MAX_NODES: usize = 96;

/// Maximum remembered views for back navigation.
pub const HISTORY_CAPACITY: usize = 32;

/// Maximum rooms held by the panel.
pub const MAX_ROOMS: usize = 8;

/// Samples per room temperature history (one every 10 minutes).
pub const HISTORY_SAMPLES: usize = 10;

/// Characters kept in an inspection text excerpt.
pub const TEXT_EXCERPT_LEN: usize = 30;

/// Characters kept per node text.
pub const NODE_TEXT_LEN: usize = 48;

/// Characters kept per component name.
pub const COMPONENT_NAME_LEN: usize = 32;
