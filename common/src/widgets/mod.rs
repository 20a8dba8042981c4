//! Widget components for the panel display.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` for platform independence.
//! Widgets that belong to the panel record themselves in the [`Scene`](crate::scene::Scene);
//! the inspector overlay and console draw outside it.

pub mod chart;
pub mod console;
pub mod header;
pub mod icons;
pub mod overlay;
pub mod primitives;

pub use chart::draw_history_chart;
pub use console::{CLEAR_BUTTON, CONSOLE_AREA, TOGGLE_BUTTON, TOGGLE_STRIP, draw_console, draw_toggle};
pub use header::draw_header;
pub use icons::{Icon, draw_icon};
pub use overlay::draw_inspect_overlay;
