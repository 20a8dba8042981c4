//! Mouse routing for the preview window.
//!
//! The window holds three regions: the panel canvas, the inspector console
//! and the mode toggle strip. Clicks outside the canvas never reach the panel.

use embedded_graphics::prelude::Point;
use hvac_panel_common::CANVAS;
use hvac_panel_common::widgets::{CLEAR_BUTTON, TOGGLE_BUTTON};

/// What a click in the window is aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// A point on the panel canvas.
    Canvas(Point),
    /// The console's clear button.
    ClearRecord,
    /// The inspector toggle under the canvas.
    ToggleInspect,
}

/// Map a window point to its target, if any.
pub fn route(point: Point) -> Option<Target> {
    if CANVAS.contains(point) {
        Some(Target::Canvas(point - CANVAS.top_left))
    } else if CLEAR_BUTTON.contains(point) {
        Some(Target::ClearRecord)
    } else if TOGGLE_BUTTON.contains(point) {
        Some(Target::ToggleInspect)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_points_pass_through() {
        assert_eq!(route(Point::new(0, 0)), Some(Target::Canvas(Point::new(0, 0))));
        assert_eq!(route(Point::new(799, 479)), Some(Target::Canvas(Point::new(799, 479))));
    }

    #[test]
    fn test_console_buttons() {
        assert_eq!(route(CLEAR_BUTTON.center()), Some(Target::ClearRecord));
        assert_eq!(route(TOGGLE_BUTTON.center()), Some(Target::ToggleInspect));
    }

    #[test]
    fn test_dead_areas() {
        // Console body and the strip beside the toggle.
        assert_eq!(route(Point::new(900, 300)), None);
        assert_eq!(route(Point::new(10, 500)), None);
        assert_eq!(route(Point::new(-1, 10)), None);
    }
}
