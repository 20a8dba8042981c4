//! Frame composition and redraw tracking.
//!
//! # Frame Layout
//!
//! ```text
//! (0,0)                      (800,0)          (1120,0)
//!   +---------------------------+----------------+
//!   | panel canvas 800x480      | inspector      |
//!   |   header  0..60           | console        |
//!   |   content 60..480         | 320 wide       |
//!   +---------------------------+                |
//!   | mode toggle strip 60 high |                |
//!   +---------------------------+----------------+
//! ```
//!
//! The panel canvas is the only part recorded in the [`Scene`]; the console
//! and the toggle belong to the preview window and are never inspected.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::colors::{ZINC_100, ZINC_950, paint_or};
use crate::config::{CANVAS, CONTENT_HEIGHT, CONTENT_TOP, SCREEN_WIDTH};
use crate::panel::Panel;
use crate::scene::{Node, Scene};
use crate::screens::{
    draw_home,
    draw_pairing_add,
    draw_pairing_menu,
    draw_pairing_status,
    draw_room_detail,
    draw_room_list,
};
use crate::views::View;
use crate::widgets::{draw_console, draw_header, draw_inspect_overlay, draw_toggle};

/// Area below the header that holds the active view.
pub const CONTENT_AREA: Rectangle = Rectangle::new(Point::new(0, CONTENT_TOP), Size::new(SCREEN_WIDTH, CONTENT_HEIGHT));

// =============================================================================
// Frame Drawing
// =============================================================================

/// Redraw the panel canvas and rebuild `scene` from it.
pub fn draw_panel<D>(
    panel: &Panel,
    display: &mut D,
    scene: &mut Scene,
) where
    D: DrawTarget<Color = Rgb565>,
{
    scene.clear();
    CANVAS
        .into_styled(PrimitiveStyle::with_fill(paint_or(ZINC_950, Rgb565::BLACK)))
        .draw(display)
        .ok();

    draw_header(panel, display, scene);

    let view = panel.view();
    let mut content = Node::container(CONTENT_AREA).colors(ZINC_950, ZINC_100);
    if view == View::Home {
        content = content.named("HomeView");
    }
    let root = scene.push(content);

    match view {
        View::Home => draw_home(display, scene, root),
        View::PairingMenu => draw_pairing_menu(display, scene, root),
        View::PairingStatus => draw_pairing_status(panel, display, scene, root),
        View::PairingAdd => draw_pairing_add(panel, display, scene, root),
        View::ControlRoomList => draw_room_list(panel, display, scene, root),
        View::ControlRoomDetail => draw_room_detail(panel, display, scene, root),
    }
    log::debug!("drew {} with {} nodes", view.as_str(), scene.len());
}

/// Draw the whole preview window: panel, highlight, console and toggle.
pub fn draw_frame<D>(
    panel: &Panel,
    display: &mut D,
    scene: &mut Scene,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_panel(panel, display, scene);

    let inspector = panel.inspector();
    if let (true, Some(record)) = (inspector.is_enabled(), inspector.record()) {
        draw_inspect_overlay(display, record, CANVAS.top_left);
    }
    draw_console(display, inspector);
    draw_toggle(display, inspector.is_enabled());
}

// =============================================================================
// Render State
// =============================================================================

/// Tracks whether the window needs a redraw.
///
/// The panel bumps its revision on every visible change, so a frame is only
/// drawn when the revision differs from the last one drawn.
pub struct RenderState {
    /// Revision of the last drawn frame, `None` before the first frame.
    drawn_revision: Option<u32>,
}

impl RenderState {
    pub const fn new() -> Self { Self { drawn_revision: None } }

    /// Check if a frame for `revision` is needed.
    #[inline]
    pub const fn needs_redraw(
        &self,
        revision: u32,
    ) -> bool {
        match self.drawn_revision {
            Some(drawn) => drawn != revision,
            None => true,
        }
    }

    /// Record that `revision` is on screen.
    #[inline]
    pub const fn mark_drawn(
        &mut self,
        revision: u32,
    ) {
        self.drawn_revision = Some(revision);
    }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
