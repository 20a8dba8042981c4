//! Low-level drawing primitives shared across widgets.
//!
//! Functions taking a [`Scene`] both paint and record what they painted, so
//! the hit-testing tree always matches the pixels.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle, RoundedRectangle, StrokeAlignment};
use embedded_graphics::text::{Text, TextStyle};

use crate::colors::{TRANSPARENT, paint};
use crate::scene::{Node, NodeId, Scene};
use crate::styles::text_style;

/// Corner radius of cards and buttons.
pub const CORNER_RADIUS: u32 = 2;

/// Fill plus 1px inside border; transparent parts are skipped.
pub fn box_style(
    background: &str,
    border: &str,
) -> PrimitiveStyle<Rgb565> {
    let mut style = PrimitiveStyle::new();
    style.fill_color = paint(background);
    style.stroke_color = paint(border);
    style.stroke_width = u32::from(style.stroke_color.is_some());
    style.stroke_alignment = StrokeAlignment::Inside;
    style
}

/// Draw a rounded box.
pub fn draw_box<D>(
    display: &mut D,
    rect: Rectangle,
    background: &str,
    border: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    RoundedRectangle::with_equal_corners(rect, Size::new_equal(CORNER_RADIUS))
        .into_styled(box_style(background, border))
        .draw(display)
        .ok();
}

/// Draw the node as a rounded box and record it.
pub fn block<D>(
    display: &mut D,
    scene: &mut Scene,
    node: Node,
    border: &str,
) -> Option<NodeId>
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_box(display, node.bounds, node.background, border);
    scene.push(node)
}

/// Draw the node as a circle inscribed in its bounds and record it.
pub fn disc<D>(
    display: &mut D,
    scene: &mut Scene,
    node: Node,
    border: &str,
) -> Option<NodeId>
where
    D: DrawTarget<Color = Rgb565>,
{
    let diameter = node.bounds.size.width.min(node.bounds.size.height);
    Circle::new(node.bounds.top_left, diameter)
        .into_styled(box_style(node.background, border))
        .draw(display)
        .ok();
    scene.push(node)
}

/// Draw text and return its bounding box.
pub fn draw_text<D>(
    display: &mut D,
    text: &str,
    position: Point,
    font: &'static MonoFont<'static>,
    color: &str,
    layout: TextStyle,
) -> Rectangle
where
    D: DrawTarget<Color = Rgb565>,
{
    let text = Text::with_text_style(text, position, text_style(font, color), layout);
    text.draw(display).ok();
    text.bounding_box()
}

/// Draw text and record it as a label under `parent`.
#[allow(clippy::too_many_arguments)]
pub fn label<D>(
    display: &mut D,
    scene: &mut Scene,
    parent: Option<NodeId>,
    text: &str,
    position: Point,
    font: &'static MonoFont<'static>,
    color: &'static str,
    layout: TextStyle,
) -> Rectangle
where
    D: DrawTarget<Color = Rgb565>,
{
    let bounds = draw_text(display, text, position, font, color, layout);
    scene.push(Node::label(bounds, text).colors(TRANSPARENT, color).parent(parent));
    bounds
}

/// Horizontal dashed line from `x0` to `x1` inclusive.
pub fn dashed_hline<D>(
    display: &mut D,
    x0: i32,
    x1: i32,
    y: i32,
    dash: i32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyle::with_stroke(color, 1);
    let mut x = x0;
    while x <= x1 {
        let end = (x + dash - 1).min(x1);
        Line::new(Point::new(x, y), Point::new(end, y))
            .into_styled(style)
            .draw(display)
            .ok();
        x += dash * 2;
    }
}

/// Vertical dashed line from `y0` to `y1` inclusive.
pub fn dashed_vline<D>(
    display: &mut D,
    x: i32,
    y0: i32,
    y1: i32,
    dash: i32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyle::with_stroke(color, 1);
    let mut y = y0;
    while y <= y1 {
        let end = (y + dash - 1).min(y1);
        Line::new(Point::new(x, y), Point::new(x, end))
            .into_styled(style)
            .draw(display)
            .ok();
        y += dash * 2;
    }
}

/// Filled square of `size` centered on `center`, used for status dots.
pub fn draw_dot<D>(
    display: &mut D,
    center: Point,
    size: u32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::with_center(center, Size::new_equal(size))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}
