//! Inspector highlight drawn over the canvas.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment};
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::{INSPECT_GREEN, INSPECT_GREEN_DARK};
use crate::config::LABEL_FLIP_Y;
use crate::inspector::{Bounds, InspectionRecord};
use crate::styles::{TEXT_XS, TOP_LEFT, text_width};

/// Highlight border width.
const BORDER_WIDTH: u32 = 2;

/// Coordinate tag height and its distance from the highlighted box.
const TAG_HEIGHT: u32 = 14;
const TAG_OFFSET: i32 = 20;
const TAG_PAD_X: u32 = 8;

const TAG_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(INSPECT_GREEN_DARK);

/// Top-left of the coordinate tag for `bounds`: above the box, or below it
/// when the box is too close to the top edge.
pub const fn tag_origin(bounds: Bounds) -> Point {
    let y = if bounds.y < LABEL_FLIP_Y {
        bounds.y + bounds.height as i32 + TAG_OFFSET - TAG_HEIGHT as i32
    } else {
        bounds.y - TAG_OFFSET
    };
    Point::new(bounds.x, y)
}

/// Draw the highlight for `record`, with the canvas at `origin`.
pub fn draw_inspect_overlay<D>(
    display: &mut D,
    record: &InspectionRecord,
    origin: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let border = PrimitiveStyleBuilder::new()
        .stroke_color(INSPECT_GREEN)
        .stroke_width(BORDER_WIDTH)
        .stroke_alignment(StrokeAlignment::Inside)
        .build();
    record
        .bounds
        .to_rectangle(origin)
        .into_styled(border)
        .draw(display)
        .ok();

    let mut text: String<24> = String::new();
    write!(text, "X:{} Y:{}", record.bounds.x, record.bounds.y).ok();

    let tag_width = text_width(TEXT_XS, text.chars().count() as u32) + 2 * TAG_PAD_X;
    let tag = Rectangle::new(origin + tag_origin(record.bounds), Size::new(tag_width, TAG_HEIGHT));
    tag.into_styled(TAG_FILL).draw(display).ok();
    Text::with_text_style(
        &text,
        tag.top_left + Point::new(TAG_PAD_X as i32, 2),
        MonoTextStyle::new(TEXT_XS, Rgb565::WHITE),
        TOP_LEFT,
    )
    .draw(display)
    .ok();
}
