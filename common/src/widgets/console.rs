//! Inspector console beside the canvas and the mode toggle below it.
//!
//! Neither is part of the simulated display, so nothing here is recorded in
//! the scene; the simulator hit-tests [`CLEAR_BUTTON`] and [`TOGGLE_BUTTON`]
//! directly.

use core::fmt::{Display, Write};

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle};
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::{
    BEZEL,
    CYAN_400,
    GREEN_400,
    INSPECT_GREEN,
    INSPECT_GREEN_DARK,
    ORANGE_400,
    SYMBOL_YELLOW,
    UNRESOLVED,
    WHITE,
    ZINC_100,
    ZINC_200,
    ZINC_300,
    ZINC_400,
    ZINC_500,
    ZINC_600,
    ZINC_700,
    ZINC_800,
    ZINC_900,
    ZINC_950,
    paint_or,
};
use crate::config::{CONSOLE_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH, TOGGLE_STRIP_HEIGHT, WINDOW_HEIGHT};
use crate::inspector::{InspectionRecord, Inspector};
use crate::resolver::ResolvedColor;
use crate::rgb565::quantize;
use crate::styles::{TEXT_SM, TEXT_XS, TOP_CENTER, TOP_LEFT};
use crate::widgets::icons::{Icon, draw_icon};
use crate::widgets::primitives::{draw_box, draw_dot, draw_text};

// =============================================================================
// Console Layout Constants
// =============================================================================

/// Whole strip right of the canvas.
pub const CONSOLE_AREA: Rectangle = Rectangle::new(
    Point::new(SCREEN_WIDTH as i32, 0),
    Size::new(CONSOLE_WIDTH, WINDOW_HEIGHT),
);

/// Console card inside the strip.
const PANEL: Rectangle = Rectangle::new(
    Point::new(SCREEN_WIDTH as i32 + 8, 8),
    Size::new(CONSOLE_WIDTH - 16, WINDOW_HEIGHT - 16),
);

/// Left edge and width of the console content.
const CONTENT_X: i32 = PANEL.top_left.x + 16;
const CONTENT_WIDTH: u32 = PANEL.size.width - 32;
const CENTER_X: i32 = PANEL.top_left.x + PANEL.size.width as i32 / 2;

/// Clear-selection button in the console header, shown while a record exists.
pub const CLEAR_BUTTON: Rectangle = Rectangle::new(
    Point::new(PANEL.top_left.x + PANEL.size.width as i32 - 36, 20),
    Size::new(24, 24),
);

/// Header divider.
const HEADER_BOTTOM: i32 = 56;

/// Footer divider.
const FOOTER_TOP: i32 = PANEL.top_left.y + PANEL.size.height as i32 - 32;

/// Strip below the canvas.
pub const TOGGLE_STRIP: Rectangle = Rectangle::new(
    Point::new(0, SCREEN_HEIGHT as i32),
    Size::new(SCREEN_WIDTH, TOGGLE_STRIP_HEIGHT),
);

/// Inspection mode toggle, centered in the strip.
pub const TOGGLE_BUTTON: Rectangle = Rectangle::new(
    Point::new(SCREEN_WIDTH as i32 / 2 - 110, SCREEN_HEIGHT as i32 + 10),
    Size::new(220, 40),
);

/// Section positions, top to bottom.
const OBJECT_Y: i32 = 68;
const GEOMETRY_Y: i32 = 132;
const STYLE_Y: i32 = 230;
const CONTENT_Y: i32 = 352;

/// Geometry cell size and spacing.
const CELL_SIZE: Size = Size::new(132, 34);
const CELL_GAP: i32 = 8;

// =============================================================================
// Drawing Functions
// =============================================================================

/// Draw the console strip for the current inspector state.
pub fn draw_console<D>(
    display: &mut D,
    inspector: &Inspector,
) where
    D: DrawTarget<Color = Rgb565>,
{
    CONSOLE_AREA
        .into_styled(PrimitiveStyle::with_fill(BEZEL))
        .draw(display)
        .ok();

    if !inspector.is_enabled() {
        draw_text(display, "Press I to inspect", Point::new(CENTER_X, 264), TEXT_XS, ZINC_700, TOP_CENTER);
        return;
    }

    draw_box(display, PANEL, ZINC_900, ZINC_700);

    // Header
    draw_dot(display, PANEL.top_left + Point::new(20, 24), 8, INSPECT_GREEN);
    draw_text(display, "INSPECTOR CONSOLE", PANEL.top_left + Point::new(32, 18), TEXT_SM, ZINC_100, TOP_LEFT);
    if inspector.record().is_some() {
        draw_icon(display, Icon::Close, CLEAR_BUTTON, paint_or(ZINC_500, Rgb565::WHITE));
    }
    divider(display, HEADER_BOTTOM);

    match inspector.record() {
        Some(record) => draw_record(display, record),
        None => draw_empty_state(display),
    }

    // Footer
    divider(display, FOOTER_TOP);
    draw_text(
        display,
        "I: toggle  Esc: clear  Bksp: back",
        Point::new(CENTER_X, FOOTER_TOP + 11),
        TEXT_XS,
        ZINC_600,
        TOP_CENTER,
    );
}

/// Draw the mode toggle under the canvas.
pub fn draw_toggle<D>(
    display: &mut D,
    enabled: bool,
) where
    D: DrawTarget<Color = Rgb565>,
{
    TOGGLE_STRIP
        .into_styled(PrimitiveStyle::with_fill(BEZEL))
        .draw(display)
        .ok();

    let (fill, border, text_color, text) = if enabled {
        (INSPECT_GREEN_DARK, INSPECT_GREEN, paint_or(WHITE, Rgb565::WHITE), "DEV MODE: ON")
    } else {
        (
            paint_or(ZINC_800, Rgb565::BLACK),
            paint_or(ZINC_700, Rgb565::BLACK),
            paint_or(ZINC_400, Rgb565::WHITE),
            "ENABLE INSPECTOR",
        )
    };
    let style = PrimitiveStyleBuilder::new()
        .fill_color(fill)
        .stroke_color(border)
        .stroke_width(2)
        .build();
    RoundedRectangle::with_equal_corners(TOGGLE_BUTTON, Size::new_equal(TOGGLE_BUTTON.size.height / 2))
        .into_styled(style)
        .draw(display)
        .ok();

    let icon_area = Rectangle::new(TOGGLE_BUTTON.top_left + Point::new(24, 10), Size::new_equal(20));
    draw_icon(display, Icon::ScanEye, icon_area, text_color);
    Text::with_text_style(
        text,
        TOGGLE_BUTTON.top_left + Point::new(56, 14),
        MonoTextStyle::new(TEXT_SM, text_color),
        TOP_LEFT,
    )
    .draw(display)
    .ok();
}

fn draw_empty_state<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    let icon_area = Rectangle::with_center(Point::new(CENTER_X, 240), Size::new_equal(40));
    draw_icon(display, Icon::ScanEye, icon_area, paint_or(ZINC_700, Rgb565::BLACK));
    draw_text(display, "Click any element on the screen", Point::new(CENTER_X, 276), TEXT_XS, ZINC_600, TOP_CENTER);
    draw_text(display, "to view LVGL properties.", Point::new(CENTER_X, 290), TEXT_XS, ZINC_600, TOP_CENTER);
}

fn draw_record<D>(
    display: &mut D,
    record: &InspectionRecord,
) where
    D: DrawTarget<Color = Rgb565>,
{
    // Object
    caption(display, "OBJECT", OBJECT_Y);
    let object = Rectangle::new(Point::new(CONTENT_X, OBJECT_Y + 14), Size::new(CONTENT_WIDTH, 40));
    draw_box(display, object, ZINC_950, ZINC_800);
    draw_text(display, record.tag, object.top_left + Point::new(12, 6), TEXT_SM, GREEN_400, TOP_LEFT);
    let component = if record.component.is_empty() { "(anonymous)" } else { record.component.as_str() };
    draw_text(display, component, object.top_left + Point::new(12, 24), TEXT_XS, ZINC_400, TOP_LEFT);

    // Geometry
    caption(display, "GEOMETRY (LV_AREA_T)", GEOMETRY_Y);
    let b = record.bounds;
    let cells: [(&str, &dyn Display); 4] = [("Pos X", &b.x), ("Pos Y", &b.y), ("Width", &b.width), ("Height", &b.height)];
    for (i, (name, value)) in cells.into_iter().enumerate() {
        let col = (i % 2) as i32;
        let row = (i / 2) as i32;
        let cell = Rectangle::new(
            Point::new(
                CONTENT_X + col * (CELL_SIZE.width as i32 + CELL_GAP),
                GEOMETRY_Y + 14 + row * (CELL_SIZE.height as i32 + CELL_GAP / 2),
            ),
            CELL_SIZE,
        );
        draw_box(display, cell, ZINC_800, ZINC_800);
        draw_text(display, name, cell.top_left + Point::new(8, 4), TEXT_XS, ZINC_500, TOP_LEFT);
        let mut text: String<12> = String::new();
        write!(text, "{value}").ok();
        draw_text(display, &text, cell.top_left + Point::new(8, 17), TEXT_SM, ZINC_200, TOP_LEFT);
    }

    // Style
    caption(display, "STYLE (LV_STYLE_T)", STYLE_Y);
    color_row(display, STYLE_Y + 14, "bg_color (RGB565)", &record.background, None, CYAN_400);
    color_row(
        display,
        STYLE_Y + 14 + 52,
        "text_color (RGB565)",
        &record.background,
        Some(&record.foreground),
        ORANGE_400,
    );

    // Content
    if record.text.is_empty() && record.symbol.is_none() {
        return;
    }
    caption(display, "CONTENT", CONTENT_Y);
    let mut y = CONTENT_Y + 14;
    let height = 8 + if record.symbol.is_some() { 40 } else { 0 } + if record.text.is_empty() { 0 } else { 28 };
    draw_box(
        display,
        Rectangle::new(Point::new(CONTENT_X, y), Size::new(CONTENT_WIDTH, height)),
        ZINC_800,
        ZINC_800,
    );
    y += 6;
    if let Some(symbol) = record.symbol {
        draw_text(display, "Symbol Macro", Point::new(CONTENT_X + 8, y), TEXT_XS, ZINC_500, TOP_LEFT);
        let code = Rectangle::new(Point::new(CONTENT_X + 8, y + 14), Size::new(CONTENT_WIDTH - 16, 18));
        draw_box(display, code, ZINC_950, ZINC_700);
        Text::with_text_style(
            symbol.macro_name(),
            code.top_left + Point::new(6, 4),
            MonoTextStyle::new(TEXT_XS, SYMBOL_YELLOW),
            TOP_LEFT,
        )
        .draw(display)
        .ok();
        y += 40;
    }
    if !record.text.is_empty() {
        draw_text(display, "Label Text", Point::new(CONTENT_X + 8, y), TEXT_XS, ZINC_500, TOP_LEFT);
        let mut quoted: String<34> = String::new();
        write!(quoted, "\"{}\"", record.text).ok();
        draw_text(display, &quoted, Point::new(CONTENT_X + 8, y + 14), TEXT_XS, ZINC_300, TOP_LEFT);
    }
}

/// One style row: swatch, caption, RGB565 code and resolved hex.
///
/// With `text` set, the swatch shows "Aa" in that color on `background` and
/// the row reports the text color.
fn color_row<D>(
    display: &mut D,
    y: i32,
    name: &str,
    background: &ResolvedColor,
    text: Option<&ResolvedColor>,
    code_color: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let row = Rectangle::new(Point::new(CONTENT_X, y), Size::new(CONTENT_WIDTH, 44));
    draw_box(display, row, ZINC_800, ZINC_800);

    let swatch = Rectangle::new(row.top_left + Point::new(6, 6), Size::new_equal(32));
    let fill = match background {
        ResolvedColor::Opaque(rgb) => quantize(*rgb),
        ResolvedColor::Transparent => paint_or(ZINC_950, Rgb565::BLACK),
        ResolvedColor::Unknown(_) => UNRESOLVED,
    };
    swatch.into_styled(PrimitiveStyle::with_fill(fill)).draw(display).ok();
    swatch
        .into_styled(PrimitiveStyle::with_stroke(paint_or(ZINC_600, Rgb565::WHITE), 1))
        .draw(display)
        .ok();
    if background == &ResolvedColor::Transparent && text.is_none() {
        // No fill: strike through
        Line::new(swatch.top_left + Point::new(31, 0), swatch.top_left + Point::new(0, 31))
            .into_styled(PrimitiveStyle::with_stroke(paint_or(ZINC_600, Rgb565::WHITE), 1))
            .draw(display)
            .ok();
    }

    let reported = text.unwrap_or(background);
    if let Some(text) = text {
        let color = match text {
            ResolvedColor::Opaque(rgb) => quantize(*rgb),
            ResolvedColor::Transparent => fill,
            ResolvedColor::Unknown(_) => UNRESOLVED,
        };
        Text::with_text_style(
            "Aa",
            swatch.center() - Point::new(0, 6),
            MonoTextStyle::new(TEXT_SM, color),
            TOP_CENTER,
        )
        .draw(display)
        .ok();
    }

    draw_text(display, name, row.top_left + Point::new(46, 6), TEXT_XS, ZINC_500, TOP_LEFT);

    let mut code: String<8> = String::new();
    write!(code, "{}", reported.code()).ok();
    let code_box = draw_text(display, &code, row.top_left + Point::new(46, 22), TEXT_SM, code_color, TOP_LEFT);

    let mut hex: String<32> = String::new();
    write!(hex, "{reported}").ok();
    let hex_x = code_box.top_left.x + code_box.size.width as i32 + 8;
    draw_text(display, &hex, Point::new(hex_x, row.top_left.y + 25), TEXT_XS, ZINC_600, TOP_LEFT);
}

fn caption<D>(
    display: &mut D,
    text: &str,
    y: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_text(display, text, Point::new(CONTENT_X, y), TEXT_XS, ZINC_500, TOP_LEFT);
}

fn divider<D>(
    display: &mut D,
    y: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(Point::new(PANEL.top_left.x + 1, y), Point::new(PANEL.top_left.x + PANEL.size.width as i32 - 2, y))
        .into_styled(PrimitiveStyle::with_stroke(paint_or(ZINC_800, Rgb565::BLACK), 1))
        .draw(display)
        .ok();
}
