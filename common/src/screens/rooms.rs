//! Control views: room grid and room detail.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle, RoundedRectangle};
use heapless::String;

use crate::colors::{
    CYAN_600,
    ORANGE_500,
    ORANGE_600,
    ORANGE_700,
    TRANSPARENT,
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
    paint_or,
};
use crate::config::{CONTENT_HEIGHT, CONTENT_TOP, SCREEN_WIDTH, SIDE_COLUMN_WIDTH};
use crate::model::Room;
use crate::panel::{Panel, slider_position};
use crate::scene::{Action, Node, NodeId, NodeKind, Scene};
use crate::styles::{TEXT_LG, TEXT_MD, TEXT_NUM, TEXT_SM, TEXT_XS, TOP_CENTER, TOP_LEFT, TOP_RIGHT, text_width};
use crate::symbols::LvSymbol;
use crate::widgets::chart::draw_history_chart;
use crate::widgets::icons::{Icon, icon};
use crate::widgets::primitives::{block, label};

const PAD: i32 = 24;
const GAP: i32 = 16;

// =============================================================================
// Room List
// =============================================================================

const GRID: Rectangle = Rectangle::new(
    Point::new(PAD, CONTENT_TOP + PAD),
    Size::new(SCREEN_WIDTH - 2 * PAD as u32, CONTENT_HEIGHT - 2 * PAD as u32),
);

/// Bounds of room card `index` in a two-column grid of `count` cards.
///
/// The grid always reserves at least two rows so a short list keeps its
/// card size.
pub fn card_rect(
    index: usize,
    count: usize,
) -> Rectangle {
    let rows = count.div_ceil(2).max(2) as i32;
    let width = (GRID.size.width as i32 - GAP) / 2;
    let height = (GRID.size.height as i32 - GAP * (rows - 1)) / rows;
    let (col, row) = ((index % 2) as i32, (index / 2) as i32);
    Rectangle::new(
        GRID.top_left + Point::new(col * (width + GAP), row * (height + GAP)),
        Size::new(width as u32, height as u32),
    )
}

pub fn draw_room_list<D>(
    panel: &Panel,
    display: &mut D,
    scene: &mut Scene,
    root: Option<NodeId>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let count = panel.room_count();
    for (index, room) in panel.rooms().iter().enumerate() {
        room_card(display, scene, root, index, room, card_rect(index, count));
    }
}

fn room_card<D>(
    display: &mut D,
    scene: &mut Scene,
    root: Option<NodeId>,
    index: usize,
    room: &Room,
    rect: Rectangle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let card = block(
        display,
        scene,
        Node::button(rect)
            .keyed("RoomCard", room.id)
            .colors(ZINC_900, ZINC_200)
            .action(Action::SelectRoom(index))
            .parent(root),
        ZINC_800,
    );
    let left = rect.top_left.x + 20;
    let right = rect.top_left.x + rect.size.width as i32 - 20;
    let top = rect.top_left.y + 20;
    let bottom = rect.top_left.y + rect.size.height as i32 - 20;

    label(display, scene, card, room.name, Point::new(left, top), TEXT_LG, ZINC_200, TOP_LEFT);
    let valve = if room.valve_open { ORANGE_500 } else { ZINC_700 };
    block(
        display,
        scene,
        Node::decoration(Rectangle::new(Point::new(right - 12, top + 4), Size::new_equal(12)))
            .colors(valve, WHITE)
            .parent(card),
        TRANSPARENT,
    );

    let mut text: String<12> = String::new();
    write!(text, "{:.1}°", room.target_temp).ok();
    label(display, scene, card, "SET", Point::new(left, bottom - 34), TEXT_XS, ZINC_600, TOP_LEFT);
    label(display, scene, card, &text, Point::new(left, bottom - 20), TEXT_LG, ZINC_400, TOP_LEFT);

    let num_height = TEXT_NUM.character_size.height as i32;
    text.clear();
    write!(text, "{:.1}", room.current_temp).ok();
    label(display, scene, card, "ACT", Point::new(right, bottom - num_height - 14), TEXT_XS, ZINC_600, TOP_RIGHT);
    label(display, scene, card, &text, Point::new(right - 12, bottom - num_height), TEXT_NUM, ZINC_100, TOP_RIGHT);
    label(display, scene, card, "°", Point::new(right, bottom - num_height), TEXT_LG, ZINC_100, TOP_RIGHT);
}

// =============================================================================
// Room Detail
// =============================================================================

const COLUMN_X: i32 = PAD;
const TEMP_DISPLAY: Rectangle = Rectangle::new(Point::new(COLUMN_X, CONTENT_TOP + PAD), Size::new(SIDE_COLUMN_WIDTH, 132));
const VALVE_CONTROL: Rectangle = Rectangle::new(
    Point::new(COLUMN_X, TEMP_DISPLAY.top_left.y + 132 + GAP),
    Size::new(SIDE_COLUMN_WIDTH, 124),
);
const TARGET_CONTROL: Rectangle = Rectangle::new(
    Point::new(COLUMN_X, VALVE_CONTROL.top_left.y + 124 + GAP),
    Size::new(SIDE_COLUMN_WIDTH, 84),
);
const CHART_PANEL: Rectangle = Rectangle::new(
    Point::new(COLUMN_X + SIDE_COLUMN_WIDTH as i32 + PAD, CONTENT_TOP + PAD),
    Size::new(SCREEN_WIDTH - SIDE_COLUMN_WIDTH - 3 * PAD as u32, CONTENT_HEIGHT - 2 * PAD as u32),
);

/// Valve toggle inside [`VALVE_CONTROL`].
pub const VALVE_BUTTON: Rectangle = Rectangle::new(
    Point::new(COLUMN_X + 20, VALVE_CONTROL.top_left.y + 56),
    Size::new(SIDE_COLUMN_WIDTH - 40, 48),
);

/// Slider hit area inside [`TARGET_CONTROL`]; the track is drawn through its middle.
pub const TARGET_SLIDER: Rectangle = Rectangle::new(
    Point::new(COLUMN_X + 20, TARGET_CONTROL.top_left.y + 44),
    Size::new(SIDE_COLUMN_WIDTH - 40, 24),
);

const TRACK_HEIGHT: u32 = 8;
const THUMB_DIAMETER: u32 = 16;

pub fn draw_room_detail<D>(
    panel: &Panel,
    display: &mut D,
    scene: &mut Scene,
    root: Option<NodeId>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let (Some(index), Some(room)) = (panel.selected_room(), panel.active_room()) else {
        log::warn!("room detail without a selected room");
        return;
    };

    draw_temp_display(display, scene, root, room);
    draw_valve_control(display, scene, root, index, room);
    draw_target_control(display, scene, root, index, room);
    draw_chart_panel(display, scene, root, room);
}

fn draw_temp_display<D>(
    display: &mut D,
    scene: &mut Scene,
    root: Option<NodeId>,
    room: &Room,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let id = block(
        display,
        scene,
        Node::container(TEMP_DISPLAY).named("TempDisplay").colors(ZINC_900, ZINC_100).parent(root),
        ZINC_800,
    );
    let center_x = TEMP_DISPLAY.center().x;
    label(
        display,
        scene,
        id,
        "CURRENT TEMP",
        Point::new(center_x, TEMP_DISPLAY.top_left.y + 24),
        TEXT_SM,
        ZINC_500,
        TOP_CENTER,
    );

    let mut value: String<8> = String::new();
    write!(value, "{:.1}", room.current_temp).ok();
    let value_width = text_width(TEXT_NUM, value.chars().count() as u32) as i32;
    let unit_width = text_width(TEXT_LG, 2) as i32;
    let x = center_x - (value_width + 4 + unit_width) / 2;
    let y = TEMP_DISPLAY.top_left.y + 54;
    label(display, scene, id, &value, Point::new(x, y), TEXT_NUM, ZINC_100, TOP_LEFT);
    label(display, scene, id, "°C", Point::new(x + value_width + 4, y), TEXT_LG, ZINC_600, TOP_LEFT);
}

fn draw_valve_control<D>(
    display: &mut D,
    scene: &mut Scene,
    root: Option<NodeId>,
    index: usize,
    room: &Room,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let id = block(
        display,
        scene,
        Node::container(VALVE_CONTROL).named("ValveControl").colors(ZINC_900, ZINC_300).parent(root),
        ZINC_800,
    );
    let top = VALVE_CONTROL.top_left.y + 20;
    let right = VALVE_CONTROL.top_left.x + VALVE_CONTROL.size.width as i32 - 20;
    label(display, scene, id, "Valve State", Point::new(COLUMN_X + 20, top + 2), TEXT_MD, ZINC_300, TOP_LEFT);
    icon(
        display,
        scene,
        Node::decoration(Rectangle::new(Point::new(right - 20, top), Size::new_equal(20)))
            .colors(TRANSPARENT, if room.valve_open { ORANGE_500 } else { ZINC_700 })
            .symbol(LvSymbol::Power)
            .parent(id),
        Icon::Power,
    );

    let (background, border, foreground, text) = if room.valve_open {
        (ORANGE_700, ORANGE_600, WHITE, "OPEN")
    } else {
        (ZINC_800, ZINC_600, ZINC_400, "CLOSED")
    };
    let button = block(
        display,
        scene,
        Node::button(VALVE_BUTTON)
            .colors(background, foreground)
            .action(Action::ToggleValve(index))
            .parent(id),
        border,
    );
    label(display, scene, button, text, VALVE_BUTTON.center() - Point::new(0, 10), TEXT_LG, foreground, TOP_CENTER);
}

fn draw_target_control<D>(
    display: &mut D,
    scene: &mut Scene,
    root: Option<NodeId>,
    index: usize,
    room: &Room,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let id = block(
        display,
        scene,
        Node::container(TARGET_CONTROL).named("TargetControl").colors(ZINC_900, WHITE).parent(root),
        ZINC_800,
    );
    let top = TARGET_CONTROL.top_left.y + 20;
    let right = TARGET_CONTROL.top_left.x + TARGET_CONTROL.size.width as i32 - 20;
    label(display, scene, id, "Target", Point::new(COLUMN_X + 20, top + 1), TEXT_SM, ZINC_500, TOP_LEFT);

    let mut value: String<12> = String::new();
    write!(value, "{:.1}°C", room.target_temp).ok();
    label(display, scene, id, &value, Point::new(right, top), TEXT_MD, WHITE, TOP_RIGHT);

    scene.push(
        Node::new(NodeKind::Slider, TARGET_SLIDER)
            .colors(ZINC_700, CYAN_600)
            .action(Action::SetTargetTemp(index))
            .parent(id),
    );
    let center_y = TARGET_SLIDER.center().y;
    let track = Rectangle::new(
        Point::new(TARGET_SLIDER.top_left.x, center_y - TRACK_HEIGHT as i32 / 2),
        Size::new(TARGET_SLIDER.size.width, TRACK_HEIGHT),
    );
    let thumb_x = slider_position(TARGET_SLIDER, room.target_temp);
    let accent = paint_or(CYAN_600, Rgb565::WHITE);

    RoundedRectangle::with_equal_corners(track, Size::new_equal(TRACK_HEIGHT / 2))
        .into_styled(PrimitiveStyle::with_fill(paint_or(ZINC_700, Rgb565::BLACK)))
        .draw(display)
        .ok();
    let filled = (thumb_x - track.top_left.x).max(0) as u32;
    RoundedRectangle::with_equal_corners(
        Rectangle::new(track.top_left, Size::new(filled, TRACK_HEIGHT)),
        Size::new_equal(TRACK_HEIGHT / 2),
    )
    .into_styled(PrimitiveStyle::with_fill(accent))
    .draw(display)
    .ok();
    Circle::with_center(Point::new(thumb_x, center_y), THUMB_DIAMETER)
        .into_styled(PrimitiveStyle::with_fill(accent))
        .draw(display)
        .ok();
}

fn draw_chart_panel<D>(
    display: &mut D,
    scene: &mut Scene,
    root: Option<NodeId>,
    room: &Room,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let id = block(
        display,
        scene,
        Node::container(CHART_PANEL).named("ChartPanel").colors(ZINC_900, ZINC_400).parent(root),
        ZINC_800,
    );
    let left = CHART_PANEL.top_left.x + 16;
    let right = CHART_PANEL.top_left.x + CHART_PANEL.size.width as i32 - 16;
    let top = CHART_PANEL.top_left.y + 16;
    label(
        display,
        scene,
        id,
        "TEMPERATURE TREND (1H)",
        Point::new(left + 8, top + 4),
        TEXT_SM,
        ZINC_400,
        TOP_LEFT,
    );
    label(display, scene, id, "SENSOR: DS18B20", Point::new(right, top + 6), TEXT_XS, ZINC_600, TOP_RIGHT);

    let chart = Rectangle::new(
        Point::new(left, top + 36),
        Size::new(CHART_PANEL.size.width - 32, CHART_PANEL.size.height - 68),
    );
    scene.push(Node::container(chart).named("ChartContainer").colors(TRANSPARENT, ZINC_400).parent(id));
    draw_history_chart(display, chart, room);
}
