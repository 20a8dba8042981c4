//! Pairing views: menu, system status, and device discovery.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use heapless::String;

use crate::colors::{
    CYAN_500,
    CYAN_600,
    CYAN_700,
    EMERALD_500,
    EMERALD_800,
    EMERALD_900_30,
    ORANGE_500,
    ORANGE_600,
    TRANSPARENT,
    WHITE,
    ZINC_100,
    ZINC_200,
    ZINC_400,
    ZINC_500,
    ZINC_700,
    ZINC_800,
    ZINC_900,
    ZINC_950,
    paint_or,
};
use crate::config::{CONTENT_HEIGHT, CONTENT_TOP, SCREEN_WIDTH};
use crate::model::Device;
use crate::panel::Panel;
use crate::scene::{Action, Node, NodeId, Scene};
use crate::styles::{TEXT_LG, TEXT_NUM, TEXT_SM, TEXT_XS, TOP_CENTER, TOP_LEFT, TOP_RIGHT};
use crate::symbols::LvSymbol;
use crate::views::View;
use crate::widgets::icons::{Icon, icon};
use crate::widgets::primitives::{block, disc, draw_dot, label};

// =============================================================================
// Pairing Menu
// =============================================================================

const MENU_BUTTON_SIZE: Size = Size::new(352, 256);
const MENU_BUTTON_Y: i32 = CONTENT_TOP + (CONTENT_HEIGHT - 256) as i32 / 2;
const MENU_STATUS: Rectangle = Rectangle::new(Point::new(32, MENU_BUTTON_Y), MENU_BUTTON_SIZE);
const MENU_ADD: Rectangle = Rectangle::new(Point::new(32 + 352 + 32, MENU_BUTTON_Y), MENU_BUTTON_SIZE);

struct MenuEntry {
    rect: Rectangle,
    name: &'static str,
    title: &'static str,
    subtitle: &'static str,
    icon: Icon,
    icon_color: &'static str,
    symbol: LvSymbol,
    target: View,
}

const MENU: [MenuEntry; 2] = [
    MenuEntry {
        rect: MENU_STATUS,
        name: "MenuButton:Status",
        title: "System Status",
        subtitle: "14 ACTIVE NODES",
        icon: Icon::Activity,
        icon_color: CYAN_500,
        symbol: LvSymbol::Audio,
        target: View::PairingStatus,
    },
    MenuEntry {
        rect: MENU_ADD,
        name: "MenuButton:Add",
        title: "Add Device",
        subtitle: "PAIRING MODE",
        icon: Icon::Plus,
        icon_color: ORANGE_500,
        symbol: LvSymbol::Plus,
        target: View::PairingAdd,
    },
];

pub fn draw_pairing_menu<D>(
    display: &mut D,
    scene: &mut Scene,
    root: Option<NodeId>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for entry in &MENU {
        let button = block(
            display,
            scene,
            Node::button(entry.rect)
                .named(entry.name)
                .colors(ZINC_900, ZINC_200)
                .action(Action::Navigate(entry.target))
                .parent(root),
            ZINC_700,
        );
        let center_x = entry.rect.center().x;
        let top = entry.rect.top_left.y + 55;

        let badge = Rectangle::new(Point::new(center_x - 40, top), Size::new_equal(80));
        let ring = disc(display, scene, Node::decoration(badge).colors(ZINC_800, entry.icon_color).parent(button), ZINC_700);
        icon(
            display,
            scene,
            Node::decoration(Rectangle::with_center(badge.center(), Size::new_equal(40)))
                .colors(TRANSPARENT, entry.icon_color)
                .symbol(entry.symbol)
                .parent(ring),
            entry.icon,
        );
        label(display, scene, button, entry.title, Point::new(center_x, top + 104), TEXT_LG, ZINC_200, TOP_CENTER);
        label(display, scene, button, entry.subtitle, Point::new(center_x, top + 132), TEXT_SM, ZINC_500, TOP_CENTER);
    }
}

// =============================================================================
// System Status
// =============================================================================

const STAT_SIZE: Size = Size::new(356, 236);
const STAT_ROOMS: Rectangle = Rectangle::new(Point::new(32, CONTENT_TOP + 32), STAT_SIZE);
const STAT_SENSORS: Rectangle = Rectangle::new(Point::new(32 + 356 + 24, CONTENT_TOP + 32), STAT_SIZE);
const GATEWAY: Rectangle = Rectangle::new(
    Point::new(32, CONTENT_TOP + 32 + 236 + 24),
    Size::new(SCREEN_WIDTH - 64, 96),
);

/// Width of the colored left edge of a stat card.
const ACCENT_WIDTH: u32 = 4;

pub fn draw_pairing_status<D>(
    panel: &Panel,
    display: &mut D,
    scene: &mut Scene,
    root: Option<NodeId>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    stat_card(
        display,
        scene,
        root,
        StatCard {
            rect: STAT_ROOMS,
            name: "StatCard:Rooms",
            title: "ROOMS",
            value: panel.room_count() as u32,
            accent: ORANGE_600,
            icon: Icon::Home,
            symbol: LvSymbol::Home,
        },
    );
    stat_card(
        display,
        scene,
        root,
        StatCard {
            rect: STAT_SENSORS,
            name: "StatCard:Sensors",
            title: "SENSORS",
            value: panel.sensor_total(),
            accent: CYAN_600,
            icon: Icon::Cpu,
            symbol: LvSymbol::SdCard,
        },
    );
    draw_gateway(display, scene, root);
}

struct StatCard {
    rect: Rectangle,
    name: &'static str,
    title: &'static str,
    value: u32,
    accent: &'static str,
    icon: Icon,
    symbol: LvSymbol,
}

fn stat_card<D>(
    display: &mut D,
    scene: &mut Scene,
    root: Option<NodeId>,
    card: StatCard,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let id = block(
        display,
        scene,
        Node::container(card.rect).named(card.name).colors(ZINC_900, ZINC_100).parent(root),
        ZINC_800,
    );
    Rectangle::new(card.rect.top_left, Size::new(ACCENT_WIDTH, card.rect.size.height))
        .into_styled(PrimitiveStyle::with_fill(paint_or(card.accent, Rgb565::BLACK)))
        .draw(display)
        .ok();

    let left = card.rect.top_left.x + ACCENT_WIDTH as i32 + 24;
    let right = card.rect.top_left.x + card.rect.size.width as i32 - 24;
    let top = card.rect.top_left.y + 24;
    label(display, scene, id, card.title, Point::new(left, top), TEXT_LG, ZINC_400, TOP_LEFT);
    icon(
        display,
        scene,
        Node::decoration(Rectangle::new(Point::new(right - 28, top), Size::new_equal(28)))
            .colors(TRANSPARENT, card.accent)
            .symbol(card.symbol)
            .parent(id),
        card.icon,
    );

    let mut value: String<8> = String::new();
    write!(value, "{}", card.value).ok();
    let bottom = card.rect.top_left.y + card.rect.size.height as i32 - 24;
    let height = TEXT_NUM.character_size.height as i32;
    label(display, scene, id, &value, Point::new(left, bottom - height), TEXT_NUM, ZINC_100, TOP_LEFT);
}

fn draw_gateway<D>(
    display: &mut D,
    scene: &mut Scene,
    root: Option<NodeId>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let id = block(
        display,
        scene,
        Node::container(GATEWAY).named("GatewayStatus").colors(ZINC_900, ZINC_100).parent(root),
        ZINC_800,
    );
    let left = GATEWAY.top_left.x + 24;
    let mid_y = GATEWAY.center().y;

    let badge = Rectangle::new(Point::new(left, mid_y - 24), Size::new_equal(48));
    let badge_id = block(display, scene, Node::decoration(badge).colors(EMERALD_900_30, EMERALD_500).parent(id), EMERALD_800);
    icon(
        display,
        scene,
        Node::decoration(Rectangle::with_center(badge.center(), Size::new_equal(24)))
            .colors(TRANSPARENT, EMERALD_500)
            .symbol(LvSymbol::Wifi)
            .parent(badge_id),
        Icon::Signal,
    );
    label(display, scene, id, "ZIGBEE GATEWAY", Point::new(left + 72, mid_y - 22), TEXT_LG, ZINC_100, TOP_LEFT);
    label(display, scene, id, "CH: 11 | PAN_ID: 0x1A42", Point::new(left + 72, mid_y + 2), TEXT_SM, ZINC_500, TOP_LEFT);

    let right = GATEWAY.top_left.x + GATEWAY.size.width as i32 - 24;
    let chip = Rectangle::new(Point::new(right - 74, mid_y - 15), Size::new(74, 30));
    let chip_id = block(display, scene, Node::container(chip).colors(ZINC_950, ZINC_400).parent(id), ZINC_800);
    label(display, scene, chip_id, "ONLINE", chip.center() - Point::new(0, 6), TEXT_SM, ZINC_400, TOP_CENTER);
}

// =============================================================================
// Add Device
// =============================================================================

const DEVICE_LIST: Rectangle = Rectangle::new(Point::new(24, CONTENT_TOP + 24), Size::new(SCREEN_WIDTH - 48, 372));
const LIST_HEADER_HEIGHT: u32 = 48;
const ROW_HEIGHT: u32 = 72;
const ROW_GAP: i32 = 8;

/// Rows that fit in the list.
pub const VISIBLE_DEVICES: usize = 4;

pub fn draw_pairing_add<D>(
    panel: &Panel,
    display: &mut D,
    scene: &mut Scene,
    root: Option<NodeId>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let list = block(
        display,
        scene,
        Node::container(DEVICE_LIST).named("DeviceList").colors(ZINC_900, ZINC_100).parent(root),
        ZINC_800,
    );

    let header = Rectangle::new(DEVICE_LIST.top_left, Size::new(DEVICE_LIST.size.width, LIST_HEADER_HEIGHT));
    let header_id = block(display, scene, Node::container(header).colors(ZINC_800, ZINC_100).parent(list), ZINC_700);
    let right = header.top_left.x + header.size.width as i32 - 16;
    label(
        display,
        scene,
        header_id,
        "DISCOVERED DEVICES",
        header.top_left + Point::new(16, 18),
        TEXT_SM,
        ZINC_100,
        TOP_LEFT,
    );
    draw_dot(display, Point::new(right - 4, header.center().y), 8, paint_or(CYAN_500, Rgb565::BLACK));
    label(display, scene, header_id, "SCANNING", Point::new(right - 16, header.top_left.y + 19), TEXT_XS, ZINC_500, TOP_RIGHT);

    let mut y = header.top_left.y + LIST_HEADER_HEIGHT as i32 + ROW_GAP;
    let hidden = panel.devices().len().saturating_sub(VISIBLE_DEVICES);
    if hidden > 0 {
        log::debug!("device list shows {VISIBLE_DEVICES}, {hidden} more not drawn");
    }
    for (index, device) in panel.devices().iter().enumerate().take(VISIBLE_DEVICES) {
        device_row(display, scene, list, index, device, y);
        y += ROW_HEIGHT as i32 + ROW_GAP;
    }
}

fn device_row<D>(
    display: &mut D,
    scene: &mut Scene,
    list: Option<NodeId>,
    index: usize,
    device: &Device,
    y: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let row = Rectangle::new(Point::new(DEVICE_LIST.top_left.x + 8, y), Size::new(DEVICE_LIST.size.width - 16, ROW_HEIGHT));
    let id = block(
        display,
        scene,
        Node::container(row).keyed("DeviceItem", device.id).colors(ZINC_900, ZINC_100).parent(list),
        ZINC_800,
    );

    let chip = Rectangle::new(row.top_left + Point::new(16, 16), Size::new_equal(40));
    let chip_id = block(display, scene, Node::decoration(chip).colors(ZINC_800, ZINC_400).parent(id), ZINC_700);
    icon(
        display,
        scene,
        Node::decoration(Rectangle::with_center(chip.center(), Size::new_equal(20)))
            .colors(TRANSPARENT, ZINC_400)
            .symbol(LvSymbol::Usb)
            .parent(chip_id),
        Icon::Cpu,
    );
    label(display, scene, id, device.name, row.top_left + Point::new(72, 18), TEXT_SM, ZINC_200, TOP_LEFT);
    label(display, scene, id, device.mac, row.top_left + Point::new(72, 38), TEXT_XS, ZINC_500, TOP_LEFT);

    let pair = Rectangle::new(
        Point::new(row.top_left.x + row.size.width as i32 - 16 - 64, y + 20),
        Size::new(64, 32),
    );
    let pair_id = block(
        display,
        scene,
        Node::button(pair)
            .named("Pair")
            .colors(CYAN_700, WHITE)
            .symbol(LvSymbol::Plus)
            .action(Action::Pair(index))
            .parent(id),
        CYAN_600,
    );
    label(display, scene, pair_id, "PAIR", pair.center() - Point::new(0, 6), TEXT_SM, WHITE, TOP_CENTER);
}

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::Rgb888;

    use super::*;
    use crate::config::CANVAS;
    use crate::inspector::locate;
    use crate::model::{DeviceKind, mock_rooms};
    use crate::resolver::ResolvedColor;
    use crate::testing::FrameBuffer;

    fn render(view: View) -> (Panel, Scene) {
        let mut panel = Panel::new();
        panel.navigate_to(view);
        let mut fb = FrameBuffer::new();
        let mut scene = Scene::new();
        match view {
            View::PairingMenu => draw_pairing_menu(&mut fb, &mut scene, None),
            View::PairingStatus => draw_pairing_status(&panel, &mut fb, &mut scene, None),
            View::PairingAdd => draw_pairing_add(&panel, &mut fb, &mut scene, None),
            _ => unreachable!(),
        }
        (panel, scene)
    }

    #[test]
    fn test_menu_buttons_navigate() {
        let (_, scene) = render(View::PairingMenu);
        let status = scene.action_at(MENU_STATUS.center()).map(|(_, a)| a);
        let add = scene.action_at(MENU_ADD.center()).map(|(_, a)| a);
        assert_eq!(status, Some(Action::Navigate(View::PairingStatus)));
        assert_eq!(add, Some(Action::Navigate(View::PairingAdd)));
    }

    #[test]
    fn test_menu_icon_reports_symbol() {
        let (_, scene) = render(View::PairingMenu);
        let record = locate(&scene, CANVAS, MENU_ADD.center()).unwrap();
        assert_eq!(record.tag, "button");
        assert_eq!(record.component.as_str(), "MenuButton:Add");
        assert_eq!(record.symbol, Some(LvSymbol::Plus));
    }

    #[test]
    fn test_status_counts() {
        let (_, scene) = render(View::PairingStatus);
        let rooms = scene.find("StatCard:Rooms").unwrap();
        let sensors = scene.find("StatCard:Sensors").unwrap();
        assert_eq!(scene.text_within::<30>(rooms).as_str(), "ROOMS 4");
        assert_eq!(scene.text_within::<30>(sensors).as_str(), "SENSORS 7");
    }

    #[test]
    fn test_gateway_badge_selects_gateway_card() {
        let (_, scene) = render(View::PairingStatus);
        let record = locate(&scene, CANVAS, GATEWAY.top_left + Point::new(30, 30)).unwrap();
        assert_eq!(record.component.as_str(), "GatewayStatus");
        assert_eq!(record.symbol, Some(LvSymbol::Wifi));
        assert_eq!(record.background, ResolvedColor::Opaque(Rgb888::new(0x18, 0x18, 0x1b)));
    }

    #[test]
    fn test_device_rows() {
        let (panel, scene) = render(View::PairingAdd);
        for device in panel.devices() {
            let mut name: String<32> = String::new();
            write!(name, "DeviceItem:{}", device.id).unwrap();
            assert!(scene.find(&name).is_some(), "{name} missing");
        }
        let pairs = scene.iter().filter(|n| n.action.is_some_and(|a| matches!(a, Action::Pair(_)))).count();
        assert_eq!(pairs, panel.devices().len());
    }

    #[test]
    fn test_pair_button_inspects_as_button() {
        let (_, scene) = render(View::PairingAdd);
        let pair = scene.iter().position(|n| n.action == Some(Action::Pair(1))).unwrap();
        let point = scene.get(pair).unwrap().bounds.center();
        let record = locate(&scene, CANVAS, point).unwrap();
        assert_eq!(record.tag, "button");
        assert_eq!(record.text.as_str(), "PAIR");
        assert_eq!(record.symbol, Some(LvSymbol::Plus));
        assert_eq!(record.background_code().to_string(), "0x0BB2");
    }

    const fn device(
        id: &'static str,
        mac: &'static str,
    ) -> Device {
        Device {
            id,
            name: "Temp Sensor",
            kind: DeviceKind::Sensor,
            mac,
        }
    }

    static SIX_DEVICES: [Device; 6] = [
        device("1", "AA:BB:CC:01"),
        device("2", "AA:BB:CC:02"),
        device("3", "AA:BB:CC:03"),
        device("4", "AA:BB:CC:04"),
        device("5", "AA:BB:CC:05"),
        device("6", "AA:BB:CC:06"),
    ];

    #[test]
    fn test_device_list_caps_visible_rows() {
        let mut panel = Panel::with_data(mock_rooms(), &SIX_DEVICES);
        panel.navigate_to(View::PairingAdd);
        let mut fb = FrameBuffer::new();
        let mut scene = Scene::new();
        draw_pairing_add(&panel, &mut fb, &mut scene, None);

        let items = scene.iter().filter(|n| n.component.starts_with("DeviceItem:")).count();
        let pairs = scene.iter().filter(|n| matches!(n.action, Some(Action::Pair(_)))).count();
        assert_eq!(items, VISIBLE_DEVICES);
        assert_eq!(pairs, VISIBLE_DEVICES);
        assert!(scene.find("DeviceItem:5").is_none());
    }

    #[test]
    fn test_rows_fit_in_list() {
        let last = DEVICE_LIST.top_left.y
            + LIST_HEADER_HEIGHT as i32
            + ROW_GAP
            + VISIBLE_DEVICES as i32 * (ROW_HEIGHT as i32 + ROW_GAP)
            - ROW_GAP;
        assert!(last <= DEVICE_LIST.top_left.y + DEVICE_LIST.size.height as i32);
    }
}
