//! Header bar: logo or back button, page title, and the two group buttons.
//!
//! All positions are fixed, so they are computed at compile time from the
//! header layout constants.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};

use crate::colors::{
    CYAN_500,
    CYAN_700,
    ORANGE_500,
    ORANGE_700,
    TRANSPARENT,
    WHITE,
    ZINC_100,
    ZINC_300,
    ZINC_600,
    ZINC_700,
    ZINC_800,
    ZINC_900,
    paint_or,
};
use crate::config::{HEADER_BUTTON_HEIGHT, HEADER_HEIGHT, SCREEN_WIDTH};
use crate::panel::Panel;
use crate::scene::{Action, Node, NodeId, Scene};
use crate::styles::{TEXT_LG, TEXT_SM, TOP_CENTER, TOP_LEFT, text_width};
use crate::symbols::LvSymbol;
use crate::views::{View, ViewGroup};
use crate::widgets::icons::{Icon, icon};
use crate::widgets::primitives::{block, label};

// =============================================================================
// Header Layout Constants
// =============================================================================

/// Horizontal padding inside the header.
const PAD_X: i32 = 16;

/// Top edge of the 40px header buttons.
const BUTTON_Y: i32 = (HEADER_HEIGHT - HEADER_BUTTON_HEIGHT) as i32 / 2;

/// Header background.
pub const HEADER_RECT: Rectangle = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, HEADER_HEIGHT));

/// Logo block plus the "HVAC OS" wordmark.
const LOGO_AREA: Rectangle = Rectangle::new(Point::new(PAD_X + 8, 14), Size::new(32 + 12 + 70, 32));
const LOGO_BOX: Rectangle = Rectangle::new(Point::new(PAD_X + 8, 14), Size::new(32, 32));
const LOGO_TEXT_POS: Point = Point::new(PAD_X + 8 + 32 + 12, 20);

/// Back button: icon, gap, "Back" in 10x20.
pub const BACK_BUTTON: Rectangle = Rectangle::new(Point::new(PAD_X, BUTTON_Y), Size::new(100, HEADER_BUTTON_HEIGHT));

/// Title separator x position, right of the back button.
const TITLE_X: i32 = PAD_X + 100 + 12;

/// Group button width: 20px padding, 18px icon, 8px gap, 7 characters of 7x13.
const NAV_BUTTON_WIDTH: u32 = 20 + 18 + 8 + text_width(TEXT_SM, 7) + 20;

pub const NAV_CONTROL: Rectangle = Rectangle::new(
    Point::new(SCREEN_WIDTH as i32 - PAD_X - NAV_BUTTON_WIDTH as i32, BUTTON_Y),
    Size::new(NAV_BUTTON_WIDTH, HEADER_BUTTON_HEIGHT),
);

pub const NAV_PAIRING: Rectangle = Rectangle::new(
    Point::new(NAV_CONTROL.top_left.x - 12 - NAV_BUTTON_WIDTH as i32, BUTTON_Y),
    Size::new(NAV_BUTTON_WIDTH, HEADER_BUTTON_HEIGHT),
);

/// Bottom border line.
const BORDER_START: Point = Point::new(0, HEADER_HEIGHT as i32 - 1);
const BORDER_END: Point = Point::new(SCREEN_WIDTH as i32 - 1, HEADER_HEIGHT as i32 - 1);

// =============================================================================
// Drawing Functions
// =============================================================================

/// Draw the header for the panel's current view.
pub fn draw_header<D>(
    panel: &Panel,
    display: &mut D,
    scene: &mut Scene,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let view = panel.view();
    let root = block(display, scene, Node::container(HEADER_RECT).named("Header").colors(ZINC_900, ZINC_100), TRANSPARENT);
    Line::new(BORDER_START, BORDER_END)
        .into_styled(PrimitiveStyle::with_stroke(paint_or(ZINC_700, Rgb565::BLACK), 1))
        .draw(display)
        .ok();

    if view == View::Home {
        let logo = scene.push(Node::container(LOGO_AREA).named("LogoArea").parent(root));
        let mark = block(display, scene, Node::decoration(LOGO_BOX).colors(CYAN_700, WHITE).parent(logo), CYAN_500);
        label(display, scene, mark, "OS", LOGO_BOX.center() - Point::new(0, 6), TEXT_SM, WHITE, TOP_CENTER);
        label(display, scene, logo, "HVAC OS", LOGO_TEXT_POS, TEXT_LG, ZINC_100, TOP_LEFT);
    } else {
        let back = block(
            display,
            scene,
            Node::button(BACK_BUTTON)
                .named("BackButton")
                .colors(ZINC_800, ZINC_300)
                .action(Action::Back)
                .parent(root),
            ZINC_600,
        );
        let arrow = Rectangle::new(BACK_BUTTON.top_left + Point::new(16, 10), Size::new_equal(20));
        icon(
            display,
            scene,
            Node::decoration(arrow).colors(TRANSPARENT, ZINC_300).symbol(LvSymbol::Left).parent(back),
            Icon::ArrowLeft,
        );
        label(display, scene, back, "Back", BACK_BUTTON.top_left + Point::new(44, 10), TEXT_LG, ZINC_300, TOP_LEFT);

        if let Some(title) = panel.title() {
            let width = 1 + 12 + text_width(TEXT_LG, title.chars().count() as u32);
            let area = Rectangle::new(Point::new(TITLE_X, 18), Size::new(width, 24));
            let page = scene.push(Node::container(area).named("PageTitle").colors(TRANSPARENT, ZINC_100).parent(root));
            Line::new(Point::new(TITLE_X, 18), Point::new(TITLE_X, 41))
                .into_styled(PrimitiveStyle::with_stroke(paint_or(ZINC_600, Rgb565::BLACK), 1))
                .draw(display)
                .ok();
            label(display, scene, page, title, Point::new(TITLE_X + 13, 20), TEXT_LG, ZINC_100, TOP_LEFT);
        }
    }

    let group = view.group();
    nav_button(
        display,
        scene,
        root,
        NavButton {
            rect: NAV_PAIRING,
            name: "NavButton:Pairing",
            text: "Pairing",
            icon: Icon::Settings,
            target: View::PairingMenu,
            active: group == ViewGroup::Pairing,
            active_colors: (CYAN_700, CYAN_500),
        },
    );
    nav_button(
        display,
        scene,
        root,
        NavButton {
            rect: NAV_CONTROL,
            name: "NavButton:Control",
            text: "Control",
            icon: Icon::Thermometer,
            target: View::ControlRoomList,
            active: group == ViewGroup::Control,
            active_colors: (ORANGE_700, ORANGE_500),
        },
    );
}

struct NavButton {
    rect: Rectangle,
    name: &'static str,
    text: &'static str,
    icon: Icon,
    target: View,
    active: bool,
    /// Background and border while the group is active.
    active_colors: (&'static str, &'static str),
}

fn nav_button<D>(
    display: &mut D,
    scene: &mut Scene,
    parent: Option<NodeId>,
    button: NavButton,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let (background, border, foreground) = if button.active {
        (button.active_colors.0, button.active_colors.1, WHITE)
    } else {
        (ZINC_800, ZINC_600, ZINC_300)
    };
    let id = block(
        display,
        scene,
        Node::button(button.rect)
            .named(button.name)
            .colors(background, foreground)
            .action(Action::Navigate(button.target))
            .parent(parent),
        border,
    );
    let glyph = Rectangle::new(button.rect.top_left + Point::new(20, 11), Size::new_equal(18));
    icon(display, scene, Node::decoration(glyph).colors(TRANSPARENT, foreground).parent(id), button.icon);
    label(display, scene, id, button.text, button.rect.top_left + Point::new(46, 14), TEXT_SM, foreground, TOP_LEFT);
}
