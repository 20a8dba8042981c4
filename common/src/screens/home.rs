//! Home view: welcome card and the palette reference panel.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};

use crate::colors::{
    CYAN_500,
    CYAN_700,
    ORANGE_600,
    TRANSPARENT,
    ZINC_100,
    ZINC_400,
    ZINC_500,
    ZINC_600,
    ZINC_700,
    ZINC_800,
    ZINC_900,
    paint_or,
};
use crate::config::{CONTENT_TOP, SCREEN_WIDTH, SIDE_COLUMN_WIDTH};
use crate::scene::{Node, NodeId, Scene};
use crate::styles::{TEXT_SM, TEXT_XL, TEXT_XS, TOP_CENTER, TOP_LEFT, TOP_RIGHT};
use crate::symbols::LvSymbol;
use crate::widgets::icons::{Icon, icon};
use crate::widgets::primitives::{block, disc, label};

const PAD: i32 = 24;

const WELCOME_CARD: Rectangle = Rectangle::new(
    Point::new(PAD, CONTENT_TOP + PAD),
    Size::new(SCREEN_WIDTH - SIDE_COLUMN_WIDTH - 3 * PAD as u32, 372),
);

const INFO_PANEL: Rectangle = Rectangle::new(
    Point::new(SCREEN_WIDTH as i32 - PAD - SIDE_COLUMN_WIDTH as i32, CONTENT_TOP + PAD),
    Size::new(SIDE_COLUMN_WIDTH, 200),
);

/// Palette rows: name, swatch style, hex as written in the style sheet, hex text color.
const SWATCHES: [(&str, &str, &str, &str); 3] = [
    ("BG Main", ZINC_900, "0x18181B", ZINC_600),
    ("Accent 1", CYAN_700, "0x0E7490", CYAN_700),
    ("Accent 2", ORANGE_600, "0xEA580C", ORANGE_600),
];

pub fn draw_home<D>(
    display: &mut D,
    scene: &mut Scene,
    root: Option<NodeId>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_welcome_card(display, scene, root);
    draw_info_panel(display, scene, root);
}

fn draw_welcome_card<D>(
    display: &mut D,
    scene: &mut Scene,
    root: Option<NodeId>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let card = block(
        display,
        scene,
        Node::container(WELCOME_CARD).named("WelcomeCard").colors(ZINC_900, ZINC_100).parent(root),
        ZINC_800,
    );
    let center_x = WELCOME_CARD.center().x;

    let badge = Rectangle::with_center(Point::new(center_x, 233), Size::new_equal(80));
    let ring = disc(display, scene, Node::decoration(badge).colors(ZINC_800, CYAN_500).parent(card), ZINC_700);
    icon(
        display,
        scene,
        Node::decoration(Rectangle::with_center(badge.center(), Size::new_equal(40)))
            .colors(TRANSPARENT, CYAN_500)
            .symbol(LvSymbol::Settings)
            .parent(ring),
        Icon::Fan,
    );

    label(display, scene, card, "System Ready", Point::new(center_x, 289), TEXT_XL, ZINC_100, TOP_CENTER);
    label(display, scene, card, "Embedded Control Interface", Point::new(center_x, 321), TEXT_SM, ZINC_500, TOP_CENTER);
    label(display, scene, card, "Ver 1.0.0 (RGB565)", Point::new(center_x, 336), TEXT_SM, ZINC_500, TOP_CENTER);
}

fn draw_info_panel<D>(
    display: &mut D,
    scene: &mut Scene,
    root: Option<NodeId>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let panel = block(
        display,
        scene,
        Node::container(INFO_PANEL).named("InfoPanel").colors(ZINC_900, ZINC_400).parent(root),
        ZINC_800,
    );
    let left = INFO_PANEL.top_left.x + 20;
    let right = INFO_PANEL.top_left.x + INFO_PANEL.size.width as i32 - 20;
    let top = INFO_PANEL.top_left.y + 20;

    icon(
        display,
        scene,
        Node::decoration(Rectangle::new(Point::new(left, top), Size::new_equal(18)))
            .colors(TRANSPARENT, ZINC_400)
            .parent(panel),
        Icon::Palette,
    );
    label(display, scene, panel, "APPEARANCE", Point::new(left + 26, top + 4), TEXT_XS, ZINC_400, TOP_LEFT);
    Line::new(Point::new(left, top + 26), Point::new(right, top + 26))
        .into_styled(PrimitiveStyle::with_stroke(paint_or(ZINC_700, Rgb565::BLACK), 1))
        .draw(display)
        .ok();

    label(
        display,
        scene,
        panel,
        "Primary Colors (RGB565 Safe)",
        Point::new(left, top + 42),
        TEXT_XS,
        ZINC_500,
        TOP_LEFT,
    );

    let mut y = top + 60;
    for (name, swatch, hex, hex_color) in SWATCHES {
        let border = if swatch == ZINC_900 { ZINC_700 } else { TRANSPARENT };
        block(
            display,
            scene,
            Node::decoration(Rectangle::new(Point::new(left, y), Size::new_equal(16)))
                .colors(swatch, ZINC_400)
                .parent(panel),
            border,
        );
        label(display, scene, panel, name, Point::new(left + 24, y + 3), TEXT_XS, ZINC_400, TOP_LEFT);
        label(display, scene, panel, hex, Point::new(right, y + 3), TEXT_XS, hex_color, TOP_RIGHT);
        y += 24;
    }

    label(display, scene, panel, "Turn on DEV mode to inspect", Point::new(left, y + 4), TEXT_XS, ZINC_600, TOP_LEFT);
    label(display, scene, panel, "specific elements.", Point::new(left, y + 16), TEXT_XS, ZINC_600, TOP_LEFT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CANVAS;
    use crate::inspector::locate;
    use crate::testing::FrameBuffer;

    fn render() -> Scene {
        let mut fb = FrameBuffer::new();
        let mut scene = Scene::new();
        draw_home(&mut fb, &mut scene, None);
        scene
    }

    #[test]
    fn test_home_layout() {
        assert_eq!(WELCOME_CARD.size.width, 448);
        assert_eq!(INFO_PANEL.top_left.x, 496);
        // Last text line stays inside the panel.
        assert!(INFO_PANEL.top_left.y + 20 + 60 + 3 * 24 + 16 + 10 < INFO_PANEL.top_left.y + 200);
    }

    #[test]
    fn test_fan_icon_reports_settings_symbol() {
        let scene = render();
        let record = locate(&scene, CANVAS, Point::new(248, 233)).unwrap();
        assert_eq!(record.component.as_str(), "WelcomeCard");
        assert_eq!(record.symbol, Some(LvSymbol::Settings));
        // Excerpt is cut at 30 characters.
        assert_eq!(record.text.as_str(), "System Ready Embedded Control ");
    }

    #[test]
    fn test_swatch_click_selects_info_panel() {
        let scene = render();
        let record = locate(&scene, CANVAS, Point::new(520, 170)).unwrap();
        assert_eq!(record.component.as_str(), "InfoPanel");
        assert_eq!(record.background.to_string(), "#18181B");
    }
}
