//! Line-art icons drawn with primitives.
//!
//! Each icon scales to a square box. Icons are decorations: they record a
//! node for the scene (carrying the LVGL symbol when the icon stands for one)
//! but are never selected by the inspector on their own.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Arc,
    Circle,
    Ellipse,
    Line,
    Polyline,
    PrimitiveStyle,
    Rectangle,
    Triangle,
};

use crate::colors::paint_or;
use crate::scene::{Node, NodeId, Scene};

/// Icon shapes used by the views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Fan,
    Activity,
    Plus,
    Home,
    Cpu,
    Signal,
    Power,
    ArrowLeft,
    Settings,
    Thermometer,
    Palette,
    ScanEye,
    Close,
}

/// Draw `icon` filling `node.bounds` in `node.foreground`, then record the node.
pub fn icon<D>(
    display: &mut D,
    scene: &mut Scene,
    node: Node,
    icon: Icon,
) -> Option<NodeId>
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_icon(display, icon, node.bounds, paint_or(node.foreground, Rgb565::WHITE));
    scene.push(node)
}

/// Draw `icon` into the square centered in `area`.
#[allow(clippy::too_many_lines)]
pub fn draw_icon<D>(
    display: &mut D,
    icon: Icon,
    area: Rectangle,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let s = area.size.width.min(area.size.height) as i32;
    if s < 4 {
        return;
    }
    let o = area.top_left + Point::new((area.size.width as i32 - s) / 2, (area.size.height as i32 - s) / 2);
    let c = o + Point::new((s - 1) / 2, (s - 1) / 2);
    let stroke = PrimitiveStyle::with_stroke(color, if s >= 24 { 2 } else { 1 });
    let fill = PrimitiveStyle::with_fill(color);
    let p = |fx: i32, fy: i32| o + Point::new((s - 1) * fx / 12, (s - 1) * fy / 12);

    match icon {
        Icon::Fan => {
            Circle::with_center(c, s as u32 / 5).into_styled(fill).draw(display).ok();
            for k in 0..3 {
                let angle = k as f32 * 2.094_395;
                let tip = c + Point::new(
                    (micromath::F32(angle).cos().0 * (s / 2) as f32) as i32,
                    (micromath::F32(angle).sin().0 * (s / 2) as f32) as i32,
                );
                let side = c + Point::new(
                    (micromath::F32(angle + 0.6).cos().0 * (s / 3) as f32) as i32,
                    (micromath::F32(angle + 0.6).sin().0 * (s / 3) as f32) as i32,
                );
                Triangle::new(c, tip, side).into_styled(fill).draw(display).ok();
            }
        }
        Icon::Activity => {
            Polyline::new(&[p(0, 6), p(3, 6), p(5, 1), p(7, 11), p(9, 6), p(12, 6)])
                .into_styled(stroke)
                .draw(display)
                .ok();
        }
        Icon::Plus => {
            Line::new(p(6, 1), p(6, 11)).into_styled(stroke).draw(display).ok();
            Line::new(p(1, 6), p(11, 6)).into_styled(stroke).draw(display).ok();
        }
        Icon::Home => {
            Triangle::new(p(6, 1), p(1, 6), p(11, 6)).into_styled(stroke).draw(display).ok();
            Rectangle::with_corners(p(3, 6), p(9, 11)).into_styled(stroke).draw(display).ok();
        }
        Icon::Cpu => {
            Rectangle::with_corners(p(2, 2), p(10, 10)).into_styled(stroke).draw(display).ok();
            Rectangle::with_corners(p(4, 4), p(8, 8)).into_styled(fill).draw(display).ok();
            for f in [4, 8] {
                Line::new(p(f, 0), p(f, 2)).into_styled(stroke).draw(display).ok();
                Line::new(p(f, 10), p(f, 12)).into_styled(stroke).draw(display).ok();
                Line::new(p(0, f), p(2, f)).into_styled(stroke).draw(display).ok();
                Line::new(p(10, f), p(12, f)).into_styled(stroke).draw(display).ok();
            }
        }
        Icon::Signal => {
            for (i, top) in [9, 6, 3, 0].into_iter().enumerate() {
                let x = 1 + 3 * i as i32;
                Rectangle::with_corners(p(x, top), p(x + 1, 12)).into_styled(fill).draw(display).ok();
            }
        }
        Icon::Power => {
            Arc::with_center(c, s as u32 - 2, 300.0_f32.deg(), 300.0_f32.deg())
                .into_styled(stroke)
                .draw(display)
                .ok();
            Line::new(p(6, 0), p(6, 6)).into_styled(stroke).draw(display).ok();
        }
        Icon::ArrowLeft => {
            Line::new(p(1, 6), p(11, 6)).into_styled(stroke).draw(display).ok();
            Line::new(p(1, 6), p(6, 1)).into_styled(stroke).draw(display).ok();
            Line::new(p(1, 6), p(6, 11)).into_styled(stroke).draw(display).ok();
        }
        Icon::Settings => {
            Circle::with_center(c, s as u32 * 2 / 3).into_styled(stroke).draw(display).ok();
            Circle::with_center(c, s as u32 / 4).into_styled(fill).draw(display).ok();
            for (a, b) in [((6, 0), (6, 2)), ((6, 10), (6, 12)), ((0, 6), (2, 6)), ((10, 6), (12, 6))] {
                Line::new(p(a.0, a.1), p(b.0, b.1)).into_styled(stroke).draw(display).ok();
            }
        }
        Icon::Thermometer => {
            Rectangle::with_corners(p(5, 0), p(7, 8)).into_styled(stroke).draw(display).ok();
            Circle::with_center(p(6, 9), s as u32 / 3).into_styled(fill).draw(display).ok();
        }
        Icon::Palette => {
            Circle::with_center(c, s as u32 - 2).into_styled(stroke).draw(display).ok();
            for (fx, fy) in [(4, 4), (8, 4), (4, 8)] {
                Circle::with_center(p(fx, fy), (s as u32 / 6).max(2)).into_styled(fill).draw(display).ok();
            }
        }
        Icon::ScanEye => {
            for (corner, h, v) in [
                ((0, 0), (3, 0), (0, 3)),
                ((12, 0), (9, 0), (12, 3)),
                ((0, 12), (3, 12), (0, 9)),
                ((12, 12), (9, 12), (12, 9)),
            ] {
                Line::new(p(corner.0, corner.1), p(h.0, h.1)).into_styled(stroke).draw(display).ok();
                Line::new(p(corner.0, corner.1), p(v.0, v.1)).into_styled(stroke).draw(display).ok();
            }
            Ellipse::with_center(c, Size::new(s as u32 * 2 / 3, s as u32 / 3))
                .into_styled(stroke)
                .draw(display)
                .ok();
            Circle::with_center(c, (s as u32 / 6).max(2)).into_styled(fill).draw(display).ok();
        }
        Icon::Close => {
            Line::new(p(2, 2), p(10, 10)).into_styled(stroke).draw(display).ok();
            Line::new(p(10, 2), p(2, 10)).into_styled(stroke).draw(display).ok();
        }
    }
}
