//! Temperature trend chart.
//!
//! A line chart of a room's history (orange, with sample dots) over a dashed
//! grid, plus the target temperature as a dashed green line. The y-axis
//! spans one degree beyond the lowest and highest sample.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle};
use heapless::String;

use crate::colors::{EMERALD_600, ORANGE_500, ZINC_400, ZINC_600, ZINC_700, paint_or};
use crate::model::{Room, SensorSample};
use crate::styles::{TEXT_XS, TOP_CENTER, TOP_RIGHT};
use crate::widgets::primitives::{dashed_hline, dashed_vline, draw_text};

// =============================================================================
// Chart Layout
// =============================================================================

/// Space for y tick labels.
const MARGIN_LEFT: u32 = 36;
const MARGIN_RIGHT: u32 = 10;
const MARGIN_TOP: u32 = 10;
/// Space for x tick labels.
const MARGIN_BOTTOM: u32 = 18;

/// Horizontal grid lines (and y ticks).
const Y_TICKS: i32 = 5;

/// Dash length of grid and target lines.
const GRID_DASH: i32 = 2;
const TARGET_DASH: i32 = 4;

/// Degrees added above and below the data range.
const DOMAIN_PADDING: f32 = 1.0;

/// Maps sample values and indices to pixels inside the plot area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartScale {
    plot: Rectangle,
    lo: f32,
    hi: f32,
    count: usize,
}

impl ChartScale {
    pub fn new(
        plot: Rectangle,
        samples: &[SensorSample],
    ) -> Self {
        let (lo, hi) = if samples.is_empty() {
            (0.0, 0.0)
        } else {
            samples
                .iter()
                .fold((f32::MAX, f32::MIN), |(lo, hi), s| (lo.min(s.value), hi.max(s.value)))
        };
        Self {
            plot,
            lo: lo - DOMAIN_PADDING,
            hi: hi + DOMAIN_PADDING,
            count: samples.len(),
        }
    }

    /// Plot area for a chart drawn in `area`.
    pub const fn plot_area(area: Rectangle) -> Rectangle {
        Rectangle::new(
            Point::new(area.top_left.x + MARGIN_LEFT as i32, area.top_left.y + MARGIN_TOP as i32),
            Size::new(
                area.size.width.saturating_sub(MARGIN_LEFT + MARGIN_RIGHT),
                area.size.height.saturating_sub(MARGIN_TOP + MARGIN_BOTTOM),
            ),
        )
    }

    /// Lowest and highest value on the y-axis.
    #[inline]
    pub const fn domain(&self) -> (f32, f32) { (self.lo, self.hi) }

    #[inline]
    const fn bottom(&self) -> i32 { self.plot.top_left.y + self.plot.size.height as i32 - 1 }

    #[inline]
    const fn right(&self) -> i32 { self.plot.top_left.x + self.plot.size.width as i32 - 1 }

    /// Pixel row for `value`, clamped to the plot area.
    pub fn y_for(
        &self,
        value: f32,
    ) -> i32 {
        let top = self.plot.top_left.y;
        let range = self.hi - self.lo;
        if range <= 0.0 {
            return top + (self.bottom() - top) / 2;
        }
        let scale = (self.bottom() - top) as f32 / range;
        (self.bottom() - ((value - self.lo) * scale + 0.5) as i32).clamp(top, self.bottom())
    }

    /// Pixel column for the sample at `index`.
    pub fn x_for(
        &self,
        index: usize,
    ) -> i32 {
        let left = self.plot.top_left.x;
        if self.count < 2 {
            return left;
        }
        let step = (self.right() - left) as f32 / (self.count - 1) as f32;
        (left + (index as f32 * step + 0.5) as i32).min(self.right())
    }
}

/// Draw `room`'s history chart into `area`.
pub fn draw_history_chart<D>(
    display: &mut D,
    area: Rectangle,
    room: &Room,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let plot = ChartScale::plot_area(area);
    if plot.size.width < 8 || plot.size.height < 8 {
        return;
    }
    let scale = ChartScale::new(plot, &room.history);
    let (left, top, right, bottom) = (plot.top_left.x, plot.top_left.y, scale.right(), scale.bottom());
    let grid = paint_or(ZINC_700, Rgb565::BLACK);
    let axis = PrimitiveStyle::with_stroke(paint_or(ZINC_600, Rgb565::BLACK), 1);

    // Grid and y ticks
    let (lo, hi) = scale.domain();
    for i in 0..Y_TICKS {
        let value = lo + (hi - lo) * i as f32 / (Y_TICKS - 1) as f32;
        let y = scale.y_for(value);
        dashed_hline(display, left, right, y, GRID_DASH, grid);

        let mut tick: String<8> = String::new();
        write!(tick, "{value:.1}").ok();
        draw_text(display, &tick, Point::new(left - 4, y - 5), TEXT_XS, ZINC_400, TOP_RIGHT);
    }

    // Vertical grid and x ticks
    for (i, sample) in room.history.iter().enumerate() {
        let x = scale.x_for(i);
        dashed_vline(display, x, top, bottom, GRID_DASH, grid);

        let mut tick: String<8> = String::new();
        write!(tick, "{}m", sample.minutes).ok();
        draw_text(display, &tick, Point::new(x, bottom + 5), TEXT_XS, ZINC_400, TOP_CENTER);
    }

    Line::new(Point::new(left, top), Point::new(left, bottom))
        .into_styled(axis)
        .draw(display)
        .ok();
    Line::new(Point::new(left, bottom), Point::new(right, bottom))
        .into_styled(axis)
        .draw(display)
        .ok();

    // Target
    dashed_hline(
        display,
        left,
        right,
        scale.y_for(room.target_temp),
        TARGET_DASH,
        paint_or(EMERALD_600, Rgb565::BLACK),
    );

    // History line with sample dots
    let line_color = paint_or(ORANGE_500, Rgb565::BLACK);
    let line_style = PrimitiveStyle::with_stroke(line_color, 2);
    let dot_style = PrimitiveStyle::with_fill(line_color);
    let points = room
        .history
        .iter()
        .enumerate()
        .map(|(i, s)| Point::new(scale.x_for(i), scale.y_for(s.value)));

    let mut prev: Option<Point> = None;
    for point in points {
        if let Some(prev) = prev {
            Line::new(prev, point).into_styled(line_style).draw(display).ok();
        }
        Circle::with_center(point, 6).into_styled(dot_style).draw(display).ok();
        prev = Some(point);
    }
}
