//! Developer inspector: click an element, read back its geometry and colors.
//!
//! # Matching heuristic
//!
//! [`locate`] takes the last-painted node whose bounds contain the click, then
//! walks up its parents until it reaches an inspectable node: a button, a
//! slider, or a container that carries a component name. Labels and icons are
//! never selected on their own; clicking one selects the control or panel
//! around it. Clicks that reach no inspectable node produce nothing.
//!
//! # Record lifetime
//!
//! A record is replaced (not merged) by the next successful click, kept as-is
//! when a click misses, and dropped when inspection is switched off or
//! cleared.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use heapless::String;

use crate::config::{COMPONENT_NAME_LEN, TEXT_EXCERPT_LEN};
use crate::resolver::{ColorCode, ResolvedColor, resolve};
use crate::scene::{Node, Scene};
use crate::symbols::LvSymbol;

/// Pixel rectangle relative to the canvas origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    /// `rect` expressed relative to `origin`.
    pub fn relative_to(
        rect: Rectangle,
        origin: Point,
    ) -> Self {
        let top_left = rect.top_left - origin;
        Self {
            x: top_left.x,
            y: top_left.y,
            width: rect.size.width,
            height: rect.size.height,
        }
    }

    /// Back to an absolute rectangle given the canvas origin.
    pub fn to_rectangle(
        self,
        origin: Point,
    ) -> Rectangle {
        Rectangle::new(origin + Point::new(self.x, self.y), Size::new(self.width, self.height))
    }
}

/// Snapshot of one inspected element.
#[derive(Clone, Debug, PartialEq)]
pub struct InspectionRecord {
    /// `button`, `div`, `input`.
    pub tag: &'static str,
    pub component: String<COMPONENT_NAME_LEN>,
    pub bounds: Bounds,
    pub background: ResolvedColor,
    pub foreground: ResolvedColor,
    /// Text of the element and its children, newlines flattened.
    pub text: String<TEXT_EXCERPT_LEN>,
    pub symbol: Option<LvSymbol>,
}

impl InspectionRecord {
    #[inline]
    pub fn background_code(&self) -> ColorCode { self.background.code() }

    #[inline]
    pub fn foreground_code(&self) -> ColorCode { self.foreground.code() }
}

/// Build an inspection record for the element under `point`.
///
/// `canvas` is where the virtual display sits on the render target; points
/// outside it never match and bounds are reported relative to its origin.
pub fn locate(
    scene: &Scene,
    canvas: Rectangle,
    point: Point,
) -> Option<InspectionRecord> {
    if !canvas.contains(point) {
        return None;
    }

    let top = scene.topmost_at(point)?;
    let id = scene
        .ancestors(top)
        .find(|&i| scene.get(i).is_some_and(Node::is_inspectable))?;
    let node = scene.get(id)?;

    Some(InspectionRecord {
        tag: node.kind.tag(),
        component: node.component.clone(),
        bounds: Bounds::relative_to(node.bounds, canvas.top_left),
        background: resolve(node.background),
        foreground: resolve(node.foreground),
        text: scene.text_within(id),
        symbol: scene.symbol_within(id),
    })
}

/// Inspection mode and the current record.
#[derive(Clone, Debug, Default)]
pub struct Inspector {
    enabled: bool,
    record: Option<InspectionRecord>,
}

impl Inspector {
    pub const fn new() -> Self {
        Self {
            enabled: false,
            record: None,
        }
    }

    #[inline]
    pub const fn is_enabled(&self) -> bool { self.enabled }

    #[inline]
    pub const fn record(&self) -> Option<&InspectionRecord> { self.record.as_ref() }

    /// Flip inspection mode. Switching off discards the record.
    /// Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.set_enabled(!self.enabled);
        self.enabled
    }

    pub fn set_enabled(
        &mut self,
        enabled: bool,
    ) {
        self.enabled = enabled;
        if !enabled {
            self.record = None;
        }
    }

    /// Drop the current record, staying in inspection mode.
    pub fn clear(&mut self) { self.record = None; }

    /// Inspect the element under `point`.
    ///
    /// Returns `true` if a new record replaced the old one. Misses and
    /// clicks while disabled leave the record untouched.
    pub fn inspect(
        &mut self,
        scene: &Scene,
        canvas: Rectangle,
        point: Point,
    ) -> bool {
        if !self.enabled {
            return false;
        }
        match locate(scene, canvas, point) {
            Some(record) => {
                log::info!(
                    "inspect {} {:?} at ({}, {}) {}x{} bg {} fg {}",
                    record.tag,
                    record.component.as_str(),
                    record.bounds.x,
                    record.bounds.y,
                    record.bounds.width,
                    record.bounds.height,
                    record.background_code(),
                    record.foreground_code(),
                );
                self.record = Some(record);
                true
            }
            None => {
                log::debug!("inspect miss at ({}, {})", point.x, point.y);
                false
            }
        }
    }
}
