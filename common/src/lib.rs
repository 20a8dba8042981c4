//! Shared code for the HVAC touch-panel preview.
//!
//! This crate contains everything that does not depend on a window system:
//!
//! - [`rgb565`]: RGB888 → RGB565 packing and formatting
//! - [`resolver`]: Style string → color resolution
//! - [`colors`]: Panel palette as style strings, plus fixed preview colors
//! - [`config`]: Layout and display configuration constants
//! - [`views`] / [`navigation`]: Views and the back-navigation history
//! - [`model`]: Rooms, sensor history and discovered devices
//! - [`scene`]: Drawn elements recorded for hit testing
//! - [`inspector`]: Element lookup and inspection records
//! - [`panel`]: Panel state and click handling
//! - [`render`]: Frame composition and redraw tracking
//! - [`screens`] / [`widgets`]: Drawing code
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` compatible. Fixed-capacity `heapless` collections
//! are used throughout, so the panel can also be driven on a real 800x480
//! target with an RGB565 display driver.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod inspector;
pub mod model;
pub mod named_colors;
pub mod navigation;
pub mod panel;
pub mod render;
pub mod resolver;
pub mod rgb565;
pub mod scene;
pub mod screens;
pub mod styles;
pub mod symbols;
pub mod views;
pub mod widgets;

#[cfg(test)]
mod testing;

// Re-export commonly used items
pub use config::*;
pub use inspector::{Bounds, InspectionRecord, Inspector, locate};
pub use navigation::NavigationHistory;
pub use panel::{ClickOutcome, Panel};
pub use render::{RenderState, draw_frame, draw_panel};
pub use resolver::{ColorCode, ResolvedColor, resolve};
pub use rgb565::Rgb565Code;
pub use scene::{Action, Scene};
pub use views::View;
