//! HVAC Panel Simulator for Windows/Desktop.
//!
//! Renders the 800x480 panel next to the inspector console using the
//! embedded-graphics-simulator crate.
//!
//! # Controls
//!
//! | Input            | Action                         |
//! |------------------|--------------------------------|
//! | Left click       | Press / inspect panel element  |
//! | `I`              | Toggle the inspector           |
//! | `Esc`            | Clear the inspection record    |
//! | `Backspace`      | Navigate back                  |

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod cli;
mod input;
mod timing;

use std::thread;
use std::time::Instant;

use anyhow::anyhow;
use clap::Parser;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::{Keycode, MouseButton};
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use hvac_panel_common::config::{WINDOW_HEIGHT, WINDOW_WIDTH};
use hvac_panel_common::{ClickOutcome, Panel, RenderState, Scene, draw_frame};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::input::{Target, route};
use crate::timing::FRAME_TIME;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log)?;

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(WINDOW_WIDTH, WINDOW_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(args.scale).build();
    let mut window = Window::new("HVAC Panel Preview", &output_settings);

    let mut panel = Panel::new();
    if args.inspect {
        panel.toggle_inspect();
    }
    let mut scene = Scene::new();
    let mut render_state = RenderState::new();

    info!(
        width = WINDOW_WIDTH,
        height = WINDOW_HEIGHT,
        scale = args.scale,
        rooms = panel.room_count(),
        "simulator started"
    );
    redraw(&panel, &mut display, &mut scene, &mut render_state);
    window.update(&display);

    loop {
        let frame_start = Instant::now();

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => {
                    info!("window closed");
                    return Ok(());
                }
                SimulatorEvent::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    point,
                } => handle_click(&mut panel, &scene, point),
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::I => {
                            panel.toggle_inspect();
                        }
                        Keycode::Escape => panel.clear_inspection(),
                        Keycode::Backspace => {
                            panel.go_back();
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
            // Later events in the same batch must hit the updated layout.
            redraw(&panel, &mut display, &mut scene, &mut render_state);
        }

        window.update(&display);

        let elapsed = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
    }
}

fn init_tracing(default_filter: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!(e))
}

fn handle_click(
    panel: &mut Panel,
    scene: &Scene,
    point: Point,
) {
    match route(point) {
        Some(Target::Canvas(point)) => match panel.click(point, scene) {
            ClickOutcome::Inspected => {
                if let Some(record) = panel.inspector().record() {
                    debug!(
                        tag = record.tag,
                        component = record.component.as_str(),
                        x = record.bounds.x,
                        y = record.bounds.y,
                        "inspected"
                    );
                }
            }
            ClickOutcome::Missed => debug!(x = point.x, y = point.y, "nothing to inspect"),
            ClickOutcome::Action(action) => debug!(?action, "action"),
            ClickOutcome::Ignored => {}
        },
        Some(Target::ClearRecord) => panel.clear_inspection(),
        Some(Target::ToggleInspect) => {
            panel.toggle_inspect();
        }
        None => {}
    }
}

/// Draw a new frame if the panel changed since the last one.
fn redraw(
    panel: &Panel,
    display: &mut SimulatorDisplay<Rgb565>,
    scene: &mut Scene,
    render_state: &mut RenderState,
) {
    let revision = panel.revision();
    if !render_state.needs_redraw(revision) {
        return;
    }
    let start = Instant::now();
    draw_frame(panel, display, scene);
    render_state.mark_drawn(revision);
    debug!(revision, nodes = scene.len(), elapsed_us = start.elapsed().as_micros() as u64, "frame drawn");
}
