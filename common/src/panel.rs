//! The panel controller.
//!
//! All UI state lives in one [`Panel`] value owned by the frame loop and
//! handed to the renderer by reference. Every mutation goes through a method
//! here, runs synchronously, and bumps [`Panel::revision`] so the loop knows
//! to redraw.
//!
//! While inspection mode is on, every navigation and data action is a no-op;
//! clicks go to the inspector instead.

use embedded_graphics::prelude::Point;
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;

use crate::config::{CANVAS, MAX_ROOMS, TARGET_TEMP_MAX, TARGET_TEMP_MIN, TARGET_TEMP_STEP};
use crate::inspector::Inspector;
use crate::model::{Device, MOCK_DEVICES, Room, mock_rooms};
use crate::navigation::NavigationHistory;
use crate::scene::{Action, Scene};
use crate::views::View;

/// Result of routing a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Inspection mode: a new record was captured.
    Inspected,
    /// Inspection mode: nothing inspectable under the pointer.
    Missed,
    /// Normal mode: a node action ran (it may still have been a no-op).
    Action(Action),
    /// Normal mode: nothing clickable under the pointer.
    Ignored,
}

/// The whole UI state.
#[derive(Clone, Debug)]
pub struct Panel {
    nav: NavigationHistory,
    rooms: Vec<Room, MAX_ROOMS>,
    devices: &'static [Device],
    selected_room: Option<usize>,
    inspector: Inspector,
    revision: u32,
}

impl Panel {
    /// Panel with the built-in mock rooms and devices, on the home view.
    pub fn new() -> Self { Self::with_data(mock_rooms(), &MOCK_DEVICES) }

    pub fn with_data(
        rooms: Vec<Room, MAX_ROOMS>,
        devices: &'static [Device],
    ) -> Self {
        Self {
            nav: NavigationHistory::default(),
            rooms,
            devices,
            selected_room: None,
            inspector: Inspector::new(),
            revision: 0,
        }
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    #[inline]
    pub const fn view(&self) -> View { self.nav.current() }

    #[inline]
    pub const fn history(&self) -> &NavigationHistory { &self.nav }

    #[inline]
    pub fn rooms(&self) -> &[Room] { &self.rooms }

    #[inline]
    pub const fn devices(&self) -> &'static [Device] { self.devices }

    #[inline]
    pub const fn selected_room(&self) -> Option<usize> { self.selected_room }

    /// The selected room, if any.
    pub fn active_room(&self) -> Option<&Room> { self.selected_room.and_then(|i| self.rooms.get(i)) }

    #[inline]
    pub const fn inspector(&self) -> &Inspector { &self.inspector }

    #[inline]
    pub const fn is_inspecting(&self) -> bool { self.inspector.is_enabled() }

    /// Incremented on every state change.
    #[inline]
    pub const fn revision(&self) -> u32 { self.revision }

    /// Header title for the current view.
    pub fn title(&self) -> Option<&str> {
        match self.view() {
            View::ControlRoomDetail => self.active_room().map(|r| r.name),
            view => view.title(),
        }
    }

    #[inline]
    pub fn room_count(&self) -> usize { self.rooms.len() }

    /// Sensors across all rooms.
    pub fn sensor_total(&self) -> u32 { self.rooms.iter().map(|r| u32::from(r.sensor_count)).sum() }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Switch views. No-op when inspecting or already there.
    pub fn navigate_to(
        &mut self,
        view: View,
    ) -> bool {
        if self.is_inspecting() {
            return false;
        }
        let from = self.view();
        if !self.nav.navigate_to(view) {
            return false;
        }
        log::info!("navigate {} -> {}", from.as_str(), view.as_str());
        self.touch();
        true
    }

    /// Return to the previous view. No-op when inspecting or at the root.
    ///
    /// Leaving the room detail view clears the room selection, so older
    /// detail entries further down the history are skipped: without a
    /// selection they would show an empty view.
    pub fn go_back(&mut self) -> bool {
        if self.is_inspecting() {
            return false;
        }
        let Some(left) = self.nav.go_back() else {
            return false;
        };
        if left == View::ControlRoomDetail {
            self.selected_room = None;
        }
        while self.view() == View::ControlRoomDetail && self.selected_room.is_none() {
            if self.nav.go_back().is_none() {
                break;
            }
        }
        log::info!("back {} -> {}", left.as_str(), self.view().as_str());
        self.touch();
        true
    }

    // -------------------------------------------------------------------------
    // Room Actions
    // -------------------------------------------------------------------------

    /// Select a room and open its detail view.
    pub fn select_room(
        &mut self,
        index: usize,
    ) -> bool {
        if self.is_inspecting() || index >= self.rooms.len() {
            return false;
        }
        self.selected_room = Some(index);
        self.touch();
        self.navigate_to(View::ControlRoomDetail);
        true
    }

    /// Open or close a room's valve.
    pub fn toggle_valve(
        &mut self,
        index: usize,
    ) -> bool {
        if self.is_inspecting() {
            return false;
        }
        let Some(room) = self.rooms.get_mut(index) else {
            return false;
        };
        room.valve_open = !room.valve_open;
        log::info!("valve {} {}", room.id, if room.valve_open { "OPEN" } else { "CLOSED" });
        self.touch();
        true
    }

    /// Set a room's target temperature, clamped to the slider range and
    /// snapped to its step. Returns `true` if the stored value changed.
    pub fn set_target_temp(
        &mut self,
        index: usize,
        value: f32,
    ) -> bool {
        if self.is_inspecting() {
            return false;
        }
        let Some(room) = self.rooms.get_mut(index) else {
            return false;
        };
        let snapped = snap_target_temp(value);
        #[allow(clippy::float_cmp)] // both sides are exact multiples of the step
        if room.target_temp == snapped {
            return false;
        }
        room.target_temp = snapped;
        log::info!("target {} {snapped:.1}C", room.id);
        self.touch();
        true
    }

    /// Pairing is not implemented on the preview; the request is only logged.
    pub fn pair(
        &mut self,
        index: usize,
    ) -> bool {
        if self.is_inspecting() {
            return false;
        }
        match self.devices.get(index) {
            Some(device) => {
                log::info!("pair requested for {} ({})", device.name, device.mac);
                true
            }
            None => false,
        }
    }

    // -------------------------------------------------------------------------
    // Inspector
    // -------------------------------------------------------------------------

    /// Flip inspection mode; turning it off discards the record.
    pub fn toggle_inspect(&mut self) -> bool {
        let enabled = self.inspector.toggle();
        log::info!("inspector {}", if enabled { "ON" } else { "OFF" });
        self.touch();
        enabled
    }

    /// Drop the inspection record.
    pub fn clear_inspection(&mut self) {
        if self.inspector.record().is_some() {
            self.inspector.clear();
            self.touch();
        }
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Route a click on the canvas.
    ///
    /// `scene` must be the scene recorded by the last render of this panel.
    pub fn click(
        &mut self,
        point: Point,
        scene: &Scene,
    ) -> ClickOutcome {
        if self.is_inspecting() {
            return if self.inspector.inspect(scene, CANVAS, point) {
                self.touch();
                ClickOutcome::Inspected
            } else {
                ClickOutcome::Missed
            };
        }

        let Some((id, action)) = scene.action_at(point) else {
            return ClickOutcome::Ignored;
        };
        match action {
            Action::Navigate(view) => {
                self.navigate_to(view);
            }
            Action::Back => {
                self.go_back();
            }
            Action::SelectRoom(index) => {
                self.select_room(index);
            }
            Action::ToggleValve(index) => {
                self.toggle_valve(index);
            }
            Action::SetTargetTemp(index) => {
                if let Some(node) = scene.get(id) {
                    self.set_target_temp(index, slider_value(node.bounds, point));
                }
            }
            Action::Pair(index) => {
                self.pair(index);
            }
        }
        ClickOutcome::Action(action)
    }

    fn touch(&mut self) { self.revision = self.revision.wrapping_add(1); }
}

impl Default for Panel {
    fn default() -> Self { Self::new() }
}

/// Clamp to the target range and snap to the nearest step.
pub fn snap_target_temp(value: f32) -> f32 {
    if value.is_nan() {
        return TARGET_TEMP_MIN;
    }
    let clamped = value.clamp(TARGET_TEMP_MIN, TARGET_TEMP_MAX);
    let steps = ((clamped - TARGET_TEMP_MIN) / TARGET_TEMP_STEP + 0.5) as u32;
    TARGET_TEMP_MIN + steps as f32 * TARGET_TEMP_STEP
}

/// Value selected by clicking `point` on a horizontal slider spanning `track`.
pub fn slider_value(
    track: Rectangle,
    point: Point,
) -> f32 {
    let span = track.size.width.saturating_sub(1).max(1) as f32;
    let fraction = ((point.x - track.top_left.x) as f32 / span).clamp(0.0, 1.0);
    snap_target_temp(TARGET_TEMP_MIN + fraction * (TARGET_TEMP_MAX - TARGET_TEMP_MIN))
}

/// Slider thumb position for `value` along `track`.
pub fn slider_position(
    track: Rectangle,
    value: f32,
) -> i32 {
    let span = track.size.width.saturating_sub(1) as f32;
    let fraction = ((value - TARGET_TEMP_MIN) / (TARGET_TEMP_MAX - TARGET_TEMP_MIN)).clamp(0.0, 1.0);
    track.top_left.x + (fraction * span + 0.5) as i32
}

#[cfg(test)]
mod tests {
    use embedded_graphics::prelude::Size;

    use super::*;
    use crate::scene::Node;

    fn rect(
        x: i32,
        y: i32,
        w: u32,
        h: u32,
    ) -> Rectangle {
        Rectangle::new(Point::new(x, y), Size::new(w, h))
    }

    #[test]
    fn test_new_panel() {
        let panel = Panel::new();
        assert_eq!(panel.view(), View::Home);
        assert_eq!(panel.room_count(), 4);
        assert_eq!(panel.sensor_total(), 7);
        assert_eq!(panel.devices().len(), 4);
        assert!(panel.active_room().is_none());
        assert!(!panel.is_inspecting());
        assert_eq!(panel.title(), None);
    }

    #[test]
    fn test_navigate_then_back() {
        let mut panel = Panel::new();
        assert!(panel.navigate_to(View::PairingMenu));
        assert!(panel.navigate_to(View::PairingStatus));
        assert!(panel.go_back());
        assert_eq!(panel.view(), View::PairingMenu);
    }

    #[test]
    fn test_navigate_to_current_is_noop() {
        let mut panel = Panel::new();
        panel.navigate_to(View::ControlRoomList);
        let revision = panel.revision();
        let depth = panel.history().depth();

        assert!(!panel.navigate_to(View::ControlRoomList));
        assert_eq!(panel.history().depth(), depth);
        assert_eq!(panel.revision(), revision);
    }

    #[test]
    fn test_back_on_empty_history_is_noop() {
        let mut panel = Panel::new();
        let revision = panel.revision();
        assert!(!panel.go_back());
        assert_eq!(panel.view(), View::Home);
        assert_eq!(panel.revision(), revision);
    }

    #[test]
    fn test_select_room_and_back_clears_selection() {
        let mut panel = Panel::new();
        panel.navigate_to(View::ControlRoomList);
        assert!(panel.select_room(2));
        assert_eq!(panel.view(), View::ControlRoomDetail);
        assert_eq!(panel.title(), Some("Kitchen"));

        assert!(panel.go_back());
        assert_eq!(panel.view(), View::ControlRoomList);
        assert_eq!(panel.selected_room(), None);
        assert_eq!(panel.title(), Some("Select Room"));
    }

    #[test]
    fn test_select_room_on_detail_updates_selection() {
        let mut panel = Panel::new();
        panel.navigate_to(View::ControlRoomList);
        panel.select_room(0);
        let depth = panel.history().depth();

        assert!(panel.select_room(2));
        assert_eq!(panel.view(), View::ControlRoomDetail);
        assert_eq!(panel.history().depth(), depth);
        assert_eq!(panel.selected_room(), Some(2));
        assert_eq!(panel.title(), Some("Kitchen"));
    }

    #[test]
    fn test_back_skips_detail_without_selection() {
        let mut panel = Panel::new();
        panel.navigate_to(View::ControlRoomList);
        panel.select_room(0);
        panel.navigate_to(View::PairingMenu);
        panel.navigate_to(View::ControlRoomList);
        panel.select_room(2);

        assert!(panel.go_back());
        assert_eq!(panel.view(), View::ControlRoomList);
        assert!(panel.go_back());
        assert_eq!(panel.view(), View::PairingMenu);

        // The first detail entry lost its selection; land on the list below it.
        assert!(panel.go_back());
        assert_eq!(panel.view(), View::ControlRoomList);
        assert_eq!(panel.selected_room(), None);
        assert_eq!(panel.history().depth(), 1);
    }

    #[test]
    fn test_select_room_out_of_range() {
        let mut panel = Panel::new();
        assert!(!panel.select_room(42));
        assert_eq!(panel.view(), View::Home);
    }

    #[test]
    fn test_toggle_valve() {
        let mut panel = Panel::new();
        assert!(panel.rooms()[1].valve_open.eq(&false));
        assert!(panel.toggle_valve(1));
        assert!(panel.rooms()[1].valve_open);
        assert!(!panel.toggle_valve(9));
    }

    #[test]
    fn test_set_target_temp_snaps_and_clamps() {
        let mut panel = Panel::new();
        assert!(panel.set_target_temp(0, 21.3));
        assert!((panel.rooms()[0].target_temp - 21.5).abs() < f32::EPSILON);
        assert!(panel.set_target_temp(0, 99.0));
        assert!((panel.rooms()[0].target_temp - TARGET_TEMP_MAX).abs() < f32::EPSILON);
        assert!(!panel.set_target_temp(0, 40.0), "already at the maximum");
        assert!(panel.set_target_temp(0, -5.0));
        assert!((panel.rooms()[0].target_temp - TARGET_TEMP_MIN).abs() < f32::EPSILON);
    }

    #[test]
    fn test_inspect_mode_suspends_actions() {
        let mut panel = Panel::new();
        panel.toggle_inspect();

        assert!(!panel.navigate_to(View::PairingMenu));
        assert!(!panel.go_back());
        assert!(!panel.select_room(0));
        assert!(!panel.toggle_valve(0));
        assert!(!panel.set_target_temp(0, 20.0));
        assert!(!panel.pair(0));
        assert_eq!(panel.view(), View::Home);

        panel.toggle_inspect();
        assert!(panel.navigate_to(View::PairingMenu));
    }

    #[test]
    fn test_click_routes_actions() {
        let mut panel = Panel::new();
        let mut scene = Scene::new();
        scene.push(
            Node::button(rect(0, 0, 100, 40))
                .named("NavButton:Control")
                .action(Action::Navigate(View::ControlRoomList)),
        );

        assert_eq!(
            panel.click(Point::new(10, 10), &scene),
            ClickOutcome::Action(Action::Navigate(View::ControlRoomList))
        );
        assert_eq!(panel.view(), View::ControlRoomList);
        assert_eq!(panel.click(Point::new(500, 300), &scene), ClickOutcome::Ignored);
    }

    #[test]
    fn test_click_is_captured_while_inspecting() {
        let mut panel = Panel::new();
        let mut scene = Scene::new();
        scene.push(
            Node::button(rect(0, 0, 100, 40))
                .named("NavButton:Control")
                .action(Action::Navigate(View::ControlRoomList)),
        );
        panel.toggle_inspect();

        assert_eq!(panel.click(Point::new(10, 10), &scene), ClickOutcome::Inspected);
        assert_eq!(panel.view(), View::Home);
        let record = panel.inspector().record().unwrap();
        assert_eq!(record.component.as_str(), "NavButton:Control");

        assert_eq!(panel.click(Point::new(500, 300), &scene), ClickOutcome::Missed);
        assert!(panel.inspector().record().is_some());

        panel.toggle_inspect();
        assert!(panel.inspector().record().is_none());
    }

    #[test]
    fn test_click_slider_sets_target() {
        let mut panel = Panel::new();
        let mut scene = Scene::new();
        let track = rect(100, 300, 161, 8);
        scene.push(
            Node::new(crate::scene::NodeKind::Slider, track).action(Action::SetTargetTemp(0)),
        );
        // Halfway along the track: 16 + 0.5 * 16 = 24.
        panel.click(Point::new(180, 304), &scene);
        assert!((panel.rooms()[0].target_temp - 24.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_clear_inspection() {
        let mut panel = Panel::new();
        let mut scene = Scene::new();
        scene.push(Node::button(rect(0, 0, 100, 40)));
        panel.toggle_inspect();
        panel.click(Point::new(5, 5), &scene);
        panel.clear_inspection();
        assert!(panel.is_inspecting());
        assert!(panel.inspector().record().is_none());
    }

    #[test]
    fn test_slider_geometry() {
        let track = rect(0, 0, 33, 4);
        assert!((slider_value(track, Point::new(0, 0)) - TARGET_TEMP_MIN).abs() < f32::EPSILON);
        assert!((slider_value(track, Point::new(32, 0)) - TARGET_TEMP_MAX).abs() < f32::EPSILON);
        assert!((slider_value(track, Point::new(-50, 0)) - TARGET_TEMP_MIN).abs() < f32::EPSILON);
        assert_eq!(slider_position(track, TARGET_TEMP_MIN), 0);
        assert_eq!(slider_position(track, TARGET_TEMP_MAX), 32);
        assert_eq!(slider_position(track, 24.0), 16);
    }

    #[test]
    fn test_snap_target_temp() {
        assert!((snap_target_temp(22.74) - 22.5).abs() < f32::EPSILON);
        assert!((snap_target_temp(22.76) - 23.0).abs() < f32::EPSILON);
        assert!((snap_target_temp(f32::NAN) - TARGET_TEMP_MIN).abs() < f32::EPSILON);
    }
}
