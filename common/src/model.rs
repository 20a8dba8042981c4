//! Room and device records plus the built-in mock data set.
//!
//! A real backend would supply records of the same shape; the panel only
//! ever mutates `target_temp` and `valve_open`.

use heapless::Vec;

use crate::config::{HISTORY_SAMPLES, MAX_ROOMS};

/// Minutes between history samples.
pub const SAMPLE_INTERVAL_MIN: u16 = 10;

/// One temperature reading in a room's trend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SensorSample {
    /// Minutes since the start of the trend window (`0m`, `10m`, ...).
    pub minutes: u16,
    /// Temperature in °C.
    pub value: f32,
}

/// A heated room.
#[derive(Clone, Debug, PartialEq)]
pub struct Room {
    pub id: &'static str,
    pub name: &'static str,
    pub current_temp: f32,
    pub target_temp: f32,
    pub valve_open: bool,
    pub sensor_count: u8,
    pub history: [SensorSample; HISTORY_SAMPLES],
}

impl Room {
    /// Build a room with a generated trend around its current temperature.
    pub fn new(
        id: &'static str,
        name: &'static str,
        current_temp: f32,
        target_temp: f32,
        valve_open: bool,
        sensor_count: u8,
    ) -> Self {
        Self {
            id,
            name,
            current_temp,
            target_temp,
            valve_open,
            sensor_count,
            history: generate_history(current_temp, seed_for(id)),
        }
    }

    /// Lowest and highest history values.
    pub fn history_range(&self) -> (f32, f32) {
        self.history
            .iter()
            .fold((f32::MAX, f32::MIN), |(lo, hi), s| (lo.min(s.value), hi.max(s.value)))
    }
}

/// Kind of a discoverable device.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceKind {
    Sensor,
    Actuator,
    Gateway,
}

impl DeviceKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sensor => "Sensor",
            Self::Actuator => "Actuator",
            Self::Gateway => "Gateway",
        }
    }
}

/// A device found while scanning for pairing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Device {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: DeviceKind,
    pub mac: &'static str,
}

// =============================================================================
// Mock Data
// =============================================================================

/// Devices shown on the pairing screen.
pub const MOCK_DEVICES: [Device; 4] = [
    Device {
        id: "1",
        name: "Temp Sensor A1",
        kind: DeviceKind::Sensor,
        mac: "AA:BB:CC:01",
    },
    Device {
        id: "2",
        name: "Steam Valve V1",
        kind: DeviceKind::Actuator,
        mac: "AA:BB:CC:02",
    },
    Device {
        id: "3",
        name: "Temp Sensor A2",
        kind: DeviceKind::Sensor,
        mac: "AA:BB:CC:03",
    },
    Device {
        id: "4",
        name: "Main Controller",
        kind: DeviceKind::Gateway,
        mac: "AA:BB:CC:FF",
    },
];

/// Rooms the panel starts with.
pub fn mock_rooms() -> Vec<Room, MAX_ROOMS> {
    let mut rooms = Vec::new();
    for room in [
        Room::new("living_room", "Living Room", 24.5, 25.0, true, 2),
        Room::new("bedroom_master", "Master Bedroom", 21.2, 22.0, false, 1),
        Room::new("kitchen", "Kitchen", 26.8, 24.0, true, 3),
        Room::new("bathroom", "Bathroom", 23.0, 25.0, false, 1),
    ] {
        // MAX_ROOMS leaves headroom for the four mock rooms.
        let _ = rooms.push(room);
    }
    rooms
}

/// Ten samples fluctuating within ±1 °C of `base`.
///
/// Deterministic per seed so every run (and every test) draws the same trend.
pub fn generate_history(
    base: f32,
    seed: u32,
) -> [SensorSample; HISTORY_SAMPLES] {
    let phase = seed as f32 * 0.37;
    core::array::from_fn(|i| {
        let t = i as f32;
        let wobble = micromath::F32(t * 0.9 + phase).sin().0 * 0.7 + micromath::F32(t * 2.3 + phase).cos().0 * 0.3;
        SensorSample {
            minutes: i as u16 * SAMPLE_INTERVAL_MIN,
            value: base + wobble,
        }
    })
}

/// FNV-1a over the id bytes.
fn seed_for(id: &str) -> u32 {
    id.bytes()
        .fold(0x811c_9dc5u32, |hash, b| (hash ^ u32::from(b)).wrapping_mul(0x0100_0193))
        % 1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_rooms() {
        let rooms = mock_rooms();
        assert_eq!(rooms.len(), 4);
        assert_eq!(rooms[0].name, "Living Room");
        assert_eq!(rooms.iter().map(|r| u32::from(r.sensor_count)).sum::<u32>(), 7);
    }

    #[test]
    fn test_mock_devices() {
        assert_eq!(MOCK_DEVICES.len(), 4);
        assert_eq!(MOCK_DEVICES[3].kind, DeviceKind::Gateway);
        assert_eq!(MOCK_DEVICES[3].kind.label(), "Gateway");
    }

    #[test]
    fn test_history_labels() {
        let history = generate_history(20.0, 1);
        let minutes: std::vec::Vec<u16> = history.iter().map(|s| s.minutes).collect();
        assert_eq!(minutes, [0, 10, 20, 30, 40, 50, 60, 70, 80, 90]);
    }

    #[test]
    fn test_history_stays_within_one_degree() {
        for seed in 0..50 {
            for sample in generate_history(24.5, seed) {
                assert!((sample.value - 24.5).abs() <= 1.01, "seed {seed}: {}", sample.value);
            }
        }
    }

    #[test]
    fn test_history_is_deterministic() {
        let a = Room::new("kitchen", "Kitchen", 26.8, 24.0, true, 3);
        let b = Room::new("kitchen", "Kitchen", 26.8, 24.0, true, 3);
        assert_eq!(a.history, b.history);
    }

    #[test]
    fn test_history_range() {
        let room = mock_rooms()[2].clone();
        let (lo, hi) = room.history_range();
        assert!(lo <= hi);
        assert!(room.history.iter().all(|s| s.value >= lo && s.value <= hi));
    }
}
