//! View identifiers for the panel screens.
//!
//! # Views
//!
//! - [`View::Home`]: welcome card and palette reference
//! - [`View::PairingMenu`]: entry to status and pairing
//! - [`View::PairingStatus`]: room/sensor counts and gateway state
//! - [`View::PairingAdd`]: discovered devices with pair buttons
//! - [`View::ControlRoomList`]: room grid
//! - [`View::ControlRoomDetail`]: one room's temperature, valve and trend
//!
//! The header highlights the button of the active [`ViewGroup`].

/// Available views in the panel application.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Hash)]
pub enum View {
    #[default]
    Home,
    PairingMenu,
    PairingStatus,
    PairingAdd,
    ControlRoomList,
    ControlRoomDetail,
}

/// Header button groups.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ViewGroup {
    Home,
    Pairing,
    Control,
}

impl View {
    /// All views, in menu order.
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::PairingMenu,
        Self::PairingStatus,
        Self::PairingAdd,
        Self::ControlRoomList,
        Self::ControlRoomDetail,
    ];

    /// Group used for header highlighting.
    #[inline]
    pub const fn group(self) -> ViewGroup {
        match self {
            Self::Home => ViewGroup::Home,
            Self::PairingMenu | Self::PairingStatus | Self::PairingAdd => ViewGroup::Pairing,
            Self::ControlRoomList | Self::ControlRoomDetail => ViewGroup::Control,
        }
    }

    /// Fixed header title. The room detail title is the room name and is
    /// supplied by the panel instead.
    #[inline]
    pub const fn title(self) -> Option<&'static str> {
        match self {
            Self::PairingStatus => Some("System Status"),
            Self::PairingAdd => Some("Add Device"),
            Self::ControlRoomList => Some("Select Room"),
            Self::Home | Self::PairingMenu | Self::ControlRoomDetail => None,
        }
    }

    /// Identifier used in log lines.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "HOME",
            Self::PairingMenu => "PAIRING_MENU",
            Self::PairingStatus => "PAIRING_STATUS",
            Self::PairingAdd => "PAIRING_ADD",
            Self::ControlRoomList => "CONTROL_ROOM_LIST",
            Self::ControlRoomDetail => "CONTROL_ROOM_DETAIL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_default() {
        assert_eq!(View::default(), View::Home);
    }

    #[test]
    fn test_view_groups() {
        assert_eq!(View::Home.group(), ViewGroup::Home);
        assert_eq!(View::PairingMenu.group(), ViewGroup::Pairing);
        assert_eq!(View::PairingStatus.group(), ViewGroup::Pairing);
        assert_eq!(View::PairingAdd.group(), ViewGroup::Pairing);
        assert_eq!(View::ControlRoomList.group(), ViewGroup::Control);
        assert_eq!(View::ControlRoomDetail.group(), ViewGroup::Control);
    }

    #[test]
    fn test_view_titles() {
        assert_eq!(View::Home.title(), None);
        assert_eq!(View::PairingStatus.title(), Some("System Status"));
        assert_eq!(View::PairingAdd.title(), Some("Add Device"));
        assert_eq!(View::ControlRoomList.title(), Some("Select Room"));
        assert_eq!(View::ControlRoomDetail.title(), None);
    }

    #[test]
    fn test_view_names_are_unique() {
        for (i, a) in View::ALL.iter().enumerate() {
            for b in &View::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }
}
