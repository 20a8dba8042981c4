//! Content views drawn below the header.

pub mod home;
pub mod pairing;
pub mod rooms;

pub use home::draw_home;
pub use pairing::{draw_pairing_add, draw_pairing_menu, draw_pairing_status};
pub use rooms::{draw_room_detail, draw_room_list};
