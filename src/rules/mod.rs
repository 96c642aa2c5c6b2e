//! Game rules for five-in-a-row
//!
//! The only rule with logic behind it is the win condition; occupancy and
//! bounds checks live with the engine.

pub mod win;

pub use win::{count_direction, find_winning_line, has_five_at_pos, DIRECTIONS};
