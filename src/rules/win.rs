//! Five-in-a-row detection
//!
//! A win is checked only from the cell that was just placed: for each of the
//! four axes the contiguous run through that cell is counted in both
//! directions. Runs longer than five also win.

use crate::board::{Board, Cell, Player, Pos, WIN_LENGTH};
use tracing::trace;

/// Direction vectors for line checking (4 axes)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal down
    (1, -1), // Diagonal up
];

/// Walk from `pos` (exclusive) along `(dr, dc)` while cells belong to `player`.
fn extent(board: &Board, pos: Pos, player: Player, dr: i32, dc: i32) -> usize {
    let mut count = 0;
    let mut r = pos.row as i32 + dr;
    let mut c = pos.col as i32 + dc;
    while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == Cell::Occupied(player) {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// Length of the run through `pos` along one axis, including `pos` itself.
#[inline]
pub fn count_direction(board: &Board, pos: Pos, player: Player, (dr, dc): (i32, i32)) -> usize {
    1 + extent(board, pos, player, dr, dc) + extent(board, pos, player, -dr, -dc)
}

/// Check whether the marker at `pos` completes a run of `WIN_LENGTH` or more.
pub fn has_five_at_pos(board: &Board, pos: Pos, player: Player) -> bool {
    DIRECTIONS.iter().any(|&dir| {
        let count = count_direction(board, pos, player, dir);
        trace!(?pos, ?dir, count, "axis run");
        count >= WIN_LENGTH
    })
}

/// Find the winning run through `pos`, if any.
///
/// Returns the first `WIN_LENGTH` positions of the run, ordered from the
/// negative end of the axis.
pub fn find_winning_line(board: &Board, pos: Pos, player: Player) -> Option<[Pos; WIN_LENGTH]> {
    for &(dr, dc) in &DIRECTIONS {
        if count_direction(board, pos, player, (dr, dc)) < WIN_LENGTH {
            continue;
        }

        let back = extent(board, pos, player, -dr, -dc) as i32;
        let start_r = pos.row as i32 - dr * back;
        let start_c = pos.col as i32 - dc * back;

        let mut line = [pos; WIN_LENGTH];
        for (i, slot) in line.iter_mut().enumerate() {
            let r = start_r + dr * i as i32;
            let c = start_c + dc * i as i32;
            *slot = Pos::new(r as u8, c as u8);
        }
        return Some(line);
    }
    None
}
