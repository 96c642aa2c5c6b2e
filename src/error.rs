//! Move rejection reasons.

use crate::board::Pos;

/// Why a requested move was not applied.
///
/// All variants are routine: a click on a taken cell or after the game ended
/// is normal usage. The engine state is unchanged whenever one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Row or column outside the grid.
    #[display("({row}, {col}) is outside the board")]
    OutOfBounds { row: i32, col: i32 },

    /// Target cell already holds a marker.
    #[display("cell ({}, {}) is already taken", _0.row, _0.col)]
    CellOccupied(#[error(not(source))] Pos),

    /// The game has already been decided.
    #[display("game is already over")]
    GameOver,
}
