//! Five-in-a-row on a 10x10 board
//!
//! Two players take turns placing `X` and `O`; the first to line up five
//! markers horizontally, vertically or diagonally wins. The second seat can
//! be a human or a uniform-random opponent.
//!
//! # Architecture
//!
//! - [`board`]: Cells, positions and the flat board
//! - [`rules`]: Win detection from the last placed cell
//! - [`opponent`]: Seeded random move picker
//! - [`engine`]: Session state, move validation and turn flow
//! - [`ui`]: egui front end that forwards clicks to the engine
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameConfig, GameEngine, Mode, Player};
//!
//! let config = GameConfig::new(Mode::HumanVsAi).with_seed(7);
//! let mut engine = GameEngine::with_config(&config);
//!
//! // The opponent has already opened; it answers every human move inline
//! let opening = engine.snapshot().last_move.unwrap();
//! let (row, col) = if opening.row == 0 { (1, 0) } else { (0, 0) };
//! let outcome = engine.apply_move(row, col).unwrap();
//! assert_eq!(outcome.placements.len(), 2);
//! assert_eq!(engine.turn(), Player::X);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod opponent;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, BOARD_SIZE, WIN_LENGTH};
pub use config::GameConfig;
pub use engine::{GameEngine, GameStatus, Mode, MoveOutcome, Placement, Snapshot};
pub use error::MoveError;
pub use opponent::RandomOpponent;
