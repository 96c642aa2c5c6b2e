//! GUI module for the game
//!
//! A thin egui/eframe adapter: it renders engine snapshots and forwards
//! clicks as `(row, col)` coordinates.

mod app;
mod board_view;
mod theme;

pub use app::GomokuApp;
