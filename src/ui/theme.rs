//! Theme constants for the GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(222, 184, 135);
pub const CELL_BG: Color32 = Color32::from_rgb(236, 206, 160);
pub const CELL_TAKEN_BG: Color32 = Color32::from_rgb(210, 172, 124);
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 40, 20);

// Markers
pub const X_MARK: Color32 = Color32::from_rgb(40, 70, 160);
pub const O_MARK: Color32 = Color32::from_rgb(170, 40, 40);
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Translucent hover overlays
pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 60)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 80)
}

// Panel colors
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);
pub const STATUS_ACTIVE: Color32 = Color32::from_rgb(80, 200, 120);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const MARK_SIZE_RATIO: f32 = 0.7;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
