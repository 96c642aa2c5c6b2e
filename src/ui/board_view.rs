//! Board rendering and click translation

use crate::{Board, Cell, Player, Pos, Snapshot, BOARD_SIZE, WIN_LENGTH};
use egui::{CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view draws the grid from a snapshot and reports clicked cells
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 48.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the raw `(row, col)` of a click, if any.
    ///
    /// Coordinates are not validated here; clicks in the margin come back
    /// outside the grid and the engine rejects them.
    pub fn show(&mut self, ui: &mut egui::Ui, snapshot: &Snapshot) -> Option<(i32, i32)> {
        let available_size = ui.available_size();

        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_cells(&painter, &snapshot.board);
        self.draw_grid(&painter);

        if let Some(pos) = snapshot.last_move {
            self.draw_last_move_marker(&painter, pos);
        }
        if let Some(line) = snapshot.winning_line {
            self.draw_winning_line(&painter, &line);
        }

        if snapshot.status.is_over() {
            return None;
        }

        let pointer = response.hover_pos()?;
        let (row, col) = self.screen_to_cell(pointer);

        if let Some(pos) = Pos::try_from_coords(row, col) {
            let color = if snapshot.board.is_empty(pos) {
                hover_valid()
            } else {
                hover_invalid()
            };
            painter.rect_filled(self.cell_rect(pos).shrink(2.0), CornerRadius::same(2), color);
        }

        response.clicked().then_some((row, col))
    }

    /// Fill each cell and draw its marker
    fn draw_cells(&self, painter: &Painter, board: &Board) {
        for idx in 0..BOARD_SIZE * BOARD_SIZE {
            let pos = Pos::from_index(idx);
            let rect = self.cell_rect(pos);

            match board.get(pos) {
                Cell::Occupied(player) => {
                    painter.rect_filled(rect, CornerRadius::ZERO, CELL_TAKEN_BG);
                    self.draw_mark(painter, rect, player);
                }
                Cell::Empty => {
                    painter.rect_filled(rect, CornerRadius::ZERO, CELL_BG);
                }
            }
        }
    }

    fn draw_mark(&self, painter: &Painter, rect: Rect, player: Player) {
        let color = match player {
            Player::X => X_MARK,
            Player::O => O_MARK,
        };
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            player.marker(),
            FontId::proportional(self.cell_size * MARK_SIZE_RATIO),
            color,
        );
    }

    /// Draw the cell borders
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = BOARD_SIZE as f32 * self.cell_size;

        for i in 0..=BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let corner = self.cell_rect(pos).right_top() + Vec2::new(-6.0, 6.0);
        painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Outline the winning cells and join their centers
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; WIN_LENGTH]) {
        let stroke = Stroke::new(3.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            let start = self.cell_rect(pair[0]).center();
            let end = self.cell_rect(pair[1]).center();
            painter.line_segment([start, end], stroke);
        }
        for pos in line {
            painter.rect_stroke(
                self.cell_rect(*pos).shrink(1.5),
                CornerRadius::same(2),
                stroke,
                egui::StrokeKind::Inside,
            );
        }
    }

    /// Convert screen coordinates to raw cell coordinates (may be off-grid)
    pub fn screen_to_cell(&self, screen_pos: Pos2) -> (i32, i32) {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;
        (row, col)
    }

    /// Screen rectangle covered by a cell
    pub fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * self.cell_size,
                BOARD_MARGIN + pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }
}
