//! Main application for the GUI
//!
//! Holds no game state of its own beyond a cached [`Snapshot`]; every click
//! and new-game request goes through the [`GameEngine`].

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};
use tracing::debug;

use super::board_view::BoardView;
use super::theme::*;
use crate::{GameConfig, GameEngine, GameStatus, Mode, Snapshot};

/// Five-in-a-row application
pub struct GomokuApp {
    engine: GameEngine,
    snapshot: Snapshot,
    board_view: BoardView,
}

impl GomokuApp {
    /// Create the app and start the first game from `config`
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        let engine = GameEngine::with_config(&config);
        let snapshot = engine.snapshot();
        Self {
            engine,
            snapshot,
            board_view: BoardView::default(),
        }
    }

    fn new_game(&mut self, mode: Mode) {
        self.snapshot = self.engine.initialize(mode);
    }

    fn reset(&mut self) {
        self.snapshot = self.engine.reset();
    }

    /// Forward a click to the engine; rejected clicks are ignored
    fn handle_click(&mut self, row: i32, col: i32) {
        match self.engine.apply_move(row, col) {
            Ok(outcome) => {
                debug!(placed = outcome.placements.len(), status = ?outcome.status, "move applied");
                self.snapshot = self.engine.snapshot();
            }
            Err(err) => debug!(%err, "click ignored"),
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (PvP)").clicked() {
                        self.new_game(Mode::HumanVsHuman);
                        ui.close_menu();
                    }
                    if ui.button("New Game (vs AI)").clicked() {
                        self.new_game(Mode::HumanVsAi);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Reset (N)").clicked() {
                        self.reset();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(mode_label(self.snapshot.mode));
                });
            });
        });
    }

    /// Render the side panel with status and actions
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.label(RichText::new("FIVE IN A ROW").size(20.0).strong().color(TEXT_PRIMARY));
                });
                ui.add_space(12.0);

                self.render_status_card(ui);
                ui.add_space(10.0);
                self.render_actions_card(ui);
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_status_card(&self, ui: &mut egui::Ui) {
        let color = match self.snapshot.status {
            GameStatus::InProgress => STATUS_ACTIVE,
            GameStatus::Won(_) => WIN_HIGHLIGHT,
            GameStatus::Draw => TEXT_SECONDARY,
        };

        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("STATUS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.label(RichText::new(self.snapshot.status_text()).size(18.0).strong().color(color));
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Move #{}", self.snapshot.move_count))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            if ui.button("New Game").clicked() {
                self.reset();
            }
            ui.horizontal(|ui| {
                if ui.button("PvP").clicked() {
                    self.new_game(Mode::HumanVsHuman);
                }
                if ui.button("vs AI").clicked() {
                    self.new_game(Mode::HumanVsAi);
                }
            });
        });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            if let Some((row, col)) = self.board_view.show(ui, &self.snapshot) {
                self.handle_click(row, col);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.reset();
        }
    }
}

fn mode_label(mode: Mode) -> &'static str {
    match mode {
        Mode::HumanVsHuman => "PvP - Hotseat",
        Mode::HumanVsAi => "PvE - You: X",
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
