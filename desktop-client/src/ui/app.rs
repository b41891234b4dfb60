use std::time::Instant;

use eframe::egui;
use tictactoe_common::tictactoe::GameStatus;

use super::board_view::BoardView;
use crate::controller::GameController;

const OVERLAY_COLOR: egui::Color32 = egui::Color32::from_rgba_premultiplied(0, 0, 0, 150);

pub struct TicTacToeApp {
    controller: GameController,
}

impl TicTacToeApp {
    pub fn new(controller: GameController) -> Self {
        Self { controller }
    }

    fn render_header(&mut self, ui: &mut egui::Ui) {
        let scoreboard = self.controller.state().scoreboard();
        ui.horizontal(|ui| {
            ui.heading(self.controller.status_text());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Restart (R)").clicked() {
                    self.controller.restart();
                }
            });
        });
        ui.label(format!(
            "You {} : {} Computer ({} draws)   Bot: {:?}",
            scoreboard.human_wins,
            scoreboard.computer_wins,
            scoreboard.draws,
            self.controller.bot_type()
        ));
        if let Some(error) = self.controller.last_error() {
            ui.colored_label(egui::Color32::RED, error);
        }
        ui.separator();
    }

    fn render_result_overlay(&self, ui: &egui::Ui, board_rect: egui::Rect) {
        let status = self.controller.state().status();
        if !status.is_over() {
            return;
        }
        let painter = ui.painter();
        painter.rect_filled(board_rect, 0.0, OVERLAY_COLOR);
        painter.text(
            board_rect.center(),
            egui::Align2::CENTER_CENTER,
            self.controller.status_text(),
            egui::FontId::proportional(board_rect.width() / 8.0),
            egui::Color32::WHITE,
        );
        painter.text(
            board_rect.center() + egui::vec2(0.0, board_rect.width() / 8.0),
            egui::Align2::CENTER_CENTER,
            "Press R to play again",
            egui::FontId::proportional(16.0),
            egui::Color32::LIGHT_GRAY,
        );
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.controller.tick(now);

        if ctx.input(|i| i.key_pressed(egui::Key::R)) {
            self.controller.restart();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_header(ui);

            let state = self.controller.state();
            let interactive = state.status() == GameStatus::HumanTurn;
            let board = *state.board();
            let winning_line = state.winning_line();

            let response = BoardView::show(ui, &board, winning_line, interactive);
            self.render_result_overlay(ui, response.rect);

            if let Some(pos) = response.clicked {
                self.controller.handle_click(pos, now);
            }
        });

        if let Some(wait) = self.controller.next_wakeup(now) {
            ctx.request_repaint_after(wait);
        }
    }
}
