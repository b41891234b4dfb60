use eframe::egui;
use tictactoe_common::tictactoe::{BOARD_SIZE, Board, Cell, Position, WinningLine};

const BG_COLOR: egui::Color32 = egui::Color32::from_rgb(40, 44, 52);
const LINE_COLOR: egui::Color32 = egui::Color32::from_rgb(80, 200, 220);
const CIRCLE_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 214, 10);
const CROSS_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 85, 85);
const HOVER_COLOR: egui::Color32 = egui::Color32::from_rgba_premultiplied(40, 60, 80, 60);
const STRIKE_COLOR: egui::Color32 = egui::Color32::from_rgba_premultiplied(200, 200, 200, 220);

/// Maps between board cells and screen pixels for a square board anchored at
/// `rect.min`.
#[derive(Debug, Clone, Copy)]
pub struct BoardGeometry {
    pub rect: egui::Rect,
    pub cell_size: f32,
}

impl BoardGeometry {
    pub fn new(origin: egui::Pos2, side: f32) -> Self {
        Self {
            rect: egui::Rect::from_min_size(origin, egui::vec2(side, side)),
            cell_size: side / BOARD_SIZE as f32,
        }
    }

    pub fn cell_rect(&self, pos: Position) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(
                self.rect.left() + pos.col() as f32 * self.cell_size,
                self.rect.top() + pos.row() as f32 * self.cell_size,
            ),
            egui::vec2(self.cell_size, self.cell_size),
        )
    }

    /// Cell under a pixel, or `None` outside the board.
    pub fn cell_at(&self, point: egui::Pos2) -> Option<Position> {
        if !self.rect.contains(point) {
            return None;
        }
        let col = ((point.x - self.rect.left()) / self.cell_size) as usize;
        let row = ((point.y - self.rect.top()) / self.cell_size) as usize;
        // The far edges are inside `rect` but map to index 3.
        Position::new(row.min(BOARD_SIZE - 1), col.min(BOARD_SIZE - 1)).ok()
    }
}

pub struct BoardResponse {
    pub rect: egui::Rect,
    pub clicked: Option<Position>,
}

pub struct BoardView;

impl BoardView {
    const LINE_WIDTH: f32 = 6.0;
    const MARK_WIDTH: f32 = 10.0;

    /// Draws the board and reports the clicked cell, if any. Hover and clicks
    /// are only handled when `interactive` is set.
    pub fn show(
        ui: &mut egui::Ui,
        board: &Board,
        winning_line: Option<WinningLine>,
        interactive: bool,
    ) -> BoardResponse {
        let side = ui.available_width().min(ui.available_height()).max(90.0);
        let (rect, response) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::click());
        let geometry = BoardGeometry::new(rect.min, side);
        let painter = ui.painter();

        painter.rect_filled(rect, 0.0, BG_COLOR);

        if interactive
            && let Some(hover_pos) = response.hover_pos()
            && let Some(cell) = geometry.cell_at(hover_pos)
            && board.is_empty_at(cell)
        {
            painter.rect_filled(geometry.cell_rect(cell), 0.0, HOVER_COLOR);
        }

        Self::draw_grid(painter, &geometry);

        for pos in Position::all() {
            let cell_rect = geometry.cell_rect(pos);
            match board.get(pos) {
                Cell::Human => Self::draw_x(painter, cell_rect),
                Cell::Computer => Self::draw_o(painter, cell_rect),
                Cell::Empty => {}
            }
        }

        if let Some(line) = winning_line {
            painter.line_segment(
                [
                    geometry.cell_rect(line.start).center(),
                    geometry.cell_rect(line.end).center(),
                ],
                egui::Stroke::new(Self::LINE_WIDTH, STRIKE_COLOR),
            );
        }

        let clicked = if interactive && response.clicked() {
            response
                .interact_pointer_pos()
                .and_then(|point| geometry.cell_at(point))
        } else {
            None
        };

        BoardResponse { rect, clicked }
    }

    fn draw_grid(painter: &egui::Painter, geometry: &BoardGeometry) {
        let rect = geometry.rect;
        let stroke = egui::Stroke::new(Self::LINE_WIDTH, LINE_COLOR);
        for i in 1..BOARD_SIZE {
            let offset = i as f32 * geometry.cell_size;
            painter.line_segment(
                [
                    egui::pos2(rect.left() + offset, rect.top()),
                    egui::pos2(rect.left() + offset, rect.bottom()),
                ],
                stroke,
            );
            painter.line_segment(
                [
                    egui::pos2(rect.left(), rect.top() + offset),
                    egui::pos2(rect.right(), rect.top() + offset),
                ],
                stroke,
            );
        }
    }

    fn draw_x(painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let stroke = egui::Stroke::new(Self::MARK_WIDTH, CROSS_COLOR);

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );
        painter.line_segment(
            [
                egui::pos2(rect.right() - padding, rect.top() + padding),
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
            ],
            stroke,
        );
    }

    fn draw_o(painter: &egui::Painter, rect: egui::Rect) {
        let radius = rect.width() / 3.0;
        painter.circle_stroke(
            rect.center(),
            radius,
            egui::Stroke::new(Self::MARK_WIDTH, CIRCLE_COLOR),
        );
    }
}
