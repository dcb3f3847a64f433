use egui::{Color32, Rect, Sense, Vec2};
use engine::{file_of, row_of, square_at, Color, Game, Piece, PieceKind};

pub struct ChessApp {
    game: Game,
    status: String,
}

impl ChessApp {
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            status: String::new(),
        }
    }
}

impl eframe::App for ChessApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Undo").clicked() {
                    if self.game.undo() {
                        self.status.clear();
                    } else {
                        self.status = "Nothing to undo".to_owned();
                    }
                }
                ui.label(format!("{} to move", self.game.current_color.name()));
                if !self.status.is_empty() {
                    ui.label(&self.status);
                }
            });

            let available_size = ui.available_size();
            let board_size = available_size.x.min(available_size.y) - 10.0;
            let square_size = board_size / 8.0;

            let board_rect = Rect::from_min_size(ui.cursor().min, Vec2::splat(board_size));
            let response = ui.allocate_rect(board_rect, Sense::click());

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let relative_pos = pos - board_rect.min;
                    if let Some(square) = square_at(relative_pos.x, relative_pos.y, square_size) {
                        self.game.select_or_move(square);
                        self.status.clear();
                    }
                }
            }

            // The engine only reports that a move happened; flipping the side
            // to move and regenerating move lists is this loop's job.
            if self.game.take_move_made() {
                self.game.advance_turn();
            }

            self.draw_board(ui, board_rect, square_size);
        });
    }
}

impl ChessApp {
    fn draw_board(&self, ui: &mut egui::Ui, board_rect: Rect, square_size: f32) {
        let painter = ui.painter();
        let highlights = self.game.selected_moves();

        // Row 0 (the first FEN rank) is drawn at the top.
        for index in 0..64u8 {
            let row = row_of(index);
            let file = file_of(index);

            let square_rect = Rect::from_min_size(
                board_rect.min
                    + Vec2::new(file as f32 * square_size, row as f32 * square_size),
                Vec2::splat(square_size),
            );

            let base_color = if (file + row) % 2 == 0 {
                Color32::from_rgb(240, 240, 240)
            } else {
                Color32::from_rgb(46, 139, 87)
            };

            let square_color = if Some(index) == self.game.selected {
                Color32::from_rgb(255, 255, 0)
            } else {
                base_color
            };

            painter.rect_filled(square_rect, 0.0, square_color);

            let piece = self.game.board.piece(index);

            if highlights.contains(&index) {
                let center = square_rect.center();
                let overlay = Color32::from_rgba_premultiplied(128, 128, 128, 179);

                if piece.is_blank() {
                    painter.circle_filled(center, square_size * 0.15, overlay);
                } else {
                    // Capture target: a donut around the occupant.
                    painter.circle_filled(center, square_size * 0.4, overlay);
                    painter.circle_filled(center, square_size * 0.25, square_color);
                }
            }

            if !piece.is_blank() {
                draw_piece(painter, piece, square_rect);
            }
        }

        painter.rect_stroke(board_rect, 0.0, egui::Stroke::new(2.0, Color32::BLACK));
    }
}

fn draw_piece(painter: &egui::Painter, piece: &Piece, square_rect: Rect) {
    let glyph = match (piece.kind, piece.color) {
        (PieceKind::King, Color::White) => "♔",
        (PieceKind::Queen, Color::White) => "♕",
        (PieceKind::Rook, Color::White) => "♖",
        (PieceKind::Bishop, Color::White) => "♗",
        (PieceKind::Knight, Color::White) => "♘",
        (PieceKind::Pawn, Color::White) => "♙",
        (PieceKind::King, Color::Black) => "♚",
        (PieceKind::Queen, Color::Black) => "♛",
        (PieceKind::Rook, Color::Black) => "♜",
        (PieceKind::Bishop, Color::Black) => "♝",
        (PieceKind::Knight, Color::Black) => "♞",
        (PieceKind::Pawn, Color::Black) => "♟",
        _ => return,
    };

    painter.text(
        square_rect.center(),
        egui::Align2::CENTER_CENTER,
        glyph,
        egui::FontId::proportional(square_rect.size().x * 0.8),
        Color32::BLACK,
    );
}
