use crate::board::moves::{LegalityFilter, PseudoLegal};
use crate::board::Board;
use crate::history::History;
use crate::types::Color;

/// Selection and turn state wrapped around a [`Board`].
///
/// `select_or_move` and `undo` are the only mutating entry points the input
/// layer gets. Turn alternation stays outside: a committed move (or undo)
/// only raises the `move_made` flag, and the surrounding loop decides when to
/// call `advance_turn` to flip the side to move and regenerate every piece's
/// move list.
pub struct Game {
    pub board: Board,
    pub current_color: Color,
    pub selected: Option<u8>,
    move_made: bool,
    history: History,
    filter: Box<dyn LegalityFilter>,
}

impl Game {
    pub fn new() -> Self {
        Self::with_filter(Box::new(PseudoLegal))
    }

    pub fn with_filter(filter: Box<dyn LegalityFilter>) -> Self {
        let mut board = Board::new();
        board.regenerate_moves_with(filter.as_ref());

        Self {
            board,
            current_color: Color::White,
            selected: None,
            move_made: false,
            history: History::new(),
            filter,
        }
    }

    /// Handles a square chosen by the input layer.
    ///
    /// If a selection is active and the square is one of its generated
    /// destinations, the move is committed: the board is snapshotted, the
    /// pieces are replaced, the selection clears and `move_made` is raised.
    /// Otherwise the square becomes the new selection as long as the opponent
    /// does not hold it. Blank squares carry no color, so "selecting" one is
    /// allowed and simply highlights nothing; clicking an opponent's piece
    /// leaves the current selection in place.
    pub fn select_or_move(&mut self, square: u8) {
        if let Some(from) = self.selected {
            if self.board.piece(from).moves.contains(&square) {
                self.history.record(&self.board);
                self.board.apply_move(from, square);
                self.selected = None;
                self.move_made = true;
                return;
            }
        }

        if self.board.piece(square).color != self.current_color.opponent() {
            self.selected = Some(square);
        }
    }

    /// Restores the board to the most recent snapshot. Raises `move_made` so
    /// the outer loop hands the turn back to the player whose move was taken
    /// back. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(snapshot) => {
                self.board = snapshot;
                self.selected = None;
                self.move_made = true;
                true
            }
            None => {
                log::info!("nothing to undo");
                false
            }
        }
    }

    /// Consumes the move-made signal. The caller follows a `true` result
    /// with [`Game::advance_turn`].
    pub fn take_move_made(&mut self) -> bool {
        std::mem::take(&mut self.move_made)
    }

    /// Flips the side to move and regenerates every piece's move list.
    pub fn advance_turn(&mut self) {
        self.current_color = self.current_color.opponent();
        self.board.regenerate_moves_with(self.filter.as_ref());
    }

    /// The selected piece's destinations, for highlight rendering.
    pub fn selected_moves(&self) -> &[u8] {
        match self.selected {
            Some(square) => &self.board.piece(square).moves,
            None => &[],
        }
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
