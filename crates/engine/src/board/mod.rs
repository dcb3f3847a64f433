use crate::types::*;
use thiserror::Error;

pub mod moves;

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("unknown piece letter '{0}'")]
    UnknownPiece(char),
    #[error("expected 8 ranks, found {0}")]
    RankCount(usize),
    #[error("rank {0} does not describe exactly 8 squares")]
    RankWidth(usize),
}

/// A flat 64-square board. Index 0 is the top-left square of the displayed
/// board (first FEN rank); `squares` always holds exactly 64 pieces with
/// blanks filling the gaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub squares: Vec<Piece>,
}

impl Board {
    /// A board in the standard starting position.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board
            .load_fen(STARTING_FEN)
            .expect("starting placement is well-formed");
        board
    }

    /// All 64 squares blank.
    pub fn empty() -> Self {
        Self {
            squares: (0..64).map(Piece::blank).collect(),
        }
    }

    /// Replaces the whole board from a FEN piece-placement field (ranks
    /// separated by '/', digits for runs of blanks, letter case for color).
    ///
    /// Only the placement field is understood; side-to-move, castling and the
    /// other FEN fields are outside this engine's scope. The board is left
    /// untouched when parsing fails.
    pub fn load_fen(&mut self, placement: &str) -> Result<(), FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }

        let mut squares: Vec<Piece> = Vec::with_capacity(64);

        for (row, rank) in ranks.iter().enumerate() {
            let mut file: usize = 0;

            for ch in rank.chars() {
                if let Some(run) = ch.to_digit(10) {
                    for _ in 0..run {
                        if file >= 8 {
                            return Err(FenError::RankWidth(row));
                        }
                        squares.push(Piece::blank((row * 8 + file) as u8));
                        file += 1;
                    }
                } else {
                    if file >= 8 {
                        return Err(FenError::RankWidth(row));
                    }
                    let kind = PieceKind::from_fen_letter(ch.to_ascii_lowercase())
                        .ok_or(FenError::UnknownPiece(ch))?;
                    let color = if ch.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    squares.push(Piece::new(kind, color, (row * 8 + file) as u8));
                    file += 1;
                }
            }

            if file != 8 {
                return Err(FenError::RankWidth(row));
            }
        }

        self.squares = squares;
        Ok(())
    }

    pub fn piece(&self, index: u8) -> &Piece {
        &self.squares[index as usize]
    }

    pub fn set_piece(&mut self, index: u8, mut piece: Piece) {
        piece.position = index;
        self.squares[index as usize] = piece;
    }

    /// Commits a move: a fresh piece of the mover's kind and color replaces
    /// whatever stood on `to`, and a blank replaces the mover on `from`.
    ///
    /// Legality is the caller's contract; `to` must come from the mover's
    /// generated move list.
    pub fn apply_move(&mut self, from: u8, to: u8) {
        let mover = &self.squares[from as usize];
        self.squares[to as usize] = Piece::new(mover.kind, mover.color, to);
        self.squares[from as usize] = Piece::blank(from);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
