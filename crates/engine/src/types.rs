/// Side a piece belongs to. `Colorless` is carried only by blank squares,
/// so it never equals either player's color or either player's opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Colorless,
    Black,
    White,
}

impl Color {
    pub fn value(self) -> i32 {
        match self {
            Color::Colorless => 0,
            Color::Black => -1,
            Color::White => 1,
        }
    }

    pub fn opponent(self) -> Color {
        match self {
            Color::Colorless => Color::Colorless,
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Colorless => "Colorless",
            Color::Black => "Black",
            Color::White => "White",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Blank,
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Maps a lowercase FEN letter to a kind. Case (color) is handled by the
    /// FEN loader.
    pub fn from_fen_letter(letter: char) -> Option<PieceKind> {
        match letter {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// One square's occupant. A blank square is a `Piece` too (kind `Blank`,
/// color `Colorless`), so the board is always a dense 64-entry sequence.
///
/// `position` always equals the piece's index in `Board::squares`; pieces are
/// replaced on every move, never moved in place. `moves` holds the last
/// generated pseudo-legal destinations and is only valid until the next
/// regeneration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub position: u8,
    pub moves: Vec<u8>,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, position: u8) -> Self {
        Self {
            kind,
            color,
            position,
            moves: Vec::new(),
        }
    }

    pub fn blank(position: u8) -> Self {
        Self::new(PieceKind::Blank, Color::Colorless, position)
    }

    pub fn is_blank(&self) -> bool {
        self.kind == PieceKind::Blank
    }

    pub fn row(&self) -> u8 {
        row_of(self.position)
    }

    pub fn file(&self) -> u8 {
        file_of(self.position)
    }
}

/// Row 0 is the first FEN rank, drawn at the top of the window.
pub fn row_of(index: u8) -> u8 {
    index / 8
}

pub fn file_of(index: u8) -> u8 {
    index % 8
}

/// Translates a click position (relative to the board's top-left corner)
/// into a square index.
pub fn square_at(x: f32, y: f32, square_size: f32) -> Option<u8> {
    let file = (x / square_size) as i32;
    let row = (y / square_size) as i32;

    if x >= 0.0 && y >= 0.0 && (0..8).contains(&file) && (0..8).contains(&row) {
        Some((row * 8 + file) as u8)
    } else {
        None
    }
}
