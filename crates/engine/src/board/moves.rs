use super::Board;
use crate::types::*;

// Jump offsets from a flat square index.
const KNIGHT_OFFSETS: [i32; 8] = [-6, -15, -17, -10, 6, 15, 17, 10];
const KING_OFFSETS: [i32; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];
const DIAGONAL_OFFSETS: [i32; 4] = [-7, -9, 7, 9];
const ORTHOGONAL_OFFSETS: [i32; 4] = [-8, -1, 8, 1];

/// Narrows a freshly generated move list for one piece. The engine itself
/// only produces pseudo-legal moves; a stricter rules layer (check safety,
/// pins) plugs in here without restructuring generation.
pub trait LegalityFilter {
    fn filter(&self, board: &Board, from: u8, moves: Vec<u8>) -> Vec<u8>;
}

/// The default filter: every pseudo-legal move passes through.
#[derive(Debug, Clone, Copy, Default)]
pub struct PseudoLegal;

impl LegalityFilter for PseudoLegal {
    fn filter(&self, _board: &Board, _from: u8, moves: Vec<u8>) -> Vec<u8> {
        moves
    }
}

impl Board {
    /// Recomputes every square's move list from scratch and replaces the
    /// stored lists. Generation is never incremental.
    pub fn regenerate_moves(&mut self) {
        self.regenerate_moves_with(&PseudoLegal);
    }

    pub fn regenerate_moves_with(&mut self, filter: &dyn LegalityFilter) {
        let lists: Vec<Vec<u8>> = (0..64u8)
            .map(|index| filter.filter(self, index, self.moves_for(index)))
            .collect();

        for (piece, moves) in self.squares.iter_mut().zip(lists) {
            piece.moves = moves;
        }
    }

    /// Pseudo-legal destinations for the piece standing on `position`.
    pub fn moves_for(&self, position: u8) -> Vec<u8> {
        let piece = &self.squares[position as usize];
        match piece.kind {
            PieceKind::Blank => Vec::new(),
            PieceKind::Pawn => self.pawn_moves(position, piece.color),
            PieceKind::Knight => self.knight_moves(position, piece.color),
            PieceKind::Bishop => self.bishop_moves(position, piece.color),
            PieceKind::Rook => self.rook_moves(position, piece.color),
            PieceKind::Queen => self.queen_moves(position, piece.color),
            PieceKind::King => self.king_moves(position, piece.color),
        }
    }

    fn pawn_moves(&self, position: u8, color: Color) -> Vec<u8> {
        let mut moves = Vec::new();
        if color == Color::Colorless {
            return moves;
        }

        // White sits on the high rows and advances toward row 0.
        let direction = -color.value();

        let one_step = position as i32 + 8 * direction;
        if (0..64).contains(&one_step) && self.squares[one_step as usize].is_blank() {
            moves.push(one_step as u8);

            let start_row = if color == Color::White { 6 } else { 1 };
            let two_step = position as i32 + 16 * direction;
            if row_of(position) == start_row
                && (0..64).contains(&two_step)
                && self.squares[two_step as usize].is_blank()
            {
                moves.push(two_step as u8);
            }
        }

        // Diagonal captures. The file guard keeps an edge pawn from wrapping
        // onto the far file of the adjacent rank.
        let file = file_of(position) as i32;
        for file_step in [-1i32, 1] {
            let target = position as i32 + 8 * direction + file_step;
            if !(0..64).contains(&target) {
                continue;
            }
            if (target % 8 - file).abs() != 1 {
                continue;
            }
            if self.squares[target as usize].color == color.opponent() {
                moves.push(target as u8);
            }
        }

        moves
    }

    fn knight_moves(&self, position: u8, color: Color) -> Vec<u8> {
        let mut moves = Vec::new();
        let row = row_of(position) as i32;
        let file = file_of(position) as i32;

        for offset in KNIGHT_OFFSETS {
            let target = position as i32 + offset;
            if !(0..64).contains(&target) {
                continue;
            }
            // The same offset applied across a board edge lands 3+ rows or
            // files away; a real knight jump never does.
            if (row - target / 8).abs() >= 3 || (file - target % 8).abs() >= 3 {
                continue;
            }
            if self.squares[target as usize].color != color {
                moves.push(target as u8);
            }
        }

        moves
    }

    fn bishop_moves(&self, position: u8, color: Color) -> Vec<u8> {
        let mut moves = Vec::new();
        self.diagonal_rays(position, color, &mut moves);
        moves
    }

    fn rook_moves(&self, position: u8, color: Color) -> Vec<u8> {
        let mut moves = Vec::new();
        self.orthogonal_rays(position, color, &mut moves);
        moves
    }

    fn queen_moves(&self, position: u8, color: Color) -> Vec<u8> {
        let mut moves = Vec::new();
        self.diagonal_rays(position, color, &mut moves);
        self.orthogonal_rays(position, color, &mut moves);
        moves
    }

    fn king_moves(&self, position: u8, color: Color) -> Vec<u8> {
        let mut moves = Vec::new();
        let row = row_of(position) as i32;
        let file = file_of(position) as i32;

        for offset in KING_OFFSETS {
            let target = position as i32 + offset;
            if !(0..64).contains(&target) {
                continue;
            }
            if (row - target / 8).abs() > 1 || (file - target % 8).abs() > 1 {
                continue;
            }
            if self.squares[target as usize].color != color {
                moves.push(target as u8);
            }
        }

        moves
    }

    /// Casts the four diagonal rays. Both deltas track the step count only
    /// while the ray stays on the board; failing that equality is the edge
    /// guard that terminates the ray.
    fn diagonal_rays(&self, position: u8, color: Color, moves: &mut Vec<u8>) {
        let row = row_of(position) as i32;
        let file = file_of(position) as i32;

        for offset in DIAGONAL_OFFSETS {
            for step in 1..8 {
                let target = position as i32 + offset * step;
                if !(0..64).contains(&target) {
                    break;
                }
                if (row - target / 8).abs() != step || (file - target % 8).abs() != step {
                    break;
                }

                let occupant = &self.squares[target as usize];
                if occupant.color == Color::Colorless {
                    moves.push(target as u8);
                } else if occupant.color == color.opponent() {
                    moves.push(target as u8);
                    break;
                } else {
                    break;
                }
            }
        }
    }

    /// Casts the four orthogonal rays. The cross axis must stay pinned; the
    /// 7-step cap stops a ±1 ray from wrapping a rank end onto the same file
    /// eight squares on, which the zero-delta guard alone would let through.
    fn orthogonal_rays(&self, position: u8, color: Color, moves: &mut Vec<u8>) {
        let row = row_of(position) as i32;
        let file = file_of(position) as i32;

        for offset in ORTHOGONAL_OFFSETS {
            for step in 1..=7 {
                let target = position as i32 + offset * step;
                if !(0..64).contains(&target) {
                    break;
                }
                if (row - target / 8) != 0 && (file - target % 8) != 0 {
                    break;
                }

                let occupant = &self.squares[target as usize];
                if occupant.color == Color::Colorless {
                    moves.push(target as u8);
                } else if occupant.color == color.opponent() {
                    moves.push(target as u8);
                    break;
                } else {
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lone(kind: PieceKind, color: Color, position: u8) -> Board {
        let mut board = Board::empty();
        board.set_piece(position, Piece::new(kind, color, position));
        board
    }

    fn sorted(mut moves: Vec<u8>) -> Vec<u8> {
        moves.sort_unstable();
        moves
    }

    #[test]
    fn blank_squares_generate_nothing() {
        let board = Board::empty();
        for index in 0..64u8 {
            assert!(board.moves_for(index).is_empty());
        }
    }

    #[test]
    fn knight_counts_at_center_and_corner() {
        let board = lone(PieceKind::Knight, Color::White, 35);
        assert_eq!(board.moves_for(35).len(), 8);

        let board = lone(PieceKind::Knight, Color::White, 0);
        assert_eq!(sorted(board.moves_for(0)), vec![10, 17]);
    }

    #[test]
    fn knight_skips_own_pieces_but_takes_enemies() {
        let mut board = lone(PieceKind::Knight, Color::White, 35);
        board.set_piece(50, Piece::new(PieceKind::Pawn, Color::White, 50));
        board.set_piece(52, Piece::new(PieceKind::Pawn, Color::Black, 52));

        let moves = board.moves_for(35);
        assert!(!moves.contains(&50));
        assert!(moves.contains(&52));
        assert_eq!(moves.len(), 7);
    }

    #[test]
    fn rook_covers_fourteen_squares_from_a_corner() {
        let board = lone(PieceKind::Rook, Color::Black, 0);
        let moves = board.moves_for(0);
        assert_eq!(moves.len(), 14);
        for step in 1..8u8 {
            assert!(moves.contains(&step)); // along the rank
            assert!(moves.contains(&(step * 8))); // along the file
        }
    }

    #[test]
    fn rook_rank_ray_never_wraps_onto_the_next_rank() {
        let board = lone(PieceKind::Rook, Color::White, 8);
        let moves = board.moves_for(8);
        // The -1 ray must stop at the board edge, not continue to square 7.
        assert!(!moves.contains(&7));
        assert_eq!(moves.len(), 14);
    }

    #[test]
    fn bishop_rays_stop_on_friends_and_include_enemies() {
        // Bishop on 0 looking down the +9 diagonal: 9, 18, 27, ...
        let mut board = lone(PieceKind::Bishop, Color::White, 0);
        board.set_piece(18, Piece::new(PieceKind::Pawn, Color::White, 18));
        assert_eq!(sorted(board.moves_for(0)), vec![9]);

        let mut board = lone(PieceKind::Bishop, Color::White, 0);
        board.set_piece(18, Piece::new(PieceKind::Pawn, Color::Black, 18));
        assert_eq!(sorted(board.moves_for(0)), vec![9, 18]);
    }

    #[test]
    fn queen_covers_twenty_seven_squares_without_duplicates() {
        let board = lone(PieceKind::Queen, Color::White, 35);
        let moves = board.moves_for(35);
        assert_eq!(moves.len(), 27);

        let mut deduped = moves.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), 27);
    }

    #[test]
    fn king_counts_at_center_and_corner() {
        let board = lone(PieceKind::King, Color::Black, 35);
        assert_eq!(board.moves_for(35).len(), 8);

        let board = lone(PieceKind::King, Color::Black, 0);
        assert_eq!(sorted(board.moves_for(0)), vec![1, 8, 9]);
    }

    #[test]
    fn pawn_single_and_double_step() {
        // White pawn on its starting row advances toward row 0.
        let board = lone(PieceKind::Pawn, Color::White, 52);
        assert_eq!(board.moves_for(52), vec![44, 36]);

        // Black mirrors it downward.
        let board = lone(PieceKind::Pawn, Color::Black, 11);
        assert_eq!(board.moves_for(11), vec![19, 27]);

        // Off the starting row only the single step remains.
        let board = lone(PieceKind::Pawn, Color::White, 44);
        assert_eq!(board.moves_for(44), vec![36]);
    }

    #[test]
    fn pawn_double_step_requires_both_squares_blank() {
        let mut board = lone(PieceKind::Pawn, Color::White, 52);
        board.set_piece(36, Piece::new(PieceKind::Knight, Color::Black, 36));
        assert_eq!(board.moves_for(52), vec![44]);

        let mut board = lone(PieceKind::Pawn, Color::White, 52);
        board.set_piece(44, Piece::new(PieceKind::Knight, Color::Black, 44));
        // Blocked outright; a pawn never captures straight ahead.
        assert!(board.moves_for(52).is_empty());
    }

    #[test]
    fn pawn_double_step_belongs_to_the_right_color() {
        // A black pawn sitting on white's starting row gets no double step.
        let board = lone(PieceKind::Pawn, Color::Black, 50);
        assert_eq!(board.moves_for(50), vec![58]);
    }

    #[test]
    fn pawn_captures_diagonally_only_enemies() {
        let mut board = lone(PieceKind::Pawn, Color::White, 52);
        board.set_piece(43, Piece::new(PieceKind::Rook, Color::Black, 43));
        board.set_piece(45, Piece::new(PieceKind::Rook, Color::White, 45));

        let moves = board.moves_for(52);
        assert!(moves.contains(&43));
        assert!(!moves.contains(&45));
    }

    #[test]
    fn edge_pawn_never_wraps_a_capture() {
        // White pawn on file 0; square 39 sits on file 7 of the rank it
        // advances to and must stay unreachable.
        let mut board = lone(PieceKind::Pawn, Color::White, 48);
        board.set_piece(39, Piece::new(PieceKind::Rook, Color::Black, 39));
        board.set_piece(41, Piece::new(PieceKind::Rook, Color::Black, 41));

        let moves = board.moves_for(48);
        assert!(!moves.contains(&39));
        assert!(moves.contains(&41));
    }

    #[test]
    fn regeneration_replaces_every_move_list() {
        let mut board = Board::new();
        board.regenerate_moves();

        // Knights and pawns can move from the start; the back rank is boxed in.
        assert_eq!(board.piece(57).moves.len(), 2);
        assert_eq!(board.piece(48).moves.len(), 2);
        assert!(board.piece(56).moves.is_empty());
        assert!(board.piece(59).moves.is_empty());

        board.apply_move(52, 36);
        board.regenerate_moves();
        assert!(board.piece(52).moves.is_empty());
        assert_eq!(board.piece(36).moves, vec![28]);
    }

    #[test]
    fn legality_filter_narrows_generated_moves() {
        struct NoMoves;
        impl LegalityFilter for NoMoves {
            fn filter(&self, _board: &Board, _from: u8, _moves: Vec<u8>) -> Vec<u8> {
                Vec::new()
            }
        }

        let mut board = Board::new();
        board.regenerate_moves_with(&NoMoves);
        assert!(board.squares.iter().all(|piece| piece.moves.is_empty()));
    }
}
