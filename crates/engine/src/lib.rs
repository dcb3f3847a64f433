pub mod board;
pub mod game;
pub mod history;
pub mod types;

pub use board::moves::{LegalityFilter, PseudoLegal};
pub use board::{Board, FenError, STARTING_FEN};
pub use game::Game;
pub use history::{History, HISTORY_CAPACITY};
pub use types::*;
