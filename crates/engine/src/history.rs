use crate::board::Board;
use std::collections::VecDeque;

/// How many board snapshots are retained for undo.
pub const HISTORY_CAPACITY: usize = 10;

/// Bounded stack of board snapshots. Each entry is a full copy of the board
/// taken immediately before a move; pushing past capacity drops the oldest
/// entry. Snapshots are owned here and never alias the live board.
#[derive(Debug, Clone, Default)]
pub struct History {
    snapshots: VecDeque<Board>,
}

impl History {
    pub fn new() -> Self {
        Self {
            snapshots: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    pub fn record(&mut self, board: &Board) {
        if self.snapshots.len() == HISTORY_CAPACITY {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(board.clone());
    }

    /// Takes back the most recent snapshot, or `None` when nothing is left.
    pub fn pop(&mut self) -> Option<Board> {
        self.snapshots.pop_back()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
