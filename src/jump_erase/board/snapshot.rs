use std::ops::Deref;

use super::{BoardState, Move, RuleError};

/// An independent copy of a board used for lookahead. Snapshots own their storage outright,
/// so a branch can be played out without touching the live board or any sibling branch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardSnapshot {
    state: BoardState,
}

impl BoardSnapshot {
    /// Deep-copies this snapshot into a new branch.
    pub fn branch(&self) -> BoardSnapshot {
        self.clone()
    }

    /// Plays a move on this snapshot, if legal.
    pub fn play(&mut self, mv: Move) -> std::result::Result<(), RuleError> {
        self.state.play(mv)
    }

    /// Branches and plays a move that was generated from this snapshot; engine use only.
    pub fn after(&self, mv: Move) -> BoardSnapshot {
        let mut next = self.branch();
        next.state.play_unchecked(mv);
        next
    }
}

impl From<BoardState> for BoardSnapshot {
    fn from(state: BoardState) -> Self {
        BoardSnapshot { state }
    }
}

impl Deref for BoardSnapshot {
    type Target = BoardState;
    fn deref(&self) -> &Self::Target {
        &self.state
    }
}
