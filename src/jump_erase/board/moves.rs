use super::{BoardState, Move, RuleError};
use crate::jump_erase::prelude::*;

impl BoardState {
    /// Returns the legal moves in the current position, in direction order (N, S, W, E, NW, NE, SW, SE).
    pub fn legal_moves(&self) -> Vec<Move> {
        self.legal_moves_lazy().collect()
    }

    /// Counts the legal moves in the current position without collecting them.
    pub fn mobility(&self) -> usize {
        self.legal_moves_lazy().count()
    }

    /// Whether any jump is legal in the current position.
    pub fn has_legal_move(&self) -> bool {
        self.legal_moves_lazy().next().is_some()
    }

    /// Whether a move is one of the legal moves in the current position.
    pub fn is_legal(&self, mv: &Move) -> bool {
        self.legal_moves_lazy().any(|legal| legal == *mv)
    }

    fn legal_moves_lazy(&self) -> impl Iterator<Item = Move> + '_ {
        Direction::all().into_iter().filter_map(|dir| self.jump_target(dir)).map(Move)
    }

    /// Resolves the landing cell of a jump in the given direction, if the jump is legal.
    ///
    /// The jump length is read from the first cell in that direction, and every cell
    /// from there up to the landing cell must still be on the board and unerased.
    fn jump_target(&self, dir: Direction) -> Option<Coord> {
        let origin = OffsetCoord::from(self.position);
        let offset = dir.offset();

        let first = (origin + offset).checked(self.size)?;
        if self.erased_unchecked(&first) {
            return None;
        }

        let step = self.value_unchecked(&first) as isize;
        let target = (origin + offset * step).checked(self.size)?;
        if self.erased_unchecked(&target) {
            return None; // also covers a zero-length jump back onto the player
        }

        let clear = (1..=step).all(|k| {
            (origin + offset * k).checked(self.size).is_some_and(|c| !self.erased_unchecked(&c))
        });
        clear.then_some(target)
    }

    /// Plays a move on this state, if legal.
    pub(super) fn play(&mut self, mv: Move) -> std::result::Result<(), RuleError> {
        if self.is_legal(&mv) {
            self.play_unchecked(mv);
            Ok(())
        } else {
            Err(RuleError::IllegalMove { target: mv.target() })
        }
    }

    /// Plays a move with no checks; engine use only. Erases every cell from the player
    /// (exclusive) to the target (inclusive), then moves the player onto the target.
    pub(super) fn play_unchecked(&mut self, mv: Move) {
        let target = OffsetCoord::from(mv.target());
        let step = (mv.target() - self.position).signum();

        let mut cursor = OffsetCoord::from(self.position);
        while cursor != target {
            cursor = cursor + step;
            let Some(coord) = cursor.checked(self.size) else {
                break;
            };
            self.erase_unchecked(&coord);
        }
        self.position = mv.target();
    }
}
