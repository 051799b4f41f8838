use std::collections::VecDeque;

use super::BoardState;
use crate::jump_erase::prelude::*;

impl BoardState {
    /// Counts the open cells that a flood fill from `from` can never reach.
    ///
    /// The fill is a connectivity estimate rather than a replay of the rules: from every
    /// reached cell it tries all eight directions at every length up to `MAX_REACH_STEP`,
    /// lands on any unerased cell, and may pass over erased ones. Nothing is reachable from
    /// a cell off the board.
    pub(crate) fn unreachable_cells(&self, from: &Coord) -> usize {
        let mut reached = vec![false; self.total_cells()];
        let mut queue = VecDeque::new();
        if let Ok(i) = self.checked_index(from) {
            reached[i] = true;
            queue.push_back(*from);
        }

        while let Some(cell) = queue.pop_front() {
            let origin = OffsetCoord::from(cell);
            for dir in Direction::all() {
                for step in 1..=MAX_REACH_STEP {
                    let Some(next) = (origin + dir.offset() * step).checked(self.size) else {
                        break; // every longer step is off the board too
                    };
                    let i = self.index(&next);
                    if reached[i] || self.erased[i] {
                        continue;
                    }
                    reached[i] = true;
                    queue.push_back(next);
                }
            }
        }

        reached.iter().zip(self.erased.iter()).filter(|&(&r, &e)| !r && !e).count()
    }

    /// The share of the board not cut off from `from`; 1.0 when every open cell is reachable.
    pub(crate) fn connectivity(&self, from: &Coord) -> f64 {
        1.0 - self.unreachable_cells(from) as f64 / self.total_cells() as f64
    }
}
