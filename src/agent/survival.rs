use crate::jump_erase::prelude::*;

/// The endgame search: how many consecutive jumps can still be forced after a candidate move.
///
/// Every branch of the search owns its own snapshot, so the whole tree is explored
/// depth-first without any shared mutable state.
#[derive(Clone, Copy, Debug)]
pub struct SurvivalSearch {
    max_depth: usize,
}

impl Default for SurvivalSearch {
    fn default() -> Self {
        SurvivalSearch::new(8)
    }
}

impl SurvivalSearch {
    pub fn new(max_depth: usize) -> SurvivalSearch {
        SurvivalSearch { max_depth }
    }

    /// The number of moves (counting `mv` itself) that can be chained after playing `mv`
    /// from `before`, capped at the search's maximum depth.
    pub fn survival_depth(&self, before: &BoardSnapshot, mv: Move) -> usize {
        self.explore(&before.after(mv), 1)
    }

    fn explore(&self, sim: &BoardSnapshot, depth: usize) -> usize {
        let moves = sim.legal_moves();
        if depth >= self.max_depth || moves.is_empty() {
            return depth;
        }

        let mut deepest = depth;
        for mv in moves {
            deepest = deepest.max(self.explore(&sim.after(mv), depth + 1));
            if deepest >= self.max_depth {
                break; // nothing can beat the cap
            }
        }
        deepest
    }
}
