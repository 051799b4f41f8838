use itertools::Itertools;
use std::cmp::Reverse;

use crate::jump_erase::prelude::*;

/// Tunable weights for the midgame evaluator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Weights {
    pub mobility: f64,
    pub connectivity: f64,
    pub area: f64,
    pub position: f64,
    pub lookahead: f64,

    /// The score of a move after which no jump is legal.
    pub dead_end: f64,

    /// Per-ply value of each legal move the lookahead finds.
    pub lookahead_mobility: f64,

    /// Discount applied to the best continuation of each lookahead ply.
    pub lookahead_decay: f64,

    /// Share of the positional value kept once the opening is over.
    pub late_position_scale: f64,

    /// Flat positional value once position no longer matters.
    pub endgame_position: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Weights {
            mobility: 10.0,
            connectivity: 20.0,
            area: 30.0,
            position: 10.0,
            lookahead: 15.0,
            dead_end: -1000.0,
            lookahead_mobility: 0.1,
            lookahead_decay: 0.7,
            late_position_scale: 0.7,
            endgame_position: 0.5,
        }
    }
}

/// The weighted terms of a single evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Evaluation {
    pub mobility: f64,
    pub connectivity: f64,
    pub area: f64,
    pub position: f64,
    pub lookahead: f64,
}

impl Evaluation {
    pub fn total(&self) -> f64 {
        self.mobility + self.connectivity + self.area + self.position + self.lookahead
    }
}

/// The midgame evaluator: scores a candidate jump by the board it leaves behind.
#[derive(Clone, Copy, Debug)]
pub struct Evaluator {
    weights: Weights,
    lookahead_depth: usize,
    lookahead_width: usize,
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator::new(Weights::default(), 3, 3)
    }
}

impl Evaluator {
    pub fn new(weights: Weights, lookahead_depth: usize, lookahead_width: usize) -> Evaluator {
        Evaluator { weights, lookahead_depth, lookahead_width }
    }

    /// Scores playing `mv` from `before` on the given (1-based) turn. Moves that end the game
    /// score the dead-end sentinel no matter what the other terms would have said.
    pub fn evaluate(&self, before: &BoardSnapshot, mv: Move, turn: usize) -> f64 {
        self.breakdown(before, mv, turn).map_or(self.weights.dead_end, |e| e.total())
    }

    /// The weighted terms behind `evaluate`, or `None` if the move ends the game.
    pub fn breakdown(&self, before: &BoardSnapshot, mv: Move, turn: usize) -> Option<Evaluation> {
        let after = before.after(mv);
        let mobility = after.mobility();
        if mobility == 0 {
            return None;
        }

        let w = &self.weights;
        Some(Evaluation {
            mobility: mobility as f64 * w.mobility,
            connectivity: after.connectivity(&after.position()) * w.connectivity,
            area: Evaluator::area_control(&after) * w.area,
            position: self.position_value(&mv.target(), after.size(), turn) * w.position,
            lookahead: self.lookahead(&after, self.lookahead_depth) * w.lookahead,
        })
    }

    /// The mean share of open cells across the four quadrants of the board.
    ///
    /// Quadrants split at `size / 2`, so on odd boards the lower and right quadrants are larger.
    pub fn area_control(state: &BoardState) -> f64 {
        let size = state.size();
        let half = size / 2;
        let quadrants = [
            (0..half, 0..half),
            (0..half, half..size),
            (half..size, 0..half),
            (half..size, half..size),
        ];
        quadrants.into_iter().map(|(rows, cols)| {
            let cells = rows.len() * cols.len();
            if cells == 0 {
                return 0.0;
            }
            state.open_cells_in(rows, cols) as f64 / cells as f64
        }).sum::<f64>() / 4.0
    }

    /// How central a landing cell is, in [0, 1], faded out as the game goes on.
    pub fn position_value(&self, target: &Coord, size: usize, turn: usize) -> f64 {
        let center = Coord::new(size / 2, size / 2);
        let centrality = 1.0 - target.manhattan(&center) as f64 / (2 * size) as f64;
        match turn {
            t if t < size     => centrality,
            t if t < 2 * size => centrality * self.weights.late_position_scale,
            _                 => self.weights.endgame_position,
        }
    }

    /// A shallow, narrow lookahead: follows the continuations that leave the most jumps open
    /// and rewards lines that stay mobile for several plies.
    pub fn lookahead(&self, sim: &BoardSnapshot, depth: usize) -> f64 {
        if depth == 0 {
            return 0.0;
        }

        let w = &self.weights;
        sim.legal_moves().into_iter()
            .map(|mv| {
                let next = sim.after(mv);
                let mobility = next.mobility();
                (next, mobility)
            })
            .sorted_by_key(|&(_, mobility)| Reverse(mobility))
            .take(self.lookahead_width)
            .map(|(next, mobility)| {
                mobility as f64 * w.lookahead_mobility + self.lookahead(&next, depth - 1) * w.lookahead_decay
            })
            .fold(0.0, f64::max)
    }
}
