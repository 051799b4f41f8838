mod evaluator;
mod survival;

use rayon::prelude::*;

pub use evaluator::{Evaluation, Evaluator, Weights};
pub use survival::SurvivalSearch;

use crate::jump_erase::prelude::*;

/// Which search drives the agent's choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Heuristic evaluation with a shallow lookahead.
    Midgame,

    /// Deep survival search.
    Endgame,
}

/// An implementation of the decision engine: picks the next jump for a live board.
pub struct JumpAgent {
    evaluator: Evaluator,
    survival: SurvivalSearch,
    config: AgentConfig,
    moves_chosen: usize,
    cells_visited: usize,
    total_cells: usize,
}

impl JumpAgent {
    /// The phase the next decision will be made in.
    pub fn phase(&self) -> Phase {
        match self.cells_visited as f64 / self.total_cells as f64 >= self.config.endgame_threshold {
            true => Phase::Endgame,
            _    => Phase::Midgame,
        }
    }

    /// The number of moves this agent has chosen so far.
    pub fn moves_chosen(&self) -> usize {
        self.moves_chosen
    }

    /// The number of cells this agent has occupied, counting the start.
    pub fn cells_visited(&self) -> usize {
        self.cells_visited
    }

    /// Chooses the next move on the board, or `None` if the game is over.
    ///
    /// A lone legal move is taken without any search. Otherwise every candidate is scored by the
    /// current phase's search and the first one with the strictly greatest score wins.
    pub fn choose_move(&mut self, board: &GameBoard) -> Option<Move> {
        let moves = board.legal_moves();
        let phase = self.phase();
        let (chosen, score) = match moves.as_slice() {
            []     => return None,
            [only] => (*only, None),
            _      => {
                let root = board.snapshot();
                let scores = self.score_candidates(&root, &moves, phase);
                let best = first_best(&scores)?;
                (moves[best], Some(scores[best]))
            }
        };

        self.moves_chosen += 1;
        self.cells_visited += 1;
        match score {
            Some(score) => log::debug!("turn {}: {phase:?} chose {chosen} (score {score:.3}) of {} moves", self.moves_chosen, moves.len()),
            None        => log::debug!("turn {}: {phase:?} took the only move {chosen}", self.moves_chosen),
        }
        Some(chosen)
    }

    /// Scores every candidate in generation order.
    fn score_candidates(&self, root: &BoardSnapshot, moves: &[Move], phase: Phase) -> Vec<f64> {
        match self.config.parallel {
            true => moves.par_iter().map(|&mv| self.score(root, mv, phase)).collect(),
            _    => moves.iter().map(|&mv| self.score(root, mv, phase)).collect(),
        }
    }

    fn score(&self, root: &BoardSnapshot, mv: Move, phase: Phase) -> f64 {
        let score = match phase {
            Phase::Midgame => self.evaluator.evaluate(root, mv, self.moves_chosen + 1),
            Phase::Endgame => self.survival.survival_depth(root, mv) as f64,
        };
        log::trace!("candidate {mv}: {score:.3}");
        score
    }
}

/// The index of the first strictly greatest score.
fn first_best(scores: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &score) in scores.iter().enumerate() {
        if best.is_none_or(|b| score > scores[b]) {
            best = Some(i);
        }
    }
    best
}

#[derive(Clone, Debug)]
pub struct AgentConfig {
    /// The share of the board the agent must have visited before switching to survival search.
    pub endgame_threshold: f64,
    pub survival_depth: usize,
    pub lookahead_depth: usize,
    pub lookahead_width: usize,
    pub weights: Weights,

    /// Scores candidates on the rayon pool; the chosen move is the same either way.
    pub parallel: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            endgame_threshold: 0.5,
            survival_depth: 8,
            lookahead_depth: 3,
            lookahead_width: 3,
            weights: Weights::default(),
            parallel: false,
        }
    }
}

impl AgentConfig {
    /// Gets the default configuration.
    pub fn new() -> AgentConfig {
        AgentConfig::default()
    }

    /// Produces a fresh agent for a game on the given board.
    pub fn get_agent(&self, board: &GameBoard) -> JumpAgent {
        JumpAgent {
            evaluator: Evaluator::new(self.weights, self.lookahead_depth, self.lookahead_width),
            survival: SurvivalSearch::new(self.survival_depth),
            config: self.clone(),
            moves_chosen: 0,
            cells_visited: INITIAL_SCORE,
            total_cells: board.total_cells(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jump_erase::board::tests::{board, uniform};

    const LAYOUT: &str = "5\n2 2\n1 2 1 3 1\n2 1 2 1 2\n1 1 0 2 1\n3 1 2 1 1\n1 2 1 1 2\n";

    fn play_out(mut b: GameBoard, config: &AgentConfig) -> (GameBoard, Vec<Move>) {
        let mut agent = config.get_agent(&b);
        let mut played = vec![];
        while let Some(mv) = agent.choose_move(&b) {
            b.apply_move(mv).unwrap();
            played.push(mv);
        }
        assert_eq!(agent.moves_chosen(), played.len());
        (b, played)
    }

    #[test]
    fn no_moves_means_no_choice() {
        let mut b = board("3\n0 0\n0 1 0\n0 0 0\n0 0 0\n");
        let mut agent = AgentConfig::new().get_agent(&b);

        // the only legal jump is taken without scoring
        assert_eq!(agent.choose_move(&b), Some(Move(Coord::new(0, 1))));
        assert_eq!(agent.moves_chosen(), 1);
        assert_eq!(agent.cells_visited(), 2);

        b.apply_move(Move(Coord::new(0, 1))).unwrap();
        assert_eq!(agent.choose_move(&b), None);
        assert_eq!(agent.moves_chosen(), 1);
        assert_eq!(agent.cells_visited(), 2);
    }

    #[test]
    fn phase_switches_at_the_threshold() {
        let b = uniform(2, 1, Coord::new(0, 0));
        let mut agent = AgentConfig::new().get_agent(&b);
        assert_eq!(agent.phase(), Phase::Midgame);

        assert!(agent.choose_move(&b).is_some());
        assert_eq!(agent.phase(), Phase::Endgame);
    }

    #[test]
    fn endgame_prefers_longest_survival() {
        // south to (1,0) survives two moves; east to (0,1) survives three
        let b = board("4\n0 0\n0 1 0 0\n1 0 0 0\n1 0 0 0\n0 0 0 0\n");
        assert_eq!(b.legal_moves(), vec![Move(Coord::new(1, 0)), Move(Coord::new(0, 1))]);

        let config = AgentConfig { endgame_threshold: 0.0, ..AgentConfig::default() };
        let mut agent = config.get_agent(&b);
        assert_eq!(agent.phase(), Phase::Endgame);
        assert_eq!(agent.choose_move(&b), Some(Move(Coord::new(0, 1))));
    }

    #[test]
    fn midgame_follows_the_evaluator() {
        // west to (0,1) opens two jumps but survives three moves; east runs a seven-move corridor
        let b = board(
            "10\n0 2\n1 1 0 1 1 1 1 1 1 1\n1 0 0 0 0 0 0 0 0 0\n\
             0 0 0 0 0 0 0 0 0 0\n0 0 0 0 0 0 0 0 0 0\n0 0 0 0 0 0 0 0 0 0\n\
             0 0 0 0 0 0 0 0 0 0\n0 0 0 0 0 0 0 0 0 0\n0 0 0 0 0 0 0 0 0 0\n\
             0 0 0 0 0 0 0 0 0 0\n0 0 0 0 0 0 0 0 0 0\n",
        );
        let [west, east] = [Move(Coord::new(0, 1)), Move(Coord::new(0, 3))];
        assert_eq!(b.legal_moves(), vec![west, east]);

        let root = b.snapshot();
        let eval = Evaluator::default();
        assert!(eval.evaluate(&root, west, 1) > eval.evaluate(&root, east, 1));

        let survival = SurvivalSearch::default();
        assert_eq!(survival.survival_depth(&root, west), 3);
        assert_eq!(survival.survival_depth(&root, east), 7);

        let mut agent = AgentConfig::default().get_agent(&b);
        assert_eq!(agent.phase(), Phase::Midgame);
        assert_eq!(agent.choose_move(&b), Some(west));

        let config = AgentConfig { endgame_threshold: 0.0, ..AgentConfig::default() };
        assert_eq!(config.get_agent(&b).choose_move(&b), Some(east));
    }

    #[test]
    fn ties_go_to_the_first_move() {
        // both jumps survive exactly two moves
        let b = board("3\n0 0\n0 1 0\n1 0 0\n0 0 0\n");
        let config = AgentConfig { endgame_threshold: 0.0, ..AgentConfig::default() };
        let mut agent = config.get_agent(&b);
        assert_eq!(agent.choose_move(&b), Some(Move(Coord::new(1, 0))));

        assert_eq!(first_best(&[1.0, 3.0, 3.0, 2.0]), Some(1));
        assert_eq!(first_best(&[-1000.0, -1000.0]), Some(0));
        assert_eq!(first_best(&[]), None);
    }

    #[test]
    fn full_game_runs_to_completion() {
        let (b, played) = play_out(board(LAYOUT), &AgentConfig::default());
        assert!(b.is_game_over());
        assert!(!played.is_empty());
        assert_eq!(b.score(), played.len() + 1);

        // decisions are deterministic
        let (_, again) = play_out(board(LAYOUT), &AgentConfig::default());
        assert_eq!(played, again);
    }

    #[test]
    fn parallel_scoring_picks_the_same_moves() {
        let sequential = AgentConfig::default();
        let parallel = AgentConfig { parallel: true, ..AgentConfig::default() };
        let (_, a) = play_out(board(LAYOUT), &sequential);
        let (_, b) = play_out(board(LAYOUT), &parallel);
        assert_eq!(a, b);

        let (_, a) = play_out(uniform(6, 2, Coord::new(0, 0)), &sequential);
        let (_, b) = play_out(uniform(6, 2, Coord::new(0, 0)), &parallel);
        assert_eq!(a, b);
    }
}
