pub(crate) mod indexing;
pub(crate) mod moves;
pub(crate) mod pretty;
pub(crate) mod reachability;
pub(crate) mod snapshot;

use std::ops::Deref;

use super::prelude::*;

pub use snapshot::BoardSnapshot;

/// A jump, identified by the cell it lands on. Moves never carry their path; it is
/// recovered from the direction between the current position and the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move(pub Coord);

impl Move {
    /// The cell this move lands on.
    pub fn target(&self) -> Coord {
        self.0
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rule violations raised by move application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("move to {target} is not legal in this position")]
    IllegalMove { target: Coord },
}

/// The state shared by the live board and every simulation: the grid of jump values,
/// the erased cells, and where the player stands.
///
/// Both grids are stored row-major in flat vectors, so cloning a state is a deep copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardState {
    /// The side length of the square grid.
    size: usize,

    /// The jump value of every cell; zeroed as cells are erased.
    values: Vec<u32>,

    /// Whether each cell has been passed over or landed on. Never unset.
    erased: Vec<bool>,

    /// The player's current cell.
    position: Coord,
}

impl BoardState {
    /// Builds the opening state of a layout; the starting cell is erased regardless of its loaded value.
    pub fn new(layout: &BoardLayout) -> BoardState {
        let mut state = BoardState {
            size: layout.size,
            values: layout.values.clone(),
            erased: vec![false; layout.size * layout.size],
            position: layout.start,
        };
        state.erase_unchecked(&layout.start);
        state
    }

    /// The side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The number of cells on the board.
    pub fn total_cells(&self) -> usize {
        self.size * self.size
    }

    /// The player's current cell.
    pub fn position(&self) -> Coord {
        self.position
    }

    /// The jump value stored at a cell.
    pub fn value(&self, coord: &Coord) -> Result<u32> {
        self.checked_index(coord).map(|i| self.values[i])
    }

    /// Whether a cell has been erased.
    pub fn is_erased(&self, coord: &Coord) -> Result<bool> {
        self.checked_index(coord).map(|i| self.erased[i])
    }

    /// The number of erased cells, including the starting cell.
    pub fn erased_count(&self) -> usize {
        self.erased.iter().filter(|&&e| e).count()
    }
}

/// The authoritative board for a game in progress. Only real moves mutate it, and they
/// are validated first; simulations run on `BoardSnapshot`s taken from it.
#[derive(Clone, Debug)]
pub struct GameBoard {
    state: BoardState,

    /// The number of cells the player has occupied, counting the starting placement.
    score: usize,
}

impl GameBoard {
    /// Starts a new game from a layout.
    pub fn new(layout: &BoardLayout) -> GameBoard {
        GameBoard {
            state: BoardState::new(layout),
            score: INITIAL_SCORE,
        }
    }

    /// Plays a move on this board, if valid. Rejected moves leave the board untouched.
    pub fn apply_move(&mut self, mv: Move) -> std::result::Result<(), RuleError> {
        self.state.play(mv)?;
        self.score += 1;
        Ok(())
    }

    /// Whether the game is over; that is, no jump is legal from the current position.
    pub fn is_game_over(&self) -> bool {
        !self.state.has_legal_move()
    }

    /// The number of cells the player has occupied.
    pub fn score(&self) -> usize {
        self.score
    }

    /// The percentage of the board that has been erased.
    pub fn percent_erased(&self) -> f64 {
        self.state.erased_count() as f64 / self.state.total_cells() as f64 * 100.0
    }

    /// Takes an independent copy of the current state for simulation.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from(self.state.clone())
    }
}

impl Deref for GameBoard {
    type Target = BoardState;
    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Builds a board from a compact layout literal.
    pub(crate) fn board(layout: &str) -> GameBoard {
        GameBoard::new(&layout.parse::<BoardLayout>().unwrap())
    }

    /// A square board where every cell holds the same value.
    pub(crate) fn uniform(size: usize, value: u32, start: Coord) -> GameBoard {
        let rows = vec![vec![value; size]; size];
        GameBoard::new(&BoardLayout::new(size, start, rows).unwrap())
    }

    /// A snapshot where every cell is erased except `open`, each of which holds a 1.
    pub(crate) fn carved(size: usize, position: Coord, open: &[Coord]) -> BoardSnapshot {
        let mut state = BoardState {
            size,
            values: vec![0; size * size],
            erased: vec![true; size * size],
            position,
        };
        for coord in open {
            let i = state.index(coord);
            state.erased[i] = false;
            state.values[i] = 1;
        }
        BoardSnapshot::from(state)
    }

    #[test]
    fn start_is_erased_and_zeroed() {
        let b = uniform(5, 3, Coord::new(2, 3));
        let start = Coord::new(2, 3);
        assert!(b.is_erased(&start).unwrap());
        assert_eq!(b.value(&start).unwrap(), 0);
        assert_eq!(b.position(), start);
        assert_eq!(b.erased_count(), 1);
        assert_eq!(b.score(), 1);
    }

    #[test]
    fn apply_erases_exactly_the_path() {
        // from (0,0), the first cell east holds 3, so the jump lands on (0,3)
        let mut b = board("5\n0 0\n9 3 1 1 1\n1 1 1 1 1\n1 1 1 1 1\n1 1 1 1 1\n1 1 1 1 1\n");
        let before = b.snapshot();
        b.apply_move(Move(Coord::new(0, 3))).unwrap();

        for col in 1..=3 {
            let c = Coord::new(0, col);
            assert!(b.is_erased(&c).unwrap());
            assert_eq!(b.value(&c).unwrap(), 0);
        }
        for row in 0..5 {
            for col in 0..5 {
                let c = Coord::new(row, col);
                if row == 0 && col <= 3 {
                    continue;
                }
                assert_eq!(b.is_erased(&c).unwrap(), before.is_erased(&c).unwrap());
                assert_eq!(b.value(&c).unwrap(), before.value(&c).unwrap());
            }
        }
        assert_eq!(b.position(), Coord::new(0, 3));
        assert_eq!(b.score(), 2);
        assert_eq!(b.erased_count(), 4);
    }

    #[test]
    fn illegal_move_leaves_board_untouched() {
        let mut b = uniform(4, 1, Coord::new(0, 0));
        let before = b.snapshot();
        let err = b.apply_move(Move(Coord::new(2, 2))).unwrap_err();
        assert_eq!(err, RuleError::IllegalMove { target: Coord::new(2, 2) });
        assert_eq!(*before, *b);
        assert_eq!(b.score(), 1);

        // the start cell is never a legal target
        assert!(b.apply_move(Move(Coord::new(0, 0))).is_err());
    }

    #[test]
    fn out_of_range_queries_are_errors() {
        let b = uniform(3, 1, Coord::new(1, 1));
        assert!(b.value(&Coord::new(3, 0)).is_err());
        assert!(b.is_erased(&Coord::new(0, 3)).is_err());
    }

    #[test]
    fn terminal_board_rejects_every_move() {
        // only one jump east, after which every neighbour holds 0
        let mut b = board("3\n0 0\n0 1 0\n0 0 0\n0 0 0\n");
        assert_eq!(b.legal_moves(), vec![Move(Coord::new(0, 1))]);
        assert!(!b.is_game_over());

        b.apply_move(Move(Coord::new(0, 1))).unwrap();
        assert!(b.legal_moves().is_empty());
        assert!(b.is_game_over());

        for row in 0..3 {
            for col in 0..3 {
                assert!(b.apply_move(Move(Coord::new(row, col))).is_err());
            }
        }
        assert_eq!(b.score(), 2);
    }

    #[test]
    fn percent_erased_counts_the_start() {
        let b = uniform(10, 1, Coord::new(0, 0));
        assert!((b.percent_erased() - 1.0).abs() < 1e-9);
    }
}
