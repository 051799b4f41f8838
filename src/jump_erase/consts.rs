use crate::jump_erase::coords::OffsetCoord;

/// The longest jump the reachability flood fill will try in any one direction.
/// Matches the value domain of generated boards; larger grid values are under-counted.
pub const MAX_REACH_STEP: isize = 9;

/// The score a board starts with; the starting placement occupies one cell.
pub const INITIAL_SCORE: usize = 1;

// A compass direction a jump can be made in.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    N = 0,
    S = 1,
    W = 2,
    E = 3,
    NW = 4,
    NE = 5,
    SW = 6,
    SE = 7,
}

impl Direction {
    /// Gets the directions in generation order; legal moves are always listed in this order.
    pub fn all() -> [Direction; 8] {
        [
            Direction::N,
            Direction::S,
            Direction::W,
            Direction::E,
            Direction::NW,
            Direction::NE,
            Direction::SW,
            Direction::SE,
        ]
    }

    /// The unit offset of one step in this direction.
    pub fn offset(&self) -> OffsetCoord {
        DIRECTION_OFFSETS[*self as usize]
    }
}

/// Unit offsets indexed by `Direction as usize`.
pub static DIRECTION_OFFSETS: [OffsetCoord; 8] = [
    OffsetCoord::new(-1, 0),
    OffsetCoord::new(1, 0),
    OffsetCoord::new(0, -1),
    OffsetCoord::new(0, 1),
    OffsetCoord::new(-1, -1),
    OffsetCoord::new(-1, 1),
    OffsetCoord::new(1, -1),
    OffsetCoord::new(1, 1),
];
