use crate::jump_erase::prelude::*;

/// Simple board coordinate; bounded by the size of the board it lives on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Determines whether or not the coord is in bounds on a board of the given size.
    pub fn in_bounds(&self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Constructs a new coord.
    pub fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }

    /// The canonical notation of the coord.
    pub fn notate(&self) -> String {
        format!("({}, {})", self.row, self.col)
    }

    /// The taxicab distance between two coords.
    pub fn manhattan(&self, other: &Coord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.notate())
    }
}

// Simple signed offset pair; jumps, directions and paths are computed in this space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OffsetCoord {
    pub rows: isize,
    pub cols: isize,
}

impl OffsetCoord {
    /// Coerces the offset into a coordinate unchecked.
    pub fn coerce(&self) -> Coord {
        Coord {
            row: self.rows as usize,
            col: self.cols as usize,
        }
    }

    /// Coerces the offset into a coordinate if it lands on a board of the given size.
    pub fn checked(&self, size: usize) -> Option<Coord> {
        self.in_bounds_signed(size).then(|| self.coerce())
    }

    /// Determines whether or not the coord is in bounds.
    pub fn in_bounds_signed(&self, size: usize) -> bool {
        let size = size as isize;
        0 <= self.rows && self.rows < size && 0 <= self.cols && self.cols < size
    }

    /// The unit step pointing the same way as this offset.
    pub fn signum(&self) -> OffsetCoord {
        OffsetCoord {
            rows: self.rows.signum(),
            cols: self.cols.signum(),
        }
    }

    /// Constructs a new offset coord.
    pub const fn new(rows: isize, cols: isize) -> OffsetCoord {
        OffsetCoord { rows, cols }
    }
}

// C -> OC

impl From<Coord> for OffsetCoord {
    fn from(value: Coord) -> Self {
        OffsetCoord {
            rows: value.row as isize,
            cols: value.col as isize,
        }
    }
}

impl From<&Coord> for OffsetCoord {
    fn from(value: &Coord) -> Self {
        OffsetCoord {
            rows: value.row as isize,
            cols: value.col as isize,
        }
    }
}

// OC + OC

impl Add<&OffsetCoord> for &OffsetCoord {
    type Output = OffsetCoord;
    fn add(self, rhs: &OffsetCoord) -> Self::Output {
        OffsetCoord {
            rows: self.rows + rhs.rows,
            cols: self.cols + rhs.cols,
        }
    }
}

impl Add<OffsetCoord> for OffsetCoord {
    type Output = OffsetCoord;
    fn add(self, rhs: OffsetCoord) -> Self::Output {
        &self + &rhs
    }
}

// C + OC

impl Add<&OffsetCoord> for &Coord {
    type Output = OffsetCoord;
    fn add(self, rhs: &OffsetCoord) -> Self::Output {
        &OffsetCoord::from(self) + rhs
    }
}

impl Add<OffsetCoord> for Coord {
    type Output = OffsetCoord;
    fn add(self, rhs: OffsetCoord) -> Self::Output {
        &self + &rhs
    }
}

// C - C

impl Sub<&Coord> for &Coord {
    type Output = OffsetCoord;
    fn sub(self, rhs: &Coord) -> Self::Output {
        let [lhs, rhs] = [OffsetCoord::from(self), OffsetCoord::from(rhs)];
        OffsetCoord {
            rows: lhs.rows - rhs.rows,
            cols: lhs.cols - rhs.cols,
        }
    }
}

impl Sub<Coord> for Coord {
    type Output = OffsetCoord;
    fn sub(self, rhs: Coord) -> Self::Output {
        &self - &rhs
    }
}

// OC * k

impl Mul<isize> for OffsetCoord {
    type Output = OffsetCoord;
    fn mul(self, rhs: isize) -> Self::Output {
        OffsetCoord {
            rows: self.rows * rhs,
            cols: self.cols * rhs,
        }
    }
}
