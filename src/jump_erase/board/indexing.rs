use std::ops::Range;

use super::BoardState;
use crate::jump_erase::prelude::*;

impl BoardState {
    /// Gets the flat index of a coordinate, if it is on the board.
    pub(super) fn checked_index(&self, coord: &Coord) -> Result<usize> {
        if coord.in_bounds(self.size) {
            Ok(self.index(coord))
        } else {
            Err(anyhow!(
                "invalid coordinate ({:02}, {:02}) on a {}x{} board",
                coord.row,
                coord.col,
                self.size,
                self.size
            ))
        }
    }

    /// The number of unerased cells in a rectangular region of the board, clipped to the board.
    pub(crate) fn open_cells_in(&self, rows: Range<usize>, cols: Range<usize>) -> usize {
        let rows = rows.start..rows.end.min(self.size);
        let cols = cols.start..cols.end.min(self.size);
        rows.flat_map(|row| cols.clone().map(move |col| Coord::new(row, col)))
            .filter(|c| !self.erased_unchecked(c))
            .count()
    }
}

impl BoardState {
    /// Flat index of an in-bounds coordinate; engine use only.
    pub(super) fn index(&self, coord: &Coord) -> usize {
        coord.row * self.size + coord.col
    }

    /// Unchecked jump value in the grid; engine use only.
    pub(super) fn value_unchecked(&self, coord: &Coord) -> u32 {
        self.values[self.index(coord)]
    }

    /// Unchecked erased flag in the grid; engine use only.
    pub(super) fn erased_unchecked(&self, coord: &Coord) -> bool {
        self.erased[self.index(coord)]
    }

    /// Unchecked erasure of a cell: marks it erased and zeroes its value; engine use only.
    pub(super) fn erase_unchecked(&mut self, coord: &Coord) -> &mut Self {
        let i = self.index(coord);
        self.erased[i] = true;
        self.values[i] = 0;
        self
    }
}
