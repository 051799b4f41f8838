use itertools::Itertools;

use super::BoardState;
use crate::jump_erase::prelude::*;

impl BoardState {
    /// Pretty-prints the board: the player as `*`, erased cells blank, and open cells by value.
    pub fn pretty(&self) -> String {
        let width = self.values.iter().max().map_or(1, |v| v.to_string().len());
        (0..self.size).map(|row| {
            (0..self.size).map(|col| {
                let coord = Coord::new(row, col);
                if coord == self.position {
                    format!(" {:>width$} ", "*")
                } else if self.erased_unchecked(&coord) {
                    format!(" {:>width$} ", "")
                } else {
                    format!(" {:>width$} ", self.value_unchecked(&coord))
                }
            }).join("")
        }).join("\n")
    }
}
