/*
 *  The rules of the jump-and-erase puzzle: boards, jumps, and the simulation state the agent searches over.
 */

pub(crate) mod board;
pub(crate) mod consts;
pub mod coords;
pub mod notation;

pub mod prelude {
    pub(crate) use crate::utils::prelude::*;

    pub use super::{
        board::{BoardSnapshot, BoardState, GameBoard, Move, RuleError},
        consts::*,
        coords::{self, *},
        notation::*,
    };
}
