//! Defines the core hexudoku types.
//!
//! Among these are:
//!
//! - Grid: the 49-cell hexagonal board
//! - Num: the 7 numerals that go in the board's cells
//! - Cell: the 49 cells of the board
//! - the group families (rows, diagonals, clusters) and the neighbor
//!   relation derived from them

pub mod bits;
mod cell;
mod grid;
mod groups;
mod id_types;
mod num;
mod set;

pub use cell::*;
pub use grid::*;
pub use groups::*;
pub use num::*;
pub use set::Set;
