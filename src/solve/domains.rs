//! Defines the Domains struct that the propagation engine and the puzzle
//! generator operate on.

use crate::core::*;

/// The candidate domains of all 49 cells, the working state of generation
/// and reduction.
///
/// This is a plain `Copy` value: speculative work happens on a copy, and a
/// failed branch is discarded rather than undone.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Domains([NumSet; 49]);

impl Domains {
  /// Makes a Domains with every cell's domain wide open.
  pub fn unconstrained() -> Domains {
    Domains([NumSet::all(); 49])
  }

  /// Makes a Domains where every cell is fixed to its value in the given
  /// solved grid.
  pub fn from_solved(solved: &SolvedGrid) -> Domains {
    let mut answer = Self::unconstrained();
    for cell in Cell::all() {
      answer.fix(cell, solved[cell]);
    }
    answer
  }

  /// Makes a Domains where every clue cell of the given grid is fixed to
  /// its numeral and every blank cell is wide open.  Note that this does not
  /// check the clues against each other; inconsistent clues surface as a
  /// contradiction during propagation.
  pub fn from_clues(clues: &Grid) -> Domains {
    let mut answer = Self::unconstrained();
    for (cell, num) in clues.iter() {
      answer.fix(cell, num);
    }
    answer
  }

  /// The given cell's domain.
  pub fn domain(&self, cell: Cell) -> NumSet {
    // Safe because `cell.index()` is in 0..49.
    unsafe { *self.0.get_unchecked(cell.index()) }
  }

  /// Narrows the given cell's domain to a single numeral.
  pub fn fix(&mut self, cell: Cell, num: Num) {
    // Safe because `cell.index()` is in 0..49.
    unsafe { *self.0.get_unchecked_mut(cell.index()) = num.as_set() }
  }

  /// Widens the given cell's domain back to all numerals.
  pub fn widen(&mut self, cell: Cell) {
    // Safe because `cell.index()` is in 0..49.
    unsafe { *self.0.get_unchecked_mut(cell.index()) = NumSet::all() }
  }

  /// Removes one numeral from the given cell's domain.  Tells whether it
  /// was present.
  pub fn remove(&mut self, cell: Cell, num: Num) -> bool {
    // Safe because `cell.index()` is in 0..49.
    unsafe { self.0.get_unchecked_mut(cell.index()).remove(num) }
  }

  /// Tells whether the given cell's domain holds exactly one numeral.
  pub fn is_fixed(&self, cell: Cell) -> bool {
    self.domain(cell).single().is_some()
  }

  /// Tells whether every cell's domain holds exactly one numeral.
  pub fn is_complete(&self) -> bool {
    Cell::all().all(|cell| self.is_fixed(cell))
  }

  /// The cells whose domains still hold more than one numeral.
  pub fn open_cells(&self) -> Vec<Cell> {
    Cell::all().filter(|&cell| !self.is_fixed(cell)).collect()
  }

  /// Renders the domains as a grid, leaving blank any cells that don't have
  /// a single possible numeral.
  pub fn to_grid(&self) -> Grid {
    let mut answer = Grid::new();
    for cell in Cell::all() {
      if let Some(num) = self.domain(cell).single() {
        answer[cell] = Some(num);
      }
    }
    answer
  }
}
