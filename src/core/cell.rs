//! Defines the Cell type, which identifies the cells of the hexagonal board.

use super::bits::*;
use super::set::Set;
use crate::define_id_types;
use crate::define_set_operators;
use paste::paste;
use seq_macro::seq;
use serde::Serialize;
use std::fmt;

define_id_types! {
    /// Identifies one of the 49 cells of the hexagonal board.
    ///
    /// Boards are represented as length-49 arrays in row-major order over
    /// the nine horizontal rows, whose lengths are 2, 5, 7, 7, 7, 7, 7, 5
    /// and 2.  `Cell(0)` is the left cell of the short top row, and
    /// `Cell(48)` is the right cell of the short bottom row.
    Cell: i8[49];
}

// Constant Cell values, C0 through C48.
seq!(K in 0..49 {
    paste! {
        pub const [<C K>]: Cell = Cell(K);
    }
});

/// Doubled-width hex coordinates for each cell, in cell index order.  These
/// are cosmetic: rendering layers use them to place hexagons on screen, and
/// nothing in the engine reads them.
#[rustfmt::skip]
const COORDS: [(i8, i8); 49] = [
  (-2, -4), (0, -4),
  (-3, -3), (-1, -3), (1, -3), (3, -3), (5, -3),
  (-6, -2), (-4, -2), (-2, -2), (0, -2), (2, -2), (4, -2), (6, -2),
  (-7, -1), (-5, -1), (-3, -1), (-1, -1), (1, -1), (3, -1), (5, -1),
  (-6, 0), (-4, 0), (-2, 0), (0, 0), (2, 0), (4, 0), (6, 0),
  (-5, 1), (-3, 1), (-1, 1), (1, 1), (3, 1), (5, 1), (7, 1),
  (-6, 2), (-4, 2), (-2, 2), (0, 2), (2, 2), (4, 2), (6, 2),
  (-5, 3), (-3, 3), (-1, 3), (1, 3), (3, 3),
  (0, 4), (2, 4),
];

impl Cell {
  /// This cell's doubled-width hex coordinates, for layout purposes.
  pub fn coords(self) -> (i8, i8) {
    // Safe because the COORDS array ranges over 0..49.
    unsafe { *COORDS.get_unchecked(self.index()) }
  }

  /// Returns a singleton set containing just this cell.
  pub fn as_set(self) -> CellSet {
    CellSet::singleton(self)
  }
}

impl fmt::Display for Cell {
  /// Prints this cell as (x, y), its doubled-width hex coordinates.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let (x, y) = self.coords();
    write!(f, "({}, {})", x, y)
  }
}

impl fmt::Debug for Cell {
  /// Prints this cell as Cn, where n is the cell's index.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "C{}", self.0)
  }
}

/// A set of `Cell`s.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct CellSet(pub Bits49);

impl CellSet {
  /// Makes a new empty CellSet.
  pub const fn new() -> Self {
    CellSet(Bits49::ZERO)
  }

  /// Makes a new single-valued CellSet.
  pub fn singleton(cell: Cell) -> Self {
    CellSet(Bits49::singleton(cell.index() as i32))
  }

  /// Makes a new CellSet containing all cells.
  pub const fn all() -> Self {
    CellSet(Bits49::ONES)
  }
}

impl Default for CellSet {
  fn default() -> Self {
    Self::new()
  }
}

impl FromIterator<Cell> for CellSet {
  fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
    let mut set = Self::new();
    for cell in iter {
      set.insert(cell);
    }
    set
  }
}

impl<'a> Set<'a> for CellSet {
  type Item = Cell;
  type Bits = Bits49;

  fn bits(&self) -> &Self::Bits {
    &self.0
  }

  fn mut_bits(&mut self) -> &mut Self::Bits {
    &mut self.0
  }

  fn to_bits_value(&self, item: Self::Item) -> i32 {
    item.index() as i32
  }

  fn from_bits_value(&self, value: i32) -> Self::Item {
    // Safe because Bits49 only returns values in 0..49.
    unsafe { Cell::new_unchecked(value as i8) }
  }
}
define_set_operators!(CellSet);

impl fmt::Debug for CellSet {
  /// Prints this set as a list of cells.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "CellSet(")?;
    let mut prev = false;
    for cell in self.iter() {
      if prev {
        write!(f, ", ")?;
      }
      write!(f, "{:?}", cell)?;
      prev = true;
    }
    write!(f, ")")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn check_eq(set: CellSet, cells: &[Cell]) {
    let contents: Vec<_> = set.iter().collect();
    assert_eq!(contents[..], *cells);
  }

  #[test]
  fn basics() {
    let mut set = CellSet::new();
    assert!(set.insert(C0));
    assert!(set.insert(C1));
    assert!(set.insert(C2));
    check_eq(set, &[C0, C1, C2]);

    assert!(!set.remove(C7));
    assert!(set.remove(C1));
    check_eq(set, &[C0, C2]);
  }

  #[test]
  fn ops() {
    let mut set1 = C48.as_set();
    let mut set2 = C3.as_set();
    let mut set3 = set1 | set2;
    check_eq(set3, &[C3, C48]);
    assert_eq!(set1, set3 ^ set2);

    set1 |= C5.as_set();
    set2 ^= C6.as_set();
    check_eq(set1 & set2, &[]);
    set3 -= set2;
    check_eq(set3, &[C48]);
  }

  #[test]
  fn coords() {
    assert_eq!((-2, -4), C0.coords());
    assert_eq!((0, 0), C24.coords());
    assert_eq!((2, 4), C48.coords());
    // All coordinates are distinct.
    let mut seen = std::collections::HashSet::new();
    for cell in Cell::all() {
      assert!(seen.insert(cell.coords()));
    }
    assert_eq!(49, seen.len());
  }
}
