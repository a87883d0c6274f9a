//! Defines the Grid type, representing the hexagonal board and the
//! assignments of numerals to cells within such a board.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use itertools::Itertools;

use super::*;

/// A hexudoku board: a 49-cell array with each cell holding an optional
/// numeral from 1 through 7.  We model this as a map from `Cell` to
/// `Option<Num>`.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Grid([Option<Num>; 49]);

impl Grid {
  /// Makes an empty Grid.
  pub fn new() -> Grid {
    Grid([None; 49])
  }

  /// Empties the grid.
  pub fn clear(&mut self) {
    self.0.fill(None);
  }

  /// Returns the number of cells that have assigned numerals.
  pub fn len(&self) -> usize {
    self.0.iter().filter(|optional| optional.is_some()).count()
  }

  /// Tells whether no cell has an assigned numeral.
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Iterates the assignments in this grid as (cell, numeral) pairs.
  pub fn iter(&self) -> impl Iterator<Item = (Cell, Num)> + '_ {
    Cell::all()
      .zip(self.0)
      .filter_map(|(cell, optional)| optional.map(|num| (cell, num)))
  }

  /// This grid's state: solved, incomplete, or broken.
  pub fn state(&self) -> GridState {
    let mut broken = CellSet::new();
    // Look for repeated numerals in every group.
    for id in GroupId::all() {
      let mut where_seen: [Option<Cell>; 7] = [None; 7];
      for cell in id.cells().iter() {
        if let Some(num) = self[cell] {
          if let Some(first_cell) = where_seen[num.index()] {
            broken.insert(cell);
            broken.insert(first_cell);
          } else {
            where_seen[num.index()] = Some(cell);
          }
        }
      }
    }
    if broken.is_empty() {
      if self.len() == 49 {
        GridState::Solved(self)
      } else {
        GridState::Incomplete
      }
    } else {
      GridState::Broken(broken)
    }
  }

  /// Clears all cells that have different assignments from `other`.
  pub fn intersect(&mut self, other: &Grid) {
    for cell in Cell::all() {
      if self[cell] != other[cell] {
        self[cell] = None;
      }
    }
  }

  /// Converts this grid to a SolvedGrid when this grid is solved.
  pub fn solved_grid(&self) -> Option<SolvedGrid> {
    self.state().solved_grid()
  }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GridState<'a> {
  Solved(&'a Grid),
  Incomplete,
  Broken(CellSet),
}

impl<'a> GridState<'a> {
  /// When the state is solved, returns a SolvedGrid; otherwise, returns None.
  pub fn solved_grid(&self) -> Option<SolvedGrid> {
    if let GridState::Solved(g) = self {
      // Safe because it's in fact a solved grid.
      unsafe { return Some(SolvedGrid::new(g)) }
    }
    None
  }
}

impl Default for Grid {
  fn default() -> Self {
    Self::new()
  }
}

impl Index<Cell> for Grid {
  type Output = Option<Num>;

  /// Allows `Grid`s to be indexed by `Cell`s.
  fn index(&self, cell: Cell) -> &Option<Num> {
    unsafe {
      // Safe because `cell.index()` is in 0..49.
      self.0.get_unchecked(cell.index())
    }
  }
}

impl IndexMut<Cell> for Grid {
  fn index_mut(&mut self, cell: Cell) -> &mut Option<Num> {
    unsafe {
      // Safe because `cell.index()` is in 0..49.
      self.0.get_unchecked_mut(cell.index())
    }
  }
}

impl fmt::Display for Grid {
  /// Prints this grid in cell index order, with `.` for unassigned cells.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for optional in self.0 {
      match optional {
        Some(num) => num.get().fmt(f)?,
        None => '.'.fmt(f)?,
      }
    }
    Ok(())
  }
}

impl fmt::Debug for Grid {
  /// Prints this grid as Ascii art in the shape of the board.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut first = true;
    for row in Row::all() {
      if !first {
        f.write_str("\n")?;
      }
      first = false;
      let cells = row.cells();
      for _ in cells.len()..7 {
        f.write_str(" ")?;
      }
      let line = cells
        .iter()
        .map(|cell| match self[cell] {
          Some(num) => num.to_string(),
          None => ".".to_string(),
        })
        .join(" ");
      f.write_str(&line)?;
    }
    Ok(())
  }
}

impl FromStr for Grid {
  type Err = String;

  /// Constructs a Grid from a string, which must contain exactly 49
  /// cell characters, plus any number of other characters.
  ///
  /// A cell character is `1` through `7`, signifying an assignment of
  /// that numeral to the corresponding cell, or `0` or `.`, signifying
  /// that the cell is blank.
  ///
  /// This method ignores all non-digit characters, which means that strings
  /// in both of Grid's Display and Debug forms are correctly parsed back
  /// into the original grid.
  fn from_str(s: &str) -> Result<Grid, String> {
    let mut i = 0;
    let mut grid = Grid::new();
    for c in s.chars() {
      if c.is_ascii_digit() || c == '.' {
        if i >= Cell::COUNT {
          return Err(format!("More than 49 cells in {}", s));
        }
        if c != '0' && c != '.' {
          // 0 and . are placeholders meaning a blank cell.
          let digit = c.to_digit(10).unwrap() as i8;
          match Num::new(digit) {
            Some(num) => grid.0[i] = Some(num),
            None => return Err(format!("{} is not a hexudoku numeral in {}", c, s)),
          }
        }
        i += 1
      }
    }
    if i == Cell::COUNT {
      Ok(grid)
    } else {
      Err(format!("Fewer than 49 cells in {}", s))
    }
  }
}

/// A solved hexudoku board: a 49-cell array with each cell holding a numeral
/// from 1 through 7, and each row, diagonal, and cluster containing no
/// numeral twice.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SolvedGrid([Num; 49]);

impl SolvedGrid {
  /// Makes a SolvedGrid from a Grid.
  ///
  /// # Safety
  ///
  /// Callers must ensure that the Grid's state is Solved.
  pub unsafe fn new(grid: &Grid) -> SolvedGrid {
    // Note we use the fact that Option<Num> and Num have the same single-byte
    // representation when there is actually a Num present.
    let p = (&grid.0).as_ptr() as *const [Num; 49];
    SolvedGrid(*p)
  }

  /// Converts back to Grid.  This always works.
  pub fn grid(&self) -> Grid {
    unsafe {
      // Safe because Num always converts cleanly to Option<Num>.
      let p = (&self.0).as_ptr() as *const [Option<Num>; 49];
      Grid(*p)
    }
  }
}

impl From<&SolvedGrid> for Grid {
  fn from(value: &SolvedGrid) -> Grid {
    value.grid()
  }
}

impl TryFrom<&Grid> for SolvedGrid {
  type Error = &'static str;

  fn try_from(value: &Grid) -> Result<Self, Self::Error> {
    value.solved_grid().ok_or("Grid is not solved")
  }
}

impl Index<Cell> for SolvedGrid {
  type Output = Num;

  /// Allows `SolvedGrid`s to be indexed by `Cell`s.
  fn index(&self, cell: Cell) -> &Num {
    unsafe {
      // Safe because `cell.index()` is in 0..49.
      self.0.get_unchecked(cell.index())
    }
  }
}

impl fmt::Display for SolvedGrid {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.grid(), f)
  }
}

impl fmt::Debug for SolvedGrid {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Debug::fmt(&self.grid(), f)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::str::FromStr;

  /// A full, valid board used as a fixture.
  const SOLVED: &str = "1234512126734534512676734512126734534512676734567";

  #[test]
  /// Ensures that Option<Num> occupies a single byte.
  fn sized_correctly() {
    use std::mem::size_of;
    assert_eq!(size_of::<Grid>(), Cell::COUNT);
    // Just to validate that size_of works as expected:
    assert_eq!(size_of::<Option<Cell>>(), 2);
  }

  #[test]
  fn clear() {
    let mut grid = Grid::new();
    assert_eq!(grid.len(), 0);
    grid[C24] = Some(N5);
    assert_eq!(grid.len(), 1);
    let grid2 = grid;
    grid.clear();
    assert_eq!(grid.len(), 0);
    assert_eq!(grid2.len(), 1);
  }

  #[test]
  fn order_and_equality() {
    let mut g1 = Grid::new();
    let mut g2 = Grid::new();
    assert_eq!(g1, g2);

    g1[C1] = Some(N5);
    g2[C1] = Some(N1);
    assert!(g2 < g1);
    assert!(g1 > g2);

    g2[C0] = Some(N2);
    assert!(g2 > g1);
    assert!(g1 < g2);

    g1 = g2;
    assert_eq!(g1, g2);
    assert_eq!(g2.len(), 2);
  }

  #[test]
  fn strings() {
    let g = SOLVED.parse::<Grid>().unwrap();
    assert_eq!(SOLVED, g.to_string());
    assert_eq!(SOLVED, format!("{}", g));
    let s2 = format!("{:?}", g);
    assert_ne!(s2, SOLVED);
    assert_eq!(
      s2, // Note: not a formatting oversight!
      r"
     1 2
  3 4 5 1 2
1 2 6 7 3 4 5
3 4 5 1 2 6 7
6 7 3 4 5 1 2
1 2 6 7 3 4 5
3 4 5 1 2 6 7
  6 7 3 4 5
     6 7"[1..]
    );
    let g2 = s2.parse::<Grid>().unwrap();
    assert_eq!(g, g2);
  }

  #[test]
  fn from_str_errors() {
    assert!(Grid::from_str(&SOLVED[..48]).is_err());
    assert!(Grid::from_str(&format!("{}1", SOLVED)).is_err());
    assert!(Grid::from_str(&SOLVED.replace('3', "9")).is_err());
  }

  #[test]
  fn state() {
    // Writing 7 into the first cell collides with cell 10, the only
    // neighbor of cell 0 holding a 7.
    let g = format!("7{}", &SOLVED[1..]).parse::<Grid>().unwrap();
    assert_eq!(GridState::Broken(C0.as_set() | C10.as_set()), g.state());

    let g = Grid::new();
    assert_eq!(GridState::Incomplete, g.state());
    let g = format!(".{}", &SOLVED[1..]).parse::<Grid>().unwrap();
    assert_eq!(GridState::Incomplete, g.state());

    let g = SOLVED.parse::<Grid>().unwrap();
    assert_eq!(GridState::Solved(&g), g.state());
    assert!(g.solved_grid().is_some());
  }

  #[test]
  fn solved_grid_round_trip() {
    let g = SOLVED.parse::<Grid>().unwrap();
    let solved = g.solved_grid().unwrap();
    assert_eq!(g, solved.grid());
    assert_eq!(N1, solved[C0]);
    assert_eq!(N7, solved[C48]);
    assert_eq!(SOLVED, solved.to_string());
  }
}
