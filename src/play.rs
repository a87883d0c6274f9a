//! Play-time validation and hints for a puzzle in progress.

use crate::core::*;
use crate::gen::PuzzleDesc;

/// One puzzle being played: the player's working grid and the solved grid
/// it must reach.  The UI owns the moves; it writes them straight into the
/// working grid, and this type only ever reads it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Session {
  working: Grid,
  solution: SolvedGrid,
}

/// What a hint scan found.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Hint {
  /// A filled cell whose numeral disagrees with the solution.  The numeral
  /// itself is not revealed.
  Mistake(Cell),
  /// A blank cell with a single remaining candidate, and that candidate.
  Forced(Cell, Num),
}

impl Session {
  /// Makes a session from a working grid and its solution.  Use this both
  /// for fresh puzzles (passing the puzzle grid as the working grid) and
  /// for resuming a game the host application persisted.
  pub fn new(working: Grid, solution: SolvedGrid) -> Session {
    Session { working, solution }
  }

  /// The player's grid.
  pub fn working(&self) -> &Grid {
    &self.working
  }

  /// The player's grid, for the UI to write moves into.
  pub fn working_mut(&mut self) -> &mut Grid {
    &mut self.working
  }

  /// The solved grid this session is playing toward.
  pub fn solution(&self) -> &SolvedGrid {
    &self.solution
  }

  /// Tells whether the player has filled every cell with its solved
  /// numeral.  Blank cells never satisfy this.
  pub fn is_solved(&self) -> bool {
    Cell::all().all(|cell| self.working[cell] == Some(self.solution[cell]))
  }

  /// Finds something to tell the player: the first mistake if there is one,
  /// otherwise the first blank cell whose numeral is forced by its direct
  /// neighbors alone.
  ///
  /// The forced-cell scan is a single pass over direct neighbors, with no
  /// transitive reasoning.  It is weaker than full propagation and can come
  /// up empty even when deeper reasoning would force a cell.
  pub fn hint(&self) -> Option<Hint> {
    for cell in Cell::all() {
      if let Some(num) = self.working[cell] {
        if num != self.solution[cell] {
          return Some(Hint::Mistake(cell));
        }
      }
    }
    for cell in Cell::all() {
      if self.working[cell].is_none() {
        if let Some(num) = self.candidates(cell).single() {
          return Some(Hint::Forced(cell, num));
        }
      }
    }
    None
  }

  /// The numerals the given cell could hold without directly clashing with
  /// a neighbor.
  fn candidates(&self, cell: Cell) -> NumSet {
    let mut answer = NumSet::all();
    for neighbor in cell.neighbors().iter() {
      if let Some(num) = self.working[neighbor] {
        answer.remove(num);
      }
    }
    answer
  }
}

impl From<&PuzzleDesc> for Session {
  fn from(desc: &PuzzleDesc) -> Session {
    Session::new(desc.puzzle, desc.solution)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::gen::new_puzzle;
  use std::str::FromStr;

  const SOLVED: &str = "1234512126734534512676734512126734534512676734567";

  /// SOLVED with 17 cells blanked such that no cell is forced by its direct
  /// neighbors.
  const STALLED: &str = "1230012120730034512676730012120730030012070730007";

  fn session(working: &str) -> Session {
    let solution = SOLVED.parse::<Grid>().unwrap().solved_grid().unwrap();
    Session::new(Grid::from_str(working).unwrap(), solution)
  }

  #[test]
  fn mistakes_come_first() {
    // Cell 5's true numeral is 1; write a 2 there and blank a cell that
    // would otherwise yield a forced-cell hint.
    let mut s = format!("{}", SOLVED);
    s.replace_range(5..6, "2");
    s.replace_range(24..25, "0");
    let session = session(&s);
    assert!(!session.is_solved());
    assert_eq!(Some(Hint::Mistake(C5)), session.hint());
  }

  #[test]
  fn forced_cell_hint() {
    let s = format!("{}0{}", &SOLVED[..24], &SOLVED[25..]);
    let session = session(&s);
    // Every neighbor of the blank centre cell is filled, so only its solved
    // numeral remains.
    assert_eq!(Some(Hint::Forced(C24, N4)), session.hint());
  }

  #[test]
  fn hint_comes_up_empty_when_nothing_is_forced() {
    assert_eq!(None, session(STALLED).hint());
  }

  #[test]
  fn hint_on_generated_puzzles() {
    for seed in [2, 13, 77] {
      let desc = new_puzzle(20, seed);
      let mut session = Session::from(&desc);
      // No mistakes yet, so the hint (if any) reveals a solved numeral at a
      // blank cell.  A freshly reduced puzzle always propagates, so its
      // first propagation step is available to the single-step scan.
      match session.hint() {
        Some(Hint::Forced(cell, num)) => {
          assert_eq!(None, session.working()[cell]);
          assert_eq!(desc.solution[cell], num);
        }
        other => panic!("expected a forced-cell hint, got {:?}", other),
      }

      // Spoil one clue and the mistake wins.
      let clue = Cell::all().find(|&c| desc.puzzle[c].is_some()).unwrap();
      let num = desc.solution[clue];
      let wrong = Num::all().find(|&n| n != num).unwrap();
      session.working_mut()[clue] = Some(wrong);
      assert_eq!(Some(Hint::Mistake(clue)), session.hint());
    }
  }

  #[test]
  fn is_solved_flips_on_the_last_cell() {
    let solution = SOLVED.parse::<Grid>().unwrap().solved_grid().unwrap();
    let s = format!("{}0{}", &SOLVED[..24], &SOLVED[25..]);
    let mut session = Session::new(Grid::from_str(&s).unwrap(), solution);
    assert!(!session.is_solved());
    assert!(!session.is_solved()); // unchanged grid, unchanged answer

    session.working_mut()[C24] = Some(N4);
    assert!(session.is_solved());

    session.working_mut()[C24] = Some(N5);
    assert!(!session.is_solved());
  }

  #[test]
  fn blanks_never_count_as_solved() {
    let session = session(&format!(".{}", &SOLVED[1..]));
    assert!(!session.is_solved());
    assert!(session.hint().is_some());
  }
}
