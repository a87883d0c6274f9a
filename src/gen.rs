//! Puzzle generation: solved-grid search and clue reduction.

use crate::core::*;
use crate::random::*;
use crate::solve::domains::Domains;
use crate::solve::{propagate, propagate_until_fixed};
use log::debug;
use std::time::Instant;

/// A generated puzzle: the clues the player starts from, the solved grid
/// they must reach, and the seed that produced both.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PuzzleDesc {
  pub puzzle: Grid,
  pub solution: SolvedGrid,
  pub seed: u64,
}

/// Generates a puzzle from the given seed, blanking at most `blanks_target`
/// cells.  The same seed and target always produce the same puzzle.
pub fn new_puzzle(blanks_target: i32, seed: u64) -> PuzzleDesc {
  let mut random = new_random(seed);
  let start = Instant::now();
  let solution = gen_solved_grid(&mut random);
  debug!("filled the grid in {:?}", start.elapsed());
  let start = Instant::now();
  let puzzle = reduce_clues(&solution, blanks_target, &mut random);
  debug!(
    "removed {} clues in {:?}",
    49 - puzzle.len(),
    start.elapsed()
  );
  PuzzleDesc {
    puzzle,
    solution,
    seed,
  }
}

/// Produces a full, valid grid by randomized backtracking with propagation
/// pruning.
///
/// The centre cells form a clique, so they take a random permutation of the
/// numerals directly, skipping needless search.  After that the search
/// repeatedly picks a random open cell, tries its candidate numerals in
/// random order, and recurses on a propagated copy of the domains.
///
/// # Panics
///
/// Panics if the search exhausts the space without completing the grid.
/// With a connected, 7-colorable graph and a valid clique seed this cannot
/// happen; hitting it means the group tables are malformed.
pub fn gen_solved_grid<R: Rng>(random: &mut R) -> SolvedGrid {
  let mut domains = Domains::unconstrained();
  let mut centre = CENTRE_CELLS;
  centre.shuffle(random);
  for (i, &cell) in centre.iter().enumerate() {
    // Safe because the centre holds 7 cells.
    domains.fix(cell, unsafe { Num::from_index_unchecked(i) });
  }
  propagate(&mut domains).expect("the centre clique fill contradicted itself");

  let domains = fill_open_cells(domains, random).expect("search exhausted without a solved grid");
  domains
    .to_grid()
    .solved_grid()
    .expect("complete domains produced an unsolved grid")
}

/// The recursive step of `gen_solved_grid`.  Takes the domain vector by
/// value; each candidate numeral is tried on an independent copy, so a
/// failed branch is simply dropped.
fn fill_open_cells<R: Rng>(domains: Domains, random: &mut R) -> Option<Domains> {
  let open = domains.open_cells();
  if open.is_empty() {
    return Some(domains);
  }
  let cell = open[random.random_range(0..open.len())];
  let mut nums: Vec<Num> = domains.domain(cell).iter().collect();
  nums.shuffle(random);
  for num in nums {
    let mut branch = domains;
    branch.fix(cell, num);
    if propagate(&mut branch).is_ok() {
      if let Some(filled) = fill_open_cells(branch, random) {
        return Some(filled);
      }
    }
  }
  None
}

/// Blanks up to `blanks_target` cells of the given solved grid while
/// keeping the puzzle solvable by propagation alone.
///
/// Candidate cells are tried in a random order, and each candidate consumes
/// one unit of the target whether or not its removal sticks; removals are
/// never revisited.  The result is not a minimal puzzle, but producing it
/// is fast and it always propagates back to `solution`.
///
/// Note that "solvable by propagation" is all this guarantees: the check
/// re-derives the stored solution, it does not prove the puzzle has a
/// unique solution under unrestricted search.
pub fn reduce_clues<R: Rng>(solution: &SolvedGrid, blanks_target: i32, random: &mut R) -> Grid {
  let mut domains = Domains::from_solved(solution);
  let mut order: Vec<Cell> = Cell::all().collect();
  order.shuffle(random);

  let mut remaining = blanks_target.max(0);
  let mut next = 0;

  // Fast path: blanking a first handful of scattered cells all at once
  // almost always leaves the grid recoverable, so try them as a batch and
  // fall back to one-by-one testing if that fails.
  let batch = remaining.min(7) as usize;
  if batch > 0 {
    for &cell in &order[..batch] {
      domains.widen(cell);
    }
    let mut probe = domains;
    if propagate(&mut probe).is_ok() && probe.is_complete() {
      remaining -= batch as i32;
      next = batch;
    } else {
      domains = Domains::from_solved(solution);
    }
  }

  while remaining > 0 && next < order.len() {
    let cell = order[next];
    next += 1;
    remaining -= 1;
    domains.widen(cell);
    let mut probe = domains;
    if propagate(&mut probe).is_err() || !propagate_until_fixed(&mut probe, cell) {
      // The removal is not recoverable; put the clue back for good.
      domains.fix(cell, solution[cell]);
    }
  }
  domains.to_grid()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn solved_grids_are_valid() {
    for seed in [0, 1, 17, 1328] {
      let mut random = new_random(seed);
      let solution = gen_solved_grid(&mut random);
      let grid = solution.grid();
      // A SolvedGrid has a numeral everywhere; state() checks every group
      // for repeats.
      assert_eq!(49, grid.len());
      assert_eq!(GridState::Solved(&grid), grid.state());
      for cell in Cell::all() {
        for neighbor in cell.neighbors().iter() {
          assert_ne!(solution[cell], solution[neighbor]);
        }
      }
    }
  }

  #[test]
  fn puzzles_are_reproducible() {
    let a = new_puzzle(15, 1328);
    let b = new_puzzle(15, 1328);
    assert_eq!(a, b);

    let c = new_puzzle(15, 1329);
    assert_ne!(a.puzzle, c.puzzle);
  }

  #[test]
  fn zero_target_blanks_nothing() {
    let desc = new_puzzle(0, 42);
    assert_eq!(desc.solution.grid(), desc.puzzle);
  }

  #[test]
  fn blank_count_is_bounded() {
    for (target, seed) in [(1, 3), (7, 4), (15, 5), (30, 6), (49, 7), (120, 8)] {
      let desc = new_puzzle(target, seed);
      let blanks = 49 - desc.puzzle.len() as i32;
      assert!(blanks <= target.min(49), "{} blanks for target {}", blanks, target);
      // The kept clues agree with the solution.
      for (cell, num) in desc.puzzle.iter() {
        assert_eq!(desc.solution[cell], num);
      }
    }
  }

  #[test]
  fn puzzles_propagate_back_to_their_solution() {
    for (target, seed) in [(15, 9), (30, 10), (49, 11)] {
      let desc = new_puzzle(target, seed);
      let mut domains = Domains::from_clues(&desc.puzzle);
      propagate(&mut domains).unwrap();
      assert!(domains.is_complete());
      assert_eq!(desc.solution.grid(), domains.to_grid());
    }
  }

  #[test]
  fn full_removal_leaves_a_puzzle() {
    // Even asking for all 49 cells leaves enough clues to propagate from.
    let desc = new_puzzle(49, 12);
    let blanks = 49 - desc.puzzle.len();
    assert!(blanks > 0);
    assert!(desc.puzzle.len() > 0);
  }

  #[test]
  fn reduction_is_seed_stable() {
    let solution = gen_solved_grid(&mut new_random_str("reduce"));
    let a = reduce_clues(&solution, 20, &mut new_random_str("order"));
    let b = reduce_clues(&solution, 20, &mut new_random_str("order"));
    assert_eq!(a, b);
  }
}
