//! Arc-consistency propagation (AC-3) over the hex board's constraint
//! graph.
//!
//! Every ordered pair (x, y) with y a neighbor of x is an arc meaning "x
//! must stay consistent with y under the not-equal relation."  Because the
//! only constraint is inequality, revising an arc can only ever remove a
//! single numeral from x's domain, and only when y's domain has collapsed
//! to that one numeral.  Propagation runs the classic worklist loop over
//! these arcs until it reaches a fixed point or empties some domain.

pub mod domains;

use crate::core::*;
use domains::Domains;
use std::collections::VecDeque;

/// Marker error for a domain becoming empty during propagation.  This is an
/// expected, recoverable signal: the generator backtracks on it and the
/// reducer rejects the removal that caused it.
#[derive(Debug)]
pub struct Contradiction;

/// Runs propagation to its fixed point.  On success the domains are
/// arc-consistent: no cell's domain holds a numeral ruled out by a fixed
/// neighbor.  Note that arc consistency is necessary but not sufficient for
/// solvability; callers that need a full assignment must search.
pub fn propagate(domains: &mut Domains) -> Result<(), Contradiction> {
  let mut worklist = Worklist::full();
  while let Some((x, y)) = worklist.pop() {
    if revise(domains, x, y) {
      if domains.domain(x).is_empty() {
        return Err(Contradiction);
      }
      worklist.push_arcs_to(x, y);
    }
  }
  Ok(())
}

/// Runs the same fixed-point loop as `propagate`, but may stop early: it
/// returns true as soon as the given cell's domain becomes a singleton,
/// which under this board's topology is enough to force the rest of the
/// grid.  Returns false on contradiction, or when the worklist empties
/// without the cell being forced.
pub fn propagate_until_fixed(domains: &mut Domains, cell: Cell) -> bool {
  if domains.is_fixed(cell) {
    return true;
  }
  let mut worklist = Worklist::full();
  while let Some((x, y)) = worklist.pop() {
    if revise(domains, x, y) {
      if domains.domain(x).is_empty() {
        return false;
      }
      if x == cell && domains.is_fixed(cell) {
        return true;
      }
      worklist.push_arcs_to(x, y);
    }
  }
  false
}

/// Revises the arc (x, y): if y's domain is fixed to a numeral that x's
/// domain still contains, removes that numeral from x.  Tells whether x's
/// domain changed.  At most one numeral can ever be removed per call, since
/// a fixed y rules out exactly one value.
fn revise(domains: &mut Domains, x: Cell, y: Cell) -> bool {
  match domains.domain(y).single() {
    Some(num) => domains.remove(x, num),
    None => false,
  }
}

/// The AC-3 worklist: a FIFO queue of arcs with set semantics, so an arc
/// already awaiting revision is not enqueued twice.  Arc order only affects
/// incidental work, not the fixed point reached.
struct Worklist {
  queue: VecDeque<(Cell, Cell)>,
  queued: [CellSet; 49],
}

impl Worklist {
  /// Makes a worklist holding every arc of the constraint graph.
  fn full() -> Self {
    let mut answer = Worklist {
      queue: VecDeque::with_capacity(Cell::COUNT * 20),
      queued: [CellSet::new(); 49],
    };
    for x in Cell::all() {
      for y in x.neighbors().iter() {
        answer.push(x, y);
      }
    }
    answer
  }

  /// Adds the arc (x, y) unless it's already queued.
  fn push(&mut self, x: Cell, y: Cell) {
    // Safe because `x.index()` is in 0..49.
    if unsafe { self.queued.get_unchecked_mut(x.index()) }.insert(y) {
      self.queue.push_back((x, y));
    }
  }

  /// Removes and returns the oldest queued arc.
  fn pop(&mut self) -> Option<(Cell, Cell)> {
    let (x, y) = self.queue.pop_front()?;
    // Safe because `x.index()` is in 0..49.
    unsafe { self.queued.get_unchecked_mut(x.index()) }.remove(y);
    Some((x, y))
  }

  /// Re-enqueues the arcs (z, x) for every neighbor z of x other than y;
  /// a numeral removed from x may newly constrain x's other neighbors.
  fn push_arcs_to(&mut self, x: Cell, y: Cell) {
    for z in x.neighbors().iter() {
      if z != y {
        self.push(z, x);
      }
    }
  }
}
