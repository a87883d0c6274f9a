//! Defines the group families of the hexagonal board: the regions of the
//! board within which a numeral may appear at most once, and the neighbor
//! relation derived from them.
//!
//! There are four families.  Three are the straight lines of the hex grid:
//! the horizontal rows and the two diagonal directions, each cutting the
//! board into 9 lines of 2 to 7 cells.  The fourth is the 7 seven-cell
//! clusters.  Every family covers each cell exactly once, and two cells are
//! neighbors exactly when some group contains both.

use super::cell::*;
use super::set::Set;
use crate::define_id_types;
use itertools::Itertools;
use once_cell::sync::Lazy;
use serde::Serialize;

define_id_types! {
    /// Identifies one of the 9 horizontal rows of the board.
    ///
    /// Rows are numbered top to bottom; their lengths are 2, 5, 7, 7, 7, 7,
    /// 7, 5 and 2.
    Row: i8[9];

    /// Identifies one of the 9 lines running diagonally down and to the
    /// right.
    EastDiag: i8[9];

    /// Identifies one of the 9 lines running diagonally down and to the
    /// left.
    WestDiag: i8[9];

    /// Identifies one of the 7 seven-cell clusters.  Cluster 0 is the
    /// centre of the board and the other six surround it.
    Cluster: i8[7];

    /// Identifies one of the 34 groups of the board: the rows, both
    /// diagonal families, and the clusters.
    GroupId: i8[34];
}

/// The seven mutually-adjacent cells at the centre of the board (cluster 0).
/// They form a clique, so assigning them any permutation of the numerals is
/// always consistent.
pub const CENTRE_CELLS: [Cell; 7] = [C17, C18, C23, C24, C25, C30, C31];

/// Member cells of all 34 groups, in `GroupId` order: the 9 rows, then the
/// 9 east diagonals, then the 9 west diagonals, then the 7 clusters.
#[rustfmt::skip]
const GROUP_MEMBERS: [&[i8]; 34] = [
  // Rows, top to bottom.
  &[0, 1],
  &[2, 3, 4, 5, 6],
  &[7, 8, 9, 10, 11, 12, 13],
  &[14, 15, 16, 17, 18, 19, 20],
  &[21, 22, 23, 24, 25, 26, 27],
  &[28, 29, 30, 31, 32, 33, 34],
  &[35, 36, 37, 38, 39, 40, 41],
  &[42, 43, 44, 45, 46],
  &[47, 48],
  // East diagonals, from the top-right corner to the bottom-left.
  &[6, 13],
  &[5, 12, 20, 27, 34],
  &[1, 4, 11, 19, 26, 33, 41],
  &[0, 3, 10, 18, 25, 32, 40],
  &[2, 9, 17, 24, 31, 39, 46],
  &[8, 16, 23, 30, 38, 45, 48],
  &[7, 15, 22, 29, 37, 44, 47],
  &[14, 21, 28, 36, 43],
  &[35, 42],
  // West diagonals, from the top-left corner to the bottom-right.
  &[7, 14],
  &[0, 2, 8, 15, 21],
  &[1, 3, 9, 16, 22, 28, 35],
  &[4, 10, 17, 23, 29, 36, 42],
  &[5, 11, 18, 24, 30, 37, 43],
  &[6, 12, 19, 25, 31, 38, 44],
  &[13, 20, 26, 32, 39, 45, 47],
  &[27, 33, 40, 46, 48],
  &[34, 41],
  // Clusters: the centre first, then its six surrounding clusters.
  &[17, 18, 25, 31, 30, 23, 24],
  &[0, 1, 4, 10, 9, 2, 3],
  &[5, 6, 13, 20, 19, 11, 12],
  &[26, 27, 34, 41, 40, 32, 33],
  &[39, 46, 48, 47, 44, 38, 45],
  &[29, 37, 43, 42, 35, 28, 36],
  &[8, 16, 22, 21, 14, 7, 15],
];

/// Where each family's groups start in `GROUP_MEMBERS`, and how many groups
/// the family has.
const FAMILIES: [(usize, usize); 4] = [(0, 9), (9, 9), (18, 9), (27, 7)];

/// Memoizes every group's cells.  Building this validates the member
/// tables; a malformed table is a programming error and panics.
static CELLS: Lazy<[CellSet; 34]> = Lazy::new(|| {
  for (start, len) in FAMILIES {
    let covered: Vec<i8> = GROUP_MEMBERS[start..start + len]
      .iter()
      .flat_map(|members| members.iter().copied())
      .sorted()
      .collect();
    assert_eq!(
      (0i8..49).collect::<Vec<_>>(),
      covered,
      "group family at {} does not cover the board exactly once",
      start
    );
  }
  std::array::from_fn(|i| {
    let mut cells = CellSet::new();
    for &id in GROUP_MEMBERS[i] {
      cells.insert(Cell::new(id).expect("group member is not a cell"));
    }
    cells
  })
});

/// Ancillary information about cells: the groups a cell belongs to, and its
/// neighbors.
struct Data {
  row: Row,
  east_diag: EastDiag,
  west_diag: WestDiag,
  cluster: Cluster,
  neighbors: CellSet,
}

static DATA: Lazy<[Data; 49]> = Lazy::new(|| {
  // Finds the one group within a family that contains the cell.
  let find = |start: usize, len: usize, cell: Cell| -> i8 {
    let mut found = None;
    for g in 0..len {
      if GROUP_MEMBERS[start + g].contains(&cell.get()) {
        assert!(
          found.is_none(),
          "cell {:?} is in two groups of one family",
          cell
        );
        found = Some(g as i8);
      }
    }
    found.unwrap_or_else(|| panic!("cell {:?} belongs to no group in its family", cell))
  };
  std::array::from_fn(|i| {
    // Safe because from_fn ranges over 0..49.
    let cell = unsafe { Cell::from_index_unchecked(i) };
    let row = Row(find(0, 9, cell));
    let east_diag = EastDiag(find(9, 9, cell));
    let west_diag = WestDiag(find(18, 9, cell));
    let cluster = Cluster(find(27, 7, cell));
    let neighbors =
      (row.cells() | east_diag.cells() | west_diag.cells() | cluster.cells()) - cell.as_set();
    Data {
      row,
      east_diag,
      west_diag,
      cluster,
      neighbors,
    }
  })
});

impl Cell {
  fn data(self) -> &'static Data {
    // Safe because the DATA array ranges over 0..49.
    unsafe { DATA.get_unchecked(self.index()) }
  }

  /// This cell's row.
  pub fn row(self) -> Row {
    self.data().row
  }

  /// This cell's east diagonal.
  pub fn east_diag(self) -> EastDiag {
    self.data().east_diag
  }

  /// This cell's west diagonal.
  pub fn west_diag(self) -> WestDiag {
    self.data().west_diag
  }

  /// This cell's cluster.
  pub fn cluster(self) -> Cluster {
    self.data().cluster
  }

  /// This cell's neighbor cells, meaning the cells that share this cell's
  /// row, either diagonal, or cluster.  A cell has between 13 and 20
  /// neighbors, and the relation is symmetric.
  pub fn neighbors(self) -> CellSet {
    self.data().neighbors
  }
}

/// Common behavior of the group id types.
pub trait Group {
  /// Tells which generic group this is.
  fn group_id(self) -> GroupId;

  /// The cells that this group comprises.
  fn cells(self) -> CellSet;
}

impl GroupId {
  /// The cells that this group comprises.
  pub fn cells(self) -> CellSet {
    // Safe because GroupIds are in 0..34.
    unsafe { *CELLS.get_unchecked(self.index()) }
  }
}

impl Group for Row {
  fn group_id(self) -> GroupId {
    GroupId(self.0)
  }
  fn cells(self) -> CellSet {
    self.group_id().cells()
  }
}

impl Group for EastDiag {
  fn group_id(self) -> GroupId {
    GroupId(9 + self.0)
  }
  fn cells(self) -> CellSet {
    self.group_id().cells()
  }
}

impl Group for WestDiag {
  fn group_id(self) -> GroupId {
    GroupId(18 + self.0)
  }
  fn cells(self) -> CellSet {
    self.group_id().cells()
  }
}

impl Group for Cluster {
  fn group_id(self) -> GroupId {
    GroupId(27 + self.0)
  }
  fn cells(self) -> CellSet {
    self.group_id().cells()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn group_sizes() {
    let sizes: Vec<i32> = GroupId::all().map(|g| g.cells().len()).collect();
    assert_eq!(
      [
        2, 5, 7, 7, 7, 7, 7, 5, 2, // rows
        2, 5, 7, 7, 7, 7, 7, 5, 2, // east diagonals
        2, 5, 7, 7, 7, 7, 7, 5, 2, // west diagonals
        7, 7, 7, 7, 7, 7, 7, // clusters
      ],
      sizes[..]
    );
  }

  #[test]
  fn membership() {
    for cell in Cell::all() {
      assert!(cell.row().cells().contains(cell));
      assert!(cell.east_diag().cells().contains(cell));
      assert!(cell.west_diag().cells().contains(cell));
      assert!(cell.cluster().cells().contains(cell));
    }
  }

  #[test]
  fn neighbors() {
    let mut count_cells = 0;
    for cell in Cell::all() {
      count_cells += 1;
      let neighbors = cell.neighbors();
      assert!(!neighbors.contains(cell));
      assert!(neighbors.len() >= 13 && neighbors.len() <= 20, "{:?}", cell);
      for neighbor in neighbors.iter() {
        // Ensure the unsafe code generates legit cells.
        assert_eq!(Cell::new(neighbor.get()), Some(neighbor));
        // The relation is symmetric.
        assert!(neighbor.neighbors().contains(cell));
        // Neighbors share at least one group.
        assert!(
          cell.row() == neighbor.row()
            || cell.east_diag() == neighbor.east_diag()
            || cell.west_diag() == neighbor.west_diag()
            || cell.cluster() == neighbor.cluster()
        );
      }
      // And non-neighbors share none.
      for other in Cell::all() {
        if other != cell && !neighbors.contains(other) {
          assert!(cell.row() != other.row());
          assert!(cell.east_diag() != other.east_diag());
          assert!(cell.west_diag() != other.west_diag());
          assert!(cell.cluster() != other.cluster());
        }
      }
    }
    assert_eq!(49, count_cells);
  }

  #[test]
  fn centre() {
    // The centre cells are exactly the centre cluster, and form a clique.
    assert_eq!(C24.cluster().cells(), CENTRE_CELLS.iter().copied().collect());
    for &a in &CENTRE_CELLS {
      for &b in &CENTRE_CELLS {
        if a != b {
          assert!(a.neighbors().contains(b));
        }
      }
    }
  }
}
