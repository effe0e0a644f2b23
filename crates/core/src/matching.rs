//! Run detection
//!
//! A run is a maximal horizontal or vertical line of at least [`MIN_RUN`]
//! cells holding the same kind. Empty cells never take part in a run.
//! The cells of every run are unioned into a [`MatchSet`], so a cell shared
//! by a row run and a column run is removed (and scored) once.

use std::collections::BTreeSet;

use crate::board::Board;
use crate::types::{TileKind, MIN_RUN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A maximal run of identical tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    pub kind: TileKind,
    pub orientation: Orientation,
    /// Flat index of the top/left cell
    pub start: usize,
    pub len: usize,
}

impl Run {
    /// Flat indices covered by this run on a board with `cols` columns
    pub fn cells(&self, cols: usize) -> impl Iterator<Item = usize> {
        let step = match self.orientation {
            Orientation::Horizontal => 1,
            Orientation::Vertical => cols,
        };
        let start = self.start;
        (0..self.len).map(move |i| start + i * step)
    }
}

/// Set of matched cell indices, deduplicated and ordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MatchSet {
    cells: BTreeSet<usize>,
}

impl MatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, index: usize) -> bool {
        self.cells.insert(index)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells.iter().copied()
    }

    pub fn from_runs(runs: &[Run], cols: usize) -> Self {
        let mut set = Self::new();
        for run in runs {
            set.extend(run.cells(cols));
        }
        set
    }
}

impl Extend<usize> for MatchSet {
    fn extend<T: IntoIterator<Item = usize>>(&mut self, iter: T) {
        self.cells.extend(iter);
    }
}

impl FromIterator<usize> for MatchSet {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// All runs on the board: rows first (top to bottom), then columns (left to right).
pub fn find_runs(board: &Board) -> Vec<Run> {
    let rows = board.rows() as usize;
    let cols = board.cols() as usize;
    let cells = board.cells();
    let mut runs = Vec::new();

    for row in 0..rows {
        scan_line(
            (0..cols).map(|col| row * cols + col),
            cells,
            Orientation::Horizontal,
            &mut runs,
        );
    }
    for col in 0..cols {
        scan_line(
            (0..rows).map(|row| row * cols + col),
            cells,
            Orientation::Vertical,
            &mut runs,
        );
    }

    runs
}

/// Union of every run's cells
pub fn find_matches(board: &Board) -> MatchSet {
    MatchSet::from_runs(&find_runs(board), board.cols() as usize)
}

/// True if the board contains at least one run
pub fn has_match(board: &Board) -> bool {
    !find_runs(board).is_empty()
}

fn scan_line(
    line: impl Iterator<Item = usize>,
    cells: &[Option<TileKind>],
    orientation: Orientation,
    out: &mut Vec<Run>,
) {
    // (kind, start index, length) of the run being extended.
    let mut current: Option<(TileKind, usize, usize)> = None;

    for idx in line {
        current = match (current, cells[idx]) {
            (Some((kind, start, len)), Some(k)) if k == kind => Some((kind, start, len + 1)),
            (prev, cell) => {
                if let Some((kind, start, len)) = prev {
                    push_run(out, kind, orientation, start, len);
                }
                cell.map(|k| (k, idx, 1))
            }
        };
    }

    if let Some((kind, start, len)) = current {
        push_run(out, kind, orientation, start, len);
    }
}

fn push_run(out: &mut Vec<Run>, kind: TileKind, orientation: Orientation, start: usize, len: usize) {
    if len >= MIN_RUN {
        out.push(Run {
            kind,
            orientation,
            start,
            len,
        });
    }
}
