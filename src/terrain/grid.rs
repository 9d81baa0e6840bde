//! The dig site: a fixed `rows × cols` array of plots.
//!
//! The grid is filled once, in row-major order, through
//! [`Grid::place_next`]. Reads and mutations address cells by unsigned
//! `(row, col)`; callers turn a signed [`Position`] into a cell with
//! [`Grid::locate`], which is the bounds check of the dig protocol.

use serde::{Deserialize, Serialize};

use super::plot::Plot;
use crate::core::Position;
use crate::error::SetupError;

/// Upper bound on plots reserved up front; larger grids grow as they fill.
const PREALLOCATED_PLOTS: usize = 4096;

/// Fixed-size grid of plots stored row-major.
///
/// ## Example
///
/// ```
/// use dig_contest::core::Position;
/// use dig_contest::terrain::Grid;
///
/// let mut grid = Grid::new(2, 2).unwrap();
/// for worth in [10, 0, 5, 0] {
///     grid.place_next(worth).unwrap();
/// }
///
/// assert_eq!(grid.total_wealth(), 15);
/// assert_eq!(grid.locate(Position::new(1, 0)), Some((1, 0)));
/// assert_eq!(grid.locate(Position::new(-1, 0)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    capacity: usize,
    plots: Vec<Plot>,
}

impl Grid {
    /// Create an empty grid with room for `rows × cols` plots.
    pub fn new(rows: usize, cols: usize) -> Result<Self, SetupError> {
        let capacity = rows
            .checked_mul(cols)
            .ok_or(SetupError::GridTooLarge { rows, cols })?;
        Ok(Self {
            rows,
            cols,
            capacity,
            plots: Vec::with_capacity(capacity.min(PREALLOCATED_PLOTS)),
        })
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of plots placed so far.
    #[must_use]
    pub fn placed(&self) -> usize {
        self.plots.len()
    }

    /// True once every cell holds a plot.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.plots.len() == self.capacity()
    }

    /// Fill the next empty cell in row-major order.
    pub fn place_next(&mut self, worth: u32) -> Result<(), SetupError> {
        if self.is_complete() {
            return Err(SetupError::GridFull {
                capacity: self.capacity(),
            });
        }
        self.plots.push(Plot::new(worth));
        Ok(())
    }

    /// Fail unless every cell has been placed.
    pub fn ensure_complete(&self) -> Result<(), SetupError> {
        if self.is_complete() {
            Ok(())
        } else {
            Err(SetupError::GridIncomplete {
                placed: self.placed(),
                capacity: self.capacity(),
            })
        }
    }

    /// Cell coordinates of `position`, or `None` if it lies off the grid.
    #[must_use]
    pub fn locate(&self, position: Position) -> Option<(usize, usize)> {
        let row = usize::try_from(position.row).ok()?;
        let col = usize::try_from(position.col).ok()?;
        (row < self.rows && col < self.cols).then_some((row, col))
    }

    /// The plot at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the cell is out of bounds or not yet placed.
    #[must_use]
    pub fn plot(&self, row: usize, col: usize) -> &Plot {
        &self.plots[self.index(row, col)]
    }

    /// Treasure still buried at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the cell is out of bounds or not yet placed.
    #[must_use]
    pub fn treasure_worth(&self, row: usize, col: usize) -> u32 {
        self.plot(row, col).worth()
    }

    /// Times `(row, col)` has been dug.
    ///
    /// # Panics
    ///
    /// Panics if the cell is out of bounds or not yet placed.
    #[must_use]
    pub fn dig_count(&self, row: usize, col: usize) -> u32 {
        self.plot(row, col).times_dug()
    }

    /// Take the treasure at `(row, col)` and count the dig.
    ///
    /// # Panics
    ///
    /// Panics if the cell is out of bounds or not yet placed.
    pub fn remove_treasure(&mut self, row: usize, col: usize) {
        let index = self.index(row, col);
        self.plots[index].remove_treasure();
    }

    /// Sum of every treasure still buried.
    #[must_use]
    pub fn total_wealth(&self) -> u64 {
        self.plots.iter().map(|p| u64::from(p.worth())).sum()
    }

    /// Same-shaped map, true where treasure remains.
    #[must_use]
    pub fn treasure_map(&self) -> TreasureMap {
        TreasureMap {
            rows: self.rows,
            cols: self.cols,
            cells: self.plots.iter().map(Plot::has_treasure).collect(),
        }
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }
}

/// Boolean snapshot of where treasure remains.
///
/// Renders one line per row, `*` for treasure and `-` for an empty plot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasureMap {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl TreasureMap {
    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// True if treasure remains at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the cell is out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(row < self.rows && col < self.cols, "cell ({row}, {col}) out of bounds");
        self.cells[row * self.cols + col]
    }

    /// True if any treasure remains anywhere.
    #[must_use]
    pub fn any(&self) -> bool {
        self.cells.iter().any(|&c| c)
    }

    /// Iterate rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.cols.max(1))
    }

    /// Cells whose value differs between two maps of the same shape.
    #[must_use]
    pub fn diff(&self, other: &Self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .zip(&other.cells)
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| (i / self.cols, i % self.cols))
            .collect()
    }
}

impl std::fmt::Display for TreasureMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.iter_rows() {
            for &cell in row {
                f.write_str(if cell { "*" } else { "-" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
