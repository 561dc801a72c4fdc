// grid.rs - Grid type for Conway's Game of Life

use crate::error::{LifeError, Result};

/// Fixed-size board of cells stored row-major (`index = y * width + x`).
///
/// Generations are installed as whole buffers through [`Grid::set_all`]; there
/// is no per-cell setter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates an all-dead grid. Zero width or height is rejected.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = Self::cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![false; len],
        })
    }

    /// Number of cells in a `width` x `height` grid. Fails on a zero side or
    /// when the buffer length would not fit in `isize`.
    pub fn cell_count(width: usize, height: usize) -> Result<usize> {
        width
            .checked_mul(height)
            .filter(|&len| len != 0 && len <= isize::MAX as usize)
            .ok_or(LifeError::InvalidDimensions { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Stored state of `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics when the coordinate is outside the grid. Neighbor queries go
    /// through [`Grid::alive_or_default`] instead.
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        self.cells[y * self.width + x]
    }

    /// Bounds-checked lookup; anything off the board reads as `default`.
    pub fn alive_or_default(&self, x: isize, y: isize, default: bool) -> bool {
        if x < 0 || y < 0 {
            return default;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return default;
        }
        self.cells[y * self.width + x]
    }

    /// Replaces the whole cell buffer.
    pub fn set_all(&mut self, cells: Vec<bool>) -> Result<()> {
        if cells.len() != self.cells.len() {
            return Err(LifeError::BufferLength {
                expected: self.cells.len(),
                found: cells.len(),
            });
        }
        self.cells = cells;
        Ok(())
    }

    /// Coordinates of every live cell, row-major.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(i, _)| (i % width, i / width))
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Grid of the same dimensions over a buffer the caller built for it.
    pub(crate) fn with_cells(&self, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), self.cells.len());
        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// A dead grid with the same dimensions.
    pub fn blank(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: vec![false; self.cells.len()],
        }
    }
}
