//! Grid module - the toroidal cell field
//!
//! A `width x height` field of live/dead cells stored in a flat, row-major
//! vector (`y * width + x`). Dimensions are fixed at construction.
//! Coordinates: (x, y) where x is the column (left to right) and y the row
//! (top to bottom).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::types::LifeConfig;

/// Rejected row data when building a grid from nested vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid must have at least one row and one column")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// A generation of the simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-dead grid.
    ///
    /// Zero dimensions are clamped to 1 so that wrapped lookups stay defined.
    pub fn new(width: usize, height: usize) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// All-dead grid sized from `config`.
    pub fn empty(config: &LifeConfig) -> Self {
        Self::new(config.width, config.height)
    }

    /// Randomly seeded grid: each cell is alive with probability `config.density`.
    pub fn random<R: Rng + ?Sized>(config: &LifeConfig, rng: &mut R) -> Self {
        let mut grid = Self::empty(config);
        // gen_bool panics outside [0, 1]; config fields are public.
        let density = if config.density.is_finite() {
            config.density.clamp(0.0, 1.0)
        } else {
            0.0
        };
        for cell in &mut grid.cells {
            *cell = rng.gen_bool(density);
        }
        grid
    }

    /// Reproducible variant of [`Grid::random`].
    pub fn seeded(config: &LifeConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::random(config, &mut rng)
    }

    /// Build from rows of cells; every row must have the same non-zero length.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row, cells_in_row) in rows.into_iter().enumerate() {
            if cells_in_row.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found: cells_in_row.len(),
                });
            }
            cells.extend(cells_in_row);
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Convert back to nested rows.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.rows().map(<[bool]>::to_vec).collect()
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at (x, y). Returns None if out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Set cell at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = alive;
                true
            }
            None => false,
        }
    }

    /// Toroidal lookup: any coordinate is reduced modulo the grid dimensions.
    #[inline]
    pub fn get_wrapped(&self, x: isize, y: isize) -> bool {
        let wx = x.rem_euclid(self.width as isize) as usize;
        let wy = y.rem_euclid(self.height as isize) as usize;
        self.cells[wy * self.width + wx]
    }

    /// Flat row-major view of all cells.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}
