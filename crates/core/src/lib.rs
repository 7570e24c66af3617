//! Core simulation logic - pure, deterministic, and testable
//!
//! This crate holds the grid and the Game of Life transition. It has no
//! dependencies on terminals or timing, which keeps it:
//!
//! - **Deterministic**: the same input grid always yields the same next grid
//! - **Testable**: rule behavior is checked without any I/O
//! - **Portable**: usable from the terminal driver, benches, or tests
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size toroidal field with random and seeded initialization
//! - [`rules`]: neighbor counting and `compute_next_state`
//! - [`simulation`]: current generation plus a generation counter
//!
//! # Rules
//!
//! Standard B3/S23: a live cell with 2 or 3 live neighbors survives, a dead
//! cell with exactly 3 is born, every other cell is dead in the next
//! generation. Edges wrap in both directions.
//!
//! # Example
//!
//! ```
//! use tui_life_core::{compute_next_state, Grid};
//!
//! // Horizontal blinker.
//! let mut grid = Grid::new(5, 5);
//! for x in 1..=3 {
//!     grid.set(x, 2, true);
//! }
//!
//! let next = compute_next_state(&grid);
//! assert_eq!(next.population(), 3);
//! assert_eq!(next.get(2, 1), Some(true));
//! assert_eq!(next.get(2, 3), Some(true));
//! ```

pub mod grid;
pub mod rules;
pub mod simulation;

pub use tui_life_types as types;

pub use grid::{Grid, GridError};
pub use rules::{compute_next_state, count_neighbors, next_cell};
pub use simulation::Simulation;

use rand::Rng;

use crate::types::LifeConfig;

/// Build the starting grid: each cell alive with probability `config.density`.
pub fn initialize_grid<R: Rng + ?Sized>(config: &LifeConfig, rng: &mut R) -> Grid {
    Grid::random(config, rng)
}
