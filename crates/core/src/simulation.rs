//! Simulation state: the current generation plus a counter.

use crate::grid::Grid;
use crate::rules::compute_next_state;

#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    generation: u64,
}

impl Simulation {
    /// Start at generation 0 with the given grid.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance one generation. The previous grid is dropped.
    pub fn step(&mut self) {
        self.grid = compute_next_state(&self.grid);
        self.generation += 1;
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_counts_generations() {
        let mut sim = Simulation::new(Grid::new(4, 4));
        assert_eq!(sim.generation(), 0);
        sim.step();
        sim.step();
        assert_eq!(sim.generation(), 2);
        assert_eq!(sim.into_grid(), Grid::new(4, 4));
    }
}
