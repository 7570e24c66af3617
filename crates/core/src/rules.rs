//! Rules module - neighbor counting and the generation transition
//!
//! The transition reads only from the input grid and writes into a fresh
//! one, so every cell sees the same frozen snapshot of the previous
//! generation.

use crate::grid::Grid;

/// Moore neighborhood offsets, center excluded.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Count live cells among the 8 neighbors of (x, y), wrapping at the edges.
///
/// On grids smaller than 3 in either dimension several offsets wrap onto the
/// same cell (or onto (x, y) itself); each offset is still counted once, so
/// the result never exceeds 8.
pub fn count_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    let (x, y) = (x as isize, y as isize);
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(dx, dy)| grid.get_wrapped(x + dx, y + dy))
        .count() as u8
}

/// Next state of a single cell.
///
/// Alive with exactly 2 neighbors survives; any cell with exactly 3 is alive
/// (survival for live cells, birth for dead ones). Everything else is dead.
#[inline]
pub fn next_cell(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (_, 3))
}

/// Compute the next generation as a new grid with the same dimensions.
pub fn compute_next_state(grid: &Grid) -> Grid {
    let mut next = Grid::new(grid.width(), grid.height());
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let alive = grid.get(x, y).unwrap_or(false);
            let neighbors = count_neighbors(grid, x, y);
            next.set(x, y, next_cell(alive, neighbors));
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_table() {
        for n in 0..=8u8 {
            assert_eq!(next_cell(true, n), n == 2 || n == 3, "alive, n={n}");
            assert_eq!(next_cell(false, n), n == 3, "dead, n={n}");
        }
    }

    #[test]
    fn offsets_exclude_center_and_are_unique() {
        assert!(!NEIGHBOR_OFFSETS.contains(&(0, 0)));
        for (i, a) in NEIGHBOR_OFFSETS.iter().enumerate() {
            for b in &NEIGHBOR_OFFSETS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn single_cell_grid_counts_itself_eight_times() {
        let mut grid = Grid::new(1, 1);
        grid.set(0, 0, true);
        assert_eq!(count_neighbors(&grid, 0, 0), 8);
        assert!(!compute_next_state(&grid).get(0, 0).unwrap());
    }
}
