// simulator.rs - Neighbor counting and the B3/S23 generation step

use crate::grid::Grid;

/// The 8 compass offsets `(dx, dy)` around a cell.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Live cells among the 8 neighbors of `(x, y)`; off-grid cells are dead.
pub fn count_alive_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    let (x, y) = (x as isize, y as isize);
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(dx, dy)| grid.alive_or_default(x + dx, y + dy, false))
        .count() as u8
}

pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

/// Next state of row `y`, read from `current` only.
pub fn next_row(current: &Grid, y: usize) -> Vec<bool> {
    (0..current.width())
        .map(|x| next_state(current.is_alive(x, y), count_alive_neighbors(current, x, y)))
        .collect()
}

/// Computes the next generation into a fresh buffer; `current` is never written.
pub fn step(current: &Grid) -> Grid {
    let mut cells = Vec::with_capacity(current.len());
    for y in 0..current.height() {
        cells.extend(next_row(current, y));
    }

    current.with_cells(cells)
}
