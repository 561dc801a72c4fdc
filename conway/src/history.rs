// history.rs - Detects when the simulation has settled into a cycle

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::grid::Grid;

const HISTORY_LEN: usize = 10;

/// Hashes of the most recent generations.
#[derive(Debug, Clone, Default)]
pub struct CycleDetector {
    grid_history: [u64; HISTORY_LEN],
    history_count: usize,
}

pub fn hash_grid(grid: &Grid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.hash(&mut hasher);
    hasher.finish()
}

impl CycleDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if `grid` matches one of the last 10 observed generations;
    /// otherwise records it.
    pub fn observe(&mut self, grid: &Grid) -> bool {
        let current_hash = hash_grid(grid);
        let filled = self.history_count.min(HISTORY_LEN);
        if self.grid_history[..filled].contains(&current_hash) {
            return true;
        }
        self.grid_history[self.history_count % HISTORY_LEN] = current_hash;
        self.history_count += 1;
        false
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
