// lib.rs - Conway's Game of Life simulation core
//
// Bounded grid (off-grid cells are dead), standard B3/S23 rule, double-buffered
// generations. Front ends draw through the `RenderSink` trait.

pub mod config;
pub mod coro;
pub mod error;
pub mod grid;
pub mod history;
pub mod life;
pub mod patterns;
pub mod seed;
pub mod simulator;

pub use config::LifeConfig;
pub use error::{LifeError, Result};
pub use grid::Grid;
pub use life::{Life, RenderSink};
pub use patterns::{find_pattern, Pattern, SeedPattern, PATTERNS};
pub use simulator::{count_alive_neighbors, step, NEIGHBOR_OFFSETS};
