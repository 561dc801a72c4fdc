// coro.rs - Generation step with one cooperative coroutine per row

use std::sync::Arc;

use crate::error::Result;
use crate::grid::Grid;
use crate::simulator::{count_alive_neighbors, next_state};

/// Row coroutine: computes row `row_index` of the next generation.
async fn process_row(row_index: usize, current: Arc<Grid>) -> (usize, Vec<bool>) {
    let mut row_result = Vec::with_capacity(current.width());
    for col in 0..current.width() {
        let count = count_alive_neighbors(&current, col, row_index);
        row_result.push(next_state(current.is_alive(col, row_index), count));

        tokio::task::yield_now().await;  // Cooperative yielding!
    }
    (row_index, row_result)  // Return (row_id, completed_row)
}

/// Same result as [`crate::simulator::step`], with every row spawned as its
/// own task on the ambient tokio runtime.
///
/// Each task only reads the shared `current` grid and every row lands in its
/// own slice of the new buffer. The buffer becomes a grid only after all rows
/// have been joined.
pub async fn step_rows(current: Arc<Grid>) -> Result<Grid> {
    let width = current.width();
    let mut handles = Vec::with_capacity(current.height());
    for row in 0..current.height() {
        handles.push(tokio::spawn(process_row(row, Arc::clone(&current))));
    }

    let mut cells = vec![false; current.len()];
    for handle in handles {
        let (row_index, completed_row) = handle.await?;
        cells[row_index * width..(row_index + 1) * width].copy_from_slice(&completed_row);
    }

    Ok(current.with_cells(cells))
}
