// seed.rs - Initial grid states: random fill and centered pattern stamping

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::error::{LifeError, Result};
use crate::grid::Grid;
use crate::patterns::SeedPattern;

/// Default share of live cells for a random seed.
pub const DEFAULT_LIVE_PROBABILITY: f64 = 0.22;

pub fn check_probability(probability: f64) -> Result<()> {
    if (0.0..=1.0).contains(&probability) {
        Ok(())
    } else {
        Err(LifeError::InvalidProbability(probability))
    }
}

/// Replaces every cell with a draw from `rng` that is live with `probability`.
pub fn seed_random_with<R: Rng + ?Sized>(grid: &mut Grid, probability: f64, rng: &mut R) -> Result<()> {
    check_probability(probability)?;
    let cells = (0..grid.len()).map(|_| rng.gen_bool(probability)).collect();
    grid.set_all(cells)
}

/// Random fill; `Some(seed)` makes the result reproducible.
pub fn seed_random(grid: &mut Grid, probability: f64, seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    seed_random_with(grid, probability, &mut rng)?;
    info!(probability, ?seed, live = grid.live_count(), "seeded grid randomly");
    Ok(())
}

/// Top-left corner at which `pattern` sits centered on `grid`.
///
/// Equivalent to `floor(grid / 2 - pattern / 2)` on each axis. Fails when the
/// pattern is wider or taller than the grid.
pub fn centered_origin(grid: &Grid, pattern: &SeedPattern) -> Result<(usize, usize)> {
    origin_within(grid.width(), grid.height(), pattern)
}

/// [`centered_origin`] for a grid of the given size that need not exist yet.
pub fn origin_within(grid_width: usize, grid_height: usize, pattern: &SeedPattern) -> Result<(usize, usize)> {
    if pattern.width() > grid_width || pattern.height() > grid_height {
        return Err(LifeError::PatternDoesNotFit {
            pattern_width: pattern.width(),
            pattern_height: pattern.height(),
            grid_width,
            grid_height,
        });
    }
    Ok((
        (grid_width - pattern.width()) / 2,
        (grid_height - pattern.height()) / 2,
    ))
}

/// Writes `pattern` (both its live and dead cells) onto the center of `grid`.
/// Cells outside the stamped rectangle keep their state.
pub fn stamp_centered(grid: &mut Grid, pattern: &SeedPattern) -> Result<()> {
    let (start_x, start_y) = centered_origin(grid, pattern)?;
    let width = grid.width();

    let mut cells = grid.cells().to_vec();
    for py in 0..pattern.height() {
        for px in 0..pattern.width() {
            cells[(start_y + py) * width + start_x + px] = pattern.is_alive(px, py);
        }
    }
    grid.set_all(cells)?;

    info!(
        start_x,
        start_y,
        width = pattern.width(),
        height = pattern.height(),
        "stamped seed pattern"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_is_centered_on_even_grid() {
        let mut grid = Grid::new(10, 10).unwrap();
        let block = SeedPattern::parse(&["11", "11"]).unwrap();
        stamp_centered(&mut grid, &block).unwrap();
        assert_eq!(
            grid.live_cells().collect::<Vec<_>>(),
            vec![(4, 4), (5, 4), (4, 5), (5, 5)]
        );
    }

    #[test]
    fn odd_remainder_rounds_down() {
        let grid = Grid::new(10, 11).unwrap();
        let pattern = SeedPattern::parse(&["111", "111"]).unwrap();
        // 10/2 - 3/2 = 3.5 and 11/2 - 2/2 = 4.5
        assert_eq!(centered_origin(&grid, &pattern).unwrap(), (3, 4));
    }

    #[test]
    fn pattern_equal_to_grid_fills_it() {
        let mut grid = Grid::new(3, 1).unwrap();
        let pattern = SeedPattern::parse(&["101"]).unwrap();
        stamp_centered(&mut grid, &pattern).unwrap();
        assert_eq!(grid.cells(), &[true, false, true]);
    }

    #[test]
    fn oversized_pattern_is_rejected() {
        let mut grid = Grid::new(4, 4).unwrap();
        let wide = SeedPattern::parse(&["11111"]).unwrap();
        let err = stamp_centered(&mut grid, &wide).unwrap_err();
        assert!(matches!(
            err,
            LifeError::PatternDoesNotFit { pattern_width: 5, grid_width: 4, .. }
        ));
        assert_eq!(grid.live_count(), 0);

        let tall = SeedPattern::parse(&["1", "1", "1", "1", "1"]).unwrap();
        assert!(stamp_centered(&mut grid, &tall).is_err());
    }

    #[test]
    fn stamping_overwrites_with_dead_cells() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_all(vec![true; 9]).unwrap();
        let dot = SeedPattern::parse(&["0"]).unwrap();
        stamp_centered(&mut grid, &dot).unwrap();
        assert!(!grid.is_alive(1, 1));
        assert_eq!(grid.live_count(), 8);
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let mut a = Grid::new(40, 30).unwrap();
        let mut b = Grid::new(40, 30).unwrap();
        seed_random(&mut a, DEFAULT_LIVE_PROBABILITY, Some(42)).unwrap();
        seed_random(&mut b, DEFAULT_LIVE_PROBABILITY, Some(42)).unwrap();
        assert_eq!(a, b);

        let mut c = Grid::new(40, 30).unwrap();
        seed_random(&mut c, DEFAULT_LIVE_PROBABILITY, Some(43)).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn random_density_is_near_probability() {
        let mut grid = Grid::new(100, 100).unwrap();
        seed_random(&mut grid, DEFAULT_LIVE_PROBABILITY, Some(1)).unwrap();
        let density = grid.live_count() as f64 / grid.len() as f64;
        assert!((density - DEFAULT_LIVE_PROBABILITY).abs() < 0.03, "density {density}");
    }

    #[test]
    fn probability_extremes_and_bounds() {
        let mut grid = Grid::new(8, 8).unwrap();
        seed_random(&mut grid, 1.0, None).unwrap();
        assert_eq!(grid.live_count(), 64);
        seed_random(&mut grid, 0.0, None).unwrap();
        assert_eq!(grid.live_count(), 0);

        assert!(matches!(
            seed_random(&mut grid, 1.5, None),
            Err(LifeError::InvalidProbability(_))
        ));
        assert!(seed_random(&mut grid, f64::NAN, None).is_err());
    }
}
