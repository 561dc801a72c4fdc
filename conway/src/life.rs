// life.rs - Simulation driver: owns the current generation and the render contract

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::LifeConfig;
use crate::coro;
use crate::error::Result;
use crate::grid::Grid;
use crate::history::CycleDetector;
use crate::patterns::SeedPattern;
use crate::seed;
use crate::simulator;

/// Drawing surface a front end hands to [`Life::render`].
pub trait RenderSink {
    /// Wipes the previous frame.
    fn clear(&mut self);
    fn draw_live_cell(&mut self, x: usize, y: usize);
}

#[derive(Debug)]
pub struct Life {
    config: LifeConfig,
    grid: Grid,
    generation: u64,
    history: CycleDetector,
    started: bool,
}

impl Life {
    pub fn new(config: LifeConfig) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height)?;
        Ok(Self {
            config,
            grid,
            generation: 0,
            history: CycleDetector::new(),
            started: false,
        })
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn live_count(&self) -> usize {
        self.grid.live_count()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Seeds the grid from the config the first time it is called.
    pub fn start(&mut self) -> Result<()> {
        if self.started {
            return Ok(());
        }
        match self.config.seed_pattern()? {
            Some(pattern) => self.apply_pattern(&pattern)?,
            None => self.randomize(self.config.random_seed)?,
        }
        self.started = true;
        Ok(())
    }

    /// Clears the sink and draws every live cell of the current generation.
    pub fn render<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        sink.clear();
        for (x, y) in self.grid.live_cells() {
            sink.draw_live_cell(x, y);
        }
    }

    /// Advances one generation. Returns true once the grid repeats a recent one.
    pub fn step(&mut self) -> bool {
        let next = simulator::step(&self.grid);
        self.install(next)
    }

    /// [`Life::step`] computed by row coroutines on the current tokio runtime.
    pub async fn step_rows(&mut self) -> Result<bool> {
        let current = Arc::new(self.grid.clone());
        let next = coro::step_rows(current).await?;
        Ok(self.install(next))
    }

    /// One frame: render the current generation, then step.
    pub fn tick<S: RenderSink + ?Sized>(&mut self, sink: &mut S) -> bool {
        self.render(sink);
        self.step()
    }

    fn install(&mut self, next: Grid) -> bool {
        self.grid = next;
        self.generation += 1;
        debug!(generation = self.generation, live = self.grid.live_count(), "advanced generation");

        let cycling = self.history.observe(&self.grid);
        if cycling {
            warn!(generation = self.generation, "grid repeats a recent generation");
        }
        cycling
    }

    fn reset_history(&mut self) {
        self.generation = 0;
        self.history.reset();
    }

    pub fn clear(&mut self) {
        self.grid = self.grid.blank();
        self.reset_history();
    }

    /// Random fill with the configured probability.
    pub fn randomize(&mut self, random_seed: Option<u64>) -> Result<()> {
        let mut grid = self.grid.blank();
        seed::seed_random(&mut grid, self.config.live_probability, random_seed)?;
        self.grid = grid;
        self.reset_history();
        Ok(())
    }

    /// Clears the grid and stamps `pattern` on its center.
    pub fn apply_pattern(&mut self, pattern: &SeedPattern) -> Result<()> {
        let mut grid = self.grid.blank();
        seed::stamp_centered(&mut grid, pattern)?;
        self.grid = grid;
        self.reset_history();
        Ok(())
    }

    /// Flips one cell; coordinates off the grid are ignored.
    pub fn toggle_cell(&mut self, x: usize, y: usize) {
        if x >= self.grid.width() || y >= self.grid.height() {
            return;
        }
        let mut cells = self.grid.cells().to_vec();
        let index = y * self.grid.width() + x;
        cells[index] = !cells[index];
        self.grid = self.grid.with_cells(cells);
        self.reset_history();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LifeError;

    #[derive(Default)]
    struct Recorder {
        clears: usize,
        cells: Vec<(usize, usize)>,
    }

    impl RenderSink for Recorder {
        fn clear(&mut self) {
            self.clears += 1;
            self.cells.clear();
        }

        fn draw_live_cell(&mut self, x: usize, y: usize) {
            self.cells.push((x, y));
        }
    }

    fn config(width: usize, height: usize, pattern: Option<&str>) -> LifeConfig {
        LifeConfig {
            width,
            height,
            pattern: pattern.map(str::to_string),
            random_seed: Some(3),
            ..LifeConfig::default()
        }
    }

    #[test]
    fn new_rejects_zero_width() {
        assert!(matches!(
            Life::new(config(0, 4, None)),
            Err(LifeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn starts_dead_and_seeds_once() {
        let mut life = Life::new(config(10, 10, Some("Block"))).unwrap();
        assert_eq!(life.live_count(), 0);
        life.start().unwrap();
        assert_eq!(life.live_count(), 4);

        life.toggle_cell(0, 0);
        life.start().unwrap();
        assert_eq!(life.live_count(), 5);
    }

    #[test]
    fn random_start_uses_configured_seed() {
        let mut a = Life::new(config(30, 20, None)).unwrap();
        let mut b = Life::new(config(30, 20, None)).unwrap();
        a.start().unwrap();
        b.start().unwrap();
        assert_eq!(a.grid(), b.grid());
        assert!(a.live_count() > 0);
    }

    #[test]
    fn render_draws_only_live_cells_after_clear() {
        let mut life = Life::new(config(10, 10, Some("Block"))).unwrap();
        life.start().unwrap();

        let mut sink = Recorder::default();
        life.render(&mut sink);
        life.render(&mut sink);
        assert_eq!(sink.clears, 2);
        sink.cells.sort();
        assert_eq!(sink.cells, vec![(4, 4), (4, 5), (5, 4), (5, 5)]);
    }

    #[test]
    fn tick_renders_before_stepping() {
        let mut life = Life::new(config(5, 5, Some("Blinker"))).unwrap();
        life.start().unwrap();

        let mut sink = Recorder::default();
        life.tick(&mut sink);
        sink.cells.sort();
        assert_eq!(sink.cells, vec![(1, 2), (2, 2), (3, 2)]);
        assert_eq!(life.generation(), 1);
        assert_eq!(life.grid().live_cells().collect::<Vec<_>>(), vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn step_reports_cycle() {
        let mut life = Life::new(config(6, 6, Some("Block"))).unwrap();
        life.start().unwrap();
        assert!(!life.step());
        assert!(life.step());
    }

    #[test]
    fn editing_resets_generation() {
        let mut life = Life::new(config(8, 8, Some("Glider"))).unwrap();
        life.start().unwrap();
        life.step();
        life.step();
        assert_eq!(life.generation(), 2);
        life.clear();
        assert_eq!((life.generation(), life.live_count()), (0, 0));

        life.toggle_cell(100, 0);
        assert_eq!(life.live_count(), 0);
    }

    #[test]
    fn apply_pattern_rejects_oversized() {
        let mut life = Life::new(config(8, 8, None)).unwrap();
        let gun = crate::patterns::find_pattern("Gosper Glider Gun").unwrap().seed().unwrap();
        assert!(matches!(
            life.apply_pattern(&gun),
            Err(LifeError::PatternDoesNotFit { .. })
        ));
    }

    #[tokio::test]
    async fn step_rows_advances_like_step() {
        let mut a = Life::new(config(12, 12, None)).unwrap();
        a.start().unwrap();
        let mut b = Life::new(config(12, 12, None)).unwrap();
        b.start().unwrap();

        for _ in 0..3 {
            a.step();
            b.step_rows().await.unwrap();
        }
        assert_eq!(a.grid(), b.grid());
        assert_eq!(b.generation(), 3);
    }
}
