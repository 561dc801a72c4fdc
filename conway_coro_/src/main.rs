// main.rs - Conway's Game of Life desktop front end
// The simulation lives in the `conway` crate; ui.rs renders it and drives the ticks.

use eframe::egui;
use egui::Color32;
use std::time::{Duration, Instant};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use conway::{Life, LifeConfig};

mod ui;

const CELL_SPACING: f32 = 0.5;

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading config from {}", path);
            LifeConfig::from_file(&path)?
        }
        None => LifeConfig::default(),
    };

    let mut app = GameOfLife::new(config)?;
    app.life.start()?;
    info!(
        "Seeded {}x{} grid with {} live cells",
        app.life.grid().width(),
        app.life.grid().height(),
        app.life.live_count()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(app.window_size()),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(app)),
    )
    .map_err(|e| anyhow::anyhow!("eframe: {e}"))
}

pub struct GameOfLife {
    pub life: Life,
    pub is_running: bool,
    pub use_coroutines: bool,   // Step with one tokio task per row
    pub last_update: Instant,
    pub update_interval: Duration,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
    pub last_error: Option<String>,

    runtime: tokio::runtime::Runtime,
}

impl GameOfLife {
    pub fn new(config: LifeConfig) -> anyhow::Result<Self> {
        let update_interval = Duration::from_millis(config.update_interval_ms.max(1));
        Ok(Self {
            life: Life::new(config)?,
            is_running: false,
            use_coroutines: false,
            last_update: Instant::now(),
            update_interval,
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
            last_error: None,
            runtime: tokio::runtime::Runtime::new()?,
        })
    }

    pub fn cell_size(&self) -> f32 {
        self.life.config().cell_size
    }

    fn window_size(&self) -> [f32; 2] {
        let pitch = self.cell_size() + CELL_SPACING;
        let grid = self.life.grid();
        [
            (pitch * grid.width() as f32 + 40.0).max(800.0),
            pitch * grid.height() as f32 + 220.0,
        ]
    }

    /// Advances one generation and pauses when the board settles into a cycle.
    pub fn update_generation(&mut self) {
        let cycling = if self.use_coroutines {
            match self.runtime.block_on(self.life.step_rows()) {
                Ok(cycling) => cycling,
                Err(e) => {
                    self.report(e);
                    return;
                }
            }
        } else {
            self.life.step()
        };

        if cycling {
            info!("Cycle detected at generation {}, pausing", self.life.generation());
            self.is_running = false;
        }
    }

    pub fn apply_selected_pattern(&mut self) {
        let Some(pattern) = conway::PATTERNS.get(self.selected_pattern) else {
            return;
        };
        let result = pattern.seed().and_then(|seed| self.life.apply_pattern(&seed));
        match result {
            Ok(()) => self.last_error = None,
            Err(e) => self.report(e),
        }
    }

    pub fn apply_random_pattern(&mut self) {
        match self.life.randomize(None) {
            Ok(()) => self.last_error = None,
            Err(e) => self.report(e),
        }
    }

    fn report(&mut self, e: conway::LifeError) {
        tracing::error!("{}", e);
        self.is_running = false;
        self.last_error = Some(e.to_string());
    }
}
