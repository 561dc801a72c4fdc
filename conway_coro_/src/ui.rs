// ui.rs - eframe app: controls, painter-backed render sink, frame driver

use eframe::egui;
use egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};
use std::time::{Duration, Instant};

use conway::{RenderSink, PATTERNS};

use crate::{GameOfLife, CELL_SPACING};

/// Draws cells as filled squares on an egui painter.
struct PainterSink<'a> {
    painter: &'a Painter,
    bounds: Rect,
    columns: usize,
    rows: usize,
    box_size: f32,
    live_color: Color32,
    dead_color: Color32,
}

impl PainterSink<'_> {
    fn cell_rect(&self, x: usize, y: usize) -> Rect {
        let pitch = self.box_size + CELL_SPACING;
        let min = self.bounds.min + Vec2::new(x as f32 * pitch, y as f32 * pitch);
        Rect::from_min_size(min, Vec2::splat(self.box_size))
    }
}

impl RenderSink for PainterSink<'_> {
    fn clear(&mut self) {
        self.painter.rect_filled(self.bounds, 0.0, Color32::BLACK);
        for y in 0..self.rows {
            for x in 0..self.columns {
                let rect = self.cell_rect(x, y);
                self.painter.rect_filled(rect, 1.0, self.dead_color);
                // Draw subtle border
                self.painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
            }
        }
    }

    fn draw_live_cell(&mut self, x: usize, y: usize) {
        let rect = self.cell_rect(x, y);
        self.painter.rect_filled(rect, 1.0, self.live_color);
    }
}

/// Grid cell under `pos`, if any.
fn cell_at(bounds: Rect, box_size: f32, pos: Pos2) -> Option<(usize, usize)> {
    if !bounds.contains(pos) {
        return None;
    }
    let pitch = box_size + CELL_SPACING;
    let offset = pos - bounds.min;
    Some(((offset.x / pitch) as usize, (offset.y / pitch) as usize))
}

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.last_update = Instant::now();
                    }
                }

                if ui.button("⏭ Step").clicked() {
                    self.is_running = false;
                    self.update_generation();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.is_running = false;
                    self.life.clear();
                }

                if ui.button("🎲 Random").clicked() {
                    self.is_running = false;
                    self.apply_random_pattern();
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.is_running = false;
                    self.apply_selected_pattern();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.life.generation()));
            });

            ui.separator();

            // Speed control
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec")).changed() {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                ui.checkbox(&mut self.use_coroutines, "Row coroutines");

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            if let Some(error) = &self.last_error {
                ui.colored_label(Color32::LIGHT_RED, error.as_str());
            }

            ui.separator();

            ui.label("Click cells to toggle them alive/dead while paused.");

            ui.separator();

            let box_size = self.cell_size();
            let columns = self.life.grid().width();
            let rows = self.life.grid().height();
            let pitch = box_size + CELL_SPACING;
            let total_size = Vec2::new(
                pitch * columns as f32 - CELL_SPACING,
                pitch * rows as f32 - CELL_SPACING,
            );

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
            let bounds = response.rect;

            let mut sink = PainterSink {
                painter: &painter,
                bounds,
                columns,
                rows,
                box_size,
                live_color: self.live_color,
                dead_color: self.dead_color,
            };
            self.life.render(&mut sink);

            if !self.is_running && response.clicked() {
                if let Some((x, y)) = response
                    .interact_pointer_pos()
                    .and_then(|pos| cell_at(bounds, box_size, pos))
                {
                    self.life.toggle_cell(x, y);
                }
            }

            ui.separator();

            // Statistics
            let live_cells = self.life.live_count();
            let total = self.life.grid().len();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", (live_cells as f32 / total as f32) * 100.0));
            });
        });

        // Step after the frame has been drawn
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.update_generation();
            self.last_update = Instant::now();
        }

        // Request repaint if running to keep animation smooth
        if self.is_running {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_at_maps_pointer_to_cell() {
        let bounds = Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::new(155.0, 77.5));
        assert_eq!(cell_at(bounds, 15.0, Pos2::new(10.0, 20.0)), Some((0, 0)));
        assert_eq!(cell_at(bounds, 15.0, Pos2::new(10.0 + 15.5 * 3.0 + 1.0, 20.0 + 15.5 + 1.0)), Some((3, 1)));
        assert_eq!(cell_at(bounds, 15.0, Pos2::new(5.0, 25.0)), None);
    }
}
