// ui.rs - egui front end over the viewer state

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use std::time::Instant;

use conway::{GRID_SIZE, PATTERNS, Stats};

use crate::viewer::Viewer;

impl eframe::App for Viewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-advance is driven from the frame loop
        if self.tick(Instant::now()) {
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.toggle_running(Instant::now());
                }

                if ui.button("⏭ Step").clicked() {
                    self.step();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.clear();
                }

                if ui.button("🎲 Random").clicked() {
                    self.randomize();
                }
            });

            ui.horizontal(|ui| {
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
                    self.apply_selected_pattern();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.sim.generation()));
            });

            ui.separator();

            // Speed control
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = self.speed();
                if ui.add(egui::Slider::new(&mut speed, 0.5..=30.0).suffix(" gen/sec")).changed() {
                    self.set_speed(speed);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.label("Click cells to toggle them while paused.");

            ui.separator();

            let box_size = 60.0;
            let spacing = 2.0;
            let cell_pitch = box_size + spacing;

            let start_pos = ui.cursor().min;
            let total_size = Vec2::splat(cell_pitch * GRID_SIZE as f32 - spacing);

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

            painter.rect_filled(
                Rect::from_min_size(start_pos, total_size),
                0.0,
                Color32::BLACK,
            );

            let grid = self.sim.snapshot();
            for (row, cells) in grid.iter().enumerate() {
                for (col, &alive) in cells.iter().enumerate() {
                    let rect = Rect::from_min_size(
                        egui::pos2(
                            start_pos.x + col as f32 * cell_pitch,
                            start_pos.y + row as f32 * cell_pitch,
                        ),
                        Vec2::splat(box_size),
                    );

                    let cell_color = if alive { self.live_color } else { self.dead_color };
                    painter.rect_filled(rect, 2.0, cell_color);
                    painter.rect_stroke(rect, 2.0, Stroke::new(0.5, Color32::from_gray(60)));
                }
            }

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let offset = pos - start_pos;
                    if offset.x >= 0.0 && offset.y >= 0.0 {
                        let col = (offset.x / cell_pitch) as usize;
                        let row = (offset.y / cell_pitch) as usize;
                        self.toggle_cell(row, col);
                    }
                }
            }

            ui.separator();

            let stats = Stats::of(&self.sim);
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", stats.live_cells));
                ui.label(format!("Dead cells: {}", stats.total_cells - stats.live_cells));
                ui.label(format!("Population: {:.1}%", stats.live_percent()));
            });

            if !self.status.is_empty() {
                ui.label(self.status.as_str());
            }
        });

        // Keep the frame loop alive while running
        if self.is_running {
            ctx.request_repaint();
        }
    }
}
