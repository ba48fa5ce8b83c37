use eframe::egui::{self, Color32};

use crate::color::series_palette;
use crate::figure::{Figure, GridLayout};
use crate::ui::plot;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// Window showing one composed figure. The figure is immutable: every frame
/// only repaints it, nothing is recomputed.
pub struct BenchPlotApp {
    figure: Figure,
    /// One palette per panel, sized to that panel's layer count.
    palettes: Vec<Vec<Color32>>,
}

impl BenchPlotApp {
    pub fn new(figure: Figure) -> Self {
        let palettes = figure
            .panels
            .iter()
            .map(|p| series_palette(p.layers.len()))
            .collect();
        Self { figure, palettes }
    }
}

impl eframe::App for BenchPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: shared figure title ----
        egui::TopBottomPanel::top("title_bar").show(ctx, |ui| {
            ui.vertical_centered(|ui: &mut egui::Ui| {
                ui.heading(&self.figure.title);
            });
        });

        // ---- Central panel: the panel grid ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let count = self.figure.panels.len().max(1);
            match self.figure.layout {
                GridLayout::Columns => {
                    let height = ui.available_height();
                    ui.columns(count, |cols| {
                        for (i, panel) in self.figure.panels.iter().enumerate() {
                            plot::panel_plot(&mut cols[i], panel, &self.palettes[i], i, height);
                        }
                    });
                }
                GridLayout::Rows => {
                    let spacing = ui.spacing().item_spacing.y * (count - 1) as f32;
                    let height = (ui.available_height() - spacing) / count as f32;
                    for (i, panel) in self.figure.panels.iter().enumerate() {
                        plot::panel_plot(ui, panel, &self.palettes[i], i, height);
                    }
                }
            }
        });
    }
}
