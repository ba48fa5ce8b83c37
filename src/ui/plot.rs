use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::figure::Panel;

// ---------------------------------------------------------------------------
// Panel rendering
// ---------------------------------------------------------------------------

/// Render one panel as an `egui_plot` chart of the given height.
///
/// Each series layer becomes a scatter of circle markers; a fitted trend, if
/// present, becomes a two-point line with the same name and color so the
/// legend shows each display label exactly once.
pub fn panel_plot(ui: &mut Ui, panel: &Panel, colors: &[Color32], index: usize, height: f32) {
    Plot::new(("bench_panel", index))
        .legend(Legend::default())
        .x_axis_label(panel.x_label.as_str())
        .y_axis_label(panel.y_label.as_str())
        .height(height)
        .show(ui, |plot_ui| {
            for (layer, &color) in panel.layers.iter().zip(colors) {
                let points = Points::new(PlotPoints::from(layer.points.clone()))
                    .name(&layer.label)
                    .color(color)
                    .radius(layer.radius);
                plot_ui.points(points);

                if let Some(trend) = &layer.trend {
                    let line = Line::new(PlotPoints::from(trend.endpoints().to_vec()))
                        .name(&layer.label)
                        .color(color)
                        .width(1.0);
                    plot_ui.line(line);
                }
            }
        });
}
