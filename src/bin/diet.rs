use std::path::Path;

use anyhow::{Context, Result};
use eframe::egui;

use benchplot::app::BenchPlotApp;
use benchplot::data::aggregate::DietData;
use benchplot::data::loader::{self, DatasetKind};
use benchplot::data::model::{DataError, SeriesKey};
use benchplot::figure::{Figure, GridLayout, Panel};

const MARKER_RADIUS: f32 = 2.0;
const X_LABEL: &str = "Number of intervals in the structure";

/// One panel of the three DIET operations for a given measurement kind.
fn operations_panel(data: &DietData, kind: &str, y_label: &str) -> Result<Panel, DataError> {
    let mut panel = Panel::new(X_LABEL, y_label);
    panel.scatter(
        data,
        SeriesKey::grouped(kind, "diet/add_interval"),
        "Adding an interval",
        MARKER_RADIUS,
    )?;
    panel.scatter(
        data,
        SeriesKey::grouped(kind, "diet/remove_interval"),
        "Deleting an interval",
        MARKER_RADIUS,
    )?;
    panel.scatter(
        data,
        SeriesKey::grouped(kind, "diet/take_interval"),
        "Finding a sub-interval",
        MARKER_RADIUS,
    )?;
    Ok(panel)
}

fn build_figure(path: &Path) -> Result<Figure> {
    let records =
        loader::load_file(path, DatasetKind::Diet).context("loading diet benchmark records")?;
    log::info!(
        "loaded {} diet records from {}",
        records.len(),
        path.display()
    );

    let data = DietData::aggregate(records)?;
    let panels = vec![
        operations_panel(&data, "monotonic-clock", "Duration (ns)")?,
        operations_panel(&data, "major-allocated", "Major-heap allocations (mw/run)")?,
        operations_panel(&data, "minor-allocated", "Minor-heap allocations (w/run)")?,
    ];

    Ok(Figure::new(
        "Time and memory benchmark of DIET operations",
        GridLayout::Columns,
        panels,
    ))
}

fn main() -> eframe::Result {
    env_logger::init();

    let Some(path) = std::env::args().nth(1) else {
        let prog = std::env::args()
            .next()
            .unwrap_or_else(|| "diet-plot".to_string());
        eprintln!("Usage: {prog} path");
        std::process::exit(2);
    };

    let figure = match build_figure(Path::new(&path)) {
        Ok(figure) => figure,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 560.0])
            .with_min_inner_size([800.0, 400.0]),
        ..Default::default()
    };

    let title = figure.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(BenchPlotApp::new(figure)))),
    )
}
