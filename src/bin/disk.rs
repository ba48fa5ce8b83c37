use std::path::Path;

use anyhow::{Context, Result};
use eframe::egui;

use benchplot::app::BenchPlotApp;
use benchplot::data::aggregate::DiskData;
use benchplot::data::loader::{self, DatasetKind};
use benchplot::data::model::{DataError, SeriesKey};
use benchplot::figure::{Figure, GridLayout, Panel};

const MARKER_RADIUS: f32 = 3.0;

/// One panel of the three access patterns for a given direction.
/// `direction` is the metric suffix ("read" | "write"), `verb` the axis
/// wording ("read" | "written").
fn access_panel(data: &DiskData, direction: &str, verb: &str) -> Result<Panel, DataError> {
    let mut panel = Panel::new(
        format!("Number of 128-byte blocks {verb}"),
        "Duration (ms)",
    );
    panel.scatter_with_trend(
        data,
        SeriesKey::metric(format!("sequential.{direction}")),
        &format!("Sequential {direction}"),
        MARKER_RADIUS,
    )?;
    panel.scatter_with_trend(
        data,
        SeriesKey::metric(format!("append.{direction}")),
        &format!("Sequential {direction} with O_APPEND"),
        MARKER_RADIUS,
    )?;
    panel.scatter_with_trend(
        data,
        SeriesKey::metric(format!("random.{direction}")),
        &format!("Random-offset {direction}"),
        MARKER_RADIUS,
    )?;
    Ok(panel)
}

fn build_figure(path: &Path) -> Result<Figure> {
    let records =
        loader::load_file(path, DatasetKind::Disk).context("loading disk benchmark records")?;
    log::info!(
        "loaded {} disk records from {}",
        records.len(),
        path.display()
    );

    let data = DiskData::aggregate(records);
    let panels = vec![
        access_panel(&data, "read", "read")?,
        access_panel(&data, "write", "written")?,
    ];

    Ok(Figure::new(
        "Read and write performance using different disk access patterns",
        GridLayout::Rows,
        panels,
    ))
}

fn main() -> eframe::Result {
    env_logger::init();

    let Some(path) = std::env::args().nth(1) else {
        let prog = std::env::args()
            .next()
            .unwrap_or_else(|| "disk-plot".to_string());
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
            .with_inner_size([900.0, 900.0])
            .with_min_inner_size([600.0, 500.0]),
        ..Default::default()
    };

    let title = figure.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(BenchPlotApp::new(figure)))),
    )
}
