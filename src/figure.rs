//! Figure composition: resolve fixed panel definitions against an aggregated
//! series map into a plain value the UI can draw without further computation.

use crate::data::aggregate::SeriesLookup;
use crate::data::model::{DataError, SeriesKey};
use crate::data::trend::{self, TrendLine};

/// How the panels are arranged in the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridLayout {
    /// Side by side, left to right.
    Columns,
    /// Stacked, top to bottom.
    Rows,
}

/// One scatter series inside a panel, optionally carrying a fitted trend
/// line. The trend shares the layer's legend name and color when drawn.
#[derive(Debug, Clone)]
pub struct SeriesLayer {
    pub label: String,
    pub points: Vec<[f64; 2]>,
    pub radius: f32,
    pub trend: Option<TrendLine>,
}

/// One sub-chart: labeled axes plus one or more series layers.
#[derive(Debug, Clone)]
pub struct Panel {
    pub x_label: String,
    pub y_label: String,
    pub layers: Vec<SeriesLayer>,
}

impl Panel {
    pub fn new(x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Panel {
            x_label: x_label.into(),
            y_label: y_label.into(),
            layers: Vec::new(),
        }
    }

    /// Resolve `key` through the aggregated map and append its scatter layer.
    /// An absent key is fatal: panel definitions are fixed at build time.
    pub fn scatter(
        &mut self,
        data: &impl SeriesLookup,
        key: SeriesKey,
        label: &str,
        radius: f32,
    ) -> Result<(), DataError> {
        let series = data.series(&key)?;
        self.layers.push(SeriesLayer {
            label: label.to_string(),
            points: series.plot_points(),
            radius,
            trend: None,
        });
        Ok(())
    }

    /// Like [`Panel::scatter`], but also fits an OLS trend over the series.
    /// A fit failure only costs the line: it is logged and the scatter layer
    /// is kept without a trend.
    pub fn scatter_with_trend(
        &mut self,
        data: &impl SeriesLookup,
        key: SeriesKey,
        label: &str,
        radius: f32,
    ) -> Result<(), DataError> {
        let series = data.series(&key)?;
        let trend = match trend::fit(series) {
            Ok(line) => Some(line),
            Err(e) => {
                log::warn!("no trend line for {key}: {e}");
                None
            }
        };
        self.layers.push(SeriesLayer {
            label: label.to_string(),
            points: series.plot_points(),
            radius,
            trend,
        });
        Ok(())
    }
}

/// The fully composed figure handed to the window: everything the UI needs,
/// owned, with no references back into the aggregation step.
#[derive(Debug, Clone)]
pub struct Figure {
    pub title: String,
    pub layout: GridLayout,
    pub panels: Vec<Panel>,
}

impl Figure {
    pub fn new(title: impl Into<String>, layout: GridLayout, panels: Vec<Panel>) -> Self {
        Figure {
            title: title.into(),
            layout,
            panels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::aggregate::{DietData, DiskData};
    use crate::data::model::MeasurementRecord;

    fn disk_data() -> DiskData {
        DiskData::aggregate([
            MeasurementRecord {
                kind: None,
                metric: "sequential.read".to_string(),
                n: 1,
                value: 0.002,
            },
            MeasurementRecord {
                kind: None,
                metric: "sequential.read".to_string(),
                n: 2,
                value: 0.004,
            },
            MeasurementRecord {
                kind: None,
                metric: "random.read".to_string(),
                n: 1,
                value: 0.003,
            },
        ])
    }

    #[test]
    fn scatter_resolves_points_through_the_map() {
        let data = disk_data();
        let mut panel = Panel::new("blocks", "ms");
        panel
            .scatter(&data, SeriesKey::metric("sequential.read"), "Sequential read", 3.0)
            .unwrap();

        assert_eq!(panel.layers.len(), 1);
        assert_eq!(panel.layers[0].label, "Sequential read");
        assert_eq!(panel.layers[0].points, vec![[1.0, 2.0], [2.0, 4.0]]);
    }

    #[test]
    fn unknown_key_fails_composition() {
        let data = disk_data();
        let mut panel = Panel::new("blocks", "ms");
        let err = panel
            .scatter(&data, SeriesKey::metric("append.read"), "Missing", 3.0)
            .unwrap_err();
        assert!(matches!(err, DataError::UnknownSeries(_)));
    }

    #[test]
    fn trend_is_attached_when_the_fit_succeeds() {
        let data = disk_data();
        let mut panel = Panel::new("blocks", "ms");
        panel
            .scatter_with_trend(
                &data,
                SeriesKey::metric("sequential.read"),
                "Sequential read",
                3.0,
            )
            .unwrap();

        let trend = panel.layers[0].trend.expect("fit should succeed");
        assert!((trend.slope - 2.0).abs() < 1e-9);
        assert!(trend.intercept.abs() < 1e-9);
    }

    #[test]
    fn failed_fit_keeps_the_scatter_and_drops_the_line() {
        let data = disk_data();
        let mut panel = Panel::new("blocks", "ms");
        // random.read has a single point: insufficient for a fit.
        panel
            .scatter_with_trend(&data, SeriesKey::metric("random.read"), "Random read", 3.0)
            .unwrap();

        assert_eq!(panel.layers.len(), 1);
        assert_eq!(panel.layers[0].points, vec![[1.0, 3.0]]);
        assert!(panel.layers[0].trend.is_none());
    }

    #[test]
    fn diet_map_works_through_the_same_seam() {
        let data = DietData::aggregate([MeasurementRecord {
            kind: Some("monotonic-clock".to_string()),
            metric: "diet/add_interval".to_string(),
            n: 5,
            value: 60.0,
        }])
        .unwrap();

        let mut panel = Panel::new("intervals", "ns");
        panel
            .scatter(
                &data,
                SeriesKey::grouped("monotonic-clock", "diet/add_interval"),
                "Adding an interval",
                2.0,
            )
            .unwrap();
        assert_eq!(panel.layers[0].points, vec![[5.0, 60.0]]);
    }
}
