use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised while loading or querying benchmark data. Loading and
/// aggregation errors are fatal to the run; there is no partial chart.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document does not match the shape selected for the dataset.
    /// `at` names the offending element (e.g. "record 3, measure 1").
    #[error("malformed input at {at}: {reason}")]
    MalformedInput { at: String, reason: String },

    /// A panel referenced a (kind, metric) key that never appeared in the
    /// input. Panel definitions are fixed at build time, so this is fatal.
    #[error("unknown series {0}")]
    UnknownSeries(SeriesKey),
}

impl DataError {
    pub fn malformed(at: impl Into<String>, reason: impl Into<String>) -> Self {
        DataError::MalformedInput {
            at: at.into(),
            reason: reason.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// MeasurementRecord – one decoded benchmark tuple
// ---------------------------------------------------------------------------

/// A single benchmark measurement: metric `metric` evaluated at problem size
/// `n` yielded `value`. `kind` is the outer grouping dimension and is present
/// only for diet records (e.g. "monotonic-clock").
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementRecord {
    pub kind: Option<String>,
    pub metric: String,
    pub n: u64,
    pub value: f64,
}

// ---------------------------------------------------------------------------
// SeriesKey – composite lookup key into the aggregated maps
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SeriesKey {
    pub kind: Option<String>,
    pub metric: String,
}

impl SeriesKey {
    /// Key for a flat (disk) series, identified by metric alone.
    pub fn metric(metric: impl Into<String>) -> Self {
        SeriesKey {
            kind: None,
            metric: metric.into(),
        }
    }

    /// Key for a grouped (diet) series.
    pub fn grouped(kind: impl Into<String>, metric: impl Into<String>) -> Self {
        SeriesKey {
            kind: Some(kind.into()),
            metric: metric.into(),
        }
    }
}

impl fmt::Display for SeriesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Some(kind) => write!(f, "{kind}:{}", self.metric),
            None => write!(f, "{}", self.metric),
        }
    }
}

// ---------------------------------------------------------------------------
// Series – ordered (n, value) pairs for one metric
// ---------------------------------------------------------------------------

/// One metric's measurements, sorted ascending by `n` once aggregation is
/// complete. Duplicate `n` values are preserved, never merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    pub points: Vec<(u64, f64)>,
}

impl Series {
    pub fn push(&mut self, n: u64, value: f64) {
        self.points.push((n, value));
    }

    /// Stable sort by `n`, keeping the relative order of equal-`n` entries.
    pub fn sort(&mut self) {
        self.points.sort_by_key(|&(n, _)| n);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points as `egui_plot` coordinates.
    pub fn plot_points(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(|&(n, v)| [n as f64, v]).collect()
    }
}

impl FromIterator<(u64, f64)> for Series {
    fn from_iter<T: IntoIterator<Item = (u64, f64)>>(iter: T) -> Self {
        Series {
            points: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_is_stable_and_idempotent() {
        // Duplicate n values: stable sort must keep their submission order.
        let mut series: Series = [(10, 1.0), (5, 2.0), (5, 3.0), (1, 4.0)]
            .into_iter()
            .collect();
        series.sort();
        let sorted = series.clone();
        assert_eq!(
            series.points,
            vec![(1, 4.0), (5, 2.0), (5, 3.0), (10, 1.0)]
        );
        series.sort();
        assert_eq!(series, sorted);
    }

    #[test]
    fn series_key_display_names_both_shapes() {
        let flat = SeriesKey::metric("sequential.read");
        let grouped = SeriesKey::grouped("monotonic-clock", "diet/add_interval");
        assert_eq!(flat.to_string(), "sequential.read");
        assert_eq!(grouped.to_string(), "monotonic-clock:diet/add_interval");
    }

    #[test]
    fn plot_points_keep_order_and_count() {
        let series: Series = [(1, 0.5), (1, 0.7), (2, 1.0)].into_iter().collect();
        assert_eq!(
            series.plot_points(),
            vec![[1.0, 0.5], [1.0, 0.7], [2.0, 1.0]]
        );
    }
}
