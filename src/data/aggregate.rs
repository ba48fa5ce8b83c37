use std::collections::BTreeMap;

use super::model::{DataError, MeasurementRecord, Series, SeriesKey};

/// Seconds → milliseconds, applied to disk values once at ingestion.
const SECONDS_TO_MILLIS: f64 = 1000.0;

// ---------------------------------------------------------------------------
// Lookup seam shared by both aggregated map shapes
// ---------------------------------------------------------------------------

/// Read access to an aggregated series map. Absent keys are an error, never
/// an empty default: every panel key is fixed at build time, so a miss means
/// the input did not contain what the figure needs.
pub trait SeriesLookup {
    fn series(&self, key: &SeriesKey) -> Result<&Series, DataError>;
}

// ---------------------------------------------------------------------------
// DietData – two-level map kind → metric → Series
// ---------------------------------------------------------------------------

/// Aggregated diet measurements. Built once per load and never mutated
/// afterwards; reloading rebuilds from scratch.
#[derive(Debug, Clone, Default)]
pub struct DietData {
    kinds: BTreeMap<String, BTreeMap<String, Series>>,
}

impl DietData {
    /// Group records by (kind, metric), then sort every series by `n` exactly
    /// once. Keys are created on first sight; only observed (kind, metric)
    /// pairs end up in the map.
    pub fn aggregate(
        records: impl IntoIterator<Item = MeasurementRecord>,
    ) -> Result<Self, DataError> {
        let mut kinds: BTreeMap<String, BTreeMap<String, Series>> = BTreeMap::new();

        for (i, record) in records.into_iter().enumerate() {
            let kind = record.kind.ok_or_else(|| {
                DataError::malformed(format!("record {i}"), "diet record without a kind")
            })?;
            kinds
                .entry(kind)
                .or_default()
                .entry(record.metric)
                .or_default()
                .push(record.n, record.value);
        }

        for metrics in kinds.values_mut() {
            for series in metrics.values_mut() {
                series.sort();
            }
        }

        Ok(DietData { kinds })
    }

    pub fn len(&self) -> usize {
        self.kinds.values().map(|m| m.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl SeriesLookup for DietData {
    fn series(&self, key: &SeriesKey) -> Result<&Series, DataError> {
        key.kind
            .as_ref()
            .and_then(|kind| self.kinds.get(kind))
            .and_then(|metrics| metrics.get(&key.metric))
            .ok_or_else(|| DataError::UnknownSeries(key.clone()))
    }
}

// ---------------------------------------------------------------------------
// DiskData – one-level map metric → Series, values rescaled to milliseconds
// ---------------------------------------------------------------------------

/// Aggregated disk measurements. Input values are in seconds and are scaled
/// ×1000 here, at append time, and never again downstream.
#[derive(Debug, Clone, Default)]
pub struct DiskData {
    metrics: BTreeMap<String, Series>,
}

impl DiskData {
    pub fn aggregate(records: impl IntoIterator<Item = MeasurementRecord>) -> Self {
        let mut metrics: BTreeMap<String, Series> = BTreeMap::new();

        for record in records {
            metrics
                .entry(record.metric)
                .or_default()
                .push(record.n, record.value * SECONDS_TO_MILLIS);
        }

        for series in metrics.values_mut() {
            series.sort();
        }

        DiskData { metrics }
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

impl SeriesLookup for DiskData {
    fn series(&self, key: &SeriesKey) -> Result<&Series, DataError> {
        if key.kind.is_some() {
            // A kinded key can never have been observed by this map.
            return Err(DataError::UnknownSeries(key.clone()));
        }
        self.metrics
            .get(&key.metric)
            .ok_or_else(|| DataError::UnknownSeries(key.clone()))
    }
}
