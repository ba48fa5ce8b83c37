use std::path::Path;

use serde_json::Value as JsonValue;

use super::model::{DataError, MeasurementRecord};

// ---------------------------------------------------------------------------
// Dataset selection
// ---------------------------------------------------------------------------

/// Which of the two fixed document shapes to decode. Chosen by the binary,
/// never inferred from the document itself, so a wrong shape fails fast with
/// a precise diagnostic instead of being half-read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    /// Grouped form: `[[kind, [[metric, n, value], …]], …]`
    Diet,
    /// Flat form: `[[metric, n, value], …]` (values in seconds)
    Disk,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a benchmark run file and decode it into measurement records.
///
/// The whole document is read and parsed up front; nothing is streamed. The
/// returned records are in document order, untouched by any unit transform —
/// scaling is the aggregator's job.
pub fn load_file(path: &Path, kind: DatasetKind) -> Result<Vec<MeasurementRecord>, DataError> {
    let text = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&text, kind)
}

/// Decode an in-memory document. Split out from [`load_file`] so the parser
/// can be tested without touching the filesystem.
pub fn parse_document(text: &str, kind: DatasetKind) -> Result<Vec<MeasurementRecord>, DataError> {
    let root: JsonValue = serde_json::from_str(text)
        .map_err(|e| DataError::malformed("document", format!("invalid JSON: {e}")))?;

    let records = root
        .as_array()
        .ok_or_else(|| DataError::malformed("document", "expected a top-level array"))?;

    match kind {
        DatasetKind::Diet => parse_grouped(records),
        DatasetKind::Disk => parse_flat(records),
    }
}

// ---------------------------------------------------------------------------
// Grouped form (diet)
// ---------------------------------------------------------------------------

fn parse_grouped(groups: &[JsonValue]) -> Result<Vec<MeasurementRecord>, DataError> {
    let mut out = Vec::new();

    for (i, group) in groups.iter().enumerate() {
        let at = format!("record {i}");
        let pair = group
            .as_array()
            .ok_or_else(|| DataError::malformed(&at, "expected a [kind, measures] pair"))?;
        let [kind, measures] = pair.as_slice() else {
            return Err(DataError::malformed(
                &at,
                format!("expected 2 elements, got {}", pair.len()),
            ));
        };

        let kind = kind
            .as_str()
            .ok_or_else(|| DataError::malformed(&at, "kind is not a string"))?;
        let measures = measures
            .as_array()
            .ok_or_else(|| DataError::malformed(&at, "measures is not an array"))?;

        for (j, measure) in measures.iter().enumerate() {
            let at = format!("record {i}, measure {j}");
            let (metric, n, value) = parse_triple(measure, &at)?;
            out.push(MeasurementRecord {
                kind: Some(kind.to_string()),
                metric,
                n,
                value,
            });
        }
    }

    Ok(out)
}

// ---------------------------------------------------------------------------
// Flat form (disk)
// ---------------------------------------------------------------------------

fn parse_flat(rows: &[JsonValue]) -> Result<Vec<MeasurementRecord>, DataError> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let at = format!("record {i}");
            let (metric, n, value) = parse_triple(row, &at)?;
            Ok(MeasurementRecord {
                kind: None,
                metric,
                n,
                value,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Shared triple decoding
// ---------------------------------------------------------------------------

/// Decode one `[metric, n, value]` triple, naming `at` in any diagnostic.
fn parse_triple(value: &JsonValue, at: &str) -> Result<(String, u64, f64), DataError> {
    let triple = value
        .as_array()
        .ok_or_else(|| DataError::malformed(at, "expected a [metric, n, value] triple"))?;
    let [metric, n, v] = triple.as_slice() else {
        return Err(DataError::malformed(
            at,
            format!("expected 3 elements, got {}", triple.len()),
        ));
    };

    let metric = metric
        .as_str()
        .ok_or_else(|| DataError::malformed(at, "metric is not a string"))?;
    let n = n
        .as_u64()
        .ok_or_else(|| DataError::malformed(at, "n is not a non-negative integer"))?;
    let v = v
        .as_f64()
        .ok_or_else(|| DataError::malformed(at, "value is not a number"))?;

    Ok((metric.to_string(), n, v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn malformed_at(err: DataError) -> String {
        match err {
            DataError::MalformedInput { at, .. } => at,
            other => panic!("expected MalformedInput, got {other:?}"),
        }
    }

    #[test]
    fn decodes_grouped_document() {
        let text = r#"[["monotonic-clock", [["diet/add_interval", 10, 120],
                                             ["diet/add_interval", 5, 60]]]]"#;
        let records = parse_document(text, DatasetKind::Diet).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].kind.as_deref(), Some("monotonic-clock"));
        assert_eq!(records[0].metric, "diet/add_interval");
        assert_eq!(records[0].n, 10);
        assert_eq!(records[0].value, 120.0);
        assert_eq!(records[1].n, 5);
    }

    #[test]
    fn decodes_flat_document() {
        let text = r#"[["sequential.read", 1, 0.002], ["sequential.read", 2, 0.004]]"#;
        let records = parse_document(text, DatasetKind::Disk).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].kind, None);
        assert_eq!(records[0].metric, "sequential.read");
        // No unit transform at parse time.
        assert_eq!(records[0].value, 0.002);
    }

    #[test]
    fn wrong_arity_names_the_offending_element() {
        let text = r#"[["sequential.read", 1, 0.002], ["sequential.read", 2]]"#;
        let err = parse_document(text, DatasetKind::Disk).unwrap_err();
        assert_eq!(malformed_at(err), "record 1");
    }

    #[test]
    fn non_numeric_n_names_the_offending_measure() {
        let text = r#"[["monotonic-clock", [["diet/add_interval", "ten", 120]]]]"#;
        let err = parse_document(text, DatasetKind::Diet).unwrap_err();
        assert_eq!(malformed_at(err), "record 0, measure 0");
    }

    #[test]
    fn flat_document_against_grouped_shape_is_malformed() {
        // Selecting the diet shape makes a disk document fail fast rather
        // than being misread.
        let text = r#"[["sequential.read", 1, 0.002]]"#;
        let err = parse_document(text, DatasetKind::Diet).unwrap_err();
        assert!(matches!(err, DataError::MalformedInput { .. }));
    }

    #[test]
    fn non_array_top_level_is_malformed() {
        let err = parse_document(r#"{"kind": "disk"}"#, DatasetKind::Disk).unwrap_err();
        assert_eq!(malformed_at(err), "document");
    }
}
