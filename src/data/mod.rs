/// Data layer: core types, loading, aggregation, and trend fitting.
///
/// Architecture:
/// ```text
///  diet.json / disk.json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Vec<MeasurementRecord>
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ aggregate   │  group by (kind, metric) → sorted Series maps
///   └────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  trend    │  OLS fit per series (disk dataset only)
///   └──────────┘
/// ```

pub mod aggregate;
pub mod loader;
pub mod model;
pub mod trend;
