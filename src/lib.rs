//! benchplot – scatter-chart viewer for benchmark runs.
//!
//! Two measurement domains are supported, each with its own viewer binary:
//! DIET interval-tree operation costs (`diet-plot`) and raw disk-I/O latency
//! (`disk-plot`). Both share the same pipeline: load a JSON run file,
//! aggregate it into sorted per-metric series, optionally fit a linear trend,
//! and hand the composed figure to an eframe window.

pub mod app;
pub mod color;
pub mod data;
pub mod figure;
pub mod ui;
