/// Rendering layer: pure adapters from composed [`crate::figure`] values to
/// egui draw calls. No data shaping happens here.
pub mod plot;
