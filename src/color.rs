use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Series color generation
// ---------------------------------------------------------------------------

/// Distinct colors for `n` series in one panel, evenly spaced around the hue
/// wheel. A series' scatter markers and its trend line both use the same
/// entry, so they read as one item in the legend.
pub fn series_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = 210.0 + (i as f32 / n.max(1) as f32) * 360.0;
            let rgb: Srgb = Hsl::new(hue % 360.0, 0.65, 0.5).into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_one_distinct_color_per_series() {
        let colors = series_palette(3);
        assert_eq!(colors.len(), 3);
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }

    #[test]
    fn empty_palette_is_empty() {
        assert!(series_palette(0).is_empty());
    }
}
