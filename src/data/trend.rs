use thiserror::Error;

use super::model::Series;

// ---------------------------------------------------------------------------
// Fit errors – recoverable per series
// ---------------------------------------------------------------------------

/// Why a trend line could not be fitted. Unlike load errors these are
/// recoverable: the figure keeps the scatter and just omits the line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FitError {
    #[error("need at least 2 points to fit a line, got {0}")]
    InsufficientData(usize),

    /// Every sample shares the same `n`; the slope is undefined and a naive
    /// formula would divide by zero.
    #[error("all {0} points share the same n; slope is undefined")]
    DegenerateInput(usize),
}

// ---------------------------------------------------------------------------
// TrendLine – an OLS fit over one series
// ---------------------------------------------------------------------------

/// A fitted line `y = slope·x + intercept`, valid over the series' observed
/// domain `[x_min, x_max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
    pub x_min: f64,
    pub x_max: f64,
}

impl TrendLine {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// The two domain-boundary predictions. A straight line needs nothing
    /// more to be drawn.
    pub fn endpoints(&self) -> [[f64; 2]; 2] {
        [
            [self.x_min, self.predict(self.x_min)],
            [self.x_max, self.predict(self.x_max)],
        ]
    }
}

/// Ordinary least squares over a series, closed form. Sums are centered on
/// the means, which keeps the arithmetic well-conditioned in f64 even when
/// `n` values are large.
pub fn fit(series: &Series) -> Result<TrendLine, FitError> {
    let points = &series.points;
    if points.len() < 2 {
        return Err(FitError::InsufficientData(points.len()));
    }

    let count = points.len() as f64;
    let mean_x = points.iter().map(|&(n, _)| n as f64).sum::<f64>() / count;
    let mean_y = points.iter().map(|&(_, v)| v).sum::<f64>() / count;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for &(n, v) in points {
        let dx = n as f64 - mean_x;
        sxx += dx * dx;
        sxy += dx * (v - mean_y);
    }

    if sxx == 0.0 {
        return Err(FitError::DegenerateInput(points.len()));
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;

    let x_min = points.iter().map(|&(n, _)| n).min().unwrap_or(0) as f64;
    let x_max = points.iter().map(|&(n, _)| n).max().unwrap_or(0) as f64;

    Ok(TrendLine {
        slope,
        intercept,
        x_min,
        x_max,
    })
}
