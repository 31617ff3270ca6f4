//! Pearson correlation between predictor and outcome

use super::series::Series;
use super::stats::{mean, round_to};

/// Pearson's r between two paired series
///
/// Pairs beyond the shorter series are ignored. Returns 0 for fewer than two
/// pairs or when either series has no variance, so the result is always a
/// finite value in `[-1, 1]`.
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return 0.0;
    }
    let (xs, ys) = (&xs[..n], &ys[..n]);

    let (Some(mean_x), Some(mean_y)) = (mean(xs), mean(ys)) else {
        return 0.0;
    };

    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denominator = (var_x * var_y).sqrt();
    if denominator == 0.0 || !denominator.is_finite() {
        return 0.0;
    }

    let r = covariance / denominator;
    if r.is_finite() { r.clamp(-1.0, 1.0) } else { 0.0 }
}

/// Correlation between predictor and outcome, rounded to two decimals
pub fn correlation(series: &Series) -> f64 {
    round_to(pearson(&series.predictors(), &series.outcomes()), 2)
}
