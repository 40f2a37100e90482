//! Zero-mean, unit-variance feature scaling.

use crate::domain::stats::{mean, population_std};

/// Per-feature mean and scale learned from a sample.
///
/// Uses the population standard deviation. A constant feature gets a scale
/// of 1, so it standardises to 0 everywhere.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler<const D: usize> {
    pub means: [f64; D],
    pub scales: [f64; D],
}

impl<const D: usize> StandardScaler<D> {
    /// Learn means and scales. An empty sample yields the identity scaler.
    #[must_use]
    pub fn fit(points: &[[f64; D]]) -> Self {
        let mut means = [0.0; D];
        let mut scales = [1.0; D];
        for d in 0..D {
            let column: Vec<f64> = points.iter().map(|p| p[d]).collect();
            means[d] = mean(&column).unwrap_or(0.0);
            scales[d] = match population_std(&column) {
                Some(std) if std > 0.0 => std,
                _ => 1.0,
            };
        }
        Self { means, scales }
    }

    #[must_use]
    pub fn transform(&self, points: &[[f64; D]]) -> Vec<[f64; D]> {
        points
            .iter()
            .map(|p| std::array::from_fn(|d| (p[d] - self.means[d]) / self.scales[d]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standardized_columns_have_zero_mean_unit_variance() {
        let points = [[1.0, 10.0], [2.0, 10.0], [3.0, 10.0]];
        let scaler = StandardScaler::fit(&points);
        let scaled = scaler.transform(&points);

        let col0: Vec<f64> = scaled.iter().map(|p| p[0]).collect();
        assert!(mean(&col0).unwrap().abs() < 1e-12);
        assert!((population_std(&col0).unwrap() - 1.0).abs() < 1e-12);

        // Constant column collapses to zero.
        assert!(scaled.iter().all(|p| p[1] == 0.0));
    }

    #[test]
    fn empty_sample_is_identity() {
        let scaler = StandardScaler::<3>::fit(&[]);
        assert_eq!(scaler.means, [0.0; 3]);
        assert_eq!(scaler.scales, [1.0; 3]);
    }
}
