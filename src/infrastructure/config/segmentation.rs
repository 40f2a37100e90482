//! Archetype segmentation settings.

use serde::Deserialize;

use crate::application::classifier::KMeans;
use crate::domain::SegmentationMethod;
use crate::error::{ConfigError, Result};

/// `[segmentation]` section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SegmentationConfig {
    /// Which classifier labels accounts. Defaults to `rules`.
    #[serde(default)]
    pub method: SegmentationMethod,

    /// k-means parameters, read only by the `clustering` method.
    #[serde(default)]
    pub clustering: ClusteringConfig,
}

/// `[segmentation.clustering]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClusteringConfig {
    /// Number of groups. Defaults to 3 whatever the account count.
    #[serde(default = "default_clusters")]
    pub clusters: usize,

    /// Independent k-means++ initialisations; the lowest inertia wins.
    #[serde(default = "default_restarts")]
    pub restarts: usize,

    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Convergence threshold on summed squared centroid shift.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_clusters() -> usize {
    3
}

fn default_restarts() -> usize {
    10
}

fn default_max_iterations() -> usize {
    300
}

fn default_tolerance() -> f64 {
    1e-4
}

fn default_seed() -> u64 {
    42
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            clusters: default_clusters(),
            restarts: default_restarts(),
            max_iterations: default_max_iterations(),
            tolerance: default_tolerance(),
            seed: default_seed(),
        }
    }
}

impl ClusteringConfig {
    /// Convert to the k-means parameters used by the classifier.
    #[must_use]
    pub fn to_kmeans(&self) -> KMeans {
        KMeans {
            clusters: self.clusters,
            restarts: self.restarts,
            max_iterations: self.max_iterations,
            tolerance: self.tolerance,
            seed: self.seed,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        let positive = [
            ("segmentation.clustering.clusters", self.clusters),
            ("segmentation.clustering.restarts", self.restarts),
            ("segmentation.clustering.max_iterations", self.max_iterations),
        ];
        for (field, value) in positive {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must be greater than 0".to_string(),
                }
                .into());
            }
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "segmentation.clustering.tolerance",
                reason: "must be a finite value >= 0".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_kmeans_defaults() {
        assert_eq!(ClusteringConfig::default().to_kmeans(), KMeans::default());
    }

    #[test]
    fn zero_clusters_is_rejected() {
        let config = ClusteringConfig {
            clusters: 0,
            ..ClusteringConfig::default()
        };
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("clusters"), "{err}");
    }

    #[test]
    fn nan_tolerance_is_rejected() {
        let config = ClusteringConfig {
            tolerance: f64::NAN,
            ..ClusteringConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
