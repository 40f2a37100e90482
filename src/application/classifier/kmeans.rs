//! Seeded k-means (Lloyd iterations, k-means++ seeding, best of N restarts).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// k-means parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct KMeans {
    pub clusters: usize,
    pub restarts: usize,
    pub max_iterations: usize,
    /// Stop once the summed squared centroid movement drops to this value.
    pub tolerance: f64,
    pub seed: u64,
}

impl Default for KMeans {
    fn default() -> Self {
        Self {
            clusters: 3,
            restarts: 10,
            max_iterations: 300,
            tolerance: 1e-4,
            seed: 42,
        }
    }
}

/// Result of the best restart.
#[derive(Debug, Clone, PartialEq)]
pub struct KMeansFit<const D: usize> {
    /// Cluster index per input point, in input order.
    pub labels: Vec<usize>,
    pub centroids: Vec<[f64; D]>,
    /// Sum of squared distances of points to their centroid.
    pub inertia: f64,
}

impl KMeans {
    /// Partition `points` into `clusters` groups.
    ///
    /// With fewer points than clusters some centroids coincide and their
    /// clusters stay empty; an empty cluster keeps its previous centroid.
    #[must_use]
    pub fn fit<const D: usize>(&self, points: &[[f64; D]]) -> KMeansFit<D> {
        let k = self.clusters.max(1);
        if points.is_empty() {
            return KMeansFit {
                labels: Vec::new(),
                centroids: Vec::new(),
                inertia: 0.0,
            };
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut best: Option<KMeansFit<D>> = None;

        for restart in 0..self.restarts.max(1) {
            let fit = self.lloyd(points, init_plus_plus(points, k, &mut rng));
            debug!(restart, inertia = fit.inertia, "k-means restart finished");
            if best.as_ref().map_or(true, |b| fit.inertia < b.inertia) {
                best = Some(fit);
            }
        }

        best.unwrap_or_else(|| KMeansFit {
            labels: vec![0; points.len()],
            centroids: vec![[0.0; D]; k],
            inertia: 0.0,
        })
    }

    fn lloyd<const D: usize>(
        &self,
        points: &[[f64; D]],
        mut centroids: Vec<[f64; D]>,
    ) -> KMeansFit<D> {
        let mut labels = assign(points, &centroids);

        for _ in 0..self.max_iterations {
            let updated = recompute(points, &labels, &centroids);
            let shift: f64 = centroids
                .iter()
                .zip(&updated)
                .map(|(a, b)| squared_distance(a, b))
                .sum();
            centroids = updated;

            let relabeled = assign(points, &centroids);
            let stable = relabeled == labels;
            labels = relabeled;
            if stable || shift <= self.tolerance {
                break;
            }
        }

        let inertia = points
            .iter()
            .zip(&labels)
            .map(|(p, &l)| squared_distance(p, &centroids[l]))
            .sum();

        KMeansFit {
            labels,
            centroids,
            inertia,
        }
    }
}

/// k-means++ seeding: each new centroid is drawn with probability
/// proportional to its squared distance from the nearest chosen one.
fn init_plus_plus<const D: usize>(
    points: &[[f64; D]],
    k: usize,
    rng: &mut StdRng,
) -> Vec<[f64; D]> {
    let mut centroids = Vec::with_capacity(k);
    centroids.push(points[rng.gen_range(0..points.len())]);

    while centroids.len() < k {
        let distances: Vec<f64> = points
            .iter()
            .map(|p| {
                centroids
                    .iter()
                    .map(|c| squared_distance(p, c))
                    .fold(f64::INFINITY, f64::min)
            })
            .collect();
        let total: f64 = distances.iter().sum();

        // Every point already coincides with a centroid.
        if total <= 0.0 {
            centroids.push(points[rng.gen_range(0..points.len())]);
            continue;
        }

        let threshold = rng.gen::<f64>() * total;
        let mut cumulative = 0.0;
        let mut chosen = points.len() - 1;
        for (i, d) in distances.iter().enumerate() {
            cumulative += d;
            if cumulative >= threshold && *d > 0.0 {
                chosen = i;
                break;
            }
        }
        centroids.push(points[chosen]);
    }

    centroids
}

/// Nearest centroid per point; ties go to the lowest index.
fn assign<const D: usize>(points: &[[f64; D]], centroids: &[[f64; D]]) -> Vec<usize> {
    points
        .iter()
        .map(|p| {
            let mut best = 0;
            let mut best_dist = f64::INFINITY;
            for (j, c) in centroids.iter().enumerate() {
                let dist = squared_distance(p, c);
                if dist < best_dist {
                    best = j;
                    best_dist = dist;
                }
            }
            best
        })
        .collect()
}

fn recompute<const D: usize>(
    points: &[[f64; D]],
    labels: &[usize],
    previous: &[[f64; D]],
) -> Vec<[f64; D]> {
    let mut sums = vec![[0.0; D]; previous.len()];
    let mut counts = vec![0usize; previous.len()];
    for (p, &l) in points.iter().zip(labels) {
        counts[l] += 1;
        for d in 0..D {
            sums[l][d] += p[d];
        }
    }

    sums.into_iter()
        .zip(counts)
        .zip(previous)
        .map(|((sum, count), prev)| {
            if count == 0 {
                *prev
            } else {
                sum.map(|s| s / count as f64)
            }
        })
        .collect()
}

fn squared_distance<const D: usize>(a: &[f64; D], b: &[f64; D]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum()
}
