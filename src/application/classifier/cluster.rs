//! Distance-based archetype grouping.
//!
//! Profiles are standardised over [`FEATURE_NAMES`], grouped with seeded
//! k-means, and each group is characterised from the mean of its members'
//! unscaled leverage, win rate and sentiment reaction.

use std::collections::HashMap;

use tracing::{info, warn};

use crate::domain::stats::mean;
use crate::domain::{
    ArchetypeAssignment, ClusterArchetype, SegmentationMethod, TraderProfile, FEATURE_NAMES,
};

use super::kmeans::KMeans;
use super::scaler::StandardScaler;
use super::ArchetypeClassifier;

/// k-means classifier over standardised profile features.
#[derive(Debug, Clone, Default)]
pub struct ClusterClassifier {
    kmeans: KMeans,
}

impl ClusterClassifier {
    #[must_use]
    pub fn new(kmeans: KMeans) -> Self {
        Self { kmeans }
    }

    /// Cluster id per profile, renumbered by first appearance in the
    /// (account-sorted) profile order.
    #[must_use]
    pub fn cluster_ids(&self, profiles: &[TraderProfile]) -> Vec<usize> {
        let features: Vec<_> = profiles.iter().map(TraderProfile::features).collect();
        let scaled = StandardScaler::fit(&features).transform(&features);

        if profiles.len() < self.kmeans.clusters {
            warn!(
                accounts = profiles.len(),
                clusters = self.kmeans.clusters,
                "fewer accounts than clusters; some clusters will be empty"
            );
        }

        let fit = self.kmeans.fit(&scaled);
        info!(
            accounts = profiles.len(),
            clusters = self.kmeans.clusters,
            features = FEATURE_NAMES.len(),
            inertia = fit.inertia,
            "clustered trader profiles"
        );

        renumber(&fit.labels)
    }
}

impl ArchetypeClassifier for ClusterClassifier {
    fn method(&self) -> SegmentationMethod {
        SegmentationMethod::Clustering
    }

    fn classify(&self, profiles: &[TraderProfile]) -> Vec<ArchetypeAssignment> {
        let ids = self.cluster_ids(profiles);

        let mut members: HashMap<usize, Vec<&TraderProfile>> = HashMap::new();
        for (profile, &id) in profiles.iter().zip(&ids) {
            members.entry(id).or_default().push(profile);
        }
        let characters: HashMap<usize, ClusterArchetype> = members
            .iter()
            .map(|(&id, group)| (id, characterize(group)))
            .collect();

        profiles
            .iter()
            .zip(ids)
            .map(|(profile, id)| ArchetypeAssignment {
                account: profile.account.clone(),
                cluster: Some(id),
                archetype: characters
                    .get(&id)
                    .copied()
                    .unwrap_or(ClusterArchetype::MixedStrategy)
                    .label()
                    .to_owned(),
                leverage_policy: None,
            })
            .collect()
    }
}

fn characterize(group: &[&TraderProfile]) -> ClusterArchetype {
    let column = |f: fn(&TraderProfile) -> f64| {
        mean(&group.iter().map(|p| f(p)).collect::<Vec<_>>()).unwrap_or(0.0)
    };
    ClusterArchetype::characterize(
        column(|p| p.avg_leverage),
        column(|p| p.win_rate),
        column(|p| p.sentiment_reaction),
    )
}

/// Relabel clusters 0, 1, 2, ... in order of first appearance.
fn renumber(labels: &[usize]) -> Vec<usize> {
    let mut mapping: HashMap<usize, usize> = HashMap::new();
    labels
        .iter()
        .map(|l| {
            let next = mapping.len();
            *mapping.entry(*l).or_insert(next)
        })
        .collect()
}
