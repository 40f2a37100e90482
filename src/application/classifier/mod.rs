//! Archetype classification of trader profiles.
//!
//! Two interchangeable strategies implement [`ArchetypeClassifier`]:
//!
//! - [`RuleClassifier`] - ordered threshold rules, first match wins
//! - [`ClusterClassifier`] - seeded k-means over standardised features
//!
//! The active strategy is chosen by configuration through [`classifier_for`].

pub mod cluster;
pub mod kmeans;
pub mod rules;
pub mod scaler;

pub use cluster::ClusterClassifier;
pub use kmeans::{KMeans, KMeansFit};
pub use rules::{archetype_of, RuleClassifier};
pub use scaler::StandardScaler;

use tracing::info;

use crate::domain::stats::mean;
use crate::domain::{
    ArchetypeAssignment, GroupSummary, Segmentation, SegmentationMethod, TraderProfile,
};

/// A strategy mapping the full profile set to one label per account.
pub trait ArchetypeClassifier {
    /// Which segmentation method this classifier implements.
    fn method(&self) -> SegmentationMethod;

    /// Label every profile. The result is in the same order as `profiles`.
    fn classify(&self, profiles: &[TraderProfile]) -> Vec<ArchetypeAssignment>;
}

/// Build the classifier selected by `method`.
#[must_use]
pub fn classifier_for(method: SegmentationMethod, kmeans: KMeans) -> Box<dyn ArchetypeClassifier> {
    match method {
        SegmentationMethod::Rules => Box::new(RuleClassifier),
        SegmentationMethod::Clustering => Box::new(ClusterClassifier::new(kmeans)),
    }
}

/// Classify profiles and summarise each resulting group.
pub fn segment(classifier: &dyn ArchetypeClassifier, profiles: &[TraderProfile]) -> Segmentation {
    let assignments = classifier.classify(profiles);
    let groups = summarize_groups(profiles, &assignments);

    info!(
        method = %classifier.method(),
        accounts = assignments.len(),
        groups = groups.len(),
        "segmented accounts"
    );

    Segmentation {
        method: classifier.method(),
        assignments,
        groups,
    }
}

/// One summary per distinct (cluster, archetype), in order of first
/// appearance. `assignments` must align with `profiles`.
#[must_use]
pub fn summarize_groups(
    profiles: &[TraderProfile],
    assignments: &[ArchetypeAssignment],
) -> Vec<GroupSummary> {
    let mut groups: Vec<(&ArchetypeAssignment, Vec<&TraderProfile>)> = Vec::new();
    for (profile, assignment) in profiles.iter().zip(assignments) {
        let existing = groups.iter_mut().find(|(a, _)| {
            a.cluster == assignment.cluster && a.archetype == assignment.archetype
        });
        match existing {
            Some((_, members)) => members.push(profile),
            None => groups.push((assignment, vec![profile])),
        }
    }

    groups
        .into_iter()
        .map(|(assignment, members)| {
            let column = |f: fn(&TraderProfile) -> f64| {
                mean(&members.iter().map(|p| f(p)).collect::<Vec<_>>()).unwrap_or(0.0)
            };
            GroupSummary {
                label: assignment.archetype.clone(),
                cluster: assignment.cluster,
                accounts: members.iter().map(|p| p.account.clone()).collect(),
                avg_leverage: column(|p| p.avg_leverage),
                avg_trade_count: column(|p| p.trade_count as f64),
                win_rate: column(|p| p.win_rate),
                sentiment_reaction: column(|p| p.sentiment_reaction),
                avg_pnl: column(|p| p.avg_pnl),
                leverage_policy: assignment.leverage_policy,
            }
        })
        .collect()
}
