//! Behavioural archetypes assigned to trading accounts.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::id::AccountId;

/// How accounts are segmented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentationMethod {
    /// Fixed threshold rules, first match wins.
    #[default]
    Rules,
    /// k-means over standardised profile features.
    Clustering,
}

impl SegmentationMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rules => "rules",
            Self::Clustering => "clustering",
        }
    }
}

impl fmt::Display for SegmentationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Archetype produced by the rule-based classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Archetype {
    RevengeTrader,
    RiskTaker,
    ConservativeAccumulator,
    TacticalScalper,
    BalancedTrader,
}

impl Archetype {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::RevengeTrader => "Revenge Trader (Reactive)",
            Self::RiskTaker => "Risk Taker (High Leverage, Mixed Results)",
            Self::ConservativeAccumulator => "Conservative Accumulator",
            Self::TacticalScalper => "Tactical Scalper (Volatility Sensitive)",
            Self::BalancedTrader => "Balanced Trader",
        }
    }

    /// Recommended leverage-cap policy for the archetype.
    #[must_use]
    pub const fn leverage_policy(self) -> &'static str {
        match self {
            Self::RevengeTrader => "Cap leverage at 1.5x during Fear; monitor daily drawdown",
            Self::RiskTaker => "Implement max 3.5x leverage cap; require approval for > 2x",
            Self::ConservativeAccumulator => "Allow higher leverage up to 3.5x; stable allocation",
            Self::TacticalScalper => {
                "Leverage allowed up to 4.0x during volatility; monitor closely"
            }
            Self::BalancedTrader => "Standard leverage policy (2.0x-3.0x)",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Post-hoc characterisation of a cluster from its mean features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ClusterArchetype {
    HighRiskTaker,
    ReactiveTrader,
    ConsistentAccumulator,
    MixedStrategy,
}

impl ClusterArchetype {
    /// Apply the threshold rules to a cluster's mean leverage, win rate and
    /// sentiment reaction.
    #[must_use]
    pub fn characterize(avg_leverage: f64, win_rate: f64, sentiment_reaction: f64) -> Self {
        if avg_leverage > 3.0 && win_rate < 0.5 {
            Self::HighRiskTaker
        } else if avg_leverage > 2.5 && sentiment_reaction > 0.3 {
            Self::ReactiveTrader
        } else if win_rate > 0.5 && avg_leverage < 2.5 {
            Self::ConsistentAccumulator
        } else {
            Self::MixedStrategy
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighRiskTaker => "High Risk Taker",
            Self::ReactiveTrader => "Reactive Trader",
            Self::ConsistentAccumulator => "Consistent Accumulator",
            Self::MixedStrategy => "Mixed Strategy",
        }
    }
}

impl fmt::Display for ClusterArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label given to one account by a classifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchetypeAssignment {
    pub account: AccountId,
    /// Cluster id; only set by distance-based grouping.
    pub cluster: Option<usize>,
    pub archetype: String,
    /// Only set by the rule-based classifier.
    pub leverage_policy: Option<&'static str>,
}

/// Mean behaviour of the accounts sharing a label or cluster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    pub label: String,
    pub cluster: Option<usize>,
    pub accounts: Vec<AccountId>,
    pub avg_leverage: f64,
    pub avg_trade_count: f64,
    pub win_rate: f64,
    pub sentiment_reaction: f64,
    pub avg_pnl: f64,
    pub leverage_policy: Option<&'static str>,
}

/// Output of one segmentation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segmentation {
    pub method: SegmentationMethod,
    pub assignments: Vec<ArchetypeAssignment>,
    pub groups: Vec<GroupSummary>,
}

impl Segmentation {
    /// Find the assignment of one account.
    #[must_use]
    pub fn assignment(&self, account: &AccountId) -> Option<&ArchetypeAssignment> {
        self.assignments.iter().find(|a| &a.account == account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_archetype_has_a_policy() {
        for archetype in [
            Archetype::RevengeTrader,
            Archetype::RiskTaker,
            Archetype::ConservativeAccumulator,
            Archetype::TacticalScalper,
            Archetype::BalancedTrader,
        ] {
            assert!(!archetype.leverage_policy().is_empty());
        }
    }

    #[test]
    fn cluster_characterization_order() {
        assert_eq!(
            ClusterArchetype::characterize(4.0, 0.4, 1.0),
            ClusterArchetype::HighRiskTaker
        );
        assert_eq!(
            ClusterArchetype::characterize(2.8, 0.6, 0.35),
            ClusterArchetype::ReactiveTrader
        );
        assert_eq!(
            ClusterArchetype::characterize(2.0, 0.6, 0.0),
            ClusterArchetype::ConsistentAccumulator
        );
        assert_eq!(
            ClusterArchetype::characterize(2.5, 0.5, 0.0),
            ClusterArchetype::MixedStrategy
        );
    }

    #[test]
    fn method_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            method: SegmentationMethod,
        }
        let w: Wrapper = toml::from_str("method = \"clustering\"").unwrap();
        assert_eq!(w.method, SegmentationMethod::Clustering);
    }
}
