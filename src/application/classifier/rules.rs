//! Rule-based archetype classification.
//!
//! Rules are evaluated in declaration order and the first match wins; an
//! account no rule matches is a [`Archetype::BalancedTrader`].

use crate::domain::{Archetype, ArchetypeAssignment, SegmentationMethod, TraderProfile};

use super::ArchetypeClassifier;

struct Rule {
    archetype: Archetype,
    applies: fn(&TraderProfile) -> bool,
}

const RULES: [Rule; 4] = [
    Rule {
        archetype: Archetype::RevengeTrader,
        applies: |p| p.sentiment_reaction > 0.2 && p.trade_count >= 2,
    },
    Rule {
        archetype: Archetype::RiskTaker,
        applies: |p| p.avg_leverage > 3.0 && p.win_rate < 0.5,
    },
    Rule {
        archetype: Archetype::ConservativeAccumulator,
        applies: |p| p.win_rate > 0.5 && p.avg_leverage < 2.5,
    },
    Rule {
        archetype: Archetype::TacticalScalper,
        applies: |p| p.sentiment_reaction > 0.1 && p.avg_leverage > 3.0,
    },
];

/// Archetype of a single profile.
#[must_use]
pub fn archetype_of(profile: &TraderProfile) -> Archetype {
    RULES
        .iter()
        .find(|rule| (rule.applies)(profile))
        .map_or(Archetype::BalancedTrader, |rule| rule.archetype)
}

/// Deterministic threshold classifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleClassifier;

impl ArchetypeClassifier for RuleClassifier {
    fn method(&self) -> SegmentationMethod {
        SegmentationMethod::Rules
    }

    fn classify(&self, profiles: &[TraderProfile]) -> Vec<ArchetypeAssignment> {
        profiles
            .iter()
            .map(|profile| {
                let archetype = archetype_of(profile);
                ArchetypeAssignment {
                    account: profile.account.clone(),
                    cluster: None,
                    archetype: archetype.label().to_owned(),
                    leverage_policy: Some(archetype.leverage_policy()),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::profile;

    #[test]
    fn first_matching_rule_wins() {
        // Also satisfies the conservative-accumulator rule.
        let p = profile("A", 1.0, 5, 0.9, 0.25);
        assert_eq!(archetype_of(&p), Archetype::RevengeTrader);
    }

    #[test]
    fn high_leverage_low_win_rate_is_risk_taker() {
        let p = profile("A", 4.0, 1, 0.3, 0.0);
        assert_eq!(archetype_of(&p), Archetype::RiskTaker);
    }

    #[test]
    fn reactive_single_trade_falls_through_rule_one() {
        let p = profile("A", 4.0, 1, 0.6, 0.5);
        assert_eq!(archetype_of(&p), Archetype::TacticalScalper);
    }

    #[test]
    fn steady_low_leverage_is_conservative() {
        let p = profile("A", 2.0, 10, 0.7, 0.0);
        assert_eq!(archetype_of(&p), Archetype::ConservativeAccumulator);
    }

    #[test]
    fn thresholds_are_strict() {
        // Exactly on every boundary: no rule fires.
        let p = profile("A", 3.0, 2, 0.5, 0.2);
        assert_eq!(archetype_of(&p), Archetype::BalancedTrader);
    }

    #[test]
    fn classifier_attaches_policy() {
        let assignments = RuleClassifier.classify(&[profile("A", 4.0, 1, 0.3, 0.0)]);
        assert_eq!(assignments.len(), 1);
        assert_eq!(
            assignments[0].archetype,
            "Risk Taker (High Leverage, Mixed Results)"
        );
        assert_eq!(
            assignments[0].leverage_policy,
            Some(Archetype::RiskTaker.leverage_policy())
        );
        assert_eq!(assignments[0].cluster, None);
    }
}
