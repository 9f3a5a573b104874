use super::{ComponentScorer, RuleTally};
use crate::types::{ComponentKind, ComponentSignal, InsiderActivity, InsiderSummary};

/// Net flow, participant balance and cluster rules.
#[derive(Debug, Clone, Default)]
pub struct InsiderScorer;

impl ComponentScorer for InsiderScorer {
    type Input = InsiderSummary;

    fn kind(&self) -> ComponentKind {
        ComponentKind::Insider
    }

    fn score(&self, s: &InsiderSummary) -> ComponentSignal {
        let mut tally = RuleTally::default();
        let net = s.net_value;

        if net > 1_000_000.0 {
            tally.add(50.0, format!("Strong insider buying: ${:.2}M", net / 1e6));
        } else if net > 100_000.0 {
            tally.add(25.0, format!("Insider buying: ${:.0}K", net / 1e3));
        } else if net < -1_000_000.0 {
            tally.add(-40.0, format!("Heavy insider selling: ${:.2}M", net.abs() / 1e6));
        } else if net < -100_000.0 {
            tally.add(-20.0, format!("Insider selling: ${:.0}K", net.abs() / 1e3));
        }

        if s.buyers > s.sellers * 2 {
            tally.add(25.0, format!("More insiders buying: {} vs {}", s.buyers, s.sellers));
        } else if s.sellers > s.buyers * 2 {
            tally.add(-25.0, format!("More insiders selling: {} vs {}", s.sellers, s.buyers));
        }

        match s.recent_activity {
            InsiderActivity::BuyingCluster => tally.add(25.0, "Cluster of insider buying detected"),
            InsiderActivity::SellingCluster => {
                tally.add(-25.0, "Cluster of insider selling detected")
            }
            _ => {}
        }

        tally.finish(self.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insider_heavy_buying_clamps() {
        let summary = InsiderSummary {
            net_value: 2_500_000.0,
            buyers: 7,
            sellers: 1,
            recent_activity: InsiderActivity::BuyingCluster,
        };
        let c = InsiderScorer.score(&summary);
        assert_eq!(c.score, 100.0);
        assert_eq!(c.reasons[0], "Strong insider buying: $2.50M");
        assert_eq!(c.reasons[1], "More insiders buying: 7 vs 1");
    }

    #[test]
    fn test_insider_moderate_selling() {
        let summary = InsiderSummary {
            net_value: -250_000.0,
            buyers: 1,
            sellers: 3,
            recent_activity: InsiderActivity::ModerateSelling,
        };
        let c = InsiderScorer.score(&summary);
        assert_eq!(c.score, -45.0);
        assert_eq!(c.reasons[0], "Insider selling: $250K");
    }

    #[test]
    fn test_insider_no_activity() {
        let summary = InsiderSummary {
            net_value: 0.0,
            buyers: 0,
            sellers: 0,
            recent_activity: InsiderActivity::None,
        };
        let c = InsiderScorer.score(&summary);
        assert_eq!(c.score, 0.0);
        assert!(c.reasons.is_empty());
    }
}
