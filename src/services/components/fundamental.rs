use super::{ComponentScorer, RuleTally};
use crate::types::{ComponentKind, ComponentSignal, FundamentalMetrics};

/// Valuation, growth, margin, leverage and return rules.
#[derive(Debug, Clone, Default)]
pub struct FundamentalScorer;

impl ComponentScorer for FundamentalScorer {
    type Input = FundamentalMetrics;

    fn kind(&self) -> ComponentKind {
        ComponentKind::Fundamental
    }

    fn score(&self, m: &FundamentalMetrics) -> ComponentSignal {
        let mut tally = RuleTally::default();
        let sector = m.sector_avg_pe;

        if m.pe_ratio > 0.0 && m.pe_ratio < sector * 0.8 {
            tally.add(30.0, format!("Undervalued P/E: {:.2} vs sector {:.2}", m.pe_ratio, sector));
        } else if m.pe_ratio > sector * 1.2 {
            tally.add(-20.0, format!("Overvalued P/E: {:.2} vs sector {:.2}", m.pe_ratio, sector));
        }

        if m.revenue_growth > 10.0 {
            tally.add(25.0, format!("Strong revenue growth: {:.1}%", m.revenue_growth));
        } else if m.revenue_growth < 0.0 {
            tally.add(-25.0, format!("Negative revenue growth: {:.1}%", m.revenue_growth));
        }

        if m.profit_margin > 15.0 {
            tally.add(20.0, format!("Healthy profit margin: {:.1}%", m.profit_margin));
        } else if m.profit_margin < 5.0 {
            tally.add(-15.0, format!("Low profit margin: {:.1}%", m.profit_margin));
        }

        if m.debt_to_equity < 0.5 {
            tally.add(15.0, format!("Low debt/equity: {:.2}", m.debt_to_equity));
        } else if m.debt_to_equity > 2.0 {
            tally.add(-20.0, format!("High debt/equity: {:.2}", m.debt_to_equity));
        }

        if m.roe > 15.0 {
            tally.add(20.0, format!("Strong ROE: {:.1}%", m.roe));
        } else if m.roe < 5.0 {
            tally.add(-15.0, format!("Low ROE: {:.1}%", m.roe));
        }

        tally.finish(self.kind())
    }
}
