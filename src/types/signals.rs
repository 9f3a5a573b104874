use serde::{Deserialize, Serialize};

/// Analysis domain a component score comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Technical,
    Fundamental,
    Sentiment,
    Insider,
}

impl ComponentKind {
    /// Fusion order used for reasoning and component listing.
    pub const ALL: [ComponentKind; 4] = [
        ComponentKind::Technical,
        ComponentKind::Fundamental,
        ComponentKind::Sentiment,
        ComponentKind::Insider,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ComponentKind::Technical => "technical",
            ComponentKind::Fundamental => "fundamental",
            ComponentKind::Sentiment => "sentiment",
            ComponentKind::Insider => "insider",
        }
    }
}

/// Score from one analysis domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSignal {
    /// -100 to +100.
    pub score: f64,
    /// Human-readable rationale, in rule order.
    pub reasons: Vec<String>,
    #[serde(rename = "type")]
    pub kind: ComponentKind,
}

impl ComponentSignal {
    /// Build a component, clamping the score into range.
    pub fn new(kind: ComponentKind, score: f64, reasons: Vec<String>) -> Self {
        Self {
            score: clamp_score(score),
            reasons,
            kind,
        }
    }
}

/// Clamp a score to the -100..=100 range. Non-finite input collapses to 0.
pub fn clamp_score(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(-100.0, 100.0)
    } else {
        0.0
    }
}

/// Final recommendation of the composite generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeAction {
    #[serde(rename = "STRONG BUY")]
    StrongBuy,
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "WEAK BUY")]
    WeakBuy,
    #[serde(rename = "HOLD")]
    Hold,
    #[serde(rename = "WEAK SELL")]
    WeakSell,
    #[serde(rename = "SELL")]
    Sell,
    #[serde(rename = "STRONG SELL")]
    StrongSell,
}

impl TradeAction {
    pub fn label(&self) -> &'static str {
        match self {
            TradeAction::StrongBuy => "STRONG BUY",
            TradeAction::Buy => "BUY",
            TradeAction::WeakBuy => "WEAK BUY",
            TradeAction::Hold => "HOLD",
            TradeAction::WeakSell => "WEAK SELL",
            TradeAction::Sell => "SELL",
            TradeAction::StrongSell => "STRONG SELL",
        }
    }

    pub fn is_buy(&self) -> bool {
        matches!(
            self,
            TradeAction::StrongBuy | TradeAction::Buy | TradeAction::WeakBuy
        )
    }

    pub fn is_sell(&self) -> bool {
        matches!(
            self,
            TradeAction::StrongSell | TradeAction::Sell | TradeAction::WeakSell
        )
    }

    pub fn is_strong(&self) -> bool {
        matches!(self, TradeAction::StrongBuy | TradeAction::StrongSell)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Fused, explainable trade recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeSignal {
    pub signal: TradeAction,
    /// Weighted blend of component scores, -100 to +100.
    pub strength: f64,
    /// 0 to 100.
    pub confidence: f64,
    /// First ten reasons across components, in fusion order.
    pub reasoning: Vec<String>,
    pub risk_level: RiskLevel,
    pub entry_price: f64,
    pub stop_loss: f64,
    pub take_profit: Vec<f64>,
    pub risk_reward: f64,
    pub timeframe: String,
    pub components: Vec<ComponentSignal>,
}

impl CompositeSignal {
    /// Component contributed by a given domain, if it was present.
    pub fn component(&self, kind: ComponentKind) -> Option<&ComponentSignal> {
        self.components.iter().find(|c| c.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_score_is_clamped() {
        let c = ComponentSignal::new(ComponentKind::Insider, 125.0, vec![]);
        assert_eq!(c.score, 100.0);
        let c = ComponentSignal::new(ComponentKind::Insider, -300.0, vec![]);
        assert_eq!(c.score, -100.0);
    }

    #[test]
    fn test_clamp_score_non_finite() {
        assert_eq!(clamp_score(f64::NAN), 0.0);
        assert_eq!(clamp_score(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_trade_action_families() {
        assert!(TradeAction::WeakBuy.is_buy());
        assert!(!TradeAction::WeakBuy.is_strong());
        assert!(TradeAction::StrongSell.is_sell());
        assert!(TradeAction::StrongSell.is_strong());
        assert!(!TradeAction::Hold.is_buy() && !TradeAction::Hold.is_sell());
    }

    #[test]
    fn test_component_serializes_kind_as_type() {
        let c = ComponentSignal::new(ComponentKind::Sentiment, 10.0, vec!["x".into()]);
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["type"], "sentiment");
        assert_eq!(json["score"], 10.0);
    }

    #[test]
    fn test_risk_level_serialization() {
        assert_eq!(serde_json::to_string(&RiskLevel::Medium).unwrap(), "\"MEDIUM\"");
        assert_eq!(serde_json::to_string(&TradeAction::WeakSell).unwrap(), "\"WEAK SELL\"");
    }
}
