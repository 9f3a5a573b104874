//! Weighted fusion of component scores into a trade recommendation.

pub mod levels;

pub use levels::OrderLevels;

use tracing::debug;

use crate::config::DomainWeights;
use crate::services::indicators::round_to;
use crate::types::{
    clamp_score, ComponentKind, ComponentSignal, CompositeSignal, IndicatorSet, RiskLevel,
    TradeAction,
};

/// Maximum number of reasons carried into the composite.
const MAX_REASONS: usize = 10;

/// Fuses component signals using per-domain weights.
#[derive(Debug, Clone, Default)]
pub struct CompositeSignalGenerator {
    weights: DomainWeights,
}

impl CompositeSignalGenerator {
    pub fn new(weights: DomainWeights) -> Self {
        Self { weights }
    }

    /// Fuse `components` into one signal. Order levels come from `technical`.
    ///
    /// Components are reordered into fusion order (technical, fundamental,
    /// sentiment, insider); a repeated domain keeps its first occurrence.
    pub fn generate(
        &self,
        technical: Option<&IndicatorSet>,
        components: Vec<ComponentSignal>,
    ) -> CompositeSignal {
        let components = Self::ordered(components);

        let mut weighted = 0.0;
        let mut total_weight = 0.0;
        for c in &components {
            let w = self.weights.weight(c.kind);
            weighted += c.score * w;
            total_weight += w;
        }
        let strength = if total_weight > 0.0 {
            clamp_score(weighted / total_weight)
        } else {
            0.0
        };

        let (signal, risk_level) = classify(strength);
        let confidence = confidence(&components);
        let levels = OrderLevels::plan(signal, technical);

        debug!(
            "Composite from {} components: strength {:.2}, confidence {:.2}, {}",
            components.len(),
            strength,
            confidence,
            signal.label()
        );

        let reasoning = components
            .iter()
            .flat_map(|c| c.reasons.iter().cloned())
            .take(MAX_REASONS)
            .collect();

        CompositeSignal {
            signal,
            strength: round_to(strength, 2),
            confidence: round_to(confidence, 2),
            reasoning,
            risk_level,
            entry_price: levels.entry,
            stop_loss: levels.stop_loss,
            take_profit: levels.take_profit,
            risk_reward: levels.risk_reward,
            timeframe: levels.timeframe,
            components,
        }
    }

    fn ordered(mut components: Vec<ComponentSignal>) -> Vec<ComponentSignal> {
        let mut ordered = Vec::with_capacity(ComponentKind::ALL.len());
        for kind in ComponentKind::ALL {
            if let Some(pos) = components.iter().position(|c| c.kind == kind) {
                ordered.push(components.swap_remove(pos));
            }
        }
        ordered
    }
}

/// Action and risk tier for a fused score.
pub fn classify(score: f64) -> (TradeAction, RiskLevel) {
    if score >= 50.0 {
        (TradeAction::StrongBuy, RiskLevel::Medium)
    } else if score >= 25.0 {
        (TradeAction::Buy, RiskLevel::Low)
    } else if score >= 10.0 {
        (TradeAction::WeakBuy, RiskLevel::Low)
    } else if score <= -50.0 {
        (TradeAction::StrongSell, RiskLevel::High)
    } else if score <= -25.0 {
        (TradeAction::Sell, RiskLevel::Medium)
    } else if score <= -10.0 {
        (TradeAction::WeakSell, RiskLevel::Low)
    } else {
        (TradeAction::Hold, RiskLevel::Low)
    }
}

/// Agreement-based confidence in 0..=100.
///
/// Unanimous sign: 50 plus half the mean magnitude. Mixed (a zero score
/// counts as mixed): 50 minus the population standard deviation.
pub fn confidence(components: &[ComponentSignal]) -> f64 {
    if components.is_empty() {
        return 0.0;
    }
    let scores: Vec<f64> = components.iter().map(|c| c.score).collect();
    let n = scores.len() as f64;

    let all_positive = scores.iter().all(|s| *s > 0.0);
    let all_negative = scores.iter().all(|s| *s < 0.0);

    if all_positive || all_negative {
        let magnitude = scores.iter().map(|s| s.abs()).sum::<f64>() / n;
        (50.0 + magnitude * 0.5).min(100.0)
    } else {
        let mean = scores.iter().sum::<f64>() / n;
        let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
        (50.0 - variance.sqrt()).max(0.0)
    }
}
