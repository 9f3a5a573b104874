//! Per-domain component scorers.
//!
//! Each scorer maps one analysis summary onto a [`ComponentSignal`] whose
//! score is clamped to -100..=100 and whose reasons follow rule order.

pub mod fundamental;
pub mod insider;
pub mod sentiment;

pub use fundamental::FundamentalScorer;
pub use insider::InsiderScorer;
pub use sentiment::SentimentScorer;

use crate::types::{ComponentKind, ComponentSignal};

/// Trait for scoring one analysis domain.
pub trait ComponentScorer: Send + Sync {
    type Input;

    /// Domain this scorer reports for.
    fn kind(&self) -> ComponentKind;

    /// Score the summary, returning a clamped component.
    fn score(&self, input: &Self::Input) -> ComponentSignal;
}

/// Accumulates rule points and reasons for a component.
#[derive(Debug, Default)]
pub(crate) struct RuleTally {
    score: f64,
    reasons: Vec<String>,
}

impl RuleTally {
    pub fn add(&mut self, points: f64, reason: impl Into<String>) {
        self.score += points;
        self.reasons.push(reason.into());
    }

    pub fn add_points(&mut self, points: f64) {
        self.score += points;
    }

    pub fn note(&mut self, reason: impl Into<String>) {
        self.reasons.push(reason.into());
    }

    pub fn finish(self, kind: ComponentKind) -> ComponentSignal {
        ComponentSignal::new(kind, self.score, self.reasons)
    }
}
