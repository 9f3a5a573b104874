use super::{ComponentScorer, RuleTally};
use crate::types::{ComponentKind, ComponentSignal, SentimentSummary, SentimentTrend};

/// Polarity, coverage, momentum and buzz rules.
#[derive(Debug, Clone, Default)]
pub struct SentimentScorer;

impl ComponentScorer for SentimentScorer {
    type Input = SentimentSummary;

    fn kind(&self) -> ComponentKind {
        ComponentKind::Sentiment
    }

    fn score(&self, s: &SentimentSummary) -> ComponentSignal {
        let mut tally = RuleTally::default();

        // The polarity scales onto +-50 regardless of which band it falls in.
        tally.add_points(s.score * 50.0);
        if s.score > 0.5 {
            tally.note(format!("Very positive sentiment: {:.2}", s.score));
        } else if s.score > 0.2 {
            tally.note(format!("Positive sentiment: {:.2}", s.score));
        } else if s.score < -0.5 {
            tally.note(format!("Very negative sentiment: {:.2}", s.score));
        } else if s.score < -0.2 {
            tally.note(format!("Negative sentiment: {:.2}", s.score));
        }

        if s.news_volume > 100 {
            tally.add(10.0, format!("High news coverage: {} articles", s.news_volume));
        }

        match s.trend {
            SentimentTrend::Improving => tally.add(20.0, "Sentiment trend improving"),
            SentimentTrend::Deteriorating => tally.add(-20.0, "Sentiment trend deteriorating"),
            SentimentTrend::Stable => {}
        }

        if s.social_buzz > 80.0 {
            tally.add(15.0, format!("High social media buzz: {}%", s.social_buzz));
        }

        tally.finish(self.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_positive() {
        let summary = SentimentSummary {
            score: 0.6,
            trend: SentimentTrend::Improving,
            news_volume: 150,
            social_buzz: 90.0,
        };
        let c = SentimentScorer.score(&summary);
        assert!((c.score - 75.0).abs() < 1e-9);
        assert_eq!(
            c.reasons,
            vec![
                "Very positive sentiment: 0.60",
                "High news coverage: 150 articles",
                "Sentiment trend improving",
                "High social media buzz: 90%"
            ]
        );
    }

    #[test]
    fn test_sentiment_mild_score_has_no_reason() {
        let summary = SentimentSummary {
            score: 0.1,
            trend: SentimentTrend::Stable,
            news_volume: 10,
            social_buzz: 50.0,
        };
        let c = SentimentScorer.score(&summary);
        assert!((c.score - 5.0).abs() < 1e-9);
        assert!(c.reasons.is_empty());
    }

    #[test]
    fn test_sentiment_negative() {
        let summary = SentimentSummary {
            score: -0.3,
            trend: SentimentTrend::Deteriorating,
            news_volume: 0,
            social_buzz: 0.0,
        };
        let c = SentimentScorer.score(&summary);
        assert!((c.score + 35.0).abs() < 1e-9);
        assert_eq!(c.reasons[0], "Negative sentiment: -0.30");
    }
}
