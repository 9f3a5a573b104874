//! News, transcript and vendor sentiment blending.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::services::indicators::round_to;
use crate::services::numeric::{field_or_zero, parse_numeric_or};
use crate::types::{SentimentSummary, SentimentTrend};

const NEWS_WEIGHT: f64 = 0.35;
const TRANSCRIPT_WEIGHT: f64 = 0.35;
const SCORES_WEIGHT: f64 = 0.30;

/// Number of most recent vendor scores averaged into the score source.
const RECENT_SCORES: usize = 10;

/// Raw sentiment documents for one symbol.
#[derive(Debug, Clone, Default)]
pub struct SentimentDocuments {
    pub symbol: String,
    /// Either `{"articles": [...]}` or a bare article array.
    pub news: Option<Value>,
    pub transcripts: Vec<Value>,
    /// EODHD-style `{"IBM.US": [{"date", "normalized", ...}]}`.
    pub scores: Option<Value>,
}

impl SentimentDocuments {
    pub fn is_empty(&self) -> bool {
        self.news.is_none() && self.transcripts.is_empty() && self.scores.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NewsSentiment {
    pub score: f64,
    pub article_count: u32,
    pub positive_articles: u32,
    pub negative_articles: u32,
    pub neutral_articles: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSentiment {
    pub score: f64,
    pub transcript_count: u32,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSentiment {
    pub score: f64,
    pub data_points: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentSources {
    pub news: Option<NewsSentiment>,
    pub transcripts: Option<TranscriptSentiment>,
    pub scores: Option<ScoreSentiment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReport {
    /// -1 to 1, rounded to three places.
    pub score: f64,
    pub trend: SentimentTrend,
    pub news_volume: u32,
    pub social_buzz: f64,
    pub interpretation: String,
    pub components: SentimentSources,
    pub signals: Vec<String>,
}

impl SentimentReport {
    /// Inputs of the sentiment component scorer.
    pub fn summary(&self) -> SentimentSummary {
        SentimentSummary {
            score: self.score,
            trend: self.trend,
            news_volume: self.news_volume,
            social_buzz: self.social_buzz,
        }
    }
}

/// Blends the available sentiment sources with fixed weights.
#[derive(Debug, Clone, Default)]
pub struct SentimentAnalyzer;

impl SentimentAnalyzer {
    pub fn analyze(&self, docs: &SentimentDocuments) -> SentimentReport {
        let news = docs.news.as_ref().and_then(news_sentiment);
        let transcripts = transcript_sentiment(&docs.transcripts);
        let history = score_history(docs.scores.as_ref(), &docs.symbol);
        let scores = (!history.is_empty()).then(|| {
            let recent = &history[..history.len().min(RECENT_SCORES)];
            ScoreSentiment {
                score: recent.iter().sum::<f64>() / recent.len() as f64,
                data_points: history.len() as u32,
            }
        });

        let mut combined = 0.0;
        let mut total_weight = 0.0;
        if let Some(n) = &news {
            combined += n.score * NEWS_WEIGHT;
            total_weight += NEWS_WEIGHT;
        }
        if let Some(t) = &transcripts {
            combined += t.score * TRANSCRIPT_WEIGHT;
            total_weight += TRANSCRIPT_WEIGHT;
        }
        if let Some(s) = &scores {
            combined += s.score * SCORES_WEIGHT;
            total_weight += SCORES_WEIGHT;
        }
        let score = if total_weight > 0.0 {
            combined / total_weight
        } else {
            0.0
        };

        let trend = trend(&history);
        let news_volume = news.map(|n| n.article_count).unwrap_or(0);
        let social_buzz = social_buzz(news_volume, scores.map(|s| s.data_points).unwrap_or(0));

        SentimentReport {
            score: round_to(score, 3),
            trend,
            news_volume,
            social_buzz,
            interpretation: interpret(score, trend, news_volume),
            components: SentimentSources {
                news,
                transcripts,
                scores,
            },
            signals: signals(score, trend, news_volume),
        }
    }
}

fn news_sentiment(news: &Value) -> Option<NewsSentiment> {
    let articles = match news {
        Value::Array(items) => items,
        Value::Object(_) => news.get("articles")?.as_array()?,
        _ => return None,
    };
    if articles.is_empty() {
        return None;
    }

    let mut total = 0.0;
    let mut rated = 0u32;
    let mut positive = 0u32;
    let mut negative = 0u32;
    for article in articles {
        let Some(sentiment) = article.get("sentiment").filter(|s| s.is_object()) else {
            continue;
        };
        let polarity = field_or_zero(sentiment, "polarity");
        total += polarity;
        rated += 1;
        if polarity > 0.1 {
            positive += 1;
        } else if polarity < -0.1 {
            negative += 1;
        }
    }

    Some(NewsSentiment {
        score: if rated > 0 { total / rated as f64 } else { 0.0 },
        article_count: articles.len() as u32,
        positive_articles: positive,
        negative_articles: negative,
        neutral_articles: rated - positive - negative,
    })
}

fn transcript_sentiment(transcripts: &[Value]) -> Option<TranscriptSentiment> {
    if transcripts.is_empty() {
        return None;
    }

    let mut total = 0.0;
    let mut rated = 0u32;
    for transcript in transcripts {
        let Some(analysis) = transcript.get("sentiment_analysis").filter(|a| a.is_object()) else {
            continue;
        };
        let overall = analysis.get("overall_sentiment");
        total += match overall {
            Some(Value::String(label)) => label_polarity(label),
            other => parse_numeric_or(other, 0.0, "overall_sentiment"),
        };
        rated += 1;
    }

    Some(TranscriptSentiment {
        score: if rated > 0 { total / rated as f64 } else { 0.0 },
        transcript_count: transcripts.len() as u32,
        confidence: (transcripts.len() as f64 * 12.5).min(100.0),
    })
}

/// Numeric polarity of a textual sentiment label.
fn label_polarity(label: &str) -> f64 {
    match label.to_lowercase().as_str() {
        "very_positive" => 0.8,
        "positive" => 0.5,
        "negative" => -0.5,
        "very_negative" => -0.8,
        other => other.parse().unwrap_or(0.0),
    }
}

/// Normalized vendor scores, most recent first.
fn score_history(scores: Option<&Value>, symbol: &str) -> Vec<f64> {
    let Some(Value::Object(map)) = scores else {
        return Vec::new();
    };
    let symbol = symbol.to_uppercase();
    map.iter()
        .find(|(key, _)| key.ends_with(".US") || (!symbol.is_empty() && key.contains(&symbol)))
        .and_then(|(_, entries)| entries.as_array())
        .map(|entries| entries.iter().map(|e| field_or_zero(e, "normalized")).collect())
        .unwrap_or_default()
}

/// Recent five scores against an older window of five.
fn trend(history: &[f64]) -> SentimentTrend {
    if history.len() < 5 {
        return SentimentTrend::Stable;
    }
    let recent = &history[..5];
    let older = if history.len() > 15 {
        &history[10..15]
    } else {
        &history[history.len() - 5..]
    };

    let diff = recent.iter().sum::<f64>() / 5.0 - older.iter().sum::<f64>() / 5.0;
    if diff > 0.1 {
        SentimentTrend::Improving
    } else if diff < -0.1 {
        SentimentTrend::Deteriorating
    } else {
        SentimentTrend::Stable
    }
}

fn social_buzz(article_count: u32, data_points: u32) -> f64 {
    let mut buzz: f64 = 50.0;
    if article_count > 50 {
        buzz += 30.0;
    } else if article_count > 20 {
        buzz += 15.0;
    } else if article_count < 5 {
        buzz -= 20.0;
    }
    if data_points > 30 {
        buzz += 20.0;
    } else if data_points > 10 {
        buzz += 10.0;
    }
    buzz.clamp(0.0, 100.0)
}

fn interpret(score: f64, trend: SentimentTrend, volume: u32) -> String {
    let level = if score >= 0.5 {
        "Very positive"
    } else if score >= 0.2 {
        "Positive"
    } else if score >= 0.1 {
        "Slightly positive"
    } else if score >= -0.1 {
        "Neutral"
    } else if score >= -0.2 {
        "Negative"
    } else {
        "Very negative"
    };
    let trend_text = match trend {
        SentimentTrend::Improving => " and improving",
        SentimentTrend::Deteriorating => " but deteriorating",
        SentimentTrend::Stable => " and stable",
    };
    let volume_text = if volume > 50 {
        " with high news coverage"
    } else if volume > 20 {
        " with moderate news coverage"
    } else {
        " with low news coverage"
    };
    format!("{level} sentiment{trend_text}{volume_text}")
}

fn signals(score: f64, trend: SentimentTrend, volume: u32) -> Vec<String> {
    let mut out = Vec::new();
    if score >= 0.5 {
        out.push("Strong positive sentiment - Bullish signal");
    } else if score >= 0.2 {
        out.push("Positive sentiment - Moderate bullish signal");
    } else if score <= -0.5 {
        out.push("Very negative sentiment - Bearish signal");
    } else if score <= -0.2 {
        out.push("Negative sentiment - Moderate bearish signal");
    }
    match trend {
        SentimentTrend::Improving => out.push("Sentiment trend improving - Momentum building"),
        SentimentTrend::Deteriorating => out.push("Sentiment trend deteriorating - Caution advised"),
        SentimentTrend::Stable => {}
    }
    if volume > 50 {
        out.push("High news volume - Increased volatility expected");
    } else if volume < 5 {
        out.push("Low news coverage - Limited sentiment impact");
    }
    out.into_iter().map(String::from).collect()
}
