//! Summaries supplied by the non-technical analyzers.

use serde::{Deserialize, Serialize};

/// Key fundamental ratios. Percentages are expressed as whole numbers (15.0 = 15%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FundamentalMetrics {
    pub pe_ratio: f64,
    pub revenue_growth: f64,
    pub profit_margin: f64,
    pub debt_to_equity: f64,
    pub roe: f64,
    #[serde(default = "default_sector_pe")]
    pub sector_avg_pe: f64,
}

fn default_sector_pe() -> f64 {
    25.0
}

impl Default for FundamentalMetrics {
    fn default() -> Self {
        Self {
            pe_ratio: 0.0,
            revenue_growth: 0.0,
            profit_margin: 0.0,
            debt_to_equity: 0.0,
            roe: 0.0,
            sector_avg_pe: default_sector_pe(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentTrend {
    Improving,
    Deteriorating,
    #[default]
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentSummary {
    /// -1 (very negative) to 1 (very positive).
    pub score: f64,
    pub trend: SentimentTrend,
    pub news_volume: u32,
    /// 0 to 100.
    pub social_buzz: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsiderActivity {
    BuyingCluster,
    SellingCluster,
    ModerateBuying,
    ModerateSelling,
    Mixed,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsiderSummary {
    /// Buy value minus sell value, in currency units.
    pub net_value: f64,
    pub buyers: u32,
    pub sellers: u32,
    pub recent_activity: InsiderActivity,
}
