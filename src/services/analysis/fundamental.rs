//! Fundamental ratio extraction and 0-100 sub-scores.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::FundamentalBenchmarks;
use crate::services::indicators::round_to;
use crate::services::numeric::field_or_zero;
use crate::types::FundamentalMetrics;

/// Raw company documents (Alpha Vantage overview, income statement, balance sheet).
#[derive(Debug, Clone, Default)]
pub struct FundamentalDocuments {
    pub overview: Option<Value>,
    pub income: Option<Value>,
    pub balance: Option<Value>,
}

impl FundamentalDocuments {
    pub fn is_empty(&self) -> bool {
        self.overview.is_none() && self.income.is_none() && self.balance.is_none()
    }
}

/// Ratios derived from the documents. Margins and returns are percentages.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FundamentalRatios {
    pub pe_ratio: f64,
    pub peg_ratio: f64,
    pub price_to_book: f64,
    pub price_to_sales: f64,
    pub ev_to_revenue: f64,
    pub ev_to_ebitda: f64,
    pub profit_margin: f64,
    pub operating_margin: f64,
    pub roe: f64,
    pub roa: f64,
    pub revenue_growth: f64,
    pub earnings_growth: f64,
    pub quarterly_revenue_growth: f64,
    pub quarterly_earnings_growth: f64,
    pub debt_to_equity: f64,
    pub current_ratio: f64,
    pub quick_ratio: f64,
    pub dividend_yield: f64,
    pub dividend_payout_ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FundamentalScores {
    pub valuation: f64,
    pub profitability: f64,
    pub growth: f64,
    pub health: f64,
    pub overall: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundamentalReport {
    pub metrics: FundamentalRatios,
    pub scores: FundamentalScores,
    pub interpretation: String,
    pub sector_avg_pe: f64,
}

impl FundamentalReport {
    /// Inputs of the fundamental component scorer.
    pub fn signal_metrics(&self) -> FundamentalMetrics {
        FundamentalMetrics {
            pe_ratio: self.metrics.pe_ratio,
            revenue_growth: self.metrics.revenue_growth,
            profit_margin: self.metrics.profit_margin,
            debt_to_equity: self.metrics.debt_to_equity,
            roe: self.metrics.roe,
            sector_avg_pe: self.sector_avg_pe,
        }
    }
}

/// Scores company fundamentals against sector benchmarks.
#[derive(Debug, Clone, Default)]
pub struct FundamentalAnalyzer {
    benchmarks: FundamentalBenchmarks,
}

impl FundamentalAnalyzer {
    pub fn new(benchmarks: FundamentalBenchmarks) -> Self {
        Self { benchmarks }
    }

    pub fn analyze(&self, docs: &FundamentalDocuments) -> FundamentalReport {
        let metrics = self.ratios(docs);

        let valuation = self.valuation_score(&metrics);
        let profitability = self.profitability_score(&metrics);
        let growth = self.growth_score(&metrics);
        let health = self.health_score(&metrics);
        let overall =
            valuation * 0.25 + profitability * 0.35 + growth * 0.25 + health * 0.15;

        FundamentalReport {
            metrics,
            scores: FundamentalScores {
                valuation,
                profitability,
                growth,
                health,
                overall,
            },
            interpretation: interpret(overall).to_string(),
            sector_avg_pe: self.benchmarks.pe_ratio,
        }
    }

    pub fn ratios(&self, docs: &FundamentalDocuments) -> FundamentalRatios {
        let empty = Value::Null;
        let o = docs.overview.as_ref().unwrap_or(&empty);

        let latest_balance = annual_report(docs.balance.as_ref(), 0);
        let (debt_to_equity, current_ratio, quick_ratio) = match latest_balance {
            Some(b) => {
                let liabilities = field_or_zero(b, "totalCurrentLiabilities");
                (
                    ratio(field_or_zero(b, "totalLiabilities"), field_or_zero(b, "totalShareholderEquity")),
                    ratio(field_or_zero(b, "totalCurrentAssets"), liabilities),
                    ratio(
                        field_or_zero(b, "totalCurrentAssets") - field_or_zero(b, "inventory"),
                        liabilities,
                    ),
                )
            }
            None => (0.0, 0.0, 0.0),
        };

        FundamentalRatios {
            pe_ratio: field_or_zero(o, "PERatio"),
            peg_ratio: field_or_zero(o, "PEGRatio"),
            price_to_book: field_or_zero(o, "PriceToBookRatio"),
            price_to_sales: field_or_zero(o, "PriceToSalesRatioTTM"),
            ev_to_revenue: field_or_zero(o, "EVToRevenue"),
            ev_to_ebitda: field_or_zero(o, "EVToEBITDA"),
            profit_margin: field_or_zero(o, "ProfitMargin") * 100.0,
            operating_margin: field_or_zero(o, "OperatingMarginTTM") * 100.0,
            roe: field_or_zero(o, "ReturnOnEquityTTM") * 100.0,
            roa: field_or_zero(o, "ReturnOnAssetsTTM") * 100.0,
            revenue_growth: annual_growth(docs.income.as_ref(), "totalRevenue"),
            earnings_growth: annual_growth(docs.income.as_ref(), "netIncome"),
            quarterly_revenue_growth: field_or_zero(o, "QuarterlyRevenueGrowthYOY") * 100.0,
            quarterly_earnings_growth: field_or_zero(o, "QuarterlyEarningsGrowthYOY") * 100.0,
            debt_to_equity,
            current_ratio,
            quick_ratio,
            dividend_yield: field_or_zero(o, "DividendYield") * 100.0,
            dividend_payout_ratio: field_or_zero(o, "PayoutRatio") * 100.0,
        }
    }

    fn valuation_score(&self, m: &FundamentalRatios) -> f64 {
        let pe_bench = self.benchmarks.pe_ratio;
        let mut score = 50.0;
        if m.pe_ratio > 0.0 && m.pe_ratio < pe_bench * 0.8 {
            score += 20.0;
        } else if m.pe_ratio > pe_bench * 1.5 {
            score -= 20.0;
        }
        if m.peg_ratio > 0.0 && m.peg_ratio < 1.0 {
            score += 15.0;
        } else if m.peg_ratio > 2.0 {
            score -= 15.0;
        }
        if m.price_to_book > 0.0 && m.price_to_book < 1.0 {
            score += 15.0;
        } else if m.price_to_book > 5.0 {
            score -= 10.0;
        }
        clamp_percent(score)
    }

    fn profitability_score(&self, m: &FundamentalRatios) -> f64 {
        let mut score = 50.0;
        if m.roe > self.benchmarks.roe {
            score += 20.0;
        } else if m.roe < self.benchmarks.roe * 0.5 {
            score -= 20.0;
        }
        if m.profit_margin > self.benchmarks.profit_margin {
            score += 20.0;
        } else if m.profit_margin < 5.0 {
            score -= 20.0;
        }
        if m.operating_margin > 20.0 {
            score += 10.0;
        } else if m.operating_margin < 10.0 {
            score -= 10.0;
        }
        clamp_percent(score)
    }

    fn growth_score(&self, m: &FundamentalRatios) -> f64 {
        let mut score = 50.0;
        if m.revenue_growth > self.benchmarks.revenue_growth {
            score += 25.0;
        } else if m.revenue_growth < 0.0 {
            score -= 25.0;
        }
        if m.earnings_growth > 15.0 {
            score += 25.0;
        } else if m.earnings_growth < 0.0 {
            score -= 25.0;
        }
        clamp_percent(score)
    }

    fn health_score(&self, m: &FundamentalRatios) -> f64 {
        let de_bench = self.benchmarks.debt_to_equity;
        let mut score = 50.0;
        if m.debt_to_equity < de_bench * 0.5 {
            score += 25.0;
        } else if m.debt_to_equity > de_bench * 2.0 {
            score -= 25.0;
        }
        if m.current_ratio > self.benchmarks.current_ratio {
            score += 25.0;
        } else if m.current_ratio < 1.0 {
            score -= 25.0;
        }
        clamp_percent(score)
    }
}

fn interpret(overall: f64) -> &'static str {
    if overall >= 75.0 {
        "Excellent fundamentals - Strong buy candidate"
    } else if overall >= 60.0 {
        "Good fundamentals - Consider buying"
    } else if overall >= 40.0 {
        "Average fundamentals - Neutral"
    } else if overall >= 25.0 {
        "Weak fundamentals - Consider selling"
    } else {
        "Poor fundamentals - Strong sell candidate"
    }
}

fn clamp_percent(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}

/// `numerator / denominator` rounded to cents, 0 on a zero denominator.
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        round_to(numerator / denominator, 2)
    }
}

fn annual_report(doc: Option<&Value>, index: usize) -> Option<&Value> {
    doc?.get("annualReports")?.as_array()?.get(index)
}

/// Year-over-year growth in percent between the two latest annual reports.
fn annual_growth(income: Option<&Value>, field: &str) -> f64 {
    match (annual_report(income, 0), annual_report(income, 1)) {
        (Some(current), Some(previous)) => {
            let prev = field_or_zero(previous, field);
            if prev == 0.0 {
                return 0.0;
            }
            round_to((field_or_zero(current, field) - prev) / prev * 100.0, 2)
        }
        _ => 0.0,
    }
}
