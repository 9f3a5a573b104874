use serde::{Deserialize, Serialize};

/// Simple moving averages over the standard tiers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SmaSet {
    pub sma_20: Option<f64>,
    pub sma_50: Option<f64>,
    pub sma_200: Option<f64>,
}

/// Exponential moving averages used by MACD.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EmaSet {
    pub ema_12: Option<f64>,
    pub ema_26: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MacdValues {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BollingerValues {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    pub width: f64,
    pub percent_b: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StochasticValues {
    pub k: f64,
    pub d: f64,
}

impl Default for StochasticValues {
    fn default() -> Self {
        Self { k: 50.0, d: 50.0 }
    }
}

/// Price/volume relationship of the latest bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeSignal {
    BullishStrong,
    BullishWeak,
    BearishStrong,
    BearishWeak,
    Neutral,
}

impl VolumeSignal {
    pub fn interpretation(&self) -> &'static str {
        match self {
            VolumeSignal::BullishStrong => "Price up on high volume - Strong bullish signal",
            VolumeSignal::BullishWeak => "Price up on low volume - Weak bullish signal",
            VolumeSignal::BearishStrong => "Price down on high volume - Strong bearish signal",
            VolumeSignal::BearishWeak => "Price down on low volume - Weak bearish signal",
            VolumeSignal::Neutral => "Normal volume activity",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeTrend {
    Increasing,
    Decreasing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeAnalysis {
    pub current: f64,
    pub avg_20: f64,
    pub avg_50: f64,
    pub ratio: f64,
    pub trend: VolumeTrend,
    pub signal: VolumeSignal,
    pub interpretation: String,
}

/// Up to three levels on each side plus the classic pivot.
///
/// `support` is ordered descending and `resistance` ascending.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SupportResistance {
    pub support: Vec<f64>,
    pub resistance: Vec<f64>,
    pub pivot: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    StrongUptrend,
    Uptrend,
    Neutral,
    Downtrend,
}

impl Trend {
    /// Display label, e.g. "Strong Uptrend".
    pub fn label(&self) -> &'static str {
        match self {
            Trend::StrongUptrend => "Strong Uptrend",
            Trend::Uptrend => "Uptrend",
            Trend::Neutral => "Neutral",
            Trend::Downtrend => "Downtrend",
        }
    }
}

/// Action label of the technical score alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TechnicalAction {
    #[serde(rename = "STRONG BUY")]
    StrongBuy,
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "HOLD")]
    Hold,
    #[serde(rename = "SELL")]
    Sell,
    #[serde(rename = "STRONG SELL")]
    StrongSell,
}

impl TechnicalAction {
    pub fn label(&self) -> &'static str {
        match self {
            TechnicalAction::StrongBuy => "STRONG BUY",
            TechnicalAction::Buy => "BUY",
            TechnicalAction::Hold => "HOLD",
            TechnicalAction::Sell => "SELL",
            TechnicalAction::StrongSell => "STRONG SELL",
        }
    }
}

/// Normalized technical score with the rules that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalStrength {
    /// -100 (strong sell) to +100 (strong buy).
    pub strength: f64,
    pub action: TechnicalAction,
    pub signals: Vec<String>,
    /// 0 to 100.
    pub confidence: f64,
}

/// Every indicator evaluated at the latest bar of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub current_price: f64,
    pub price_change: f64,
    pub price_change_percent: f64,
    pub volume: f64,
    pub sma: SmaSet,
    pub ema: EmaSet,
    pub rsi: f64,
    pub macd: MacdValues,
    pub bollinger_bands: BollingerValues,
    pub stochastic: StochasticValues,
    pub atr: f64,
    pub volume_analysis: VolumeAnalysis,
    pub support_resistance: SupportResistance,
    pub trend: Trend,
    /// Annualized, as a percentage.
    pub volatility: f64,
    pub signal_strength: SignalStrength,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_technical_action_serialization() {
        let json = serde_json::to_string(&TechnicalAction::StrongBuy).unwrap();
        assert_eq!(json, "\"STRONG BUY\"");
        let parsed: TechnicalAction = serde_json::from_str("\"SELL\"").unwrap();
        assert_eq!(parsed, TechnicalAction::Sell);
    }

    #[test]
    fn test_volume_signal_serialization() {
        let json = serde_json::to_string(&VolumeSignal::BearishWeak).unwrap();
        assert_eq!(json, "\"bearish_weak\"");
    }

    #[test]
    fn test_trend_label() {
        assert_eq!(Trend::StrongUptrend.label(), "Strong Uptrend");
        assert_eq!(
            serde_json::to_string(&Trend::StrongUptrend).unwrap(),
            "\"strong_uptrend\""
        );
    }

    #[test]
    fn test_stochastic_default_is_neutral() {
        let s = StochasticValues::default();
        assert_eq!((s.k, s.d), (50.0, 50.0));
    }
}
