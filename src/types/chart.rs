use serde::{Deserialize, Serialize};

/// Column-oriented price history for charting clients.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    pub dates: Vec<String>,
    pub prices: Vec<f64>,
    pub volumes: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub open: Vec<f64>,
    /// Rolling SMA(20), `None` where the window is not yet full.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma_20: Option<Vec<Option<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma_50: Option<Vec<Option<f64>>>,
}
