//! Insider transaction summaries.

use serde_json::Value;

use crate::services::numeric::field_or_zero;
use crate::types::{InsiderActivity, InsiderSummary};

/// How many of the latest transactions are inspected for clusters.
const CLUSTER_WINDOW: usize = 10;
/// Same-side transactions within the window that make a cluster.
const CLUSTER_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Buy,
    Sell,
    Other,
}

fn side(transaction: &Value) -> Side {
    let kind = transaction
        .get("transaction_type")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_lowercase();
    if kind.contains("buy") || kind.contains("acquisition") {
        Side::Buy
    } else if kind.contains("sell") || kind.contains("sale") {
        Side::Sell
    } else {
        Side::Other
    }
}

/// Summarize a `{"data": [...]}` transaction document, newest first.
///
/// Returns `None` when the document carries no `data` array.
pub fn summarize(doc: &Value) -> Option<InsiderSummary> {
    let transactions = doc.get("data")?.as_array()?;

    let mut buyers = 0u32;
    let mut sellers = 0u32;
    let mut buy_value = 0.0;
    let mut sell_value = 0.0;
    for t in transactions {
        let value = field_or_zero(t, "securities_transacted") * field_or_zero(t, "security_price");
        match side(t) {
            Side::Buy => {
                buyers += 1;
                buy_value += value;
            }
            Side::Sell => {
                sellers += 1;
                sell_value += value;
            }
            Side::Other => {}
        }
    }

    let window = &transactions[..transactions.len().min(CLUSTER_WINDOW)];
    Some(InsiderSummary {
        net_value: buy_value - sell_value,
        buyers,
        sellers,
        recent_activity: clusters(window),
    })
}

fn clusters(recent: &[Value]) -> InsiderActivity {
    if recent.is_empty() {
        return InsiderActivity::None;
    }
    let buys = recent.iter().filter(|t| side(t) == Side::Buy).count();
    let sells = recent.iter().filter(|t| side(t) == Side::Sell).count();

    if buys >= CLUSTER_SIZE {
        InsiderActivity::BuyingCluster
    } else if sells >= CLUSTER_SIZE {
        InsiderActivity::SellingCluster
    } else if buys > sells {
        InsiderActivity::ModerateBuying
    } else if sells > buys {
        InsiderActivity::ModerateSelling
    } else {
        InsiderActivity::Mixed
    }
}
