use serde::Serialize;

use crate::session::HistoryEntry;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistorySummary {
    pub rounds: usize,
    pub total_profit1: u64,
    pub total_profit2: u64,
    pub mean_market_share1: f64,
    pub mean_market_share2: f64,
    pub equilibrium_rounds: usize,
}

impl HistorySummary {
    pub fn from_history(history: &[HistoryEntry]) -> Option<Self> {
        if history.is_empty() {
            return None;
        }

        let rounds = history.len();
        let mut summary = Self {
            rounds,
            total_profit1: 0,
            total_profit2: 0,
            mean_market_share1: 0.0,
            mean_market_share2: 0.0,
            equilibrium_rounds: 0,
        };

        for entry in history {
            summary.total_profit1 += u64::from(entry.result.profit1);
            summary.total_profit2 += u64::from(entry.result.profit2);
            summary.mean_market_share1 += entry.result.market_share1;
            summary.mean_market_share2 += entry.result.market_share2;
            if entry.equilibrium {
                summary.equilibrium_rounds += 1;
            }
        }

        summary.mean_market_share1 /= rounds as f64;
        summary.mean_market_share2 /= rounds as f64;
        Some(summary)
    }
}
