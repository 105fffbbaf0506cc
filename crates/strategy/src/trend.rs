use serde::Serialize;

use crate::pricing::Strategy;

/// Arrow shown next to a brand's profit in the results panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfitTrend {
    Up,
    Down,
    Flat,
}

pub fn profit_trend(own: Strategy, other: Strategy) -> ProfitTrend {
    match (own, other) {
        (Strategy::Lower, Strategy::Lower) => ProfitTrend::Down,
        (Strategy::Lower, _) => ProfitTrend::Up,
        (Strategy::Raise, Strategy::Raise) => ProfitTrend::Flat,
        (Strategy::Raise, _) => ProfitTrend::Up,
        (Strategy::Maintain, _) => ProfitTrend::Flat,
    }
}
