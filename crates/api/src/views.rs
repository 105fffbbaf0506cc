use core_game::{PayoffGame, RoundResult};
use runtime::{
    logging::SessionLogWriter, summary::HistorySummary, GameSession, HistoryEntry, RoundPhase,
};
use serde::{Deserialize, Serialize};
use strategy::{profit_trend, Brand, ProfitTrend, Strategy};

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct BrandNames {
    pub brand1: String,
    pub brand2: String,
}

impl Default for BrandNames {
    fn default() -> Self {
        Self {
            brand1: "Marque A".to_owned(),
            brand2: "Marque B".to_owned(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct SelectStrategyRequest {
    pub brand: Brand,
    pub strategy: Strategy,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ResetRequest {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResultView {
    pub profit1: u32,
    pub profit2: u32,
    pub market_share1: f64,
    pub market_share2: f64,
    pub trend1: ProfitTrend,
    pub trend2: ProfitTrend,
}

impl ResultView {
    fn new(result: RoundResult, brand1: Strategy, brand2: Strategy) -> Self {
        Self {
            profit1: result.profit1,
            profit2: result.profit2,
            market_share1: result.market_share1,
            market_share2: result.market_share2,
            trend1: profit_trend(brand1, brand2),
            trend2: profit_trend(brand2, brand1),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub round: u32,
    pub phase: RoundPhase,
    pub is_active: bool,
    pub brand1_choice: Option<Strategy>,
    pub brand2_choice: Option<Strategy>,
    pub result: Option<ResultView>,
    pub history_len: usize,
    pub brand_names: BrandNames,
}

impl GameSnapshot {
    pub fn capture<L: SessionLogWriter>(session: &GameSession<L>, brand_names: &BrandNames) -> Self {
        let state = session.state();
        let result = match (session.last_result(), state.brand1_choice, state.brand2_choice) {
            (Some(result), Some(brand1), Some(brand2)) => {
                Some(ResultView::new(result, brand1, brand2))
            }
            _ => None,
        };

        Self {
            round: state.round,
            phase: state.phase(),
            is_active: state.is_active,
            brand1_choice: state.brand1_choice,
            brand2_choice: state.brand2_choice,
            result,
            history_len: session.history().len(),
            brand_names: brand_names.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayResponse {
    pub game: GameSnapshot,
    pub entry: HistoryEntry,
    pub equilibrium: bool,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct StrategyView {
    pub id: Strategy,
    pub label: &'static str,
    pub history_label: &'static str,
    pub past_tense: &'static str,
}

impl From<Strategy> for StrategyView {
    fn from(strategy: Strategy) -> Self {
        Self {
            id: strategy,
            label: strategy.label(),
            history_label: strategy.history_label(),
            past_tense: strategy.past_tense(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PayoffCellView {
    pub brand1_strategy: Strategy,
    pub brand2_strategy: Strategy,
    pub profit1: u32,
    pub profit2: u32,
    pub equilibrium: bool,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PayoffMatrixResponse {
    pub strategies: Vec<StrategyView>,
    pub cells: Vec<PayoffCellView>,
}

impl PayoffMatrixResponse {
    pub fn from_game(game: &PayoffGame) -> Self {
        Self {
            strategies: Strategy::ALL.into_iter().map(StrategyView::from).collect(),
            cells: game
                .table()
                .cells()
                .map(|(brand1, brand2, entry)| PayoffCellView {
                    brand1_strategy: brand1,
                    brand2_strategy: brand2,
                    profit1: entry.profit1,
                    profit2: entry.profit2,
                    equilibrium: game.is_equilibrium(brand1, brand2),
                })
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HistoryResponse {
    pub entries: Vec<HistoryEntry>,
    pub summary: Option<HistorySummary>,
}

impl HistoryResponse {
    pub fn from_history(history: &[HistoryEntry]) -> Self {
        Self {
            entries: history.to_vec(),
            summary: HistorySummary::from_history(history),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
