use serde::Serialize;
use strategy::Strategy;

use crate::error::GameDataError;

/// Market shares used when a cell pays nothing to either brand.
pub const ZERO_TOTAL_MARKET_SHARE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PayoffEntry {
    pub profit1: u32,
    pub profit2: u32,
}

impl PayoffEntry {
    pub const fn new(profit1: u32, profit2: u32) -> Self {
        Self { profit1, profit2 }
    }

    pub fn total(self) -> u64 {
        u64::from(self.profit1) + u64::from(self.profit2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoundResult {
    pub profit1: u32,
    pub profit2: u32,
    pub market_share1: f64,
    pub market_share2: f64,
}

/// Total map from an ordered strategy pair to the brands' profits.
///
/// Rows are brand 1's strategy, columns brand 2's. The table is not assumed
/// symmetric: `(lower, maintain)` and `(maintain, lower)` are distinct cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayoffTable {
    cells: [[PayoffEntry; 3]; 3],
}

impl PayoffTable {
    pub fn from_cells(cells: &[(Strategy, Strategy, PayoffEntry)]) -> Result<Self, GameDataError> {
        let mut slots: [[Option<PayoffEntry>; 3]; 3] = [[None; 3]; 3];

        for &(brand1, brand2, entry) in cells {
            let slot = &mut slots[brand1.index()][brand2.index()];
            if slot.is_some() {
                return Err(GameDataError::DuplicateCell { brand1, brand2 });
            }
            *slot = Some(entry);
        }

        let mut table = [[PayoffEntry::new(0, 0); 3]; 3];
        for brand1 in Strategy::ALL {
            for brand2 in Strategy::ALL {
                table[brand1.index()][brand2.index()] = slots[brand1.index()][brand2.index()]
                    .ok_or(GameDataError::MissingCell { brand1, brand2 })?;
            }
        }

        Ok(Self { cells: table })
    }

    pub fn entry(&self, brand1: Strategy, brand2: Strategy) -> PayoffEntry {
        self.cells[brand1.index()][brand2.index()]
    }

    pub fn contains(&self, brand1: Strategy, brand2: Strategy) -> bool {
        self.cells().any(|(a, b, _)| a == brand1 && b == brand2)
    }

    /// All nine cells, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Strategy, Strategy, PayoffEntry)> + '_ {
        Strategy::ALL.into_iter().flat_map(move |brand1| {
            Strategy::ALL
                .into_iter()
                .map(move |brand2| (brand1, brand2, self.entry(brand1, brand2)))
        })
    }
}

pub fn resolve_round(table: &PayoffTable, brand1: Strategy, brand2: Strategy) -> RoundResult {
    let entry = table.entry(brand1, brand2);
    let (market_share1, market_share2) = market_shares(entry);

    RoundResult {
        profit1: entry.profit1,
        profit2: entry.profit2,
        market_share1,
        market_share2,
    }
}

pub fn market_shares(entry: PayoffEntry) -> (f64, f64) {
    let total = entry.total();
    if total == 0 {
        return (ZERO_TOTAL_MARKET_SHARE, ZERO_TOTAL_MARKET_SHARE);
    }

    let total = total as f64;
    (
        f64::from(entry.profit1) / total,
        f64::from(entry.profit2) / total,
    )
}
