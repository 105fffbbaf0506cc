use strategy::Strategy;

use crate::{
    data::{SHIPPED_CELLS, SHIPPED_EQUILIBRIA},
    equilibrium::EquilibriumSet,
    error::GameDataError,
    payoff::{resolve_round, PayoffTable, RoundResult},
};

/// Payoff table plus the equilibrium pairs marked on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayoffGame {
    table: PayoffTable,
    equilibria: EquilibriumSet,
}

impl PayoffGame {
    pub fn new(table: PayoffTable, equilibria: EquilibriumSet) -> Self {
        Self { table, equilibria }
    }

    /// Builds the bundled price-war table, validating both data sets.
    pub fn shipped() -> Result<Self, GameDataError> {
        let table = PayoffTable::from_cells(&SHIPPED_CELLS)?;
        let equilibria = EquilibriumSet::new(&SHIPPED_EQUILIBRIA, &table)?;
        Ok(Self::new(table, equilibria))
    }

    pub fn resolve(&self, brand1: Strategy, brand2: Strategy) -> RoundResult {
        resolve_round(&self.table, brand1, brand2)
    }

    pub fn is_equilibrium(&self, brand1: Strategy, brand2: Strategy) -> bool {
        self.equilibria.contains(brand1, brand2)
    }

    pub fn table(&self) -> &PayoffTable {
        &self.table
    }

    pub fn equilibria(&self) -> &EquilibriumSet {
        &self.equilibria
    }
}
