use strategy::Strategy;

use crate::{error::GameDataError, payoff::PayoffTable};

/// Strategy pairs flagged as mutually stable.
///
/// The pairs are supplied data. Nothing here derives them from the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquilibriumSet {
    pairs: Vec<(Strategy, Strategy)>,
}

impl EquilibriumSet {
    pub fn new(pairs: &[(Strategy, Strategy)], table: &PayoffTable) -> Result<Self, GameDataError> {
        let mut accepted: Vec<(Strategy, Strategy)> = Vec::with_capacity(pairs.len());

        for &(brand1, brand2) in pairs {
            if !table.contains(brand1, brand2) {
                return Err(GameDataError::UnknownEquilibrium { brand1, brand2 });
            }
            if accepted.contains(&(brand1, brand2)) {
                return Err(GameDataError::DuplicateEquilibrium { brand1, brand2 });
            }
            accepted.push((brand1, brand2));
        }

        Ok(Self { pairs: accepted })
    }

    pub fn contains(&self, brand1: Strategy, brand2: Strategy) -> bool {
        self.pairs
            .iter()
            .any(|&(a, b)| a == brand1 && b == brand2)
    }

    pub fn pairs(&self) -> &[(Strategy, Strategy)] {
        &self.pairs
    }
}
