use std::fmt;

use strategy::Strategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameDataError {
    MissingCell {
        brand1: Strategy,
        brand2: Strategy,
    },
    DuplicateCell {
        brand1: Strategy,
        brand2: Strategy,
    },
    UnknownEquilibrium {
        brand1: Strategy,
        brand2: Strategy,
    },
    DuplicateEquilibrium {
        brand1: Strategy,
        brand2: Strategy,
    },
}

impl fmt::Display for GameDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCell { brand1, brand2 } => {
                write!(f, "payoff table has no cell for ({brand1}, {brand2})")
            }
            Self::DuplicateCell { brand1, brand2 } => {
                write!(f, "payoff table defines ({brand1}, {brand2}) more than once")
            }
            Self::UnknownEquilibrium { brand1, brand2 } => {
                write!(
                    f,
                    "equilibrium ({brand1}, {brand2}) is not a cell of the payoff table"
                )
            }
            Self::DuplicateEquilibrium { brand1, brand2 } => {
                write!(f, "equilibrium ({brand1}, {brand2}) is listed more than once")
            }
        }
    }
}

impl std::error::Error for GameDataError {}
