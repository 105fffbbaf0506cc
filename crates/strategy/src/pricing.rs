use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A brand's pricing decision for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Lower,
    Maintain,
    Raise,
}

impl Strategy {
    /// Table order: rows and columns of the payoff matrix follow this order.
    pub const ALL: [Strategy; 3] = [Strategy::Lower, Strategy::Maintain, Strategy::Raise];

    pub fn index(self) -> usize {
        match self {
            Self::Lower => 0,
            Self::Maintain => 1,
            Self::Raise => 2,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "lower" => Some(Self::Lower),
            "maintain" => Some(Self::Maintain),
            "raise" => Some(Self::Raise),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lower => "lower",
            Self::Maintain => "maintain",
            Self::Raise => "raise",
        }
    }

    /// Button label shown on the decision cards.
    pub fn label(self) -> &'static str {
        match self {
            Self::Lower => "Baisser les prix",
            Self::Maintain => "Maintenir les prix",
            Self::Raise => "Augmenter les prix",
        }
    }

    /// Short label used in the history table and CSV export.
    pub fn history_label(self) -> &'static str {
        match self {
            Self::Lower => "Baisse",
            Self::Maintain => "Maintien",
            Self::Raise => "Hausse",
        }
    }

    /// Completes "<brand> ..." in the results sentence.
    pub fn past_tense(self) -> &'static str {
        match self {
            Self::Lower => "a baissé ses prix",
            Self::Maintain => "a maintenu ses prix",
            Self::Raise => "a augmenté ses prix",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStrategy(pub String);

impl fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown strategy {:?}, expected one of: lower, maintain, raise",
            self.0
        )
    }
}

impl std::error::Error for UnknownStrategy {}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| UnknownStrategy(value.to_owned()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Brand {
    #[serde(rename = "brand1")]
    Brand1,
    #[serde(rename = "brand2")]
    Brand2,
}

impl Brand {
    pub const ALL: [Brand; 2] = [Brand::Brand1, Brand::Brand2];

    pub fn other(self) -> Self {
        match self {
            Self::Brand1 => Self::Brand2,
            Self::Brand2 => Self::Brand1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Brand1 => "brand1",
            Self::Brand2 => "brand2",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{Brand, Strategy};

    #[test]
    fn parse_accepts_wire_names_only() {
        assert_eq!(Strategy::parse("lower"), Some(Strategy::Lower));
        assert_eq!(Strategy::parse("maintain"), Some(Strategy::Maintain));
        assert_eq!(Strategy::parse("raise"), Some(Strategy::Raise));
        assert_eq!(Strategy::parse("Lower"), None);
        assert!("hold".parse::<Strategy>().is_err());
    }

    #[test]
    fn indices_follow_table_order() {
        for (expected, strategy) in Strategy::ALL.into_iter().enumerate() {
            assert_eq!(strategy.index(), expected);
        }
    }

    #[test]
    fn serde_uses_lowercase_strategy_and_brand_names() {
        assert_eq!(
            serde_json::to_string(&Strategy::Maintain).unwrap(),
            "\"maintain\""
        );
        assert_eq!(serde_json::to_string(&Brand::Brand2).unwrap(), "\"brand2\"");

        let brand: Brand = serde_json::from_str("\"brand1\"").unwrap();
        assert_eq!(brand, Brand::Brand1);
    }

    #[test]
    fn other_brand_is_an_involution() {
        for brand in Brand::ALL {
            assert_ne!(brand.other(), brand);
            assert_eq!(brand.other().other(), brand);
        }
    }
}
