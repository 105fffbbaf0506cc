use std::{
    env, fmt,
    net::{AddrParseError, SocketAddr},
};

use api::BrandNames;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_LOG_FILTER: &str = "info";
const DEFAULT_BRAND1_NAME: &str = "Marque A";
const DEFAULT_BRAND2_NAME: &str = "Marque B";

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub log_filter: String,
    pub brand1_name: String,
    pub brand2_name: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidListenAddr(AddrParseError),
    InvalidLogFilter,
    InvalidBrand1Name,
    InvalidBrand2Name,
    NonUnicodeListenAddr,
    NonUnicodeLogFilter,
    NonUnicodeBrand1Name,
    NonUnicodeBrand2Name,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidListenAddr(err) => {
                write!(f, "GAME_SERVER_ADDR is not a valid socket address: {err}")
            }
            Self::InvalidLogFilter => {
                write!(f, "GAME_LOG must not be empty or whitespace")
            }
            Self::InvalidBrand1Name => {
                write!(f, "GAME_BRAND1_NAME must not be empty or whitespace")
            }
            Self::InvalidBrand2Name => {
                write!(f, "GAME_BRAND2_NAME must not be empty or whitespace")
            }
            Self::NonUnicodeListenAddr => {
                write!(f, "GAME_SERVER_ADDR contains non-unicode data")
            }
            Self::NonUnicodeLogFilter => {
                write!(f, "GAME_LOG contains non-unicode data")
            }
            Self::NonUnicodeBrand1Name => {
                write!(f, "GAME_BRAND1_NAME contains non-unicode data")
            }
            Self::NonUnicodeBrand2Name => {
                write!(f, "GAME_BRAND2_NAME contains non-unicode data")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidListenAddr(err) => Some(err),
            Self::InvalidLogFilter => None,
            Self::InvalidBrand1Name => None,
            Self::InvalidBrand2Name => None,
            Self::NonUnicodeListenAddr => None,
            Self::NonUnicodeLogFilter => None,
            Self::NonUnicodeBrand1Name => None,
            Self::NonUnicodeBrand2Name => None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let listen_addr = match env::var("GAME_SERVER_ADDR") {
            Ok(value) => value.parse().map_err(ConfigError::InvalidListenAddr)?,
            Err(env::VarError::NotPresent) => DEFAULT_LISTEN_ADDR
                .parse()
                .expect("default listen address must be valid"),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicodeListenAddr);
            }
        };

        let log_filter = parse_non_blank_env(
            "GAME_LOG",
            DEFAULT_LOG_FILTER,
            ConfigError::InvalidLogFilter,
            ConfigError::NonUnicodeLogFilter,
        )?;

        let brand1_name = parse_non_blank_env(
            "GAME_BRAND1_NAME",
            DEFAULT_BRAND1_NAME,
            ConfigError::InvalidBrand1Name,
            ConfigError::NonUnicodeBrand1Name,
        )?;

        let brand2_name = parse_non_blank_env(
            "GAME_BRAND2_NAME",
            DEFAULT_BRAND2_NAME,
            ConfigError::InvalidBrand2Name,
            ConfigError::NonUnicodeBrand2Name,
        )?;

        Ok(Self {
            listen_addr,
            log_filter,
            brand1_name,
            brand2_name,
        })
    }

    pub fn brand_names(&self) -> BrandNames {
        BrandNames {
            brand1: self.brand1_name.clone(),
            brand2: self.brand2_name.clone(),
        }
    }
}

fn parse_non_blank_env(
    key: &str,
    default_value: &str,
    invalid_error: ConfigError,
    non_unicode_error: ConfigError,
) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return Err(invalid_error);
            }
            Ok(trimmed.to_owned())
        }
        Err(env::VarError::NotPresent) => Ok(default_value.to_owned()),
        Err(env::VarError::NotUnicode(_)) => Err(non_unicode_error),
    }
}
