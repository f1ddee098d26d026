use std::{
    env, fmt,
    net::{AddrParseError, SocketAddr},
};

use presenter::{ChartSource, ChartSourceError};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_FETCH_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug)]
pub enum ConfigError {
    InvalidListenAddr(AddrParseError),
    InvalidChartBase(ChartSourceError),
    InvalidFetchTimeout,
    NonUnicodeListenAddr,
    NonUnicodeChartBase,
    NonUnicodeFetchTimeout,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidListenAddr(err) => {
                write!(f, "DASHBOARD_ADDR is not a valid socket address: {err}")
            }
            Self::InvalidChartBase(err) => {
                write!(f, "DASHBOARD_CHART_BASE is not a usable base URL: {err}")
            }
            Self::InvalidFetchTimeout => {
                write!(
                    f,
                    "DASHBOARD_FETCH_TIMEOUT_MS must be a positive whole number of milliseconds"
                )
            }
            Self::NonUnicodeListenAddr => {
                write!(f, "DASHBOARD_ADDR contains non-unicode data")
            }
            Self::NonUnicodeChartBase => {
                write!(f, "DASHBOARD_CHART_BASE contains non-unicode data")
            }
            Self::NonUnicodeFetchTimeout => {
                write!(f, "DASHBOARD_FETCH_TIMEOUT_MS contains non-unicode data")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidListenAddr(err) => Some(err),
            Self::InvalidChartBase(err) => Some(err),
            Self::InvalidFetchTimeout
            | Self::NonUnicodeListenAddr
            | Self::NonUnicodeChartBase
            | Self::NonUnicodeFetchTimeout => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub chart_source: ChartSource,
    pub fetch_timeout_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let listen_addr = match env::var("DASHBOARD_ADDR") {
            Ok(value) => value.parse().map_err(ConfigError::InvalidListenAddr)?,
            Err(env::VarError::NotPresent) => DEFAULT_LISTEN_ADDR
                .parse()
                .expect("default listen address must be valid"),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicodeListenAddr);
            }
        };

        let chart_source = match env::var("DASHBOARD_CHART_BASE") {
            Ok(value) => {
                ChartSource::from_base_url(&value).map_err(ConfigError::InvalidChartBase)?
            }
            Err(env::VarError::NotPresent) => ChartSource::default(),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicodeChartBase);
            }
        };

        let fetch_timeout_ms = match env::var("DASHBOARD_FETCH_TIMEOUT_MS") {
            Ok(value) => match value.parse::<u64>() {
                Ok(parsed) if parsed > 0 => parsed,
                _ => return Err(ConfigError::InvalidFetchTimeout),
            },
            Err(env::VarError::NotPresent) => DEFAULT_FETCH_TIMEOUT_MS,
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicodeFetchTimeout);
            }
        };

        Ok(Self {
            listen_addr,
            chart_source,
            fetch_timeout_ms,
        })
    }
}
