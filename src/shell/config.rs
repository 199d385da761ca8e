use std::net::SocketAddr;

use thiserror::Error;

use crate::modules::travel::core::fuel::{FuelPrice, FuelPriceError};

pub const HOST_VAR: &str = "TRAVEL_HOST";
pub const PORT_VAR: &str = "PORT";
pub const FUEL_PRICE_VAR: &str = "FUEL_PRICE_PER_LITER";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT {0:?}")]
    InvalidPort(String),

    #[error("invalid FUEL_PRICE_PER_LITER: {0}")]
    InvalidFuelPrice(#[from] FuelPriceError),

    #[error("invalid listen address {0:?}")]
    InvalidAddress(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub fuel_price: FuelPrice,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8282,
            fuel_price: FuelPrice::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source; unset keys keep their
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let host = lookup(HOST_VAR).unwrap_or(defaults.host);
        let port = match lookup(PORT_VAR) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };
        let fuel_price = match lookup(FUEL_PRICE_VAR) {
            Some(raw) => raw.parse()?,
            None => defaults.fuel_price,
        };
        Ok(Self {
            host,
            port,
            fuel_price,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ConfigError::InvalidAddress(raw))
    }
}
