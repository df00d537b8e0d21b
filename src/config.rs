use crate::amount::display::DEFAULT_ON_ERROR;
use crate::transfer::NativeCurrency;
use std::env;
use thiserror::Error;
use tracing::warn;

/// Number of transfers listed when `TRANSFER_LIMIT` is not set.
pub const DEFAULT_TRANSFER_LIMIT: usize = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
	#[error("DAO address env variable isn't set")]
	MissingDaoAddress,

	#[error("Invalid value {value:?} for {key}")]
	InvalidValue { key: &'static str, value: String },
}

/// Configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	/// Address (or ENS name) of the DAO whose treasury is shown
	pub dao_address: Option<String>,
	/// Maximum number of transfers listed
	pub transfer_limit: usize,
	/// Fallback parsed when an amount cannot be scaled
	pub on_error: String,
	/// Currency used for native transfers and gas fees
	pub native_currency: NativeCurrency,
}

impl Config {
	/// Load configuration from the process environment.
	///
	/// Call `dotenv::dotenv()` first to pick up a `.env` file.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|key| env::var(key).ok())
	}

	/// Load configuration through `lookup`, which returns the value of a variable if set.
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
		let dao_address = lookup("DAO_ADDRESS")
			.map(|s| s.trim().to_string())
			.filter(|s| !s.is_empty());
		if dao_address.is_none() {
			warn!("DAO_ADDRESS is not set, transfer listing is unavailable");
		}

		let transfer_limit = match lookup("TRANSFER_LIMIT") {
			Some(value) => value
				.trim()
				.parse()
				.map_err(|_| ConfigError::InvalidValue {
					key: "TRANSFER_LIMIT",
					value,
				})?,
			None => DEFAULT_TRANSFER_LIMIT,
		};

		let on_error = lookup("AMOUNT_ON_ERROR").unwrap_or_else(|| DEFAULT_ON_ERROR.to_string());

		let defaults = NativeCurrency::default();
		let native_decimals = match lookup("NATIVE_DECIMALS") {
			Some(value) => value
				.trim()
				.parse()
				.map_err(|_| ConfigError::InvalidValue {
					key: "NATIVE_DECIMALS",
					value,
				})?,
			None => defaults.decimals,
		};
		let native_currency = NativeCurrency {
			name: lookup("NATIVE_NAME").unwrap_or(defaults.name),
			symbol: lookup("NATIVE_SYMBOL").unwrap_or(defaults.symbol),
			decimals: native_decimals,
		};

		Ok(Self {
			dao_address,
			transfer_limit,
			on_error,
			native_currency,
		})
	}

	/// The configured DAO address, required for listing transfers.
	pub fn dao_address(&self) -> Result<&str, ConfigError> {
		self.dao_address
			.as_deref()
			.ok_or(ConfigError::MissingDaoAddress)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;

	fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
		let vars: HashMap<String, String> = vars
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();
		Config::from_lookup(|key| vars.get(key).cloned())
	}

	#[test]
	fn test_defaults() {
		let config = config_from(&[]).unwrap();
		assert_eq!(config.dao_address, None);
		assert_eq!(config.transfer_limit, DEFAULT_TRANSFER_LIMIT);
		assert_eq!(config.on_error, "-");
		assert_eq!(config.native_currency, NativeCurrency::default());
		assert_eq!(config.dao_address(), Err(ConfigError::MissingDaoAddress));
	}

	#[test]
	fn test_overrides() {
		let config = config_from(&[
			("DAO_ADDRESS", " 0xdao "),
			("TRANSFER_LIMIT", "25"),
			("AMOUNT_ON_ERROR", "?"),
			("NATIVE_NAME", "Matic"),
			("NATIVE_SYMBOL", "MATIC"),
			("NATIVE_DECIMALS", "18"),
		])
		.unwrap();
		assert_eq!(config.dao_address(), Ok("0xdao"));
		assert_eq!(config.transfer_limit, 25);
		assert_eq!(config.on_error, "?");
		assert_eq!(config.native_currency.symbol, "MATIC");
	}

	#[test]
	fn test_blank_dao_address_is_missing() {
		let config = config_from(&[("DAO_ADDRESS", "  ")]).unwrap();
		assert_eq!(config.dao_address(), Err(ConfigError::MissingDaoAddress));
	}

	#[test]
	fn test_invalid_numbers() {
		assert_eq!(
			config_from(&[("TRANSFER_LIMIT", "ten")]),
			Err(ConfigError::InvalidValue {
				key: "TRANSFER_LIMIT",
				value: "ten".to_string()
			})
		);
		assert!(config_from(&[("NATIVE_DECIMALS", "-1")]).is_err());
	}
}
