//! Types for DAO treasury transfers and balances as delivered by the governance SDK

use crate::amount::TokenAmount;
use chrono::{DateTime, Utc};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// Direction of a treasury transfer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransferType {
	/// Funds sent into the DAO treasury
	Deposit,
	/// Funds sent out of the DAO treasury
	Withdraw,
}

/// Sign shown in front of a transfer amount.
pub fn transfer_type_to_sign(transfer_type: TransferType) -> &'static str {
	match transfer_type {
		TransferType::Withdraw => "-",
		TransferType::Deposit => "+",
	}
}

/// Kind of asset moved by a transfer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
	/// The chain's native currency
	Native,
	/// An ERC-20 token
	Erc20,
}

/// Metadata of an ERC-20 token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenInfo {
	pub address: String,
	pub name: String,
	pub symbol: String,
	pub decimals: u32,
}

/// Native currency metadata of the network the DAO lives on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NativeCurrency {
	pub name: String,
	pub symbol: String,
	pub decimals: u32,
}

impl Default for NativeCurrency {
	fn default() -> Self {
		Self {
			name: "Ether".to_string(),
			symbol: "ETH".to_string(),
			decimals: 18,
		}
	}
}

/// A single transfer into or out of the DAO treasury.
///
/// Amounts are carried as decimal strings on the wire since they routinely
/// exceed the range of JSON numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DaoTransfer {
	/// Deposit or withdraw
	#[serde(rename = "type")]
	pub transfer_type: TransferType,
	/// Native currency or ERC-20
	pub token_type: TokenType,
	/// Token metadata, present for ERC-20 transfers
	#[serde(default)]
	pub token: Option<TokenInfo>,
	/// Amount in the token's smallest unit
	#[serde(with = "decimal_string")]
	pub amount: BigUint,
	/// When the transfer was recorded
	pub creation_date: DateTime<Utc>,
	pub from: String,
	pub to: String,
	pub transaction_id: String,
	/// Proposal that executed the transfer, for withdrawals
	#[serde(default)]
	pub proposal_id: Option<String>,
}

impl DaoTransfer {
	/// Decimals and symbol of the transferred asset, if known.
	pub fn token_metadata<'a>(&'a self, native: &'a NativeCurrency) -> Option<(u32, &'a str)> {
		match self.token_type {
			TokenType::Native => Some((native.decimals, native.symbol.as_str())),
			TokenType::Erc20 => self
				.token
				.as_ref()
				.map(|token| (token.decimals, token.symbol.as_str())),
		}
	}

	/// Signed display amount, e.g. `-12k DAI` or `+0.50 ETH`.
	pub fn display_amount(&self, native: &NativeCurrency, on_error: &str) -> String {
		let metadata = self.token_metadata(native);
		TokenAmount {
			amount: Some(self.amount.clone()),
			decimals: metadata.map(|(decimals, _)| decimals),
			symbol: metadata.map(|(_, symbol)| symbol.to_string()),
			sign: transfer_type_to_sign(self.transfer_type).to_string(),
			on_error: on_error.to_string(),
		}
		.render()
	}

	/// The other side of the transfer as seen from the DAO.
	pub fn counterparty(&self) -> &str {
		match self.transfer_type {
			TransferType::Deposit => &self.from,
			TransferType::Withdraw => &self.to,
		}
	}

	/// Whether the DAO at `dao_address` sent or received this transfer.
	pub fn involves(&self, dao_address: &str) -> bool {
		self.from.eq_ignore_ascii_case(dao_address) || self.to.eq_ignore_ascii_case(dao_address)
	}

	/// One-line summary for listings.
	pub fn summary(&self, native: &NativeCurrency, on_error: &str) -> String {
		let direction = match self.transfer_type {
			TransferType::Deposit => "from",
			TransferType::Withdraw => "to",
		};
		format!(
			"{}  {}  {} {}",
			self.creation_date.format("%Y-%m-%d"),
			self.display_amount(native, on_error),
			direction,
			self.counterparty()
		)
	}
}

/// Balance of a single asset held by the DAO treasury.
///
/// Every field may be missing when the SDK cannot resolve the token.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DaoBalance {
	#[serde(default)]
	pub address: Option<String>,
	#[serde(default)]
	pub name: Option<String>,
	#[serde(default)]
	pub symbol: Option<String>,
	#[serde(default)]
	pub decimals: Option<u32>,
	#[serde(default, with = "optional_decimal_string")]
	pub balance: Option<BigUint>,
}

impl DaoBalance {
	/// Name, symbol, address and balance are all known.
	pub fn is_complete(&self) -> bool {
		self.name.is_some() && self.symbol.is_some() && self.address.is_some() && self.balance.is_some()
	}

	pub fn display_amount(&self, on_error: &str) -> String {
		TokenAmount {
			amount: self.balance.clone(),
			decimals: self.decimals,
			symbol: self.symbol.clone(),
			sign: String::new(),
			on_error: on_error.to_string(),
		}
		.render()
	}

	/// Label used in the withdraw token picker, e.g. `Dai Stablecoin - 12k DAI`.
	pub fn label(&self, on_error: &str) -> String {
		let name = match self.name.as_deref() {
			Some(name) if !name.is_empty() => name,
			_ => "Unknown",
		};
		format!("{} - {}", name, self.display_amount(on_error))
	}
}

/// Serde adapter for `BigUint` as a base-10 string.
pub(crate) mod decimal_string {
	use num_bigint::BigUint;
	use serde::{Deserialize, Deserializer, Serializer, de::Error};

	pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(value)
	}

	pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
		let raw = String::deserialize(deserializer)?;
		raw.parse()
			.map_err(|e| D::Error::custom(format!("invalid amount {raw:?}: {e}")))
	}
}

/// Serde adapter for `Option<BigUint>` as an optional base-10 string.
mod optional_decimal_string {
	use num_bigint::BigUint;
	use serde::{Deserialize, Deserializer, Serializer, de::Error};

	pub fn serialize<S: Serializer>(
		value: &Option<BigUint>,
		serializer: S,
	) -> Result<S::Ok, S::Error> {
		match value {
			Some(value) => serializer.collect_str(value),
			None => serializer.serialize_none(),
		}
	}

	pub fn deserialize<'de, D: Deserializer<'de>>(
		deserializer: D,
	) -> Result<Option<BigUint>, D::Error> {
		Option::<String>::deserialize(deserializer)?
			.map(|raw| {
				raw.parse()
					.map_err(|e| D::Error::custom(format!("invalid amount {raw:?}: {e}")))
			})
			.transpose()
	}
}
