//! Proposal action forms.
//!
//! This module validates the action sections of the new-proposal form
//! (withdrawing assets from the treasury and minting governance tokens) and
//! converts their user-entered amounts into raw on-chain units, ready to be
//! handed to the governance SDK.

/// Mint tokens action
pub mod mint;
/// DAI / SECOIN swap form
pub mod swap;
/// Withdraw assets action
pub mod withdraw;

pub use mint::{MintAction, MintAddressAmount, MintTokensForm};
pub use swap::{SwapDirection, SwapForm, SwapOrder};
pub use withdraw::{TokenChoice, WithdrawAction, WithdrawAssetsForm};

use crate::amount::{AmountError, parse_token_amount};
use num_bigint::BigUint;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

/// `0x` followed by 40 hex characters.
static ADDRESS_PATTERN: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^0x[a-fA-F0-9]{40}$").expect("address pattern is valid"));

/// Whether `input` is a well-formed account or contract address.
pub fn is_address(input: &str) -> bool {
	ADDRESS_PATTERN.is_match(input)
}

/// Problem with a single form field, worded for display next to the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
	#[error("This field is required")]
	Required,

	#[error("Please enter an address starting with 0x, followed by 40 address characters")]
	InvalidAddress,

	#[error("Please enter a number, e.g. 3.141")]
	InvalidNumber,

	#[error("This token supports at most {0} decimals")]
	TooPrecise(u32),

	#[error("Please add at least one wallet")]
	NoWallets,

	#[error("Token decimals {0} are not supported")]
	UnsupportedDecimals(u32),

	#[error("Invalid token amount")]
	InvalidTokenAmount,

	#[error("Token amount too high")]
	AmountTooHigh,

	#[error("Slippage is too low")]
	SlippageTooLow,

	#[error("Slippage is too high")]
	SlippageTooHigh,
}

impl From<AmountError> for FieldError {
	fn from(error: AmountError) -> Self {
		match error {
			AmountError::Empty => FieldError::Required,
			AmountError::UnsupportedDecimals(decimals) => FieldError::UnsupportedDecimals(decimals),
			AmountError::InvalidNumber(_) => FieldError::InvalidNumber,
			AmountError::TooPrecise { decimals, .. } => FieldError::TooPrecise(decimals),
		}
	}
}

/// A field error together with the path of the field, e.g. `wallets.1.amount`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
	pub field: String,
	pub error: FieldError,
}

impl fmt::Display for FieldIssue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}", self.field, self.error)
	}
}

/// All problems found in one action form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", .issues.iter().map(|issue| issue.to_string()).collect::<Vec<_>>().join("; "))]
pub struct ActionFormError {
	pub issues: Vec<FieldIssue>,
}

impl ActionFormError {
	/// The error reported for `field`, if any.
	pub fn field(&self, field: &str) -> Option<&FieldError> {
		self.issues
			.iter()
			.find(|issue| issue.field == field)
			.map(|issue| &issue.error)
	}
}

/// Collects field issues while a form is being validated.
#[derive(Debug, Default)]
pub(crate) struct IssueCollector {
	issues: Vec<FieldIssue>,
}

impl IssueCollector {
	pub(crate) fn push(&mut self, field: impl Into<String>, error: FieldError) {
		self.issues.push(FieldIssue {
			field: field.into(),
			error,
		});
	}

	/// Validate a required address field, returning it trimmed when valid.
	pub(crate) fn address(&mut self, field: &str, input: &str) -> Option<String> {
		let input = input.trim();
		if input.is_empty() {
			self.push(field, FieldError::Required);
			return None;
		}
		if !is_address(input) {
			self.push(field, FieldError::InvalidAddress);
			return None;
		}
		Some(input.to_string())
	}

	/// Validate a required amount field, returning it in raw units when valid.
	pub(crate) fn amount(&mut self, field: &str, input: &str, decimals: u32) -> Option<BigUint> {
		match parse_token_amount(input, decimals) {
			Ok(raw) => Some(raw),
			Err(error) => {
				self.push(field, error.into());
				None
			}
		}
	}

	pub(crate) fn finish<T>(self, value: Option<T>) -> Result<T, ActionFormError> {
		match value {
			Some(value) if self.issues.is_empty() => Ok(value),
			_ => Err(ActionFormError {
				issues: self.issues,
			}),
		}
	}
}
