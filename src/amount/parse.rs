//! Conversion of user-entered decimal amounts into raw on-chain units.

use num_bigint::BigUint;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Digits with at most one decimal point, e.g. `3.141`, `10`, `.5`.
static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^(?P<integers>\d*)(?:\.(?P<fraction>\d*))?$").expect("number pattern is valid")
});

/// Largest decimals count a uint256 token amount can carry.
pub const MAX_TOKEN_DECIMALS: u32 = 77;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
	#[error("Amount is empty")]
	Empty,

	#[error("Token decimals {0} exceed the supported maximum of {MAX_TOKEN_DECIMALS}")]
	UnsupportedDecimals(u32),

	#[error("Invalid amount: {0}")]
	InvalidNumber(String),

	#[error("Amount {amount} has {found} fractional digits, but the token only supports {decimals}")]
	TooPrecise {
		amount: String,
		found: usize,
		decimals: u32,
	},
}

/// Whether `input` is a plain decimal number as accepted by the action forms.
pub fn is_number(input: &str) -> bool {
	NUMBER_PATTERN
		.captures(input.trim())
		.is_some_and(|caps| caps.iter().skip(1).flatten().any(|m| !m.as_str().is_empty()))
}

/// Parse a human-readable amount such as `"1.5"` into the token's smallest
/// unit, exactly.
pub fn parse_token_amount(input: &str, decimals: u32) -> Result<BigUint, AmountError> {
	if decimals > MAX_TOKEN_DECIMALS {
		return Err(AmountError::UnsupportedDecimals(decimals));
	}

	let amount = input.trim();
	if amount.is_empty() {
		return Err(AmountError::Empty);
	}
	if !is_number(amount) {
		return Err(AmountError::InvalidNumber(amount.to_string()));
	}

	let caps = NUMBER_PATTERN
		.captures(amount)
		.ok_or_else(|| AmountError::InvalidNumber(amount.to_string()))?;
	let integers = caps.name("integers").map_or("", |m| m.as_str());
	let fraction = caps.name("fraction").map_or("", |m| m.as_str());

	if fraction.len() > decimals as usize {
		return Err(AmountError::TooPrecise {
			amount: amount.to_string(),
			found: fraction.len(),
			decimals,
		});
	}

	// Right-pad the fraction so the concatenation is already in raw units
	let digits = format!(
		"{integers}{fraction:0<width$}",
		width = decimals as usize
	);
	digits
		.parse::<BigUint>()
		.map_err(|_| AmountError::InvalidNumber(amount.to_string()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_is_number() {
		assert!(is_number("3.141"));
		assert!(is_number("10"));
		assert!(is_number(".5"));
		assert!(is_number("5."));
		assert!(!is_number(""));
		assert!(!is_number("."));
		assert!(!is_number("1.2.3"));
		assert!(!is_number("-1"));
		assert!(!is_number("1e18"));
		assert!(!is_number("abc"));
	}

	#[test]
	fn test_parse_token_amount() {
		assert_eq!(
			parse_token_amount("1.5", 18).unwrap(),
			BigUint::from(1_500_000_000_000_000_000u128)
		);
		assert_eq!(
			parse_token_amount("100", 6).unwrap(),
			BigUint::from(100_000_000u64)
		);
		assert_eq!(parse_token_amount(".25", 2).unwrap(), BigUint::from(25u32));
		assert_eq!(parse_token_amount("7.", 0).unwrap(), BigUint::from(7u32));
		assert_eq!(parse_token_amount(" 0 ", 18).unwrap(), BigUint::from(0u32));
	}

	#[test]
	fn test_parse_token_amount_beyond_u128() {
		let raw = parse_token_amount("1000000000000000000000000", 18).unwrap();
		assert_eq!(raw.to_string(), format!("1{}", "0".repeat(42)));
	}

	#[test]
	fn test_parse_token_amount_errors() {
		assert_eq!(parse_token_amount("   ", 18), Err(AmountError::Empty));
		assert_eq!(
			parse_token_amount("1,5", 18),
			Err(AmountError::InvalidNumber("1,5".to_string()))
		);
		assert_eq!(
			parse_token_amount(".", 18),
			Err(AmountError::InvalidNumber(".".to_string()))
		);
		assert_eq!(
			parse_token_amount("0.001", 2),
			Err(AmountError::TooPrecise {
				amount: "0.001".to_string(),
				found: 3,
				decimals: 2
			})
		);
	}

	#[test]
	fn test_parse_token_amount_rejects_oversized_decimals() {
		assert_eq!(
			parse_token_amount("1", 4_000_000_000),
			Err(AmountError::UnsupportedDecimals(4_000_000_000))
		);
		assert_eq!(
			parse_token_amount("1", MAX_TOKEN_DECIMALS + 1),
			Err(AmountError::UnsupportedDecimals(MAX_TOKEN_DECIMALS + 1))
		);
		let raw = parse_token_amount("1", MAX_TOKEN_DECIMALS).unwrap();
		assert_eq!(raw, BigUint::from(10u32).pow(MAX_TOKEN_DECIMALS));
	}
}
