//! Display rendering of raw token amounts.

use super::abbreviate::abbreviate_token_amount;
use super::scale::{bigint_to_float, to_fixed_2};
use num_bigint::BigUint;
use std::fmt;

/// Separator between the abbreviated number and the symbol.
pub const SYMBOL_SEPARATOR: char = '\u{A0}';

/// Fallback parsed in place of a missing amount.
pub const DEFAULT_ON_ERROR: &str = "-";

/// A raw token amount together with everything needed to display it.
///
/// Missing `amount` defaults to one raw unit and missing `decimals` to zero;
/// zero amounts and zero decimals render through `on_error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenAmount {
	/// Amount in the token's smallest unit
	pub amount: Option<BigUint>,
	/// Number of low-order digits that are fractional
	pub decimals: Option<u32>,
	/// Symbol shown after the amount, e.g. `DAI`
	pub symbol: Option<String>,
	/// Prefix such as `+` or `-`
	pub sign: String,
	/// Parsed in place of the amount when it cannot be scaled
	pub on_error: String,
}

impl TokenAmount {
	/// Creates an amount with every input unset.
	pub fn new() -> Self {
		Self {
			amount: None,
			decimals: None,
			symbol: None,
			sign: String::new(),
			on_error: DEFAULT_ON_ERROR.to_string(),
		}
	}

	pub fn with_amount(mut self, amount: BigUint) -> Self {
		self.amount = Some(amount);
		self
	}

	pub fn with_decimals(mut self, decimals: u32) -> Self {
		self.decimals = Some(decimals);
		self
	}

	pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
		self.symbol = Some(symbol.into());
		self
	}

	pub fn with_sign(mut self, sign: impl Into<String>) -> Self {
		self.sign = sign.into();
		self
	}

	pub fn with_on_error(mut self, on_error: impl Into<String>) -> Self {
		self.on_error = on_error.into();
		self
	}

	/// Renders the display string.
	pub fn render(&self) -> String {
		to_display_amount(
			self.amount.as_ref(),
			self.decimals,
			self.symbol.as_deref(),
			Some(self.sign.as_str()),
			Some(self.on_error.as_str()),
		)
	}
}

impl Default for TokenAmount {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Display for TokenAmount {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render())
	}
}

/// Render a raw token amount as `sign + abbreviated + NBSP + symbol`.
///
/// `raw` defaults to one raw unit and `decimals` to zero when absent; `sign`
/// defaults to empty and `on_error` to `"-"`. A zero amount or zero decimals
/// cannot be scaled, so `on_error` is parsed in their place: a non-numeric
/// fallback renders as `"N/A"`.
pub fn to_display_amount(
	raw: Option<&BigUint>,
	decimals: Option<u32>,
	symbol: Option<&str>,
	sign: Option<&str>,
	on_error: Option<&str>,
) -> String {
	let one = BigUint::from(1u32);
	let scaled = bigint_to_float(
		Some(raw.unwrap_or(&one)),
		Some(decimals.unwrap_or(0)),
		on_error.unwrap_or(DEFAULT_ON_ERROR),
	);

	format!(
		"{}{}{}{}",
		sign.unwrap_or_default(),
		abbreviate_token_amount(&to_fixed_2(scaled)),
		SYMBOL_SEPARATOR,
		symbol.unwrap_or_default(),
	)
}

/// Abbreviated amount without sign or symbol, as shown in proposal action
/// details.
///
/// Returns `"?"` when the token's decimals are unknown or zero.
pub fn to_abbreviated_token_amount(value: &BigUint, decimals: Option<u32>) -> String {
	match decimals {
		Some(decimals) if decimals > 0 => abbreviate_token_amount(&to_fixed_2(bigint_to_float(
			Some(value),
			Some(decimals),
			DEFAULT_ON_ERROR,
		))),
		_ => "?".to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::amount::abbreviate::MALFORMED_AMOUNT;
	use proptest::prelude::*;

	fn wei(value: u128) -> BigUint {
		BigUint::from(value)
	}

	#[test]
	fn test_sub_cent_dai() {
		let raw = wei(1_000_000_000_000_000);
		assert_eq!(
			to_display_amount(Some(&raw), Some(18), Some("DAI"), None, None),
			" < 0.01\u{A0}DAI"
		);
	}

	#[test]
	fn test_whole_eth() {
		let raw = wei(5_000_000_000_000_000_000);
		assert_eq!(
			to_display_amount(Some(&raw), Some(18), Some("ETH"), None, None),
			"5.00\u{A0}ETH"
		);
	}

	#[test]
	fn test_thousands_tier() {
		let raw = wei(12_345_000_000_000_000_000_000);
		assert_eq!(
			to_display_amount(Some(&raw), Some(18), None, None, None),
			"12k\u{A0}"
		);
	}

	#[test]
	fn test_missing_amount_defaults_to_one_unit() {
		assert_eq!(
			to_display_amount(None, Some(2), Some("USDC"), None, Some("???")),
			"0.01\u{A0}USDC"
		);
	}

	#[test]
	fn test_missing_inputs_render_the_fallback() {
		assert_eq!(
			to_display_amount(None, None, None, None, Some("???")),
			format!("{MALFORMED_AMOUNT}\u{A0}")
		);
		assert_eq!(to_display_amount(None, None, None, None, None), "N/A\u{A0}");
		assert_eq!(to_display_amount(None, None, None, None, Some("42")), "42.00\u{A0}");
		assert_eq!(
			to_display_amount(Some(&wei(7)), None, Some("X"), None, Some("???")),
			"N/A\u{A0}X"
		);
		assert_eq!(
			TokenAmount::new()
				.with_amount(wei(7))
				.with_symbol("X")
				.with_on_error("0")
				.to_string(),
			" < 0.01\u{A0}X"
		);
	}

	#[test]
	fn test_zero_amount_renders_the_fallback() {
		let raw = wei(0);
		assert_eq!(
			to_display_amount(Some(&raw), Some(18), Some("DAI"), None, None),
			"N/A\u{A0}DAI"
		);
		assert_eq!(
			to_display_amount(Some(&raw), Some(18), Some("DAI"), None, Some("0")),
			" < 0.01\u{A0}DAI"
		);
	}

	#[test]
	fn test_sign_prefix() {
		let raw = wei(2_500_000);
		assert_eq!(
			to_display_amount(Some(&raw), Some(6), Some("USDC"), Some("-"), None),
			"-2.50\u{A0}USDC"
		);
		assert_eq!(
			TokenAmount::new()
				.with_amount(raw)
				.with_decimals(6)
				.with_symbol("USDC")
				.with_sign("+")
				.to_string(),
			"+2.50\u{A0}USDC"
		);
	}

	#[test]
	fn test_large_raw_beyond_u128() {
		let raw: BigUint = "987654321000000000000000000000000000000000".parse().unwrap();
		assert_eq!(
			to_display_amount(Some(&raw), Some(18), Some("GNO"), None, None),
			"987*10^21\u{A0}GNO"
		);
	}

	#[test]
	fn test_to_abbreviated_token_amount() {
		let raw = wei(1_500_000_000_000_000_000);
		assert_eq!(to_abbreviated_token_amount(&raw, Some(18)), "1.50");
		assert_eq!(to_abbreviated_token_amount(&raw, Some(0)), "?");
		assert_eq!(to_abbreviated_token_amount(&raw, None), "?");
		assert_eq!(
			to_abbreviated_token_amount(&wei(20_000_000_000), Some(6)),
			"20k"
		);
	}

	fn numeric_part(display: &str) -> &str {
		display
			.split(SYMBOL_SEPARATOR)
			.next()
			.unwrap_or_default()
	}

	proptest! {
		#[test]
		fn small_values_round_trip_within_a_cent(
			(decimals, raw) in (1u32..=6).prop_flat_map(|decimals| {
				let unit = 10u64.pow(decimals);
				(Just(decimals), unit.div_ceil(100)..9_990 * unit)
			})
		) {
			let value = raw as f64 / 10f64.powi(decimals as i32);

			let display = to_display_amount(Some(&BigUint::from(raw)), Some(decimals), None, None, None);
			let parsed: f64 = numeric_part(&display).parse().unwrap();
			prop_assert!((parsed - value).abs() <= 0.01, "{} vs {}", display, value);
		}

		#[test]
		fn large_values_carry_a_tier_suffix(raw in 1_000_000u128..u128::MAX, symbol in "[A-Z]{0,5}") {
			let display = to_display_amount(Some(&BigUint::from(raw)), Some(2), Some(symbol.as_str()), None, None);
			let numeric = numeric_part(&display);
			let lead_len = numeric.chars().take_while(|c| c.is_ascii_digit()).count();
			let suffix = &numeric[lead_len..];

			prop_assert!(lead_len >= 1 && lead_len <= 4, "{}", display);
			prop_assert!(
				matches!(suffix, "k" | "M" | "G") || suffix.starts_with("*10^"),
				"{}",
				display
			);
			let expected_tail = format!("{SYMBOL_SEPARATOR}{symbol}");
			prop_assert!(display.ends_with(&expected_tail), "{} does not end with {:?}", display, expected_tail);
		}

		#[test]
		fn sub_cent_values_use_the_less_than_marker(raw in 1u64..1_000_000u64) {
			// raw / 10^9 stays below 0.001
			let display = to_display_amount(Some(&BigUint::from(raw)), Some(9), Some("DAI"), None, None);
			prop_assert_eq!(display, " < 0.01\u{A0}DAI");
		}

		#[test]
		fn reformatting_never_panics(input in ".{0,32}") {
			let once = abbreviate_token_amount(&input);
			let _ = abbreviate_token_amount(&once);
		}
	}
}
