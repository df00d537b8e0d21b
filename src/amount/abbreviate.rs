//! Compaction of fixed-point amount strings for display.
//!
//! Input is the two-digit fixed rendering of a scaled amount, optionally
//! followed by a symbol (`"12345.00"`, `"0.50 DAI"`). Large integer parts are
//! reduced to a magnitude tier (`12k`, `3M`, `1*10^12`), sub-cent values are
//! reported as `" < 0.01"` rather than a misleading `0.00`.

use super::scale::to_fixed_2;
use tracing::debug;

/// Returned when an amount string cannot be tokenized.
pub const MALFORMED_AMOUNT: &str = "N/A";

/// Integer parts longer than this are abbreviated to a magnitude tier.
const MAX_PLAIN_INTEGER_DIGITS: usize = 4;

/// Suffixes for tiers 1 through 3.
const TIER_SUFFIXES: [&str; 3] = ["k", "M", "G"];

/// Result of splitting an amount string into its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountToken<'a> {
	/// Integer digits, fractional digits and trailing symbol letters.
	Parsed {
		integers: &'a str,
		decimals: &'a str,
		symbol: &'a str,
	},
	/// The input is not `digits[.digits][ letters]`.
	Malformed,
}

/// Split `amount` into integer digits, an optional `.`-separated fraction and
/// optional trailing ASCII letters (whitespace allowed before the letters).
///
/// At least one integer digit is required, so `"NaN"`, `"inf"` or `"-1.00"`
/// are [`AmountToken::Malformed`].
pub fn tokenize_amount(amount: &str) -> AmountToken<'_> {
	let (integers, rest) = split_digits(amount);
	if integers.is_empty() {
		return AmountToken::Malformed;
	}

	let (decimals, rest) = match rest.strip_prefix('.') {
		Some(fraction) => split_digits(fraction),
		None => ("", rest),
	};

	let symbol = rest.trim_start();
	if !symbol.chars().all(|c| c.is_ascii_alphabetic()) {
		return AmountToken::Malformed;
	}

	AmountToken::Parsed {
		integers,
		decimals,
		symbol,
	}
}

fn split_digits(input: &str) -> (&str, &str) {
	let end = input
		.find(|c: char| !c.is_ascii_digit())
		.unwrap_or(input.len());
	input.split_at(end)
}

fn strip_leading_zeros(digits: &str) -> &str {
	match digits.trim_start_matches('0') {
		"" => "0",
		stripped => stripped,
	}
}

/// Abbreviate a fixed-point amount string.
///
/// Returns [`MALFORMED_AMOUNT`] when the input does not tokenize.
pub fn abbreviate_token_amount(amount: &str) -> String {
	let AmountToken::Parsed {
		integers,
		decimals,
		symbol,
	} = tokenize_amount(amount)
	else {
		debug!("Cannot abbreviate malformed amount {:?}", amount);
		return MALFORMED_AMOUNT.to_string();
	};

	let symbol_suffix = if symbol.is_empty() {
		String::new()
	} else {
		format!(" {symbol}")
	};

	if integers.len() > MAX_PLAIN_INTEGER_DIGITS {
		let tier = (integers.len() - 1) / 3;
		let lead = strip_leading_zeros(&integers[..integers.len() - tier * 3]);
		let tier_suffix = match TIER_SUFFIXES.get(tier - 1) {
			Some(letter) => letter.to_string(),
			None => format!("*10^{}", tier * 3),
		};
		return format!("{lead}{tier_suffix}{symbol_suffix}");
	}

	if !decimals.is_empty() {
		// At most four integer digits remain, so both parses are exact.
		let integer_value: f64 = integers.parse().unwrap_or_default();
		let fraction_value: f64 = format!("0.{decimals}").parse().unwrap_or_default();
		let total = integer_value + fraction_value;

		if total < 0.01 {
			return format!(" < 0.01{symbol_suffix}");
		}
		return format!("{}{symbol_suffix}", to_fixed_2(total));
	}

	format!("{}{symbol_suffix}", strip_leading_zeros(integers))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_tokenize_amount() {
		assert_eq!(
			tokenize_amount("12.50 DAI"),
			AmountToken::Parsed {
				integers: "12",
				decimals: "50",
				symbol: "DAI"
			}
		);
		assert_eq!(
			tokenize_amount("7"),
			AmountToken::Parsed {
				integers: "7",
				decimals: "",
				symbol: ""
			}
		);
		assert_eq!(
			tokenize_amount("7.ETH"),
			AmountToken::Parsed {
				integers: "7",
				decimals: "",
				symbol: "ETH"
			}
		);
		assert_eq!(tokenize_amount("NaN"), AmountToken::Malformed);
		assert_eq!(tokenize_amount("inf"), AmountToken::Malformed);
		assert_eq!(tokenize_amount("-1.00"), AmountToken::Malformed);
		assert_eq!(tokenize_amount("1.00 D4I"), AmountToken::Malformed);
		assert_eq!(tokenize_amount("1.2.3"), AmountToken::Malformed);
		assert_eq!(tokenize_amount(""), AmountToken::Malformed);
	}

	#[test]
	fn test_abbreviate_tiers() {
		assert_eq!(abbreviate_token_amount("12345.00"), "12k");
		assert_eq!(abbreviate_token_amount("123456.78"), "123k");
		assert_eq!(abbreviate_token_amount("1234567.00"), "1M");
		assert_eq!(abbreviate_token_amount("98765432.10"), "98M");
		assert_eq!(abbreviate_token_amount("1234567890.00"), "1G");
		assert_eq!(abbreviate_token_amount("999999999999.99"), "999G");
		assert_eq!(abbreviate_token_amount("1234567890123.00"), "1*10^12");
		assert_eq!(
			abbreviate_token_amount("123456789012345678901234.00"),
			"123*10^21"
		);
		assert_eq!(abbreviate_token_amount("12345 DAI"), "12k DAI");
	}

	#[test]
	fn test_abbreviate_small_integers() {
		assert_eq!(abbreviate_token_amount("9999.99"), "9999.99");
		assert_eq!(abbreviate_token_amount("5.00"), "5.00");
		assert_eq!(abbreviate_token_amount("1.00 ETH"), "1.00 ETH");
		assert_eq!(abbreviate_token_amount("42"), "42");
		assert_eq!(abbreviate_token_amount("0042"), "42");
		assert_eq!(abbreviate_token_amount("0.50"), "0.50");
	}

	#[test]
	fn test_abbreviate_sub_cent() {
		assert_eq!(abbreviate_token_amount("0.00"), " < 0.01");
		assert_eq!(abbreviate_token_amount("0.009"), " < 0.01");
		assert_eq!(abbreviate_token_amount("0.00 DAI"), " < 0.01 DAI");
		assert_eq!(abbreviate_token_amount("0.01"), "0.01");
	}

	#[test]
	fn test_abbreviate_malformed() {
		assert_eq!(abbreviate_token_amount("NaN"), MALFORMED_AMOUNT);
		assert_eq!(abbreviate_token_amount("inf"), MALFORMED_AMOUNT);
		assert_eq!(abbreviate_token_amount(""), MALFORMED_AMOUNT);
		assert_eq!(abbreviate_token_amount("1,000.00"), MALFORMED_AMOUNT);
	}
}
