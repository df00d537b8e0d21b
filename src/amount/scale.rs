//! Scaling of raw on-chain integers into display floats.
//!
//! Raw amounts are combined with their decimals as a base-and-exponent literal
//! (`"<raw>E-<decimals>"`) and parsed in one step, so the integer part of large
//! balances is never truncated through an intermediate integer-to-float cast.

use num_bigint::BigUint;
use regex::Regex;
use std::sync::LazyLock;

/// Leading float literal, matched the way a lenient float parser reads its input.
static FLOAT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^\s*[+-]?(?:(?i:infinity)|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)")
		.expect("float prefix pattern is valid")
});

/// Parse the longest leading float literal of `input`.
///
/// Trailing garbage is ignored (`"12abc"` reads as `12`); input without any
/// numeric prefix yields `NaN`.
pub fn parse_float_lenient(input: &str) -> f64 {
	FLOAT_PREFIX
		.find(input)
		.and_then(|literal| literal.as_str().trim_start().parse::<f64>().ok())
		.unwrap_or(f64::NAN)
}

/// Scale `value` down by `10^decimals`.
///
/// Only a non-zero value with non-zero decimals is scaled. When either input
/// is missing or zero, `on_error` is parsed instead, which for a non-numeric
/// fallback such as `"-"` produces `NaN`.
pub fn bigint_to_float(value: Option<&BigUint>, decimals: Option<u32>, on_error: &str) -> f64 {
	match (value, decimals) {
		(Some(value), Some(decimals)) if *value != BigUint::ZERO && decimals != 0 => {
			parse_float_lenient(&format!("{value}E-{decimals}"))
		}
		_ => parse_float_lenient(on_error),
	}
}

/// Render `value` with exactly two fractional digits.
///
/// Exact ties round away from zero. Non-finite values render as `NaN`/`inf`.
pub fn to_fixed_2(value: f64) -> String {
	// A tie at the second digit is only exact for multiples of 1/8.
	let is_exact_tie = (value * 8.0).fract() == 0.0 && (value * 100.0).fract().abs() == 0.5;
	if value.is_finite() && is_exact_tie {
		let rounded = (value * 100.0 + 0.5_f64.copysign(value)) / 100.0;
		return format!("{rounded:.2}");
	}
	format!("{value:.2}")
}
