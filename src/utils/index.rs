use num_bigint::BigUint;

/// Exact fixed-point rendering of a raw amount with all `decimals` digits kept,
/// used where abbreviation would hide information (log lines, confirmations).
pub fn format_token_amount(amount: &BigUint, decimals: u32) -> String {
	if decimals == 0 {
		return amount.to_string();
	}

	let divisor = BigUint::from(10u32).pow(decimals);
	let integer_part = amount / &divisor;
	let fractional_part = amount % &divisor;

	format!(
		"{integer_part}.{:0>width$}",
		fractional_part.to_string(),
		width = decimals as usize
	)
}
