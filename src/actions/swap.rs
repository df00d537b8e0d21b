use super::{ActionFormError, FieldError, IssueCollector};
use crate::amount::{is_number, parse_token_amount};
use crate::utils::format_token_amount;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Both sides of the swap are 18-decimal tokens.
pub const SWAP_DECIMALS: u32 = 18;

/// Preset slippage tolerances, in percent.
pub const SLIPPAGE_OPTIONS: [&str; 3] = ["0.5", "1", "2"];

pub const DEFAULT_SLIPPAGE: &str = "1";

const MAX_SLIPPAGE_PERCENT: f64 = 100.0;

/// Whether DAI is swapped into SECOIN or back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwapDirection {
	/// DAI in, SECOIN out
	#[default]
	Mint,
	/// SECOIN in, DAI out
	Burn,
}

impl SwapDirection {
	pub fn from_token(self) -> &'static str {
		match self {
			SwapDirection::Mint => "DAI",
			SwapDirection::Burn => "SECOIN",
		}
	}

	pub fn to_token(self) -> &'static str {
		match self {
			SwapDirection::Mint => "SECOIN",
			SwapDirection::Burn => "DAI",
		}
	}

	/// The opposite direction, as the swap-order button toggles it.
	pub fn reversed(self) -> Self {
		match self {
			SwapDirection::Mint => SwapDirection::Burn,
			SwapDirection::Burn => SwapDirection::Mint,
		}
	}
}

/// Raw input of the swap form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapForm {
	pub from_token: String,
	pub slippage: String,
}

impl Default for SwapForm {
	fn default() -> Self {
		Self {
			from_token: String::new(),
			slippage: DEFAULT_SLIPPAGE.to_string(),
		}
	}
}

/// Validated swap with the input amount in raw units.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapOrder {
	pub amount: BigUint,
	pub slippage_percent: f64,
}

/// Decimal string the "Max" button fills in for the balance `max`.
pub fn max_value(max: &BigUint, decimals: u32) -> String {
	format_token_amount(max, decimals)
}

impl SwapForm {
	/// Validate the form against the spendable balance `max` of the input
	/// token. A missing balance does not limit the amount.
	pub fn validate(
		&self,
		max: Option<&BigUint>,
		decimals: u32,
	) -> Result<SwapOrder, ActionFormError> {
		let mut issues = IssueCollector::default();

		let amount = self.from_token_amount(&mut issues, max, decimals);
		let slippage_percent = self.slippage_percent(&mut issues);

		let order = match (amount, slippage_percent) {
			(Some(amount), Some(slippage_percent)) => Some(SwapOrder {
				amount,
				slippage_percent,
			}),
			_ => None,
		};
		let order = issues.finish(order)?;

		info!(
			"Validated swap of {} raw units with {}% slippage",
			order.amount, order.slippage_percent
		);
		Ok(order)
	}

	fn from_token_amount(
		&self,
		issues: &mut IssueCollector,
		max: Option<&BigUint>,
		decimals: u32,
	) -> Option<BigUint> {
		let input = self.from_token.trim();
		if !input.is_empty() && !is_number(input) {
			issues.push("fromToken", FieldError::InvalidTokenAmount);
			return None;
		}

		let amount = issues.amount("fromToken", input, decimals)?;
		match max {
			Some(max) if amount > *max => {
				debug!("Swap amount {} exceeds balance {}", amount, max);
				issues.push("fromToken", FieldError::AmountTooHigh);
				None
			}
			_ => Some(amount),
		}
	}

	fn slippage_percent(&self, issues: &mut IssueCollector) -> Option<f64> {
		let input = self.slippage.trim();
		if input.is_empty() {
			issues.push("slippage", FieldError::Required);
			return None;
		}

		let Some(percent) = input.parse::<f64>().ok().filter(|p| p.is_finite()) else {
			issues.push("slippage", FieldError::InvalidNumber);
			return None;
		};
		if percent < 0.0 {
			issues.push("slippage", FieldError::SlippageTooLow);
			return None;
		}
		if percent > MAX_SLIPPAGE_PERCENT {
			issues.push("slippage", FieldError::SlippageTooHigh);
			return None;
		}
		Some(percent)
	}
}
