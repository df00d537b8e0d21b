use super::{ActionFormError, FieldError, IssueCollector};
use crate::utils::format_token_amount;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Token picked in the withdraw form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "address")]
pub enum TokenChoice {
	/// A token held by the treasury, chosen from the balance list
	Treasury(String),
	/// A token address typed in by the user
	Custom(Option<String>),
}

/// Raw input of the withdraw-assets form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawAssetsForm {
	pub recipient: String,
	pub token_address: TokenChoice,
	pub amount: String,
}

/// Validated withdraw action with the amount in raw units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawAction {
	pub to: String,
	pub token_address: String,
	pub amount: BigUint,
}

impl WithdrawAssetsForm {
	/// Validate the form for a token with `decimals` decimals.
	///
	/// Every invalid field is reported, not just the first.
	pub fn validate(&self, decimals: u32) -> Result<WithdrawAction, ActionFormError> {
		let mut issues = IssueCollector::default();

		let to = issues.address("recipient", &self.recipient);

		let token_address = match &self.token_address {
			TokenChoice::Treasury(address) => issues.address("tokenAddress", address),
			TokenChoice::Custom(Some(address)) => issues.address("tokenAddressCustom", address),
			TokenChoice::Custom(None) => {
				issues.push("tokenAddressCustom", FieldError::InvalidAddress);
				None
			}
		};

		let amount = issues.amount("amount", &self.amount, decimals);

		let action = match (to, token_address, amount) {
			(Some(to), Some(token_address), Some(amount)) => Some(WithdrawAction {
				to,
				token_address,
				amount,
			}),
			_ => None,
		};
		let action = issues.finish(action)?;

		info!(
			"Validated withdrawal of {} ({} raw) of token {} to {}",
			format_token_amount(&action.amount, decimals),
			action.amount,
			action.token_address,
			action.to
		);
		Ok(action)
	}
}
