use super::{ActionFormError, FieldError, IssueCollector};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use tracing::info;

/// One row of the mint form: who receives how many tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintAddressAmount {
	pub address: String,
	pub amount: String,
}

/// Raw input of the mint-tokens form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintTokensForm {
	#[serde(default)]
	pub wallets: Vec<MintAddressAmount>,
}

/// Validated mint action with amounts in raw units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintAction {
	pub wallets: Vec<(String, BigUint)>,
}

impl MintAction {
	/// Total number of raw units minted.
	pub fn total(&self) -> BigUint {
		self.wallets.iter().map(|(_, amount)| amount).sum()
	}
}

impl MintTokensForm {
	/// Adds an empty row, as the "Add wallet" button does.
	pub fn add_wallet(&mut self) {
		self.wallets.push(MintAddressAmount {
			address: String::new(),
			amount: "0".to_string(),
		});
	}

	/// Validate every row for a governance token with `decimals` decimals.
	///
	/// Field paths are `wallets.<index>.address` and `wallets.<index>.amount`.
	pub fn validate(&self, decimals: u32) -> Result<MintAction, ActionFormError> {
		let mut issues = IssueCollector::default();

		if self.wallets.is_empty() {
			issues.push("wallets", FieldError::NoWallets);
		}

		let mut wallets = Vec::with_capacity(self.wallets.len());
		for (index, wallet) in self.wallets.iter().enumerate() {
			let address = issues.address(&format!("wallets.{index}.address"), &wallet.address);
			let amount = issues.amount(&format!("wallets.{index}.amount"), &wallet.amount, decimals);
			if let (Some(address), Some(amount)) = (address, amount) {
				wallets.push((address, amount));
			}
		}

		let action = issues.finish(Some(MintAction { wallets }))?;
		info!(
			"Validated mint of {} raw tokens to {} wallets",
			action.total(),
			action.wallets.len()
		);
		Ok(action)
	}
}
