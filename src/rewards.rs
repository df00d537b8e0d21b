//! Daily reward claiming.
//!
//! Members accrue a reward every claim interval, capped at a maximum claim
//! period. The dashboard shows how much is claimable now and a progress bar
//! relating the claimable amount to the most that can ever accrue.

use crate::amount::TokenAmount;
use crate::transfer::TokenInfo;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RewardError {
	#[error("Claim period interval is zero")]
	ZeroClaimInterval,

	#[error("No claimable rewards")]
	NothingClaimable,
}

/// Claim state of one member, as reported by the reward facet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeClaimable {
	#[serde(with = "crate::transfer::decimal_string")]
	pub amount_claimable: BigUint,
	/// Seconds between two reward accruals
	#[serde(with = "crate::transfer::decimal_string")]
	pub claim_period_interval: BigUint,
	/// Longest period, in seconds, over which rewards keep accruing
	#[serde(with = "crate::transfer::decimal_string")]
	pub claim_period_max: BigUint,
}

impl TimeClaimable {
	/// Whether there is anything to claim right now.
	pub fn can_claim(&self) -> bool {
		self.amount_claimable != BigUint::ZERO
	}

	/// Most that can accrue before claiming stalls, for a member whose tier
	/// earns `interval_claimable_amount` per interval.
	pub fn max_claimable(&self, interval_claimable_amount: &BigUint) -> Result<BigUint, RewardError> {
		if self.claim_period_interval == BigUint::ZERO {
			return Err(RewardError::ZeroClaimInterval);
		}
		Ok(&self.claim_period_max / &self.claim_period_interval * interval_claimable_amount)
	}

	/// Ratio of the maximum claimable amount to what is claimable now.
	pub fn progress(&self, interval_claimable_amount: &BigUint) -> Result<BigUint, RewardError> {
		let max_claimable = self.max_claimable(interval_claimable_amount)?;
		if !self.can_claim() {
			return Err(RewardError::NothingClaimable);
		}
		Ok(max_claimable / &self.amount_claimable)
	}

	/// Value of the progress bar. Zero when progress is undefined; saturates
	/// at `u64::MAX`.
	pub fn progress_value(&self, interval_claimable_amount: &BigUint) -> u64 {
		match self.progress(interval_claimable_amount) {
			Ok(progress) => u64::try_from(&progress).unwrap_or(u64::MAX),
			Err(e) => {
				debug!("Reward progress unavailable: {}", e);
				0
			}
		}
	}

	/// Claimable amount rendered in the reputation token.
	pub fn claimable_display(&self, token: &TokenInfo) -> TokenAmount {
		TokenAmount::new()
			.with_amount(self.amount_claimable.clone())
			.with_decimals(token.decimals)
			.with_symbol(token.symbol.clone())
	}
}
