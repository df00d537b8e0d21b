//! Treasury transfers and balances.
//!
//! This module provides the record types the governance SDK reports for a DAO
//! treasury, together with the selection rules the dashboard applies before
//! rendering them: the most recent transfers touching the DAO, and only the
//! balances whose token metadata resolved completely.

/// Type definitions for transfer and balance records
mod types;

pub use types::*;
pub(crate) use types::decimal_string;

use crate::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Treasury state as exported from the governance SDK.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardSnapshot {
	#[serde(default)]
	pub transfers: Vec<DaoTransfer>,
	#[serde(default)]
	pub balances: Vec<DaoBalance>,
}

impl DashboardSnapshot {
	/// Load a snapshot from a JSON file.
	pub fn load(path: &Path) -> Result<Self, DashboardError> {
		let contents = std::fs::read_to_string(path)?;
		let snapshot: Self = serde_json::from_str(&contents)?;
		info!(
			"Loaded snapshot from {} with {} transfers and {} balances",
			path.display(),
			snapshot.transfers.len(),
			snapshot.balances.len()
		);
		Ok(snapshot)
	}
}

/// Newest-first transfers sent or received by `dao_address`, at most `limit`.
pub fn select_recent<'a>(
	transfers: &'a [DaoTransfer],
	dao_address: &str,
	limit: usize,
) -> Vec<&'a DaoTransfer> {
	let mut selected: Vec<&DaoTransfer> = transfers
		.iter()
		.filter(|transfer| transfer.involves(dao_address))
		.collect();
	selected.sort_by(|a, b| b.creation_date.cmp(&a.creation_date));
	selected.truncate(limit);

	debug!(
		"Selected {} of {} transfers for {}",
		selected.len(),
		transfers.len(),
		dao_address
	);
	selected
}

/// Balances whose name, symbol, address and amount are all known.
pub fn complete_balances(balances: &[DaoBalance]) -> Vec<&DaoBalance> {
	balances.iter().filter(|balance| balance.is_complete()).collect()
}
