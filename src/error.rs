use crate::actions::ActionFormError;
use crate::amount::AmountError;
use crate::config::ConfigError;
use crate::rewards::RewardError;

/// Top-level error for the dashboard core
#[allow(clippy::enum_variant_names)]
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
	#[error("Config error: {0}")]
	ConfigError(#[from] ConfigError),

	#[error("Amount error: {0}")]
	AmountError(#[from] AmountError),

	#[error("Reward error: {0}")]
	RewardError(#[from] RewardError),

	#[error("Action form error: {0}")]
	ActionFormError(#[from] ActionFormError),

	#[error("JSON parse error: {0}")]
	JsonError(#[from] serde_json::Error),

	#[error("IO error: {0}")]
	IoError(#[from] std::io::Error),
}
