use clap::{Parser, Subcommand};
use dao_dashboard::actions::swap::{SWAP_DECIMALS, max_value};
use dao_dashboard::actions::{SwapDirection, SwapForm, TokenChoice, WithdrawAssetsForm};
use dao_dashboard::amount::MAX_TOKEN_DECIMALS;
use dao_dashboard::rewards::TimeClaimable;
use dao_dashboard::transfer::{DashboardSnapshot, TokenInfo, complete_balances, select_recent};
use dao_dashboard::utils::format_token_amount;
use dao_dashboard::{Config, DashboardError, TokenAmount};
use num_bigint::BigUint;
use std::path::PathBuf;
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(name = "dao-dashboard", about = "Inspect DAO treasury data from the command line")]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Format a raw token amount for display
	Format {
		/// Amount in the token's smallest unit
		raw: Option<BigUint>,
		#[arg(long)]
		decimals: Option<u32>,
		#[arg(long)]
		symbol: Option<String>,
		#[arg(long, default_value = "")]
		sign: String,
		/// Fallback parsed when the amount cannot be scaled
		#[arg(long)]
		on_error: Option<String>,
	},
	/// List the most recent treasury transfers of the configured DAO
	Transfers {
		/// JSON snapshot exported from the governance SDK
		snapshot: PathBuf,
	},
	/// List treasury balances
	Balances {
		/// JSON snapshot exported from the governance SDK
		snapshot: PathBuf,
	},
	/// Validate a withdraw-assets action
	Withdraw {
		#[arg(long)]
		recipient: String,
		/// Token contract address
		#[arg(long)]
		token: String,
		/// Human-readable amount, e.g. 3.141
		#[arg(long)]
		amount: String,
		#[arg(long, default_value_t = 18)]
		decimals: u32,
	},
	/// Validate a DAI / SECOIN swap
	Swap {
		/// Amount of the input token, e.g. 2.5
		amount: String,
		#[arg(long, value_enum, default_value = "mint")]
		direction: SwapDirectionArg,
		/// Slippage tolerance in percent
		#[arg(long, default_value = "1")]
		slippage: String,
		/// Spendable balance of the input token in raw units
		#[arg(long)]
		balance: Option<BigUint>,
	},
	/// Show the daily reward state of a member
	Rewards {
		/// JSON claim state with amountClaimable, claimPeriodInterval and claimPeriodMax
		state: PathBuf,
		/// Reward earned per interval by the member's tier, in raw units
		#[arg(long)]
		interval_amount: BigUint,
		#[arg(long, default_value = "REP")]
		symbol: String,
		#[arg(long, default_value_t = 18)]
		decimals: u32,
	},
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum SwapDirectionArg {
	Mint,
	Burn,
}

impl From<SwapDirectionArg> for SwapDirection {
	fn from(direction: SwapDirectionArg) -> Self {
		match direction {
			SwapDirectionArg::Mint => SwapDirection::Mint,
			SwapDirectionArg::Burn => SwapDirection::Burn,
		}
	}
}

fn main() {
	dotenv::dotenv().ok();

	tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
		)
		.with_target(false)
		.with_thread_ids(false)
		.with_thread_names(false)
		.with_file(false)
		.with_line_number(false)
		.with_timer(tracing_subscriber::fmt::time::time())
		.init();

	let cli = Cli::parse();

	let config = match Config::from_env() {
		Ok(config) => config,
		Err(e) => {
			error!("Failed to load configuration: {}", e);
			std::process::exit(1);
		}
	};

	if let Err(e) = run(cli.command, &config) {
		error!("{}", e);
		std::process::exit(1);
	}
}

fn run(command: Command, config: &Config) -> Result<(), DashboardError> {
	match command {
		Command::Format {
			raw,
			decimals,
			symbol,
			sign,
			on_error,
		} => {
			match (&raw, decimals) {
				(Some(raw), Some(decimals)) if decimals <= MAX_TOKEN_DECIMALS => {
					info!("Exact amount: {}", format_token_amount(raw, decimals));
				}
				(Some(_), Some(decimals)) => {
					warn!("Skipping exact amount for unsupported decimals {}", decimals);
				}
				_ => {}
			}
			let amount = TokenAmount {
				amount: raw,
				decimals,
				symbol,
				sign,
				on_error: on_error.unwrap_or_else(|| config.on_error.clone()),
			};
			println!("{amount}");
		}
		Command::Transfers { snapshot } => {
			let dao_address = config.dao_address()?;
			let snapshot = DashboardSnapshot::load(&snapshot)?;
			for transfer in select_recent(&snapshot.transfers, dao_address, config.transfer_limit) {
				println!(
					"{}",
					transfer.summary(&config.native_currency, &config.on_error)
				);
			}
		}
		Command::Balances { snapshot } => {
			let snapshot = DashboardSnapshot::load(&snapshot)?;
			let balances = complete_balances(&snapshot.balances);
			info!(
				"Showing {} of {} balances",
				balances.len(),
				snapshot.balances.len()
			);
			for balance in balances {
				println!("{}", balance.label(&config.on_error));
			}
		}
		Command::Withdraw {
			recipient,
			token,
			amount,
			decimals,
		} => {
			let form = WithdrawAssetsForm {
				recipient,
				token_address: TokenChoice::Custom(Some(token)),
				amount,
			};
			let action = form.validate(decimals)?;
			let display = TokenAmount::new()
				.with_amount(action.amount.clone())
				.with_decimals(decimals)
				.with_sign("-");
			println!(
				"Withdraw {} of {} to {}",
				display, action.token_address, action.to
			);
		}
		Command::Swap {
			amount,
			direction,
			slippage,
			balance,
		} => {
			let direction = SwapDirection::from(direction);
			if let Some(balance) = &balance {
				info!(
					"Spendable {}: {}",
					direction.from_token(),
					max_value(balance, SWAP_DECIMALS)
				);
			}
			let form = SwapForm {
				from_token: amount,
				slippage,
			};
			let order = form.validate(balance.as_ref(), SWAP_DECIMALS)?;
			let display = TokenAmount::new()
				.with_amount(order.amount.clone())
				.with_decimals(SWAP_DECIMALS)
				.with_symbol(direction.from_token())
				.with_on_error(config.on_error.clone());
			println!(
				"Swap {} for {} with {}% slippage",
				display,
				direction.to_token(),
				order.slippage_percent
			);
		}
		Command::Rewards {
			state,
			interval_amount,
			symbol,
			decimals,
		} => {
			let contents = std::fs::read_to_string(&state)?;
			let claimable: TimeClaimable = serde_json::from_str(&contents)?;
			let token = TokenInfo {
				address: String::new(),
				name: symbol.clone(),
				symbol,
				decimals,
			};
			let max_claimable = claimable.max_claimable(&interval_amount)?;
			println!(
				"Claimable amount: {}",
				claimable.claimable_display(&token).with_on_error(config.on_error.clone())
			);
			println!(
				"Progress: {} (0 - {})",
				claimable.progress_value(&interval_amount),
				max_claimable
			);
			if !claimable.can_claim() {
				println!("No claimable rewards");
			}
		}
	}
	Ok(())
}
