//! Token amount formatting and parsing.
//!
//! Raw amounts arrive in a token's smallest unit together with the token's
//! decimals. This module turns them into compact display strings for the
//! dashboard (`12k DAI`, ` < 0.01 ETH`) and turns user-entered decimal strings
//! back into raw units for proposal actions.

/// Abbreviation of fixed-point amount strings
pub mod abbreviate;
/// Full display rendering with sign and symbol
pub mod display;
/// Parsing of user-entered amounts
pub mod parse;
/// Scaling of raw integers into floats
pub mod scale;

pub use abbreviate::{AmountToken, MALFORMED_AMOUNT, abbreviate_token_amount, tokenize_amount};
pub use display::{TokenAmount, to_abbreviated_token_amount, to_display_amount};
pub use parse::{AmountError, MAX_TOKEN_DECIMALS, is_number, parse_token_amount};
pub use scale::{bigint_to_float, to_fixed_2};
