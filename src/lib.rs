//! Data-binding core of a DAO governance dashboard.
//!
//! Formats treasury balances and transfers for display, and validates the
//! withdraw and mint actions of new proposals before they are handed to the
//! governance SDK.

/// Proposal action forms
pub mod actions;
/// Token amount formatting and parsing
pub mod amount;
/// Environment configuration
pub mod config;
/// Top-level error type
pub mod error;
/// Daily reward claiming
pub mod rewards;
/// Treasury transfers and balances
pub mod transfer;
/// Formatting utilities
pub mod utils;

pub use amount::{TokenAmount, to_display_amount};
pub use config::Config;
pub use error::DashboardError;
