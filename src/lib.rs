//! Leave Accrual Engine
//!
//! This crate computes annual leave entitlements, the dated grant/expiry
//! history behind them, and remaining balances, for employees under a
//! tenure-based leave policy.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
