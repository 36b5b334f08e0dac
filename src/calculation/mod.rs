//! Calculation logic for the Leave Accrual Engine.
//!
//! This module contains tenure classification, monthly accrual for the
//! first tenure year, the stepped annual grant with anniversary bonuses,
//! grant/expiry history generation, remaining balances, batch balance
//! computation and the entitlement audit trail.

mod anniversary_bonus;
mod assessment;
mod audit;
mod balance;
mod batch;
mod entitlement;
mod history;
mod monthly_accrual;
mod tenure;

pub use anniversary_bonus::{BonusSplit, bonus_anniversaries, split_bonus_anniversaries};
pub use audit::explain_entitlement;
pub use balance::{build_balance, compute_remaining_balance, total_used_days};
pub use batch::{BatchFailure, BatchOutcome, compute_balances};
pub use entitlement::compute_annual_entitlement;
pub use history::compute_grant_history;
pub use monthly_accrual::monthly_accrual_dates;
pub use tenure::{
    YearWindow, anniversary, classify_tenure_regime, days_worked_through_prior_year_end,
    first_anniversary, full_years_of_tenure, prorated_lump_sum, stepped_base_days, tenure_days,
};
