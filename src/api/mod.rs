//! HTTP API module for the Leave Accrual Engine.
//!
//! This module provides the REST API endpoints for entitlements, grant
//! histories and balances.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BalanceRequest, BatchBalanceRequest, EntitlementRequest};
pub use response::{ApiError, ApiErrorResponse, EntitlementResponse};
pub use state::AppState;
