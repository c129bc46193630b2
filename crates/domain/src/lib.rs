//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod login_attempt;
mod login_request;

pub use login_attempt::{LoginAttempt, LoginAttemptId};
pub use login_request::{
    DEFAULT_IP_ADDRESS, LoginRequest, LoginRequestId, LoginRequestStatus, Resolution,
};
