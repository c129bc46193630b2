//! Application services and ports.

#![forbid(unsafe_code)]

mod attempt_log_service;
mod lifecycle_service;
mod login_request_service;
mod stats_service;
mod storage_ports;

#[cfg(test)]
mod test_support;

pub use attempt_log_service::{AttemptLogService, DEFAULT_ATTEMPT_LIMIT, MAX_ATTEMPT_LIMIT};
pub use lifecycle_service::LifecycleService;
pub use login_request_service::{LoginRequestService, SubmitLoginRequestInput};
pub use stats_service::{LoginRequestStats, LoginStatsService};
pub use storage_ports::{
    LoginAttemptQuery, LoginRequestFilter, NewLoginAttempt, NewLoginRequest,
    ResolvedLoginRequest, StorageBackend, StorageKind,
};
