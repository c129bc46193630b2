mod common;
mod login_requests;

pub use common::HealthResponse;
pub use login_requests::{
    LoginAttemptListQuery, LoginAttemptResponse, LoginRequestListQuery, LoginRequestResponse,
    LoginRequestStatusResponse, LoginStatsResponse, SubmitLoginRequest,
};
