mod conversions;
mod types;

pub use types::{
    LoginAttemptListQuery, LoginAttemptResponse, LoginRequestListQuery, LoginRequestResponse,
    LoginRequestStatusResponse, LoginStatsResponse, SubmitLoginRequest,
};
