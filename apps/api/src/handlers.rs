pub mod attempts;
pub mod health;
pub mod login_requests;
pub mod stats;
