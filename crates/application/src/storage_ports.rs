mod backend;
mod inputs;

pub use backend::{StorageBackend, StorageKind};
pub use inputs::{
    LoginAttemptQuery, LoginRequestFilter, NewLoginAttempt, NewLoginRequest,
    ResolvedLoginRequest,
};
