use chrono::{DateTime, Utc};
use tollgate_domain::{LoginAttempt, LoginRequest, LoginRequestStatus, Resolution};

/// Values supplied by the caller when storing a new login request.
///
/// Identity and timestamps are assigned by the storage backend.
#[derive(Clone, PartialEq, Eq)]
pub struct NewLoginRequest {
    /// Submitted username.
    pub username: String,
    /// Submitted password, stored verbatim.
    pub password: String,
    /// Submitter IP address.
    pub ip_address: String,
}

impl std::fmt::Debug for NewLoginRequest {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("NewLoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("ip_address", &self.ip_address)
            .finish()
    }
}

/// Values for one appended audit record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLoginAttempt {
    /// Username copied from the resolved request.
    pub username: String,
    /// IP address copied from the resolved request.
    pub ip_address: String,
    /// Outcome reached.
    pub status: Resolution,
    /// Resolution timestamp.
    pub created_at: DateTime<Utc>,
}

impl NewLoginAttempt {
    /// Builds the audit values for a request that was just resolved.
    #[must_use]
    pub fn for_resolved_request(request: &LoginRequest, status: Resolution) -> Self {
        Self {
            username: request.username().to_owned(),
            ip_address: request.ip_address().to_owned(),
            status,
            created_at: request.updated_at(),
        }
    }
}

/// Listing filter for login requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoginRequestFilter {
    /// Optional status restriction.
    pub status: Option<LoginRequestStatus>,
}

impl LoginRequestFilter {
    /// Matches every request.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Matches requests in one status.
    #[must_use]
    pub fn with_status(status: LoginRequestStatus) -> Self {
        Self {
            status: Some(status),
        }
    }

    /// Returns true when the request passes the filter.
    #[must_use]
    pub fn matches(&self, request: &LoginRequest) -> bool {
        self.status
            .is_none_or(|status| request.status() == status)
    }
}

/// Listing query for the attempt log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginAttemptQuery {
    /// Optional exact username filter.
    pub username: Option<String>,
    /// Maximum number of records returned.
    pub limit: usize,
}

/// Result of one resolution: the updated request and the attempt it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLoginRequest {
    /// Request after the status change.
    pub request: LoginRequest,
    /// Audit record appended for the change.
    pub attempt: LoginAttempt,
}
