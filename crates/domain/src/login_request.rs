//! Login request entity and its status state machine.
//!
//! A request starts `pending` and is moved to `approved` or `rejected` by an
//! operator. Credentials are stored verbatim; nothing here hashes or validates
//! them.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use tollgate_core::AppError;

/// IP address recorded when the submitter did not provide one.
pub const DEFAULT_IP_ADDRESS: &str = "127.0.0.1";

/// Identifier assigned to a login request by the storage backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoginRequestId(i64);

impl LoginRequestId {
    /// Creates an identifier from a stored value.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl Display for LoginRequestId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Lifecycle status of a login request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginRequestStatus {
    /// Waiting for an operator decision.
    Pending,
    /// Approved by an operator.
    Approved,
    /// Rejected by an operator.
    Rejected,
}

impl LoginRequestStatus {
    /// Returns a stable storage value for this status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Returns true once the request has left `pending`.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Returns all known statuses.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[LoginRequestStatus] = &[
            LoginRequestStatus::Pending,
            LoginRequestStatus::Approved,
            LoginRequestStatus::Rejected,
        ];

        ALL
    }
}

impl Display for LoginRequestStatus {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for LoginRequestStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| {
                AppError::Validation(format!("unknown login request status '{value}'"))
            })
    }
}

/// Terminal outcome chosen by an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    /// Grants the login.
    Approved,
    /// Denies the login.
    Rejected,
}

impl Resolution {
    /// Returns a stable storage value for this outcome.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        self.status().as_str()
    }

    /// Returns the request status this outcome moves to.
    #[must_use]
    pub fn status(&self) -> LoginRequestStatus {
        match self {
            Self::Approved => LoginRequestStatus::Approved,
            Self::Rejected => LoginRequestStatus::Rejected,
        }
    }
}

impl From<Resolution> for LoginRequestStatus {
    fn from(value: Resolution) -> Self {
        value.status()
    }
}

impl Display for Resolution {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Resolution {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(AppError::Validation(format!(
                "'{value}' is not a terminal login request status"
            ))),
        }
    }
}

/// A submitted credential pair awaiting, or having received, a decision.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginRequest {
    id: LoginRequestId,
    username: String,
    password: String,
    ip_address: String,
    status: LoginRequestStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl LoginRequest {
    /// Creates a freshly stored pending request with both timestamps at `created_at`.
    #[must_use]
    pub fn pending(
        id: LoginRequestId,
        username: impl Into<String>,
        password: impl Into<String>,
        ip_address: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            password: password.into(),
            ip_address: ip_address.into(),
            status: LoginRequestStatus::Pending,
            created_at,
            updated_at: created_at,
        }
    }

    /// Rebuilds a request from persisted values.
    #[must_use]
    pub fn from_stored(
        id: LoginRequestId,
        username: String,
        password: String,
        ip_address: String,
        status: LoginRequestStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            password,
            ip_address,
            status,
            created_at,
            updated_at,
        }
    }

    /// Returns the storage-assigned identifier.
    #[must_use]
    pub fn id(&self) -> LoginRequestId {
        self.id
    }

    /// Returns the submitted username.
    #[must_use]
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Returns the submitted password, verbatim.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Returns the submitter's IP address.
    #[must_use]
    pub fn ip_address(&self) -> &str {
        self.ip_address.as_str()
    }

    /// Returns the current lifecycle status.
    #[must_use]
    pub fn status(&self) -> LoginRequestStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the timestamp of the last status change.
    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns true while the request awaits a decision.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        !self.status.is_terminal()
    }

    /// Applies an operator decision at `resolved_at`.
    ///
    /// Already resolved requests are overwritten. `updated_at` always lands
    /// strictly after `created_at`, even when the clock has not advanced.
    pub fn resolve(&mut self, resolution: Resolution, resolved_at: DateTime<Utc>) {
        self.status = resolution.status();
        self.updated_at = resolution_timestamp(self.created_at, resolved_at);
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("LoginRequest")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("ip_address", &self.ip_address)
            .field("status", &self.status)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

fn resolution_timestamp(created_at: DateTime<Utc>, resolved_at: DateTime<Utc>) -> DateTime<Utc> {
    if resolved_at > created_at {
        resolved_at
    } else {
        created_at + TimeDelta::microseconds(1)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, TimeZone, Utc};
    use proptest::prelude::*;

    use super::{LoginRequest, LoginRequestId, LoginRequestStatus, Resolution};

    fn sample_request() -> LoginRequest {
        let created_at = Utc
            .with_ymd_and_hms(2026, 3, 1, 9, 30, 0)
            .single()
            .unwrap_or_else(|| unreachable!());
        LoginRequest::pending(LoginRequestId::new(1), "alice", "pw1", "10.0.0.1", created_at)
    }

    fn resolution_strategy() -> impl Strategy<Value = Resolution> {
        prop_oneof![Just(Resolution::Approved), Just(Resolution::Rejected)]
    }

    #[test]
    fn pending_request_starts_with_equal_timestamps() {
        let request = sample_request();
        assert!(request.is_pending());
        assert_eq!(request.created_at(), request.updated_at());
    }

    #[test]
    fn resolved_request_is_no_longer_pending() {
        let mut request = sample_request();
        request.resolve(Resolution::Approved, request.created_at());

        assert!(!request.is_pending());
        assert_eq!(request.status(), LoginRequestStatus::Approved);
    }

    #[test]
    fn status_round_trips_through_storage_value() {
        for status in LoginRequestStatus::all() {
            let parsed = status.as_str().parse::<LoginRequestStatus>();
            assert_eq!(parsed.ok(), Some(*status));
        }
    }

    #[test]
    fn pending_is_not_a_resolution() {
        assert!("pending".parse::<Resolution>().is_err());
        assert!("unknown".parse::<LoginRequestStatus>().is_err());
    }

    #[test]
    fn resolve_with_stale_clock_still_advances_updated_at() {
        let mut request = sample_request();
        let stale = request.created_at() - TimeDelta::seconds(5);
        request.resolve(Resolution::Rejected, stale);

        assert_eq!(request.status(), LoginRequestStatus::Rejected);
        assert!(request.updated_at() > request.created_at());
    }

    #[test]
    fn debug_output_redacts_password() {
        let rendered = format!("{:?}", sample_request());
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("pw1"));
    }

    proptest! {
        #[test]
        fn resolutions_never_return_to_pending(
            outcomes in proptest::collection::vec(resolution_strategy(), 1..8),
            offsets in proptest::collection::vec(-60_i64..60, 8),
        ) {
            let mut request = sample_request();
            let created_at = request.created_at();

            for (outcome, offset) in outcomes.iter().zip(offsets.iter()) {
                request.resolve(*outcome, created_at + TimeDelta::seconds(*offset));

                prop_assert!(request.status().is_terminal());
                prop_assert_eq!(request.status(), outcome.status());
                prop_assert_eq!(request.created_at(), created_at);
                prop_assert!(request.updated_at() > created_at);
            }
        }
    }
}
