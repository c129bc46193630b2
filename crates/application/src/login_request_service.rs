use std::sync::Arc;

use tollgate_core::{AppError, AppResult};
use tollgate_domain::{DEFAULT_IP_ADDRESS, LoginRequest, LoginRequestId, LoginRequestStatus};
use tracing::info;

use crate::storage_ports::{LoginRequestFilter, NewLoginRequest, StorageBackend};


/// Credential submission payload.
#[derive(Clone, PartialEq, Eq)]
pub struct SubmitLoginRequestInput {
    /// Submitted username.
    pub username: String,
    /// Submitted password, stored verbatim.
    pub password: String,
    /// Submitter IP address, when known.
    pub ip_address: Option<String>,
}

impl std::fmt::Debug for SubmitLoginRequestInput {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("SubmitLoginRequestInput")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("ip_address", &self.ip_address)
            .finish()
    }
}

/// Application service for storing and reading login requests.
#[derive(Clone)]
pub struct LoginRequestService {
    storage: Arc<dyn StorageBackend>,
}

impl LoginRequestService {
    /// Creates a service from a storage backend.
    #[must_use]
    pub fn new(storage: Arc<dyn StorageBackend>) -> Self {
        Self { storage }
    }

    /// Records a credential submission as a pending request.
    ///
    /// A missing or blank IP address is stored as `127.0.0.1`.
    pub async fn submit(&self, input: SubmitLoginRequestInput) -> AppResult<LoginRequest> {
        let ip_address = input
            .ip_address
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_IP_ADDRESS.to_owned());

        let request = self
            .storage
            .insert_login_request(NewLoginRequest {
                username: input.username,
                password: input.password,
                ip_address,
            })
            .await?;

        info!(
            request_id = %request.id(),
            username = request.username(),
            ip_address = request.ip_address(),
            "login request submitted"
        );

        Ok(request)
    }

    /// Lists every request, newest first.
    pub async fn list_all(&self) -> AppResult<Vec<LoginRequest>> {
        self.storage
            .list_login_requests(LoginRequestFilter::all())
            .await
    }

    /// Lists requests still awaiting a decision, newest first.
    pub async fn list_pending(&self) -> AppResult<Vec<LoginRequest>> {
        self.list_by_status(Some(LoginRequestStatus::Pending)).await
    }

    /// Lists requests, optionally restricted to one status.
    pub async fn list_by_status(
        &self,
        status: Option<LoginRequestStatus>,
    ) -> AppResult<Vec<LoginRequest>> {
        let filter = status
            .map(LoginRequestFilter::with_status)
            .unwrap_or_else(LoginRequestFilter::all);

        self.storage.list_login_requests(filter).await
    }

    /// Returns one request or `NotFound`.
    pub async fn get_by_id(&self, id: LoginRequestId) -> AppResult<LoginRequest> {
        self.storage
            .find_login_request(id)
            .await?
            .ok_or_else(|| login_request_not_found(id))
    }
}

pub(crate) fn login_request_not_found(id: LoginRequestId) -> AppError {
    AppError::NotFound(format!("login request '{id}' does not exist"))
}
