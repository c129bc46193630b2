use std::sync::Arc;

use tollgate_core::AppError;
use tollgate_domain::{LoginRequestId, LoginRequestStatus, Resolution};

use super::LifecycleService;
use crate::storage_ports::{LoginAttemptQuery, StorageBackend};
use crate::test_support::FakeStorageBackend;
use crate::{LoginRequestService, SubmitLoginRequestInput};

fn services(storage: Arc<FakeStorageBackend>) -> (LoginRequestService, LifecycleService) {
    (
        LoginRequestService::new(storage.clone()),
        LifecycleService::new(storage),
    )
}

async fn submit(service: &LoginRequestService, username: &str) -> LoginRequestId {
    service
        .submit(SubmitLoginRequestInput {
            username: username.to_owned(),
            password: "pw1".to_owned(),
            ip_address: Some("10.0.0.1".to_owned()),
        })
        .await
        .map(|request| request.id())
        .unwrap_or_else(|_| unreachable!())
}

fn all_attempts() -> LoginAttemptQuery {
    LoginAttemptQuery {
        username: None,
        limit: 100,
    }
}

#[tokio::test]
async fn approve_moves_request_out_of_pending() {
    let storage = Arc::new(FakeStorageBackend::new());
    let (requests, lifecycle) = services(storage.clone());
    let id = submit(&requests, "alice").await;

    let approved = lifecycle.approve(id).await;
    assert!(approved.is_ok());
    let approved = approved.unwrap_or_else(|_| unreachable!());
    assert_eq!(approved.status(), LoginRequestStatus::Approved);

    let fetched = requests.get_by_id(id).await.unwrap_or_else(|_| unreachable!());
    assert_eq!(fetched.status(), LoginRequestStatus::Approved);
    assert!(fetched.updated_at() > fetched.created_at());

    let pending = requests.list_pending().await.unwrap_or_default();
    assert!(pending.iter().all(|request| request.id() != id));
}

#[tokio::test]
async fn each_resolution_appends_one_matching_attempt() {
    let storage = Arc::new(FakeStorageBackend::new());
    let (requests, lifecycle) = services(storage.clone());
    let id = submit(&requests, "alice").await;

    assert!(lifecycle.reject(id).await.is_ok());

    let attempts = storage
        .list_login_attempts(all_attempts())
        .await
        .unwrap_or_default();
    assert_eq!(attempts.len(), 1);
    assert_eq!(attempts[0].username(), "alice");
    assert_eq!(attempts[0].ip_address(), "10.0.0.1");
    assert_eq!(attempts[0].status(), Resolution::Rejected);

    let request = requests.get_by_id(id).await.unwrap_or_else(|_| unreachable!());
    assert_eq!(attempts[0].created_at(), request.updated_at());
}

#[tokio::test]
async fn re_resolution_overwrites_status_and_appends_another_attempt() {
    let storage = Arc::new(FakeStorageBackend::new());
    let (requests, lifecycle) = services(storage.clone());
    let id = submit(&requests, "alice").await;

    let first = lifecycle
        .approve(id)
        .await
        .unwrap_or_else(|_| unreachable!());
    let second = lifecycle
        .reject(id)
        .await
        .unwrap_or_else(|_| unreachable!());

    assert_eq!(second.status(), LoginRequestStatus::Rejected);
    assert!(second.updated_at() > first.updated_at());
    assert_eq!(storage.attempt_count(), 2);
}

#[tokio::test]
async fn resolving_missing_request_is_not_found_and_writes_nothing() {
    let storage = Arc::new(FakeStorageBackend::new());
    let (_, lifecycle) = services(storage.clone());

    let result = lifecycle.approve(LoginRequestId::new(9999)).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(storage.attempt_count(), 0);
}

#[tokio::test]
async fn attempt_append_failure_surfaces_without_rollback() {
    let storage = Arc::new(FakeStorageBackend::failing_attempt_appends());
    let (requests, lifecycle) = services(storage.clone());
    let id = submit(&requests, "alice").await;

    let result = lifecycle.approve(id).await;
    assert!(matches!(result, Err(AppError::Internal(_))));

    let request = requests.get_by_id(id).await.unwrap_or_else(|_| unreachable!());
    assert_eq!(request.status(), LoginRequestStatus::Approved);
    assert_eq!(storage.attempt_count(), 0);
}
