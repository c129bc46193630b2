use std::sync::Arc;

use tollgate_application::{
    AttemptLogService, LifecycleService, LoginRequestService, LoginStatsService, StorageBackend,
};

use crate::state::AppState;

pub fn build_app_state(storage: Arc<dyn StorageBackend>) -> AppState {
    AppState {
        login_request_service: LoginRequestService::new(storage.clone()),
        lifecycle_service: LifecycleService::new(storage.clone()),
        attempt_log_service: AttemptLogService::new(storage.clone()),
        stats_service: LoginStatsService::new(storage.clone()),
        storage,
    }
}
