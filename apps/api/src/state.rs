use std::sync::Arc;

use tollgate_application::{
    AttemptLogService, LifecycleService, LoginRequestService, LoginStatsService, StorageBackend,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub login_request_service: LoginRequestService,
    pub lifecycle_service: LifecycleService,
    pub attempt_log_service: AttemptLogService,
    pub stats_service: LoginStatsService,
    pub storage: Arc<dyn StorageBackend>,
}
