use std::sync::Arc;

use chrono::{DateTime, Local, NaiveTime, Offset, TimeDelta, TimeZone, Utc};
use tollgate_core::AppResult;
use tollgate_domain::{LoginRequest, LoginRequestStatus};

use crate::storage_ports::{LoginRequestFilter, StorageBackend};

/// Aggregate counts over the request log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoginRequestStats {
    /// Number of stored requests.
    pub total: u64,
    /// Requests currently approved.
    pub approved: u64,
    /// Requests currently rejected.
    pub rejected: u64,
    /// Requests awaiting a decision.
    pub pending: u64,
    /// Requests created at or after the start of the current local day.
    pub today: u64,
}

impl LoginRequestStats {
    /// Counts the given requests; `day_start` is the inclusive lower bound for `today`.
    #[must_use]
    pub fn from_requests(requests: &[LoginRequest], day_start: DateTime<Utc>) -> Self {
        requests
            .iter()
            .fold(Self::default(), |mut stats, request| {
                stats.total += 1;
                match request.status() {
                    LoginRequestStatus::Pending => stats.pending += 1,
                    LoginRequestStatus::Approved => stats.approved += 1,
                    LoginRequestStatus::Rejected => stats.rejected += 1,
                }
                if request.created_at() >= day_start {
                    stats.today += 1;
                }
                stats
            })
    }
}

/// Computes statistics by scanning the request store on every call.
#[derive(Clone)]
pub struct LoginStatsService {
    storage: Arc<dyn StorageBackend>,
}

impl LoginStatsService {
    /// Creates a service from a storage backend.
    #[must_use]
    pub fn new(storage: Arc<dyn StorageBackend>) -> Self {
        Self { storage }
    }

    /// Computes statistics relative to the server's local day.
    pub async fn compute_stats(&self) -> AppResult<LoginRequestStats> {
        self.compute_stats_at(Local::now()).await
    }

    /// Computes statistics relative to the day containing `now`.
    pub async fn compute_stats_at<Tz: TimeZone>(
        &self,
        now: DateTime<Tz>,
    ) -> AppResult<LoginRequestStats> {
        let start_of_day = day_start(&now);
        let requests = self
            .storage
            .list_login_requests(LoginRequestFilter::all())
            .await?;

        Ok(LoginRequestStats::from_requests(&requests, start_of_day))
    }
}

/// Returns midnight of the day containing `now`, in `now`'s timezone.
///
/// Where midnight does not exist locally, the current UTC offset is applied
/// to the naive midnight instead.
fn day_start<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Utc> {
    let midnight = now.date_naive().and_time(NaiveTime::MIN);

    match midnight.and_local_timezone(now.timezone()).earliest() {
        Some(start) => start.with_timezone(&Utc),
        None => {
            let offset_seconds = now.offset().fix().local_minus_utc();
            (midnight - TimeDelta::seconds(i64::from(offset_seconds))).and_utc()
        }
    }
}
