use std::future::Future;
use std::time::Duration;

use crate::services::store::{ProfileSnapshot, StoreError};

/// In-memory snapshot cache for stores that are expensive to read
///
/// Holds a single snapshot for `ttl_secs`. Concurrent misses are coalesced so
/// only one load runs; every waiter receives the same snapshot.
pub struct SnapshotCache {
    snapshots: moka::future::Cache<(), ProfileSnapshot>,
    ttl_secs: u64,
}

impl SnapshotCache {
    /// A TTL of zero is raised to one second
    pub fn new(ttl_secs: u64) -> Self {
        let ttl_secs = if ttl_secs == 0 {
            tracing::warn!("snapshot_ttl_secs = 0 is not supported, using 1s");
            1
        } else {
            ttl_secs
        };

        let snapshots = moka::future::Cache::builder()
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { snapshots, ttl_secs }
    }

    /// Return the cached snapshot, running `load` on a miss
    pub async fn get_or_load<F, Fut>(&self, load: F) -> Result<ProfileSnapshot, StoreError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<ProfileSnapshot, StoreError>>,
    {
        self.snapshots
            .try_get_with((), load())
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }
}
