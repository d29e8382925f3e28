use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use super::traits::{JobResult, SchedulerJob};
use crate::models::Actor;
use crate::services::SyncService;

/// Periodic full sync of popular movies and series, run as the system actor.
pub struct MediaSyncJob {
    sync: Arc<SyncService>,
    interval: Duration,
}

impl MediaSyncJob {
    pub fn new(sync: Arc<SyncService>, interval: Duration) -> Self {
        Self { sync, interval }
    }
}

#[async_trait]
impl SchedulerJob for MediaSyncJob {
    fn name(&self) -> &'static str {
        "MediaSyncJob"
    }

    fn interval(&self) -> Duration {
        self.interval
    }

    async fn execute(&self) -> JobResult {
        // Phase failures are reported by the observer; the job itself succeeds
        self.sync.run_full_sync(Actor::System).await;
        Ok(())
    }
}
