use async_trait::async_trait;
use std::time::Duration;

/// Result type for scheduler job execution.
pub type JobResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// A job run periodically by the [`SchedulerService`](super::SchedulerService).
#[async_trait]
pub trait SchedulerJob: Send + Sync {
    /// Unique name, used in logs.
    fn name(&self) -> &'static str;

    /// Time between executions. The first execution happens immediately.
    fn interval(&self) -> Duration;

    /// Run the job once.
    ///
    /// Errors are logged and the job is retried at the next tick.
    async fn execute(&self) -> JobResult;
}
