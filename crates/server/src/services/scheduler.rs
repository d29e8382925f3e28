mod media_sync_job;
mod service;
mod traits;

pub use media_sync_job::MediaSyncJob;
pub use service::SchedulerService;
pub use traits::{JobResult, SchedulerJob};
