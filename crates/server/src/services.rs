mod observer;
mod scheduler;
mod settings;
mod sync;

pub use observer::{SyncObserver, TracingObserver};
pub use scheduler::{JobResult, MediaSyncJob, SchedulerJob, SchedulerService};
pub use settings::{SettingsError, SettingsService};
pub use sync::SyncService;
