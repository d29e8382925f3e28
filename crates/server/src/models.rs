mod api;
mod settings;
mod sync;

pub use api::{ApiResponse, RefreshData, SampleQuery, SyncResponse, DEFAULT_SAMPLE_LIMIT, MAX_SAMPLE_LIMIT};
pub use settings::{AdminSettings, Settings, SyncSettings, TmdbSettings};
pub use sync::{Actor, BackfillEntry, BackfillReport, PhaseOutcome, PhaseReport, SyncReport};
