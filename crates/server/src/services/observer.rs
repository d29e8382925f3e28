use chrono::{DateTime, Utc};
use domain::{MediaType, SampleOrder};

use crate::models::{Actor, BackfillReport, PhaseOutcome, PhaseReport, SyncReport};

/// Receives run outcomes once each step has completed.
///
/// Keeps reporting out of the sync logic: the orchestrator builds reports,
/// observers decide how to surface them.
pub trait SyncObserver: Send + Sync {
    fn sync_started(&self, actor: &Actor, at: DateTime<Utc>);

    fn phase_finished(&self, actor: &Actor, phase: &PhaseReport);

    fn sync_finished(&self, report: &SyncReport);

    fn backfill_finished(&self, actor: &Actor, report: &BackfillReport);

    fn sample_served(&self, actor: &Actor, media_type: MediaType, order: SampleOrder, count: usize);
}

/// Observer that emits structured `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl SyncObserver for TracingObserver {
    fn sync_started(&self, actor: &Actor, at: DateTime<Utc>) {
        tracing::info!(actor = %actor, started_at = %at, "TMDB sync started");
    }

    fn phase_finished(&self, actor: &Actor, phase: &PhaseReport) {
        match &phase.outcome {
            PhaseOutcome::Completed {
                fetched,
                saved,
                skipped,
                failed,
            } => tracing::info!(
                actor = %actor,
                media_type = %phase.media_type,
                fetched,
                saved,
                skipped,
                failed,
                "{} fetched and saved",
                phase.media_type.plural()
            ),
            PhaseOutcome::Failed { reason } => tracing::warn!(
                actor = %actor,
                media_type = %phase.media_type,
                reason = %reason,
                "Failed to fetch {} from TMDB",
                phase.media_type.plural()
            ),
        }
    }

    fn sync_finished(&self, report: &SyncReport) {
        let elapsed_ms = (report.finished_at - report.started_at).num_milliseconds();
        tracing::info!(
            actor = %report.actor,
            finished_at = %report.finished_at,
            elapsed_ms,
            saved = report.total_saved(),
            "{}",
            report.summary()
        );
    }

    fn backfill_finished(&self, actor: &Actor, report: &BackfillReport) {
        tracing::info!(
            actor = %actor,
            updated = report.updated.len(),
            skipped = report.skipped,
            "Genre backfill finished"
        );
    }

    fn sample_served(&self, actor: &Actor, media_type: MediaType, order: SampleOrder, count: usize) {
        tracing::info!(
            actor = %actor,
            media_type = %media_type,
            order = order.as_str(),
            count,
            "Served {} from local store",
            media_type.plural()
        );
    }
}
