use chrono::{DateTime, Utc};
use domain::MediaType;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Who triggered a run or read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase", tag = "kind", content = "name")]
pub enum Actor {
    /// An authenticated admin user
    User(String),
    /// Scheduler, CLI, or anonymous caller
    System,
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Actor::User(name) => write!(f, "{}", name),
            Actor::System => write!(f, "system"),
        }
    }
}

/// Outcome of one media type's fetch-and-save phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum PhaseOutcome {
    /// Provider answered; per-item counts follow
    Completed {
        fetched: usize,
        saved: usize,
        /// Items rejected by normalization
        skipped: usize,
        /// Items the store refused
        failed: usize,
    },
    /// Provider call failed; nothing was saved for this type
    Failed { reason: String },
}

/// Report for one media type within a sync run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PhaseReport {
    pub media_type: MediaType,
    pub outcome: PhaseOutcome,
}

impl PhaseReport {
    pub fn saved(&self) -> usize {
        match self.outcome {
            PhaseOutcome::Completed { saved, .. } => saved,
            PhaseOutcome::Failed { .. } => 0,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, PhaseOutcome::Failed { .. })
    }
}

/// Report for a full sync run
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SyncReport {
    pub actor: Actor,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub phases: Vec<PhaseReport>,
}

impl SyncReport {
    pub fn phase(&self, media_type: MediaType) -> Option<&PhaseReport> {
        self.phases.iter().find(|p| p.media_type == media_type)
    }

    pub fn total_saved(&self) -> usize {
        self.phases.iter().map(PhaseReport::saved).sum()
    }

    pub fn has_failures(&self) -> bool {
        self.phases.iter().any(PhaseReport::is_failed)
    }

    /// One-line summary for admin notices and CLI output.
    pub fn summary(&self) -> String {
        let parts: Vec<String> = self
            .phases
            .iter()
            .map(|phase| match &phase.outcome {
                PhaseOutcome::Completed { fetched, saved, .. } => {
                    format!("{} {}/{} saved", phase.media_type.plural(), saved, fetched)
                }
                PhaseOutcome::Failed { .. } => {
                    format!("{} failed to fetch", phase.media_type.plural())
                }
            })
            .collect();

        format!("TMDB sync finished: {}", parts.join(", "))
    }
}

/// A record whose genres were filled in by the backfill pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BackfillEntry {
    pub id: i64,
    pub tmdb_id: i64,
    pub title: String,
    pub media_type: MediaType,
    pub genres: String,
}

/// Report for a genre backfill run
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct BackfillReport {
    /// Records actually updated, in processing order
    pub updated: Vec<BackfillEntry>,
    /// Records left untouched (fetch failure, no genres, or store error)
    pub skipped: usize,
}
