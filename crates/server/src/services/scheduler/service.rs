use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::traits::SchedulerJob;

/// Runtime state of a registered job
struct JobEntry {
    job: Arc<dyn SchedulerJob>,
    running: Arc<AtomicBool>,
}

/// Runs each registered job on its own interval.
///
/// A tick that arrives while the previous execution is still running is
/// skipped, and missed ticks are not replayed.
#[derive(Default)]
pub struct SchedulerService {
    jobs: Vec<JobEntry>,
}

impl SchedulerService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_job<J: SchedulerJob + 'static>(self, job: J) -> Self {
        self.with_arc_job(Arc::new(job))
    }

    pub fn with_arc_job(mut self, job: Arc<dyn SchedulerJob>) -> Self {
        self.jobs.push(JobEntry {
            job,
            running: Arc::new(AtomicBool::new(false)),
        });
        self
    }

    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    /// Spawn one timer task per job.
    pub fn start(&self) {
        tracing::info!("Scheduler started with {} jobs", self.jobs.len());

        for entry in &self.jobs {
            let job = Arc::clone(&entry.job);
            let running = Arc::clone(&entry.running);

            tokio::spawn(async move {
                let mut timer = tokio::time::interval(job.interval());
                timer.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

                loop {
                    timer.tick().await;
                    spawn_job(Arc::clone(&job), Arc::clone(&running));
                }
            });
        }
    }
}

/// Execute a job in its own task unless it is already running.
fn spawn_job(job: Arc<dyn SchedulerJob>, running: Arc<AtomicBool>) {
    let name = job.name();
    if running.swap(true, Ordering::AcqRel) {
        tracing::debug!("Job '{}' is already running, skipping this tick", name);
        return;
    }

    tokio::spawn(async move {
        match job.execute().await {
            Ok(()) => tracing::debug!("Job '{}' completed successfully", name),
            Err(e) => tracing::error!("Job '{}' execution error: {}", name, e),
        }
        running.store(false, Ordering::Release);
    });
}
