//! Periodic auto-save of every open stepper.
//!
//! The timer and manual saves write the same keys with full snapshots, so
//! whichever lands last wins.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use scat_core::config::PersistenceConfig;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::Instrument;

use crate::registry::StepperRegistry;

/// Pure due-check for hosts that drive their own timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoSaveScheduler {
    interval: Duration,
}

impl AutoSaveScheduler {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn from_config(config: &PersistenceConfig) -> Self {
        Self::new(Duration::from_secs(config.autosave_interval_secs))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Due when nothing was ever saved or a full interval has elapsed.
    /// A `last_saved` in the future (clock skew) is not due.
    pub fn is_due(&self, last_saved: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
        let Some(last) = last_saved else {
            return true;
        };
        match (now - last).to_std() {
            Ok(elapsed) => elapsed >= self.interval,
            Err(_) => false,
        }
    }
}

/// Running auto-save task. Stops on [`AutoSaveHandle::stop`] or drop.
#[derive(Debug)]
pub struct AutoSaveHandle {
    handle: JoinHandle<()>,
}

impl AutoSaveHandle {
    pub fn stop(self) {
        self.handle.abort();
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for AutoSaveHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Spawn a task on the current tokio runtime that calls
/// [`StepperRegistry::save_all`] every `interval`. The first save happens one
/// interval after spawning.
pub fn spawn_autosave(registry: Arc<StepperRegistry>, interval: Duration) -> AutoSaveHandle {
    // tokio intervals panic on a zero period.
    let interval = interval.max(Duration::from_millis(1));
    let span = tracing::info_span!("scat.autosave", interval_ms = interval.as_millis() as u64);
    let handle = tokio::spawn(
        async move {
            let mut ticker = interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let registry = Arc::clone(&registry);
                match tokio::task::spawn_blocking(move || registry.save_all()).await {
                    Ok(summary) if summary.is_clean() => {
                        tracing::debug!(saved = summary.saved, "auto-save pass");
                    }
                    Ok(summary) => {
                        tracing::warn!(
                            saved = summary.saved,
                            failed = summary.failures.len(),
                            "auto-save pass had failures"
                        );
                    }
                    Err(e) => tracing::warn!(error = %e, "auto-save pass aborted"),
                }
            }
        }
        .instrument(span),
    );
    AutoSaveHandle { handle }
}
