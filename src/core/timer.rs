//! Delays owned by a page. Dropping the owner cancels the delay, and a
//! completion that raced a cancel is rejected by its generation number.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use futures::FutureExt;
use futures::future::{AbortHandle, Abortable, BoxFuture};

/// Simulated submit delay of the create-task form.
pub const TASK_SUBMIT_DELAY: Duration = Duration::from_millis(1500);
/// Interval between backup progress steps.
pub const BACKUP_TICK: Duration = Duration::from_millis(200);
/// Percent added per backup step.
pub const BACKUP_STEP: u8 = 10;

/// Generations are unique across every timer in the process, so a completion
/// can never match a different timer's arm.
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Default)]
pub struct ScopedTimer {
    handle: Option<AbortHandle>,
    generation: u64,
}

impl ScopedTimer {
    /// Start a delay, aborting any previous one. The returned future
    /// resolves to this arm's generation, or `None` when it was aborted.
    pub fn arm(&mut self, delay: Duration) -> BoxFuture<'static, Option<u64>> {
        self.cancel();
        let (handle, registration) = AbortHandle::new_pair();
        self.handle = Some(handle);
        let generation = NEXT_GENERATION.fetch_add(1, Ordering::Relaxed);
        self.generation = generation;
        let sleep = Abortable::new(tokio::time::sleep(delay), registration);
        async move {
            match sleep.await {
                Ok(()) => Some(generation),
                Err(_) => {
                    log::debug!("Timer generation {} aborted", generation);
                    None
                }
            }
        }
        .boxed()
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    /// Accept a completion. Only the latest arm counts, and only once.
    pub fn accept(&mut self, generation: u64) -> bool {
        if self.handle.is_some() && generation == self.generation {
            self.handle = None;
            log::debug!("Timer generation {} fired", generation);
            true
        } else {
            log::debug!("Ignoring stale timer generation {}", generation);
            false
        }
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Progress of a simulated backup, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackupRun {
    #[default]
    Idle,
    Running(u8),
    Complete,
}

impl BackupRun {
    pub fn start() -> Self {
        Self::Running(0)
    }

    /// Advance by one step. Reaching 100 completes the run.
    pub fn step(self) -> Self {
        match self {
            Self::Running(p) if p.saturating_add(BACKUP_STEP) >= 100 => Self::Complete,
            Self::Running(p) => Self::Running(p + BACKUP_STEP),
            other => other,
        }
    }

    pub fn progress(&self) -> u8 {
        match self {
            Self::Idle => 0,
            Self::Running(p) => *p,
            Self::Complete => 100,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn armed_timer_fires_with_its_generation() {
        let mut timer = ScopedTimer::default();
        let generation = timer.arm(Duration::from_millis(5)).await.unwrap();
        assert!(timer.accept(generation));
        assert!(!timer.is_armed());
        // A second delivery of the same completion is stale.
        assert!(!timer.accept(generation));
    }

    #[tokio::test]
    async fn rearming_aborts_the_previous_delay() {
        let mut timer = ScopedTimer::default();
        let first = timer.arm(Duration::from_millis(5));
        let second = timer.arm(Duration::from_millis(5));
        assert_eq!(first.await, None);
        let generation = second.await.unwrap();
        assert!(timer.accept(generation));
    }

    #[tokio::test]
    async fn dropping_the_owner_cancels() {
        let mut timer = ScopedTimer::default();
        let pending = timer.arm(Duration::from_millis(5));
        drop(timer);
        assert_eq!(pending.await, None);
    }

    #[tokio::test]
    async fn completion_racing_a_cancel_is_rejected() {
        let mut timer = ScopedTimer::default();
        let generation = timer.arm(Duration::from_millis(1)).await.unwrap();
        timer.cancel();
        assert!(!timer.accept(generation));
    }

    #[tokio::test]
    async fn completion_from_a_dropped_owner_is_rejected_by_its_successor() {
        let mut old = ScopedTimer::default();
        let leftover = old.arm(Duration::from_millis(1));
        let mut fresh = ScopedTimer::default();
        let pending = fresh.arm(Duration::from_millis(50));

        // The old owner's arm completes before it goes away.
        let stale = leftover.await.unwrap();
        drop(old);
        assert!(fresh.is_armed());
        assert!(!fresh.accept(stale));
        assert!(fresh.is_armed());

        let generation = pending.await.unwrap();
        assert_ne!(generation, stale);
        assert!(fresh.accept(generation));
    }

    #[test]
    fn backup_reaches_complete_in_ten_steps() {
        let mut run = BackupRun::start();
        let mut seen = vec![run.progress()];
        while run.is_running() {
            run = run.step();
            seen.push(run.progress());
        }
        assert_eq!(run, BackupRun::Complete);
        assert_eq!(seen, vec![0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
        assert_eq!(BackupRun::Idle.step(), BackupRun::Idle);
    }
}
