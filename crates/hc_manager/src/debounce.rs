use std::future::pending;
use std::time::Duration;

use tokio::time::{self, Instant};

/// Restartable single-shot delay.
///
/// `rearm` cancels any pending fire and restarts the countdown, so a
/// burst of calls collapses into one elapse after the quiet interval.
/// While disarmed, `elapsed` never resolves.
#[derive(Debug)]
pub struct Debounce {
    interval: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    /// Restart the countdown from now.
    pub fn rearm(&mut self) {
        self.deadline = Some(Instant::now() + self.interval);
    }

    /// Cancel any pending fire.
    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Resolves once the quiet interval has passed; pends forever while
    /// disarmed. Intended for use as a `tokio::select!` arm.
    pub async fn elapsed(&self) {
        match self.deadline {
            Some(deadline) => time::sleep_until(deadline).await,
            None => pending().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    const INTERVAL: Duration = Duration::from_millis(1000);

    #[tokio::test(start_paused = true)]
    async fn fires_after_the_quiet_interval() {
        let mut debounce = Debounce::new(INTERVAL);
        debounce.rearm();
        assert!(timeout(Duration::from_millis(1100), debounce.elapsed())
            .await
            .is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn rearm_resets_the_countdown() {
        let mut debounce = Debounce::new(INTERVAL);
        debounce.rearm();
        time::advance(Duration::from_millis(600)).await;
        debounce.rearm();

        // The original deadline (400 ms away) must not fire.
        assert!(timeout(Duration::from_millis(500), debounce.elapsed())
            .await
            .is_err());
        // The restarted one does.
        assert!(timeout(Duration::from_millis(600), debounce.elapsed())
            .await
            .is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn disarmed_never_fires() {
        let debounce = Debounce::new(INTERVAL);
        assert!(!debounce.is_armed());
        assert!(timeout(Duration::from_millis(5000), debounce.elapsed())
            .await
            .is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn disarm_cancels_a_pending_fire() {
        let mut debounce = Debounce::new(INTERVAL);
        debounce.rearm();
        debounce.disarm();
        assert!(timeout(Duration::from_millis(2000), debounce.elapsed())
            .await
            .is_err());
    }
}
