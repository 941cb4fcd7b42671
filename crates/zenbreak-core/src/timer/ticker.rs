//! Scoped repeating timer.
//!
//! A [`Ticker`] spawns a task on the current tokio runtime that sends one
//! message per period on an unbounded channel. The task is aborted when the
//! `Ticker` is dropped, so a timer never outlives the state that owns it.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

#[derive(Debug)]
pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Start ticking. The first message is sent one full `period` from now.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<M, F>(period: Duration, tx: UnboundedSender<M>, make: F) -> Self
    where
        M: Send + 'static,
        F: Fn() -> M + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            // A late tick is delivered late, never doubled up.
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(make()).is_err() {
                    break;
                }
            }
        });
        Self { handle }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn sends_once_per_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _ticker = Ticker::spawn(Duration::from_secs(1), tx, || 7u8);

        tokio::time::sleep(Duration::from_millis(3500)).await;
        let mut received = Vec::new();
        while let Ok(v) = rx.try_recv() {
            received.push(v);
        }
        assert_eq!(received, vec![7, 7, 7]);
    }

    #[tokio::test(start_paused = true)]
    async fn nothing_fires_after_drop() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let ticker = Ticker::spawn(Duration::from_secs(1), tx, || ());

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert!(rx.try_recv().is_ok());

        drop(ticker);
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }
}
