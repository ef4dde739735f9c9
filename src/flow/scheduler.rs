use std::{collections::HashMap, time::Duration};

use flume::Sender;
use tokio::task::JoinHandle;

use super::types::{Effect, TimerToken};

/// Runs controller timer effects as cancelable tokio tasks.
///
/// Each scheduled task sleeps for its delay and then sends its token on
/// `fired_tx`. Must be used from within a tokio runtime.
pub struct Scheduler {
    fired_tx: Sender<TimerToken>,
    tasks: HashMap<TimerToken, JoinHandle<()>>,
}

impl Scheduler {
    pub fn new(fired_tx: Sender<TimerToken>) -> Self {
        Self {
            fired_tx,
            tasks: HashMap::new(),
        }
    }

    pub fn apply<I>(&mut self, effects: I)
    where
        I: IntoIterator<Item = Effect>,
    {
        for effect in effects {
            match effect {
                Effect::Schedule { token, kind, delay } => {
                    log::info!("⏱️ Scheduling {kind} as {token} in {delay:?}");
                    self.schedule(token, delay);
                }
                Effect::Cancel(token) => {
                    log::info!("🛑 Cancelling timer {token}");
                    self.cancel(token);
                }
            }
        }
    }

    /// Forget a task whose token has already been delivered.
    pub fn complete(&mut self, token: TimerToken) {
        self.tasks.remove(&token);
    }

    /// Number of timers that have neither fired nor been cancelled.
    pub fn pending(&self) -> usize {
        self.tasks.values().filter(|task| !task.is_finished()).count()
    }

    pub fn shutdown(&mut self) {
        for (token, task) in self.tasks.drain() {
            log::debug!("aborting timer {token} on shutdown");
            task.abort();
        }
    }

    fn schedule(&mut self, token: TimerToken, delay: Duration) {
        let fired_tx = self.fired_tx.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Err(err) = fired_tx.send(token) {
                log::debug!("timer {token} fired after the core loop stopped: {err}");
            }
        });
        if let Some(previous) = self.tasks.insert(token, task) {
            previous.abort();
        }
    }

    fn cancel(&mut self, token: TimerToken) {
        if let Some(task) = self.tasks.remove(&token) {
            task.abort();
        }
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::types::TimerKind;

    fn schedule(token: u64, millis: u64) -> Effect {
        Effect::Schedule {
            token: TimerToken(token),
            kind: TimerKind::ScanComplete,
            delay: Duration::from_millis(millis),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn delivers_token_after_delay() {
        let (fired_tx, fired_rx) = flume::unbounded();
        let mut scheduler = Scheduler::new(fired_tx);
        scheduler.apply([schedule(1, 3000)]);

        tokio::time::sleep(Duration::from_millis(2999)).await;
        assert!(fired_rx.is_empty());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(fired_rx.try_recv().ok(), Some(TimerToken(1)));
        scheduler.complete(TimerToken(1));
        assert_eq!(scheduler.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_timer_never_fires() {
        let (fired_tx, fired_rx) = flume::unbounded();
        let mut scheduler = Scheduler::new(fired_tx);
        scheduler.apply([schedule(1, 3000), schedule(2, 5000)]);
        assert_eq!(scheduler.pending(), 2);

        scheduler.apply([Effect::Cancel(TimerToken(1))]);
        assert_eq!(scheduler.pending(), 1);

        tokio::time::sleep(Duration::from_millis(6000)).await;
        let fired: Vec<_> = fired_rx.try_iter().collect();
        assert_eq!(fired, vec![TimerToken(2)]);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_aborts_everything() {
        let (fired_tx, fired_rx) = flume::unbounded();
        let mut scheduler = Scheduler::new(fired_tx);
        scheduler.apply([schedule(1, 100), schedule(2, 200)]);
        scheduler.shutdown();
        assert_eq!(scheduler.pending(), 0);

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(fired_rx.is_empty());
    }
}
