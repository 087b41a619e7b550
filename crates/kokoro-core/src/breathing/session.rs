use crate::breathing::BreathingTimer;
use crate::breathing::error::SessionError;
use kokoro_model::exercise::breathing::{BreathingVariant, TimerSnapshot};
use std::time::Duration;
use tokio::sync::{oneshot, watch};
use tokio::task::{self, JoinHandle};
use tokio::time::{self, Instant};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A running breathing exercise.
///
/// A background task applies exactly one [`BreathingTimer::tick`] per period and publishes the
/// resulting [`TimerSnapshot`]. Rendering happens elsewhere, through [`BreathingSession::subscribe`].
/// Dropping the handle ends the task.
#[derive(Debug)]
pub struct BreathingSession {
    snapshots: watch::Receiver<TimerSnapshot>,
    stop: oneshot::Sender<()>,
    task: JoinHandle<BreathingTimer>,
}

impl BreathingSession {
    #[must_use]
    pub fn spawn(variant: BreathingVariant, period: Duration) -> Self {
        let mut timer = BreathingTimer::new(variant);
        timer.start();
        let (sender, snapshots) = watch::channel(timer.snapshot());
        let (stop, stop_receiver) = oneshot::channel();
        tracing::debug!(%variant, ?period, "starting breathing session");
        let task = task::spawn(drive(timer, period, sender, stop_receiver));
        Self { snapshots, stop, task }
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<TimerSnapshot> {
        self.snapshots.clone()
    }

    #[must_use]
    pub fn snapshot(&self) -> TimerSnapshot {
        *self.snapshots.borrow()
    }

    /// Ends the session and returns the final, idle snapshot.
    pub async fn stop(self) -> Result<TimerSnapshot, SessionError> {
        // The task may already be gone, joining reports that
        let _ = self.stop.send(());
        let timer = self.task.await?;
        Ok(timer.snapshot())
    }
}

async fn drive(
    mut timer: BreathingTimer,
    period: Duration,
    sender: watch::Sender<TimerSnapshot>,
    mut stop: oneshot::Receiver<()>,
) -> BreathingTimer {
    let mut interval = time::interval_at(Instant::now() + period, period);
    loop {
        tokio::select! {
            biased;
            _ = &mut stop => break,
            _ = interval.tick() => {
                timer.tick();
                tracing::trace!(
                    variant = %timer.variant(),
                    elapsed = timer.elapsed_in_cycle(),
                    phase = %timer.current_phase(),
                    "breathing tick"
                );
                sender.send_replace(timer.snapshot());
            }
        }
    }
    timer.stop();
    sender.send_replace(timer.snapshot());
    tracing::debug!(variant = %timer.variant(), ticks = timer.ticks(), "breathing session stopped");
    timer
}

#[cfg(test)]
mod tests {
    use super::*;
    use kokoro_model::exercise::breathing::BreathPhase;
    use test_log::test;

    #[test(tokio::test(start_paused = true))]
    async fn test_session_ticks_once_per_period() {
        let session = BreathingSession::spawn(BreathingVariant::Box, TICK_PERIOD);
        assert_eq!(session.snapshot().elapsed_in_cycle, 1);

        time::sleep(Duration::from_millis(4_500)).await;
        let snapshot = session.snapshot();
        assert!(snapshot.active);
        assert_eq!(snapshot.ticks, 4);
        assert_eq!(snapshot.elapsed_in_cycle, 5);
        assert_eq!(snapshot.phase, BreathPhase::Hold);

        let stopped = session.stop().await.unwrap();
        assert!(!stopped.active);
        assert_eq!(stopped.elapsed_in_cycle, 0);
        assert_eq!(stopped.phase, BreathPhase::Inhale);
        assert_eq!(stopped.ticks, 4);
    }

    #[test(tokio::test(start_paused = true))]
    async fn test_session_wraps_cycle() {
        let session = BreathingSession::spawn(BreathingVariant::Panic, TICK_PERIOD);
        let mut snapshots = session.subscribe();

        let mut seen = Vec::new();
        while seen.len() < 7 {
            snapshots.changed().await.unwrap();
            let snapshot = *snapshots.borrow_and_update();
            seen.push((snapshot.elapsed_in_cycle, snapshot.phase));
        }
        assert_eq!(
            seen,
            vec![
                (2, BreathPhase::Inhale),
                (3, BreathPhase::Inhale),
                (4, BreathPhase::Exhale),
                (5, BreathPhase::Exhale),
                (6, BreathPhase::Exhale),
                (1, BreathPhase::Inhale),
                (2, BreathPhase::Inhale),
            ]
        );
        assert_eq!(session.snapshot().cycles_completed, 1);
        session.stop().await.unwrap();
    }

    #[test(tokio::test(start_paused = true))]
    async fn test_dropped_session_stops_publishing() {
        let session = BreathingSession::spawn(BreathingVariant::Stress, TICK_PERIOD);
        let mut snapshots = session.subscribe();
        drop(session);

        // The task observes the closed stop channel and publishes its idle state
        while snapshots.borrow_and_update().active {
            if snapshots.changed().await.is_err() {
                break;
            }
        }
        assert!(!snapshots.borrow().active);
    }
}
