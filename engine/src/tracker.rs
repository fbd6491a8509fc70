//! The periodic update process.
//!
//! A `Tracker` owns one tokio task, which in turn owns the `TrackerView`.  The task wakes up
//! on every period to apply `tick()` and otherwise waits for commands from the handle.  Both
//! are handled one at a time in the same loop so a toggle never interleaves with an update.
//!
//! Every change is published through a `watch` channel, see `subscribe()`.
//!
//! The timer lives as long as the task: `stop()` ends it and hands back the final state,
//! dropping the `Tracker` aborts it.  Either way nothing touches the view afterwards.
//!

use std::time::Duration;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, trace, warn};

use crate::{AlertMode, Clock, Jitter, TrackerStatus, TrackerView};

/// Pending commands, more than enough for one operator.
const COMMAND_QUEUE: usize = 16;

/// Messages sent from the handle to the task.
#[derive(Debug)]
pub enum TrackerMsg {
    /// Flip alert mode, reply with the new one.
    Toggle(oneshot::Sender<AlertMode>),
    /// Current state.
    Snapshot(oneshot::Sender<TrackerView>),
    /// Leave the loop.
    Stop,
}

/// Handle on a running view.
///
#[derive(Debug)]
pub struct Tracker {
    tx: mpsc::Sender<TrackerMsg>,
    state: watch::Receiver<TrackerView>,
    handle: Option<JoinHandle<TrackerView>>,
}

impl Tracker {
    /// Start the periodic process for `view`, first update one `period` from now.
    ///
    /// Must be called from within a tokio runtime.
    ///
    #[tracing::instrument(skip(jitter, clock))]
    pub fn spawn<J, C>(
        view: TrackerView,
        period: Duration,
        jitter: J,
        clock: C,
    ) -> Result<Self, TrackerStatus>
    where
        J: Jitter + Send + 'static,
        C: Clock + Send + 'static,
    {
        if period.is_zero() {
            return Err(TrackerStatus::ZeroInterval(period));
        }

        let (tx, rx) = mpsc::channel(COMMAND_QUEUE);
        let (state_tx, state) = watch::channel(view);

        let start = Instant::now() + period;
        let bound = jitter.bound();
        let handle = tokio::spawn(run(view, start, period, jitter, clock, rx, state_tx));
        info!("tracker started, every {period:?}, jitter ±{bound}");

        Ok(Tracker {
            tx,
            state,
            handle: Some(handle),
        })
    }

    /// Get notified of every change.
    ///
    pub fn subscribe(&self) -> watch::Receiver<TrackerView> {
        self.state.clone()
    }

    /// Last published state, without a round-trip to the task.
    ///
    pub fn current(&self) -> TrackerView {
        *self.state.borrow()
    }

    #[tracing::instrument(skip(self))]
    pub async fn toggle(&self) -> Result<AlertMode, TrackerStatus> {
        let (tx, rx) = oneshot::channel();
        self.tx
            .send(TrackerMsg::Toggle(tx))
            .await
            .map_err(|_| TrackerStatus::Stopped)?;
        rx.await.map_err(|_| TrackerStatus::Stopped)
    }

    #[tracing::instrument(skip(self))]
    pub async fn snapshot(&self) -> Result<TrackerView, TrackerStatus> {
        let (tx, rx) = oneshot::channel();
        self.tx
            .send(TrackerMsg::Snapshot(tx))
            .await
            .map_err(|_| TrackerStatus::Stopped)?;
        rx.await.map_err(|_| TrackerStatus::Stopped)
    }

    /// Release the timer and return the final state.
    ///
    #[tracing::instrument(skip(self))]
    pub async fn stop(mut self) -> Result<TrackerView, TrackerStatus> {
        let handle = self.handle.take().ok_or(TrackerStatus::Stopped)?;

        // The task may already be gone, the join below tells.
        //
        let _ = self.tx.send(TrackerMsg::Stop).await;
        let view = handle
            .await
            .map_err(|e| TrackerStatus::Join(e.to_string()))?;
        info!("tracker stopped after {} updates", view.updates);
        Ok(view)
    }
}

impl Drop for Tracker {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            warn!("tracker dropped while running, aborting");
            handle.abort();
        }
    }
}

/// Task body.
///
async fn run<J, C>(
    mut view: TrackerView,
    start: Instant,
    period: Duration,
    mut jitter: J,
    mut clock: C,
    mut rx: mpsc::Receiver<TrackerMsg>,
    state: watch::Sender<TrackerView>,
) -> TrackerView
where
    J: Jitter,
    C: Clock,
{
    let mut timer = interval_at(start, period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;

            _ = timer.tick() => {
                let loc = view.tick(&mut jitter, clock.now());
                trace!("tick #{}: {loc}", view.updates);
                state.send_replace(view);
            }
            msg = rx.recv() => {
                match msg {
                    Some(TrackerMsg::Toggle(reply)) => {
                        let mode = view.toggle_alert();
                        debug!("alert mode now {mode}");
                        state.send_replace(view);
                        let _ = reply.send(mode);
                    }
                    Some(TrackerMsg::Snapshot(reply)) => {
                        let _ = reply.send(view);
                    }
                    Some(TrackerMsg::Stop) | None => break,
                }
            }
        }
    }
    view
}
