//! The poll loop: sample, track, synchronize, sleep.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::CycleError;
use crate::sampler;
use crate::synchronizer::{PresenceSynchronizer, SyncAction};
use crate::traits::{CoverSource, PresenceChannel, SessionSource};
use crate::tracker::{TrackerState, Transition};

/// What one poll cycle observed and did.
#[derive(Debug)]
pub struct CycleReport {
    pub transition: Transition,
    pub action: SyncAction,
    /// Failure absorbed by the cycle, if any
    pub error: Option<CycleError>,
}

/// Drives sampling and presence updates for a single tracked session.
///
/// Owns the only `TrackerState` in the process. Cycles run strictly one
/// after another; nothing here is shared across tasks.
pub struct Poller<S, C, P> {
    source: S,
    synchronizer: PresenceSynchronizer<C>,
    channel: P,
    state: TrackerState,
}

impl<S, C, P> Poller<S, C, P>
where
    S: SessionSource,
    C: CoverSource,
    P: PresenceChannel,
{
    pub fn new(source: S, covers: C, channel: P) -> Self {
        Self {
            source,
            synchronizer: PresenceSynchronizer::new(covers),
            channel,
            state: TrackerState::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn channel(&self) -> &P {
        &self.channel
    }

    /// Give back the presence channel, e.g. to disconnect it on shutdown.
    pub fn into_channel(self) -> P {
        self.channel
    }

    /// Run one Sampler → Tracker → Synchronizer pass.
    ///
    /// A failed sample leaves the tracker state exactly as it was and takes
    /// no presence action.
    pub async fn run_cycle(&mut self) -> CycleReport {
        let selection = match sampler::sample(&self.source, self.state.update_cursor).await {
            Ok(selection) => selection,
            Err(e) => {
                warn!(error = %e, "Failed to fetch listening sessions, skipping this cycle");
                return CycleReport {
                    transition: Transition::NoData,
                    action: SyncAction::None,
                    error: Some(CycleError::Sample(e)),
                };
            }
        };

        let current = selection.active.clone();
        let transition = self.state.observe(selection);
        debug!(?transition, "Observed listening state");

        let (action, result) = self
            .synchronizer
            .apply(transition, current.as_ref(), &mut self.state, &self.channel)
            .await;

        let error = match result {
            Ok(()) => None,
            Err(e) => {
                warn!(channel = self.channel.name(), error = %e, "Failed to update presence");
                Some(CycleError::Presence(e))
            }
        };

        CycleReport {
            transition,
            action,
            error,
        }
    }

    /// Poll forever. The first cycle runs immediately.
    pub async fn run(&mut self, interval: Duration) {
        self.run_until(interval, std::future::pending::<()>()).await;
    }

    /// Poll until `shutdown` resolves.
    ///
    /// Each cycle runs to completion; the next one starts `interval` after
    /// the previous one finished, so cycles never overlap and a slow cycle
    /// pushes the schedule back. `shutdown` is only observed between cycles.
    pub async fn run_until<F>(&mut self, interval: Duration, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            self.run_cycle().await;

            tokio::select! {
                () = &mut shutdown => {
                    debug!("Poll loop stopping");
                    break;
                }
                () = tokio::time::sleep(interval) => {}
            }
        }
    }
}
