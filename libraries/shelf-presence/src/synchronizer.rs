//! Applies tracker transitions to a presence channel

use tracing::{debug, info};

use crate::cover::CoverResolver;
use crate::error::Result;
use crate::traits::{CoverSource, PresenceChannel};
use crate::tracker::{TrackerState, Transition};
use crate::types::{PresencePayload, SessionSnapshot};

/// The single presence action taken for a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncAction {
    /// Nothing was sent
    None,
    /// Presence was replaced with this payload
    Set(PresencePayload),
    /// Presence was cleared
    Clear,
}

/// Turns transitions into set/clear calls on a presence channel.
pub struct PresenceSynchronizer<C> {
    covers: CoverResolver<C>,
}

impl<C: CoverSource> PresenceSynchronizer<C> {
    pub fn new(covers: C) -> Self {
        Self {
            covers: CoverResolver::new(covers),
        }
    }

    /// Decide the action for `transition` and push it to `channel`.
    ///
    /// `state.is_presence_cleared` is updated before the channel is called,
    /// so a failed clear is not retried on the next cycle. The action is
    /// returned alongside the channel outcome.
    pub async fn apply<P>(
        &mut self,
        transition: Transition,
        snapshot: Option<&SessionSnapshot>,
        state: &mut TrackerState,
        channel: &P,
    ) -> (SyncAction, Result<()>)
    where
        P: PresenceChannel + ?Sized,
    {
        match (transition, snapshot) {
            (Transition::Started | Transition::Continuing, Some(snapshot)) => {
                let cover = self
                    .covers
                    .resolve(&snapshot.book_title, &snapshot.author)
                    .await;
                let payload =
                    PresencePayload::for_snapshot(snapshot, cover, chrono::Utc::now().timestamp());

                if transition == Transition::Started {
                    info!(
                        channel = channel.name(),
                        title = %snapshot.book_title,
                        author = %snapshot.author,
                        "Listening started"
                    );
                } else {
                    debug!(channel = channel.name(), state = %payload.state, "Listening continues");
                }

                state.is_presence_cleared = false;
                let result = channel.set_presence(&payload).await;
                (SyncAction::Set(payload), result)
            }
            (Transition::Paused | Transition::Stopped, _) => {
                if state.is_presence_cleared {
                    debug!(?transition, "Presence already cleared");
                    return (SyncAction::None, Ok(()));
                }

                info!(channel = channel.name(), ?transition, "Clearing presence");
                state.is_presence_cleared = true;
                let result = channel.clear_presence().await;
                (SyncAction::Clear, result)
            }
            _ => (SyncAction::None, Ok(())),
        }
    }
}
