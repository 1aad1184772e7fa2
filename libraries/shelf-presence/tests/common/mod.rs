/// Common test fakes for the poll loop
use async_trait::async_trait;
use shelf_client::{ListeningSession, ShelfClientError};
use shelf_presence::{CoverSource, PresenceChannel, PresenceError, PresencePayload, SessionSource};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Build a wire session.
pub fn session(
    title: &str,
    author: &str,
    elapsed: f64,
    total: f64,
    started_at: i64,
    updated_at: i64,
) -> ListeningSession {
    ListeningSession {
        id: format!("ls_{}", title.to_lowercase()),
        library_item_id: Some(format!("li_{}", title.to_lowercase())),
        display_title: title.to_string(),
        display_author: author.to_string(),
        current_time: elapsed,
        duration: total,
        started_at,
        updated_at,
    }
}

/// Session source that replays a script, then reports no sessions.
#[derive(Default)]
pub struct ScriptedSource {
    script: Mutex<VecDeque<Result<Vec<ListeningSession>, ShelfClientError>>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then_sessions(self, sessions: Vec<ListeningSession>) -> Self {
        self.script.lock().unwrap().push_back(Ok(sessions));
        self
    }

    pub fn then_error(self, error: ShelfClientError) -> Self {
        self.script.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionSource for ScriptedSource {
    async fn listening_sessions(&self) -> shelf_client::Result<Vec<ListeningSession>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Cover source that always answers the same way.
pub struct FixedCovers {
    pub cover: Option<String>,
}

impl FixedCovers {
    pub fn found(cover: &str) -> Self {
        Self {
            cover: Some(cover.to_string()),
        }
    }

    pub fn failing() -> Self {
        Self { cover: None }
    }
}

#[async_trait]
impl CoverSource for FixedCovers {
    async fn search_cover(&self, title: &str, _author: &str) -> shelf_client::Result<String> {
        self.cover
            .clone()
            .ok_or_else(|| ShelfClientError::NoCoverFound {
                title: title.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChannelCall {
    Set(PresencePayload),
    Clear,
}

/// Presence channel that records every call.
#[derive(Default)]
pub struct RecordingChannel {
    calls: Mutex<Vec<ChannelCall>>,
    pub fail: bool,
}

impl RecordingChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            calls: Mutex::default(),
            fail: true,
        }
    }

    pub fn calls(&self) -> Vec<ChannelCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, ChannelCall::Clear))
            .count()
    }

    fn outcome(&self) -> shelf_presence::Result<()> {
        if self.fail {
            Err(PresenceError::Channel("pipe closed".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PresenceChannel for RecordingChannel {
    fn name(&self) -> &'static str {
        "Recording"
    }

    async fn set_presence(&self, payload: &PresencePayload) -> shelf_presence::Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(ChannelCall::Set(payload.clone()));
        self.outcome()
    }

    async fn clear_presence(&self) -> shelf_presence::Result<()> {
        self.calls.lock().unwrap().push(ChannelCall::Clear);
        self.outcome()
    }
}
