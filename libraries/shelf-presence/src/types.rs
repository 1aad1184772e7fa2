//! Core types for session tracking

use serde::{Deserialize, Serialize};
use shelf_client::ListeningSession;

use crate::format::progress_line;

/// Normalized view of one listening session, recreated on every poll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Display title of the audiobook
    pub book_title: String,

    /// Display author of the audiobook
    pub author: String,

    /// Playback position at sample time, in seconds
    pub elapsed_seconds: f64,

    /// Full duration of the item, in seconds
    pub total_seconds: f64,

    /// Server-reported session start (epoch milliseconds)
    pub started_at: i64,

    /// Server-reported last update (epoch milliseconds)
    pub updated_at: i64,
}

impl SessionSnapshot {
    /// Identity used to decide whether two samples refer to the same book.
    pub fn book_key(&self) -> (&str, &str) {
        (&self.book_title, &self.author)
    }

    pub fn is_same_book(&self, other: &SessionSnapshot) -> bool {
        self.book_key() == other.book_key()
    }

    /// Seconds left until the end of the item, never negative.
    pub fn remaining_seconds(&self) -> f64 {
        (self.total_seconds - self.elapsed_seconds).max(0.0)
    }
}

impl From<&ListeningSession> for SessionSnapshot {
    fn from(session: &ListeningSession) -> Self {
        Self {
            book_title: session.display_title.clone(),
            author: session.display_author.clone(),
            elapsed_seconds: session.current_time,
            total_seconds: session.duration,
            started_at: session.started_at,
            updated_at: session.updated_at,
        }
    }
}

/// Everything the companion application needs to render "listening to" status.
///
/// Only built for an active session; a vanished session is always answered
/// with a clear instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresencePayload {
    /// First line, e.g. "Listening to Dune"
    pub details: String,

    /// Second line, "elapsed / total"
    pub state: String,

    /// Cover reference; `None` when the cover lookup failed
    pub image_key: Option<String>,

    /// Hover text for the cover
    pub image_text: String,

    /// Instanced-activity flag, always off
    pub instance: bool,

    /// Wall-clock start of the item (epoch seconds), for progress rendering
    pub started_at: i64,

    /// Wall-clock end of the item (epoch seconds)
    pub ends_at: i64,
}

impl PresencePayload {
    /// Build the payload for a snapshot at wall-clock time `now` (epoch seconds).
    pub fn for_snapshot(snapshot: &SessionSnapshot, image_key: Option<String>, now: i64) -> Self {
        let elapsed = snapshot.elapsed_seconds.max(0.0) as i64;
        let remaining = snapshot.remaining_seconds() as i64;

        Self {
            details: format!("Listening to {}", snapshot.book_title),
            state: progress_line(snapshot.elapsed_seconds, snapshot.total_seconds),
            image_key,
            image_text: snapshot.book_title.clone(),
            instance: false,
            started_at: now.saturating_sub(elapsed),
            ends_at: now.saturating_add(remaining),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune(elapsed: f64) -> SessionSnapshot {
        SessionSnapshot {
            book_title: "Dune".into(),
            author: "Herbert".into(),
            elapsed_seconds: elapsed,
            total_seconds: 1000.0,
            started_at: 0,
            updated_at: 1_000,
        }
    }

    #[test]
    fn test_payload_lines() {
        let payload = PresencePayload::for_snapshot(&dune(100.0), None, 10_000);

        assert_eq!(payload.details, "Listening to Dune");
        assert_eq!(payload.state, "00:01:40 / 00:16:40");
        assert_eq!(payload.image_text, "Dune");
        assert!(payload.image_key.is_none());
        assert!(!payload.instance);
    }

    #[test]
    fn test_payload_timestamps() {
        let payload =
            PresencePayload::for_snapshot(&dune(100.0), Some("cover".into()), 10_000);

        assert_eq!(payload.started_at, 9_900);
        assert_eq!(payload.ends_at, 10_900);
        assert_eq!(payload.image_key.as_deref(), Some("cover"));
    }

    #[test]
    fn test_position_past_end_has_no_remaining_time() {
        let mut snapshot = dune(1200.0);
        snapshot.total_seconds = 1000.0;

        assert_eq!(snapshot.remaining_seconds(), 0.0);
        let payload = PresencePayload::for_snapshot(&snapshot, None, 5_000);
        assert_eq!(payload.ends_at, 5_000);
    }

    #[test]
    fn test_book_identity_includes_author() {
        let a = dune(1.0);
        let mut b = dune(2.0);
        assert!(a.is_same_book(&b));

        b.author = "Brian Herbert".into();
        assert!(!a.is_same_book(&b));
    }
}
