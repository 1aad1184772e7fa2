//! Active-session selection
//!
//! The server's "recent sessions" list keeps finished sessions around, so a
//! session is only surfaced when it passes the rolling-cursor test in
//! [`is_active`].

use shelf_client::ListeningSession;
use tracing::debug;

use crate::traits::SessionSource;
use crate::types::SessionSnapshot;

/// Result of one successful sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// The session considered active, if any
    pub active: Option<SessionSnapshot>,

    /// Cursor to use for the next poll
    pub cursor: Option<i64>,
}

/// A session is active when the time since it started exceeds the gap
/// between its last update and the cursor recorded before this poll.
///
/// Without a cursor (first poll) every session qualifies.
pub fn is_active(session: &ListeningSession, cursor: Option<i64>) -> bool {
    match cursor {
        None => true,
        Some(cursor) => {
            let since_start = session.updated_at.saturating_sub(session.started_at);
            let since_cursor = session.updated_at.saturating_sub(cursor);
            since_start > since_cursor
        }
    }
}

/// Pick the first qualifying session in server order and advance the cursor.
///
/// The cursor moves to the newest `updated_at` on the page whether or not a
/// session qualified; an empty page leaves it where it was.
pub fn select_active(sessions: &[ListeningSession], cursor: Option<i64>) -> Selection {
    let active = sessions
        .iter()
        .find(|s| is_active(s, cursor))
        .map(SessionSnapshot::from);

    let next_cursor = sessions.iter().map(|s| s.updated_at).max().or(cursor);

    Selection {
        active,
        cursor: next_cursor,
    }
}

/// Issue one request to the source and select the active session.
pub async fn sample<S>(source: &S, cursor: Option<i64>) -> shelf_client::Result<Selection>
where
    S: SessionSource + ?Sized,
{
    let sessions = source.listening_sessions().await?;
    let selection = select_active(&sessions, cursor);

    debug!(
        sessions = sessions.len(),
        active = selection.active.is_some(),
        cursor = ?selection.cursor,
        "Sampled listening sessions"
    );

    Ok(selection)
}
