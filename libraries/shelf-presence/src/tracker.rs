//! Listening-state tracking across polls

use serde::{Deserialize, Serialize};

use crate::sampler::Selection;
use crate::types::SessionSnapshot;

/// What changed between two consecutive samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// A session appeared, switched book, or restarted from an earlier position
    Started,

    /// Same book, position moved forward
    Continuing,

    /// Same book, position frozen since the last sample
    Paused,

    /// The active session disappeared
    Stopped,

    /// Nothing new to report (still paused, or still no session)
    Idle,

    /// The sample failed; state was left untouched
    NoData,
}

/// Process-lifetime tracking state, owned by the poll loop.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackerState {
    /// Most recent active session seen
    pub last_snapshot: Option<SessionSnapshot>,

    /// Whether the last presence action was a clear
    pub is_presence_cleared: bool,

    /// Whether `Paused` has already been reported for the frozen position
    pub is_paused: bool,

    /// Rolling `updated_at` cursor used for active-session selection
    pub update_cursor: Option<i64>,
}

impl TrackerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify the current sample against the last one without mutating state.
    pub fn classify(&self, current: Option<&SessionSnapshot>) -> Transition {
        let (previous, current) = match (&self.last_snapshot, current) {
            (Some(_), None) => return Transition::Stopped,
            (None, None) => return Transition::Idle,
            (None, Some(_)) => return Transition::Started,
            (Some(previous), Some(current)) => (previous, current),
        };

        if !previous.is_same_book(current) {
            return Transition::Started;
        }

        let delta = current.elapsed_seconds - previous.elapsed_seconds;
        if delta.abs() < f64::EPSILON {
            if self.is_paused {
                Transition::Idle
            } else {
                Transition::Paused
            }
        } else if delta < 0.0 {
            // Position went backwards: a new listen of the same book
            Transition::Started
        } else {
            Transition::Continuing
        }
    }

    /// Record a successful sample and return the transition it implies.
    pub fn observe(&mut self, selection: Selection) -> Transition {
        let transition = self.classify(selection.active.as_ref());

        self.is_paused = match transition {
            Transition::Paused => true,
            Transition::Idle => self.is_paused && selection.active.is_some(),
            _ => false,
        };
        self.last_snapshot = selection.active;
        self.update_cursor = selection.cursor;

        transition
    }
}
