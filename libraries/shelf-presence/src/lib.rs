//! Shelf Presence
//!
//! Mirrors the "currently listening" state of an Audiobookshelf server into
//! a desktop presence channel. The server is the only source of truth; this
//! crate only observes it.
//!
//! # Architecture
//!
//! One poll cycle runs these steps in order:
//! - **Sampler**: fetch recent sessions and select the active one
//! - **Tracker**: compare with the previous sample (`Started`, `Continuing`,
//!   `Paused`, `Stopped`, ...)
//! - **Synchronizer**: set or clear presence, resolving cover art on the way
//!
//! [`Poller`] repeats the cycle on a fixed interval.
//!
//! # Example
//!
//! ```ignore
//! use shelf_client::{ClientConfig, ShelfClient};
//! use shelf_presence::Poller;
//! use std::time::Duration;
//!
//! let client = ShelfClient::new(ClientConfig::new("https://abs.example.com", "token"))?;
//! let mut poller = Poller::new(client.clone(), client, my_channel);
//! poller.run(Duration::from_secs(15)).await;
//! ```

pub mod cover;
pub mod error;
pub mod format;
pub mod poller;
pub mod sampler;
pub mod synchronizer;
pub mod tracker;
pub mod traits;
pub mod types;

pub use cover::CoverResolver;
pub use error::{CycleError, PresenceError, Result};
pub use format::{format_duration, progress_line};
pub use poller::{CycleReport, Poller};
pub use sampler::{select_active, Selection};
pub use synchronizer::{PresenceSynchronizer, SyncAction};
pub use tracker::{TrackerState, Transition};
pub use traits::{CoverSource, PresenceChannel, SessionSource};
pub use types::{PresencePayload, SessionSnapshot};
