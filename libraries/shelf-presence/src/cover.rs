//! Best-effort cover art resolution

use tracing::{debug, warn};

use crate::traits::CoverSource;

/// Resolves cover references, remembering the last successful lookup.
///
/// A failed lookup never aborts a presence update; it yields `None` and the
/// update goes out without art.
pub struct CoverResolver<C> {
    source: C,
    last: Option<CachedCover>,
}

struct CachedCover {
    title: String,
    author: String,
    cover: String,
}

impl<C: CoverSource> CoverResolver<C> {
    pub fn new(source: C) -> Self {
        Self { source, last: None }
    }

    /// Look up the cover for a book, reusing the previous result for the same book.
    pub async fn resolve(&mut self, title: &str, author: &str) -> Option<String> {
        if let Some(cached) = &self.last {
            if cached.title == title && cached.author == author {
                debug!(title = %title, "Using cached cover");
                return Some(cached.cover.clone());
            }
        }

        match self.source.search_cover(title, author).await {
            Ok(cover) => {
                self.last = Some(CachedCover {
                    title: title.to_string(),
                    author: author.to_string(),
                    cover: cover.clone(),
                });
                Some(cover)
            }
            Err(e) => {
                warn!(title = %title, author = %author, error = %e, "Cover lookup failed, continuing without art");
                None
            }
        }
    }
}
