//! Per-session query cache for post listings
//!
//! Cached pages are keyed by the listing query they came from. The cache
//! supports whole-state snapshots for optimistic rollback, and generation
//! counters so a stale background refetch can never overwrite a newer
//! optimistic patch.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{Post, PostPage, Stamp};

/// One cached listing page
#[derive(Debug, Clone, PartialEq)]
struct CacheEntry {
    posts: Vec<Post>,
    next_cursor: Option<String>,
    generation: u64,
}

/// Opaque snapshot of the full cache state
#[derive(Debug, Clone)]
pub struct CacheSnapshot {
    entries: HashMap<String, CacheEntry>,
}

/// Token identifying an in-flight refetch of one cache key
///
/// The refetch result only lands if the entry's generation is unchanged;
/// any intervening optimistic patch bumps the generation and thereby
/// cancels the refetch.
#[derive(Debug, Clone)]
pub struct RefetchToken {
    key: String,
    generation: u64,
}

/// Query cache holding post listing pages for one client session
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: HashMap<String, CacheEntry>,
}

impl QueryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a freshly fetched page under its query key
    pub fn store(&mut self, key: &str, page: &PostPage) {
        let generation = self.entries.get(key).map_or(0, |e| e.generation);
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                posts: page.posts.clone(),
                next_cursor: page.next_cursor.clone(),
                generation,
            },
        );
    }

    /// Cached posts for a query key
    #[must_use]
    pub fn posts(&self, key: &str) -> Option<&[Post]> {
        self.entries.get(key).map(|e| e.posts.as_slice())
    }

    /// Cached next cursor for a query key
    #[must_use]
    pub fn next_cursor(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(|e| e.next_cursor.as_deref())
    }

    /// Begin a background refetch of one key
    #[must_use]
    pub fn begin_refetch(&self, key: &str) -> RefetchToken {
        RefetchToken {
            key: key.to_string(),
            generation: self.entries.get(key).map_or(0, |e| e.generation),
        }
    }

    /// Land a refetch result, unless the entry changed generation in the
    /// meantime. Returns whether the page was applied.
    pub fn complete_refetch(&mut self, token: &RefetchToken, page: &PostPage) -> bool {
        let current = self.entries.get(&token.key).map_or(0, |e| e.generation);
        if current != token.generation {
            debug!(key = %token.key, "Discarding stale refetch result");
            return false;
        }
        self.store(&token.key, page);
        true
    }

    /// Cancel all in-flight refetches by bumping every entry's generation
    pub fn abort_refetches(&mut self) {
        for entry in self.entries.values_mut() {
            entry.generation += 1;
        }
    }

    /// Deep-copy the current cache state
    #[must_use]
    pub fn snapshot(&self) -> CacheSnapshot {
        CacheSnapshot {
            entries: self.entries.clone(),
        }
    }

    /// Restore a previously taken snapshot verbatim
    pub fn restore(&mut self, snapshot: CacheSnapshot) {
        self.entries = snapshot.entries;
    }

    /// Flip the session's own stamp of `kind` on the post, in every cached
    /// page that contains it. Returns whether any page was touched.
    pub fn apply_stamp_toggle(&mut self, post_id: &str, kind: &str, native: &str) -> bool {
        let mut touched = false;
        for entry in self.entries.values_mut() {
            for post in entry.posts.iter_mut().filter(|p| p.id == post_id) {
                // Match on (kind, own identity); someone else's identical
                // stamp must never be removed
                if let Some(pos) = post.stamps.iter().position(|s| s.kind == kind && s.mine) {
                    post.stamps.remove(pos);
                } else {
                    post.stamps.push(Stamp {
                        id: format!("pending-{kind}"),
                        kind: kind.to_string(),
                        native: native.to_string(),
                        mine: true,
                    });
                }
                touched = true;
            }
        }
        touched
    }

    /// Replace the post's stamp list with the server's returned state
    pub fn reconcile_stamps(&mut self, post_id: &str, stamps: &[Stamp]) {
        for entry in self.entries.values_mut() {
            for post in entry.posts.iter_mut().filter(|p| p.id == post_id) {
                post.stamps = stamps.to_vec();
            }
        }
    }

    /// Drop all cached pages
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
