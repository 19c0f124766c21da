//! In-memory conversation store keyed by user id.
//!
//! Concurrency model: every operation takes the store lock for its own
//! duration, so individual appends and clears are atomic and cross-user
//! isolation always holds. Two concurrent messages from the *same* user may
//! interleave between their user-turn and model-turn appends
//! (last-writer-wins); that is an accepted limitation for a low-traffic bot
//! rather than a per-user lock.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::Turn;

/// Default retention cap: at most this many turns are kept per user.
pub const DEFAULT_HISTORY_CAP: usize = 10;

type HistoryMap = HashMap<i64, Vec<Turn>>;

/// Per-user bounded conversation history. Entries are created lazily on
/// first append, live for the process lifetime, and are truncated
/// oldest-first when they exceed the cap.
#[derive(Debug, Clone)]
pub struct ConversationStore {
    cap: usize,
    entries: Arc<RwLock<HistoryMap>>,
}

impl ConversationStore {
    /// Creates a store retaining at most `cap` turns per user.
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            entries: Arc::new(RwLock::new(HistoryMap::new())),
        }
    }

    /// The retention cap this store was built with.
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Snapshot of the user's turns in chronological order; empty if the
    /// user has never messaged.
    pub async fn history(&self, user_id: i64) -> Vec<Turn> {
        let entries = self.entries.read().await;
        entries.get(&user_id).cloned().unwrap_or_default()
    }

    /// Number of retained turns for the user.
    pub async fn len(&self, user_id: i64) -> usize {
        let entries = self.entries.read().await;
        entries.get(&user_id).map(Vec::len).unwrap_or(0)
    }

    /// Appends one turn to the user's conversation. When the sequence
    /// exceeds the cap, the oldest turns are dropped (sliding window, not an
    /// error).
    pub async fn append(&self, user_id: i64, turn: Turn) {
        let mut entries = self.entries.write().await;
        let conversation = entries.entry(user_id).or_default();
        conversation.push(turn);
        if conversation.len() > self.cap {
            let excess = conversation.len() - self.cap;
            conversation.drain(..excess);
            debug!(user_id, dropped = excess, "History truncated to cap");
        }
        info!(
            user_id,
            len = conversation.len(),
            "Turn appended to conversation"
        );
    }

    /// Replaces the user's conversation with an empty one. Idempotent; a
    /// never-seen user is a no-op that still leaves an empty entry.
    pub async fn clear(&self, user_id: i64) {
        let mut entries = self.entries.write().await;
        entries.insert(user_id, Vec::new());
        info!(user_id, "Conversation cleared");
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAP)
    }
}
