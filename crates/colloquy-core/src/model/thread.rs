//! Thread data model

use crate::types::ThreadId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A container for a tree of comments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thread {
    /// Opaque thread key
    pub id: ThreadId,
    /// URL of the page the thread is attached to
    #[serde(default)]
    pub permalink: Option<String>,
    /// Denormalised count of comments in the thread
    #[serde(default)]
    pub num_comments: u64,
    /// When the last comment was added
    #[serde(default)]
    pub last_comment_at: Option<DateTime<Utc>>,
    /// Whether new comments are accepted
    pub is_commentable: bool,
    /// When the thread was created
    pub created_at: DateTime<Utc>,
}

impl Thread {
    /// Create a new commentable thread with the given key
    pub fn new(id: ThreadId) -> Self {
        Self {
            id,
            permalink: None,
            num_comments: 0,
            last_comment_at: None,
            is_commentable: true,
            created_at: Utc::now(),
        }
    }

    /// Set the permalink
    pub fn set_permalink(&mut self, permalink: impl Into<String>) {
        self.permalink = Some(permalink.into());
    }

    /// Open or close the thread for new comments
    pub fn set_commentable(&mut self, commentable: bool) {
        self.is_commentable = commentable;
    }

    /// Record that a comment was added at the given time
    pub fn record_comment(&mut self, at: DateTime<Utc>) {
        self.num_comments += 1;
        self.last_comment_at = Some(at);
    }
}
