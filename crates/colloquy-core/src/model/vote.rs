//! Vote data model

use crate::types::{CommentId, VoteId};
use serde::{Deserialize, Serialize};

/// A signed vote on a comment
///
/// Votes are immutable once persisted; changing a vote means deleting and
/// recasting it in the embedding application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    /// Unique vote identifier
    pub id: VoteId,
    /// Comment the vote applies to
    pub comment_id: CommentId,
    /// Vote value, +1 or -1
    pub value: i8,
}

impl Vote {
    /// Create a new vote on the given comment
    pub fn new(comment_id: CommentId, value: i8) -> Self {
        Self {
            id: VoteId::new(),
            comment_id,
            value,
        }
    }

    /// Whether this is an upvote
    pub fn is_up(&self) -> bool {
        self.value > 0
    }
}
