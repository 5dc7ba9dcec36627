//! Comment data model

use crate::error::{ColloquyError, Result};
use crate::types::{CommentId, ThreadId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment belonging to a thread
///
/// Comments form a tree: each comment optionally points at a parent comment
/// in the same thread, and `depth` records how far below the roots it sits
/// (0 for top-level comments).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment identifier
    pub id: CommentId,
    /// Thread this comment belongs to
    pub thread_id: ThreadId,
    /// Parent comment, if this is a reply
    #[serde(default)]
    pub parent: Option<CommentId>,
    /// Nesting depth (0 = top-level)
    #[serde(default)]
    pub depth: u32,
    /// Comment body
    pub body: String,
    /// Author name, if known
    #[serde(default)]
    pub author: Option<String>,
    /// When the comment was created
    pub created_at: DateTime<Utc>,
    /// Moderation state
    #[serde(default)]
    pub state: CommentState,
    /// Aggregate vote score
    #[serde(default)]
    pub score: i64,
}

impl Comment {
    /// Create a new top-level comment in the given thread
    pub fn new(thread_id: ThreadId) -> Self {
        Self {
            id: CommentId::new(),
            thread_id,
            parent: None,
            depth: 0,
            body: String::new(),
            author: None,
            created_at: Utc::now(),
            state: CommentState::default(),
            score: 0,
        }
    }

    /// Attach this comment below a parent comment
    ///
    /// The parent must belong to the same thread. Sets `depth` to one level
    /// below the parent.
    pub fn set_parent(&mut self, parent: &Comment) -> Result<()> {
        if parent.thread_id != self.thread_id {
            return Err(ColloquyError::Validation(format!(
                "Parent comment {} belongs to thread {}, not {}",
                parent.id, parent.thread_id, self.thread_id
            )));
        }

        self.parent = Some(parent.id.clone());
        self.depth = parent.depth + 1;
        Ok(())
    }

    /// Set the comment body
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    /// Set the author name
    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = Some(author.into());
    }

    /// Change the moderation state
    pub fn set_state(&mut self, state: CommentState) {
        self.state = state;
    }

    /// Apply a vote value to the aggregate score
    pub fn apply_vote(&mut self, value: i8) {
        self.score += i64::from(value);
    }
}

/// Moderation state of a comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommentState {
    /// Publicly visible
    Visible,
    /// Awaiting moderation
    Pending,
    /// Flagged as spam
    Spam,
    /// Soft-deleted
    Deleted,
}

impl Default for CommentState {
    fn default() -> Self {
        CommentState::Visible
    }
}

impl CommentState {
    /// Check if comments in this state appear in listings
    pub fn is_published(&self) -> bool {
        matches!(self, CommentState::Visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_comment_defaults() {
        let comment = Comment::new(ThreadId::new("t1"));
        assert_eq!(comment.depth, 0);
        assert!(comment.parent.is_none());
        assert_eq!(comment.state, CommentState::Visible);
        assert_eq!(comment.score, 0);
    }

    #[test]
    fn test_set_parent_sets_depth() {
        let parent = Comment::new(ThreadId::new("t1"));
        let mut reply = Comment::new(ThreadId::new("t1"));

        reply.set_parent(&parent).unwrap();

        assert_eq!(reply.parent, Some(parent.id.clone()));
        assert_eq!(reply.depth, 1);

        let mut nested = Comment::new(ThreadId::new("t1"));
        nested.set_parent(&reply).unwrap();
        assert_eq!(nested.depth, 2);
    }

    #[test]
    fn test_set_parent_rejects_other_thread() {
        let parent = Comment::new(ThreadId::new("t1"));
        let mut reply = Comment::new(ThreadId::new("t2"));

        let err = reply.set_parent(&parent).unwrap_err();
        assert!(matches!(err, ColloquyError::Validation(_)));
        assert!(reply.parent.is_none());
    }

    #[test]
    fn test_apply_vote() {
        let mut comment = Comment::new(ThreadId::new("t1"));
        comment.apply_vote(1);
        comment.apply_vote(1);
        comment.apply_vote(-1);
        assert_eq!(comment.score, 1);
    }

    #[test]
    fn test_state_published() {
        assert!(CommentState::Visible.is_published());
        assert!(!CommentState::Pending.is_published());
        assert!(!CommentState::Spam.is_published());
        assert!(!CommentState::Deleted.is_published());
    }

    #[test]
    fn test_comment_serialization() {
        let mut comment = Comment::new(ThreadId::new("t1"));
        comment.set_body("Hello");
        comment.set_author("alice");

        let json = serde_json::to_string(&comment).unwrap();
        let comment2: Comment = serde_json::from_str(&json).unwrap();
        assert_eq!(comment, comment2);
    }
}
