//! Sorting strategies for comment forests

use crate::error::{ColloquyError, Result};
use crate::tree::CommentTree;
use serde::{Deserialize, Serialize};

/// Order in which sibling comments are listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Oldest first
    DateAsc,
    /// Newest first
    DateDesc,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::DateAsc
    }
}

impl SortOrder {
    /// Parse a sort order from its wire alias ("date_asc" / "date_desc")
    pub fn from_key(key: &str) -> Result<Self> {
        match key {
            "date_asc" => Ok(SortOrder::DateAsc),
            "date_desc" => Ok(SortOrder::DateDesc),
            other => Err(ColloquyError::Validation(format!(
                "Unknown sort order: {}",
                other
            ))),
        }
    }

    /// The wire alias for this sort order
    pub fn as_key(&self) -> &'static str {
        match self {
            SortOrder::DateAsc => "date_asc",
            SortOrder::DateDesc => "date_desc",
        }
    }

    /// Sort a comment forest recursively
    ///
    /// Siblings are ordered by creation date with the comment id as a
    /// deterministic tie-break.
    pub fn sort_forest(&self, forest: &mut [CommentTree]) {
        match self {
            SortOrder::DateAsc => forest.sort_by(|a, b| {
                (a.comment.created_at, &a.comment.id).cmp(&(b.comment.created_at, &b.comment.id))
            }),
            SortOrder::DateDesc => forest.sort_by(|a, b| {
                (b.comment.created_at, &b.comment.id).cmp(&(a.comment.created_at, &a.comment.id))
            }),
        }
        for node in forest.iter_mut() {
            self.sort_forest(&mut node.children);
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_key())
    }
}
