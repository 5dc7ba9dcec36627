//! Access-controlled vote manager

use crate::traits::{CommentAcl, VoteAcl};
use colloquy_core::error::{ColloquyError, Result};
use colloquy_core::manager::VoteManager;
use colloquy_core::model::{Comment, Vote};
use colloquy_core::types::VoteId;
use std::sync::Arc;
use tracing::debug;

/// Permission-checking decorator around a [`VoteManager`]
///
/// Listing votes for a comment requires view permission on that comment;
/// casting a vote requires the vote create permission.
pub struct AclVoteManager {
    inner: Arc<dyn VoteManager>,
    vote_acl: Arc<dyn VoteAcl>,
    comment_acl: Arc<dyn CommentAcl>,
}

impl AclVoteManager {
    /// Wrap a backend manager with the given permission checkers
    pub fn new(
        inner: Arc<dyn VoteManager>,
        vote_acl: Arc<dyn VoteAcl>,
        comment_acl: Arc<dyn CommentAcl>,
    ) -> Self {
        Self {
            inner,
            vote_acl,
            comment_acl,
        }
    }

    fn deny(&self, action: String) -> ColloquyError {
        debug!("access denied: {}", action);
        ColloquyError::AccessDenied(action)
    }
}

impl VoteManager for AclVoteManager {
    fn find_vote_by_id(&self, id: &VoteId) -> Result<Vote> {
        let vote = self.inner.find_vote_by_id(id)?;
        if !self.vote_acl.can_view(&vote) {
            return Err(self.deny(format!("view vote {}", id)));
        }
        Ok(vote)
    }

    fn find_votes_by_comment(&self, comment: &Comment) -> Result<Vec<Vote>> {
        if !self.comment_acl.can_view(comment) {
            return Err(self.deny(format!("view votes on comment {}", comment.id)));
        }
        self.inner.find_votes_by_comment(comment)
    }

    fn create_vote(&self, comment: &Comment, value: i8) -> Result<Vote> {
        self.inner.create_vote(comment, value)
    }

    fn save_vote(&self, vote: &Vote) -> Result<()> {
        if self.inner.is_new_vote(vote) {
            if !self.vote_acl.can_create() {
                return Err(self.deny(format!("cast vote {}", vote.id)));
            }
            self.vote_acl.set_default_acl(vote);
        }

        self.inner.save_vote(vote)
    }

    fn is_new_vote(&self, vote: &Vote) -> bool {
        self.inner.is_new_vote(vote)
    }

    fn vote_class(&self) -> &'static str {
        self.inner.vote_class()
    }
}
