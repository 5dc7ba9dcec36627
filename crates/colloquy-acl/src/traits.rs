//! Permission checker traits
//!
//! The decorators depend only on these capability sets; how permissions are
//! stored or resolved is up to the implementation. [`crate::role`] provides
//! a role-based implementation, and tests supply recording stubs.

use colloquy_core::model::{Comment, Vote};
use colloquy_core::types::ThreadId;

/// Yes/no capability questions about a comment
pub trait CommentAcl: Send + Sync {
    /// May the current actor see this comment?
    fn can_view(&self, comment: &Comment) -> bool;

    /// May the current actor post this comment as a reply?
    fn can_reply(&self, comment: &Comment) -> bool;

    /// May the current actor edit this comment?
    fn can_edit(&self, comment: &Comment) -> bool;

    /// Grant the creating actor default rights on a newly created comment
    ///
    /// Implementations without per-object grants make this a no-op.
    fn set_default_acl(&self, comment: &Comment);
}

/// Yes/no capability questions about a thread
///
/// Threads are identified to checkers by their opaque key; a full thread
/// record is not required to answer.
pub trait ThreadAcl: Send + Sync {
    /// May the current actor open new threads?
    fn can_create(&self) -> bool;

    /// May the current actor see this thread?
    fn can_view(&self, thread: &ThreadId) -> bool;

    /// May the current actor edit this thread?
    fn can_edit(&self, thread: &ThreadId) -> bool;

    /// Grant the creating actor default rights on a newly created thread
    fn set_default_acl(&self, thread: &ThreadId);
}

/// Yes/no capability questions about a vote
pub trait VoteAcl: Send + Sync {
    /// May the current actor cast votes?
    fn can_create(&self) -> bool;

    /// May the current actor see this vote?
    fn can_view(&self, vote: &Vote) -> bool;

    /// Grant the creating actor default rights on a newly cast vote
    fn set_default_acl(&self, vote: &Vote);
}
