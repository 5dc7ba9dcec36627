//! Manager traits implemented by storage backends
//!
//! These traits define the capability sets a backend provides for threads,
//! comments, and votes. Decorators (such as the ACL layer) implement the
//! same traits and wrap a backend, so callers depend only on the traits.

use crate::error::Result;
use crate::model::{Comment, Thread, Vote};
use crate::sort::SortOrder;
use crate::tree::CommentTree;
use crate::types::{CommentId, ThreadId, VoteId};

/// Capability set for comment persistence
pub trait CommentManager: Send + Sync {
    /// Find the comment forest of a thread, sorted and depth-limited
    ///
    /// A `depth` of 0 means unlimited; a depth of N keeps N levels.
    fn find_comment_tree_by_thread(
        &self,
        thread: &Thread,
        sorting: SortOrder,
        depth: u32,
    ) -> Result<Vec<CommentTree>>;

    /// Find the comments of a thread as a flat, date-ordered sequence
    ///
    /// A `depth` of 0 means unlimited; a depth of N keeps comments nested
    /// fewer than N levels deep.
    fn find_comments_by_thread(&self, thread: &Thread, depth: u32) -> Result<Vec<Comment>>;

    /// Find a single comment by id
    fn find_comment_by_id(&self, id: &CommentId) -> Result<Comment>;

    /// Find the subtree rooted at the given comment
    fn find_comment_tree_by_comment_id(
        &self,
        id: &CommentId,
        sorting: SortOrder,
    ) -> Result<CommentTree>;

    /// Persist a comment (insert if new, replace otherwise)
    fn save_comment(&self, comment: &Comment) -> Result<()>;

    /// Whether the comment has not been persisted yet
    fn is_new_comment(&self, comment: &Comment) -> bool;

    /// Create a new, unpersisted comment bound to the thread
    ///
    /// If a parent is given the comment becomes a reply to it; the parent
    /// must belong to the same thread.
    fn create_comment(&self, thread: &Thread, parent: Option<&Comment>) -> Result<Comment>;

    /// Identifier of the concrete comment type this manager stores
    fn comment_class(&self) -> &'static str;
}

/// Capability set for thread persistence
pub trait ThreadManager: Send + Sync {
    /// Find a thread by its key
    fn find_thread_by_id(&self, id: &ThreadId) -> Result<Thread>;

    /// All threads, in creation order
    fn find_all_threads(&self) -> Result<Vec<Thread>>;

    /// Create a new, unpersisted thread with the given key
    fn create_thread(&self, id: ThreadId) -> Thread;

    /// Persist a thread (insert if new, replace otherwise)
    fn save_thread(&self, thread: &Thread) -> Result<()>;

    /// Whether the thread has not been persisted yet
    fn is_new_thread(&self, thread: &Thread) -> bool;

    /// Identifier of the concrete thread type this manager stores
    fn thread_class(&self) -> &'static str;
}

/// Capability set for vote persistence
pub trait VoteManager: Send + Sync {
    /// Find a vote by id
    fn find_vote_by_id(&self, id: &VoteId) -> Result<Vote>;

    /// All votes cast on the given comment
    fn find_votes_by_comment(&self, comment: &Comment) -> Result<Vec<Vote>>;

    /// Create a new, unpersisted vote on the comment
    ///
    /// The value must be +1 or -1.
    fn create_vote(&self, comment: &Comment, value: i8) -> Result<Vote>;

    /// Persist a vote and apply its value to the comment score
    fn save_vote(&self, vote: &Vote) -> Result<()>;

    /// Whether the vote has not been persisted yet
    fn is_new_vote(&self, vote: &Vote) -> bool;

    /// Identifier of the concrete vote type this manager stores
    fn vote_class(&self) -> &'static str;
}
