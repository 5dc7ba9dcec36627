//! Recording test doubles for decorator tests
//!
//! All mocks share a [`CallLog`] so tests can assert the exact order of
//! backend and checker calls across objects, and count how often a method
//! ran (including never).

use crate::traits::{CommentAcl, ThreadAcl, VoteAcl};
use colloquy_core::error::{ColloquyError, Result};
use colloquy_core::manager::{CommentManager, ThreadManager, VoteManager};
use colloquy_core::model::{Comment, Thread, Vote};
use colloquy_core::sort::SortOrder;
use colloquy_core::tree::CommentTree;
use colloquy_core::types::{CommentId, ThreadId, VoteId};
use std::sync::{Arc, Mutex};

/// Shared, ordered record of method invocations
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<&'static str>>>);

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, call: &'static str) {
        self.0.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self, call: &str) -> usize {
        self.0.lock().unwrap().iter().filter(|&&c| c == call).count()
    }
}

/// Canned comment backend recording every call
pub struct MockCommentManager {
    pub log: CallLog,
    pub thread: Thread,
    pub comment: Comment,
    pub forest: Vec<CommentTree>,
    pub new_comment: bool,
    /// When set, id lookups fail with the backend's not-found error
    pub missing: bool,
}

impl MockCommentManager {
    pub fn new(log: CallLog) -> Self {
        let thread = Thread::new(ThreadId::new("t1"));
        let comment = Comment::new(thread.id.clone());
        let forest = vec![CommentTree::new(comment.clone())];
        Self {
            log,
            thread,
            comment,
            forest,
            new_comment: true,
            missing: false,
        }
    }
}

impl CommentManager for MockCommentManager {
    fn find_comment_tree_by_thread(
        &self,
        _thread: &Thread,
        _sorting: SortOrder,
        _depth: u32,
    ) -> Result<Vec<CommentTree>> {
        self.log.record("store.find_comment_tree_by_thread");
        Ok(self.forest.clone())
    }

    fn find_comments_by_thread(&self, _thread: &Thread, _depth: u32) -> Result<Vec<Comment>> {
        self.log.record("store.find_comments_by_thread");
        Ok(vec![self.comment.clone()])
    }

    fn find_comment_by_id(&self, id: &CommentId) -> Result<Comment> {
        self.log.record("store.find_comment_by_id");
        if self.missing {
            return Err(ColloquyError::CommentNotFound(id.to_string()));
        }
        Ok(self.comment.clone())
    }

    fn find_comment_tree_by_comment_id(
        &self,
        _id: &CommentId,
        _sorting: SortOrder,
    ) -> Result<CommentTree> {
        self.log.record("store.find_comment_tree_by_comment_id");
        Ok(self.forest[0].clone())
    }

    fn save_comment(&self, _comment: &Comment) -> Result<()> {
        self.log.record("store.save_comment");
        Ok(())
    }

    fn is_new_comment(&self, _comment: &Comment) -> bool {
        self.log.record("store.is_new_comment");
        self.new_comment
    }

    fn create_comment(&self, _thread: &Thread, _parent: Option<&Comment>) -> Result<Comment> {
        self.log.record("store.create_comment");
        Ok(self.comment.clone())
    }

    fn comment_class(&self) -> &'static str {
        self.log.record("store.comment_class");
        "mock::Comment"
    }
}

/// Canned thread backend recording every call
pub struct MockThreadManager {
    pub log: CallLog,
    pub thread: Thread,
    pub threads: Vec<Thread>,
    pub new_thread: bool,
}

impl MockThreadManager {
    pub fn new(log: CallLog) -> Self {
        let thread = Thread::new(ThreadId::new("t1"));
        let threads = vec![thread.clone(), Thread::new(ThreadId::new("t2"))];
        Self {
            log,
            thread,
            threads,
            new_thread: true,
        }
    }
}

impl ThreadManager for MockThreadManager {
    fn find_thread_by_id(&self, _id: &ThreadId) -> Result<Thread> {
        self.log.record("store.find_thread_by_id");
        Ok(self.thread.clone())
    }

    fn find_all_threads(&self) -> Result<Vec<Thread>> {
        self.log.record("store.find_all_threads");
        Ok(self.threads.clone())
    }

    fn create_thread(&self, id: ThreadId) -> Thread {
        self.log.record("store.create_thread");
        Thread::new(id)
    }

    fn save_thread(&self, _thread: &Thread) -> Result<()> {
        self.log.record("store.save_thread");
        Ok(())
    }

    fn is_new_thread(&self, _thread: &Thread) -> bool {
        self.log.record("store.is_new_thread");
        self.new_thread
    }

    fn thread_class(&self) -> &'static str {
        self.log.record("store.thread_class");
        "mock::Thread"
    }
}

/// Canned vote backend recording every call
pub struct MockVoteManager {
    pub log: CallLog,
    pub vote: Vote,
    pub new_vote: bool,
}

impl MockVoteManager {
    pub fn new(log: CallLog) -> Self {
        let vote = Vote::new(CommentId::new(), 1);
        Self {
            log,
            vote,
            new_vote: true,
        }
    }
}

impl VoteManager for MockVoteManager {
    fn find_vote_by_id(&self, _id: &VoteId) -> Result<Vote> {
        self.log.record("store.find_vote_by_id");
        Ok(self.vote.clone())
    }

    fn find_votes_by_comment(&self, _comment: &Comment) -> Result<Vec<Vote>> {
        self.log.record("store.find_votes_by_comment");
        Ok(vec![self.vote.clone()])
    }

    fn create_vote(&self, comment: &Comment, value: i8) -> Result<Vote> {
        self.log.record("store.create_vote");
        Ok(Vote::new(comment.id.clone(), value))
    }

    fn save_vote(&self, _vote: &Vote) -> Result<()> {
        self.log.record("store.save_vote");
        Ok(())
    }

    fn is_new_vote(&self, _vote: &Vote) -> bool {
        self.log.record("store.is_new_vote");
        self.new_vote
    }

    fn vote_class(&self) -> &'static str {
        self.log.record("store.vote_class");
        "mock::Vote"
    }
}

/// Comment checker with canned answers
pub struct StubCommentAcl {
    pub log: CallLog,
    pub view: bool,
    pub reply: bool,
    pub edit: bool,
}

impl StubCommentAcl {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            view: true,
            reply: true,
            edit: true,
        }
    }
}

impl CommentAcl for StubCommentAcl {
    fn can_view(&self, _comment: &Comment) -> bool {
        self.log.record("comment_acl.can_view");
        self.view
    }

    fn can_reply(&self, _comment: &Comment) -> bool {
        self.log.record("comment_acl.can_reply");
        self.reply
    }

    fn can_edit(&self, _comment: &Comment) -> bool {
        self.log.record("comment_acl.can_edit");
        self.edit
    }

    fn set_default_acl(&self, _comment: &Comment) {
        self.log.record("comment_acl.set_default_acl");
    }
}

/// Thread checker with canned answers
pub struct StubThreadAcl {
    pub log: CallLog,
    pub create: bool,
    pub view: bool,
    pub edit: bool,
}

impl StubThreadAcl {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            create: true,
            view: true,
            edit: true,
        }
    }
}

impl ThreadAcl for StubThreadAcl {
    fn can_create(&self) -> bool {
        self.log.record("thread_acl.can_create");
        self.create
    }

    fn can_view(&self, _thread: &ThreadId) -> bool {
        self.log.record("thread_acl.can_view");
        self.view
    }

    fn can_edit(&self, _thread: &ThreadId) -> bool {
        self.log.record("thread_acl.can_edit");
        self.edit
    }

    fn set_default_acl(&self, _thread: &ThreadId) {
        self.log.record("thread_acl.set_default_acl");
    }
}

/// Vote checker with canned answers
pub struct StubVoteAcl {
    pub log: CallLog,
    pub create: bool,
    pub view: bool,
}

impl StubVoteAcl {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            create: true,
            view: true,
        }
    }
}

impl VoteAcl for StubVoteAcl {
    fn can_create(&self) -> bool {
        self.log.record("vote_acl.can_create");
        self.create
    }

    fn can_view(&self, _vote: &Vote) -> bool {
        self.log.record("vote_acl.can_view");
        self.view
    }

    fn set_default_acl(&self, _vote: &Vote) {
        self.log.record("vote_acl.set_default_acl");
    }
}
