//! In-memory storage for threads, comments, and votes

use colloquy_core::error::{ColloquyError, Result};
use colloquy_core::manager::{CommentManager, ThreadManager, VoteManager};
use colloquy_core::model::{Comment, Thread, Vote};
use colloquy_core::sort::SortOrder;
use colloquy_core::tree::{self, CommentTree};
use colloquy_core::types::{CommentId, ThreadId, VoteId};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use tracing::debug;

/// In-memory implementation of all three manager traits
///
/// Backed by `RwLock`-protected maps; safe to share behind an `Arc`.
/// Lock order is threads, then comments, then votes.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    threads: RwLock<HashMap<ThreadId, Thread>>,
    comments: RwLock<HashMap<CommentId, Comment>>,
    votes: RwLock<HashMap<VoteId, Vote>>,
}

impl InMemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Published comments of a thread, ordered by creation date
    fn thread_comments(&self, thread_id: &ThreadId) -> Vec<Comment> {
        let comments = self
            .comments
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        let mut result: Vec<Comment> = comments
            .values()
            .filter(|c| &c.thread_id == thread_id && c.state.is_published())
            .cloned()
            .collect();
        result.sort_by(|a, b| (a.created_at, &a.id).cmp(&(b.created_at, &b.id)));
        result
    }
}

impl CommentManager for InMemoryStore {
    fn find_comment_tree_by_thread(
        &self,
        thread: &Thread,
        sorting: SortOrder,
        depth: u32,
    ) -> Result<Vec<CommentTree>> {
        let comments = self.thread_comments(&thread.id);
        let mut forest = tree::organise(comments);
        tree::prune_depth(&mut forest, depth);
        sorting.sort_forest(&mut forest);
        Ok(forest)
    }

    fn find_comments_by_thread(&self, thread: &Thread, depth: u32) -> Result<Vec<Comment>> {
        let mut comments = self.thread_comments(&thread.id);
        if depth > 0 {
            comments.retain(|c| c.depth < depth);
        }
        Ok(comments)
    }

    fn find_comment_by_id(&self, id: &CommentId) -> Result<Comment> {
        let comments = self
            .comments
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        comments
            .get(id)
            .cloned()
            .ok_or_else(|| ColloquyError::CommentNotFound(id.to_string()))
    }

    fn find_comment_tree_by_comment_id(
        &self,
        id: &CommentId,
        sorting: SortOrder,
    ) -> Result<CommentTree> {
        let root = self.find_comment_by_id(id)?;

        let mut comments = self.thread_comments(&root.thread_id);
        // An unpublished root still anchors its subtree
        if !comments.iter().any(|c| &c.id == id) {
            comments.push(root);
        }

        let forest = tree::organise(comments);
        let subtree = tree::find(&forest, id)
            .cloned()
            .ok_or_else(|| ColloquyError::CommentNotFound(id.to_string()))?;

        let mut nodes = vec![subtree];
        sorting.sort_forest(&mut nodes);
        Ok(nodes.remove(0))
    }

    fn save_comment(&self, comment: &Comment) -> Result<()> {
        if self.is_new_comment(comment) {
            let mut threads = self
                .threads
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            let thread = threads
                .get_mut(&comment.thread_id)
                .ok_or_else(|| ColloquyError::ThreadNotFound(comment.thread_id.to_string()))?;

            if !thread.is_commentable {
                return Err(ColloquyError::Validation(format!(
                    "Thread {} is closed for comments",
                    thread.id
                )));
            }

            thread.record_comment(comment.created_at);
            debug!("saving new comment {} in thread {}", comment.id, thread.id);
        } else {
            debug!("updating comment {}", comment.id);
        }

        let mut comments = self
            .comments
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        comments.insert(comment.id.clone(), comment.clone());
        Ok(())
    }

    fn is_new_comment(&self, comment: &Comment) -> bool {
        let comments = self
            .comments
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        !comments.contains_key(&comment.id)
    }

    fn create_comment(&self, thread: &Thread, parent: Option<&Comment>) -> Result<Comment> {
        let mut comment = Comment::new(thread.id.clone());
        if let Some(parent) = parent {
            comment.set_parent(parent)?;
        }
        Ok(comment)
    }

    fn comment_class(&self) -> &'static str {
        std::any::type_name::<Comment>()
    }
}

impl ThreadManager for InMemoryStore {
    fn find_thread_by_id(&self, id: &ThreadId) -> Result<Thread> {
        let threads = self
            .threads
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        threads
            .get(id)
            .cloned()
            .ok_or_else(|| ColloquyError::ThreadNotFound(id.to_string()))
    }

    fn find_all_threads(&self) -> Result<Vec<Thread>> {
        let threads = self
            .threads
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let mut result: Vec<Thread> = threads.values().cloned().collect();
        result.sort_by(|a, b| (a.created_at, &a.id).cmp(&(b.created_at, &b.id)));
        Ok(result)
    }

    fn create_thread(&self, id: ThreadId) -> Thread {
        Thread::new(id)
    }

    fn save_thread(&self, thread: &Thread) -> Result<()> {
        debug!("saving thread {}", thread.id);
        let mut threads = self
            .threads
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        threads.insert(thread.id.clone(), thread.clone());
        Ok(())
    }

    fn is_new_thread(&self, thread: &Thread) -> bool {
        let threads = self
            .threads
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        !threads.contains_key(&thread.id)
    }

    fn thread_class(&self) -> &'static str {
        std::any::type_name::<Thread>()
    }
}

impl VoteManager for InMemoryStore {
    fn find_vote_by_id(&self, id: &VoteId) -> Result<Vote> {
        let votes = self.votes.read().unwrap_or_else(PoisonError::into_inner);
        votes
            .get(id)
            .cloned()
            .ok_or_else(|| ColloquyError::VoteNotFound(id.to_string()))
    }

    fn find_votes_by_comment(&self, comment: &Comment) -> Result<Vec<Vote>> {
        let votes = self.votes.read().unwrap_or_else(PoisonError::into_inner);
        let mut result: Vec<Vote> = votes
            .values()
            .filter(|v| v.comment_id == comment.id)
            .cloned()
            .collect();
        result.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(result)
    }

    fn create_vote(&self, comment: &Comment, value: i8) -> Result<Vote> {
        if value != 1 && value != -1 {
            return Err(ColloquyError::Validation(format!(
                "Vote value must be +1 or -1, got {}",
                value
            )));
        }
        Ok(Vote::new(comment.id.clone(), value))
    }

    fn save_vote(&self, vote: &Vote) -> Result<()> {
        if !self.is_new_vote(vote) {
            return Err(ColloquyError::Validation(format!(
                "Vote {} is already persisted; votes are immutable",
                vote.id
            )));
        }

        let mut comments = self
            .comments
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let comment = comments
            .get_mut(&vote.comment_id)
            .ok_or_else(|| ColloquyError::CommentNotFound(vote.comment_id.to_string()))?;
        comment.apply_vote(vote.value);

        debug!("saving vote {} on comment {}", vote.id, vote.comment_id);
        let mut votes = self.votes.write().unwrap_or_else(PoisonError::into_inner);
        votes.insert(vote.id.clone(), vote.clone());
        Ok(())
    }

    fn is_new_vote(&self, vote: &Vote) -> bool {
        let votes = self.votes.read().unwrap_or_else(PoisonError::into_inner);
        !votes.contains_key(&vote.id)
    }

    fn vote_class(&self) -> &'static str {
        std::any::type_name::<Vote>()
    }
}
