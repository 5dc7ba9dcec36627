//! Access-controlled comment manager

use crate::traits::{CommentAcl, ThreadAcl};
use colloquy_core::error::{ColloquyError, Result};
use colloquy_core::manager::CommentManager;
use colloquy_core::model::{Comment, Thread};
use colloquy_core::sort::SortOrder;
use colloquy_core::tree::CommentTree;
use colloquy_core::types::CommentId;
use std::sync::Arc;
use tracing::debug;

/// Permission-checking decorator around a [`CommentManager`]
///
/// Thread-scoped reads ask the thread checker before touching the backend;
/// id lookups check the comment checker on the fetched result; saves run the
/// full check sequence before the backend mutation. On denial the operation
/// fails with `AccessDenied` and the backend is left untouched (for saves)
/// or its result is withheld (for lookups). Backend errors pass through
/// unchanged.
pub struct AclCommentManager {
    inner: Arc<dyn CommentManager>,
    comment_acl: Arc<dyn CommentAcl>,
    thread_acl: Arc<dyn ThreadAcl>,
}

impl AclCommentManager {
    /// Wrap a backend manager with the given permission checkers
    pub fn new(
        inner: Arc<dyn CommentManager>,
        comment_acl: Arc<dyn CommentAcl>,
        thread_acl: Arc<dyn ThreadAcl>,
    ) -> Self {
        Self {
            inner,
            comment_acl,
            thread_acl,
        }
    }

    fn deny(&self, action: String) -> ColloquyError {
        debug!("access denied: {}", action);
        ColloquyError::AccessDenied(action)
    }

    /// View check over the roots of a forest
    ///
    /// The decision for a tree node is a property of its root comment only;
    /// children are not re-checked.
    fn can_view_roots(&self, nodes: &[CommentTree]) -> bool {
        nodes
            .iter()
            .all(|node| self.comment_acl.can_view(&node.comment))
    }
}

impl CommentManager for AclCommentManager {
    fn find_comment_tree_by_thread(
        &self,
        thread: &Thread,
        sorting: SortOrder,
        depth: u32,
    ) -> Result<Vec<CommentTree>> {
        if !self.thread_acl.can_view(&thread.id) {
            return Err(self.deny(format!("view thread {}", thread.id)));
        }
        self.inner.find_comment_tree_by_thread(thread, sorting, depth)
    }

    fn find_comments_by_thread(&self, thread: &Thread, depth: u32) -> Result<Vec<Comment>> {
        if !self.thread_acl.can_view(&thread.id) {
            return Err(self.deny(format!("view thread {}", thread.id)));
        }
        self.inner.find_comments_by_thread(thread, depth)
    }

    /// Permission is evaluated on the fetched comment, after the backend
    /// lookup. This matches the upstream contract but means the lookup runs
    /// before the check; it is only safe while backend reads are free of
    /// side effects.
    fn find_comment_by_id(&self, id: &CommentId) -> Result<Comment> {
        let comment = self.inner.find_comment_by_id(id)?;
        if !self.comment_acl.can_view(&comment) {
            return Err(self.deny(format!("view comment {}", id)));
        }
        Ok(comment)
    }

    /// Like [`find_comment_by_id`](CommentManager::find_comment_by_id), the
    /// view check runs on the root of the returned tree, after the lookup.
    fn find_comment_tree_by_comment_id(
        &self,
        id: &CommentId,
        sorting: SortOrder,
    ) -> Result<CommentTree> {
        let tree = self.inner.find_comment_tree_by_comment_id(id, sorting)?;
        if !self.can_view_roots(std::slice::from_ref(&tree)) {
            return Err(self.deny(format!("view comment tree {}", id)));
        }
        Ok(tree)
    }

    fn save_comment(&self, comment: &Comment) -> Result<()> {
        if self.inner.is_new_comment(comment) {
            // Thread view strictly before reply: a closed-off thread denies
            // without consulting the reply permission.
            if !self.thread_acl.can_view(&comment.thread_id) {
                return Err(self.deny(format!(
                    "reply in thread {} (thread not viewable)",
                    comment.thread_id
                )));
            }
            if !self.comment_acl.can_reply(comment) {
                return Err(self.deny(format!("reply with comment {}", comment.id)));
            }
            self.comment_acl.set_default_acl(comment);
        } else if !self.comment_acl.can_edit(comment) {
            return Err(self.deny(format!("edit comment {}", comment.id)));
        }

        self.inner.save_comment(comment)
    }

    fn is_new_comment(&self, comment: &Comment) -> bool {
        self.inner.is_new_comment(comment)
    }

    fn create_comment(&self, thread: &Thread, parent: Option<&Comment>) -> Result<Comment> {
        self.inner.create_comment(thread, parent)
    }

    fn comment_class(&self) -> &'static str {
        self.inner.comment_class()
    }
}
