//! Comment tree organisation
//!
//! Managers return threaded comments as a forest of [`CommentTree`] nodes.
//! The helpers here turn a flat, date-ordered comment list into that forest,
//! prune it to a depth limit, and look up subtrees.

use crate::model::Comment;
use crate::types::CommentId;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A comment with its ordered replies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentTree {
    /// The comment at this node
    pub comment: Comment,
    /// Direct replies, in listing order
    #[serde(default)]
    pub children: Vec<CommentTree>,
}

impl CommentTree {
    /// Create a leaf node
    pub fn new(comment: Comment) -> Self {
        Self {
            comment,
            children: Vec::new(),
        }
    }

    /// Total number of comments in this subtree
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(CommentTree::size).sum::<usize>()
    }

    /// All comments in this subtree, depth-first
    pub fn flatten(&self) -> Vec<&Comment> {
        let mut out = vec![&self.comment];
        for child in &self.children {
            out.extend(child.flatten());
        }
        out
    }
}

/// Organise a flat comment list into a forest using parent links
///
/// The input order is preserved among siblings, so callers pass comments
/// pre-sorted by creation date. Comments whose parent is not part of the
/// input become roots, which is what subtree queries rely on.
pub fn organise(comments: Vec<Comment>) -> Vec<CommentTree> {
    let ids: HashSet<CommentId> = comments.iter().map(|c| c.id.clone()).collect();

    let mut children_of: HashMap<Option<CommentId>, Vec<Comment>> = HashMap::new();
    for comment in comments {
        let key = comment.parent.clone().filter(|p| ids.contains(p));
        children_of.entry(key).or_default().push(comment);
    }

    let roots = children_of.remove(&None).unwrap_or_default();
    roots
        .into_iter()
        .map(|c| attach_children(c, &mut children_of))
        .collect()
}

fn attach_children(
    comment: Comment,
    children_of: &mut HashMap<Option<CommentId>, Vec<Comment>>,
) -> CommentTree {
    let children = children_of
        .remove(&Some(comment.id.clone()))
        .unwrap_or_default()
        .into_iter()
        .map(|c| attach_children(c, children_of))
        .collect();

    CommentTree { comment, children }
}

/// Prune a forest to at most `depth` levels
///
/// A depth of 0 means unlimited. A depth of 1 keeps only the roots.
pub fn prune_depth(forest: &mut [CommentTree], depth: u32) {
    if depth == 0 {
        return;
    }
    if depth == 1 {
        for node in forest.iter_mut() {
            node.children.clear();
        }
        return;
    }
    for node in forest.iter_mut() {
        prune_depth(&mut node.children, depth - 1);
    }
}

/// Find the subtree rooted at the given comment id, depth-first
pub fn find<'a>(forest: &'a [CommentTree], id: &CommentId) -> Option<&'a CommentTree> {
    for node in forest {
        if &node.comment.id == id {
            return Some(node);
        }
        if let Some(found) = find(&node.children, id) {
            return Some(found);
        }
    }
    None
}
