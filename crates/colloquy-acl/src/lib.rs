//! colloquy-acl - Access control layer for colloquy
//!
//! Wraps the manager traits from `colloquy-core` in permission-checking
//! decorators. Each decorator composes a backend manager with one or more
//! permission checkers: on denial the operation fails with
//! [`ColloquyError::AccessDenied`](colloquy_core::ColloquyError::AccessDenied)
//! before any backend mutation; on approval it delegates and returns the
//! backend's result unchanged.

pub mod traits;
pub mod comment_manager;
pub mod thread_manager;
pub mod vote_manager;
pub mod role;

#[cfg(test)]
mod mock;

pub use traits::{CommentAcl, ThreadAcl, VoteAcl};
pub use comment_manager::AclCommentManager;
pub use thread_manager::AclThreadManager;
pub use vote_manager::AclVoteManager;
pub use role::{
    AuthorizationChecker, RoleCommentAcl, RoleThreadAcl, RoleVoteAcl, StaticRoleChecker,
};
