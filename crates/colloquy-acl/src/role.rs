//! Role-based permission checkers
//!
//! Maps each capability question to a configured role name and asks an
//! [`AuthorizationChecker`] whether the current actor holds it. There are no
//! per-object grants in this model, so `set_default_acl` is a no-op.

use crate::traits::{CommentAcl, ThreadAcl, VoteAcl};
use colloquy_core::model::{Comment, Vote};
use colloquy_core::types::ThreadId;
use std::collections::HashSet;
use std::sync::Arc;

/// Answers whether the current actor holds a named role
pub trait AuthorizationChecker: Send + Sync {
    fn is_granted(&self, role: &str) -> bool;
}

/// Checker backed by a fixed role set
///
/// Suitable for embedding without a security framework, and for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticRoleChecker {
    roles: HashSet<String>,
}

impl StaticRoleChecker {
    /// Create a checker granting the given roles
    pub fn with_roles(roles: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }
}

impl AuthorizationChecker for StaticRoleChecker {
    fn is_granted(&self, role: &str) -> bool {
        self.roles.contains(role)
    }
}

/// Role-based comment permissions
pub struct RoleCommentAcl {
    checker: Arc<dyn AuthorizationChecker>,
    create_role: String,
    view_role: String,
    edit_role: String,
}

impl RoleCommentAcl {
    /// Map comment capabilities onto the given role names
    pub fn new(
        checker: Arc<dyn AuthorizationChecker>,
        create_role: impl Into<String>,
        view_role: impl Into<String>,
        edit_role: impl Into<String>,
    ) -> Self {
        Self {
            checker,
            create_role: create_role.into(),
            view_role: view_role.into(),
            edit_role: edit_role.into(),
        }
    }
}

impl CommentAcl for RoleCommentAcl {
    fn can_view(&self, _comment: &Comment) -> bool {
        self.checker.is_granted(&self.view_role)
    }

    fn can_reply(&self, _comment: &Comment) -> bool {
        self.checker.is_granted(&self.create_role)
    }

    fn can_edit(&self, _comment: &Comment) -> bool {
        self.checker.is_granted(&self.edit_role)
    }

    fn set_default_acl(&self, _comment: &Comment) {}
}

/// Role-based thread permissions
pub struct RoleThreadAcl {
    checker: Arc<dyn AuthorizationChecker>,
    create_role: String,
    view_role: String,
    edit_role: String,
}

impl RoleThreadAcl {
    /// Map thread capabilities onto the given role names
    pub fn new(
        checker: Arc<dyn AuthorizationChecker>,
        create_role: impl Into<String>,
        view_role: impl Into<String>,
        edit_role: impl Into<String>,
    ) -> Self {
        Self {
            checker,
            create_role: create_role.into(),
            view_role: view_role.into(),
            edit_role: edit_role.into(),
        }
    }
}

impl ThreadAcl for RoleThreadAcl {
    fn can_create(&self) -> bool {
        self.checker.is_granted(&self.create_role)
    }

    fn can_view(&self, _thread: &ThreadId) -> bool {
        self.checker.is_granted(&self.view_role)
    }

    fn can_edit(&self, _thread: &ThreadId) -> bool {
        self.checker.is_granted(&self.edit_role)
    }

    fn set_default_acl(&self, _thread: &ThreadId) {}
}

/// Role-based vote permissions
pub struct RoleVoteAcl {
    checker: Arc<dyn AuthorizationChecker>,
    create_role: String,
    view_role: String,
}

impl RoleVoteAcl {
    /// Map vote capabilities onto the given role names
    pub fn new(
        checker: Arc<dyn AuthorizationChecker>,
        create_role: impl Into<String>,
        view_role: impl Into<String>,
    ) -> Self {
        Self {
            checker,
            create_role: create_role.into(),
            view_role: view_role.into(),
        }
    }
}

impl VoteAcl for RoleVoteAcl {
    fn can_create(&self) -> bool {
        self.checker.is_granted(&self.create_role)
    }

    fn can_view(&self, _vote: &Vote) -> bool {
        self.checker.is_granted(&self.view_role)
    }

    fn set_default_acl(&self, _vote: &Vote) {}
}
