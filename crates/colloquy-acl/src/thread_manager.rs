//! Access-controlled thread manager

use crate::traits::ThreadAcl;
use colloquy_core::error::{ColloquyError, Result};
use colloquy_core::manager::ThreadManager;
use colloquy_core::model::Thread;
use colloquy_core::types::ThreadId;
use std::sync::Arc;
use tracing::debug;

/// Permission-checking decorator around a [`ThreadManager`]
///
/// Lookups check view permission on the fetched thread(s); saves require the
/// create permission for new threads and the edit permission otherwise.
pub struct AclThreadManager {
    inner: Arc<dyn ThreadManager>,
    thread_acl: Arc<dyn ThreadAcl>,
}

impl AclThreadManager {
    /// Wrap a backend manager with the given permission checker
    pub fn new(inner: Arc<dyn ThreadManager>, thread_acl: Arc<dyn ThreadAcl>) -> Self {
        Self { inner, thread_acl }
    }

    fn deny(&self, action: String) -> ColloquyError {
        debug!("access denied: {}", action);
        ColloquyError::AccessDenied(action)
    }
}

impl ThreadManager for AclThreadManager {
    fn find_thread_by_id(&self, id: &ThreadId) -> Result<Thread> {
        let thread = self.inner.find_thread_by_id(id)?;
        if !self.thread_acl.can_view(&thread.id) {
            return Err(self.deny(format!("view thread {}", id)));
        }
        Ok(thread)
    }

    /// Every returned thread must be viewable; a single non-viewable thread
    /// denies the whole call rather than silently filtering it out.
    fn find_all_threads(&self) -> Result<Vec<Thread>> {
        let threads = self.inner.find_all_threads()?;
        for thread in &threads {
            if !self.thread_acl.can_view(&thread.id) {
                return Err(self.deny(format!("view thread {}", thread.id)));
            }
        }
        Ok(threads)
    }

    fn create_thread(&self, id: ThreadId) -> Thread {
        self.inner.create_thread(id)
    }

    fn save_thread(&self, thread: &Thread) -> Result<()> {
        if self.inner.is_new_thread(thread) {
            if !self.thread_acl.can_create() {
                return Err(self.deny(format!("create thread {}", thread.id)));
            }
            self.thread_acl.set_default_acl(&thread.id);
        } else if !self.thread_acl.can_edit(&thread.id) {
            return Err(self.deny(format!("edit thread {}", thread.id)));
        }

        self.inner.save_thread(thread)
    }

    fn is_new_thread(&self, thread: &Thread) -> bool {
        self.inner.is_new_thread(thread)
    }

    fn thread_class(&self) -> &'static str {
        self.inner.thread_class()
    }
}
