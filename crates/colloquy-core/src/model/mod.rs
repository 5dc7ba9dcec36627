//! Data model module
//!
//! Threads, comments, and votes as stored and exchanged by managers.

pub mod comment;
pub mod thread;
pub mod vote;

pub use comment::{Comment, CommentState};
pub use thread::Thread;
pub use vote::Vote;
