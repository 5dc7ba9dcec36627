//! colloquy-store - Storage backends for colloquy
//!
//! Currently provides [`InMemoryStore`], a reference implementation of the
//! colloquy manager traits backed by in-process maps. It is the backend the
//! ACL decorators are tested against and a usable store for embedded or
//! single-process deployments.

pub mod memory;

pub use memory::InMemoryStore;
