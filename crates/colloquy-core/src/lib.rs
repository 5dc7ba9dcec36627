//! colloquy-core - Core library for colloquy
//!
//! This crate provides the core building blocks for threaded comment
//! management: the data model (threads, comments, votes), comment tree
//! organisation, sorting strategies, and the manager traits that storage
//! backends implement.

pub mod error;
pub mod types;
pub mod model;
pub mod tree;
pub mod sort;
pub mod manager;

pub use error::{ColloquyError, Result};
pub use types::*;
