//! Interface definitions for the index boundary.
//!
//! This module defines the abstract `IndexHandle` trait that allows for
//! dependency injection and swappable index backend implementations.

mod index_handle;

pub use index_handle::IndexHandle;
