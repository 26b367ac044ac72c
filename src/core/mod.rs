//! Core services backing the reference chip.
//!
//! This module provides:
//! - [`ImageUrlResolver`] and [`StorageResolver`] for stored-image URLs
//! - [`ResolverContext`] for injecting a resolver into components
//! - [`error`] types for the reference manifest

pub mod error;
mod storage;

pub use storage::{ImageUrlResolver, ResolverContext, StorageResolver};
