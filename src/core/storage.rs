//! Stored-image URL resolution.
//!
//! Maps a persisted image path to a URL the browser can load.

use std::sync::Arc;

use crate::config::{PASSTHROUGH_SCHEMES, STORAGE_BASE_URL};

/// Maps a stored-image path to a loadable URL.
pub trait ImageUrlResolver {
    fn resolve(&self, path: &str) -> String;
}

/// Resolver that joins paths onto a storage base URL.
///
/// Paths that already carry a URL scheme (see [`PASSTHROUGH_SCHEMES`])
/// are returned unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageResolver {
    base_url: String,
}

impl StorageResolver {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for StorageResolver {
    fn default() -> Self {
        Self::new(STORAGE_BASE_URL)
    }
}

impl ImageUrlResolver for StorageResolver {
    fn resolve(&self, path: &str) -> String {
        if has_scheme(path) {
            return path.to_string();
        }

        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');

        if base.is_empty() {
            format!("/{}", path)
        } else {
            format!("{}/{}", base, path)
        }
    }
}

fn has_scheme(path: &str) -> bool {
    let lower = path.trim_start().to_ascii_lowercase();
    PASSTHROUGH_SCHEMES
        .iter()
        .any(|scheme| lower.starts_with(scheme))
}

/// Resolver handle shared through Leptos context.
///
/// Falls back to [`StorageResolver::default`] when no resolver is provided.
#[derive(Clone)]
pub struct ResolverContext(pub Arc<dyn ImageUrlResolver + Send + Sync>);

impl ResolverContext {
    pub fn new(resolver: impl ImageUrlResolver + Send + Sync + 'static) -> Self {
        Self(Arc::new(resolver))
    }
}

impl Default for ResolverContext {
    fn default() -> Self {
        Self::new(StorageResolver::default())
    }
}

impl ImageUrlResolver for ResolverContext {
    fn resolve(&self, path: &str) -> String {
        self.0.resolve(path)
    }
}
