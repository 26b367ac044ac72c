//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use leptos::prelude::*;

use crate::components::ImageRefList;
use crate::config::{APP_NAME, INITIAL_REFERENCES};
use crate::core::{ResolverContext, StorageResolver};
use crate::models::{ImageReference, parse_references};

// ============================================================================
// AppContext
// ============================================================================

/// Global application context provided to all child components.
///
/// This struct is `Copy` because its only field is a Leptos signal.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Image references attached to the current document.
    pub references: RwSignal<Vec<ImageReference>>,
}

impl AppContext {
    /// Creates a context seeded with the given references.
    pub fn new(references: Vec<ImageReference>) -> Self {
        Self {
            references: RwSignal::new(references),
        }
    }

    /// Drops the reference with `id`, if present.
    pub fn remove(&self, id: &str) {
        let removed = self
            .references
            .try_update(|refs| remove_reference(refs, id))
            .unwrap_or(false);

        log_removal(id, removed);
    }
}

#[cfg(target_arch = "wasm32")]
fn log_removal(id: &str, removed: bool) {
    if removed {
        web_sys::console::log_1(&format!("Removed image reference {}", id).into());
    } else {
        web_sys::console::warn_1(&format!("Unknown image reference {}", id).into());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn log_removal(_id: &str, _removed: bool) {}

/// Remove the reference with `id` from `refs`.
///
/// Returns `true` if an entry was removed.
pub fn remove_reference(refs: &mut Vec<ImageReference>, id: &str) -> bool {
    let before = refs.len();
    refs.retain(|r| r.id != id);
    refs.len() != before
}

/// Load the bundled references, falling back to an empty collection.
fn initial_references() -> Vec<ImageReference> {
    match parse_references(INITIAL_REFERENCES) {
        Ok(refs) => refs,
        Err(_e) => {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::warn_1(&format!("Failed to load references: {}", _e).into());
            Vec::new()
        }
    }
}

// ============================================================================
// App Component
// ============================================================================

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_context(ResolverContext::new(StorageResolver::default()));
    provide_context(AppContext::new(initial_references()));

    view! {
        <main>
            <h2>{APP_NAME}</h2>
            <ImageRefList />
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(id: &str) -> ImageReference {
        ImageReference {
            id: id.to_string(),
            file_name: format!("{}.png", id),
            image_data: None,
            image_path: Some(format!("images/{}.png", id)),
        }
    }

    #[test]
    fn test_remove_reference() {
        let mut refs = vec![reference("a"), reference("b"), reference("c")];
        assert!(remove_reference(&mut refs, "b"));
        let ids: Vec<_> = refs.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut refs = vec![reference("a")];
        assert!(!remove_reference(&mut refs, "zzz"));
        assert_eq!(refs.len(), 1);
    }
}
