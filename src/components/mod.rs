//! UI components built with Leptos.
//!
//! - [`ImageRefTag`] - Inline chip for one attached image
//! - [`ImagePreviewModal`] - Full-size preview overlay
//! - [`ImageRefList`] - Keyed strip of chips for the current collection
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
mod image_ref_tag;
mod preview_modal;
mod reference_list;
#[cfg(all(test, target_arch = "wasm32"))]
mod test_dom;

pub use image_ref_tag::ImageRefTag;
pub use preview_modal::ImagePreviewModal;
pub use reference_list::ImageRefList;
