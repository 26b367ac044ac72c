//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`ImageReference`], [`ImageSource`] - Attached images and their thumbnail source
//! - [`TagState`], [`TagAction`], [`TagEffect`] - Reference chip interaction state

mod image_ref;
mod tag;

pub use image_ref::{ImageReference, ImageSource, parse_references};
pub use tag::{TagAction, TagEffect, TagState};
