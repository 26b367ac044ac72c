//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Data assets are loaded at compile time using `include_str!`.

// =============================================================================
// Data Assets (loaded at compile time)
// =============================================================================

/// Image references shown when the app starts (JSON array).
pub const INITIAL_REFERENCES: &str = include_str!("../assets/references.json");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown above the reference strip.
pub const APP_NAME: &str = "Attached images";

// =============================================================================
// Storage Configuration
// =============================================================================

/// Base URL that stored image paths are resolved against.
pub const STORAGE_BASE_URL: &str = "/storage";

/// URL schemes that are passed through the resolver untouched.
pub const PASSTHROUGH_SCHEMES: &[&str] = &["http:", "https:", "data:", "blob:", "asset:", "file:"];

// =============================================================================
// Inline Payload Configuration
// =============================================================================

/// MIME type used when an inline payload's format can't be detected.
pub const DEFAULT_INLINE_MIME: &str = "image/png";

/// Number of base64 characters decoded to sniff an inline payload's format.
/// Must be a multiple of 4.
pub const MIME_SNIFF_CHARS: usize = 16;

// =============================================================================
// UI Configuration
// =============================================================================

/// Labels used by the reference chip and preview.
pub mod labels {
    /// Tooltip and aria label of the chip's remove button.
    pub const REMOVE: &str = "Remove";
    /// Tooltip of the preview close button.
    pub const CLOSE_PREVIEW: &str = "Close (Esc)";
    /// Aria label of the preview close button.
    pub const CLOSE_PREVIEW_ARIA: &str = "Close preview";
    /// Hint shown when no images are attached.
    pub const EMPTY: &str = "No images attached";
}

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default)
/// - `Bootstrap` - Familiar, slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Lucide,
    Bootstrap,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
