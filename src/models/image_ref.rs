//! Image reference view-model and thumbnail source selection.

use std::collections::HashSet;

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_INLINE_MIME, MIME_SNIFF_CHARS};
use crate::core::ImageUrlResolver;
use crate::core::error::ReferenceError;

/// Decoder for payload prefixes, which may or may not carry padding.
const SNIFF_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// One attached image, as handed to a chip by its parent.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageReference {
    /// Unique within the parent collection.
    pub id: String,
    pub file_name: String,
    /// Inline base64 payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
    /// Path into image storage. Takes precedence over `image_data`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
}

/// Where a thumbnail comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSource<'a> {
    /// Previously persisted image, resolved through storage.
    Stored(&'a str),
    /// Inline base64 payload.
    Inline(&'a str),
    /// Nothing to show; renders as a broken image.
    Missing,
}

impl<'a> ImageSource<'a> {
    /// Pick the source: stored path first, then inline data.
    ///
    /// Empty strings count as absent.
    pub fn select(image_data: Option<&'a str>, image_path: Option<&'a str>) -> Self {
        if let Some(path) = image_path.filter(|p| !p.is_empty()) {
            Self::Stored(path)
        } else if let Some(data) = image_data.filter(|d| !d.is_empty()) {
            Self::Inline(data)
        } else {
            Self::Missing
        }
    }

    /// Displayable `src` for an `<img>`, or `None` when missing.
    pub fn to_src(&self, resolver: &dyn ImageUrlResolver) -> Option<String> {
        match self {
            Self::Stored(path) => Some(resolver.resolve(path)),
            Self::Inline(data) => Some(inline_data_url(data)),
            Self::Missing => None,
        }
    }
}

/// Build a `data:` URL for an inline base64 payload.
///
/// Payloads that are already `data:` URLs (any case) pass through. Otherwise the MIME
/// type is sniffed from the payload's magic bytes, defaulting to
/// [`DEFAULT_INLINE_MIME`].
pub fn inline_data_url(payload: &str) -> String {
    if payload
        .get(..5)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("data:"))
    {
        return payload.to_string();
    }
    format!("data:{};base64,{}", sniff_mime(payload), payload)
}

fn sniff_mime(payload: &str) -> &'static str {
    let bytes = payload.as_bytes();
    let prefix = &bytes[..bytes.len().min(MIME_SNIFF_CHARS)];

    let Ok(head) = SNIFF_ENGINE.decode(prefix) else {
        return DEFAULT_INLINE_MIME;
    };

    if head.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        "image/png"
    } else if head.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "image/jpeg"
    } else if head.starts_with(b"GIF87a") || head.starts_with(b"GIF89a") {
        "image/gif"
    } else if head.len() >= 12 && head.starts_with(b"RIFF") && &head[8..12] == b"WEBP" {
        "image/webp"
    } else if head.starts_with(b"BM") {
        "image/bmp"
    } else {
        DEFAULT_INLINE_MIME
    }
}

/// Parse a JSON array of references, rejecting duplicate ids.
pub fn parse_references(json: &str) -> Result<Vec<ImageReference>, ReferenceError> {
    let references: Vec<ImageReference> = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    for reference in &references {
        if !seen.insert(reference.id.as_str()) {
            return Err(ReferenceError::DuplicateId(reference.id.clone()));
        }
    }

    Ok(references)
}
