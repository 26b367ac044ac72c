//! Interaction state for a single reference chip.

/// Visibility of the full-size preview.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PreviewState {
    /// Preview is not rendered (default)
    #[default]
    Hidden,
    /// Preview overlay is rendered
    Visible,
}

impl PreviewState {
    pub fn open(&mut self) {
        *self = Self::Visible;
    }

    pub fn close(&mut self) {
        *self = Self::Hidden;
    }

    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }
}

/// User interactions a chip reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagAction {
    /// Thumbnail or file name activated
    OpenPreview,
    /// Preview asked to close
    ClosePreview,
    /// Remove button activated
    Remove,
}

impl TagAction {
    /// Whether applying this action can change the preview state.
    pub fn changes_preview(self) -> bool {
        !matches!(self, Self::Remove)
    }
}

/// Effects the chip hands to its parent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagEffect {
    /// Parent should drop the reference with this id.
    Remove(String),
}

/// Local state owned by one chip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TagState {
    pub preview: PreviewState,
}

impl TagState {
    /// Apply an action. Removal never touches the preview.
    pub fn dispatch(&mut self, action: TagAction, id: &str) -> Option<TagEffect> {
        match action {
            TagAction::OpenPreview => {
                self.preview.open();
                None
            }
            TagAction::ClosePreview => {
                self.preview.close();
                None
            }
            TagAction::Remove => Some(TagEffect::Remove(id.to_string())),
        }
    }
}
