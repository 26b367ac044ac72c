//! Inline chip for one attached image.
//!
//! Shows a thumbnail, the file name and a remove button. Clicking the
//! thumbnail or the name opens [`ImagePreviewModal`].

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::ImagePreviewModal;
use crate::config::labels;
use crate::core::ResolverContext;
use crate::models::{ImageSource, TagAction, TagEffect, TagState};

stylance::import_crate_style!(css, "src/components/image_ref_tag.module.css");

/// Reference chip.
///
/// The component body runs once per mount; props are plain values, so
/// identical props never cause a re-render.
///
/// # Props
/// - `id`: Forwarded verbatim to `on_remove`
/// - `file_name`: Label, truncated by CSS with the full text in `title`
/// - `image_data`: Inline base64 payload
/// - `image_path`: Stored image path, preferred over `image_data`
/// - `on_remove`: Invoked with `id` when the remove button is clicked
#[component]
pub fn ImageRefTag(
    id: String,
    file_name: String,
    #[prop(optional_no_strip)] image_data: Option<String>,
    #[prop(optional_no_strip)] image_path: Option<String>,
    on_remove: Callback<String>,
) -> impl IntoView {
    let resolver = use_context::<ResolverContext>().unwrap_or_default();
    let thumbnail_src =
        ImageSource::select(image_data.as_deref(), image_path.as_deref()).to_src(&resolver);

    let id = StoredValue::new(id);
    let state = RwSignal::new(TagState::default());

    let dispatch = move |action: TagAction| {
        let effect = id.with_value(|id| {
            if action.changes_preview() {
                state.try_update(|s| s.dispatch(action, id)).flatten()
            } else {
                // Removal reads a copy so preview subscribers aren't notified
                state.get_untracked().dispatch(action, id)
            }
        });

        if let Some(TagEffect::Remove(id)) = effect {
            on_remove.run(id);
        }
    };

    let preview_visible = move || state.with(|s| s.preview.is_visible());
    let close_preview = Callback::new(move |_: ()| dispatch(TagAction::ClosePreview));

    let on_remove_click = move |ev: ev::MouseEvent| {
        // Keep the click from reaching the preview handlers
        ev.stop_propagation();
        dispatch(TagAction::Remove);
    };

    let preview_name = file_name.clone();

    view! {
        <div class=css::tag>
            <div
                class=css::thumbnail
                on:click=move |_| dispatch(TagAction::OpenPreview)
            >
                <img src=thumbnail_src alt=file_name.clone() class=css::thumbnailImage />
                <div class=css::overlay>
                    <Icon icon=ic::EXPAND />
                </div>
            </div>

            <span
                class=css::fileName
                title=file_name.clone()
                on:click=move |_| dispatch(TagAction::OpenPreview)
            >
                {file_name.clone()}
            </span>

            <button
                class=css::removeButton
                on:click=on_remove_click
                title=labels::REMOVE
                aria-label=labels::REMOVE
            >
                <Icon icon=ic::CLOSE />
            </button>
        </div>

        <Show when=preview_visible>
            <ImagePreviewModal
                image_data=image_data.clone()
                image_path=image_path.clone()
                file_name=preview_name.clone()
                on_close=close_preview
            />
        </Show>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::sync::{Arc, Mutex};

    use leptos::prelude::*;
    use wasm_bindgen_test::*;
    use web_sys::Element;

    use super::{ImageRefTag, css};
    use crate::components::test_dom::{class_selector, click, container, query, tick};
    use crate::config::labels;
    use crate::core::{ResolverContext, StorageResolver};

    wasm_bindgen_test_configure!(run_in_browser);

    const PNG_PIXEL: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

    struct Chip {
        root: Element,
        removed: Arc<Mutex<Vec<String>>>,
    }

    impl Chip {
        fn dialog(&self) -> Option<Element> {
            query(&self.root, "[role=dialog]")
        }

        fn part(&self, class: &str) -> Element {
            query(&self.root, &class_selector(class)).expect("chip part rendered")
        }

        fn removed(&self) -> Vec<String> {
            self.removed.lock().unwrap().clone()
        }
    }

    fn mount_chip(image_data: Option<&str>, image_path: Option<&str>) -> Chip {
        let root = container();
        let removed = Arc::new(Mutex::new(Vec::new()));

        let sink = removed.clone();
        let image_data = image_data.map(String::from);
        let image_path = image_path.map(String::from);
        mount_to(root.clone(), move || {
            provide_context(ResolverContext::new(StorageResolver::new("/store")));
            view! {
                <ImageRefTag
                    id="ref-1".to_string()
                    file_name="diagram.png".to_string()
                    image_data=image_data
                    image_path=image_path
                    on_remove=Callback::new(move |id: String| sink.lock().unwrap().push(id))
                />
            }
        })
        .forget();

        Chip {
            root: root.into(),
            removed,
        }
    }

    fn preview_src(dialog: &Element) -> Option<String> {
        query(dialog, "img").and_then(|img| img.get_attribute("src"))
    }

    #[wasm_bindgen_test]
    async fn test_thumbnail_opens_preview() {
        let chip = mount_chip(None, Some("img/diagram.png"));
        assert!(chip.dialog().is_none());

        click(&chip.part(css::thumbnail));
        tick().await;

        let dialog = chip.dialog().expect("preview mounted");
        assert_eq!(dialog.get_attribute("aria-label").as_deref(), Some("diagram.png"));
        assert_eq!(preview_src(&dialog).as_deref(), Some("/store/img/diagram.png"));
        assert!(chip.removed().is_empty());
    }

    #[wasm_bindgen_test]
    async fn test_label_opens_preview_with_inline_data() {
        let chip = mount_chip(Some(PNG_PIXEL), None);

        click(&chip.part(css::fileName));
        tick().await;

        let dialog = chip.dialog().expect("preview mounted");
        assert_eq!(
            preview_src(&dialog),
            Some(format!("data:image/png;base64,{}", PNG_PIXEL))
        );
    }

    #[wasm_bindgen_test]
    async fn test_preview_receives_both_sources() {
        let chip = mount_chip(Some(PNG_PIXEL), Some("img/diagram.png"));

        click(&chip.part(css::thumbnail));
        tick().await;

        let dialog = chip.dialog().expect("preview mounted");
        assert_eq!(preview_src(&dialog).as_deref(), Some("/store/img/diagram.png"));
    }

    #[wasm_bindgen_test]
    async fn test_remove_reports_id_without_preview() {
        let chip = mount_chip(None, Some("img/diagram.png"));

        click(&chip.part(css::removeButton));
        tick().await;

        assert_eq!(chip.removed(), ["ref-1"]);
        assert!(chip.dialog().is_none());
    }

    #[wasm_bindgen_test]
    async fn test_close_button_unmounts_preview() {
        let chip = mount_chip(None, Some("img/diagram.png"));

        click(&chip.part(css::thumbnail));
        tick().await;
        let dialog = chip.dialog().expect("preview mounted");

        let close = query(&dialog, "header button").expect("close button");
        assert_eq!(
            close.get_attribute("aria-label").as_deref(),
            Some(labels::CLOSE_PREVIEW_ARIA)
        );
        click(&close);
        tick().await;

        assert!(chip.dialog().is_none());
        assert!(!chip.root.contains(Some(&*dialog)));
        assert!(chip.removed().is_empty());
    }

    #[wasm_bindgen_test]
    async fn test_missing_source_has_no_src() {
        let chip = mount_chip(None, None);
        let thumb = query(&chip.part(css::thumbnail), "img").expect("thumbnail image");
        assert_eq!(thumb.get_attribute("src"), None);
    }
}
