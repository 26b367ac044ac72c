//! Full-size image preview overlay.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::labels;
use crate::core::ResolverContext;
use crate::models::ImageSource;

stylance::import_crate_style!(css, "src/components/preview_modal.module.css");

/// Modal preview of an attached image.
///
/// Closes on the close button, a backdrop click, or `Escape`.
#[component]
pub fn ImagePreviewModal(
    #[prop(optional_no_strip)] image_data: Option<String>,
    #[prop(optional_no_strip)] image_path: Option<String>,
    file_name: String,
    on_close: Callback<()>,
) -> impl IntoView {
    let resolver = use_context::<ResolverContext>().unwrap_or_default();
    let src = ImageSource::select(image_data.as_deref(), image_path.as_deref()).to_src(&resolver);

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            ev.stop_propagation();
            on_close.run(());
        }
    };

    // Focus the backdrop on mount for keyboard events
    let container_ref = NodeRef::<leptos::html::Div>::new();
    Effect::new(move || {
        if let Some(el) = container_ref.get() {
            let _ = el.focus();
        }
    });

    view! {
        <div
            node_ref=container_ref
            tabindex="-1"
            class=css::backdrop
            role="dialog"
            aria-modal="true"
            aria-label=file_name.clone()
            on:keydown=handle_keydown
            on:click=move |_| on_close.run(())
        >
            <div class=css::dialog on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <header class=css::header>
                    <span class=css::fileName title=file_name.clone()>{file_name.clone()}</span>
                    <button
                        class=css::closeButton
                        on:click=move |_| on_close.run(())
                        title=labels::CLOSE_PREVIEW
                        aria-label=labels::CLOSE_PREVIEW_ARIA
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </header>

                <div class=css::body>
                    <img src=src alt=file_name.clone() class=css::image />
                </div>
            </div>
        </div>
    }
}
