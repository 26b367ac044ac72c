//! Strip of reference chips for the current collection.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::ImageRefTag;
use crate::components::icons as ic;
use crate::config::labels;

stylance::import_crate_style!(css, "src/components/reference_list.module.css");

/// Renders every reference in [`AppContext`] as a chip.
///
/// Chips are keyed by the whole reference: unchanged references keep their
/// DOM, and a reference edited under the same id gets a fresh chip.
#[component]
pub fn ImageRefList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let on_remove = Callback::new(move |id: String| ctx.remove(&id));

    view! {
        <Show
            when=move || ctx.references.with(|refs| !refs.is_empty())
            fallback=|| view! {
                <span class=css::empty>
                    <Icon icon=ic::IMAGE />
                    {labels::EMPTY}
                </span>
            }
        >
            <div class=css::list>
                <For
                    each=move || ctx.references.get()
                    key=|reference| reference.clone()
                    children=move |reference| view! {
                        <ImageRefTag
                            id=reference.id
                            file_name=reference.file_name
                            image_data=reference.image_data
                            image_path=reference.image_path
                            on_remove=on_remove
                        />
                    }
                />
            </div>
        </Show>
    }
}
