//! DOM helpers for in-browser component tests.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

/// Fresh container attached to `<body>`, so delegated events reach it.
pub fn container() -> HtmlElement {
    let document = leptos::prelude::document();
    let el = document
        .create_element("div")
        .expect("create container")
        .unchecked_into::<HtmlElement>();
    document
        .body()
        .expect("document body")
        .append_child(&el)
        .expect("attach container");
    el
}

pub fn query(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).expect("valid selector")
}

pub fn class_selector(class: &str) -> String {
    format!(".{}", class.split_whitespace().next().unwrap_or(class))
}

pub fn click(el: &Element) {
    el.unchecked_ref::<HtmlElement>().click();
}

/// Let pending reactive updates flush.
pub async fn tick() {
    gloo_timers::future::TimeoutFuture::new(0).await;
}
