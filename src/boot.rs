use std::cell::Cell;

use gloo::events::EventListener;
use karmakazi_core::{SITE_STYLESHEET, STYLESHEET_ID};
use web_sys::Document;

use crate::controllers;
use crate::dom_surface::js_err;
use crate::exports;
use crate::perf;

thread_local! {
    static STARTED: Cell<bool> = Cell::new(false);
}

pub(crate) fn start() {
    let already_started = STARTED.with(|flag| flag.replace(true));
    if already_started {
        return;
    }
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        gloo::console::error!("no document; site controllers disabled");
        return;
    };
    if let Err(err) = install_stylesheet(&document) {
        gloo::console::warn!("stylesheet install failed", err);
    }
    perf::install_load_timing();
    if let Err(err) = exports::publish() {
        gloo::console::warn!("global export failed", err);
    }
    when_ready(&document, init_all);
}

fn when_ready(document: &Document, action: fn()) {
    if document.ready_state() != "loading" {
        action();
        return;
    }
    EventListener::once(document, "DOMContentLoaded", move |_| action()).forget();
}

fn init_all() {
    let ready = [
        exports::run_initializer("navigation", controllers::init_navigation),
        exports::run_initializer("scroll effects", controllers::init_scroll_effects),
        exports::run_initializer("animation previews", controllers::init_animation_previews),
        exports::run_initializer("page transitions", controllers::init_page_transitions),
    ];
    let count = ready.iter().filter(|ok| **ok).count();
    gloo::console::log!("site controllers ready", count as u32, "of", ready.len() as u32);
}

pub(crate) fn install_stylesheet(document: &Document) -> Result<bool, String> {
    if document.get_element_by_id(STYLESHEET_ID).is_some() {
        return Ok(false);
    }
    let head = document
        .head()
        .ok_or_else(|| "document has no head".to_string())?;
    let style = document.create_element("style").map_err(js_err)?;
    style.set_id(STYLESHEET_ID);
    style.set_text_content(Some(SITE_STYLESHEET));
    head.append_child(&style).map_err(js_err)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn stylesheet_is_installed_once() {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document");
        let first = install_stylesheet(&document).expect("install");
        let second = install_stylesheet(&document).expect("install again");
        assert!(first || document.get_element_by_id(STYLESHEET_ID).is_some());
        assert!(!second);
        let style = document.get_element_by_id(STYLESHEET_ID).expect("style node");
        let text = style.text_content().unwrap_or_default();
        assert!(text.contains("@keyframes fadeInUp"));
    }
}
