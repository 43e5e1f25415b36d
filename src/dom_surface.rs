use gloo::timers::callback::Timeout;
use karmakazi_core::{Scheduler, Surface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlAnchorElement, HtmlElement, NodeList, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

pub(crate) fn js_err(err: JsValue) -> String {
    err.as_string()
        .or_else(|| {
            js_sys::JSON::stringify(&err)
                .ok()
                .map(String::from)
        })
        .unwrap_or_else(|| format!("{err:?}"))
}

/// The live document behind the [`Surface`] seam.
pub(crate) struct DomSurface {
    window: Window,
    document: Document,
}

impl DomSurface {
    pub(crate) fn new() -> Result<Self, String> {
        let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
        let document = window
            .document()
            .ok_or_else(|| "document unavailable".to_string())?;
        Ok(Self { window, document })
    }

    pub(crate) fn window(&self) -> &Window {
        &self.window
    }

    pub(crate) fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

impl Surface for DomSurface {
    type Node = Element;

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        match self.document.query_selector_all(selector) {
            Ok(list) => elements(list),
            Err(err) => {
                gloo::console::warn!("invalid selector", selector, js_err(err));
                Vec::new()
            }
        }
    }

    fn query_in(&self, scope: &Element, selector: &str) -> Option<Element> {
        scope.query_selector(selector).ok().flatten()
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn link_hostname(&self, node: &Element) -> Option<String> {
        node.dyn_ref::<HtmlAnchorElement>()
            .map(HtmlAnchorElement::hostname)
    }

    fn client_origin(&self, node: &Element) -> (f64, f64) {
        let rect = node.get_bounding_client_rect();
        (rect.left(), rect.top())
    }

    fn add_class(&self, node: &Element, class: &str) {
        if let Err(err) = node.class_list().add_1(class) {
            gloo::console::warn!("class add failed", class, js_err(err));
        }
    }

    fn remove_class(&self, node: &Element, class: &str) {
        if let Err(err) = node.class_list().remove_1(class) {
            gloo::console::warn!("class remove failed", class, js_err(err));
        }
    }

    fn toggle_class(&self, node: &Element, class: &str) -> bool {
        match node.class_list().toggle(class) {
            Ok(present) => present,
            Err(err) => {
                gloo::console::warn!("class toggle failed", class, js_err(err));
                node.class_list().contains(class)
            }
        }
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) {
        let Some(element) = node.dyn_ref::<HtmlElement>() else {
            return;
        };
        if let Err(err) = element.style().set_property(property, value) {
            gloo::console::warn!("style update failed", property, js_err(err));
        }
    }

    fn scroll_into_view(&self, node: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        node.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn page_hostname(&self) -> String {
        self.window.location().hostname().unwrap_or_default()
    }

    fn navigate(&self, href: &str) {
        if let Err(err) = self.window.location().set_href(href) {
            gloo::console::error!("navigation failed", href, js_err(err));
        }
    }
}

/// `setTimeout` through gloo; dropping a [`Timeout`] clears it.
pub(crate) struct GlooScheduler;

impl Scheduler for GlooScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }

    fn cancel(&self, handle: Timeout) {
        drop(handle);
    }
}
