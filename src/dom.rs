//! DOM Helpers
//!
//! Selector queries, page-lifetime event subscriptions and deferred callbacks
//! shared by every behavior module.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, HtmlElement, NodeList, ScrollBehavior, ScrollToOptions, Window};

/// Anything that can resolve CSS selectors (the document or an element subtree)
pub trait QueryRoot {
    fn select(&self, selector: &str) -> Result<Option<Element>, JsValue>;
    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue>;
}

impl QueryRoot for Document {
    fn select(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }

    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

impl QueryRoot for Element {
    fn select(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }

    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

/// First element matching `selector`. Invalid selectors behave like no match.
pub fn query(root: &impl QueryRoot, selector: &str) -> Option<Element> {
    root.select(selector).ok().flatten()
}

/// All elements matching `selector`, in document order
pub fn query_all(root: &impl QueryRoot, selector: &str) -> Vec<Element> {
    let Ok(list) = root.select_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// First element matched by any selector, trying them in order
pub fn first_match(root: &impl QueryRoot, selectors: &[String]) -> Option<Element> {
    selectors.iter().find_map(|sel| query(root, sel))
}

/// Subscribe `handler` to `event` on `target` for the lifetime of the page.
///
/// Events that are not of type `E` are dropped.
pub fn listen<E, F>(target: &EventTarget, event: &str, mut handler: F)
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    });
    if let Err(err) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        log::warn!("failed to subscribe to `{}`: {:?}", event, err);
    }
    cb.forget();
}

/// Run `f` once after `ms` milliseconds. Pending callbacks are never cancelled.
pub fn defer(ms: u32, f: impl FnOnce() + 'static) {
    let _ = Timeout::new(ms, f).forget();
}

/// A mutable set of class names
pub trait ClassSet {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);

    fn toggle_class(&self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }
}

impl ClassSet for Element {
    fn add_class(&self, class: &str) {
        let _ = self.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.class_list().remove_1(class);
    }
}

/// Add or remove a class depending on `on`
pub fn set_class(el: &Element, class: &str, on: bool) {
    el.toggle_class(class, on);
}

/// Set inline style properties; non-HTML elements are skipped
pub fn set_styles(el: &Element, styles: &[(&str, &str)]) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let style = html.style();
        for (prop, value) in styles {
            let _ = style.set_property(prop, value);
        }
    }
}

/// Animated scroll of the window to vertical position `top`
pub fn smooth_scroll_to(window: &Window, top: f64) {
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

/// Current vertical scroll offset (0 when unavailable)
pub fn scroll_offset(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}
