//! Page Context
//!
//! Handles shared by the behavior modules.

use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::config::PageConfig;
use crate::dom;

/// Browser handles plus the resolved configuration
#[derive(Clone)]
pub struct PageContext {
    pub window: Window,
    pub document: Document,
    pub config: Rc<PageConfig>,
    /// Page header, read by both the scroll state and the anchor scroller
    pub header: Option<HtmlElement>,
}

impl PageContext {
    pub fn new(window: Window, document: Document) -> Self {
        let config = PageConfig::load(&document);
        let header = dom::first_match(&document, &config.selectors.headers)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        Self {
            window,
            document,
            config: Rc::new(config),
            header,
        }
    }

    /// Rendered header height, 0 without a header
    pub fn header_height(&self) -> f64 {
        self.header.as_ref().map_or(0.0, |h| h.offset_height() as f64)
    }
}

/// Vertical scroll offset as a signal, provided via context
#[derive(Clone, Copy)]
pub struct ScrollContext {
    pub offset: ReadSignal<f64>,
}

impl ScrollContext {
    /// Seed with the current offset and follow every window `scroll` event
    pub fn track(window: &Window) -> Self {
        let (offset, set_offset) = signal(dom::scroll_offset(window));
        let win = window.clone();
        dom::listen(window, "scroll", move |_: web_sys::Event| {
            set_offset.set(dom::scroll_offset(&win));
        });
        Self { offset }
    }
}
