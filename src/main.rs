//! Portfolio Page Frontend Entry Point

mod app;
mod behaviors;
mod components;
mod config;
mod context;
mod dom;
mod storage;

use app::App;
use context::PageContext;
use leptos::prelude::*;
use log::{Level, LevelFilter};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Window};

fn main() {
    console_error_panic_hook::set_once();
    // Debug records are filtered by max level until the page config is read
    wasm_logger::init(wasm_logger::Config::new(Level::Debug));
    log::set_max_level(LevelFilter::Info);

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    // Behaviors need the full page structure
    if document.ready_state() == "loading" {
        let doc = document.clone();
        let on_ready = Closure::once_into_js(move || start(window, doc));
        if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
            log::error!("cannot wait for DOMContentLoaded: {:?}", err);
        }
    } else {
        start(window, document);
    }
}

fn start(window: Window, document: Document) {
    let page = PageContext::new(window, document);
    log::set_max_level(page.config.log_level());
    mount_to_body(move || view! { <App page=page /> });
}
