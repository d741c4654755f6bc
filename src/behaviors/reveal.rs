//! Scroll-Reveal Animator
//!
//! One shared `IntersectionObserver` adds `visible` to each fade target the
//! first time enough of it is on screen, then stops watching it.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::context::PageContext;
use crate::dom::{self, ClassSet};

const VISIBLE_CLASS: &str = "visible";

pub fn should_reveal(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio >= threshold
}

/// A fade target still under observation
pub trait RevealTarget: ClassSet {
    fn stop_watching(&self);
}

/// Reveal and release `target` once an entry reports enough of it visible.
/// Returns whether this entry revealed it.
pub fn handle_entry(target: &impl RevealTarget, is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    if !should_reveal(is_intersecting, ratio, threshold) {
        return false;
    }
    target.add_class(VISIBLE_CLASS);
    target.stop_watching();
    true
}

struct Observed<'a> {
    element: Element,
    observer: &'a IntersectionObserver,
}

impl ClassSet for Observed<'_> {
    fn add_class(&self, class: &str) {
        self.element.add_class(class);
    }

    fn remove_class(&self, class: &str) {
        self.element.remove_class(class);
    }
}

impl RevealTarget for Observed<'_> {
    fn stop_watching(&self) {
        self.observer.unobserve(&self.element);
    }
}

/// Observe every fade target with one shared observer
pub fn attach(page: &PageContext) -> Option<()> {
    let targets = dom::query_all(&page.document, &page.config.selectors.fade_targets);
    if targets.is_empty() {
        return None;
    }
    let threshold = page.config.thresholds.reveal_ratio;

    let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = Observed {
                    element: entry.target(),
                    observer: &observer,
                };
                handle_entry(&target, entry.is_intersecting(), entry.intersection_ratio(), threshold);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    let observer = match IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(err) => {
            log::warn!("IntersectionObserver unavailable: {:?}", err);
            return None;
        }
    };
    on_intersect.forget();

    for target in &targets {
        observer.observe(target);
    }
    log::debug!("watching {} fade targets", targets.len());

    Some(())
}

/// Hero content is visible from the start
pub fn reveal_hero(page: &PageContext) -> Option<()> {
    let hero = dom::first_match(&page.document, &page.config.selectors.heroes)?;
    dom::set_class(&hero, VISIBLE_CLASS, true);
    Some(())
}
