//! Image Lightbox
//!
//! Gallery items open a full-screen viewer with previous/next navigation that
//! wraps around. Closed by the close control, a click on the backdrop, or
//! Escape; arrow keys navigate while open.

use std::rc::Rc;

use leptos::prelude::*;
use web_sys::{Element, Event, KeyboardEvent};

use crate::config::Selectors;
use crate::context::PageContext;
use crate::dom;

const ACTIVE_CLASS: &str = "active";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open(usize),
}

impl LightboxState {
    pub fn next(self, len: usize) -> Self {
        match self {
            LightboxState::Open(i) if len > 0 => LightboxState::Open((i + 1) % len),
            other => other,
        }
    }

    pub fn prev(self, len: usize) -> Self {
        match self {
            LightboxState::Open(i) if len > 0 => LightboxState::Open((i + len - 1) % len),
            other => other,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, LightboxState::Open(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Close,
    Prev,
    Next,
}

impl LightboxKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" | "Esc" => Some(LightboxKey::Close),
            "ArrowLeft" | "Left" => Some(LightboxKey::Prev),
            "ArrowRight" | "Right" => Some(LightboxKey::Next),
            _ => None,
        }
    }

    /// Keys only act on an open lightbox
    pub fn apply(self, state: LightboxState, len: usize) -> LightboxState {
        if !state.is_open() {
            return state;
        }
        match self {
            LightboxKey::Close => LightboxState::Closed,
            LightboxKey::Prev => state.prev(len),
            LightboxKey::Next => state.next(len),
        }
    }
}

/// Content of one gallery item
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryEntry {
    pub src: String,
    pub title: String,
    pub description: String,
}

impl GalleryEntry {
    fn from_item(item: &Element, selectors: &Selectors) -> Self {
        let text = |selector: &str| {
            dom::query(item, selector)
                .and_then(|el| el.text_content())
                .map(|t| t.trim().to_string())
                .unwrap_or_default()
        };
        Self {
            src: dom::query(item, &selectors.gallery_image)
                .and_then(|img| img.get_attribute("src"))
                .unwrap_or_default(),
            title: text(&selectors.gallery_heading),
            description: text(&selectors.gallery_caption),
        }
    }
}

/// Lightbox elements plus the gallery they display
struct Lightbox {
    container: Element,
    image: Element,
    title: Element,
    description: Element,
    body: Option<Element>,
    entries: Vec<GalleryEntry>,
    fade_delay_ms: u32,
    state: RwSignal<LightboxState>,
}

impl Lightbox {
    fn transition(&self, next: LightboxState) {
        let prev = self.state.get_untracked();
        self.state.set(next);
        match next {
            LightboxState::Open(index) => self.show(index),
            LightboxState::Closed if prev.is_open() => self.hide(),
            LightboxState::Closed => {}
        }
    }

    fn show(&self, index: usize) {
        let Some(entry) = self.entries.get(index) else {
            return;
        };
        let _ = self.image.set_attribute("src", &entry.src);
        let _ = self.image.set_attribute("alt", &entry.title);
        self.title.set_text_content(Some(&entry.title));
        self.description.set_text_content(Some(&entry.description));

        dom::set_styles(&self.image, &[("opacity", "0")]);
        let image = self.image.clone();
        dom::defer(self.fade_delay_ms, move || {
            dom::set_styles(&image, &[("opacity", "1")]);
        });

        dom::set_class(&self.container, ACTIVE_CLASS, true);
        if let Some(body) = &self.body {
            dom::set_styles(body, &[("overflow", "hidden")]);
        }
    }

    fn hide(&self) {
        dom::set_class(&self.container, ACTIVE_CLASS, false);
        if let Some(body) = &self.body {
            dom::set_styles(body, &[("overflow", "auto")]);
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Wire the gallery and lightbox. Inert unless the lightbox, its image/title/
/// description and at least one gallery item exist.
pub fn attach(page: &PageContext) -> Option<()> {
    let s = &page.config.selectors;
    let doc = &page.document;

    let container = dom::query(doc, &s.lightbox)?;
    let image = dom::query(doc, &s.lightbox_image)?;
    let title = dom::query(doc, &s.lightbox_title)?;
    let description = dom::query(doc, &s.lightbox_description)?;
    let items = dom::query_all(doc, &s.gallery_items);
    if items.is_empty() {
        return None;
    }

    let state = RwSignal::new(LightboxState::Closed);
    let lightbox = Rc::new(Lightbox {
        container: container.clone(),
        image,
        title,
        description,
        body: doc.body().map(Into::into),
        entries: items.iter().map(|item| GalleryEntry::from_item(item, s)).collect(),
        fade_delay_ms: page.config.timing.lightbox_fade_delay_ms,
        state,
    });

    for (index, item) in items.iter().enumerate() {
        let _ = item.set_attribute("tabindex", "0");

        let lb = Rc::clone(&lightbox);
        dom::listen(item, "click", move |_: Event| {
            lb.transition(LightboxState::Open(index));
        });

        let lb = Rc::clone(&lightbox);
        dom::listen(item, "keydown", move |ev: KeyboardEvent| {
            if ev.key() == "Enter" {
                lb.transition(LightboxState::Open(index));
            }
        });
    }

    if let Some(close) = dom::query(doc, &s.lightbox_close) {
        let lb = Rc::clone(&lightbox);
        dom::listen(&close, "click", move |_: Event| {
            lb.transition(LightboxState::Closed);
        });
    }

    if let Some(prev) = dom::query(doc, &s.lightbox_prev) {
        let lb = Rc::clone(&lightbox);
        dom::listen(&prev, "click", move |ev: Event| {
            ev.stop_propagation();
            lb.transition(lb.state.get_untracked().prev(lb.len()));
        });
    }

    if let Some(next) = dom::query(doc, &s.lightbox_next) {
        let lb = Rc::clone(&lightbox);
        dom::listen(&next, "click", move |ev: Event| {
            ev.stop_propagation();
            lb.transition(lb.state.get_untracked().next(lb.len()));
        });
    }

    // Backdrop only, not clicks bubbling up from the content
    {
        let lb = Rc::clone(&lightbox);
        dom::listen(&container, "click", move |ev: Event| {
            let on_backdrop = ev
                .target()
                .is_some_and(|t| js_sys::Object::is(&t, &lb.container));
            if on_backdrop {
                lb.transition(LightboxState::Closed);
            }
        });
    }

    {
        let lb = Rc::clone(&lightbox);
        dom::listen(doc, "keydown", move |ev: KeyboardEvent| {
            let state = lb.state.get_untracked();
            if !state.is_open() {
                return;
            }
            if let Some(key) = LightboxKey::from_key(&ev.key()) {
                lb.transition(key.apply(state, lb.len()));
            }
        });
    }

    log::debug!("lightbox ready with {} items", lightbox.len());
    Some(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_after_full_cycle() {
        for len in 1..6 {
            let mut state = LightboxState::Open(0);
            for _ in 0..len {
                state = state.next(len);
            }
            assert_eq!(state, LightboxState::Open(0));
        }
    }

    #[test]
    fn test_prev_from_first_is_last() {
        assert_eq!(LightboxState::Open(0).prev(4), LightboxState::Open(3));
        assert_eq!(LightboxState::Open(2).prev(4), LightboxState::Open(1));
        assert_eq!(LightboxState::Open(0).prev(1), LightboxState::Open(0));
    }

    #[test]
    fn test_navigation_keeps_closed_closed() {
        assert_eq!(LightboxState::Closed.next(3), LightboxState::Closed);
        assert_eq!(LightboxState::Closed.prev(3), LightboxState::Closed);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(LightboxKey::from_key("Escape"), Some(LightboxKey::Close));
        assert_eq!(LightboxKey::from_key("ArrowLeft"), Some(LightboxKey::Prev));
        assert_eq!(LightboxKey::from_key("ArrowRight"), Some(LightboxKey::Next));
        assert_eq!(LightboxKey::from_key("Enter"), None);
        assert_eq!(LightboxKey::from_key("a"), None);
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        for key in [LightboxKey::Close, LightboxKey::Prev, LightboxKey::Next] {
            assert_eq!(key.apply(LightboxState::Closed, 5), LightboxState::Closed);
        }
    }

    #[test]
    fn test_keys_while_open() {
        let open = LightboxState::Open(1);
        assert_eq!(LightboxKey::Close.apply(open, 3), LightboxState::Closed);
        assert_eq!(LightboxKey::Prev.apply(open, 3), LightboxState::Open(0));
        assert_eq!(LightboxKey::Next.apply(open, 3), LightboxState::Open(2));
        assert_eq!(LightboxKey::Next.apply(LightboxState::Open(2), 3), LightboxState::Open(0));
    }
}
