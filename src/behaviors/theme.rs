//! Theme Switcher
//!
//! Light/dark preference persisted in localStorage. Dark mode is the
//! `dark-mode` class on `<body>`; the toggle icon shows the sun while dark and
//! the moon while light.

use leptos::prelude::*;
use web_sys::Element;

use crate::context::PageContext;
use crate::dom::{self, ClassSet};
use crate::storage::{BrowserStore, PreferenceStore};

const DARK_CLASS: &str = "dark-mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Anything other than an exact "dark" means light
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon class to show, and the one to clear
    pub fn icon_classes(self) -> (&'static str, &'static str) {
        match self {
            Theme::Dark => ("fa-sun", "fa-moon"),
            Theme::Light => ("fa-moon", "fa-sun"),
        }
    }
}

/// Stored preference; storage failures fall back to light
pub fn load_theme(store: &impl PreferenceStore, key: &str) -> Theme {
    match store.get(key) {
        Ok(value) => Theme::from_stored(value.as_deref()),
        Err(e) => {
            log::debug!("theme preference unreadable: {}", e);
            Theme::Light
        }
    }
}

pub fn save_theme(store: &impl PreferenceStore, key: &str, theme: Theme) {
    if let Err(e) = store.set(key, theme.as_str()) {
        log::debug!("theme preference not saved: {}", e);
    }
}

fn apply_theme(body: Option<&impl ClassSet>, icon: Option<&impl ClassSet>, theme: Theme) {
    if let Some(body) = body {
        body.toggle_class(DARK_CLASS, theme == Theme::Dark);
    }
    if let Some(icon) = icon {
        let (show, clear) = theme.icon_classes();
        icon.remove_class(clear);
        icon.add_class(show);
    }
}

/// Apply the saved theme and wire the toggle when present.
///
/// The saved theme is applied even on pages without a toggle.
pub fn attach(page: &PageContext) {
    let store = BrowserStore::new(page.window.clone());
    let key = page.config.theme_storage_key.clone();
    let body: Option<Element> = page.document.body().map(Into::into);

    let toggle = dom::query(&page.document, &page.config.selectors.theme_toggle);
    let icon = toggle
        .as_ref()
        .and_then(|t| dom::query(t, &page.config.selectors.theme_icon));

    let initial = load_theme(&store, &key);
    apply_theme(body.as_ref(), icon.as_ref(), initial);
    log::debug!("applied {} theme", initial.as_str());

    let theme = RwSignal::new(initial);

    if let Some(toggle) = toggle {
        dom::listen(&toggle, "click", move |_: web_sys::Event| {
            let next = theme.get_untracked().toggled();
            theme.set(next);
            apply_theme(body.as_ref(), icon.as_ref(), next);
            save_theme(&store, &key, next);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::cell::RefCell;
    use std::collections::BTreeSet;

    #[derive(Default)]
    struct Classes(RefCell<BTreeSet<String>>);

    impl Classes {
        fn with(names: &[&str]) -> Self {
            Self(RefCell::new(names.iter().map(|n| n.to_string()).collect()))
        }

        fn snapshot(&self) -> BTreeSet<String> {
            self.0.borrow().clone()
        }
    }

    impl ClassSet for Classes {
        fn add_class(&self, class: &str) {
            self.0.borrow_mut().insert(class.to_string());
        }

        fn remove_class(&self, class: &str) {
            self.0.borrow_mut().remove(class);
        }
    }

    fn names(list: &[&str]) -> BTreeSet<String> {
        list.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_from_stored() {
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("Dark")), Theme::Light);
        assert_eq!(Theme::from_stored(None), Theme::Light);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_apply_same_theme_twice_is_idempotent() {
        for theme in [Theme::Dark, Theme::Light] {
            let body = Classes::with(&["page"]);
            let icon = Classes::with(&["fas", "fa-moon"]);

            apply_theme(Some(&body), Some(&icon), theme);
            let (body_once, icon_once) = (body.snapshot(), icon.snapshot());
            apply_theme(Some(&body), Some(&icon), theme);

            assert_eq!(body.snapshot(), body_once);
            assert_eq!(icon.snapshot(), icon_once);
        }
    }

    #[test]
    fn test_apply_theme_classes() {
        let body = Classes::with(&["page"]);
        let icon = Classes::with(&["fas", "fa-moon"]);

        apply_theme(Some(&body), Some(&icon), Theme::Dark);
        assert_eq!(body.snapshot(), names(&["page", "dark-mode"]));
        assert_eq!(icon.snapshot(), names(&["fas", "fa-sun"]));

        apply_theme(Some(&body), Some(&icon), Theme::Light);
        assert_eq!(body.snapshot(), names(&["page"]));
        assert_eq!(icon.snapshot(), names(&["fas", "fa-moon"]));
    }

    #[test]
    fn test_apply_theme_without_icon() {
        let body = Classes::default();
        apply_theme(Some(&body), None::<&Classes>, Theme::Dark);
        assert_eq!(body.snapshot(), names(&["dark-mode"]));
    }

    #[test]
    fn test_icon_classes() {
        assert_eq!(Theme::Dark.icon_classes(), ("fa-sun", "fa-moon"));
        assert_eq!(Theme::Light.icon_classes(), ("fa-moon", "fa-sun"));
    }

    #[test]
    fn test_round_trip_through_store() {
        let store = MemoryStore::default();
        assert_eq!(load_theme(&store, "theme"), Theme::Light);

        save_theme(&store, "theme", Theme::Dark);
        // a reload only re-reads storage
        assert_eq!(load_theme(&store, "theme"), Theme::Dark);
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));

        save_theme(&store, "theme", Theme::Dark);
        assert_eq!(load_theme(&store, "theme"), Theme::Dark);

        save_theme(&store, "theme", Theme::Light);
        assert_eq!(load_theme(&store, "theme"), Theme::Light);
    }

    #[test]
    fn test_broken_storage_defaults_to_light() {
        let store = MemoryStore::broken();
        save_theme(&store, "theme", Theme::Dark);
        assert_eq!(load_theme(&store, "theme"), Theme::Light);
    }
}
