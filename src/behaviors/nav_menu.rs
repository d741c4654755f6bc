//! Navigation Menu
//!
//! Mobile menu toggle. The links container carries `active` while open and the
//! toggle shows a bars / times glyph accordingly.

use leptos::prelude::*;

use crate::context::PageContext;
use crate::dom;

const OPEN_CLASS: &str = "active";
const BARS_ICON: &str = r#"<i class="fas fa-bars"></i>"#;
const TIMES_ICON: &str = r#"<i class="fas fa-times"></i>"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    pub fn toggle(self) -> Self {
        Self { open: !self.open }
    }

    /// Following a link always closes the menu
    pub fn link_clicked(self) -> Self {
        Self { open: false }
    }

    pub fn is_open(self) -> bool {
        self.open
    }

    /// Toggle contents for this state
    pub fn icon(self) -> &'static str {
        if self.open {
            TIMES_ICON
        } else {
            BARS_ICON
        }
    }
}

/// Wire the toggle and its links
pub fn attach(page: &PageContext) -> Option<()> {
    let selectors = &page.config.selectors;
    let toggle = dom::query(&page.document, &selectors.menu_toggle)?;
    let links = dom::query(&page.document, &selectors.nav_links)?;

    let menu = RwSignal::new(MenuState::new(links.class_list().contains(OPEN_CLASS)));

    // Markup is left as authored until the first change
    {
        let toggle = toggle.clone();
        let links = links.clone();
        Effect::new(move |ran: Option<()>| {
            let state = menu.get();
            if ran.is_some() {
                dom::set_class(&links, OPEN_CLASS, state.is_open());
                toggle.set_inner_html(state.icon());
            }
        });
    }

    dom::listen(&toggle, "click", move |_: web_sys::Event| {
        menu.update(|m| *m = m.toggle());
    });

    for link in dom::query_all(&links, &selectors.nav_link_items) {
        dom::listen(&link, "click", move |_: web_sys::Event| {
            menu.update(|m| *m = m.link_clicked());
        });
    }

    Some(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_open_state() {
        let closed = MenuState::default();
        assert!(!closed.is_open());
        assert!(closed.toggle().is_open());
        assert!(!closed.toggle().toggle().is_open());
        assert!(!MenuState::new(true).toggle().is_open());
    }

    #[test]
    fn test_link_click_closes() {
        assert_eq!(MenuState::new(true).link_clicked(), MenuState::new(false));
        assert_eq!(MenuState::new(false).link_clicked(), MenuState::new(false));
        assert_eq!(MenuState::default().toggle().link_clicked().icon(), BARS_ICON);
    }

    #[test]
    fn test_icon_follows_state() {
        assert_eq!(MenuState::new(false).icon(), r#"<i class="fas fa-bars"></i>"#);
        assert_eq!(MenuState::new(true).icon(), r#"<i class="fas fa-times"></i>"#);
    }
}
