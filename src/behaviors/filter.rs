//! Project Filter
//!
//! Filter buttons carry `data-filter`, cards carry `data-category`. Cards are
//! shown and hidden in two phases so CSS transitions can animate both ways:
//! - show: `display: block` now, fade/slide in after the show delay
//! - hide: fade/slide out now, `display: none` after the hide delay

use std::rc::Rc;

use web_sys::Element;

use crate::config::Timing;
use crate::context::PageContext;
use crate::dom;

/// Filter value matching every card
pub const ALL: &str = "all";

const ACTIVE_CLASS: &str = "active";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTransition {
    Show,
    Hide,
}

impl CardTransition {
    /// Attribute values are compared as-is; a button without `data-filter`
    /// matches cards without `data-category`.
    pub fn for_card(filter: Option<&str>, category: Option<&str>) -> Self {
        if filter == Some(ALL) || category == filter {
            CardTransition::Show
        } else {
            CardTransition::Hide
        }
    }

    pub fn immediate(self) -> &'static [(&'static str, &'static str)] {
        match self {
            CardTransition::Show => &[("display", "block")],
            CardTransition::Hide => &[("opacity", "0"), ("transform", "translateY(20px)")],
        }
    }

    pub fn deferred(self) -> &'static [(&'static str, &'static str)] {
        match self {
            CardTransition::Show => &[("opacity", "1"), ("transform", "translateY(0)")],
            CardTransition::Hide => &[("display", "none")],
        }
    }

    pub fn delay_ms(self, timing: &Timing) -> u32 {
        match self {
            CardTransition::Show => timing.card_show_delay_ms,
            CardTransition::Hide => timing.card_hide_delay_ms,
        }
    }
}

/// Mark `items[selected]` on and every other item off
pub fn select_exclusive<T>(items: &[T], selected: usize, mut mark: impl FnMut(&T, bool)) {
    for item in items {
        mark(item, false);
    }
    if let Some(item) = items.get(selected) {
        mark(item, true);
    }
}

fn run_transition(card: &Element, transition: CardTransition, timing: &Timing) {
    dom::set_styles(card, transition.immediate());
    let card = card.clone();
    dom::defer(transition.delay_ms(timing), move || {
        dom::set_styles(&card, transition.deferred());
    });
}

pub fn attach(page: &PageContext) -> Option<()> {
    let selectors = &page.config.selectors;
    let buttons = dom::query_all(&page.document, &selectors.filter_buttons);
    let cards = dom::query_all(&page.document, &selectors.project_cards);
    if buttons.is_empty() || cards.is_empty() {
        return None;
    }

    let buttons = Rc::new(buttons);
    let cards = Rc::new(cards);

    for (index, button) in buttons.iter().enumerate() {
        let buttons = Rc::clone(&buttons);
        let cards = Rc::clone(&cards);
        let config = Rc::clone(&page.config);

        dom::listen(button, "click", move |_: web_sys::Event| {
            select_exclusive(&buttons, index, |b, on| dom::set_class(b, ACTIVE_CLASS, on));

            let filter = buttons[index].get_attribute("data-filter");
            log::debug!("filter: {:?}", filter);
            for card in cards.iter() {
                let category = card.get_attribute("data-category");
                let transition = CardTransition::for_card(filter.as_deref(), category.as_deref());
                run_transition(card, transition, &config.timing);
            }
        });
    }

    Some(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashMap;

    /// Inline style after both phases ran
    fn end_state(transition: CardTransition) -> HashMap<&'static str, &'static str> {
        let mut style = HashMap::new();
        style.extend(transition.immediate().iter().copied());
        style.extend(transition.deferred().iter().copied());
        style
    }

    #[test]
    fn test_for_card() {
        assert_eq!(CardTransition::for_card(Some("all"), Some("web")), CardTransition::Show);
        assert_eq!(CardTransition::for_card(Some("all"), None), CardTransition::Show);
        assert_eq!(CardTransition::for_card(Some("web"), Some("web")), CardTransition::Show);
        assert_eq!(CardTransition::for_card(Some("web"), Some("mobile")), CardTransition::Hide);
        assert_eq!(CardTransition::for_card(Some("web"), None), CardTransition::Hide);
        assert_eq!(CardTransition::for_card(None, None), CardTransition::Show);
        assert_eq!(CardTransition::for_card(None, Some("web")), CardTransition::Hide);
    }

    #[test]
    fn test_filter_end_states() {
        let categories = [Some("web"), Some("mobile"), None, Some("web")];
        for card in categories {
            let transition = CardTransition::for_card(Some("web"), card);
            let style = end_state(transition);
            if card == Some("web") {
                assert_eq!(style["display"], "block");
                assert_eq!(style["opacity"], "1");
                assert_eq!(style["transform"], "translateY(0)");
            } else {
                assert_eq!(style["display"], "none");
                assert_eq!(style["opacity"], "0");
            }
        }
    }

    #[test]
    fn test_delays() {
        let timing = Timing::default();
        assert_eq!(CardTransition::Show.delay_ms(&timing), 10);
        assert_eq!(CardTransition::Hide.delay_ms(&timing), 300);
    }

    #[test]
    fn test_select_exclusive_leaves_one_active() {
        let buttons: Vec<Cell<bool>> = vec![Cell::new(true), Cell::new(false), Cell::new(true)];
        for clicked in [1, 2, 0, 0] {
            select_exclusive(&buttons, clicked, |b, on| b.set(on));
            let active: Vec<usize> = (0..buttons.len()).filter(|&i| buttons[i].get()).collect();
            assert_eq!(active, vec![clicked]);
        }
    }
}
