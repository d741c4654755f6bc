//! Smooth Anchor Scroller
//!
//! In-page `#fragment` links scroll smoothly to their target, stopping just
//! below the header.

use web_sys::Event;

use crate::context::PageContext;
use crate::dom;

/// Target id of an in-page link; `None` for "", "#" and external hrefs
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document position to scroll to so the target clears the header
pub fn scroll_target(viewport_top: f64, scroll_offset: f64, header_height: f64, margin: f64) -> f64 {
    viewport_top + scroll_offset - header_height - margin
}

pub fn attach(page: &PageContext) -> Option<()> {
    let anchors = dom::query_all(&page.document, &page.config.selectors.anchors);
    if anchors.is_empty() {
        return None;
    }

    for anchor in &anchors {
        let link = anchor.clone();
        let page = page.clone();

        dom::listen(anchor, "click", move |ev: Event| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(target) = fragment_id(&href).and_then(|id| page.document.get_element_by_id(id)) else {
                return;
            };
            ev.prevent_default();

            let top = scroll_target(
                target.get_bounding_client_rect().top(),
                dom::scroll_offset(&page.window),
                page.header_height(),
                page.config.thresholds.anchor_margin_px,
            );
            dom::smooth_scroll_to(&page.window, top);
        });
    }

    log::debug!("smooth scrolling {} in-page links", anchors.len());
    Some(())
}
