//! Page Behaviors
//!
//! Independent modules wired onto the static markup. A module whose elements
//! are missing from the page stays inert.

mod anchor_scroll;
mod contact;
mod filter;
mod header;
mod lightbox;
mod nav_menu;
mod reveal;
mod theme;

use crate::context::{PageContext, ScrollContext};

fn report(module: &str, attached: Option<()>) {
    if attached.is_none() {
        log::debug!("{}: no matching elements, skipped", module);
    }
}

/// Attach every behavior module to the page.
///
/// Returns whether the lightbox is in use, so its styles get injected.
pub fn attach_all(page: &PageContext, scroll: ScrollContext) -> bool {
    theme::attach(page);

    report("nav menu", nav_menu::attach(page));
    report("header", header::attach(page, scroll));
    report("filter", filter::attach(page));
    report("reveal", reveal::attach(page));
    report("hero", reveal::reveal_hero(page));
    report("anchors", anchor_scroll::attach(page));
    report("contact", contact::attach(page));

    let lightbox = lightbox::attach(page);
    report("lightbox", lightbox);
    lightbox.is_some()
}
