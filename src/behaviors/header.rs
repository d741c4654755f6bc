//! Header Scroll State

use leptos::prelude::*;

use crate::context::{PageContext, ScrollContext};
use crate::dom;

const SCROLLED_CLASS: &str = "scrolled";

/// True strictly above the threshold
pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Keep `scrolled` on the header in sync with the scroll offset
pub fn attach(page: &PageContext, scroll: ScrollContext) -> Option<()> {
    let header = page.header.clone()?;
    let threshold = page.config.thresholds.header_scrolled_px;

    Effect::new(move |_| {
        dom::set_class(&header, SCROLLED_CLASS, is_scrolled(scroll.offset.get(), threshold));
    });

    Some(())
}
