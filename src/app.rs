//! Portfolio Page App
//!
//! Root component: attaches the page behaviors to the existing markup and
//! renders the back-to-top button at the end of `<body>`.

use leptos::prelude::*;

use crate::behaviors;
use crate::components::{inject_styles, stylesheet, BackToTop};
use crate::context::{PageContext, ScrollContext};

#[component]
pub fn App(page: PageContext) -> impl IntoView {
    let scroll = ScrollContext::track(&page.window);
    provide_context(scroll);

    let with_lightbox = behaviors::attach_all(&page, scroll);
    inject_styles(&page.document, &stylesheet(with_lightbox));

    log::info!("page behaviors ready");

    view! {
        <BackToTop threshold=page.config.thresholds.back_to_top_px />
    }
}
