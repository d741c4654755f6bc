//! Back-to-Top Button Component
//!
//! Floating button, not part of the page markup, that fades in once the page
//! is scrolled far enough and smooth-scrolls back to the top.

use leptos::prelude::*;
use web_sys::Document;

use crate::context::ScrollContext;
use crate::dom;

const BACK_TO_TOP_CSS: &str = r#"
  #backToTop {
    position: fixed;
    bottom: 30px;
    right: 30px;
    width: 50px;
    height: 50px;
    background-color: var(--secondary-color);
    color: white;
    border: none;
    border-radius: 50%;
    cursor: pointer;
    opacity: 0;
    visibility: hidden;
    transform: translateY(20px);
    transition: all 0.3s ease;
    z-index: 999;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.2rem;
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
  }

  #backToTop:hover {
    background-color: var(--accent-color);
    transform: translateY(-5px);
    box-shadow: 0 6px 20px rgba(0, 0, 0, 0.2);
  }

  #backToTop.visible {
    opacity: 1;
    visibility: visible;
    transform: translateY(0);
  }

  @media (max-width: 768px) {
    #backToTop {
      bottom: 20px;
      right: 20px;
      width: 45px;
      height: 45px;
    }
  }
"#;

const LIGHTBOX_CSS: &str = r#"
  #lightbox {
    position: fixed;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(0, 0, 0, 0.9);
    opacity: 0;
    visibility: hidden;
    transition: opacity 0.3s ease, visibility 0.3s ease;
    z-index: 1000;
  }

  #lightbox.active {
    opacity: 1;
    visibility: visible;
  }

  #lightbox-img {
    max-width: 90vw;
    max-height: 75vh;
    border-radius: 8px;
    transition: opacity 0.3s ease;
  }

  .lightbox-close,
  .lightbox-prev,
  .lightbox-next {
    position: absolute;
    background: none;
    border: none;
    color: white;
    font-size: 2rem;
    cursor: pointer;
  }

  .lightbox-close { top: 20px; right: 30px; }
  .lightbox-prev { left: 30px; top: 50%; transform: translateY(-50%); }
  .lightbox-next { right: 30px; top: 50%; transform: translateY(-50%); }

  .gallery-item { cursor: pointer; }
"#;

/// Stylesheet for the button, plus the lightbox rules when it is in use
pub fn stylesheet(with_lightbox: bool) -> String {
    let mut css = BACK_TO_TOP_CSS.to_string();
    if with_lightbox {
        css.push_str(LIGHTBOX_CSS);
    }
    css
}

/// Append a `<style>` element to `<head>`
pub fn inject_styles(document: &Document, css: &str) {
    let Some(head) = document.head() else {
        return;
    };
    match document.create_element("style") {
        Ok(style) => {
            style.set_text_content(Some(css));
            let _ = head.append_child(&style);
        }
        Err(err) => log::warn!("stylesheet not injected: {:?}", err),
    }
}

/// True strictly above the threshold
pub fn is_visible(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Floating back-to-top button
///
/// Reads the scroll offset from `ScrollContext`.
#[component]
pub fn BackToTop(threshold: f64) -> impl IntoView {
    let scroll = expect_context::<ScrollContext>();
    let visible = move || is_visible(scroll.offset.get(), threshold);

    let scroll_to_top = move |_| {
        if let Some(win) = web_sys::window() {
            dom::smooth_scroll_to(&win, 0.0);
        }
    };

    view! {
        <button id="backToTop" title="Back to top" class:visible=visible on:click=scroll_to_top>
            <i class="fas fa-chevron-up"></i>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_visible_threshold() {
        assert!(!is_visible(0.0, 500.0));
        assert!(!is_visible(500.0, 500.0));
        assert!(is_visible(501.0, 500.0));
    }

    #[test]
    fn test_stylesheet_lightbox_rules() {
        let plain = stylesheet(false);
        assert!(plain.contains("#backToTop.visible"));
        assert!(!plain.contains("#lightbox"));

        let full = stylesheet(true);
        assert!(full.contains("#backToTop.visible"));
        assert!(full.contains("#lightbox.active"));
    }
}
