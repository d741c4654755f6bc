//! UI Components
//!
//! Leptos components rendered by the app, as opposed to behaviors attached to
//! existing markup.

mod back_to_top;

pub use back_to_top::{inject_styles, stylesheet, BackToTop};
