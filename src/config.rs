//! Page Configuration
//!
//! Selectors, thresholds and timings the behaviors run with. Defaults match the
//! shipped markup; a page may override any subset through a JSON block:
//!
//! ```html
//! <script type="application/json" id="portfolio-config">
//!   { "contact_recipient": "me@example.com", "debug": true }
//! </script>
//! ```

use log::LevelFilter;
use serde::Deserialize;
use web_sys::Document;

/// Id of the optional inline JSON config element
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub selectors: Selectors,
    pub thresholds: Thresholds,
    pub timing: Timing,
    /// localStorage key holding "dark" or "light"
    pub theme_storage_key: String,
    /// Address the contact form hands to the mail client
    pub contact_recipient: String,
    /// Enable debug-level console logging
    pub debug: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            thresholds: Thresholds::default(),
            timing: Timing::default(),
            theme_storage_key: "theme".to_string(),
            contact_recipient: "mohammedsaber314@gmail.com".to_string(),
            debug: false,
        }
    }
}

impl PageConfig {
    /// Console verbosity: `Debug` with the `debug` flag, `Info` otherwise
    pub fn log_level(&self) -> LevelFilter {
        if self.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Read the inline config element, falling back to defaults when it is
    /// missing or malformed.
    pub fn load(document: &Document) -> Self {
        let Some(raw) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };

        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }
        }
    }
}

/// DOM contract of the page
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub menu_toggle: String,
    pub nav_links: String,
    /// Links inside the nav container
    pub nav_link_items: String,
    pub theme_toggle: String,
    /// Icon inside the theme toggle
    pub theme_icon: String,
    /// Header candidates, first match wins
    pub headers: Vec<String>,
    /// Hero content candidates, first match wins
    pub heroes: Vec<String>,
    pub filter_buttons: String,
    pub project_cards: String,
    pub fade_targets: String,
    pub anchors: String,
    pub contact_form: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_subject: String,
    pub contact_message: String,
    pub lightbox: String,
    pub lightbox_image: String,
    pub lightbox_title: String,
    pub lightbox_description: String,
    pub lightbox_close: String,
    pub lightbox_prev: String,
    pub lightbox_next: String,
    pub gallery_items: String,
    /// Resolved inside each gallery item
    pub gallery_image: String,
    pub gallery_heading: String,
    pub gallery_caption: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            menu_toggle: "#menu-toggle".into(),
            nav_links: "#nav-links".into(),
            nav_link_items: "a".into(),
            theme_toggle: "#theme-toggle".into(),
            theme_icon: "i".into(),
            headers: vec!["#header".into(), "#mainNav".into()],
            heroes: vec![".hero-content".into(), ".header-content".into()],
            filter_buttons: ".filter-btn".into(),
            project_cards: ".project-card".into(),
            fade_targets: ".fade-in".into(),
            anchors: r##"a[href^="#"]"##.into(),
            contact_form: "#contactForm".into(),
            contact_name: "#contact-name".into(),
            contact_email: "#contact-email".into(),
            contact_subject: "#contact-subject".into(),
            contact_message: "#contact-message".into(),
            lightbox: "#lightbox".into(),
            lightbox_image: "#lightbox-img".into(),
            lightbox_title: "#lightbox-title".into(),
            lightbox_description: "#lightbox-description".into(),
            lightbox_close: ".lightbox-close".into(),
            lightbox_prev: ".lightbox-prev".into(),
            lightbox_next: ".lightbox-next".into(),
            gallery_items: ".gallery-item".into(),
            gallery_image: "img".into(),
            gallery_heading: "h1, h2, h3, h4, h5, h6".into(),
            gallery_caption: "p".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Header gets `scrolled` strictly above this offset
    pub header_scrolled_px: f64,
    /// Back-to-top shows strictly above this offset
    pub back_to_top_px: f64,
    /// Visible fraction that triggers a reveal
    pub reveal_ratio: f64,
    /// Gap left between the header and an anchor target
    pub anchor_margin_px: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            header_scrolled_px: 50.0,
            back_to_top_px: 500.0,
            reveal_ratio: 0.1,
            anchor_margin_px: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Layout settle time before a shown card fades in
    pub card_show_delay_ms: u32,
    /// Fade-out duration before a hidden card leaves layout
    pub card_hide_delay_ms: u32,
    /// Delay before the lightbox image fades back in
    pub lightbox_fade_delay_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            card_show_delay_ms: 10,
            card_hide_delay_ms: 300,
            lightbox_fade_delay_ms: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_contract() {
        let config = PageConfig::default();
        assert_eq!(config.theme_storage_key, "theme");
        assert_eq!(config.thresholds.header_scrolled_px, 50.0);
        assert_eq!(config.thresholds.back_to_top_px, 500.0);
        assert_eq!(config.thresholds.reveal_ratio, 0.1);
        assert_eq!(config.thresholds.anchor_margin_px, 10.0);
        assert_eq!(config.timing.card_show_delay_ms, 10);
        assert_eq!(config.timing.card_hide_delay_ms, 300);
        assert_eq!(config.selectors.headers, vec!["#header", "#mainNav"]);
        assert_eq!(config.selectors.anchors, r##"a[href^="#"]"##);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let raw = r##"{
            "contact_recipient": "me@example.com",
            "thresholds": { "header_scrolled_px": 80 },
            "selectors": { "headers": ["#top"] },
            "unknown_field": 1
        }"##;
        let config = PageConfig::from_json(raw).unwrap();

        assert_eq!(config.contact_recipient, "me@example.com");
        assert_eq!(config.thresholds.header_scrolled_px, 80.0);
        assert_eq!(config.thresholds.back_to_top_px, 500.0);
        assert_eq!(config.selectors.headers, vec!["#top"]);
        assert_eq!(config.selectors.menu_toggle, "#menu-toggle");
        assert_eq!(config.theme_storage_key, "theme");
        assert!(!config.debug);
    }

    #[test]
    fn test_log_level_follows_debug_flag() {
        assert_eq!(PageConfig::default().log_level(), LevelFilter::Info);
        let config = PageConfig::from_json(r#"{"debug": true}"#).unwrap();
        assert_eq!(config.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(PageConfig::from_json("{ not json").is_err());
        assert!(PageConfig::from_json(r#"{"debug": "yes"}"#).is_err());
    }
}
