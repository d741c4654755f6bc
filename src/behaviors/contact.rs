//! Contact Form Dispatcher
//!
//! Submitting the contact form opens the visitor's mail client with a
//! prefilled `mailto:` link instead of posting anywhere.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::context::PageContext;
use crate::dom;

/// Characters left alone by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Whitespace and line terminators as JavaScript's `String.prototype.trim` sees them
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

pub fn js_trim(value: &str) -> &str {
    value.trim_matches(is_js_whitespace)
}

/// Trimmed form contents
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(name: &str, email: &str, subject: &str, message: &str) -> Self {
        Self {
            name: js_trim(name).to_string(),
            email: js_trim(email).to_string(),
            subject: js_trim(subject).to_string(),
            message: js_trim(message).to_string(),
        }
    }

    pub fn subject_line(&self) -> String {
        if self.subject.is_empty() {
            format!("Message from {}", self.name)
        } else {
            format!("{} - {}", self.name, self.subject)
        }
    }

    /// Every line is kept even when its field is empty
    pub fn body(&self) -> String {
        [
            format!("Name: {}", self.name),
            format!("Email: {}", self.email),
            String::new(),
            "Message:".to_string(),
            self.message.clone(),
        ]
        .join("\n")
    }

    pub fn mailto_uri(&self, recipient: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            encode_component(&self.subject_line()),
            encode_component(&self.body())
        )
    }
}

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Value of an input or textarea, empty when missing
fn field_value(document: &Document, selector: &str) -> String {
    let Some(el) = dom::query(document, selector) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

pub fn attach(page: &PageContext) -> Option<()> {
    let form = dom::query(&page.document, &page.config.selectors.contact_form)?;
    let page = page.clone();
    let form_el = form.clone();

    dom::listen(&form, "submit", move |ev: Event| {
        ev.prevent_default();

        let s = &page.config.selectors;
        let message = ContactMessage::new(
            &field_value(&page.document, &s.contact_name),
            &field_value(&page.document, &s.contact_email),
            &field_value(&page.document, &s.contact_subject),
            &field_value(&page.document, &s.contact_message),
        );

        let uri = message.mailto_uri(&page.config.contact_recipient);
        if let Err(err) = page.window.location().set_href(&uri) {
            log::warn!("mail client hand-off failed: {:?}", err);
        }
        if let Some(form) = form_el.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    });

    Some(())
}
