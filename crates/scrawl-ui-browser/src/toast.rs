//! Transient error toasts.
//!
//! The last-resort failure display for the rest of the application:
//! nothing here can fail in a way worth reporting, so broken environments
//! degrade to doing nothing.

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CustomEvent, Element};

use scrawl_ui_core::contract;
use scrawl_ui_core::notify::{
    response_error_message, Severity, SEND_ERROR_MESSAGE, TOAST_CLOSING_MS, TOAST_REMOVE_MS,
};

/// Warning-triangle icon shown next to the message.
const ALERT_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="32" height="32" viewBox="0 0 24 24"><path fill="currentColor" d="M12 2L1 21h22M12 6l7.53 13H4.47M11 10v4h2v-4m-2 6v2h2v-2"/></svg>"#;

// === Failure event detail bindings ===
//
// Structural bindings for the detail object the fragment loader attaches
// to its failure events. Only the fields this module reads are declared.

#[wasm_bindgen]
extern "C" {
    /// Detail payload of a response-error event.
    pub type FailureDetail;

    #[wasm_bindgen(method, getter, structural)]
    pub fn xhr(this: &FailureDetail) -> JsValue;

    /// The completed-but-failed request carried by the detail.
    pub type FailedRequest;

    #[wasm_bindgen(method, getter, structural)]
    pub fn status(this: &FailedRequest) -> u16;

    #[wasm_bindgen(method, getter, structural, js_name = responseText)]
    pub fn response_text(this: &FailedRequest) -> Option<String>;
}

/// Surface a request that completed with a non-success status.
///
/// Prefers the server-sent body; falls back to a generic message with the
/// numeric status.
pub fn on_response_error(event: &CustomEvent) {
    let detail: FailureDetail = event.detail().unchecked_into();
    let xhr = detail.xhr();
    if xhr.is_undefined() || xhr.is_null() {
        tracing::warn!("response-error event without a request in its detail");
        return;
    }
    let request: FailedRequest = xhr.unchecked_into();
    let body = request.response_text().unwrap_or_default();
    show_toast(&response_error_message(request.status(), &body));
}

/// Surface a request that never completed.
pub fn on_send_error() {
    show_toast(SEND_ERROR_MESSAGE);
}

/// Append an auto-dismissing alert toast to the document body.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(toast) = document.create_element("div") else {
        return;
    };

    toast.set_class_name(&format!(
        "{} {}",
        contract::TOAST_CLASS,
        Severity::Error.css_class()
    ));
    let _ = toast.set_attribute("role", "alert");
    let _ = toast.set_attribute("dir", "auto");

    // Icon | message | spacer, matching the stylesheet's grid.
    if let Ok(icon) = document.create_element("div") {
        icon.set_inner_html(ALERT_ICON);
        let _ = toast.append_child(&icon);
    }
    if let Ok(text) = document.create_element("div") {
        text.set_text_content(Some(message));
        let _ = toast.append_child(&text);
    }
    if let Ok(spacer) = document.create_element("div") {
        let _ = toast.append_child(&spacer);
    }

    let _ = body.append_child(&toast);
    schedule_dismissal(toast);
}

// A toast's lifecycle is not cancellable once shown.
fn schedule_dismissal(toast: Element) {
    let class_list = toast.class_list();
    Timeout::new(TOAST_CLOSING_MS, move || {
        let _ = class_list.add_1(contract::CLOSING_CLASS);
    })
    .forget();
    Timeout::new(TOAST_REMOVE_MS, move || toast.remove()).forget();
}
