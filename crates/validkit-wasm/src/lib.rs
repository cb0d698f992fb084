//! validkit WASM bindings
//!
//! WebAssembly exports for real-time client-side validation, backed by the
//! same predicates the server uses. The URL export is syntax-only; a
//! browser has no capability registry to consult, so "can this be opened"
//! stays a host-side question.

use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email(email: &str) -> bool {
    validkit::is_valid_email(email)
}

#[wasm_bindgen(js_name = isValidEmailBasic)]
pub fn is_valid_email_basic(email: &str) -> bool {
    validkit::is_valid_email_basic(email)
}

#[wasm_bindgen(js_name = isValidPhoneNumber)]
pub fn is_valid_phone_number(phone: &str) -> bool {
    validkit::is_valid_phone_number(phone)
}

#[wasm_bindgen(js_name = isEmpty)]
pub fn is_empty(text: Option<String>) -> bool {
    validkit::is_empty(text.as_deref())
}

#[wasm_bindgen(js_name = isValidPassword)]
pub fn is_valid_password(password: &str) -> bool {
    validkit::is_valid_password(password)
}

#[wasm_bindgen(js_name = isValidDate)]
pub fn is_valid_date(text: &str, format: &str) -> bool {
    validkit::is_valid_date(text, format)
}

#[wasm_bindgen(js_name = isInRange)]
pub fn is_in_range(value: i64, low: i64, high: i64) -> bool {
    validkit::is_in_range(value, low, high)
}

#[wasm_bindgen(js_name = isValidUrl)]
pub fn is_valid_url(text: &str) -> bool {
    validkit::is_valid_url(text)
}

/// Web-scheme (http/https) URL check, the common case for link fields.
#[wasm_bindgen(js_name = isValidWebUrl)]
pub fn is_valid_web_url(text: &str) -> bool {
    validkit::is_valid_url_with(text, &validkit::WebSchemes)
}
