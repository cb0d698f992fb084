//! URL validation with an injectable capability hook
//!
//! Whether a URL can actually be opened depends on the host environment,
//! not on syntax. The host's answer is modelled as a [`UrlCapability`] the
//! caller injects, so the predicates here stay pure and testable without a
//! live host.

use url::Url;

/// Host-environment hook answering "can this URL scheme be handled?".
///
/// Implemented for plain closures, so a test or an embedding application
/// can pass `|scheme: &str| ...` directly.
pub trait UrlCapability {
    fn can_handle(&self, scheme: &str) -> bool;
}

impl<F> UrlCapability for F
where
    F: Fn(&str) -> bool,
{
    fn can_handle(&self, scheme: &str) -> bool {
        self(scheme)
    }
}

/// Capability covering the web schemes any host can open.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebSchemes;

impl UrlCapability for WebSchemes {
    fn can_handle(&self, scheme: &str) -> bool {
        matches!(scheme, "http" | "https")
    }
}

/// Validates URL syntax only: true iff the string parses as an absolute URL.
pub fn is_valid_url(text: &str) -> bool {
    Url::parse(text).is_ok()
}

/// Validates URL syntax and asks the injected capability whether the parsed
/// scheme can be handled. A scheme the capability cannot confirm yields
/// `false`; nothing is raised.
pub fn is_valid_url_with<C: UrlCapability>(text: &str, capability: &C) -> bool {
    match Url::parse(text) {
        Ok(parsed) => capability.can_handle(parsed.scheme()),
        Err(_) => false,
    }
}
