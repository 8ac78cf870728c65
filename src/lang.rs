//! Language switching.
//!
//! Switching is a full page navigation, not an asynchronous update: the
//! browser is sent to the switch path and the server re-renders everything
//! in the chosen language.

/// Base path of the language-switch endpoint.
pub const SWITCH_LANGUAGE_BASE_PATH: &str = "/switch-language";

/// Languages the deployment ships translations for. The switch path accepts
/// any code; this catalogue exists for UIs that render the chooser.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] =
    &[("en", "English"), ("es", "Spanish"), ("pt", "Portuguese")];

/// Navigation target for one language code, encoded as a path segment.
pub fn switch_path(code: &str) -> String {
    format!(
        "{}/{}",
        SWITCH_LANGUAGE_BASE_PATH,
        urlencoding::encode(code)
    )
}
