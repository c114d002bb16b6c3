//! Calling-convention classification.

use memchr::memmem;

/// Token evasions use to opt into the shared utilities object.
pub const UTILS_TOKEN: &str = "withUtils";

/// Whether a unit's payload expects the shared `utils` argument.
///
/// The whole unit text is scanned, not just the extracted body, so an
/// evasion wrapped in the plugin's `withUtils` helper is flagged even when
/// the token sits outside the payload itself. The over-match is harmless:
/// a payload that never reads the argument simply ignores it.
pub fn needs_utils(text: &str) -> bool {
    memmem::find(text.as_bytes(), UTILS_TOKEN.as_bytes()).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_token() {
        assert!(needs_utils(
            "const withUtils = require('../_utils/withUtils');"
        ));
    }

    #[test]
    fn no_token_means_no_utils() {
        assert!(!needs_utils("page.evaluateOnNewDocument(() => {})"));
    }

    #[test]
    fn token_outside_payload_body_still_counts() {
        let src = "withUtils(page).evaluateOnNewDocument(() => { plain(); })";
        assert!(needs_utils(src));
    }
}
