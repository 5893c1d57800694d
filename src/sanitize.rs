//! Text normalization shared by the exporters.

/// Characters that cannot appear in a C# identifier or resource name.
const EXCLUDED_IDENTIFIER_CHARACTERS: [char; 10] =
    [' ', '-', '&', '.', ',', '·', '\'', '!', ':', '/'];

/// Strips identifier-unsafe characters from a translation key.
///
/// ```
/// assert_eq!(translator::sanitize::sanitize_identifier("Sign in / Sign up"), "SigninSignup");
/// ```
pub fn sanitize_identifier(text: &str) -> String {
    text.chars()
        .filter(|c| !EXCLUDED_IDENTIFIER_CHARACTERS.contains(c))
        .collect()
}

/// Escapes `&` for `.resw` values and regenerated XML. Nothing else is escaped.
pub fn escape_for_markup(text: &str) -> String {
    text.replace('&', "&amp;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_removes_every_excluded_character() {
        assert_eq!(sanitize_identifier("Start -&.,·'!:/End"), "StartEnd");
    }

    #[test]
    fn test_sanitize_keeps_order_and_other_characters() {
        assert_eq!(sanitize_identifier("Don't stop_now!"), "Dontstop_now");
        assert_eq!(sanitize_identifier("Ünïcödé"), "Ünïcödé");
        assert_eq!(sanitize_identifier(""), "");
    }

    #[test]
    fn test_escape_ampersand() {
        assert_eq!(escape_for_markup("Start&End"), "Start&amp;End");
        assert_eq!(escape_for_markup("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_escape_leaves_angle_brackets() {
        assert_eq!(escape_for_markup("<b>\"x\"</b>"), "<b>\"x\"</b>");
    }
}
