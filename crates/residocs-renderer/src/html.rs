//! HTML escaping.

use std::borrow::Cow;

/// Escape HTML special characters.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping,
/// which is the common case for the French copy this crate emits.
pub(crate) fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a&b"), "a&amp;b");
        assert_eq!(escape_html("\"l'eau\""), "&quot;l&#x27;eau&quot;");
    }

    #[test]
    fn test_clean_input_is_borrowed() {
        let clean = "Référence API";
        assert!(matches!(escape_html(clean), Cow::Borrowed(_)));
    }
}
