use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

// Use LeftmostLongest to ensure longer entities are matched first (e.g., &amp; instead of &lt;)
static XML_UNESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
        .expect("Failed to build XML unescaper")
});

/// Escape the five XML special characters.
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

/// Unescape the five standard XML entities.
///
/// Unknown or malformed entities are left unchanged.
#[inline]
pub fn unescape_xml(s: &str) -> String {
    XML_UNESCAPER.replace_all(s, &["&", "<", ">", "\"", "'"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(
            escape_xml("<t>\"hi\"</t>"),
            "&lt;t&gt;&quot;hi&quot;&lt;/t&gt;"
        );
        assert_eq!(escape_xml("Mission & Brand 'Identity'"), "Mission &amp; Brand &apos;Identity&apos;");
        assert_eq!(escape_xml("plain text"), "plain text");
    }

    #[test]
    fn test_unescape() {
        assert_eq!(unescape_xml("&lt;a &amp; b&gt;"), "<a & b>");
        assert_eq!(unescape_xml("&quot;hello&apos;"), "\"hello'");
        // &amp; is matched first under LeftmostLongest
        assert_eq!(unescape_xml("&amp;lt;"), "&lt;");
        assert_eq!(unescape_xml("&invalid;"), "&invalid;");
        assert_eq!(unescape_xml("&amp"), "&amp");
    }

    proptest! {
        #[test]
        fn prop_escape_unescape_round_trip(s in "\\PC*") {
            prop_assert_eq!(unescape_xml(&escape_xml(&s)), s);
        }
    }
}
