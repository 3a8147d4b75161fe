//! HTML character reference decoding.
//!
//! The trivia service HTML-escapes question text by default (`&quot;`,
//! `&#039;`, `&Delta;`, ...). Browsers decode these for free; a terminal
//! does not, so every string is decoded before it reaches the store.
//! Unknown or malformed references are left as-is.

pub fn decode_html(input: &str) -> String {
    html_escape::decode_html_entities(input).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_named_and_numeric() {
        assert_eq!(decode_html("&quot;Hi&quot; &amp; bye"), "\"Hi\" & bye");
        assert_eq!(decode_html("Don&#039;t"), "Don't");
        assert_eq!(decode_html("&#x41;&#X42;"), "AB");
        assert_eq!(decode_html("Pok&eacute;mon"), "Pokémon");
    }

    #[test]
    fn test_decode_greek_and_typographic_entities() {
        assert_eq!(decode_html("&Delta;"), "\u{394}");
        assert_eq!(decode_html("5&prime;"), "5\u{2032}");
        assert_eq!(decode_html("a&lrm;b"), "a\u{200e}b");
        assert_eq!(decode_html("&Sigma;&alpha;"), "\u{3a3}\u{3b1}");
        assert_eq!(decode_html("&scaron;&ograve;&oelig;"), "\u{161}\u{f2}\u{153}");
    }

    #[test]
    fn test_leaves_plain_ampersands_alone() {
        assert_eq!(decode_html("no references"), "no references");
        assert_eq!(decode_html("a & b"), "a & b");
        assert_eq!(decode_html("&bogus;"), "&bogus;");
    }

    #[test]
    fn test_double_escaped_decodes_once() {
        assert_eq!(decode_html("&amp;quot;"), "&quot;");
    }
}
