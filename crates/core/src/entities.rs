//! HTML character reference decoding.
//!
//! The exporter stores slide markup entity-escaped inside each body section,
//! so sections are decoded before the container tag is searched for.
//! Decoding follows the HTML5 rules for text content: the full named
//! reference table, legacy names without a trailing `;`, and numeric
//! references with the windows-1252 remap for C1 code points.

use encoding_rs::WINDOWS_1252;
use quick_xml::escape::resolve_html5_entity;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// One character reference, without the leading `&`.
static CHAR_REF_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]+;?|#[xX][0-9a-fA-F]+;?|[^\t\n\f <&#;]{1,32};?)").unwrap()
});

/// Named references that HTML5 also recognizes without a terminating `;`.
const LEGACY_NAMES: &[&str] = &[
    "AElig", "AMP", "Aacute", "Acirc", "Agrave", "Aring", "Atilde", "Auml", "COPY", "Ccedil",
    "ETH", "Eacute", "Ecirc", "Egrave", "Euml", "GT", "Iacute", "Icirc", "Igrave", "Iuml", "LT",
    "Ntilde", "Oacute", "Ocirc", "Ograve", "Oslash", "Otilde", "Ouml", "QUOT", "REG", "THORN",
    "Uacute", "Ucirc", "Ugrave", "Uuml", "Yacute", "aacute", "acirc", "acute", "aelig", "agrave",
    "amp", "aring", "atilde", "auml", "brvbar", "ccedil", "cedil", "cent", "copy", "curren",
    "deg", "divide", "eacute", "ecirc", "egrave", "eth", "euml", "frac12", "frac14", "frac34",
    "gt", "iacute", "icirc", "iexcl", "igrave", "iquest", "iuml", "laquo", "lt", "macr",
    "micro", "middot", "nbsp", "not", "ntilde", "oacute", "ocirc", "ograve", "ordf", "ordm",
    "oslash", "otilde", "ouml", "para", "plusmn", "pound", "quot", "raquo", "reg", "sect", "shy",
    "sup1", "sup2", "sup3", "szlig", "thorn", "times", "uacute", "ucirc", "ugrave", "uml",
    "uuml", "yacute", "yen", "yuml",
];

/// Decode every HTML character reference in `s`.
///
/// Unknown names are copied through unchanged. Numeric references outside
/// the Unicode range or to surrogates become U+FFFD; references to
/// noncharacters and most control codes are dropped.
pub fn decode_entities(s: &str) -> Cow<'_, str> {
    if !s.contains('&') {
        return Cow::Borrowed(s);
    }
    CHAR_REF_REGEX.replace_all(s, |caps: &Captures| decode_reference(&caps[1]))
}

/// Decode one reference body (the text after `&`).
fn decode_reference(body: &str) -> String {
    if let Some(num) = body.strip_prefix('#') {
        let digits = num.trim_end_matches(';');
        let code = match digits.strip_prefix(|c: char| c == 'x' || c == 'X') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => digits.parse::<u32>().ok(),
        };
        return numeric_char(code).map(String::from).unwrap_or_default();
    }

    if let Some(name) = body.strip_suffix(';') {
        if let Some(value) = resolve_html5_entity(name) {
            return value.to_string();
        }
    } else if LEGACY_NAMES.contains(&body) {
        if let Some(value) = resolve_html5_entity(body) {
            return value.to_string();
        }
    }

    // Longest legacy name prefixing the reference, rest kept as text.
    for split in (2..body.len()).rev() {
        if !body.is_char_boundary(split) {
            continue;
        }
        let (name, rest) = body.split_at(split);
        if LEGACY_NAMES.contains(&name) {
            if let Some(value) = resolve_html5_entity(name) {
                return format!("{}{}", value, rest);
            }
        }
    }

    format!("&{}", body)
}

/// Map a numeric reference to the character it produces, if any.
///
/// `None` input means the digits overflowed and is out of range.
fn numeric_char(code: Option<u32>) -> Option<char> {
    let Some(code) = code else {
        return Some(char::REPLACEMENT_CHARACTER);
    };

    match code {
        0 => Some(char::REPLACEMENT_CHARACTER),
        0x0d => Some('\r'),
        0x80..=0x9f => {
            let bytes = [code as u8];
            let (decoded, _) = WINDOWS_1252.decode_without_bom_handling(&bytes);
            decoded.chars().next()
        }
        0xd800..=0xdfff => Some(char::REPLACEMENT_CHARACTER),
        c if c > 0x10ffff => Some(char::REPLACEMENT_CHARACTER),
        0x01..=0x08 | 0x0b | 0x0e..=0x1f | 0x7f | 0xfdd0..=0xfdef => None,
        c if c & 0xffff >= 0xfffe => None,
        c => char::from_u32(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_markup_entities() {
        assert_eq!(
            decode_entities("&lt;div class=&quot;slide-container&quot;&gt;"),
            r#"<div class="slide-container">"#
        );
        assert_eq!(decode_entities("a &amp; b"), "a & b");
    }

    #[test]
    fn test_decode_full_named_table() {
        assert_eq!(decode_entities("&eacute;&hearts; &Omega;"), "é♥ Ω");
        assert_eq!(decode_entities("caf&eacute; &rarr; &check;"), "café → ✓");
    }

    #[test]
    fn test_legacy_names_without_semicolon() {
        assert_eq!(decode_entities("a &amp b"), "a & b");
        assert_eq!(decode_entities("&lt&gt"), "<>");
        assert_eq!(decode_entities("&copy 2025"), "© 2025");
        assert_eq!(decode_entities("&notit;"), "¬it;");
    }

    #[test]
    fn test_non_legacy_names_need_semicolon() {
        assert_eq!(decode_entities("&hearts"), "&hearts");
        assert_eq!(decode_entities("&Omega"), "&Omega");
    }

    #[test]
    fn test_decode_numeric_references() {
        assert_eq!(decode_entities("&#39;x&#39;"), "'x'");
        assert_eq!(decode_entities("&#x27;x&#X27;"), "'x'");
        assert_eq!(decode_entities("&#39x"), "'x");
        assert_eq!(decode_entities("&#1055;"), "П");
    }

    #[test]
    fn test_decode_irregular_numeric_references() {
        assert_eq!(decode_entities("&#0;"), "\u{FFFD}");
        assert_eq!(decode_entities("&#xD800;"), "\u{FFFD}");
        assert_eq!(decode_entities("&#x110000;"), "\u{FFFD}");
        assert_eq!(decode_entities("&#99999999999;"), "\u{FFFD}");
        assert_eq!(decode_entities("&#128;&#x99;"), "€™");
        assert_eq!(decode_entities("a&#1;b&#xFFFF;c"), "abc");
    }

    #[test]
    fn test_unknown_and_bare_ampersands_left_alone() {
        assert_eq!(decode_entities("&bogus;"), "&bogus;");
        assert_eq!(decode_entities("AT&T"), "AT&T");
        assert_eq!(decode_entities("trailing &"), "trailing &");
        assert_eq!(decode_entities("a & b"), "a & b");
    }

    #[test]
    fn test_multibyte_text_preserved() {
        assert_eq!(
            decode_entities("Привіт&nbsp;світ &mdash; ок"),
            "Привіт\u{00A0}світ — ок"
        );
        assert!(matches!(decode_entities("без посилань"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_no_double_decoding() {
        assert_eq!(decode_entities("&amp;lt;"), "&lt;");
    }
}
