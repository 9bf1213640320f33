//! XML entity escaping for token streams

/// Entities produced by [`escape_xml`], in application order
const ESCAPES: [(&str, &str); 8] = [
    ("&", "&amp;"),
    ("|", "&#124;"),
    ("<", "&lt;"),
    (">", "&gt;"),
    ("'", "&apos;"),
    ("\"", "&quot;"),
    ("[", "&#91;"),
    ("]", "&#93;"),
];

/// Entities reversed by [`unescape_xml`], ampersand last so `&amp;lt;`
/// comes back as `&lt;` rather than `<`
const UNESCAPES: [(&str, &str); 11] = [
    ("&bar;", "|"),
    ("&#124;", "|"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&bra;", "["),
    ("&ket;", "]"),
    ("&quot;", "\""),
    ("&apos;", "'"),
    ("&#91;", "["),
    ("&#93;", "]"),
    ("&amp;", "&"),
];

/// Escape the characters Moses treats as special
pub fn escape_xml(text: &str) -> String {
    replace_all(text, &ESCAPES)
}

/// Escape without touching square brackets, as Penn output does
pub fn escape_xml_penn(text: &str) -> String {
    replace_all(text, &ESCAPES[..6])
}

pub fn unescape_xml(text: &str) -> String {
    replace_all(text, &UNESCAPES)
}

fn replace_all(text: &str, pairs: &[(&str, &str)]) -> String {
    let mut out = text.to_string();
    for (from, to) in pairs {
        if out.contains(from) {
            out = out.replace(from, to);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_order() {
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<b>"), "&lt;b&gt;");
        assert_eq!(escape_xml("[x|y]"), "&#91;x&#124;y&#93;");
        assert_eq!(escape_xml("it's \"ok\""), "it&apos;s &quot;ok&quot;");
    }

    #[test]
    fn test_penn_escape_keeps_brackets() {
        assert_eq!(escape_xml_penn("[a&b]"), "[a&amp;b]");
    }

    #[test]
    fn test_unescape_legacy_entities() {
        assert_eq!(unescape_xml("&bar; &bra;x&ket;"), "| [x]");
        assert_eq!(unescape_xml("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_round_trip() {
        let text = "& | < > ' \" [ ] &amp;";
        assert_eq!(unescape_xml(&escape_xml(text)), text);
    }
}
