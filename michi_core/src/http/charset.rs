use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::debug_warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Charset {
    Utf8,
    Ascii,
    Latin1,
}

// Labels are matched lower-cased and trimmed.
static CHARSETS: Lazy<HashMap<&'static str, Charset>> = Lazy::new(|| {
    HashMap::from([
        ("utf-8", Charset::Utf8),
        ("utf8", Charset::Utf8),
        ("us-ascii", Charset::Ascii),
        ("ascii", Charset::Ascii),
        ("iso-8859-1", Charset::Latin1),
        ("latin-1", Charset::Latin1),
        ("latin1", Charset::Latin1),
        ("l1", Charset::Latin1),
    ])
});

/// Decode request bytes using the charset a header named, if it named one
/// we support; otherwise fall back to lossy UTF-8. This never fails:
/// undecodable input degrades to replacement characters instead.
pub fn bytes_to_string(bytes: &[u8], charset: Option<&str>) -> String {
    let known = charset.and_then(|label| {
        let found = CHARSETS.get(label.trim().to_lowercase().as_str()).copied();
        if found.is_none() {
            debug_warn!("Unsupported charset '{}', falling back to UTF-8", label);
        }
        found
    });
    match known {
        Some(Charset::Utf8) | None => String::from_utf8_lossy(bytes).into_owned(),
        Some(Charset::Ascii) => {
            if bytes.is_ascii() {
                bytes.iter().map(|&b| b as char).collect()
            } else {
                String::from_utf8_lossy(bytes).into_owned()
            }
        }
        // Latin-1 maps each byte to the code point of the same value.
        Some(Charset::Latin1) => bytes.iter().map(|&b| b as char).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_label_decodes_utf8() {
        assert_eq!(bytes_to_string("蛍".as_bytes(), Some("UTF-8")), "蛍");
    }

    #[test]
    fn no_label_defaults_to_utf8() {
        assert_eq!(bytes_to_string(b"plain", None), "plain");
    }

    #[test]
    fn latin1_maps_high_bytes() {
        // 0xE9 is 'é' in ISO-8859-1 but not valid UTF-8 on its own.
        assert_eq!(bytes_to_string(&[0x63, 0x61, 0x66, 0xE9], Some("ISO-8859-1")), "café");
        assert_eq!(bytes_to_string(&[0xE9], Some("latin1")), "é");
    }

    #[test]
    fn ascii_label_reads_ascii() {
        assert_eq!(bytes_to_string(b"abc", Some("US-ASCII")), "abc");
    }

    #[test]
    fn labels_are_case_insensitive_and_trimmed() {
        assert_eq!(bytes_to_string(&[0xE9], Some(" Latin-1 ")), "é");
    }

    #[test]
    fn unknown_label_falls_back_lossily() {
        assert_eq!(bytes_to_string(b"abc", Some("klingon-8")), "abc");
        let decoded = bytes_to_string(&[0xFF], Some("klingon-8"));
        assert_eq!(decoded, "\u{FFFD}");
    }

    #[test]
    fn invalid_utf8_degrades_to_replacement() {
        let decoded = bytes_to_string(&[b'a', 0xFF, b'b'], Some("utf-8"));
        assert_eq!(decoded, "a\u{FFFD}b");
    }
}
