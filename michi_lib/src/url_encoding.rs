use std::fmt;
use std::str::Utf8Error;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters escaped by [`encode_segment`]: everything except ASCII
/// alphanumerics and the unreserved marks `-._~`.
/// Note that `+` and `/` are both escaped, so an encoded segment never
/// carries path or query metacharacters.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    // '%' not followed by two hex digits.
    InvalidEscape { at: usize },
    // Escapes were well-formed but the decoded bytes are not UTF-8.
    Utf8(Utf8Error),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEscape { at } => write!(f, "Malformed percent escape at byte {}", at),
            Self::Utf8(err) => write!(f, "Decoded bytes are not valid UTF-8: {}", err),
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<Utf8Error> for DecodeError {
    fn from(err: Utf8Error) -> Self {
        Self::Utf8(err)
    }
}

pub type Result<T> = std::result::Result<T, DecodeError>;

/// Percent-encode a single path segment.
///
/// Companion of [`decode_segment`]: `+` encodes to `%2B` and `/` to `%2F`,
/// so for any string `s`, `decode_segment(&encode_segment(s))` gives `s`
/// back unchanged.
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// Percent-decode a single path segment (or a `/`-joined splat value).
///
/// This is path-style decoding, not query-style: a literal `+` in the raw
/// segment stays a literal `+` in the output. `%2F` decodes to a literal
/// `/` inside the value; the input is already split on the path's real
/// `/` delimiters, so no ambiguity arises.
///
/// Fails only on malformed escapes. A `%` must be followed by exactly two
/// hex digits; anything else is rejected rather than passed through.
pub fn decode_segment(raw: &str) -> Result<String> {
    check_escapes(raw)?;
    let decoded = percent_decode_str(raw).decode_utf8()?;
    Ok(decoded.into_owned())
}

// Reject the malformed escapes percent_decode would silently leave verbatim.
fn check_escapes(raw: &str) -> Result<()> {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if i + 2 >= bytes.len()
                || !bytes[i + 1].is_ascii_hexdigit()
                || !bytes[i + 2].is_ascii_hexdigit()
            {
                return Err(DecodeError::InvalidEscape { at: i });
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn plain_segment_passes_through() {
        assert_eq!(decode_segment("users").unwrap(), "users");
    }

    #[test]
    fn space_decodes_from_percent_twenty() {
        assert_eq!(decode_segment("a%20b").unwrap(), "a b");
    }

    #[test]
    fn literal_plus_is_preserved() {
        // Path-style decoding: '+' is not a space.
        assert_eq!(decode_segment("a+b").unwrap(), "a+b");
    }

    #[test]
    fn encoded_plus_decodes_to_plus() {
        assert_eq!(decode_segment("a%2Bb").unwrap(), "a+b");
    }

    #[test]
    fn encoded_slash_decodes_inside_segment() {
        assert_eq!(decode_segment("a%2Fb").unwrap(), "a/b");
    }

    #[test]
    fn unicode_decodes() {
        assert_eq!(decode_segment("%E8%9B%8D").unwrap(), "蛍");
    }

    #[test]
    fn malformed_escape_is_an_error() {
        assert_eq!(
            decode_segment("%ZZ").unwrap_err(),
            DecodeError::InvalidEscape { at: 0 }
        );
        assert_eq!(
            decode_segment("ab%4").unwrap_err(),
            DecodeError::InvalidEscape { at: 2 }
        );
        assert_eq!(
            decode_segment("trailing%").unwrap_err(),
            DecodeError::InvalidEscape { at: 8 }
        );
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        assert!(matches!(
            decode_segment("%FF").unwrap_err(),
            DecodeError::Utf8(_)
        ));
    }

    #[test]
    fn encode_escapes_metacharacters() {
        assert_eq!(encode_segment("a b+c/d"), "a%20b%2Bc%2Fd");
        assert_eq!(encode_segment("safe-chars_1.2~3"), "safe-chars_1.2~3");
    }

    quickcheck! {
        fn round_trips(s: String) -> bool {
            decode_segment(&encode_segment(&s)) == Ok(s)
        }
    }
}
