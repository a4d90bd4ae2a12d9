use std::collections::HashMap;

use michi_lib::url_encoding::{DecodeError, decode_segment};

use crate::debug_trace;
use super::pattern::PatternSegment;

/// Split a request path or route template into its segments.
/// Empty segments from leading, trailing, or doubled slashes are dropped,
/// so `/users/42/` and `users//42` both yield `["users", "42"]`.
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|part| !part.is_empty()).collect()
}

/// Extract named-parameter bindings from a request path.
///
/// Walks both segment lists in lockstep over the indices valid in each.
/// Wherever the route segment is a `:name` parameter, the request segment
/// at the same position is percent-decoded and bound under the lower-cased
/// name. Segments past the shorter list are ignored; shape compatibility is
/// the caller's concern (see [`path_matches`]).
///
/// The only failure mode is a malformed percent escape in a bound value.
pub fn extract_params(
    request: &[impl AsRef<str>],
    matched: &[impl AsRef<str>],
) -> Result<HashMap<String, String>, DecodeError> {
    let mut params = HashMap::new();
    let mut i = 0;
    while i < request.len() && i < matched.len() {
        if let PatternSegment::Param(name) = PatternSegment::classify(matched[i].as_ref()) {
            params.insert(name, decode_segment(request[i].as_ref())?);
        }
        i += 1;
    }
    Ok(params)
}

/// Extract wildcard ("splat") captures from a request path.
///
/// One entry is produced per `*` route segment within the shared index
/// range, in left-to-right order. A trailing `*` on a route shorter than
/// the request absorbs the rest of the path: the remaining raw segments are
/// rejoined with `/` and the accumulated value is decoded once, so an
/// encoded slash in the tail still decodes inside the capture.
pub fn extract_splat(
    request: &[impl AsRef<str>],
    matched: &[impl AsRef<str>],
) -> Result<Vec<String>, DecodeError> {
    let num_request_parts = request.len();
    let num_matched_parts = matched.len();
    let mut splat = Vec::new();
    let mut i = 0;
    while i < num_request_parts && i < num_matched_parts {
        if matched[i].as_ref() == "*" {
            let mut splat_param = String::from(request[i].as_ref());
            if num_request_parts != num_matched_parts && i == num_matched_parts - 1 {
                for part in &request[i + 1..] {
                    splat_param.push('/');
                    splat_param.push_str(part.as_ref());
                }
            }
            splat.push(decode_segment(&splat_param)?);
        }
        i += 1;
    }
    Ok(splat)
}

/// Check that a route's segments are shape-compatible with a request path.
///
/// The routing layer runs this before asking for bindings: lengths must be
/// equal, or the request may be longer when the route ends in `*`. Within
/// the shared range every route segment must match its request segment
/// (exact equality for literals, anything for `:name` and `*`).
pub fn path_matches(request: &[impl AsRef<str>], matched: &[impl AsRef<str>]) -> bool {
    if request.len() != matched.len() {
        let trailing_wildcard =
            request.len() > matched.len() && matched.last().map(|s| s.as_ref()) == Some("*");
        if !trailing_wildcard {
            debug_trace!(
                "path_matches: shape mismatch ({} request vs {} route segments)",
                request.len(),
                matched.len()
            );
            return false;
        }
    }
    request
        .iter()
        .zip(matched.iter())
        .all(|(request_part, matched_part)| {
            PatternSegment::classify(matched_part.as_ref()).matches(request_part.as_ref())
        })
}
