//! URL encoding/decoding utilities

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;

use crate::utils::text::quote;

/// Bytes escaped in a query component: everything except `A-Z a-z 0-9 - _ . ~`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Bytes escaped in a path segment. `/ ; , ?` stay escaped since they carry
/// meaning between segments.
const PATH_SEGMENT: &AsciiSet = &QUERY_COMPONENT
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b':')
    .remove(b'=')
    .remove(b'@');

/// A `%` that is not followed by two hex digits. Holds the `%` and at most
/// two following bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid URL escape {}", quote(.0))]
pub struct EscapeError(pub Vec<u8>);

/// Escapes a string for use in a URL query component
///
/// Spaces become `+`, everything outside the unreserved set is `%XX` encoded.
///
/// # Examples
/// ```
/// use urlcode::utils::url::query_escape;
///
/// assert_eq!(query_escape("a b&c"), "a+b%26c");
/// ```
pub fn query_escape(input: &str) -> String {
    input
        .split(' ')
        .map(|part| utf8_percent_encode(part, QUERY_COMPONENT).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

/// Escapes a string for use as a single URL path segment
///
/// # Examples
/// ```
/// use urlcode::utils::url::path_escape;
///
/// assert_eq!(path_escape("a b/c"), "a%20b%2Fc");
/// ```
pub fn path_escape(input: &str) -> String {
    utf8_percent_encode(input, PATH_SEGMENT).to_string()
}

/// Decodes a query component. `+` decodes to a space.
///
/// # Returns
/// * The decoded bytes, which are not necessarily valid UTF-8
/// * `EscapeError` for the first malformed escape
pub fn query_unescape(input: &str) -> Result<Vec<u8>, EscapeError> {
    check_escapes(input)?;
    Ok(percent_decode_str(&input.replace('+', " ")).collect())
}

/// Decodes a path segment. `+` is left as-is.
pub fn path_unescape(input: &str) -> Result<Vec<u8>, EscapeError> {
    check_escapes(input)?;
    Ok(percent_decode_str(input).collect())
}

// percent_decode passes malformed escapes through untouched, so they have to
// be rejected up front.
fn check_escapes(input: &str) -> Result<(), EscapeError> {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }
        let valid = i + 2 < bytes.len()
            && bytes[i + 1].is_ascii_hexdigit()
            && bytes[i + 2].is_ascii_hexdigit();
        if !valid {
            let end = (i + 3).min(bytes.len());
            return Err(EscapeError(bytes[i..end].to_vec()));
        }
        i += 3;
    }
    Ok(())
}
