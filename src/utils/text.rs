//! Character classification and quoting for diagnostics

use std::fmt::Write as _;

use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// True for letters, marks, numbers, punctuation, symbols and the ASCII
/// space. Other separators, format, private-use and unassigned code points
/// are not printable.
pub fn is_print(c: char) -> bool {
    c == ' '
        || matches!(
            c.general_category_group(),
            GeneralCategoryGroup::Letter
                | GeneralCategoryGroup::Mark
                | GeneralCategoryGroup::Number
                | GeneralCategoryGroup::Punctuation
                | GeneralCategoryGroup::Symbol
        )
}

/// Wraps `bytes` in double quotes, escaping anything not printable.
///
/// Control bytes and invalid UTF-8 become `\xHH`, other non-printable code
/// points `\uHHHH` or `\UHHHHHHHH`.
///
/// # Examples
/// ```
/// use urlcode::utils::text::quote;
///
/// assert_eq!(quote(b"a\x01\"b"), r#""a\x01\"b""#);
/// ```
pub fn quote(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 2);
    out.push('"');
    for chunk in bytes.utf8_chunks() {
        for c in chunk.valid().chars() {
            push_escaped(&mut out, c);
        }
        for b in chunk.invalid() {
            let _ = write!(out, "\\x{:02x}", b);
        }
    }
    out.push('"');
    out
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '"' | '\\' => {
            out.push('\\');
            out.push(c);
        }
        c if is_print(c) => out.push(c),
        '\x07' => out.push_str("\\a"),
        '\x08' => out.push_str("\\b"),
        '\x0C' => out.push_str("\\f"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        '\x0B' => out.push_str("\\v"),
        c if c < ' ' || c == '\x7F' => {
            let _ = write!(out, "\\x{:02x}", c as u32);
        }
        c if (c as u32) < 0x10000 => {
            let _ = write!(out, "\\u{:04x}", c as u32);
        }
        c => {
            let _ = write!(out, "\\U{:08x}", c as u32);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_print() {
        for c in ['a', 'Z', '7', '+', ' ', '→', 'é', '日', '\u{FFFD}', '\u{0301}'] {
            assert!(is_print(c), "{c:?}");
        }
        // Cc, Cf, Co, Cn and non-ASCII separators
        for c in ['\0', '\n', '\u{AD}', '\u{200B}', '\u{FEFF}', '\u{E000}', '\u{378}', '\u{A0}', '\u{2028}'] {
            assert!(!is_print(c), "{c:?}");
        }
    }

    #[test]
    fn test_quote_plain() {
        assert_eq!(quote(b"%g1"), r#""%g1""#);
        assert_eq!(quote("日本".as_bytes()), "\"日本\"");
        assert_eq!(quote(b""), r#""""#);
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote(b"a\tb\n"), r#""a\tb\n""#);
        assert_eq!(quote(b"\x01\x7f"), r#""\x01\x7f""#);
        assert_eq!(quote(br#"q"\"#), r#""q\"\\""#);
        assert_eq!(quote("\u{AD}\u{A0}".as_bytes()), r#""\u00ad\u00a0""#);
        assert_eq!(quote("\u{E0001}".as_bytes()), r#""\U000e0001""#);
        assert_eq!(quote(b"%\xff"), r#""%\xff""#);
    }
}
