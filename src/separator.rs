//! Output separator resolution

use log::debug;

use crate::codec::Direction;
use crate::utils::text::is_print;
use crate::utils::unquote::unquote;

/// Bytes written between transformed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separator(Vec<u8>);

impl Separator {
    /// Resolves the separator from the user's `-s` value.
    ///
    /// An empty value falls back to the direction default. Otherwise the
    /// value is unquoted as a string literal body; if that fails, a literal
    /// `\0` means NUL and anything else is used verbatim.
    pub fn resolve(user: &str, direction: Direction) -> Self {
        if user.is_empty() {
            return Separator(direction.default_separator().to_vec());
        }

        match unquote(user) {
            Ok(bytes) => Separator(bytes),
            Err(_) if user == "\\0" => Separator(vec![0]),
            Err(e) => {
                debug!("Separator {:?} is not a valid literal ({}), using it as-is", user, e);
                Separator(user.as_bytes().to_vec())
            }
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// True when every character is whitespace or printable. Bytes that are
    /// not valid UTF-8 count as printable replacement characters.
    pub fn is_printable(&self) -> bool {
        String::from_utf8_lossy(&self.0)
            .chars()
            .all(|c| c.is_whitespace() || is_print(c))
    }
}

impl From<&[u8]> for Separator {
    fn from(bytes: &[u8]) -> Self {
        Separator(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_defaults() {
        assert_eq!(Separator::resolve("", Direction::Encode).as_bytes(), b"+");
        assert_eq!(Separator::resolve("", Direction::Decode).as_bytes(), b" ");
    }

    #[test]
    fn test_escapes_are_interpreted() {
        assert_eq!(Separator::resolve(r"\n", Direction::Encode).as_bytes(), b"\n");
        assert_eq!(
            Separator::resolve(r",\t", Direction::Decode).as_bytes(),
            b",\t"
        );
        assert_eq!(Separator::resolve(r"\x00", Direction::Encode).as_bytes(), b"\0");
    }

    #[test]
    fn test_backslash_zero_is_nul() {
        assert_eq!(Separator::resolve(r"\0", Direction::Encode).as_bytes(), b"\0");
    }

    #[test]
    fn test_invalid_literal_is_used_verbatim() {
        assert_eq!(Separator::resolve(r"\q", Direction::Encode).as_bytes(), br"\q");
        assert_eq!(Separator::resolve(r#"a"b"#, Direction::Encode).as_bytes(), br#"a"b"#);
        assert_eq!(Separator::resolve(r"\0\0", Direction::Encode).as_bytes(), br"\0\0");
    }

    #[test]
    fn test_plain_separator() {
        assert_eq!(Separator::resolve(", ", Direction::Encode).as_bytes(), b", ");
    }

    #[test]
    fn test_is_printable() {
        assert!(Separator::from(&b"+"[..]).is_printable());
        assert!(Separator::from(&b" \n\t"[..]).is_printable());
        assert!(Separator::from("→".as_bytes()).is_printable());
        assert!(Separator::from(&b""[..]).is_printable());
        assert!(!Separator::from(&b"\0"[..]).is_printable());
        assert!(!Separator::from(&b",\x1b"[..]).is_printable());
    }

    #[test]
    fn test_format_and_private_use_are_not_printable() {
        for sep in ["\u{AD}", "\u{200B}", "\u{FEFF}", "\u{E000}", ",\u{200B}"] {
            assert!(!Separator::from(sep.as_bytes()).is_printable(), "{sep:?}");
        }
        // Non-ASCII whitespace still counts
        assert!(Separator::from("\u{A0}\u{3000}".as_bytes()).is_printable());
        assert!(Separator::from(&b"\xff"[..]).is_printable());
    }
}
