//! Backslash-escape interpretation for double-quoted string literals

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnquoteError {
    #[error("unescaped quote at byte {0}")]
    BareQuote(usize),

    #[error("raw newline at byte {0}")]
    RawNewline(usize),

    #[error("invalid escape sequence at byte {0}")]
    InvalidEscape(usize),

    #[error("escape sequence at byte {0} is truncated")]
    Truncated(usize),

    #[error("escape at byte {0} is not a valid code point")]
    InvalidCodePoint(usize),
}

/// Interprets the body of a double-quoted string literal.
///
/// Supports `\a \b \f \n \r \t \v \\ \"`, `\xHH` and three-digit octal
/// escapes (raw bytes), and `\uHHHH` / `\UHHHHHHHH` (UTF-8 encoded code
/// points). `\'` is rejected as it is only valid inside single quotes.
///
/// # Arguments
/// * `input` - The literal body, without surrounding quotes
///
/// # Returns
/// * The unescaped bytes; `\x` and octal escapes may produce invalid UTF-8
///
/// # Examples
/// ```
/// use urlcode::utils::unquote::unquote;
///
/// assert_eq!(unquote(r"a\tb").unwrap(), b"a\tb");
/// assert!(unquote(r"\0").is_err());
/// ```
pub fn unquote(input: &str) -> Result<Vec<u8>, UnquoteError> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'"' => return Err(UnquoteError::BareQuote(i)),
            b'\n' => return Err(UnquoteError::RawNewline(i)),
            b'\\' => {
                let start = i;
                let kind = *bytes.get(i + 1).ok_or(UnquoteError::Truncated(start))?;
                i += 2;
                match kind {
                    b'a' => out.push(0x07),
                    b'b' => out.push(0x08),
                    b'f' => out.push(0x0C),
                    b'n' => out.push(b'\n'),
                    b'r' => out.push(b'\r'),
                    b't' => out.push(b'\t'),
                    b'v' => out.push(0x0B),
                    b'\\' => out.push(b'\\'),
                    b'"' => out.push(b'"'),
                    b'x' => {
                        let value = read_digits(bytes, i, 2, 16, start)?;
                        out.push(value as u8);
                        i += 2;
                    }
                    b'0'..=b'7' => {
                        let value = read_digits(bytes, i - 1, 3, 8, start)?;
                        if value > 0xFF {
                            return Err(UnquoteError::InvalidEscape(start));
                        }
                        out.push(value as u8);
                        i += 2;
                    }
                    b'u' | b'U' => {
                        let width = if kind == b'u' { 4 } else { 8 };
                        let value = read_digits(bytes, i, width, 16, start)?;
                        let ch =
                            char::from_u32(value).ok_or(UnquoteError::InvalidCodePoint(start))?;
                        let mut buf = [0u8; 4];
                        out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
                        i += width;
                    }
                    _ => return Err(UnquoteError::InvalidEscape(start)),
                }
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }

    Ok(out)
}

fn read_digits(
    bytes: &[u8],
    from: usize,
    count: usize,
    radix: u32,
    escape_start: usize,
) -> Result<u32, UnquoteError> {
    let digits = bytes
        .get(from..from + count)
        .ok_or(UnquoteError::Truncated(escape_start))?;
    digits.iter().try_fold(0u32, |acc, &d| {
        (d as char)
            .to_digit(radix)
            .map(|v| acc * radix + v)
            .ok_or(UnquoteError::InvalidEscape(escape_start))
    })
}
