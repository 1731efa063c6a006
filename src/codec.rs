//! Query-string and path-segment codecs, and the encode/decode direction

use std::fmt;

use crate::utils::url::{path_escape, path_unescape, query_escape, query_unescape, EscapeError};

/// Percent-encoding rule set, chosen once per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Codec {
    /// Query component rules, space is `+`
    #[default]
    Query,
    /// Path segment rules, space is `%20`
    Path,
}

impl Codec {
    pub fn from_path_mode(path_mode: bool) -> Self {
        if path_mode {
            Codec::Path
        } else {
            Codec::Query
        }
    }

    pub fn encode(self, input: &str) -> String {
        match self {
            Codec::Query => query_escape(input),
            Codec::Path => path_escape(input),
        }
    }

    pub fn decode(self, input: &str) -> Result<Vec<u8>, EscapeError> {
        match self {
            Codec::Query => query_unescape(input),
            Codec::Path => path_unescape(input),
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Codec::Query => write!(f, "query"),
            Codec::Path => write!(f, "path"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Encode,
    Decode,
}

impl Direction {
    pub fn from_decode_flag(decode: bool) -> Self {
        if decode {
            Direction::Decode
        } else {
            Direction::Encode
        }
    }

    /// Operation name as it appears in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Encode => "encode",
            Direction::Decode => "decode",
        }
    }

    /// Separator used when the user does not supply one.
    pub fn default_separator(self) -> &'static [u8] {
        match self {
            Direction::Encode => b"+",
            Direction::Decode => b" ",
        }
    }

    /// Runs `codec` in this direction over a single argument.
    pub fn apply(self, codec: Codec, input: &str) -> Result<Vec<u8>, EscapeError> {
        match self {
            Direction::Encode => Ok(codec.encode(input).into_bytes()),
            Direction::Decode => codec.decode(input),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
