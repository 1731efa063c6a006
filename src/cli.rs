use clap::Parser;

use crate::codec::{Codec, Direction};
use crate::separator::Separator;

/// Escape and unescape strings for URL query components and path segments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, args_override_self = true)]
pub struct Args {
    /// Decode URL strings
    #[arg(short, long)]
    pub decode: bool,

    /// Output separator (defaults to '+' when encoding, space when decoding)
    #[arg(short, long, value_name = "SEP", default_value = "", allow_hyphen_values = true)]
    pub separator: String,

    /// Encode/decode path segments instead of query strings
    #[arg(short, long)]
    pub path: bool,

    /// Strings to encode or decode
    #[arg(value_name = "STRINGS", trailing_var_arg = true)]
    pub strings: Vec<String>,
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub codec: Codec,
    pub direction: Direction,
    pub separator: Separator,
}

impl From<&Args> for Options {
    fn from(args: &Args) -> Self {
        let direction = Direction::from_decode_flag(args.decode);
        Options {
            codec: Codec::from_path_mode(args.path),
            direction,
            separator: Separator::resolve(&args.separator, direction),
        }
    }
}
