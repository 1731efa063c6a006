use thiserror::Error;

use crate::codec::Direction;
use crate::utils::text::quote;
use crate::utils::url::EscapeError;

#[derive(Error, Debug)]
pub enum UrlcodeError {
    #[error("unable to {op} {}: {source}", quote(.input.as_bytes()))]
    Transform {
        op: Direction,
        input: String,
        #[source]
        source: EscapeError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
