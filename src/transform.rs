use log::debug;

use crate::codec::{Codec, Direction};
use crate::error::UrlcodeError;

/// Transforms every argument in order, stopping at the first failure.
///
/// Nothing is returned for a partially transformed list, so callers write
/// either all of the output or none of it.
pub fn transform_all<S: AsRef<str>>(
    args: &[S],
    codec: Codec,
    direction: Direction,
) -> Result<Vec<Vec<u8>>, UrlcodeError> {
    args.iter()
        .map(|arg| -> Result<Vec<u8>, UrlcodeError> {
            let input = arg.as_ref();
            let output = direction
                .apply(codec, input)
                .map_err(|source| UrlcodeError::Transform {
                    op: direction,
                    input: input.to_string(),
                    source,
                })?;
            debug!(
                "{} {:?} -> {:?}",
                direction,
                input,
                String::from_utf8_lossy(&output)
            );
            Ok(output)
        })
        .collect()
}
