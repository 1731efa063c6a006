use std::io::Write;

use log::debug;

pub mod cli;
pub mod codec;
pub mod error;
pub mod output;
pub mod separator;
pub mod transform;
pub mod utils;

// Re-export the types needed to drive a run
pub use cli::{Args, Options};
pub use codec::{Codec, Direction};
pub use error::UrlcodeError;
pub use output::{FixedTerminal, StdoutTerminal, Terminal};
pub use separator::Separator;

/// Transforms `strings` according to `options` and writes the joined result
/// to `out`. Nothing is written if any string fails to transform.
pub fn run<S, W, T>(
    options: &Options,
    strings: &[S],
    out: &mut W,
    terminal: &T,
) -> Result<(), UrlcodeError>
where
    S: AsRef<str>,
    W: Write,
    T: Terminal,
{
    debug!(
        "Running {} with the {} codec on {} argument(s), separator {:?}",
        options.direction,
        options.codec,
        strings.len(),
        String::from_utf8_lossy(options.separator.as_bytes())
    );

    let parts = transform::transform_all(strings, options.codec, options.direction)?;
    output::write_output(out, &parts, &options.separator, terminal)?;
    Ok(())
}
