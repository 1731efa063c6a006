//! Joining transformed arguments and writing them out

use std::io::{self, IsTerminal, Write};

use crate::separator::Separator;

/// Whether the output stream is an interactive terminal.
pub trait Terminal {
    fn is_interactive(&self) -> bool;
}

/// Checks the process stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutTerminal;

impl Terminal for StdoutTerminal {
    fn is_interactive(&self) -> bool {
        io::stdout().is_terminal()
    }
}

/// Fixed answer, for callers that already know (and for tests).
#[derive(Debug, Clone, Copy)]
pub struct FixedTerminal(pub bool);

impl Terminal for FixedTerminal {
    fn is_interactive(&self) -> bool {
        self.0
    }
}

pub fn join(parts: &[Vec<u8>], separator: &Separator) -> Vec<u8> {
    parts.join(separator.as_bytes())
}

/// A trailing newline keeps interactive shells tidy, but is left out for
/// pipes and files, and when the separator itself is binary.
pub fn wants_trailing_newline(separator: &Separator, terminal: &impl Terminal) -> bool {
    separator.is_printable() && terminal.is_interactive()
}

/// Writes the joined output in one go, followed by the newline if wanted.
pub fn write_output<W: Write>(
    out: &mut W,
    parts: &[Vec<u8>],
    separator: &Separator,
    terminal: &impl Terminal,
) -> io::Result<()> {
    out.write_all(&join(parts, separator))?;
    if wants_trailing_newline(separator, terminal) {
        out.write_all(b"\n")?;
    }
    out.flush()
}
