pub mod text;
pub mod unquote;
pub mod url;

// Re-export common utilities
pub use text::{is_print, quote};
pub use unquote::unquote;
pub use url::{path_escape, path_unescape, query_escape, query_unescape, EscapeError};
