//! madam - live palindrome highlighter
//!
//! This crate mirrors edited text content into marked-up lines where every
//! palindromic word (case-insensitive, ASCII letters and digits only,
//! punctuation ignored) is wrapped in a highlight span. The pipeline is
//! sanitize (on paste) -> snapshot -> highlight -> render.

pub mod chars;
pub mod cli;
pub mod config;
pub mod config_paths;
pub mod controller;
pub mod document;
pub mod highlight;
pub mod palindrome;
pub mod sanitize;
pub mod tracing;

// Re-export commonly used types
pub use config::MirrorConfig;
pub use controller::{BufferMirror, BufferSurface, EditSurface, HighlightController, MirrorSurface};
pub use highlight::{highlight_content, highlight_line, HighlightMarker, HighlightedLine, SPACER};
pub use palindrome::is_palindromic_word;
pub use sanitize::{sanitize, LogicalLine};
