//! Line encoding/decoding for the vocabulary file
//!
//! Each entry is stored on its own line as `word : meaning`. The reader is
//! lenient about whitespace around the separator, the writer is not.

pub mod entry;

/// Separator between word and meaning on a stored line
pub const SEPARATOR: char = ':';

pub use entry::{Entry, format_entry};
