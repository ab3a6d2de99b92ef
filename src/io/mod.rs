//! File-level plumbing around the decode core: preferences, notification
//! globals, and whole-file decompression.

pub mod file;
pub mod prefs;

pub use file::{decompress_filename, STDIN_MARK, STDOUT_MARK};
pub use prefs::{display_level, set_display_level, Prefs};
