// config.rs — Compile-time configuration constants.

/// 1 KiB.
pub const KB: usize = 1 << 10;
/// 1 MiB.
pub const MB: usize = 1 << 20;

/// Working-buffer granularity for the decode loop: input is fed to the
/// engine in slices of at most this many bytes, and decoded output is
/// collected in fragments of exactly this capacity.
pub const CHUNK: usize = 256 * KB;

/// Inflate window size (log2).  15 selects the largest window and therefore
/// accepts every stream a standards-conforming gzip compressor can emit.
pub const GZIP_WINDOW_BITS: u8 = 15;

/// Default notification level for the CLI: errors, warnings and per-file
/// results.  See [`crate::io::prefs::DISPLAY_LEVEL`].
pub const DISPLAY_LEVEL_DEFAULT: i32 = 2;
