// gzdec — chunked gzip decompression engine.

pub mod cli;
pub mod config;
pub mod inflate;
pub mod io;

// ── Version constants ─────────────────────────────────────────────────────────
pub const GZDEC_VERSION_MAJOR: u32 = 0;
pub const GZDEC_VERSION_MINOR: u32 = 1;
pub const GZDEC_VERSION_RELEASE: u32 = 0;
pub const GZDEC_VERSION_NUMBER: u32 =
    GZDEC_VERSION_MAJOR * 100 * 100 + GZDEC_VERSION_MINOR * 100 + GZDEC_VERSION_RELEASE;
pub const GZDEC_VERSION_STRING: &str = "0.1.0";

/// Returns the runtime version number.
pub fn version_number() -> u32 {
    GZDEC_VERSION_NUMBER
}

/// Returns the runtime version string.
pub fn version_string() -> &'static str {
    GZDEC_VERSION_STRING
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use config::CHUNK;
pub use inflate::{decode, decode_with, DecodeError, DecodeOptions, MemberPolicy};
