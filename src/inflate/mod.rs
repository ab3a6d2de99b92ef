//! Gzip decode core: the incremental engine session and the chunked
//! feed/drain orchestrator built on top of it.

pub mod decode;
pub mod session;
pub mod types;

pub use decode::{decode, decode_with};
pub use session::InflateSession;
pub use types::{DecodeError, DecodeOptions, MemberPolicy, StreamState};
