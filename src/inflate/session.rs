//! Incremental gzip inflate session.
//!
//! [`InflateSession`] owns one engine state object (`flate2::Decompress` in
//! gzip mode) for the duration of a single decode call: the orchestrator
//! constructs it, drives it with [`inflate`](InflateSession::inflate) steps,
//! and drops it when the call ends.  No session outlives a call and no two
//! calls share one, so concurrent decodes need no locking.
//!
//! The engine is configured to detect and strip the gzip container itself
//! (magic, header fields, CRC32 + size trailer); this module never parses
//! framing bytes.

use flate2::{Decompress, FlushDecompress, Status};

use crate::config::GZIP_WINDOW_BITS;
use crate::inflate::types::{DecodeError, Step, StreamState};

/// One incremental decompression state, valid for a single decode call.
pub struct InflateSession {
    engine: Decompress,
}

impl InflateSession {
    /// Initialize the inflate state for gzip-framed input.
    pub fn open() -> Result<InflateSession, DecodeError> {
        Ok(InflateSession {
            engine: Decompress::new_gzip(GZIP_WINDOW_BITS),
        })
    }

    /// Run one engine step: consume bytes from `input`, write decoded bytes
    /// into `out`, and report progress.
    ///
    /// The step ends when `out` is full, when `input` is exhausted, or when
    /// the engine reaches the stream trailer — whichever comes first.  A step
    /// may legitimately consume input without producing output (header bytes)
    /// or make no progress at all (the engine is waiting for more input).
    ///
    /// # Errors
    ///
    /// Any fatal engine condition, classified per
    /// [`DecodeError`](crate::inflate::types::DecodeError).  After an error
    /// the session must not be used again.
    pub fn inflate(&mut self, input: &[u8], out: &mut [u8]) -> Result<Step, DecodeError> {
        let in_before = self.engine.total_in();
        let out_before = self.engine.total_out();

        let status = self
            .engine
            .decompress(input, out, FlushDecompress::None)
            .map_err(DecodeError::from_engine)?;

        let state = match status {
            Status::StreamEnd => StreamState::Finished,
            // BufError means "no progress possible right now" — the caller
            // decides whether more input or more output space is coming.
            Status::Ok | Status::BufError => StreamState::Working,
        };

        Ok(Step {
            consumed: (self.engine.total_in() - in_before) as usize,
            produced: (self.engine.total_out() - out_before) as usize,
            state,
        })
    }

    /// Replace the engine state so the next [`inflate`](InflateSession::inflate)
    /// call starts a fresh gzip member.  Used when decoding concatenated
    /// members back-to-back.
    pub fn rewind_for_next_member(&mut self) -> Result<(), DecodeError> {
        self.engine = Decompress::new_gzip(GZIP_WINDOW_BITS);
        Ok(())
    }

    /// Release the engine state.  Dropping the session is equivalent; this
    /// method exists so callers can make the release point explicit.
    pub fn close(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use flate2::write::GzEncoder;
    use flate2::Compression;

    fn gzip(data: &[u8]) -> Vec<u8> {
        let mut enc = GzEncoder::new(Vec::new(), Compression::default());
        enc.write_all(data).unwrap();
        enc.finish().unwrap()
    }

    /// A whole small stream fed in one step decodes fully and reports
    /// `Finished` with all input consumed.
    #[test]
    fn single_step_whole_stream() {
        let payload = b"hello, inflate session";
        let compressed = gzip(payload);

        let mut session = InflateSession::open().unwrap();
        let mut out = vec![0u8; 1024];
        let step = session.inflate(&compressed, &mut out).unwrap();

        assert_eq!(step.state, StreamState::Finished);
        assert_eq!(step.consumed, compressed.len());
        assert_eq!(&out[..step.produced], payload.as_slice());
    }

    /// Byte-at-a-time feeding exercises partial-progress steps: the session
    /// must keep reporting `Working` until the trailer byte arrives.
    #[test]
    fn byte_at_a_time_feeding() {
        let payload = b"incremental input delivery";
        let compressed = gzip(payload);

        let mut session = InflateSession::open().unwrap();
        let mut out = vec![0u8; 1024];
        let mut produced_total = 0usize;
        let mut finished = false;

        for (i, byte) in compressed.iter().enumerate() {
            let step = session
                .inflate(std::slice::from_ref(byte), &mut out[produced_total..])
                .unwrap();
            produced_total += step.produced;
            if step.state == StreamState::Finished {
                assert_eq!(i, compressed.len() - 1, "finished before last byte");
                finished = true;
            }
        }

        assert!(finished, "stream end never reported");
        assert_eq!(&out[..produced_total], payload.as_slice());
    }

    /// After a rewind the same session decodes a second, independent member.
    #[test]
    fn rewind_decodes_second_member() {
        let first = gzip(b"first member");
        let second = gzip(b"second member");

        let mut session = InflateSession::open().unwrap();
        let mut out = vec![0u8; 1024];

        let step = session.inflate(&first, &mut out).unwrap();
        assert_eq!(step.state, StreamState::Finished);

        session.rewind_for_next_member().unwrap();

        let step = session.inflate(&second, &mut out).unwrap();
        assert_eq!(step.state, StreamState::Finished);
        assert_eq!(&out[..step.produced], b"second member");
    }

    /// Garbage where the gzip magic belongs must surface as an error, not
    /// hang or panic.
    #[test]
    fn bad_magic_is_an_error() {
        let mut session = InflateSession::open().unwrap();
        let mut out = vec![0u8; 64];
        let err = session.inflate(b"\x00\x00\x00\x00\x00\x00", &mut out);
        assert!(err.is_err());
        assert!(err.unwrap_err().is_corruption());
    }
}
