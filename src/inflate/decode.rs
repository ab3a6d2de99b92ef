//! Chunked decode orchestrator.
//!
//! Drives the feed/drain loop around an [`InflateSession`]: compressed input
//! is presented to the engine in slices of at most [`CHUNK`] bytes, decoded
//! output is collected in `CHUNK`-capacity fragments, and once the stream end
//! has been verified the fragments are linearized into the single result
//! buffer handed back to the caller.
//!
//! The whole call is synchronous and runs on the caller's thread; the entire
//! input is consumed and the entire output materialized in memory before
//! returning.  Each call owns its session and its fragments, so a failed or
//! finished call leaves nothing allocated behind.

use crate::config::CHUNK;
use crate::inflate::session::InflateSession;
use crate::inflate::types::{DecodeError, DecodeOptions, MemberPolicy, StreamState};

// ─────────────────────────────────────────────────────────────────────────────
// Fragment chain
// ─────────────────────────────────────────────────────────────────────────────

/// Ordered FIFO sequence of decoded-output fragments plus the running byte
/// total.  The total is maintained on every append and sizes the final
/// allocation; it is never recomputed by re-walking the fragments.
struct FragmentChain {
    fragments: Vec<Vec<u8>>,
    total: usize,
}

impl FragmentChain {
    fn new() -> FragmentChain {
        FragmentChain {
            fragments: Vec::new(),
            total: 0,
        }
    }

    /// Append one fragment.  Empty fragments carry no bytes and are elided;
    /// FIFO order of the remaining fragments is preserved.
    fn push(&mut self, fragment: Vec<u8>) {
        if fragment.is_empty() {
            return;
        }
        self.total += fragment.len();
        self.fragments.push(fragment);
    }

    /// Copy all fragments, in order, into one contiguous buffer sized from
    /// the running total.  Each fragment is released as soon as it has been
    /// copied.
    fn into_vec(mut self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.total);
        for fragment in self.fragments.drain(..) {
            out.extend_from_slice(&fragment);
        }
        debug_assert_eq!(out.len(), self.total, "running total out of sync");
        out
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Public API
// ─────────────────────────────────────────────────────────────────────────────

/// Decompress one complete in-memory gzip input with default options
/// (stop at the first member, ignore trailing bytes).
///
/// See [`decode_with`] for the error contract.
pub fn decode(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    decode_with(input, &DecodeOptions::default())
}

/// Decompress one complete in-memory gzip input.
///
/// The input is fed to a fresh [`InflateSession`] in slices of at most
/// [`CHUNK`] bytes.  After each feed, output is drained in `CHUNK`-sized
/// bursts until the engine stops filling whole fragments.  Behaviour at the
/// first stream end is governed by [`DecodeOptions::member_policy`].
///
/// Empty input is an immediate stop condition, not an error: the result is
/// an empty buffer and no session is opened.
///
/// # Errors
///
/// * Any fatal engine condition aborts at the failing drain step and is
///   returned as the corresponding [`DecodeError`] variant; fragments
///   allocated before the failure are released before returning.
/// * [`DecodeError::Incomplete`] when the input is exhausted without the
///   engine having verified a stream end — a truncated stream never yields
///   a silently short success.
pub fn decode_with(input: &[u8], opts: &DecodeOptions) -> Result<Vec<u8>, DecodeError> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let mut session = InflateSession::open()?;
    let mut chain = FragmentChain::new();
    // Current fragment and its fill level.  A fragment is pushed the moment
    // it reaches CHUNK bytes, so every fragment in the chain except the one
    // pushed after the loop is exactly full.
    let mut fragment = vec![0u8; CHUNK];
    let mut fill = 0usize;
    let mut pos = 0usize;
    let mut finished = false;

    // Feed loop: one iteration per input slice of at most CHUNK bytes.
    'feed: while pos < input.len() {
        let end = usize::min(pos + CHUNK, input.len());
        let mut slice = &input[pos..end];
        pos = end;

        // Drain loop: one engine step per iteration.
        loop {
            let space = CHUNK - fill;
            let step = session.inflate(slice, &mut fragment[fill..])?;
            slice = &slice[step.consumed..];
            fill += step.produced;
            let out_was_filled = step.produced == space;

            if fill == CHUNK {
                chain.push(std::mem::replace(&mut fragment, vec![0u8; CHUNK]));
                fill = 0;
            }

            match step.state {
                StreamState::Finished => match opts.member_policy {
                    // Trailing bytes after the trailer are ignored.
                    MemberPolicy::FirstMemberOnly => {
                        finished = true;
                        break 'feed;
                    }
                    MemberPolicy::Concatenate => {
                        if slice.is_empty() && pos >= input.len() {
                            finished = true;
                            break 'feed;
                        }
                        // Another member follows: restart the engine and keep
                        // draining the bytes already in hand.
                        session.rewind_for_next_member()?;
                        if slice.is_empty() {
                            continue 'feed;
                        }
                    }
                },
                StreamState::Working => {
                    if out_was_filled {
                        // Output space ran out first — the engine may hold
                        // more decoded bytes; drain again.
                        continue;
                    }
                    if slice.is_empty() {
                        // Feed exhausted; the next slice supplies more input.
                        continue 'feed;
                    }
                    if step.consumed == 0 && step.produced == 0 {
                        // Safety valve: input pending but the engine makes no
                        // progress.  Fall through to the truncation check
                        // rather than spin.
                        break 'feed;
                    }
                }
            }
        }
    }

    if !finished {
        return Err(DecodeError::Incomplete);
    }

    session.close();
    fragment.truncate(fill);
    chain.push(fragment);
    Ok(chain.into_vec())
}

// ─────────────────────────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use flate2::write::GzEncoder;
    use flate2::Compression;

    fn gzip(data: &[u8]) -> Vec<u8> {
        let mut enc = GzEncoder::new(Vec::new(), Compression::fast());
        enc.write_all(data).unwrap();
        enc.finish().unwrap()
    }

    /// Mildly patterned payload: compressible, but not trivially so.
    fn pattern(len: usize) -> Vec<u8> {
        (0..len)
            .map(|i| (i as u8).wrapping_mul(31).wrapping_add((i >> 9) as u8))
            .collect()
    }

    /// Zero-length input is a stop condition, not an error.
    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(decode(&[]).unwrap(), Vec::<u8>::new());
    }

    /// A zero-length payload still has a full gzip container around it and
    /// must decode to empty successfully.
    #[test]
    fn empty_payload_round_trip() {
        let compressed = gzip(&[]);
        assert_eq!(decode(&compressed).unwrap(), Vec::<u8>::new());
    }

    /// Round-trip at every chunking boundary the feed/drain loop can hit:
    /// sub-fragment, exactly one fragment, one byte past, and several
    /// fragments' worth of output.
    #[test]
    fn round_trip_chunk_boundaries() {
        for &len in &[1usize, CHUNK - 1, CHUNK, CHUNK + 1, 3 * CHUNK, 4 * CHUNK + 17] {
            let original = pattern(len);
            let compressed = gzip(&original);
            let decoded = decode(&compressed).unwrap();
            assert_eq!(decoded.len(), original.len(), "length mismatch at {len}");
            assert_eq!(decoded, original, "content mismatch at {len}");
        }
    }

    /// Input larger than one feed slice exercises the outer loop: compress
    /// incompressible-ish data so the compressed form itself spans several
    /// CHUNK slices.
    #[test]
    fn multi_slice_compressed_input() {
        let original: Vec<u8> = (0..3 * CHUNK)
            .map(|i| {
                // xorshift-style mixing defeats the compressor enough to keep
                // the compressed stream longer than one feed slice.
                let x = (i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
                (x >> 32) as u8 ^ x as u8
            })
            .collect();
        let compressed = gzip(&original);
        assert!(
            compressed.len() > CHUNK,
            "fixture must span multiple feed slices"
        );
        assert_eq!(decode(&compressed).unwrap(), original);
    }

    /// Truncating a valid stream anywhere after the first byte must surface
    /// `Incomplete`, never a short success.
    #[test]
    fn truncation_reports_incomplete() {
        let compressed = gzip(&pattern(4096));
        for cut in [1, 2, 9, 10, compressed.len() / 2, compressed.len() - 1] {
            let result = decode(&compressed[..cut]);
            assert_eq!(
                result,
                Err(DecodeError::Incomplete),
                "cut at {cut} of {}",
                compressed.len()
            );
        }
    }

    /// A mangled stored-block length (LEN/NLEN complement violation) is
    /// deterministic corruption regardless of payload content.
    #[test]
    fn corrupt_payload_reports_data_corruption() {
        let mut enc = GzEncoder::new(Vec::new(), Compression::none());
        enc.write_all(b"stored blocks have checkable lengths").unwrap();
        let mut compressed = enc.finish().unwrap();

        // Layout with Compression::none(): 10 header bytes, then the stored
        // block: 1 flag byte, LEN (2), NLEN (2).  Breaking NLEN breaks the
        // complement check.
        compressed[13] ^= 0xFF;

        let err = decode(&compressed).unwrap_err();
        assert!(err.is_corruption(), "expected corruption, got {err:?}");
    }

    /// A flipped gzip magic byte is rejected as corruption before any
    /// payload is decoded.
    #[test]
    fn corrupt_magic_reports_data_corruption() {
        let mut compressed = gzip(b"payload");
        compressed[0] ^= 0x01;
        let err = decode(&compressed).unwrap_err();
        assert!(err.is_corruption(), "expected corruption, got {err:?}");
    }

    /// Default policy stops at the first member and ignores the second.
    #[test]
    fn first_member_only_ignores_second_member() {
        let mut input = gzip(b"first");
        input.extend_from_slice(&gzip(b"second"));
        assert_eq!(decode(&input).unwrap(), b"first");
    }

    /// Default policy also ignores arbitrary trailing garbage.
    #[test]
    fn first_member_only_ignores_trailing_garbage() {
        let mut input = gzip(b"payload");
        input.extend_from_slice(b"\xDE\xAD\xBE\xEF trailing junk");
        assert_eq!(decode(&input).unwrap(), b"payload");
    }

    /// Concatenate policy decodes every member and joins the output.
    #[test]
    fn concatenate_decodes_all_members() {
        let mut input = gzip(b"first|");
        input.extend_from_slice(&gzip(b"second|"));
        input.extend_from_slice(&gzip(b"third"));

        let opts = DecodeOptions {
            member_policy: MemberPolicy::Concatenate,
        };
        assert_eq!(decode_with(&input, &opts).unwrap(), b"first|second|third");
    }

    /// Concatenate policy with members large enough that member boundaries
    /// and feed-slice boundaries interleave.
    #[test]
    fn concatenate_large_members() {
        let a = pattern(CHUNK + 333);
        let b = pattern(2 * CHUNK);
        let mut input = gzip(&a);
        input.extend_from_slice(&gzip(&b));

        let opts = DecodeOptions {
            member_policy: MemberPolicy::Concatenate,
        };
        let decoded = decode_with(&input, &opts).unwrap();
        assert_eq!(decoded.len(), a.len() + b.len());
        assert_eq!(&decoded[..a.len()], a.as_slice());
        assert_eq!(&decoded[a.len()..], b.as_slice());
    }

    /// Concatenate policy rejects trailing bytes that do not start a member.
    #[test]
    fn concatenate_rejects_trailing_garbage() {
        let mut input = gzip(b"payload");
        input.extend_from_slice(b"not a gzip member");

        let opts = DecodeOptions {
            member_policy: MemberPolicy::Concatenate,
        };
        let err = decode_with(&input, &opts).unwrap_err();
        assert!(err.is_corruption(), "expected corruption, got {err:?}");
    }

    /// Fragment chain bookkeeping: elides empties, keeps order, and the
    /// running total sizes the linearized buffer.
    #[test]
    fn fragment_chain_linearizes_in_order() {
        let mut chain = FragmentChain::new();
        chain.push(vec![1, 2, 3]);
        chain.push(Vec::new());
        chain.push(vec![4]);
        chain.push(vec![5, 6]);
        assert_eq!(chain.total, 6);

        let out = chain.into_vec();
        assert_eq!(out, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(out.capacity(), 6);
    }
}
