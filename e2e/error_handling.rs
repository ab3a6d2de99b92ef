//! E2E Test Suite 02: Error handling
//!
//! Validates the decode error contract: truncation is always reported as
//! `Incomplete`, corruption is always a typed corruption error, and no path
//! panics on hostile input.

use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;
use gzdec::{decode, decode_with, DecodeError, DecodeOptions, MemberPolicy};

fn gzip(data: &[u8]) -> Vec<u8> {
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(data).unwrap();
    enc.finish().unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 1: Exhaustive truncation sweep
// ─────────────────────────────────────────────────────────────────────────────

/// Every proper prefix of a valid stream (from one byte up) must yield
/// `Incomplete` — never a short success, never a panic.
#[test]
fn every_truncation_offset_reports_incomplete() {
    let compressed = gzip(b"a modest payload, small enough to sweep every prefix");
    for cut in 1..compressed.len() {
        assert_eq!(
            decode(&compressed[..cut]),
            Err(DecodeError::Incomplete),
            "cut at {cut} of {}",
            compressed.len()
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 2: Header corruption
// ─────────────────────────────────────────────────────────────────────────────

/// Each of the fixed header fields, when mangled, must produce a corruption
/// error before any output is accepted.
#[test]
fn header_corruption_is_rejected() {
    let reference = gzip(b"header corruption fixture");

    // magic byte 0, magic byte 1, compression method
    for position in [0usize, 1, 2] {
        let mut bad = reference.clone();
        bad[position] = 0xAA;
        let err = decode(&bad).unwrap_err();
        assert!(
            err.is_corruption(),
            "byte {position}: expected corruption, got {err:?}"
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 3: Payload corruption
// ─────────────────────────────────────────────────────────────────────────────

/// A stored block with a broken LEN/NLEN complement is rejected
/// deterministically, independent of payload content.
#[test]
fn stored_block_length_corruption() {
    let mut enc = GzEncoder::new(Vec::new(), Compression::none());
    enc.write_all(b"uncompressed block bytes").unwrap();
    let mut compressed = enc.finish().unwrap();
    compressed[13] ^= 0x55; // NLEN no longer complements LEN

    let err = decode(&compressed).unwrap_err();
    assert!(err.is_corruption(), "expected corruption, got {err:?}");
}

/// A corrupted CRC32 trailer is caught by the engine's end-of-stream
/// verification.
#[test]
fn trailer_crc_corruption() {
    let mut compressed = gzip(b"the trailer guards this payload");
    let crc_offset = compressed.len() - 8; // CRC32 then ISIZE
    compressed[crc_offset] ^= 0xFF;

    let err = decode(&compressed).unwrap_err();
    assert!(err.is_corruption(), "expected corruption, got {err:?}");
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 4: Garbage-only input
// ─────────────────────────────────────────────────────────────────────────────

/// Pure garbage fails cleanly under both member policies.
#[test]
fn garbage_input_fails_cleanly() {
    let garbage: Vec<u8> = (0..4096u32)
        .map(|i| (i.wrapping_mul(2_654_435_761)) as u8)
        .collect();

    assert!(decode(&garbage).unwrap_err().is_corruption());

    let opts = DecodeOptions {
        member_policy: MemberPolicy::Concatenate,
    };
    assert!(decode_with(&garbage, &opts).unwrap_err().is_corruption());
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 5: Truncation inside a later member (concat policy)
// ─────────────────────────────────────────────────────────────────────────────

/// Under the concat policy a truncated second member is `Incomplete`: the
/// first member's output must not leak out as a partial success.
#[test]
fn truncated_second_member_under_concat() {
    let mut input = gzip(b"complete first member");
    let second = gzip(b"second member, about to be cut short");
    input.extend_from_slice(&second[..second.len() / 2]);

    let opts = DecodeOptions {
        member_policy: MemberPolicy::Concatenate,
    };
    assert_eq!(decode_with(&input, &opts), Err(DecodeError::Incomplete));
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 6: Error values are displayable and classified
// ─────────────────────────────────────────────────────────────────────────────

/// Errors render a human-readable message and classify corruption
/// consistently with their variant.
#[test]
fn error_display_and_classification() {
    let err = decode(b"\x1f\x8b\xff\xff\xff\xff").unwrap_err();
    assert!(err.is_corruption());
    assert!(err.to_string().starts_with("corrupt gzip stream"));

    assert!(!DecodeError::Incomplete.is_corruption());
    assert_eq!(DecodeError::Incomplete.to_string(), "truncated gzip stream");
}
