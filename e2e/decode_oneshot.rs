//! E2E Test Suite 01: One-shot decode
//!
//! Validates the public `decode` / `decode_with` API against fixtures
//! produced by an independent gzip compressor (flate2's encoder), covering
//! round-trips across compression levels, chunk-boundary payload sizes, and
//! multi-member inputs under both member policies.

use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;
use gzdec::{decode, decode_with, DecodeOptions, MemberPolicy, CHUNK};

fn gzip_at(data: &[u8], level: Compression) -> Vec<u8> {
    let mut enc = GzEncoder::new(Vec::new(), level);
    enc.write_all(data).unwrap();
    enc.finish().unwrap()
}

fn gzip(data: &[u8]) -> Vec<u8> {
    gzip_at(data, Compression::default())
}

/// Text-like repetitive payload of the requested length.
fn lorem(len: usize) -> Vec<u8> {
    b"Lorem ipsum dolor sit amet, consectetur adipiscing elit. "
        .iter()
        .cycle()
        .take(len)
        .cloned()
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 1: Round-trip across compression levels
// ─────────────────────────────────────────────────────────────────────────────

/// The decoder must accept streams produced at any compression level,
/// including stored (level 0) blocks.
#[test]
fn round_trip_all_compression_levels() {
    let original = lorem(64 * 1024);
    for level in 0..=9u32 {
        let compressed = gzip_at(&original, Compression::new(level));
        assert_eq!(
            decode(&compressed).unwrap(),
            original,
            "mismatch at level {level}"
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 2: Chunk-boundary payload sizes
// ─────────────────────────────────────────────────────────────────────────────

/// Output sizes straddling every fragment boundary the drain loop can hit.
#[test]
fn round_trip_fragment_boundaries() {
    for &len in &[
        0usize,
        1,
        CHUNK - 1,
        CHUNK,
        CHUNK + 1,
        2 * CHUNK,
        5 * CHUNK + 4321,
    ] {
        let original = lorem(len);
        let compressed = gzip(&original);
        let decoded = decode(&compressed).unwrap();
        assert_eq!(decoded, original, "mismatch at payload length {len}");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 3: Empty input
// ─────────────────────────────────────────────────────────────────────────────

/// Zero bytes in, zero bytes out, no error.
#[test]
fn empty_input_is_empty_output() {
    assert_eq!(decode(b"").unwrap(), Vec::<u8>::new());
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 4: Header variations
// ─────────────────────────────────────────────────────────────────────────────

/// Optional gzip header fields (here the filename, as emitted by GzBuilder)
/// are the engine's business; the decoder must be indifferent to them.
#[test]
fn header_with_filename_field() {
    let original = lorem(1000);
    let mut enc = flate2::GzBuilder::new()
        .filename("original.txt")
        .write(Vec::new(), Compression::default());
    enc.write_all(&original).unwrap();
    let compressed = enc.finish().unwrap();

    assert_eq!(decode(&compressed).unwrap(), original);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 5: Multi-member inputs
// ─────────────────────────────────────────────────────────────────────────────

/// Both policies over a three-member input: default keeps the first member,
/// concat joins them all.
#[test]
fn member_policies_on_concatenated_input() {
    let members = [lorem(100), lorem(CHUNK), lorem(7)];
    let mut input = Vec::new();
    for m in &members {
        input.extend_from_slice(&gzip(m));
    }

    assert_eq!(decode(&input).unwrap(), members[0]);

    let opts = DecodeOptions {
        member_policy: MemberPolicy::Concatenate,
    };
    let expected: Vec<u8> = members.iter().flatten().cloned().collect();
    assert_eq!(decode_with(&input, &opts).unwrap(), expected);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 6: Memberwise empty payloads under concat
// ─────────────────────────────────────────────────────────────────────────────

/// Members with empty payloads contribute nothing but must not derail the
/// concatenation loop.
#[test]
fn concat_with_empty_members() {
    let mut input = gzip(b"");
    input.extend_from_slice(&gzip(b"middle"));
    input.extend_from_slice(&gzip(b""));

    let opts = DecodeOptions {
        member_policy: MemberPolicy::Concatenate,
    };
    assert_eq!(decode_with(&input, &opts).unwrap(), b"middle");
}
