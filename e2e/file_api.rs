//! E2E Test Suite 03: File API
//!
//! Validates the whole-file decode wrapper (`io::file`): file-to-file
//! decompression, preference handling, and error propagation as `io::Error`.
//!
//! Tests use `tempfile` for real filesystem round-trips.

use std::fs;
use std::io::{ErrorKind, Write};

use flate2::write::GzEncoder;
use flate2::Compression;
use gzdec::inflate::MemberPolicy;
use gzdec::io::{decompress_filename, Prefs};

fn gzip(data: &[u8]) -> Vec<u8> {
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(data).unwrap();
    enc.finish().unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 1: File-to-file round-trip
// ─────────────────────────────────────────────────────────────────────────────

/// Compress to a temp file, decode it through the file API, compare bytes
/// and the returned count.
#[test]
fn file_to_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("data.gz");
    let dst = dir.path().join("data.out");

    let original: Vec<u8> = b"file api round trip ".iter().cycle().take(8192).cloned().collect();
    fs::write(&src, gzip(&original)).unwrap();

    let prefs = Prefs {
        silent: true,
        ..Prefs::default()
    };
    let n = decompress_filename(
        src.to_str().unwrap(),
        dst.to_str().unwrap(),
        &prefs,
    )
    .unwrap();

    assert_eq!(n as usize, original.len());
    assert_eq!(fs::read(&dst).unwrap(), original);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 2: Empty compressed file
// ─────────────────────────────────────────────────────────────────────────────

/// A zero-byte input file decodes to a zero-byte output file without error.
#[test]
fn empty_file_decodes_to_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("empty.gz");
    let dst = dir.path().join("empty.out");
    fs::write(&src, b"").unwrap();

    let prefs = Prefs {
        silent: true,
        ..Prefs::default()
    };
    let n = decompress_filename(src.to_str().unwrap(), dst.to_str().unwrap(), &prefs).unwrap();

    assert_eq!(n, 0);
    assert_eq!(fs::read(&dst).unwrap(), b"");
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 3: Member policy flows through the prefs
// ─────────────────────────────────────────────────────────────────────────────

/// The concat preference decodes a two-member file completely; the default
/// stops after the first member.
#[test]
fn member_policy_respected() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("multi.gz");
    let dst = dir.path().join("multi.out");

    let mut blob = gzip(b"one|");
    blob.extend_from_slice(&gzip(b"two"));
    fs::write(&src, blob).unwrap();

    let mut prefs = Prefs {
        silent: true,
        ..Prefs::default()
    };
    decompress_filename(src.to_str().unwrap(), dst.to_str().unwrap(), &prefs).unwrap();
    assert_eq!(fs::read(&dst).unwrap(), b"one|");

    prefs.member_policy = MemberPolicy::Concatenate;
    decompress_filename(src.to_str().unwrap(), dst.to_str().unwrap(), &prefs).unwrap();
    assert_eq!(fs::read(&dst).unwrap(), b"one|two");
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 4: Error propagation
// ─────────────────────────────────────────────────────────────────────────────

/// A truncated input surfaces as `UnexpectedEof` and leaves no output file.
#[test]
fn truncated_input_is_unexpected_eof() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("cut.gz");
    let dst = dir.path().join("cut.out");

    let compressed = gzip(b"soon to be truncated");
    fs::write(&src, &compressed[..compressed.len() - 5]).unwrap();

    let prefs = Prefs {
        silent: true,
        ..Prefs::default()
    };
    let err =
        decompress_filename(src.to_str().unwrap(), dst.to_str().unwrap(), &prefs).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    assert!(!dst.exists(), "failed decode must not leave an output file");
}

/// A corrupt input surfaces as `InvalidData`.
#[test]
fn corrupt_input_is_invalid_data() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("bad.gz");
    let dst = dir.path().join("bad.out");

    let mut compressed = gzip(b"about to be vandalized");
    compressed[1] ^= 0xFF;
    fs::write(&src, compressed).unwrap();

    let prefs = Prefs {
        silent: true,
        ..Prefs::default()
    };
    let err =
        decompress_filename(src.to_str().unwrap(), dst.to_str().unwrap(), &prefs).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);
}

/// A missing input file propagates the underlying I/O error with the path
/// in the message.
#[test]
fn missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("nope.gz");
    let dst = dir.path().join("nope.out");

    let prefs = Prefs {
        silent: true,
        ..Prefs::default()
    };
    let err =
        decompress_filename(src.to_str().unwrap(), dst.to_str().unwrap(), &prefs).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.to_string().contains("nope.gz"));
}
