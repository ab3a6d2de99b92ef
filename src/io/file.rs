//! Whole-file decode plumbing for the CLI.
//!
//! One call reads a complete compressed input blob (file or stdin), runs it
//! through the decode core, and writes the result (file or stdout).  This is
//! deliberately not a streaming path: the decode core consumes one in-memory
//! blob per invocation, so the file layer materializes input and output
//! around it.

use std::fs;
use std::io::{self, Read, Write};

use crate::displaylevel;
use crate::inflate::{decode_with, DecodeError, DecodeOptions};
use crate::io::prefs::Prefs;

/// Sentinel input name selecting standard input.
pub const STDIN_MARK: &str = "stdin";
/// Sentinel output name selecting standard output.
pub const STDOUT_MARK: &str = "stdout";

/// Returns `true` when `name` selects standard input.
pub fn is_stdin(name: &str) -> bool {
    name == STDIN_MARK || name == "-"
}

/// Returns `true` when `name` selects standard output.
pub fn is_stdout(name: &str) -> bool {
    name == STDOUT_MARK || name == "-"
}

// ---------------------------------------------------------------------------
// Helper: convert DecodeError to io::Error
// ---------------------------------------------------------------------------
fn decode_err_to_io(e: DecodeError) -> io::Error {
    let kind = match &e {
        DecodeError::Incomplete => io::ErrorKind::UnexpectedEof,
        DecodeError::MemoryExhausted => io::ErrorKind::OutOfMemory,
        _ => io::ErrorKind::InvalidData,
    };
    io::Error::new(kind, e.to_string())
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Decompress `input` (a path, or stdin via `-`/`stdin`) into `output`
/// (a path, or stdout via `-`/`stdout`).
///
/// Reads the entire compressed input, decodes it in one call, and writes the
/// entire result.  Reports the input/output byte counts at notification
/// level 2 unless `prefs.silent` is set.
///
/// # Returns
///
/// The number of decompressed bytes written.
///
/// # Errors
///
/// I/O failures on either side, or any decode failure mapped onto
/// `io::Error` (`UnexpectedEof` for a truncated stream, `InvalidData` for
/// corruption).
pub fn decompress_filename(input: &str, output: &str, prefs: &Prefs) -> io::Result<u64> {
    let compressed = read_input_blob(input)?;

    if !prefs.silent {
        displaylevel!(3, "{}: {} compressed bytes read\n", input, compressed.len());
    }

    let opts = DecodeOptions {
        member_policy: prefs.member_policy,
    };
    let decoded = decode_with(&compressed, &opts).map_err(decode_err_to_io)?;

    write_output_blob(output, &decoded)?;

    if !prefs.silent {
        displaylevel!(
            2,
            "{}: {} bytes -> {} bytes\n",
            input,
            compressed.len(),
            decoded.len()
        );
    }

    Ok(decoded.len() as u64)
}

fn read_input_blob(input: &str) -> io::Result<Vec<u8>> {
    if is_stdin(input) {
        let mut buf = Vec::new();
        io::stdin().lock().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        fs::read(input)
            .map_err(|e| io::Error::new(e.kind(), format!("cannot read {input}: {e}")))
    }
}

fn write_output_blob(output: &str, data: &[u8]) -> io::Result<()> {
    if is_stdout(output) {
        let mut stdout = io::stdout().lock();
        stdout.write_all(data)?;
        stdout.flush()
    } else {
        fs::write(output, data)
            .map_err(|e| io::Error::new(e.kind(), format!("cannot write {output}: {e}")))
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
