//! Binary entry point for the `gzdec` command-line tool.
//!
//! # Control flow
//!
//! 1. [`parse_args`](gzdec::cli::parse_args) processes all flags and builds a
//!    [`ParsedArgs`](gzdec::cli::ParsedArgs) value.
//! 2. [`run`] resolves the output filename and dispatches the decode.
//!
//! Exit codes: 0 on success, 1 on any decode or I/O failure.

use std::process::ExitCode;

use gzdec::cli::{parse_args, ParsedArgs};
use gzdec::displaylevel;
use gzdec::io::{decompress_filename, STDIN_MARK, STDOUT_MARK};

const GZ_EXTENSION: &str = ".gz";

/// Resolve the destination name from the parsed arguments.
///
/// Priority: explicit `-o`/second positional, then `-c` (stdout), then the
/// input name with its `.gz` suffix stripped.  Reading stdin without an
/// explicit destination writes to stdout.
fn resolve_output(args: &ParsedArgs) -> Result<String, String> {
    if let Some(output) = &args.output {
        return Ok(output.clone());
    }
    if args.to_stdout {
        return Ok(STDOUT_MARK.to_string());
    }
    let input = args.input.as_deref().unwrap_or(STDIN_MARK);
    if gzdec::io::file::is_stdin(input) {
        return Ok(STDOUT_MARK.to_string());
    }
    match input.strip_suffix(GZ_EXTENSION) {
        Some(stem) if !stem.is_empty() => Ok(stem.to_string()),
        _ => Err(format!(
            "cannot derive output name from {input}: unknown suffix, use -o or -c"
        )),
    }
}

/// Execute the decode selected by argument parsing.
fn run(args: ParsedArgs) -> ExitCode {
    let input = args.input.clone().unwrap_or_else(|| STDIN_MARK.to_string());
    let output = match resolve_output(&args) {
        Ok(output) => output,
        Err(msg) => {
            displaylevel!(1, "gzdec: {msg}\n");
            return ExitCode::FAILURE;
        }
    };

    match decompress_filename(&input, &output, &args.prefs) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            displaylevel!(1, "gzdec: {input}: {e}\n");
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    match parse_args() {
        Ok(args) if args.exit_early => ExitCode::SUCCESS,
        Ok(args) => run(args),
        Err(e) => {
            eprintln!("gzdec: {e}");
            ExitCode::FAILURE
        }
    }
}
