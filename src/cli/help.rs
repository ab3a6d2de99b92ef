//! Usage and version text for the `gzdec` binary.

/// Print the usage summary to stderr.
pub fn print_usage(exe_name: &str) {
    eprint!(
        "\
Usage: {exe_name} [OPTIONS] [INPUT] [OUTPUT]

Decompress a gzip file.  INPUT defaults to stdin; OUTPUT defaults to the
INPUT name without its .gz suffix, or stdout when reading stdin.
Use `-` for INPUT or OUTPUT to select stdin/stdout explicitly.

Options:
  -c, --stdout         write to stdout
  -o, --output FILE    write to FILE
  -q, --quiet          suppress diagnostics
  -v, --verbose        more diagnostics (repeatable)
      --first-member   stop at the first gzip member (default)
      --concat         decode concatenated members back-to-back
  -h, --help           show this help
  -V, --version        show version
"
    );
}

/// Print the version line to stderr.
pub fn print_version() {
    eprintln!("gzdec v{}", crate::GZDEC_VERSION_STRING);
}
