//! Command-line argument parsing for the `gzdec` binary.
//!
//! The entry points are [`parse_args`] (reads `std::env::args()`) and
//! [`parse_args_from`] (takes an explicit slice, suitable for unit-testing).
//! Both return a [`ParsedArgs`] value.
//!
//! Short options may be aggregated (e.g. `-cq`).  A bare `--` marks the end
//! of options; subsequent arguments are treated as file paths regardless of
//! whether they start with `-`.  Bad or unrecognised options return an `Err`
//! whose message begins with `"bad usage: "`.

use anyhow::{anyhow, Result};

use crate::cli::help::{print_usage, print_version};
use crate::inflate::MemberPolicy;
use crate::io::prefs::{set_display_level, Prefs};

/// Complete set of options and filenames produced by the argument parse.
#[derive(Debug)]
pub struct ParsedArgs {
    /// Decode preferences (silent toggle, member policy).
    pub prefs: Prefs,
    /// Input path; `None` means stdin.
    pub input: Option<String>,
    /// Output path; `None` means "derive from input or use stdout".
    pub output: Option<String>,
    /// Force output to stdout (`-c`).
    pub to_stdout: bool,
    /// When `true`, `--help` or `--version` was handled; the caller should
    /// exit 0 without decoding anything.
    pub exit_early: bool,
    /// Program name (argv[0]), used in help text.
    pub exe_name: String,
}

/// Parse `std::env::args()` (skipping argv[0]).
pub fn parse_args() -> Result<ParsedArgs> {
    let exe_name = std::env::args().next().unwrap_or_else(|| "gzdec".into());
    let argv: Vec<String> = std::env::args().skip(1).collect();
    parse_args_from(&exe_name, &argv)
}

/// Parse an explicit argument list.  Callable from tests without touching
/// `std::env`.
pub fn parse_args_from(exe_name: &str, argv: &[String]) -> Result<ParsedArgs> {
    let mut args = ParsedArgs {
        prefs: Prefs::default(),
        input: None,
        output: None,
        to_stdout: false,
        exit_early: false,
        exe_name: exe_name.to_string(),
    };
    let mut display = crate::config::DISPLAY_LEVEL_DEFAULT;
    let mut options_done = false;

    let mut iter = argv.iter().peekable();
    while let Some(arg) = iter.next() {
        if options_done || !arg.starts_with('-') || arg == "-" {
            push_filename(&mut args, arg)?;
            continue;
        }

        match arg.as_str() {
            "--" => options_done = true,
            "--stdout" => args.to_stdout = true,
            "--quiet" => {
                args.prefs.silent = true;
                display = display.min(1);
            }
            "--verbose" => display += 1,
            "--first-member" => args.prefs.member_policy = MemberPolicy::FirstMemberOnly,
            "--concat" => args.prefs.member_policy = MemberPolicy::Concatenate,
            "--help" => {
                print_usage(exe_name);
                args.exit_early = true;
            }
            "--version" => {
                print_version();
                args.exit_early = true;
            }
            "--output" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("bad usage: --output requires a file name"))?;
                args.output = Some(value.clone());
            }
            long if long.starts_with("--output=") => {
                args.output = Some(long["--output=".len()..].to_string());
            }
            long if long.starts_with("--") => {
                return Err(anyhow!("bad usage: unknown option {long}"));
            }
            short => {
                // Aggregated short options: -cq, -qc, …; -o consumes the next
                // argument and must therefore be last in its cluster.
                let mut chars = short[1..].chars();
                while let Some(c) = chars.next() {
                    match c {
                        'c' => args.to_stdout = true,
                        'q' => {
                            args.prefs.silent = true;
                            display = display.min(1);
                        }
                        'v' => display += 1,
                        'h' => {
                            print_usage(exe_name);
                            args.exit_early = true;
                        }
                        'V' => {
                            print_version();
                            args.exit_early = true;
                        }
                        'o' => {
                            let rest: String = chars.collect();
                            if !rest.is_empty() {
                                return Err(anyhow!(
                                    "bad usage: -o must be last in a cluster"
                                ));
                            }
                            let value = iter
                                .next()
                                .ok_or_else(|| anyhow!("bad usage: -o requires a file name"))?;
                            args.output = Some(value.clone());
                            break;
                        }
                        other => return Err(anyhow!("bad usage: unknown option -{other}")),
                    }
                }
            }
        }
    }

    set_display_level(display);
    Ok(args)
}

fn push_filename(args: &mut ParsedArgs, name: &str) -> Result<()> {
    if args.input.is_none() {
        args.input = Some(name.to_string());
        Ok(())
    } else if args.output.is_none() {
        args.output = Some(name.to_string());
        Ok(())
    } else {
        Err(anyhow!("bad usage: too many file arguments ({name})"))
    }
}
