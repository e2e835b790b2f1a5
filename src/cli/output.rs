//! Handles all user-facing output for the CLI.
//!
//! Colored status lines, diffs and summaries go through `termcolor`; the
//! color choice is resolved once from `--color` and whether stdout is a
//! terminal.

use difference::{Changeset, Difference};
use std::io::{self, Write};
use std::path::Path;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::cli::args::ColorArg;

/// Resolves `--color` against the terminal.
pub fn color_choice(arg: ColorArg) -> ColorChoice {
    match arg {
        ColorArg::Always => ColorChoice::Always,
        ColorArg::Never => ColorChoice::Never,
        ColorArg::Auto if atty::is(atty::Stream::Stdout) => ColorChoice::Auto,
        ColorArg::Auto => ColorChoice::Never,
    }
}

// ============================================================================
// CORE OUTPUT FUNCTIONS
// ============================================================================

/// Prints one `OK`/`FAIL` line of a check run.
pub fn print_status(stdout: &mut StandardStream, path: &Path, failure: Option<&str>) {
    let (label, color) = match failure {
        None => ("OK  ", Color::Green),
        Some(_) => ("FAIL", Color::Red),
    };
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
    let _ = write!(stdout, "{label}");
    let _ = stdout.reset();
    let _ = writeln!(stdout, " {}", path.display());
    if let Some(reason) = failure {
        let _ = writeln!(stdout, "      {reason}");
    }
}

pub fn print_summary(stdout: &mut StandardStream, passed: usize, failed: usize) {
    let color = if failed == 0 { Color::Green } else { Color::Red };
    let _ = writeln!(stdout);
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
    let _ = writeln!(stdout, "{passed} passed, {failed} failed");
    let _ = stdout.reset();
}

/// Prints a line diff between two pretty-printed trees. Returns whether they
/// differ.
pub fn print_roundtrip(stdout: &mut StandardStream, before: &str, after: &str) -> bool {
    let changeset = Changeset::new(before, after, "\n");
    if changeset.distance == 0 {
        let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true));
        let _ = writeln!(stdout, "No differences.");
        let _ = stdout.reset();
        return false;
    }
    print_diff(stdout, &changeset.diffs);
    true
}

/// Writes text to stdout, ignoring a closed pipe.
pub fn print_text(text: &str) {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    let _ = writeln!(lock, "{text}");
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

fn print_diff(stdout: &mut StandardStream, diffs: &[Difference]) {
    for diff in diffs {
        let (prefix, color, text) = match diff {
            Difference::Same(ref x) => (' ', None, x),
            Difference::Add(ref x) => ('+', Some(Color::Green), x),
            Difference::Rem(ref x) => ('-', Some(Color::Red), x),
        };
        match color {
            Some(color) => {
                let _ = stdout.set_color(ColorSpec::new().set_fg(Some(color)));
            }
            None => {
                let _ = stdout.reset();
            }
        }
        for line in text.lines() {
            let _ = writeln!(stdout, "{prefix}{line}");
        }
    }
    let _ = stdout.reset();
}
