//! The `kicadfiles` command-line interface.
//!
//! Thin front end over [`crate::files`]: every subcommand loads through the
//! same entry points a library user would call.

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process;
use termcolor::StandardStream;
use walkdir::WalkDir;

use crate::binding::Strictness;
use crate::cli::args::{Command, KicadArgs};
use crate::errors::{print_error, SexprError};
use crate::files::{self, Document, FileKind};
use crate::syntax::pretty;

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = KicadArgs::parse();
    let strictness = Strictness::from(args.strictness);
    let mut stdout = StandardStream::stdout(output::color_choice(args.color));

    let result = match args.command {
        Command::Check { path } => handle_check(&mut stdout, &path, strictness),
        Command::Format { file, output } => handle_format(&file, output.as_deref(), strictness),
        Command::Roundtrip { file } => handle_roundtrip(&mut stdout, &file, strictness),
        Command::Tree { file, json } => handle_tree(&file, json),
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            print_error(e);
            process::exit(1);
        }
    }
}

// ============================================================================
// SUBCOMMANDS
// ============================================================================

/// Decodes each file, then decodes its encoding again in strict mode and
/// compares the two records.
fn handle_check(
    stdout: &mut StandardStream,
    root: &Path,
    strictness: Strictness,
) -> Result<bool, SexprError> {
    let files = discover(root);
    if files.is_empty() {
        output::print_text(&format!("No KiCad files found under {}", root.display()));
        return Ok(true);
    }

    let mut failed = 0;
    for file in &files {
        let failure = check_file(file, strictness).err();
        if failure.is_some() {
            failed += 1;
        }
        output::print_status(stdout, file, failure.as_deref());
    }
    output::print_summary(stdout, files.len() - failed, failed);
    Ok(failed == 0)
}

fn check_file(path: &Path, strictness: Strictness) -> Result<(), String> {
    let document = Document::load(path, strictness).map_err(|e| e.to_string())?;
    let again = Document::from_term(document.kind(), &document.encode(), Strictness::Strict)
        .map_err(|e| format!("re-decode failed: {e}"))?;
    if again != document {
        return Err("re-decoded record differs from the first decode".to_string());
    }
    Ok(())
}

fn handle_format(
    file: &Path,
    output_path: Option<&Path>,
    strictness: Strictness,
) -> Result<bool, SexprError> {
    let document = Document::load(file, strictness)?;
    match output_path {
        Some(path) => document.save(path)?,
        None => output::print_text(&document.to_sexpr_string()),
    }
    Ok(true)
}

/// Exits non-zero when the rewrite changes the file.
fn handle_roundtrip(
    stdout: &mut StandardStream,
    file: &Path,
    strictness: Strictness,
) -> Result<bool, SexprError> {
    let kind = detect(file)?;
    let term = files::read_term(file)?;
    let document = Document::from_term(kind, &term, strictness)?;
    let before = pretty::format(&term, 0);
    let changed = output::print_roundtrip(stdout, &before, &document.to_sexpr_string());
    Ok(!changed)
}

fn handle_tree(file: &Path, json: bool) -> Result<bool, SexprError> {
    let term = files::read_term(file)?;
    if json {
        let text = serde_json::to_string_pretty(&term).map_err(|e| SexprError::Io {
            path: file.to_path_buf(),
            source: e.into(),
        })?;
        output::print_text(&text);
    } else {
        output::print_text(&term.to_string());
    }
    Ok(true)
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

fn detect(file: &Path) -> Result<FileKind, SexprError> {
    FileKind::detect(file).ok_or_else(|| SexprError::UnsupportedFile {
        path: file.to_path_buf(),
        expected: FileKind::ALL.map(FileKind::expected).join(", "),
    })
}

/// Recognised files under `root`, sorted for a stable report order.
fn discover(root: &Path) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| FileKind::detect(path).is_some())
        .collect();
    found.sort();
    found
}
