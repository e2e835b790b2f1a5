//! Command-line arguments and subcommands for the `kicadfiles` binary.
//!
//! Uses the `clap` derive API; everything the binary can be configured with
//! lives here, apart from `RUST_LOG` for log verbosity.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::binding::Strictness;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "kicadfiles",
    version,
    about = "Read, check and rewrite KiCad S-expression files."
)]
pub struct KicadArgs {
    /// How decoding treats missing, malformed and unknown elements.
    #[arg(long, value_enum, global = true, default_value_t = StrictnessArg::Strict)]
    pub strictness: StrictnessArg,

    /// When to use colored output.
    #[arg(long, value_enum, global = true, default_value_t = ColorArg::Auto)]
    pub color: ColorArg,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Decode every KiCad file under a path and check that it survives a rewrite.
    Check {
        /// A file or a directory to search recursively.
        #[arg(default_value = ".")]
        path: PathBuf,
    },
    /// Decode a file and print it in KiCad layout.
    Format {
        #[arg(required = true)]
        file: PathBuf,
        /// Write to this file instead of stdout. Must be the same file kind.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show what a decode/encode cycle changes in a file.
    Roundtrip {
        #[arg(required = true)]
        file: PathBuf,
    },
    /// Dump the raw term tree of any S-expression file.
    Tree {
        #[arg(required = true)]
        file: PathBuf,
        /// Print the tree as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrictnessArg {
    Strict,
    Failsafe,
    Silent,
}

impl From<StrictnessArg> for Strictness {
    fn from(arg: StrictnessArg) -> Self {
        match arg {
            StrictnessArg::Strict => Strictness::Strict,
            StrictnessArg::Failsafe => Strictness::Failsafe,
            StrictnessArg::Silent => Strictness::Silent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}
