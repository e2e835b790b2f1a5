//! File entry points.
//!
//! Each top-level record is tied to one file extension, or for library tables
//! to an exact file name. Paths are checked before any I/O, so a wrong path
//! fails with [`SexprError::UnsupportedFile`] even when it does not exist.

use std::fs;
use std::path::{Path, PathBuf};

use crate::binding::{SExpr, Strictness};
use crate::errors::SexprError;
use crate::schema::{Footprint, FpLibTable, KicadPcb, KicadSymbolLib, SymLibTable};
use crate::syntax::{self, Term};

// ============================================================================
// FILE KINDS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Board,
    Footprint,
    SymbolLib,
    FootprintTable,
    SymbolTable,
}

impl FileKind {
    pub const ALL: [FileKind; 5] = [
        FileKind::Board,
        FileKind::Footprint,
        FileKind::SymbolLib,
        FileKind::FootprintTable,
        FileKind::SymbolTable,
    ];

    /// The extension (with its dot) or exact file name this kind requires.
    pub fn expected(self) -> &'static str {
        match self {
            FileKind::Board => ".kicad_pcb",
            FileKind::Footprint => ".kicad_mod",
            FileKind::SymbolLib => ".kicad_sym",
            FileKind::FootprintTable => "fp-lib-table",
            FileKind::SymbolTable => "sym-lib-table",
        }
    }

    pub fn matches(self, path: &Path) -> bool {
        let expected = self.expected();
        match expected.strip_prefix('.') {
            Some(ext) => path.extension().map_or(false, |e| e == ext),
            None => path.file_name().map_or(false, |name| name == expected),
        }
    }

    /// # Examples
    ///
    /// ```rust
    /// use std::path::Path;
    /// use kicadfiles::files::FileKind;
    ///
    /// assert_eq!(FileKind::detect(Path::new("a/b.kicad_mod")), Some(FileKind::Footprint));
    /// assert_eq!(FileKind::detect(Path::new("proj/fp-lib-table")), Some(FileKind::FootprintTable));
    /// assert_eq!(FileKind::detect(Path::new("notes.txt")), None);
    /// ```
    pub fn detect(path: &Path) -> Option<FileKind> {
        Self::ALL.into_iter().find(|kind| kind.matches(path))
    }

    fn check(self, path: &Path) -> Result<(), SexprError> {
        if self.matches(path) {
            Ok(())
        } else {
            Err(SexprError::UnsupportedFile {
                path: path.to_path_buf(),
                expected: self.expected().to_string(),
            })
        }
    }
}

/// A record type stored as a whole file.
pub trait KicadFile: SExpr {
    const KIND: FileKind;
}

impl KicadFile for KicadPcb {
    const KIND: FileKind = FileKind::Board;
}

impl KicadFile for Footprint {
    const KIND: FileKind = FileKind::Footprint;
}

impl KicadFile for KicadSymbolLib {
    const KIND: FileKind = FileKind::SymbolLib;
}

impl KicadFile for FpLibTable {
    const KIND: FileKind = FileKind::FootprintTable;
}

impl KicadFile for SymLibTable {
    const KIND: FileKind = FileKind::SymbolTable;
}

// ============================================================================
// LOAD / SAVE
// ============================================================================

/// Reads and decodes a file of kind `T`.
pub fn load<T: KicadFile>(path: impl AsRef<Path>, strictness: Strictness) -> Result<T, SexprError> {
    let path = path.as_ref();
    T::KIND.check(path)?;
    let term = read_term(path)?;
    T::from_term(&term, strictness)
}

/// Encodes `value` and writes it to `path` with a trailing newline.
pub fn save<T: KicadFile>(value: &T, path: impl AsRef<Path>) -> Result<(), SexprError> {
    let path = path.as_ref();
    T::KIND.check(path)?;
    write_text(path, value.to_sexpr_string())
}

/// Reads a file into a raw term tree without binding it.
pub fn read_term(path: &Path) -> Result<Term, SexprError> {
    let text = fs::read_to_string(path).map_err(|source| io_error(path, source))?;
    syntax::parse_named(&text, &path.display().to_string())
}

fn write_text(path: &Path, mut text: String) -> Result<(), SexprError> {
    text.push('\n');
    fs::write(path, text).map_err(|source| io_error(path, source))
}

fn io_error(path: &Path, source: std::io::Error) -> SexprError {
    SexprError::Io {
        path: PathBuf::from(path),
        source,
    }
}

// ============================================================================
// ANY DOCUMENT
// ============================================================================

/// A decoded file of any supported kind, for tools that pick the type from
/// the path.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Board(KicadPcb),
    Footprint(Footprint),
    SymbolLib(KicadSymbolLib),
    FootprintTable(FpLibTable),
    SymbolTable(SymLibTable),
}

impl Document {
    pub fn from_term(kind: FileKind, term: &Term, strictness: Strictness) -> Result<Self, SexprError> {
        Ok(match kind {
            FileKind::Board => Document::Board(KicadPcb::from_term(term, strictness)?),
            FileKind::Footprint => Document::Footprint(Footprint::from_term(term, strictness)?),
            FileKind::SymbolLib => Document::SymbolLib(KicadSymbolLib::from_term(term, strictness)?),
            FileKind::FootprintTable => {
                Document::FootprintTable(FpLibTable::from_term(term, strictness)?)
            }
            FileKind::SymbolTable => Document::SymbolTable(SymLibTable::from_term(term, strictness)?),
        })
    }

    pub fn load(path: impl AsRef<Path>, strictness: Strictness) -> Result<Self, SexprError> {
        let path = path.as_ref();
        let kind = FileKind::detect(path).ok_or_else(|| SexprError::UnsupportedFile {
            path: path.to_path_buf(),
            expected: FileKind::ALL.map(FileKind::expected).join(", "),
        })?;
        let term = read_term(path)?;
        Self::from_term(kind, &term, strictness)
    }

    pub fn kind(&self) -> FileKind {
        match self {
            Document::Board(_) => FileKind::Board,
            Document::Footprint(_) => FileKind::Footprint,
            Document::SymbolLib(_) => FileKind::SymbolLib,
            Document::FootprintTable(_) => FileKind::FootprintTable,
            Document::SymbolTable(_) => FileKind::SymbolTable,
        }
    }

    pub fn encode(&self) -> Term {
        match self {
            Document::Board(value) => value.encode(),
            Document::Footprint(value) => value.encode(),
            Document::SymbolLib(value) => value.encode(),
            Document::FootprintTable(value) => value.encode(),
            Document::SymbolTable(value) => value.encode(),
        }
    }

    pub fn to_sexpr_string(&self) -> String {
        syntax::pretty::format(&self.encode(), 0)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SexprError> {
        let path = path.as_ref();
        self.kind().check(path)?;
        write_text(path, self.to_sexpr_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_checks() {
        assert!(FileKind::Board.matches(Path::new("x/board.kicad_pcb")));
        assert!(!FileKind::Board.matches(Path::new("x/board.kicad_pcb.bak")));
        assert!(FileKind::SymbolTable.matches(Path::new("sym-lib-table")));
        assert!(!FileKind::SymbolTable.matches(Path::new("my-sym-lib-table")));
    }

    #[test]
    fn test_wrong_extension_before_io() {
        let err = load::<KicadPcb>("does/not/exist.kicad_mod", Strictness::Strict).unwrap_err();
        match err {
            SexprError::UnsupportedFile { expected, .. } => assert_eq!(expected, ".kicad_pcb"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load::<Footprint>("does/not/exist.kicad_mod", Strictness::Strict).unwrap_err();
        assert!(matches!(err, SexprError::Io { .. }));
    }

    #[test]
    fn test_unknown_document_kind() {
        let err = Document::load("readme.md", Strictness::Strict).unwrap_err();
        assert!(err.to_string().contains("fp-lib-table"));
    }
}
