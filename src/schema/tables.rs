//! Library tables (`fp-lib-table`, `sym-lib-table`).

use crate::binding::{KiInt, KiStr, OptionalFlag};
use crate::sexpr_record;

sexpr_record! {
    /// One library: `(lib (name "N") (type "KiCad") (uri "...") (options "") (descr ""))`.
    pub struct LibEntry: "lib" {
        pub name: KiStr = KiStr::new("name", String::new()),
        pub kind: KiStr = KiStr::new("type", "KiCad".to_string()),
        pub uri: KiStr = KiStr::new("uri", String::new()),
        pub options: Option<KiStr> [token = "options"],
        pub descr: Option<KiStr> [token = "descr"],
        pub disabled: Option<OptionalFlag> [token = "disabled"],
        pub hidden: Option<OptionalFlag> [token = "hidden"],
    }
}

impl LibEntry {
    pub fn new(name: &str, uri: &str) -> Self {
        LibEntry {
            name: KiStr::new("name", name.to_string()),
            uri: KiStr::new("uri", uri.to_string()),
            ..LibEntry::default()
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled.as_ref().map_or(false, OptionalFlag::is_enabled)
    }
}

sexpr_record! {
    pub struct FpLibTable: "fp_lib_table" {
        pub version: Option<KiInt> [token = "version"],
        pub libraries: Vec<LibEntry>,
    }
}

sexpr_record! {
    pub struct SymLibTable: "sym_lib_table" {
        pub version: Option<KiInt> [token = "version"],
        pub libraries: Vec<LibEntry>,
    }
}
