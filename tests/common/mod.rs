// NOTE: every test will complain about the functions it doesn't use
#![allow(unused)]

use std::path::PathBuf;

use tempfile::TempDir;

/// Returns a temporary directory inside cargo's tmpdir
pub fn tmp_dir() -> TempDir {
    TempDir::new_in(cargo_tmpdir()).expect("could not create temporary directory")
}

/// Returns cargo's tmpdir
pub fn cargo_tmpdir() -> PathBuf {
    PathBuf::from(option_env!("CARGO_TARGET_TMPDIR").expect("no cargo tmpdir???"))
}
