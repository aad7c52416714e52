use std::{
    fs, io,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

/// The raster formats the scan recognizes by default.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif"];

/// Which files count as images, by extension, case-insensitive.
#[derive(Clone, Debug)]
pub struct ExtensionFilter {
    extensions: Vec<String>,
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self::new(IMAGE_EXTENSIONS.iter().map(|ext| ext.to_string()))
    }
}

impl ExtensionFilter {
    pub fn new(extensions: impl IntoIterator<Item = String>) -> Self {
        Self {
            extensions: extensions
                .into_iter()
                .map(|ext| ext.to_lowercase())
                .collect(),
        }
    }

    pub fn matches(&self, path: impl AsRef<Path>) -> bool {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .is_some_and(|ext| self.extensions.iter().any(|allowed| *allowed == ext))
    }
}

/// Collects all matching files under the given directories, recursively.
/// Roots are visited in argument order and every directory is read in
/// lexicographic filename order, so the result is reproducible between runs
/// and platforms. Unreadable directory entries are logged and skipped.
pub fn find_images(
    roots: impl IntoIterator<Item = impl AsRef<Path>>,
    filter: &ExtensionFilter,
) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for root in roots {
        for entry in WalkDir::new(root.as_ref()).sort_by_file_name() {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_file() && filter.matches(entry.path()) {
                        files.push(entry.into_path());
                    }
                }
                Err(e) => log::warn!("Failed to walk a directory entry: {e}"),
            }
        }
    }
    files
}

/// Try to read the file, return None if it doesn't exist
pub fn read_optional_file(path: impl AsRef<Path>) -> io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
        Ok(s) => Ok(Some(s)),
    }
}
