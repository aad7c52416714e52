use std::{
    fs, io,
    path::{Path, PathBuf},
};

use super::scan::DuplicateRecord;

#[derive(thiserror::Error, Debug)]
pub enum RelocationError {
    #[error("'{path}' already exists in the quarantine", path = .path.display())]
    Collision { path: PathBuf },
    #[error("failed to move '{path}': {source}", path = .path.display())]
    Io {
        path: PathBuf,
        source: io::Error,
    },
}

#[derive(Debug, Default)]
pub struct RelocationReport {
    pub moved: Vec<PathBuf>,
    pub failed: Vec<RelocationError>,
}

impl RelocationReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Moves every duplicate into `quarantine` under its original filename. The
/// quarantine is created if it does not exist yet.
///
/// An occupied target name or a failed rename is collected into the report
/// and the remaining files are still moved. Nothing is ever overwritten.
pub fn relocate(
    duplicates: &[DuplicateRecord],
    quarantine: &Path,
) -> io::Result<RelocationReport> {
    fs::create_dir_all(quarantine)?;

    let mut report = RelocationReport::default();
    for dup in duplicates {
        match move_file(&dup.path, quarantine) {
            Ok(target) => {
                log::info!(
                    "Moved '{}' to '{}'",
                    dup.path.display(),
                    target.display()
                );
                report.moved.push(target);
            }
            Err(error) => {
                log::warn!("{error}");
                report.failed.push(error);
            }
        }
    }

    Ok(report)
}

fn move_file(path: &Path, quarantine: &Path) -> Result<PathBuf, RelocationError> {
    let name = path.file_name().ok_or_else(|| RelocationError::Io {
        path: path.to_owned(),
        source: io::Error::new(io::ErrorKind::InvalidInput, "the path has no filename"),
    })?;

    let target = quarantine.join(name);
    if target.symlink_metadata().is_ok() {
        return Err(RelocationError::Collision { path: target });
    }

    fs::rename(path, &target).map_err(|source| RelocationError::Io {
        path: path.to_owned(),
        source,
    })?;
    Ok(target)
}
