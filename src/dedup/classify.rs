use std::path::{Path, PathBuf};

use crate::bin_common::similarity::SimiArgs;
use crate::imghash::hamming::{Distance, Fingerprint, WidthMismatch};

use super::index::CanonicalIndex;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Classification {
    /// First of its kind, now in the index.
    NewCanonical,
    /// Within the threshold of an image seen earlier, kept out of the index.
    Duplicate { of: PathBuf, distance: Distance },
}

/// Looks `fingerprint` up in the index and inserts it if nothing matched.
/// Never touches the file system.
pub fn classify(
    index: &mut CanonicalIndex,
    path: &Path,
    fingerprint: Fingerprint,
    simi: &SimiArgs,
) -> Result<Classification, WidthMismatch> {
    match index.find_within(&fingerprint, simi.get_threshold())? {
        Some((entry, distance)) => Ok(Classification::Duplicate {
            of: entry.path.clone(),
            distance,
        }),
        None => {
            let entry = index.insert(fingerprint, path.to_owned());
            log::debug!(
                "New canonical {} from '{}'",
                entry.fingerprint,
                path.display()
            );
            Ok(Classification::NewCanonical)
        }
    }
}
