use std::path::PathBuf;

use rayon::prelude::*;

use crate::bin_common::similarity::SimiArgs;
use crate::imghash::{
    hamming::{Distance, Fingerprint, WidthMismatch},
    DecodeError, Fingerprinter,
};

use super::classify::{classify, Classification};
use super::index::CanonicalIndex;

/// A file within the threshold of an earlier one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateRecord {
    pub path: PathBuf,
    pub canonical: PathBuf,
    pub distance: Distance,
}

/// A file that could not be decoded and was skipped.
#[derive(Debug)]
pub struct UnreadableRecord {
    pub path: PathBuf,
    pub error: DecodeError,
}

#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub index: CanonicalIndex,
    pub duplicates: Vec<DuplicateRecord>,
    pub unreadable: Vec<UnreadableRecord>,
}

impl ScanOutcome {
    /// Every scanned file lands in exactly one of the three buckets.
    pub fn total(&self) -> usize {
        self.index.len() + self.duplicates.len() + self.unreadable.len()
    }
}

/// Fingerprints all files in parallel, then classifies them one at a time in
/// the order given. The order decides which file of a cluster becomes the
/// canonical one, the first seen wins, so it must be the same between runs.
///
/// Decode failures are logged and collected, they never abort the scan.
pub fn scan<F>(
    files: &[PathBuf],
    fingerprinter: &F,
    simi: &SimiArgs,
) -> Result<ScanOutcome, WidthMismatch>
where
    F: Fingerprinter + ?Sized,
{
    let fingerprints: Vec<Result<Fingerprint, DecodeError>> = files
        .par_iter()
        .map(|path| fingerprinter.fingerprint(path))
        .collect();

    let mut outcome = ScanOutcome::default();
    for (path, fingerprint) in files.iter().zip(fingerprints) {
        let fingerprint = match fingerprint {
            Ok(fingerprint) => fingerprint,
            Err(error) => {
                log::warn!("Skipping non-image '{}': {}", path.display(), error);
                outcome.unreadable.push(UnreadableRecord {
                    path: path.clone(),
                    error,
                });
                continue;
            }
        };

        match classify(&mut outcome.index, path, fingerprint, simi)? {
            Classification::NewCanonical => (),
            Classification::Duplicate { of, distance } => {
                outcome.duplicates.push(DuplicateRecord {
                    path: path.clone(),
                    canonical: of,
                    distance,
                });
            }
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod test {
    use std::{collections::HashMap, io, path::Path};

    use super::*;

    /// Serves canned fingerprints by filename, no file system involved.
    struct StubFingerprinter {
        fingerprints: HashMap<PathBuf, Fingerprint>,
    }

    impl StubFingerprinter {
        fn new<const N: usize>(files: [(&str, &[u8]); N]) -> Self {
            Self {
                fingerprints: files
                    .into_iter()
                    .map(|(name, bytes)| {
                        (name.into(), Fingerprint::from_bytes(bytes))
                    })
                    .collect(),
            }
        }
    }

    impl Fingerprinter for StubFingerprinter {
        fn fingerprint(&self, path: &Path) -> Result<Fingerprint, DecodeError> {
            self.fingerprints.get(path).cloned().ok_or_else(|| {
                DecodeError::Io(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "not an image",
                ))
            })
        }
    }

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn the_first_seen_becomes_canonical() {
        let stub = StubFingerprinter::new([
            ("a.jpg", &[0b0000_0000, 0]),
            ("b.jpg", &[0b0000_0111, 0]),
            ("c.jpg", &[0b1111_1111, 0xff]),
        ]);
        let files = paths(&["a.jpg", "b.jpg", "c.jpg"]);

        let outcome =
            scan(&files, &stub, &SimiArgs::default().threshold(10)).unwrap();

        assert_eq!(
            vec![DuplicateRecord {
                path: "b.jpg".into(),
                canonical: "a.jpg".into(),
                distance: 3,
            }],
            outcome.duplicates
        );
        let canonical: Vec<_> = outcome.index.iter().map(|e| e.path.clone()).collect();
        assert_eq!(vec![PathBuf::from("a.jpg"), "c.jpg".into()], canonical);
        assert!(outcome.unreadable.is_empty());
    }

    #[test]
    fn unreadable_files_do_not_abort_and_are_accounted_for() {
        let stub = StubFingerprinter::new([
            ("a.jpg", &[0u8, 0]),
            ("c.jpg", &[0xff, 0xff]),
        ]);
        let files = paths(&["a.jpg", "broken.png", "c.jpg"]);

        let outcome =
            scan(&files, &stub, &SimiArgs::default().threshold(10)).unwrap();

        assert_eq!(2, outcome.index.len());
        assert!(outcome.duplicates.is_empty());
        assert_eq!(1, outcome.unreadable.len());
        assert_eq!(PathBuf::from("broken.png"), outcome.unreadable[0].path);
        assert_eq!(files.len(), outcome.total());
    }

    #[test]
    fn rescanning_gives_the_same_answer() {
        let stub = StubFingerprinter::new([
            ("a.jpg", &[0u8, 0]),
            ("b.jpg", &[1, 0]),
            ("c.jpg", &[3, 0]),
            ("d.jpg", &[0xf0, 0xff]),
        ]);
        let files = paths(&["a.jpg", "b.jpg", "c.jpg", "d.jpg"]);
        let simi = SimiArgs::default().threshold(2);

        let one = scan(&files, &stub, &simi).unwrap();
        let two = scan(&files, &stub, &simi).unwrap();

        assert_eq!(one.index, two.index);
        assert_eq!(one.duplicates, two.duplicates);
    }
}
