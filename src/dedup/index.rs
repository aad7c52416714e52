use std::path::PathBuf;

use crate::imghash::hamming::{Distance, Fingerprint, WidthMismatch};

/// One distinct image: its fingerprint and the first file seen with it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalEntry {
    pub fingerprint: Fingerprint,
    pub path: PathBuf,
}

/// All distinct images seen so far, in insertion order. Scoped to one run,
/// nothing is persisted.
///
/// Queries walk the entries linearly and return the first one within the
/// threshold, not the closest one. Which file of a cluster ends up canonical
/// therefore depends on the order images are fed in.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CanonicalIndex {
    entries: Vec<CanonicalEntry>,
}

impl CanonicalIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first entry, in insertion order, at most `threshold` bits away
    /// from `fingerprint`, together with the measured distance.
    pub fn find_within(
        &self,
        fingerprint: &Fingerprint,
        threshold: Distance,
    ) -> Result<Option<(&CanonicalEntry, Distance)>, WidthMismatch> {
        for entry in self.entries.iter() {
            let dist = entry.fingerprint.distance_to(fingerprint)?;
            if dist <= threshold {
                return Ok(Some((entry, dist)));
            }
        }
        Ok(None)
    }

    /// Appends unconditionally, the caller has already established that
    /// nothing matched.
    pub fn insert(&mut self, fingerprint: Fingerprint, path: PathBuf) -> &CanonicalEntry {
        self.entries.push(CanonicalEntry { fingerprint, path });
        self.entries.last().expect("an entry was just pushed")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CanonicalEntry> {
        self.entries.iter()
    }
}
