use std::path::Path;

use self::hamming::Fingerprint;

pub mod hamming;

/// Fingerprints are hash_size^2 bits, i.e., 256 by default.
pub const DEFAULT_HASH_SIZE: u32 = 16;

/// An image could not be turned into a fingerprint.
#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Turns files into fingerprints. The production implementation decodes the
/// file as an image and runs a perceptual hash on it, tests substitute their
/// own.
pub trait Fingerprinter: Sync {
    fn fingerprint(&self, path: &Path) -> Result<Fingerprint, DecodeError>;
}

pub struct Hasher {
    hasher: image_hasher::Hasher<Box<[u8]>>,
}

impl Hasher {
    pub fn new(hash_size: u32) -> Self {
        Self {
            hasher: image_hasher::HasherConfig::new()
                .hash_alg(image_hasher::HashAlg::Mean)
                .hash_size(hash_size, hash_size)
                .preproc_dct()
                .to_hasher(),
        }
    }

    pub fn hash<I>(&self, img: &I) -> Fingerprint
    where
        I: image_hasher::Image,
    {
        let hash = self.hasher.hash_image(img);
        Fingerprint::from_bytes(hash.as_bytes())
    }
}

/// The DCT mean hash, same construction as the classic "phash".
pub struct PhashFingerprinter {
    hash_size: u32,
}

impl PhashFingerprinter {
    pub fn new(hash_size: u32) -> Self {
        Self { hash_size }
    }
}

impl Default for PhashFingerprinter {
    fn default() -> Self {
        Self::new(DEFAULT_HASH_SIZE)
    }
}

impl Fingerprinter for PhashFingerprinter {
    fn fingerprint(&self, path: &Path) -> Result<Fingerprint, DecodeError> {
        let img = image::open(path)?;
        Ok(Hasher::new(self.hash_size).hash(&img))
    }
}
