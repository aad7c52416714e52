pub type Distance = u32;

/// A perceptual hash as a bit vector. The width is fixed per run by the
/// hasher configuration, so two fingerprints from the same run are always
/// comparable.
#[derive(Clone, Debug, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct Fingerprint {
    bits: Box<[u8]>,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("cannot compare a {left} bit fingerprint with a {right} bit one")]
pub struct WidthMismatch {
    pub left: u32,
    pub right: u32,
}

impl Fingerprint {
    pub const MIN_DIST: Distance = 0;

    pub fn from_bytes(bytes: impl Into<Box<[u8]>>) -> Self {
        Self { bits: bytes.into() }
    }

    /// Width in bits
    pub fn width(&self) -> u32 {
        u32::try_from(self.bits.len()).expect("fingerprints are small") * u8::BITS
    }

    pub fn max_dist(&self) -> Distance {
        self.width()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    pub fn to_base64(&self) -> String {
        base64::Engine::encode(&base64::prelude::BASE64_STANDARD_NO_PAD, &self.bits)
    }

    pub fn distance_to(&self, other: &Self) -> Result<Distance, WidthMismatch> {
        if self.bits.len() != other.bits.len() {
            return Err(WidthMismatch {
                left: self.width(),
                right: other.width(),
            });
        }

        Ok(self
            .bits
            .iter()
            .zip(other.bits.iter())
            .map(|(a, b)| (a ^ b).count_ones())
            .sum())
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.to_base64().fmt(f)
    }
}
