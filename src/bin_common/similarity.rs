use clap::Args;

use crate::imghash::hamming::Distance;

pub const DEFAULT_SIMILARITY_THRESHOLD: Distance = 10;

#[derive(Args, Debug)]
pub struct SimiCli {
    /// Maximum hamming distance for two images to be considered equal
    #[arg(long, short = 't', default_value_t = DEFAULT_SIMILARITY_THRESHOLD)]
    threshold: Distance,
}

impl SimiCli {
    pub fn as_args(&self) -> SimiArgs {
        SimiArgs::default().threshold(self.threshold)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SimiArgs {
    threshold: Distance,
}

impl Default for SimiArgs {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

impl SimiArgs {
    pub fn threshold(mut self, threshold: Distance) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn get_threshold(&self) -> Distance {
        self.threshold
    }

    pub fn is_within(&self, dist: Distance) -> bool {
        dist <= self.threshold
    }

    pub fn is_not_within(&self, dist: Distance) -> bool {
        !self.is_within(dist)
    }
}
