pub mod bin_common;
pub mod dedup;
pub mod imghash;

/// For stand-alone functionality that fit comfortably within one file.
pub mod utils;
