pub mod classify;
pub mod index;
pub mod relocate;
pub mod scan;
