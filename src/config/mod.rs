//! Configuration module for Pocket Money
//!
//! Data-directory resolution and the on-disk file layout.

pub mod paths;

pub use paths::{PocketPaths, DATA_DIR_ENV};
