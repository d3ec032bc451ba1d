//! Weather records for Halo
//!
//! Typed shapes of the data the dial widgets consume, plus the source trait
//! data providers implement.

pub mod source;
pub mod types;

pub use source::{JsonFileSource, SnapshotSource, StaticSource};
pub use types::*;
