#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// animation frame generation module.
pub mod blend;

/// image flipping module.
pub mod flip;

/// module containing parallelization utilities.
pub mod parallel;

/// 90 degree image rotation module.
pub mod rotate;

/// color-based segmentation module.
pub mod segment;
