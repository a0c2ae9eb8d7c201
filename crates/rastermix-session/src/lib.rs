#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the session module.
pub mod error;

/// Animation frame sequence with a wrapping cursor.
pub mod frames;

/// The stateful image editing session.
pub mod session;

pub use crate::error::SessionError;
pub use crate::frames::FrameSequence;
pub use crate::session::{ImageSession, SessionState};
