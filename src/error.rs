//! Construction-time errors for [`crate::Pathfinder`].
//!
//! Every other failure mode in this crate (border rejection, unreachable
//! target, missing predecessor) is expected and frequent, so it is reported as
//! a plain `bool`/`Option` return rather than an `Err`. The one genuine system
//! boundary is the caller-supplied cost buffer handed to [`Pathfinder::new`],
//! which is why it's the only place this crate raises a typed error.
//!
//! [`Pathfinder::new`]: crate::Pathfinder::new

use thiserror::Error;

/// Errors that can occur while constructing a [`crate::Pathfinder`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// The cost buffer's length didn't match `width * height`.
    #[error("cost buffer length {actual} does not match width * height ({expected})")]
    BufferLenMismatch { expected: usize, actual: usize },

    /// The grid had a zero width or height.
    #[error("grid width and height must both be non-zero")]
    ZeroSizedGrid,
}
