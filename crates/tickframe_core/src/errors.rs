//! Error Types
//!
//! This module defines the error types used throughout Tickframe.
//!
//! # Overview
//!
//! The main error type [`TickframeError`] covers configuration problems that are
//! caught when an animator is built, plus lookups through stale handles:
//! - Unsupported animation policies
//! - Invalid frame ranges and tick intervals
//! - Unknown policy names and animator handles
//!
//! The steady-state tick loop never produces errors. Once an animator has been
//! constructed, advancing it is a total operation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tickframe_core::errors::{Result, TickframeError};
//!
//! fn build() -> Result<()> {
//!     Err(TickframeError::EmptyFrameRange)
//! }
//! ```

use thiserror::Error;

/// The main error type for Tickframe.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TickframeError {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// The selected animation policy exists in the configuration model but has
    /// no implementation. This is a configuration bug to fix before shipping.
    #[error("Unsupported animation policy: {0}")]
    UnsupportedPolicy(&'static str),

    /// `frame_count` was zero.
    #[error("Frame count must be greater than zero")]
    EmptyFrameRange,

    /// `first_frame + frame_count` does not fit in a `u32`.
    #[error("Frame range overflows: first frame {first_frame} + count {frame_count}")]
    FrameRangeOverflow {
        /// Configured first frame
        first_frame: u32,
        /// Configured frame count
        frame_count: u32,
    },

    /// `update_every_n_ticks` was zero.
    #[error("Update interval must be greater than zero ticks")]
    ZeroUpdateInterval,

    /// Arc cycling is enabled with a zero cycle interval.
    #[error("Arc cycle interval must be greater than zero ticks")]
    ZeroCycleInterval,

    /// The policy needs more frames than the range provides.
    #[error("{policy} animation needs at least {required} frames (got {frame_count})")]
    TooFewFrames {
        /// Policy name
        policy: &'static str,
        /// Minimum frame count for the policy
        required: u32,
        /// Configured frame count
        frame_count: u32,
    },

    /// A policy name did not match any known animation type.
    #[error("Unknown animation type: {0}")]
    UnknownAnimationType(String),

    // ========================================================================
    // Lookup Errors
    // ========================================================================
    /// An animator handle does not refer to a live animator.
    #[error("Animator not found (stale or foreign handle)")]
    UnknownAnimator,
}

/// Alias for `Result<T, TickframeError>`.
pub type Result<T> = std::result::Result<T, TickframeError>;
