#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

//! # Tickframe
//!
//! Per-entity animation frame scheduling driven by a tick counter.
//!
//! The host constructs one [`FrameAnimator`] per visual entity (or registers it
//! in an [`AnimatorSet`]), calls `advance` once per simulation step with the
//! ticks elapsed, and re-reads the current frame to pick a texture whenever the
//! call reports a change.
//!
//! ```rust,ignore
//! use tickframe::{AnimatorConfig, AnimationType, AnimatorSet};
//!
//! let mut set = AnimatorSet::new();
//! let torch = set.insert(
//!     AnimatorConfig::new(0, 4)
//!         .with_update_every(6)
//!         .with_animation_type(AnimationType::Yoyo),
//! )?;
//!
//! for handle in set.advance_all(1) {
//!     let frame = set.current_frame(handle);
//! }
//! ```

pub use tickframe_animation as animation;
pub use tickframe_core::{errors, random};

pub use tickframe_animation::{
    AnimationType, AnimatorConfig, AnimatorHandle, AnimatorSet, ArcPhase, ArcSettings,
    FrameAnimator,
};
pub use tickframe_core::{RandomSource, Result, ScriptedRandom, StdRandom, TickframeError};
