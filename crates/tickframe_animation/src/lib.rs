//! # Tickframe Animation
//!
//! Tick-driven sprite frame scheduling.
//!
//! - [`AnimatorConfig`] / [`AnimationType`]: what to play and how
//! - [`FrameAnimator`]: per-entity playback state machine
//! - [`AnimatorSet`]: many animators sharing one random source
//!
//! # Policies
//!
//! | Policy    | Sequence over frames `0..4`                         |
//! |-----------|-----------------------------------------------------|
//! | `Loop`    | `0 1 2 3 0 1 ...`                                   |
//! | `Yoyo`    | `0 1 2 3 2 1 0 1 ...`                               |
//! | `Random`  | any frame except the current one                    |
//! | `Arcing`  | idle on `0` for a random wait, then a burst on 1..4 |
//! | `SpeedUp` | rejected with `TickframeError::UnsupportedPolicy`   |

pub mod animator;
pub mod config;
pub mod set;

pub use animator::{ArcPhase, FrameAnimator};
pub use config::{AnimationType, AnimatorConfig, ArcSettings};
pub use set::{AnimatorHandle, AnimatorSet};
