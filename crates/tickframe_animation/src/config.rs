//! Animator Configuration
//!
//! [`AnimatorConfig`] describes one animated entity: its frame range, the tick
//! cadence at which frames are recalculated, per-frame holds, and the playback
//! policy. It is immutable once handed to a [`FrameAnimator`](crate::FrameAnimator).
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tickframe_animation::{AnimatorConfig, AnimationType, ArcSettings};
//!
//! // Four-frame loop, one frame every 6 ticks, frame 2 held for 3 extra cycles
//! let config = AnimatorConfig::new(0, 4)
//!     .with_update_every(6)
//!     .with_extended_frame(2, 3);
//!
//! // Idle on frame 0 for 40..=90 ticks, then flicker through frames 1..4
//! let torch = AnimatorConfig {
//!     frame_count: 4,
//!     update_every_n_ticks: 30,
//!     animation_type: AnimationType::Arcing(ArcSettings {
//!         min_static_wait_ticks: 40,
//!         max_static_wait_ticks: 90,
//!         should_cycle: true,
//!         cycle_frames_every_n_ticks: 5,
//!     }),
//!     ..Default::default()
//! };
//! ```

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use tickframe_core::{Result, TickframeError};

// ---------------------------------------------------------------------------
// ArcSettings
// ---------------------------------------------------------------------------

/// Parameters of the two-phase arcing policy.
///
/// The animator idles on the first frame for a randomized number of ticks drawn
/// from `min_static_wait_ticks..=max_static_wait_ticks`, then spends an update
/// window on the remaining frames, optionally flickering between them every
/// `cycle_frames_every_n_ticks`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArcSettings {
    /// Lower bound (inclusive) of the idle hold, in ticks.
    pub min_static_wait_ticks: u32,
    /// Upper bound (inclusive) of the idle hold, in ticks.
    pub max_static_wait_ticks: u32,
    /// Whether to redraw the active frame while away from the idle frame.
    pub should_cycle: bool,
    /// Cadence of those redraws, in ticks.
    pub cycle_frames_every_n_ticks: u32,
}

impl Default for ArcSettings {
    fn default() -> Self {
        Self {
            min_static_wait_ticks: 1,
            max_static_wait_ticks: 1,
            should_cycle: false,
            cycle_frames_every_n_ticks: 1,
        }
    }
}

impl ArcSettings {
    /// Clamps both wait bounds to at least one tick and swaps them into order.
    #[must_use]
    pub fn normalized(self) -> Self {
        let min = self.min_static_wait_ticks.max(1);
        let max = self.max_static_wait_ticks.max(1);
        let (min, max) = if max < min { (max, min) } else { (min, max) };
        Self {
            min_static_wait_ticks: min,
            max_static_wait_ticks: max,
            ..self
        }
    }

    /// `true` when [`normalized`](Self::normalized) would change the bounds.
    #[must_use]
    pub fn needs_normalization(&self) -> bool {
        self.normalized() != *self
    }
}

// ---------------------------------------------------------------------------
// AnimationType
// ---------------------------------------------------------------------------

/// Playback policy applied at every recalculation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AnimationType {
    /// `first, first+1, ..., last, first, ...`
    #[default]
    Loop,
    /// Accelerating playback. Reserved: rejected at construction time.
    SpeedUp,
    /// Ping-pong between the first and last frame without repeating endpoints.
    Yoyo,
    /// Uniformly random frame, never the current one.
    Random,
    /// Randomized idle on the first frame, alternating with bursts on the others.
    Arcing(ArcSettings),
}

impl AnimationType {
    /// Canonical snake_case name, as accepted by [`FromStr`].
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Loop => "loop",
            Self::SpeedUp => "speed_up",
            Self::Yoyo => "yoyo",
            Self::Random => "random",
            Self::Arcing(_) => "arcing",
        }
    }

    /// Smallest frame count the policy can animate.
    #[must_use]
    pub fn min_frame_count(&self) -> u32 {
        match self {
            Self::Random => 3,
            Self::Yoyo | Self::Arcing(_) => 2,
            Self::Loop | Self::SpeedUp => 1,
        }
    }
}

impl fmt::Display for AnimationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnimationType {
    type Err = TickframeError;

    /// Parses a policy name. `arcing` yields default [`ArcSettings`].
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "loop" => Ok(Self::Loop),
            "speed_up" | "speedup" => Ok(Self::SpeedUp),
            "yoyo" => Ok(Self::Yoyo),
            "random" => Ok(Self::Random),
            "arcing" => Ok(Self::Arcing(ArcSettings::default())),
            _ => Err(TickframeError::UnknownAnimationType(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// AnimatorConfig
// ---------------------------------------------------------------------------

/// Complete description of one animated entity.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnimatorConfig {
    /// Index of the first valid frame.
    pub first_frame: u32,
    /// Number of frames; valid indices are `first_frame..first_frame + frame_count`.
    pub frame_count: u32,
    /// Ticks between recalculations (all policies except arcing's idle hold).
    pub update_every_n_ticks: u32,
    /// Frames held for the given number of extra update cycles before advancing.
    pub extended_frames: FxHashMap<u32, u32>,
    pub animation_type: AnimationType,
    /// Global kill switch: a disabled animator never changes frame.
    pub disable_animation: bool,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            first_frame: 0,
            frame_count: 1,
            update_every_n_ticks: 1,
            extended_frames: FxHashMap::default(),
            animation_type: AnimationType::Loop,
            disable_animation: false,
        }
    }
}

impl AnimatorConfig {
    /// A looping configuration over `first_frame..first_frame + frame_count`
    /// that recalculates every tick.
    #[must_use]
    pub fn new(first_frame: u32, frame_count: u32) -> Self {
        Self {
            first_frame,
            frame_count,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_update_every(mut self, ticks: u32) -> Self {
        self.update_every_n_ticks = ticks;
        self
    }

    #[must_use]
    pub fn with_animation_type(mut self, animation_type: AnimationType) -> Self {
        self.animation_type = animation_type;
        self
    }

    /// Holds `frame` for `multiplier` additional update cycles.
    #[must_use]
    pub fn with_extended_frame(mut self, frame: u32, multiplier: u32) -> Self {
        self.extended_frames.insert(frame, multiplier);
        self
    }

    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disable_animation = disabled;
        self
    }

    /// Index of the last valid frame.
    #[must_use]
    pub fn last_frame(&self) -> u32 {
        self.first_frame
            .saturating_add(self.frame_count)
            .saturating_sub(1)
    }

    /// Half-open range of valid frame indices.
    #[must_use]
    pub fn frame_range(&self) -> Range<u32> {
        self.first_frame..self.first_frame.saturating_add(self.frame_count)
    }

    /// Extra update cycles to hold `frame` for, if any.
    #[must_use]
    pub fn extended_wait(&self, frame: u32) -> Option<u32> {
        self.extended_frames.get(&frame).copied()
    }

    /// Rejects configurations the animator cannot play.
    pub fn validate(&self) -> Result<()> {
        if self.frame_count == 0 {
            return Err(TickframeError::EmptyFrameRange);
        }
        if self.first_frame.checked_add(self.frame_count).is_none() {
            return Err(TickframeError::FrameRangeOverflow {
                first_frame: self.first_frame,
                frame_count: self.frame_count,
            });
        }
        if self.update_every_n_ticks == 0 {
            return Err(TickframeError::ZeroUpdateInterval);
        }

        match self.animation_type {
            AnimationType::SpeedUp => {
                return Err(TickframeError::UnsupportedPolicy(
                    self.animation_type.name(),
                ));
            }
            AnimationType::Arcing(arc)
                if arc.should_cycle && arc.cycle_frames_every_n_ticks == 0 =>
            {
                return Err(TickframeError::ZeroCycleInterval);
            }
            _ => {}
        }

        let required = self.animation_type.min_frame_count();
        if self.frame_count < required {
            return Err(TickframeError::TooFewFrames {
                policy: self.animation_type.name(),
                required,
                frame_count: self.frame_count,
            });
        }

        Ok(())
    }

    /// Applies the defensive fixups that are accepted rather than rejected,
    /// warning about each one.
    pub(crate) fn normalize(&mut self) {
        if let AnimationType::Arcing(arc) = &mut self.animation_type
            && arc.needs_normalization()
        {
            let fixed = arc.normalized();
            log::warn!(
                "Arc static wait {}..={} normalized to {}..={}",
                arc.min_static_wait_ticks,
                arc.max_static_wait_ticks,
                fixed.min_static_wait_ticks,
                fixed.max_static_wait_ticks,
            );
            *arc = fixed;
        }

        let range = self.frame_range();
        for frame in self.extended_frames.keys() {
            if !range.contains(frame) {
                log::warn!(
                    "Extended frame {frame} lies outside {}..{} and will never be held",
                    range.start,
                    range.end,
                );
            }
        }
    }
}
