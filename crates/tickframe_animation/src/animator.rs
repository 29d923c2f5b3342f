use std::ops::Range;

use tickframe_core::{RandomSource, Result, TickframeError};

use crate::config::{AnimationType, AnimatorConfig, ArcSettings};

/// Phase of an arcing animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcPhase {
    /// Holding the first frame for the drawn static wait.
    Idle,
    /// Showing one of the remaining frames.
    Cycling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy)]
struct ArcState {
    settings: ArcSettings,
    phase: ArcPhase,
    /// Drawn idle duration for the current episode; 0 means not drawn yet.
    static_hold_ticks: u32,
}

impl ArcState {
    fn new(settings: ArcSettings) -> Self {
        Self {
            settings,
            phase: ArcPhase::Idle,
            static_hold_ticks: 0,
        }
    }

    /// Frame to show when leaving the current phase.
    fn transition<R: RandomSource + ?Sized>(&mut self, frames: &Range<u32>, rng: &mut R) -> u32 {
        match self.phase {
            ArcPhase::Idle => self.draw_active(frames, rng),
            ArcPhase::Cycling => {
                self.phase = ArcPhase::Idle;
                frames.start
            }
        }
    }

    /// Any frame except the idle one. Consecutive draws may repeat.
    fn draw_active<R: RandomSource + ?Sized>(&mut self, frames: &Range<u32>, rng: &mut R) -> u32 {
        self.phase = ArcPhase::Cycling;
        rng.uniform_excluding(frames.start + 1, frames.end, frames.start)
    }
}

/// Validated policy plus the per-policy playback state it needs.
#[derive(Debug, Clone, Copy)]
enum Policy {
    Loop,
    Yoyo { direction: Direction },
    Random,
    Arcing(ArcState),
}

impl Policy {
    fn from_type(animation_type: AnimationType) -> Result<Self> {
        Ok(match animation_type {
            AnimationType::Loop => Self::Loop,
            AnimationType::Yoyo => Self::Yoyo {
                direction: Direction::Forward,
            },
            AnimationType::Random => Self::Random,
            AnimationType::Arcing(settings) => Self::Arcing(ArcState::new(settings)),
            AnimationType::SpeedUp => {
                return Err(TickframeError::UnsupportedPolicy(animation_type.name()));
            }
        })
    }
}

/// Tick-driven frame scheduler for one animated entity.
///
/// The owner calls [`advance`](Self::advance) once per simulation step with the
/// ticks elapsed since the previous call, and re-reads
/// [`current_frame`](Self::current_frame) whenever it returns `true`.
///
/// ```rust,ignore
/// let mut animator = FrameAnimator::new(AnimatorConfig::new(0, 4).with_update_every(6))?;
/// let mut rng = StdRandom::new();
///
/// if animator.advance(1, &mut rng) {
///     sprite.set_texture(textures[animator.current_frame() as usize]);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FrameAnimator {
    config: AnimatorConfig,
    policy: Policy,

    current_frame: u32,
    previous_frame: u32,
    ticks_since_last_update: u32,
    extended_hold_count: u32,
}

impl FrameAnimator {
    /// Validates `config` and builds an animator parked on its first frame.
    pub fn new(mut config: AnimatorConfig) -> Result<Self> {
        config.validate()?;
        config.normalize();
        let policy = Policy::from_type(config.animation_type)?;

        log::debug!(
            "FrameAnimator: {} over frames {:?}, update every {} ticks{}",
            config.animation_type,
            config.frame_range(),
            config.update_every_n_ticks,
            if config.disable_animation { " (disabled)" } else { "" },
        );

        let first_frame = config.first_frame;
        Ok(Self {
            config,
            policy,
            current_frame: first_frame,
            previous_frame: first_frame,
            ticks_since_last_update: 0,
            extended_hold_count: 0,
        })
    }

    #[must_use]
    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    /// The externally visible playback head.
    #[inline]
    #[must_use]
    pub fn current_frame(&self) -> u32 {
        self.current_frame
    }

    /// The frame shown immediately before [`current_frame`](Self::current_frame).
    #[inline]
    #[must_use]
    pub fn previous_frame(&self) -> u32 {
        self.previous_frame
    }

    #[must_use]
    pub fn ticks_since_last_update(&self) -> u32 {
        self.ticks_since_last_update
    }

    /// Update cycles spent so far holding an extended frame.
    #[must_use]
    pub fn extended_hold_count(&self) -> u32 {
        self.extended_hold_count
    }

    /// Drawn idle duration of the current arc episode. `Some(0)` means the next
    /// advance draws a fresh one; `None` for non-arcing policies.
    #[must_use]
    pub fn arc_static_hold_ticks(&self) -> Option<u32> {
        match &self.policy {
            Policy::Arcing(arc) => Some(arc.static_hold_ticks),
            _ => None,
        }
    }

    #[must_use]
    pub fn arc_phase(&self) -> Option<ArcPhase> {
        match &self.policy {
            Policy::Arcing(arc) => Some(arc.phase),
            _ => None,
        }
    }

    #[must_use]
    pub fn frame_range(&self) -> Range<u32> {
        self.config.frame_range()
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.config.disable_animation
    }

    /// Returns all playback state to its initial values.
    pub fn reset(&mut self) {
        self.current_frame = self.config.first_frame;
        self.previous_frame = self.config.first_frame;
        self.ticks_since_last_update = 0;
        self.extended_hold_count = 0;
        match &mut self.policy {
            Policy::Yoyo { direction } => *direction = Direction::Forward,
            Policy::Arcing(arc) => *arc = ArcState::new(arc.settings),
            Policy::Loop | Policy::Random => {}
        }
    }

    /// Core logic: accumulate `elapsed_ticks` and recalculate the frame when a
    /// boundary is crossed.
    ///
    /// Returns `true` iff [`current_frame`](Self::current_frame) changed.
    pub fn advance<R: RandomSource + ?Sized>(&mut self, elapsed_ticks: u32, rng: &mut R) -> bool {
        if self.config.disable_animation {
            return false;
        }

        self.ticks_since_last_update = self.ticks_since_last_update.saturating_add(elapsed_ticks);

        if matches!(self.policy, Policy::Arcing(_)) {
            return self.advance_arc(rng);
        }

        if self.ticks_since_last_update < self.config.update_every_n_ticks {
            return false;
        }
        self.ticks_since_last_update = 0;

        // Extended frames sit out `duration` full cycles before the policy runs
        if let Some(duration) = self.config.extended_wait(self.current_frame) {
            if self.extended_hold_count != duration {
                self.extended_hold_count += 1;
                return false;
            }
            self.extended_hold_count = 0;
        }

        let next = self.recalculate(rng);
        self.show(next)
    }

    /// Next frame under the active policy, at a recalculation boundary.
    fn recalculate<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> u32 {
        let frames = self.config.frame_range();
        let last = self.config.last_frame();
        let current = self.current_frame;

        match &mut self.policy {
            Policy::Loop => {
                if current >= last {
                    frames.start
                } else {
                    current + 1
                }
            }
            Policy::Yoyo { direction } => {
                if current >= last {
                    *direction = Direction::Backward;
                } else if current <= frames.start {
                    *direction = Direction::Forward;
                }
                match direction {
                    Direction::Forward => current + 1,
                    Direction::Backward => current - 1,
                }
            }
            Policy::Random => rng.uniform_excluding(frames.start, frames.end, current),
            Policy::Arcing(arc) => arc.transition(&frames, rng),
        }
    }

    fn advance_arc<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> bool {
        let frames = self.config.frame_range();
        let update_every = self.config.update_every_n_ticks;
        let ticks = self.ticks_since_last_update;

        let Policy::Arcing(arc) = &mut self.policy else {
            return false;
        };

        if arc.static_hold_ticks == 0 {
            let settings = arc.settings;
            arc.static_hold_ticks = rng.uniform(
                settings.min_static_wait_ticks,
                settings.max_static_wait_ticks.saturating_add(1),
            );
        }

        if arc.phase == ArcPhase::Idle && ticks < arc.static_hold_ticks {
            return false;
        }

        if ticks < update_every {
            let settings = arc.settings;
            if !settings.should_cycle
                || ticks == 0
                || ticks % settings.cycle_frames_every_n_ticks != 0
            {
                return false;
            }
            let next = arc.draw_active(&frames, rng);
            return self.show(next);
        }

        // Full window elapsed: the next episode draws a fresh idle duration
        arc.static_hold_ticks = 0;
        self.ticks_since_last_update = 0;
        let next = self.recalculate(rng);
        self.show(next)
    }

    fn show(&mut self, next: u32) -> bool {
        self.previous_frame = self.current_frame;
        self.current_frame = next;

        let changed = self.previous_frame != next;
        if changed {
            log::trace!("FrameAnimator: frame {} -> {next}", self.previous_frame);
        }
        changed
    }
}
