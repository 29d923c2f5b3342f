use slotmap::{SlotMap, new_key_type};
use tickframe_core::{RandomSource, Result, StdRandom, TickframeError};

use crate::animator::FrameAnimator;
use crate::config::AnimatorConfig;

new_key_type! {
    pub struct AnimatorHandle;
}

/// Owns the animators of many entities together with the single random source
/// they draw from.
///
/// Animators advance one after another on the caller's thread, so the shared
/// source never sees concurrent use.
pub struct AnimatorSet<R = StdRandom> {
    animators: SlotMap<AnimatorHandle, FrameAnimator>,
    random: R,
}

impl Default for AnimatorSet<StdRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimatorSet<StdRandom> {
    /// Creates an empty set drawing from an entropy-seeded [`StdRandom`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_random(StdRandom::new())
    }
}

impl<R: RandomSource> AnimatorSet<R> {
    #[must_use]
    pub fn with_random(random: R) -> Self {
        Self {
            animators: SlotMap::with_key(),
            random,
        }
    }

    /// Validates `config` and registers a new animator, returning its handle.
    pub fn insert(&mut self, config: AnimatorConfig) -> Result<AnimatorHandle> {
        let animator = FrameAnimator::new(config)?;
        Ok(self.insert_animator(animator))
    }

    pub fn insert_animator(&mut self, animator: FrameAnimator) -> AnimatorHandle {
        self.animators.insert(animator)
    }

    /// Drops an animator along with its owning entity.
    pub fn remove(&mut self, handle: AnimatorHandle) -> Option<FrameAnimator> {
        let removed = self.animators.remove(handle);
        if removed.is_none() {
            log::warn!("Attempted to remove an unknown AnimatorHandle.");
        }
        removed
    }

    #[must_use]
    pub fn contains(&self, handle: AnimatorHandle) -> bool {
        self.animators.contains_key(handle)
    }

    #[must_use]
    pub fn get(&self, handle: AnimatorHandle) -> Option<&FrameAnimator> {
        self.animators.get(handle)
    }

    pub fn get_mut(&mut self, handle: AnimatorHandle) -> Option<&mut FrameAnimator> {
        self.animators.get_mut(handle)
    }

    #[must_use]
    pub fn current_frame(&self, handle: AnimatorHandle) -> Option<u32> {
        self.animators.get(handle).map(FrameAnimator::current_frame)
    }

    /// Advances a single animator.
    pub fn advance(&mut self, handle: AnimatorHandle, elapsed_ticks: u32) -> Result<bool> {
        let animator = self
            .animators
            .get_mut(handle)
            .ok_or(TickframeError::UnknownAnimator)?;
        Ok(animator.advance(elapsed_ticks, &mut self.random))
    }

    /// Advances every animator by the same tick delta and returns the handles
    /// whose frame changed, so the caller only re-reads those.
    pub fn advance_all(&mut self, elapsed_ticks: u32) -> Vec<AnimatorHandle> {
        let mut changed = Vec::new();
        for (handle, animator) in &mut self.animators {
            if animator.advance(elapsed_ticks, &mut self.random) {
                changed.push(handle);
            }
        }
        changed
    }

    pub fn reset_all(&mut self) {
        for animator in self.animators.values_mut() {
            animator.reset();
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.animators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.animators.is_empty()
    }

    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = (AnimatorHandle, &FrameAnimator)> {
        self.animators.iter()
    }

    /// The shared source, e.g. for reseeding between levels.
    pub fn random_mut(&mut self) -> &mut R {
        &mut self.random
    }
}
