//! Keyframe-chain animation: linear interpolation over transform segments.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{Animation, AnimationError, RenderTarget, Transform};

/// A single keyframe: a transform pinned to a point in time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Seconds from the start of the animation.
    pub time_offset: f64,

    /// Transform the animated object holds at exactly `time_offset`.
    pub transform: Transform,
}

impl Keyframe {
    /// Create a keyframe.
    #[must_use]
    pub const fn new(time_offset: f64, transform: Transform) -> Self {
        Self {
            time_offset,
            transform,
        }
    }
}

/// Interpolating animation over an ordered keyframe sequence.
///
/// Construction prepends a synthetic time-zero keyframe holding the start
/// transform, so a caller supplies only the keyframes the object moves
/// through. At time `t` the bracketing pair `(prev, next)` with
/// `prev.time_offset <= t < next.time_offset` is located and the transform
/// is interpolated linearly between them; past the final keyframe the
/// animation clamps to its last transform and further updates are no-ops.
#[derive(Clone, Debug)]
pub struct KeyframeAnimation {
    /// Full chain including the synthetic time-zero keyframe.
    keyframes: SmallVec<[Keyframe; 4]>,
    current: Transform,
    complete: bool,
}

impl KeyframeAnimation {
    /// Build an animation from a start transform and the keyframes after it.
    ///
    /// Fails with [`AnimationError::EmptyChain`] when no keyframes are
    /// supplied (the full chain would have fewer than two entries) and with
    /// [`AnimationError::NonMonotonic`] when time offsets do not strictly
    /// increase along the chain.
    pub fn new(
        start: Transform,
        keyframes: impl IntoIterator<Item = Keyframe>,
    ) -> Result<Self, AnimationError> {
        let mut chain: SmallVec<[Keyframe; 4]> = SmallVec::new();
        chain.push(Keyframe::new(0.0, start));
        chain.extend(keyframes);

        if chain.len() < 2 {
            return Err(AnimationError::EmptyChain);
        }
        for index in 1..chain.len() {
            if chain[index].time_offset <= chain[index - 1].time_offset {
                return Err(AnimationError::NonMonotonic { index });
            }
        }

        Ok(Self {
            current: start,
            keyframes: chain,
            complete: false,
        })
    }

    /// Total duration: the final keyframe's time offset.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.keyframes[self.keyframes.len() - 1].time_offset
    }

    /// Whether the animation has reached its final keyframe.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// The transform produced by the most recent `update`.
    #[must_use]
    pub fn current_transform(&self) -> &Transform {
        &self.current
    }
}

impl Animation for KeyframeAnimation {
    fn update(&mut self, time: f64) {
        if self.complete {
            return;
        }

        let last = self.keyframes.len() - 1;
        if time >= self.keyframes[last].time_offset {
            self.current = self.keyframes[last].transform;
            self.complete = true;
            return;
        }

        // Bracketing pair: last keyframe at or before `time`, and its successor.
        let mut prev = 0;
        while prev < last && self.keyframes[prev + 1].time_offset <= time {
            prev += 1;
        }
        let next = prev + 1;

        let base = self.keyframes[prev].time_offset;
        let span = self.keyframes[next].time_offset - base;
        let f = (time - base) / span;

        self.current = self.keyframes[prev]
            .transform
            .lerp(&self.keyframes[next].transform, f);
    }

    fn apply(&self, target: &mut dyn RenderTarget) {
        target.apply_transform(&self.current);
    }
}
