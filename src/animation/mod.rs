//! Time-based animation engine.
//!
//! An [`Animation`] advances its internal progress from monotonically
//! increasing game time and applies the current interpolated [`Transform`]
//! to a render target. The trait replaces the abstract-base-class of the
//! source design: a type either implements both `update` and `apply` or it
//! does not compile, so "calling an unimplemented method" cannot happen at
//! runtime.
//!
//! The one shipped implementation is [`KeyframeAnimation`], which
//! interpolates linearly over an ordered keyframe sequence.

mod keyframe;
mod transform;

pub use keyframe::{Keyframe, KeyframeAnimation};
pub use transform::Transform;

use thiserror::Error;

/// Errors raised when constructing an animation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AnimationError {
    /// A keyframe chain needs at least two keyframes to interpolate between.
    #[error("keyframe chain needs at least two keyframes")]
    EmptyChain,

    /// Keyframe time offsets must be strictly increasing along the chain.
    #[error("keyframe {index} does not advance the chain's time offset")]
    NonMonotonic {
        /// Index of the offending keyframe within the full chain.
        index: usize,
    },
}

/// Seam to the host renderer.
///
/// The orchestration subsystem never draws anything itself; it hands
/// interpolated transforms to whatever is on the other side of this trait
/// (the real scene in production, a recording double in tests).
pub trait RenderTarget {
    /// Apply a transform to the current render state.
    fn apply_transform(&mut self, transform: &Transform);
}

/// A time-based animation over a render transform.
pub trait Animation {
    /// Advance internal progress to the given elapsed time, in seconds.
    ///
    /// Called once per tick with monotonically increasing time. Safe to call
    /// after completion; the animation stays clamped at its final state.
    fn update(&mut self, time: f64);

    /// Apply the current interpolated transform to a render target.
    fn apply(&self, target: &mut dyn RenderTarget);
}
