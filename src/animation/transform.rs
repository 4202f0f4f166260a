//! Transform value type used by animations and the render seam.

use serde::{Deserialize, Serialize};

/// A decomposed affine transform: translation, per-axis rotation, scale.
///
/// Rotation is interpolated component-wise (linear per axis, not spherical),
/// matching the keyframe format the animations are authored in.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Translation in world units, `[x, y, z]`.
    pub translation: [f64; 3],

    /// Rotation in radians around each axis, `[x, y, z]`.
    pub rotation: [f64; 3],

    /// Per-axis scale factors, `[x, y, z]`.
    pub scale: [f64; 3],
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Transform = Transform {
        translation: [0.0; 3],
        rotation: [0.0; 3],
        scale: [1.0; 3],
    };

    /// A pure translation.
    #[must_use]
    pub const fn from_translation(translation: [f64; 3]) -> Self {
        Self {
            translation,
            rotation: [0.0; 3],
            scale: [1.0; 3],
        }
    }

    /// Linear interpolation between `self` (at `f = 0`) and `other`
    /// (at `f = 1`), applied independently to every component.
    #[must_use]
    pub fn lerp(&self, other: &Transform, f: f64) -> Transform {
        let mix = |a: [f64; 3], b: [f64; 3]| {
            [
                a[0] + (b[0] - a[0]) * f,
                a[1] + (b[1] - a[1]) * f,
                a[2] + (b[2] - a[2]) * f,
            ]
        };

        Transform {
            translation: mix(self.translation, other.translation),
            rotation: mix(self.rotation, other.rotation),
            scale: mix(self.scale, other.scale),
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
