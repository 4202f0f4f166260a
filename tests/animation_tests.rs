//! Animation engine integration tests.
//!
//! Interpolation exactness and clamping, checked both on hand-picked
//! chains and property-tested over generated ones.

use proptest::prelude::*;

use tricolour::{Animation, AnimationError, Keyframe, KeyframeAnimation, RenderTarget, Transform};

fn at(x: f64) -> Transform {
    Transform::from_translation([x, 0.0, 0.0])
}

// =============================================================================
// Construction
// =============================================================================

/// A chain with fewer than two keyframes cannot be constructed.
#[test]
fn test_chain_needs_two_keyframes() {
    assert_eq!(
        KeyframeAnimation::new(Transform::IDENTITY, []).unwrap_err(),
        AnimationError::EmptyChain
    );
}

/// Offsets must strictly increase along the chain, including past the
/// synthetic time-zero start.
#[test]
fn test_chain_offsets_must_increase() {
    let out_of_order = [Keyframe::new(2.0, at(1.0)), Keyframe::new(1.0, at(2.0))];
    assert!(matches!(
        KeyframeAnimation::new(Transform::IDENTITY, out_of_order).unwrap_err(),
        AnimationError::NonMonotonic { .. }
    ));

    let at_zero = [Keyframe::new(0.0, at(1.0))];
    assert!(matches!(
        KeyframeAnimation::new(Transform::IDENTITY, at_zero).unwrap_err(),
        AnimationError::NonMonotonic { .. }
    ));
}

// =============================================================================
// Interpolation
// =============================================================================

struct Probe(Option<Transform>);

impl RenderTarget for Probe {
    fn apply_transform(&mut self, transform: &Transform) {
        self.0 = Some(*transform);
    }
}

fn transform_at(anim: &mut KeyframeAnimation, t: f64) -> Transform {
    anim.update(t);
    let mut probe = Probe(None);
    anim.apply(&mut probe);
    probe.0.unwrap()
}

/// At each stored offset the produced transform equals the stored one
/// exactly, with no drift.
#[test]
fn test_exact_at_offsets() {
    let mut anim = KeyframeAnimation::new(
        at(0.0),
        [
            Keyframe::new(0.1, at(1.0)),
            Keyframe::new(0.7, at(-3.0)),
            Keyframe::new(1.0, at(5.0)),
        ],
    )
    .unwrap();

    assert_eq!(transform_at(&mut anim, 0.0), at(0.0));
    assert_eq!(transform_at(&mut anim, 0.1), at(1.0));
    assert_eq!(transform_at(&mut anim, 0.7), at(-3.0));
    assert_eq!(transform_at(&mut anim, 1.0), at(5.0));
}

/// Beyond the last offset the transform is the last keyframe's, clamped
/// rather than extrapolated.
#[test]
fn test_clamp_not_extrapolate() {
    let mut anim =
        KeyframeAnimation::new(at(0.0), [Keyframe::new(1.0, at(10.0))]).unwrap();

    assert_eq!(transform_at(&mut anim, 1.0), at(10.0));
    assert_eq!(transform_at(&mut anim, 2.0), at(10.0));
    assert_eq!(transform_at(&mut anim, 1_000.0), at(10.0));
    assert!(anim.is_complete());
}

/// Rotation and scale interpolate per-component, like translation.
#[test]
fn test_all_components_interpolate() {
    let start = Transform {
        translation: [0.0, 0.0, 0.0],
        rotation: [0.0, 0.0, 0.0],
        scale: [1.0, 1.0, 1.0],
    };
    let end = Transform {
        translation: [2.0, 0.0, 0.0],
        rotation: [std::f64::consts::PI, 0.0, 0.0],
        scale: [3.0, 1.0, 1.0],
    };

    let mut anim = KeyframeAnimation::new(start, [Keyframe::new(2.0, end)]).unwrap();
    let mid = transform_at(&mut anim, 1.0);

    assert_eq!(mid.translation, [1.0, 0.0, 0.0]);
    assert_eq!(mid.rotation, [std::f64::consts::FRAC_PI_2, 0.0, 0.0]);
    assert_eq!(mid.scale, [2.0, 1.0, 1.0]);
}

// =============================================================================
// Properties
// =============================================================================

/// Strategy: a chain as (offset, x-position) pairs with strictly
/// increasing offsets, built from positive increments.
fn chain_strategy() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((0.01f64..5.0, -100.0f64..100.0), 1..6).prop_map(|pairs| {
        let mut offset = 0.0;
        pairs
            .into_iter()
            .map(|(increment, x)| {
                offset += increment;
                (offset, x)
            })
            .collect()
    })
}

proptest! {
    /// Sampling exactly at any stored offset reproduces that keyframe.
    #[test]
    fn prop_exact_at_stored_offsets(chain in chain_strategy(), start_x in -100.0f64..100.0) {
        let keyframes: Vec<Keyframe> =
            chain.iter().map(|&(offset, x)| Keyframe::new(offset, at(x))).collect();
        let mut anim = KeyframeAnimation::new(at(start_x), keyframes).unwrap();

        for &(offset, x) in &chain {
            prop_assert_eq!(transform_at(&mut anim, offset), at(x));
        }
    }

    /// Any sample time past the end clamps to the final keyframe.
    #[test]
    fn prop_clamps_past_end(chain in chain_strategy(), extra in 0.0f64..50.0) {
        let keyframes: Vec<Keyframe> =
            chain.iter().map(|&(offset, x)| Keyframe::new(offset, at(x))).collect();
        let mut anim = KeyframeAnimation::new(at(0.0), keyframes).unwrap();

        let (last_offset, last_x) = *chain.last().unwrap();
        prop_assert_eq!(transform_at(&mut anim, last_offset + extra), at(last_x));
    }

    /// Within a segment the interpolated position stays inside the segment's
    /// endpoint envelope.
    #[test]
    fn prop_interpolation_stays_in_segment_envelope(
        a in -100.0f64..100.0,
        b in -100.0f64..100.0,
        span in 0.1f64..10.0,
        f in 0.0f64..1.0,
    ) {
        let mut anim = KeyframeAnimation::new(at(a), [Keyframe::new(span, at(b))]).unwrap();
        let sampled = transform_at(&mut anim, span * f);

        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(sampled.translation[0] >= lo - 1e-9);
        prop_assert!(sampled.translation[0] <= hi + 1e-9);
    }
}
