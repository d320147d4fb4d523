//! Repulsion field
//!
//! Pure scalar field mapping pointer distance to a push-away magnitude.
//! Piecewise-linear over a handful of breakpoints; one sqrt per element per
//! update, bounded influence radius so distant elements stay inert.

use glam::Vec2;

/// Evaluate the piecewise-linear strength curve at `distance`.
///
/// `curve` is a list of `(distance, strength)` breakpoints with ascending
/// distances. Before the first breakpoint the first strength applies;
/// beyond the last, the last strength applies (zero in the reference
/// tuning, clamping the field).
pub fn strength(curve: &[(f32, f32)], distance: f32) -> f32 {
    let Some(&(first_d, first_s)) = curve.first() else {
        return 0.0;
    };
    if distance <= first_d {
        return first_s;
    }

    for pair in curve.windows(2) {
        let (d0, s0) = pair[0];
        let (d1, s1) = pair[1];
        if distance <= d1 {
            let t = (distance - d0) / (d1 - d0).max(f32::EPSILON);
            return s0 + (s1 - s0) * t;
        }
    }

    curve.last().map(|&(_, s)| s).unwrap_or(0.0)
}

/// Compute the spring target for an element center under the pointer field.
///
/// The target points away from the pointer, scaled by the strength curve.
/// Returns `Vec2::ZERO` outside the influence radius so the spring relaxes
/// back to home. `min_distance` clamps the degenerate pointer-on-center
/// case; the fallback direction is unit +X, which never produces NaN.
pub fn repulsion_target(
    pointer: Vec2,
    center: Vec2,
    curve: &[(f32, f32)],
    influence_radius: f32,
    min_distance: f32,
) -> Vec2 {
    let delta = pointer - center;
    let dist = delta.length();
    if dist > influence_radius {
        return Vec2::ZERO;
    }

    let magnitude = strength(curve, dist);
    let dir = if dist < min_distance.max(f32::EPSILON) {
        Vec2::X
    } else {
        delta / dist
    };
    -dir * magnitude
}
