//! Ambient oscillation
//!
//! Small continuous keyframe motion applied to every element regardless of
//! pointer state, for liveliness. Each element loops the same keyframe
//! shapes at its own duration and delay, mirrored on every other cycle so
//! the loop never jumps.

use glam::Vec2;

use crate::consts::{MOUNT_SCALE_DURATION, MOUNT_SCALE_START};

/// Horizontal drift keyframes (px)
const X_LOOP: [f32; 5] = [0.0, 10.0, -5.0, 8.0, 0.0];
/// Vertical drift keyframes (px)
const Y_LOOP: [f32; 5] = [0.0, -8.0, 5.0, -3.0, 0.0];
/// Rotation wobble keyframes (degrees, relative to base rotation)
const WOBBLE_LOOP: [f32; 5] = [-2.0, 2.0, -1.0, 1.0, 0.0];

/// Smoothstep ease-in-out over [0,1]
#[inline]
fn ease_in_out(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Map elapsed time onto a mirrored loop phase in [0,1].
///
/// Before `delay` has elapsed the phase is 0 (element rests at the first
/// keyframe). Odd cycles run backwards.
fn loop_phase(time: f32, duration: f32, delay: f32) -> f32 {
    let t = time - delay;
    if t <= 0.0 || duration <= 0.0 {
        return 0.0;
    }
    let cycle = (t / duration) % 2.0;
    if cycle <= 1.0 { cycle } else { 2.0 - cycle }
}

/// Sample evenly-spaced keyframes at `phase` with eased segments
fn sample(frames: &[f32], phase: f32) -> f32 {
    let n = frames.len();
    if n == 0 {
        return 0.0;
    }
    if n == 1 || phase <= 0.0 {
        return frames[0];
    }
    if phase >= 1.0 {
        return frames[n - 1];
    }

    let scaled = phase * (n - 1) as f32;
    let idx = (scaled as usize).min(n - 2);
    let t = ease_in_out(scaled - idx as f32);
    frames[idx] + (frames[idx + 1] - frames[idx]) * t
}

/// Ambient positional offset at `time` seconds since mount
pub fn ambient_offset(time: f32, duration: f32, delay: f32, amplitude: f32) -> Vec2 {
    let phase = loop_phase(time, duration, delay);
    Vec2::new(sample(&X_LOOP, phase), sample(&Y_LOOP, phase)) * amplitude
}

/// Rotation wobble in degrees at `time` seconds since mount
pub fn ambient_wobble(time: f32, duration: f32, delay: f32, amplitude: f32) -> f32 {
    sample(&WOBBLE_LOOP, loop_phase(time, duration, delay)) * amplitude
}

/// Mount scale-in: eases from 0.8 to 1.0 over the first fraction of a second
pub fn mount_scale(time: f32) -> f32 {
    if time >= MOUNT_SCALE_DURATION {
        return 1.0;
    }
    let t = ease_in_out((time / MOUNT_SCALE_DURATION).clamp(0.0, 1.0));
    MOUNT_SCALE_START + (1.0 - MOUNT_SCALE_START) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_zero_before_delay() {
        assert_eq!(loop_phase(1.0, 20.0, 3.0), 0.0);
        assert_eq!(ambient_offset(1.0, 20.0, 3.0, 1.0), Vec2::ZERO);
    }

    #[test]
    fn test_phase_mirrors_on_odd_cycles() {
        // Forward cycle at t=5 of 20 matches backward cycle at t=35
        let fwd = loop_phase(5.0, 20.0, 0.0);
        let back = loop_phase(35.0, 20.0, 0.0);
        assert!((fwd - back).abs() < 1e-5);
    }

    #[test]
    fn test_sample_hits_keyframes() {
        assert_eq!(sample(&X_LOOP, 0.0), 0.0);
        assert_eq!(sample(&X_LOOP, 0.25), 10.0);
        assert_eq!(sample(&X_LOOP, 0.5), -5.0);
        assert_eq!(sample(&X_LOOP, 1.0), 0.0);
    }

    #[test]
    fn test_offset_bounded_by_keyframe_extremes() {
        for i in 0..1000 {
            let t = i as f32 * 0.05;
            let off = ambient_offset(t, 22.0, 3.5, 1.0);
            assert!(off.x >= -5.0 && off.x <= 10.0);
            assert!(off.y >= -8.0 && off.y <= 5.0);
        }
    }

    #[test]
    fn test_zero_amplitude_is_still() {
        for i in 0..100 {
            let t = i as f32 * 0.3;
            assert_eq!(ambient_offset(t, 25.0, 0.0, 0.0), Vec2::ZERO);
            assert_eq!(ambient_wobble(t, 25.0, 0.0, 0.0), 0.0);
        }
    }

    #[test]
    fn test_mount_scale_eases_to_one() {
        assert_eq!(mount_scale(0.0), MOUNT_SCALE_START);
        let mid = mount_scale(MOUNT_SCALE_DURATION / 2.0);
        assert!(mid > MOUNT_SCALE_START && mid < 1.0);
        assert_eq!(mount_scale(MOUNT_SCALE_DURATION), 1.0);
        assert_eq!(mount_scale(100.0), 1.0);
    }
}
