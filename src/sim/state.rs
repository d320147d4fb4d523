//! Scene state and core simulation types
//!
//! The element set is fixed at scene creation; per-element runtime state is
//! created with the scene and discarded with it. Nothing here touches the
//! DOM - measurement comes in through the `Measure` trait so tests can mock
//! it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spring::Spring;
use crate::consts::{PARALLAX_FACTOR_MAX, PARALLAX_FACTOR_MIN};
use crate::tuning::MotionTuning;

/// Decorative element kinds (Linux desktop flotsam)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    Terminal,
    Window,
    Tux,
    Folder,
    Command,
    Vim,
    Desktop,
    Package,
}

/// Immutable per-element spec, defined at composition time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecorativeElementSpec {
    pub kind: ElementKind,
    /// Home position as viewport percentages, both in [0,100]
    pub home: Vec2,
    /// Element size in px (width basis; height derives per kind)
    pub size: f32,
    /// Base rotation in degrees
    pub base_rotation: f32,
    /// Ambient oscillation loop duration (seconds)
    pub oscillation_duration: f32,
    /// Phase offset before the ambient loop starts (seconds)
    pub oscillation_delay: f32,
    /// Accent color (defaults per kind when absent)
    pub accent_color: Option<String>,
    /// Kind-specific label/content (shell command, window text, DE name...)
    pub label: Option<String>,
}

impl DecorativeElementSpec {
    /// Spec invariants: home within the viewport, positive size/duration
    pub fn is_valid(&self) -> bool {
        (0.0..=100.0).contains(&self.home.x)
            && (0.0..=100.0).contains(&self.home.y)
            && self.size > 0.0
            && self.oscillation_duration > 0.0
    }
}

/// Screen rectangle from a measurement source
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Measurement capability injected into the scene.
///
/// `None` means the element is not attached to the render tree yet; the
/// simulation treats it as infinitely far from the pointer (no repulsion)
/// rather than failing.
pub trait Measure {
    fn measure(&self, index: usize) -> Option<Rect>;
}

/// No measurement source at all; every element reads as unattached
pub struct NoMeasure;

impl Measure for NoMeasure {
    fn measure(&self, _index: usize) -> Option<Rect> {
        None
    }
}

/// Latest pointer coordinates, written only by the pointer listener
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    /// `None` until the first pointer-move event arrives
    pub pos: Option<Vec2>,
}

/// Latest vertical scroll offset, written only by the scroll listener
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    pub offset_y: f32,
}

/// Pointer-interaction mode of a single element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElementMode {
    /// At home, ambient oscillation only
    #[default]
    Idle,
    /// Spring chasing a nonzero repulsion target
    Repelled,
}

/// Mutable per-element runtime state
#[derive(Debug, Clone)]
pub struct ElementState {
    /// Distance to the pointer (infinite while unmeasured)
    pub distance: f32,
    /// Damped spring chasing the repulsion target
    pub spring: Spring,
    pub mode: ElementMode,
    /// Current opacity, fading toward the visibility target
    pub opacity: f32,
    /// Scroll parallax depth, fixed at scene creation
    pub parallax_factor: f32,
}

impl ElementState {
    fn new(parallax_factor: f32) -> Self {
        Self {
            distance: f32::INFINITY,
            spring: Spring::default(),
            mode: ElementMode::Idle,
            // Fade in from transparent on mount
            opacity: 0.0,
            parallax_factor,
        }
    }
}

/// Visibility rule: hidden while scrolled past the threshold or on a
/// route that shows page content instead of the backdrop
pub fn is_hidden(scroll_y: f32, route: &str, tuning: &MotionTuning) -> bool {
    scroll_y > tuning.scroll_hide_threshold
        || tuning.hidden_routes.iter().any(|r| r == route)
}

/// Complete background scene state
#[derive(Debug, Clone)]
pub struct SceneState {
    /// Fixed element specs, index-aligned with `elements`
    pub specs: Vec<DecorativeElementSpec>,
    /// Per-element runtime state
    pub elements: Vec<ElementState>,
    /// Seconds since scene creation
    pub time: f32,
}

impl SceneState {
    /// Create a scene; parallax depths are drawn once from a seeded RNG so
    /// they vary between elements but stay stable for the scene's life
    pub fn new(specs: Vec<DecorativeElementSpec>, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let elements = specs
            .iter()
            .map(|_| {
                ElementState::new(rng.random_range(PARALLAX_FACTOR_MIN..PARALLAX_FACTOR_MAX))
            })
            .collect();

        Self {
            specs,
            elements,
            time: 0.0,
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(home: Vec2, size: f32, duration: f32) -> DecorativeElementSpec {
        DecorativeElementSpec {
            kind: ElementKind::Tux,
            home,
            size,
            base_rotation: 0.0,
            oscillation_duration: duration,
            oscillation_delay: 0.0,
            accent_color: None,
            label: None,
        }
    }

    #[test]
    fn test_spec_invariants() {
        assert!(spec(Vec2::new(5.0, 50.0), 80.0, 25.0).is_valid());
        assert!(!spec(Vec2::new(-1.0, 50.0), 80.0, 25.0).is_valid());
        assert!(!spec(Vec2::new(5.0, 101.0), 80.0, 25.0).is_valid());
        assert!(!spec(Vec2::new(5.0, 50.0), 0.0, 25.0).is_valid());
        assert!(!spec(Vec2::new(5.0, 50.0), 80.0, 0.0).is_valid());
    }

    #[test]
    fn test_visibility_rule() {
        let tuning = MotionTuning::default();
        assert!(is_hidden(150.0, "/", &tuning));
        assert!(is_hidden(0.0, "/experience", &tuning));
        assert!(is_hidden(0.0, "/projects", &tuning));
        assert!(!is_hidden(0.0, "/", &tuning));
        assert!(!is_hidden(100.0, "/", &tuning)); // threshold is strict
    }

    #[test]
    fn test_scene_parallax_factors_in_range_and_stable() {
        let specs = vec![spec(Vec2::new(10.0, 10.0), 60.0, 20.0); 8];
        let a = SceneState::new(specs.clone(), 42);
        let b = SceneState::new(specs, 42);
        for (ea, eb) in a.elements.iter().zip(&b.elements) {
            assert!((PARALLAX_FACTOR_MIN..PARALLAX_FACTOR_MAX).contains(&ea.parallax_factor));
            assert_eq!(ea.parallax_factor, eb.parallax_factor);
        }
    }

    #[test]
    fn test_elements_start_unmeasured_and_transparent() {
        let scene = SceneState::new(vec![spec(Vec2::new(10.0, 10.0), 60.0, 20.0)], 1);
        assert_eq!(scene.elements[0].distance, f32::INFINITY);
        assert_eq!(scene.elements[0].opacity, 0.0);
        assert_eq!(scene.elements[0].mode, ElementMode::Idle);
    }
}
