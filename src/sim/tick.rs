//! Fixed timestep scene tick
//!
//! Advances every element's pointer distance, repulsion spring and opacity
//! fade, then assembles the final per-element transform. Pure except for
//! the injected measurement source; drive it with synthetic `dt` values in
//! tests.

use glam::Vec2;

use super::ambient::{ambient_offset, ambient_wobble, mount_scale};
use super::field::repulsion_target;
use super::state::{
    ElementMode, Measure, PointerState, SceneState, ScrollState, is_hidden,
};
use crate::consts::ELEMENT_OPACITY;
use crate::percent_to_pixels;
use crate::tuning::MotionTuning;

/// Shared input state for a single tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickInput {
    pub pointer: PointerState,
    pub scroll: ScrollState,
    /// Current route path from the host router
    pub route: String,
    /// Viewport size in px, for percent -> pixel home positions
    pub viewport: Vec2,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            pointer: PointerState::default(),
            scroll: ScrollState::default(),
            route: "/".to_string(),
            viewport: Vec2::new(1280.0, 720.0),
        }
    }
}

/// Final on-screen transform for one element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementTransform {
    /// Home position in device pixels
    pub home: Vec2,
    /// Offset from home: spring + ambient oscillation + scroll parallax
    pub offset: Vec2,
    /// Base rotation plus periodic wobble (degrees)
    pub rotation: f32,
    /// Mount scale-in factor
    pub scale: f32,
    pub opacity: f32,
}

/// Advance the scene one fixed timestep
pub fn tick(
    scene: &mut SceneState,
    input: &TickInput,
    measure: &dyn Measure,
    tuning: &MotionTuning,
    dt: f32,
) {
    let hidden = is_hidden(input.scroll.offset_y, &input.route, tuning);
    let opacity_target = if hidden { 0.0 } else { ELEMENT_OPACITY };
    let fade_rate = ELEMENT_OPACITY / tuning.fade_duration.max(f32::EPSILON);

    for (index, element) in scene.elements.iter_mut().enumerate() {
        // Unmeasured elements and a never-seen pointer both degrade to the
        // neutral no-repulsion state
        let center = measure.measure(index).map(|r| r.center());
        let target = match (input.pointer.pos, center) {
            (Some(pointer), Some(center)) => {
                element.distance = pointer.distance(center);
                repulsion_target(
                    pointer,
                    center,
                    &tuning.strength_curve,
                    tuning.influence_radius,
                    tuning.min_pointer_distance,
                )
            }
            _ => {
                element.distance = f32::INFINITY;
                Vec2::ZERO
            }
        };

        element.mode = if target != Vec2::ZERO {
            ElementMode::Repelled
        } else {
            ElementMode::Idle
        };

        // Physics keeps running while hidden so motion state stays coherent
        // when visibility returns
        element
            .spring
            .step(target, tuning.damping, tuning.stiffness, dt);

        let delta = opacity_target - element.opacity;
        element.opacity += delta.clamp(-fade_rate * dt, fade_rate * dt);
    }

    scene.time += dt;
}

/// Assemble the final transform for element `index`
pub fn element_transform(
    scene: &SceneState,
    index: usize,
    input: &TickInput,
    tuning: &MotionTuning,
) -> ElementTransform {
    let spec = &scene.specs[index];
    let element = &scene.elements[index];
    let amplitude = tuning.ambient_amplitude();

    let ambient = ambient_offset(
        scene.time,
        spec.oscillation_duration,
        spec.oscillation_delay,
        amplitude,
    );
    let wobble = ambient_wobble(
        scene.time,
        spec.oscillation_duration,
        spec.oscillation_delay,
        amplitude,
    );
    let parallax = if input.scroll.offset_y > 0.0 {
        Vec2::new(0.0, -input.scroll.offset_y * element.parallax_factor)
    } else {
        Vec2::ZERO
    };

    ElementTransform {
        home: percent_to_pixels(spec.home, input.viewport),
        offset: element.spring.offset + ambient + parallax,
        rotation: spec.base_rotation + wobble,
        scale: mount_scale(scene.time),
        opacity: element.opacity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::state::{DecorativeElementSpec, ElementKind, NoMeasure, Rect};

    /// Mock measurement source with fixed rects
    struct FixedMeasure(Vec<Option<Rect>>);

    impl Measure for FixedMeasure {
        fn measure(&self, index: usize) -> Option<Rect> {
            self.0.get(index).copied().flatten()
        }
    }

    fn one_element_scene() -> SceneState {
        let spec = DecorativeElementSpec {
            kind: ElementKind::Terminal,
            home: Vec2::new(50.0, 50.0),
            size: 140.0,
            base_rotation: 5.0,
            oscillation_duration: 35.0,
            oscillation_delay: 0.0,
            accent_color: None,
            label: None,
        };
        SceneState::new(vec![spec], 7)
    }

    fn measured_at(center: Vec2) -> FixedMeasure {
        FixedMeasure(vec![Some(Rect {
            x: center.x - 50.0,
            y: center.y - 50.0,
            width: 100.0,
            height: 100.0,
        })])
    }

    fn run(
        scene: &mut SceneState,
        input: &TickInput,
        measure: &dyn Measure,
        tuning: &MotionTuning,
        steps: usize,
    ) {
        for _ in 0..steps {
            tick(scene, input, measure, tuning, SIM_DT);
        }
    }

    #[test]
    fn test_distant_pointer_leaves_spring_at_rest() {
        // Pointer at origin, element centered at (500,500): distance ~707,
        // outside the field
        let mut scene = one_element_scene();
        let tuning = MotionTuning::default();
        let input = TickInput {
            pointer: PointerState {
                pos: Some(Vec2::ZERO),
            },
            ..Default::default()
        };
        let measure = measured_at(Vec2::new(500.0, 500.0));

        run(&mut scene, &input, &measure, &tuning, 120);

        assert!((scene.elements[0].distance - 707.1).abs() < 1.0);
        assert_eq!(scene.elements[0].mode, ElementMode::Idle);
        assert_eq!(scene.elements[0].spring.offset, Vec2::ZERO);
    }

    #[test]
    fn test_near_pointer_repels_and_settles() {
        // Pointer 10px left of center: near-full strength, pushed right
        let mut scene = one_element_scene();
        let tuning = MotionTuning::default();
        let center = Vec2::new(500.0, 500.0);
        let input = TickInput {
            pointer: PointerState {
                pos: Some(center - Vec2::new(10.0, 0.0)),
            },
            ..Default::default()
        };
        let measure = measured_at(center);

        run(&mut scene, &input, &measure, &tuning, 240);

        let element = &scene.elements[0];
        assert_eq!(element.mode, ElementMode::Repelled);
        // Curve at distance 10 gives 38; settled offset points away (+x)
        assert!(element.spring.offset.x > 35.0 && element.spring.offset.x < 42.0);
        assert!(element.spring.offset.y.abs() < 0.5);
    }

    #[test]
    fn test_pointer_leaving_field_relaxes_to_home() {
        let mut scene = one_element_scene();
        let tuning = MotionTuning::default();
        let center = Vec2::new(500.0, 500.0);
        let measure = measured_at(center);

        // Repel first
        let near = TickInput {
            pointer: PointerState {
                pos: Some(center + Vec2::new(30.0, 0.0)),
            },
            ..Default::default()
        };
        run(&mut scene, &near, &measure, &tuning, 120);
        assert!(scene.elements[0].spring.offset.length() > 10.0);

        // Then hold the pointer far away
        let far = TickInput {
            pointer: PointerState {
                pos: Some(Vec2::new(2000.0, 2000.0)),
            },
            ..Default::default()
        };
        run(&mut scene, &far, &measure, &tuning, 360);

        assert_eq!(scene.elements[0].mode, ElementMode::Idle);
        assert!(scene.elements[0].spring.offset.length() < 1.0);
    }

    #[test]
    fn test_unmeasured_element_stays_neutral() {
        let mut scene = one_element_scene();
        let tuning = MotionTuning::default();
        let input = TickInput {
            pointer: PointerState {
                pos: Some(Vec2::new(500.0, 500.0)),
            },
            ..Default::default()
        };

        run(&mut scene, &input, &NoMeasure, &tuning, 120);

        assert_eq!(scene.elements[0].distance, f32::INFINITY);
        assert_eq!(scene.elements[0].spring.offset, Vec2::ZERO);
    }

    #[test]
    fn test_hidden_fades_out_but_physics_continues() {
        let mut scene = one_element_scene();
        let tuning = MotionTuning::default();
        let center = Vec2::new(500.0, 500.0);
        let measure = measured_at(center);

        // Visible first: fade in
        let visible = TickInput::default();
        run(&mut scene, &visible, &measure, &tuning, 120);
        assert!((scene.elements[0].opacity - ELEMENT_OPACITY).abs() < 0.01);

        // Scrolled past the threshold with the pointer parked nearby
        let hidden = TickInput {
            pointer: PointerState {
                pos: Some(center - Vec2::new(20.0, 0.0)),
            },
            scroll: ScrollState { offset_y: 150.0 },
            ..Default::default()
        };
        run(&mut scene, &hidden, &measure, &tuning, 120);

        let element = &scene.elements[0];
        assert!(element.opacity < 0.01);
        // Spring kept chasing the repulsion target while invisible
        assert!(element.spring.offset.length() > 10.0);
    }

    #[test]
    fn test_route_gating_fades_out() {
        let mut scene = one_element_scene();
        let tuning = MotionTuning::default();
        let measure = measured_at(Vec2::new(500.0, 500.0));

        run(&mut scene, &TickInput::default(), &measure, &tuning, 120);
        assert!(scene.elements[0].opacity > 0.8);

        let on_projects = TickInput {
            route: "/projects".to_string(),
            ..Default::default()
        };
        run(&mut scene, &on_projects, &measure, &tuning, 120);
        assert!(scene.elements[0].opacity < 0.01);
    }

    #[test]
    fn test_transform_composes_home_spring_ambient_parallax() {
        let mut scene = one_element_scene();
        let tuning = MotionTuning::default();
        let measure = measured_at(Vec2::new(500.0, 500.0));

        let input = TickInput {
            scroll: ScrollState { offset_y: 40.0 },
            viewport: Vec2::new(1000.0, 800.0),
            ..Default::default()
        };
        run(&mut scene, &input, &measure, &tuning, 60);

        let t = element_transform(&scene, 0, &input, &tuning);
        assert_eq!(t.home, Vec2::new(500.0, 400.0));
        // Parallax pulls upward proportional to scroll
        let factor = scene.elements[0].parallax_factor;
        let expected_parallax = -40.0 * factor;
        // Ambient x/y are bounded by the keyframe extremes; strip parallax
        // and what remains must sit within them
        let residual_y = t.offset.y - expected_parallax;
        assert!(residual_y >= -8.0 && residual_y <= 5.0);
        assert!(t.offset.x >= -5.0 && t.offset.x <= 10.0);
        assert!((t.rotation - 5.0).abs() <= 2.0);
        assert!(t.scale > 0.8 && t.scale <= 1.0);
    }

    #[test]
    fn test_reduced_motion_suppresses_ambient() {
        let mut scene = one_element_scene();
        let tuning = MotionTuning {
            reduced_motion: true,
            ..Default::default()
        };
        let input = TickInput::default();
        run(&mut scene, &input, &NoMeasure, &tuning, 600);

        let t = element_transform(&scene, 0, &input, &tuning);
        assert_eq!(t.offset, Vec2::ZERO);
        assert_eq!(t.rotation, 5.0);
    }
}
