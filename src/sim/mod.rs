//! Background motion simulation
//!
//! All motion logic lives here. This module must stay pure:
//! - Fixed timestep only
//! - Seeded RNG only (parallax depths)
//! - Measurement injected through the `Measure` trait
//! - No rendering or platform dependencies

pub mod ambient;
pub mod field;
pub mod roster;
pub mod spring;
pub mod state;
pub mod tick;

pub use ambient::{ambient_offset, ambient_wobble, mount_scale};
pub use field::{repulsion_target, strength};
pub use roster::default_roster;
pub use spring::Spring;
pub use state::{
    DecorativeElementSpec, ElementKind, ElementMode, ElementState, Measure, NoMeasure,
    PointerState, Rect, SceneState, ScrollState, is_hidden,
};
pub use tick::{ElementTransform, TickInput, element_transform, tick};
