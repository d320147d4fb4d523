//! Tux Drift - pointer-reactive animated background
//!
//! Core modules:
//! - `sim`: Deterministic motion simulation (repulsion field, springs,
//!   ambient oscillation, visibility)
//! - `renderer`: DOM backdrop (markup builders + wasm32 mounting)
//! - `theme`: Catppuccin Mocha palette
//! - `tuning`: Data-driven motion tuning

pub mod renderer;
pub mod sim;
pub mod theme;
pub mod tuning;

pub use tuning::MotionTuning;

use glam::Vec2;

/// Engine configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth springs)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Spring reference tuning (matches the site's original feel)
    pub const SPRING_DAMPING: f32 = 15.0;
    pub const SPRING_STIFFNESS: f32 = 150.0;

    /// Pointer influence radius (px); no repulsion beyond this
    pub const INFLUENCE_RADIUS: f32 = 300.0;
    /// Repulsion curve breakpoints: (distance, strength)
    pub const STRENGTH_CURVE: [(f32, f32); 4] =
        [(0.0, 40.0), (100.0, 20.0), (200.0, 5.0), (300.0, 0.0)];
    /// Minimum distance clamp, guards the degenerate pointer-on-center case
    pub const MIN_POINTER_DISTANCE: f32 = 1.0;

    /// Elements hide once the page scrolls past this offset (px)
    pub const SCROLL_HIDE_THRESHOLD: f32 = 100.0;
    /// Visibility fades over this many seconds
    pub const FADE_DURATION: f32 = 0.5;

    /// Resting element opacity while visible
    pub const ELEMENT_OPACITY: f32 = 0.9;
    /// Backdrop container opacity
    pub const BACKDROP_OPACITY: f32 = 0.65;

    /// Mount scale-in: elements grow from this scale to 1.0
    pub const MOUNT_SCALE_START: f32 = 0.8;
    pub const MOUNT_SCALE_DURATION: f32 = 0.6;

    /// Parallax depth factor range, sampled per element at scene creation
    pub const PARALLAX_FACTOR_MIN: f32 = 0.2;
    pub const PARALLAX_FACTOR_MAX: f32 = 0.7;
}

/// Convert a percentage home coordinate to device pixels
#[inline]
pub fn percent_to_pixels(percent: Vec2, viewport: Vec2) -> Vec2 {
    percent / 100.0 * viewport
}
