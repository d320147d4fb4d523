//! Motion tuning
//!
//! The spring/repulsion numbers are aesthetic choices, not derived from any
//! requirement, so they live in a config struct instead of being hardcoded.
//! Persisted separately from page content in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable motion parameters for the background engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionTuning {
    // === Spring ===
    /// Spring damping coefficient
    pub damping: f32,
    /// Spring stiffness coefficient
    pub stiffness: f32,

    // === Repulsion ===
    /// Pointer influence radius (px); zero repulsion beyond it
    pub influence_radius: f32,
    /// Piecewise-linear (distance, strength) breakpoints, ascending distance
    pub strength_curve: Vec<(f32, f32)>,
    /// Minimum pointer distance clamp (degenerate-direction guard)
    pub min_pointer_distance: f32,

    // === Visibility ===
    /// Scroll offset past which elements hide
    pub scroll_hide_threshold: f32,
    /// Routes on which elements hide regardless of scroll
    pub hidden_routes: Vec<String>,
    /// Opacity fade duration (seconds)
    pub fade_duration: f32,

    // === Accessibility ===
    /// Suppress ambient oscillation and wobble
    pub reduced_motion: bool,
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            damping: SPRING_DAMPING,
            stiffness: SPRING_STIFFNESS,
            influence_radius: INFLUENCE_RADIUS,
            strength_curve: STRENGTH_CURVE.to_vec(),
            min_pointer_distance: MIN_POINTER_DISTANCE,
            scroll_hide_threshold: SCROLL_HIDE_THRESHOLD,
            hidden_routes: vec!["/experience".into(), "/projects".into()],
            fade_duration: FADE_DURATION,
            reduced_motion: false,
        }
    }
}

impl MotionTuning {
    /// Ambient oscillation amplitude multiplier (respects reduced_motion)
    pub fn ambient_amplitude(&self) -> f32 {
        if self.reduced_motion { 0.0 } else { 1.0 }
    }

    /// LocalStorage key
    const STORAGE_KEY: &'static str = "tux_drift_tuning";

    /// Load tuning from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(tuning) = serde_json::from_str(&json) {
                    log::info!("Loaded motion tuning from LocalStorage");
                    return tuning;
                }
            }
        }

        log::info!("Using default motion tuning");
        Self::default()
    }

    /// Save tuning to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Motion tuning saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roundtrips_through_json() {
        let tuning = MotionTuning::default();
        let json = serde_json::to_string(&tuning).unwrap();
        let back: MotionTuning = serde_json::from_str(&json).unwrap();
        assert_eq!(back.damping, tuning.damping);
        assert_eq!(back.strength_curve, tuning.strength_curve);
        assert_eq!(back.hidden_routes, tuning.hidden_routes);
    }

    #[test]
    fn test_native_load_save_stubs() {
        // Native load always yields defaults; save is a no-op but callable
        // from the same mutation path the wasm build persists through
        let mut tuning = MotionTuning::load();
        assert_eq!(tuning.damping, MotionTuning::default().damping);
        tuning.reduced_motion = true;
        tuning.save();
        assert!(tuning.reduced_motion);
    }

    #[test]
    fn test_reduced_motion_zeroes_ambient() {
        let mut tuning = MotionTuning::default();
        assert_eq!(tuning.ambient_amplitude(), 1.0);
        tuning.reduced_motion = true;
        assert_eq!(tuning.ambient_amplitude(), 0.0);
    }
}
