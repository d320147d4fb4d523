//! Catppuccin Mocha palette
//!
//! Colors shared by the backdrop, gradient, glow blobs and element accents.

pub const ROSEWATER: &str = "#f5e0dc";
pub const FLAMINGO: &str = "#f2cdcd";
pub const PINK: &str = "#f5c2e7";
pub const MAUVE: &str = "#cba6f7";
pub const RED: &str = "#f38ba8";
pub const MAROON: &str = "#eba0ac";
pub const PEACH: &str = "#fab387";
pub const YELLOW: &str = "#f9e2af";
pub const GREEN: &str = "#a6e3a1";
pub const TEAL: &str = "#94e2d5";
pub const SKY: &str = "#89dceb";
pub const SAPPHIRE: &str = "#74c7ec";
pub const BLUE: &str = "#89b4fa";
pub const LAVENDER: &str = "#b4befe";
pub const TEXT: &str = "#cdd6f4";
pub const SUBTEXT1: &str = "#bac2de";
pub const SUBTEXT0: &str = "#a6adc8";
pub const OVERLAY2: &str = "#9399b2";
pub const OVERLAY1: &str = "#7f849c";
pub const OVERLAY0: &str = "#6c7086";
pub const SURFACE2: &str = "#585b70";
pub const SURFACE1: &str = "#45475a";
pub const SURFACE0: &str = "#313244";
pub const BASE: &str = "#1e1e2e";
pub const MANTLE: &str = "#181825";
pub const CRUST: &str = "#11111b";

/// Vim's brand green, the one color outside the palette
pub const VIM_GREEN: &str = "#019833";
