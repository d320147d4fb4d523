//! Default element roster
//!
//! The fixed set of decorative elements scattered around the page edges,
//! leaving the center free for foreground content.

use glam::Vec2;

use super::state::{DecorativeElementSpec, ElementKind};
use crate::theme;

fn element(
    kind: ElementKind,
    home: (f32, f32),
    size: f32,
    base_rotation: f32,
    oscillation_duration: f32,
    oscillation_delay: f32,
    accent_color: Option<&str>,
    label: Option<&str>,
) -> DecorativeElementSpec {
    DecorativeElementSpec {
        kind,
        home: Vec2::new(home.0, home.1),
        size,
        base_rotation,
        oscillation_duration,
        oscillation_delay,
        accent_color: accent_color.map(str::to_string),
        label: label.map(str::to_string),
    }
}

/// The default 11-element scene
pub fn default_roster() -> Vec<DecorativeElementSpec> {
    use ElementKind::*;

    vec![
        // Top left area
        element(
            Terminal,
            (5.0, 10.0),
            140.0,
            5.0,
            35.0,
            0.0,
            Some(theme::GREEN),
            Some(" neofetch"),
        ),
        element(Vim, (15.0, 25.0), 60.0, 0.0, 22.0, 3.5, None, None),
        // Top right area
        element(
            Window,
            (85.0, 15.0),
            180.0,
            2.0,
            40.0,
            1.0,
            Some(theme::BLUE),
            Some("Linux > Windows"),
        ),
        element(
            Desktop,
            (80.0, 40.0),
            70.0,
            0.0,
            20.0,
            2.5,
            Some(theme::MAUVE),
            Some("Hyprland"),
        ),
        // Bottom left area
        element(
            Command,
            (15.0, 82.0),
            100.0,
            0.0,
            32.0,
            1.5,
            Some(theme::RED),
            Some("sudo rm -rf /"),
        ),
        element(
            Package,
            (7.0, 70.0),
            60.0,
            0.0,
            30.0,
            2.0,
            Some(theme::BLUE),
            Some("pacman"),
        ),
        // Bottom right area
        element(
            Terminal,
            (40.0, 75.0),
            120.0,
            5.0,
            38.0,
            2.0,
            Some(theme::MAUVE),
            Some(" nvim ~/.bashrc"),
        ),
        element(
            Window,
            (75.0, 75.0),
            160.0,
            -2.0,
            42.0,
            0.5,
            Some(theme::PINK),
            Some("I use Arch btw :)"),
        ),
        // Left edge
        element(Tux, (5.0, 50.0), 80.0, 0.0, 25.0, 2.0, None, None),
        // Right edge
        element(
            Folder,
            (90.0, 60.0),
            70.0,
            0.0,
            28.0,
            1.0,
            Some(theme::YELLOW),
            None,
        ),
        // Top edge
        element(
            Command,
            (50.0, 20.0),
            90.0,
            0.0,
            18.0,
            4.0,
            Some(theme::GREEN),
            Some("grep -r 'TODO'"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_size() {
        assert_eq!(default_roster().len(), 11);
    }

    #[test]
    fn test_roster_specs_all_valid() {
        for spec in default_roster() {
            assert!(spec.is_valid(), "invalid spec: {spec:?}");
        }
    }

    #[test]
    fn test_roster_covers_every_kind() {
        use ElementKind::*;
        let roster = default_roster();
        for kind in [Terminal, Window, Tux, Folder, Command, Vim, Desktop, Package] {
            assert!(
                roster.iter().any(|s| s.kind == kind),
                "missing kind {kind:?}"
            );
        }
    }
}
