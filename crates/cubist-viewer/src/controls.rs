//! Keyboard bindings for the camera / mode / palette input surface.

use winit::keyboard::KeyCode;

/// Degrees added per orbit key press (the "slider step").
pub const ANGLE_STEP_DEG: f32 = 5.0;

/// Radius change per zoom key press.
pub const RADIUS_STEP: f32 = 0.5;

/// Viewer-side radius clamp. The core only requires `radius > 0`; the clamp
/// keeps the cube inside the far plane and out of the near plane.
pub const RADIUS_RANGE: std::ops::RangeInclusive<f32> = 1.0..=20.0;

/// One user intent, decoded from a key press.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Action {
    OrbitPolar(f32),
    OrbitAzimuth(f32),
    Zoom(f32),
    ToggleProjection,
    CycleMode,
    SelectPalette(&'static str),
    Quit,
}

impl Action {
    /// Key repeats are meaningful for continuous controls (orbit/zoom) and
    /// noise for toggles.
    pub fn accepts_repeat(self) -> bool {
        matches!(self, Action::OrbitPolar(_) | Action::OrbitAzimuth(_) | Action::Zoom(_))
    }
}

/// Maps a physical key to its action, if any.
pub fn action_for(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::ArrowUp => Some(Action::OrbitPolar(-ANGLE_STEP_DEG)),
        KeyCode::ArrowDown => Some(Action::OrbitPolar(ANGLE_STEP_DEG)),
        KeyCode::ArrowLeft => Some(Action::OrbitAzimuth(-ANGLE_STEP_DEG)),
        KeyCode::ArrowRight => Some(Action::OrbitAzimuth(ANGLE_STEP_DEG)),

        KeyCode::Equal | KeyCode::NumpadAdd | KeyCode::KeyW => Some(Action::Zoom(-RADIUS_STEP)),
        KeyCode::Minus | KeyCode::NumpadSubtract | KeyCode::KeyS => Some(Action::Zoom(RADIUS_STEP)),

        KeyCode::KeyP => Some(Action::ToggleProjection),
        KeyCode::KeyM => Some(Action::CycleMode),

        KeyCode::Digit1 => Some(Action::SelectPalette("classic")),
        KeyCode::Digit2 => Some(Action::SelectPalette("muted")),
        KeyCode::Digit3 => Some(Action::SelectPalette("pastel")),

        KeyCode::Escape => Some(Action::Quit),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_keys_name_built_in_palettes() {
        use cubist_engine::geometry::Palette;
        for code in [KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3] {
            let Some(Action::SelectPalette(name)) = action_for(code) else {
                panic!("{code:?} should select a palette");
            };
            assert!(Palette::named(name).is_some(), "{name} is not built in");
        }
    }

    #[test]
    fn toggles_ignore_key_repeat() {
        assert!(!Action::ToggleProjection.accepts_repeat());
        assert!(!Action::CycleMode.accepts_repeat());
        assert!(Action::Zoom(1.0).accepts_repeat());
    }

    #[test]
    fn unbound_keys_do_nothing() {
        assert_eq!(action_for(KeyCode::KeyQ), None);
        assert_eq!(action_for(KeyCode::F12), None);
    }
}
