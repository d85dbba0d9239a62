use gable_engine::geometry::Vec3;
use gable_engine::input::Key;
use gable_engine::render::RenderMode;

/// What a key press asks the demo to do.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Action {
    Move(Vec3),
    SetMode(RenderMode),
    Quit,
}

/// Key bindings.
///
/// `WASD` and the arrow keys move the house by `step` along X/Y, `1`/`2`/`3`
/// pick triangles/lines/points and `Escape` quits.
#[derive(Debug, Clone)]
pub struct Controls {
    pub step: f32,
}

impl Default for Controls {
    fn default() -> Self {
        Self { step: 0.1 }
    }
}

impl Controls {
    pub fn action_for(&self, key: Key) -> Option<Action> {
        let right = Vec3::new(self.step, 0.0, 0.0);
        let up = Vec3::new(0.0, self.step, 0.0);
        let action = match key {
            Key::D | Key::ArrowRight => Action::Move(right),
            Key::A | Key::ArrowLeft => Action::Move(-right),
            Key::W | Key::ArrowUp => Action::Move(up),
            Key::S | Key::ArrowDown => Action::Move(-up),

            Key::Digit1 => Action::SetMode(RenderMode::Triangles),
            Key::Digit2 => Action::SetMode(RenderMode::Lines),
            Key::Digit3 => Action::SetMode(RenderMode::Points),

            Key::Escape => Action::Quit,

            Key::Unknown(_) => return None,
        };
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directional_keys_move_by_step() {
        let c = Controls::default();
        assert_eq!(c.action_for(Key::D), Some(Action::Move(Vec3::new(0.1, 0.0, 0.0))));
        assert_eq!(c.action_for(Key::A), Some(Action::Move(Vec3::new(-0.1, 0.0, 0.0))));
        assert_eq!(c.action_for(Key::W), Some(Action::Move(Vec3::new(0.0, 0.1, 0.0))));
        assert_eq!(c.action_for(Key::S), Some(Action::Move(Vec3::new(0.0, -0.1, 0.0))));
    }

    #[test]
    fn arrows_alias_wasd() {
        let c = Controls::default();
        for (arrow, letter) in [
            (Key::ArrowRight, Key::D),
            (Key::ArrowLeft, Key::A),
            (Key::ArrowUp, Key::W),
            (Key::ArrowDown, Key::S),
        ] {
            assert_eq!(c.action_for(arrow), c.action_for(letter));
        }
    }

    #[test]
    fn digits_select_render_mode() {
        let c = Controls::default();
        assert_eq!(c.action_for(Key::Digit1), Some(Action::SetMode(RenderMode::Triangles)));
        assert_eq!(c.action_for(Key::Digit2), Some(Action::SetMode(RenderMode::Lines)));
        assert_eq!(c.action_for(Key::Digit3), Some(Action::SetMode(RenderMode::Points)));
    }

    #[test]
    fn custom_step_is_used() {
        let c = Controls { step: 0.25 };
        assert_eq!(c.action_for(Key::S), Some(Action::Move(Vec3::new(0.0, -0.25, 0.0))));
    }

    #[test]
    fn escape_quits_and_unknown_is_ignored() {
        let c = Controls::default();
        assert_eq!(c.action_for(Key::Escape), Some(Action::Quit));
        assert_eq!(c.action_for(Key::Unknown(42)), None);
    }
}
