use gable_engine::core::{App, AppControl, FrameCtx};
use gable_engine::geometry::House;
use gable_engine::render::{MeshRenderer, RenderMode};

use crate::controls::{Action, Controls};
use crate::palette::Palette;

/// Demo state: the house, the active render mode and the GPU renderer.
///
/// Everything key handling and drawing touch lives here and is handed to the
/// runtime as one owned value; nothing is global.
pub struct HouseApp {
    house: House,
    mode: RenderMode,
    controls: Controls,
    palette: Palette,
    renderer: MeshRenderer,

    base_title: String,
    title_dirty: bool,
}

impl HouseApp {
    pub fn new(base_title: impl Into<String>, controls: Controls, palette: Palette) -> Self {
        Self {
            house: House::new(),
            mode: RenderMode::default(),
            controls,
            palette,
            renderer: MeshRenderer::new(),
            base_title: base_title.into(),
            title_dirty: true,
        }
    }

    pub fn house(&self) -> &House {
        &self.house
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn title(&self) -> String {
        format!("{} [{}]", self.base_title, self.mode)
    }

    pub fn apply(&mut self, action: Action) -> AppControl {
        match action {
            Action::Move(delta) => {
                self.house.move_by(delta);
                log::debug!("house offset now {:?}", self.house.offset());
            }
            Action::SetMode(mode) => {
                if mode != self.mode {
                    log::info!("render mode: {mode}");
                    self.mode = mode;
                    self.title_dirty = true;
                }
            }
            Action::Quit => return AppControl::Exit,
        }
        AppControl::Continue
    }
}

impl App for HouseApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        for &key in &ctx.input_frame.keys_pressed {
            let Some(action) = self.controls.action_for(key) else { continue };
            if self.apply(action) == AppControl::Exit {
                ctx.runtime.exit();
                return AppControl::Exit;
            }
        }

        if self.title_dirty {
            ctx.window.set_title(&self.title());
            self.title_dirty = false;
        }

        let Self {
            house,
            mode,
            palette,
            renderer,
            ..
        } = self;
        let mode = *mode;

        ctx.render(palette.clear, |rctx, target| {
            renderer.render(rctx, target, house, mode, |part| palette.color(mode, part));
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use gable_engine::geometry::Vec3;
    use gable_engine::input::Key;

    use super::*;

    fn app() -> HouseApp {
        HouseApp::new("gable", Controls::default(), Palette::default())
    }

    #[test]
    fn starts_in_triangle_mode_at_origin() {
        let a = app();
        assert_eq!(a.mode(), RenderMode::Triangles);
        assert_eq!(a.house().offset(), Vec3::zero());
        assert_eq!(a.title(), "gable [triangles]");
    }

    #[test]
    fn move_actions_translate_house() {
        let mut a = app();
        let before = a.house().flatten_vertices();

        assert_eq!(a.apply(Action::Move(Vec3::new(0.1, 0.0, 0.0))), AppControl::Continue);

        let after = a.house().flatten_vertices();
        for (i, (b, n)) in before.iter().zip(&after).enumerate() {
            let expected = if i % 3 == 0 { b + 0.1 } else { *b };
            assert_abs_diff_eq!(*n, expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn key_sequence_round_trip() {
        let mut a = app();
        let controls = Controls::default();
        let before = a.house().flatten_vertices();

        for key in [
            Key::D,
            Key::W,
            Key::A,
            Key::S,
        ] {
            let action = controls.action_for(key).expect("bound key");
            a.apply(action);
        }

        for (b, n) in before.iter().zip(a.house().flatten_vertices()) {
            assert_abs_diff_eq!(*b, n, epsilon = 1e-6);
        }
    }

    #[test]
    fn mode_change_updates_title_and_keeps_geometry() {
        let mut a = app();
        let indices = a.house().flatten_indices();
        let vertices = a.house().flatten_vertices();

        a.apply(Action::SetMode(RenderMode::Points));

        assert_eq!(a.mode(), RenderMode::Points);
        assert_eq!(a.title(), "gable [points]");
        assert_eq!(a.house().flatten_indices(), indices);
        assert_eq!(a.house().flatten_vertices(), vertices);
    }

    #[test]
    fn quit_requests_exit() {
        assert_eq!(app().apply(Action::Quit), AppControl::Exit);
    }
}
