//! Window setup and the frame loop.
//!
//! [`Game::run`] owns raylib: it opens the window, loads the scene's
//! assets, then drives one tick per frame in a fixed order — input
//! snapshot, node tree update, scene logic, render. Scenes implement
//! [`Scene`] and never touch raylib themselves.

use raylib::prelude::*;

use crate::input::Input;
use crate::render::{RaylibRenderer, Renderer, TextureStore};
use crate::stage::group::Group;

/// Window parameters for [`Game`].
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    pub title: String,
    pub target_fps: u32,
    /// RGBA clear color.
    pub background: [u8; 4],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Tesserae".to_string(),
            target_fps: 60,
            background: [20, 20, 30, 255],
        }
    }
}

/// Handles a scene needs while loading assets and building its tree.
pub struct SetupContext<'a> {
    pub rl: &'a mut RaylibHandle,
    pub thread: &'a RaylibThread,
    pub textures: &'a mut TextureStore,
}

/// One running game screen.
///
/// Each frame the loop calls, in order: [`Group::update`] on the root,
/// [`Scene::update`], then [`Scene::render_under`], the root tree render,
/// and [`Scene::render_over`]. Later-added nodes draw on top.
pub trait Scene {
    /// Load textures and build the initial node tree.
    fn setup(&mut self, ctx: &mut SetupContext) -> Result<(), String>;

    /// Game-specific logic, run after the node tree has updated.
    fn update(&mut self, input: &Input, dt: f32);

    fn root(&self) -> &Group;

    fn root_mut(&mut self) -> &mut Group;

    /// Drawn before the node tree; for backgrounds and maps kept outside
    /// the tree.
    fn render_under(&self, _renderer: &mut dyn Renderer) {}

    /// Drawn after the node tree; for player sprites and HUD kept outside
    /// the tree.
    fn render_over(&self, _renderer: &mut dyn Renderer) {}

    /// Ask the loop to stop at the end of this frame.
    fn should_quit(&self) -> bool {
        false
    }
}

/// Owns the window and drives a [`Scene`].
pub struct Game {
    config: WindowConfig,
}

impl Game {
    pub fn new(config: WindowConfig) -> Self {
        Self { config }
    }

    /// Open the window and run `scene` until it quits or the window
    /// closes.
    pub fn run(self, scene: &mut dyn Scene) -> Result<(), String> {
        let (mut rl, thread) = raylib::init()
            .size(self.config.width, self.config.height)
            .title(&self.config.title)
            .build();
        rl.set_target_fps(self.config.target_fps);

        let mut textures = TextureStore::new();
        scene.setup(&mut SetupContext {
            rl: &mut rl,
            thread: &thread,
            textures: &mut textures,
        })?;
        log::info!("scene ready, entering main loop");

        let [r, g, b, a] = self.config.background;
        let background = Color::new(r, g, b, a);
        let mut input = Input::new();

        while !rl.window_should_close() && !scene.should_quit() {
            let dt = rl.get_frame_time();
            input.poll(&rl);

            scene.root_mut().update(dt);
            scene.update(&input, dt);

            let mut d = rl.begin_drawing(&thread);
            d.clear_background(background);
            let mut renderer = RaylibRenderer {
                d: &mut d,
                textures: &textures,
            };
            scene.render_under(&mut renderer);
            scene.root().render(&mut renderer);
            scene.render_over(&mut renderer);
        }
        log::info!("main loop finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert_eq!(config.target_fps, 60);
    }
}
