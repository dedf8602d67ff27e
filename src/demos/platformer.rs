//! Platformer: run and jump across a tile map.

use rustc_hash::FxHashMap;

use crate::animation::Animation;
use crate::game::{Scene, SetupContext};
use crate::input::Input;
use crate::physics::Physics;
use crate::render::Renderer;
use crate::stage::group::Group;
use crate::stage::label::Label;
use crate::stage::sprite::Sprite;
use crate::tilemap::TileMap;

const SCREEN_W: f32 = 800.0;
const SCREEN_H: f32 = 600.0;
const TILE: f32 = 40.0;

const MAP_ROWS: [&str; 15] = [
    "....................",
    "....................",
    "....................",
    "..........XXX.......",
    "....................",
    "......XX............",
    "....................",
    "...X........XX......",
    "..................X.",
    "XX.......XXX....XXX.",
    "....P...............",
    "XXXXXXX....XXXXXXXXX",
    "......X....X........",
    "......X....X........",
    "XXXXXXXXXXXXXXXXXXXX",
];

pub struct PlatformerScene {
    root: Group,
    map: Option<TileMap>,
    hero: Sprite,
    hint: Label,
    quit: bool,
}

impl PlatformerScene {
    pub fn new() -> Self {
        Self {
            root: Group::new(),
            map: None,
            hero: Sprite::new(),
            hint: Label::new("A/D to run, SPACE to jump", 10.0, 10.0),
            quit: false,
        }
    }

    /// Ground probe: overlap test one pixel below the current position.
    fn on_ground(&self) -> bool {
        let Some(map) = &self.map else {
            return false;
        };
        let mut probe = Sprite::new();
        probe.set_size(self.hero.width, self.hero.height);
        probe.set_position(self.hero.x, self.hero.y + 1.0);
        map.check_overlap(&probe)
    }
}

impl Default for PlatformerScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for PlatformerScene {
    fn setup(&mut self, ctx: &mut SetupContext) -> Result<(), String> {
        ctx.textures
            .load(ctx.rl, ctx.thread, "tileset", "assets/images/tileset.png")?;
        ctx.textures
            .load(ctx.rl, ctx.thread, "hero", "assets/images/hero.png")?;

        let mut tile_symbols = FxHashMap::default();
        tile_symbols.insert('X', 0);
        let map = TileMap::new(
            MAP_ROWS.iter().map(|r| r.to_string()).collect(),
            &tile_symbols,
            ctx.textures.grid_regions("tileset", 1, 1)?,
            TILE,
            TILE,
        )?;

        let spawn = map
            .first_symbol_position('P')
            .ok_or("map has no 'P' spawn marker")?;
        self.hero
            .set_animation(Animation::from_grid("hero", 256.0, 64.0, 1, 4, 0.15, true));
        self.hero.set_position(spawn.x, spawn.y);
        self.hero.physics = Some(Physics::platform(600.0, 150.0, 800.0, 450.0, 900.0, 700.0));

        self.map = Some(map);
        Ok(())
    }

    fn update(&mut self, input: &Input, dt: f32) {
        if input.back.just_pressed {
            self.quit = true;
        }

        let on_ground = self.on_ground();
        if let Some(physics) = self.hero.physics.as_mut() {
            if input.left.active {
                physics.accelerate_at_angle(180.0);
            }
            if input.right.active {
                physics.accelerate_at_angle(0.0);
            }
            if input.space.just_pressed && on_ground {
                physics.jump();
            }
        }

        self.hero.act(dt);
        if let Some(map) = &self.map {
            map.prevent_overlap(&mut self.hero);
        }
        self.hero.bound_to_screen(SCREEN_W, SCREEN_H);

        // face and animate by horizontal motion
        let vx = self.hero.physics.as_ref().map_or(0.0, |p| p.velocity.x);
        if vx.abs() > 1.0 {
            self.hero.mirrored = vx < 0.0;
        }
        if let Some(animation) = self.hero.animation_mut() {
            animation.paused = vx.abs() <= 1.0;
        }
    }

    fn root(&self) -> &Group {
        &self.root
    }

    fn root_mut(&mut self) -> &mut Group {
        &mut self.root
    }

    fn render_under(&self, renderer: &mut dyn Renderer) {
        if let Some(map) = &self.map {
            map.render(renderer);
        }
    }

    fn render_over(&self, renderer: &mut dyn Renderer) {
        self.hero.render(renderer);
        self.hint.render(renderer);
    }

    fn should_quit(&self) -> bool {
        self.quit
    }
}
