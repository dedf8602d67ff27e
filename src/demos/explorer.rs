//! Map explorer: wander a dungeon loaded from a JSON map file and pick up
//! coins by walking over them or clicking them.

use crate::actions::Action;
use crate::game::{Scene, SetupContext};
use crate::input::Input;
use crate::render::Renderer;
use crate::stage::group::Group;
use crate::stage::label::Label;
use crate::stage::node::Node;
use crate::stage::sprite::Sprite;
use crate::tilemap::{MapFile, TileMap};

const SCREEN_W: f32 = 800.0;
const SCREEN_H: f32 = 600.0;

pub struct ExplorerScene {
    root: Group,
    map: Option<TileMap>,
    hero: Sprite,
    coin_label: Label,
    coins: usize,
    quit: bool,
}

impl ExplorerScene {
    pub fn new() -> Self {
        Self {
            root: Group::new(),
            map: None,
            hero: Sprite::new(),
            coin_label: Label::new("Coins: 0", 10.0, 10.0),
            coins: 0,
            quit: false,
        }
    }
}

impl Default for ExplorerScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for ExplorerScene {
    fn setup(&mut self, ctx: &mut SetupContext) -> Result<(), String> {
        ctx.textures
            .load(ctx.rl, ctx.thread, "dungeon", "assets/images/dungeon.png")?;
        ctx.textures
            .load(ctx.rl, ctx.thread, "explorer", "assets/images/explorer.png")?;
        ctx.textures
            .load(ctx.rl, ctx.thread, "coin", "assets/images/coin.png")?;

        let file = MapFile::load("assets/maps/dungeon.json")?;
        let map = TileMap::from_file(&file, ctx.textures.grid_regions("dungeon", 1, 2)?)?;

        let spawn = map
            .first_symbol_position('P')
            .ok_or("map has no 'P' spawn marker")?;
        self.hero.set_texture(ctx.textures.full_region("explorer")?);
        self.hero.set_position(spawn.x, spawn.y);
        self.hero.set_physics(500.0, 140.0, 500.0);

        let mut coins = Group::new();
        let coin_texture = ctx.textures.full_region("coin")?;
        for position in map.symbol_positions('C') {
            let mut coin = Sprite::new();
            coin.set_texture(coin_texture.clone());
            coin.set_position(position.x, position.y);
            coin.add_action(Action::forever(Action::sequence(vec![
                Action::fade_out(1.5),
                Action::fade_in(1.5),
            ])));
            coins.add(coin);
        }
        self.root.add(coins);

        self.map = Some(map);
        Ok(())
    }

    fn update(&mut self, input: &Input, dt: f32) {
        if input.back.just_pressed {
            self.quit = true;
        }

        if let Some(physics) = self.hero.physics.as_mut() {
            if input.right.active {
                physics.accelerate_at_angle(0.0);
            }
            if input.down.active {
                physics.accelerate_at_angle(90.0);
            }
            if input.left.active {
                physics.accelerate_at_angle(180.0);
            }
            if input.up.active {
                physics.accelerate_at_angle(270.0);
            }
        }
        self.hero.act(dt);
        if let Some(map) = &self.map {
            map.prevent_overlap(&mut self.hero);
        }
        self.hero.bound_to_screen(SCREEN_W, SCREEN_H);

        let hero = &self.hero;
        let mut picked = 0;
        if let Some(coins) = self.root.get_mut(0).and_then(Node::as_group_mut) {
            for i in 0..coins.len() {
                let Some(coin) = coins.get_mut(i).and_then(Node::as_sprite_mut) else {
                    continue;
                };
                if !coin.is_removed() && (hero.overlaps(coin) || input.is_clicked(coin)) {
                    coin.remove();
                    picked += 1;
                }
            }
        }
        self.coins += picked;
        self.coin_label.text = format!("Coins: {}", self.coins);
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
        self.coin_label.render(renderer);
    }

    fn should_quit(&self) -> bool {
        self.quit
    }
}
