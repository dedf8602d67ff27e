//! Top-down collector: steer the turtle over every starfish.

use crate::actions::Action;
use crate::game::{Scene, SetupContext};
use crate::input::Input;
use crate::render::Renderer;
use crate::stage::group::Group;
use crate::stage::label::{Label, TextAlign};
use crate::stage::node::Node;
use crate::stage::sprite::Sprite;

const SCREEN_W: f32 = 800.0;
const SCREEN_H: f32 = 600.0;
const STARFISH_COUNT: usize = 12;

// root tree layout
const BACKGROUND: usize = 0;
const STARFISH: usize = 1;

pub struct StarfishScene {
    root: Group,
    hero: Sprite,
    score_label: Label,
    collected: usize,
    quit: bool,
}

impl StarfishScene {
    pub fn new() -> Self {
        Self {
            root: Group::new(),
            hero: Sprite::new(),
            score_label: Label::new("Starfish left: ?", SCREEN_W / 2.0, 10.0)
                .with_align(TextAlign::Center),
            collected: 0,
            quit: false,
        }
    }

}

impl Default for StarfishScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for StarfishScene {
    fn setup(&mut self, ctx: &mut SetupContext) -> Result<(), String> {
        ctx.textures
            .load(ctx.rl, ctx.thread, "water", "assets/images/water.png")?;
        ctx.textures
            .load(ctx.rl, ctx.thread, "turtle", "assets/images/turtle.png")?;
        ctx.textures
            .load(ctx.rl, ctx.thread, "starfish", "assets/images/starfish.png")?;

        let mut background = Sprite::new();
        background.set_texture(ctx.textures.full_region("water")?);
        background.set_position(SCREEN_W / 2.0, SCREEN_H / 2.0);
        background.set_size(SCREEN_W, SCREEN_H);
        self.root.add(background);
        debug_assert_eq!(self.root.len() - 1, BACKGROUND);

        let mut starfish = Group::new();
        let starfish_texture = ctx.textures.full_region("starfish")?;
        for _ in 0..STARFISH_COUNT {
            let mut s = Sprite::new();
            s.set_texture(starfish_texture.clone());
            s.set_position(
                60.0 + fastrand::f32() * (SCREEN_W - 120.0),
                60.0 + fastrand::f32() * (SCREEN_H - 120.0),
            );
            s.add_action(Action::forever(Action::rotate_by(360.0, 8.0)));
            starfish.add(s);
        }
        self.root.add(starfish);

        self.hero.set_texture(ctx.textures.full_region("turtle")?);
        self.hero.set_position(SCREEN_W / 2.0, SCREEN_H / 2.0);
        self.hero.set_physics(400.0, 120.0, 400.0);

        self.score_label.text = format!("Starfish left: {STARFISH_COUNT}");
        Ok(())
    }

    fn update(&mut self, input: &Input, dt: f32) {
        if input.back.just_pressed {
            self.quit = true;
        }

        // y grows downward, so up is 270 degrees
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
        self.hero.bound_to_screen(SCREEN_W, SCREEN_H);
        if self.hero.physics.as_ref().is_some_and(|p| p.speed() > 1.0) {
            self.hero.angle = self.hero.physics.as_ref().map_or(0.0, |p| p.motion_angle());
        }

        let hero = &self.hero;
        let mut collected = 0;
        if let Some(starfish) = self.root.get_mut(STARFISH).and_then(Node::as_group_mut) {
            for i in 0..starfish.len() {
                let Some(s) = starfish.get_mut(i).and_then(Node::as_sprite_mut) else {
                    continue;
                };
                if !s.is_removed() && hero.overlaps(s) {
                    s.remove();
                    collected += 1;
                }
            }
        }
        self.collected += collected;

        let remaining = STARFISH_COUNT - self.collected;
        self.score_label.text = if remaining == 0 {
            "You win!".to_string()
        } else {
            format!("Starfish left: {remaining}")
        };
    }

    fn root(&self) -> &Group {
        &self.root
    }

    fn root_mut(&mut self) -> &mut Group {
        &mut self.root
    }

    fn render_over(&self, renderer: &mut dyn Renderer) {
        self.hero.render(renderer);
        self.score_label.render(renderer);
    }

    fn should_quit(&self) -> bool {
        self.quit
    }
}
