//! Frame-tick integration tests for the scene tree: group traversal,
//! sprite actions, physics integration, and render order.

use tesserae::actions::Action;
use tesserae::animation::Animation;
use tesserae::math::rectangle::Rectangle;
use tesserae::render::Renderer;
use tesserae::stage::group::Group;
use tesserae::stage::label::{Label, TextAlign};
use tesserae::stage::node::Node;
use tesserae::stage::sprite::Sprite;
use tesserae::texture::Texture;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn tick(root: &mut Group, dt: f32, frames: usize) {
    for _ in 0..frames {
        root.update(dt);
    }
}

fn textured_sprite(key: &str, x: f32, y: f32) -> Sprite {
    let mut s = Sprite::new();
    s.set_texture(Texture::new(key, Rectangle::new(0.0, 0.0, 10.0, 10.0)));
    s.set_position(x, y);
    s
}

/// Renderer that records draw calls instead of touching a GPU.
#[derive(Default)]
struct RecordingRenderer {
    regions: Vec<(String, f32, f32)>,
    texts: Vec<String>,
    tiles: usize,
}

impl Renderer for RecordingRenderer {
    fn draw_region(
        &mut self,
        texture: &Texture,
        x: f32,
        y: f32,
        _width: f32,
        _height: f32,
        _angle: f32,
        _mirrored: bool,
        _flipped: bool,
        _opacity: f32,
    ) {
        self.regions.push((texture.key.clone(), x, y));
    }

    fn draw_tile(&mut self, _texture: &Texture, _x: f32, _y: f32, _width: f32, _height: f32) {
        self.tiles += 1;
    }

    fn draw_text(
        &mut self,
        text: &str,
        _x: f32,
        _y: f32,
        _font_size: i32,
        _color: [u8; 4],
        _align: TextAlign,
    ) {
        self.texts.push(text.to_string());
    }
}

// =============================================================================
// Action Lifecycle Tests
// =============================================================================

#[test]
fn delayed_remove_detaches_sprite_no_earlier_than_delay() {
    let mut root = Group::new();
    let mut s = Sprite::new();
    s.add_action(Action::sequence(vec![Action::delay(1.0), Action::remove()]));
    root.add(s);

    // 0.9 s elapsed, still present
    tick(&mut root, 0.3, 3);
    assert_eq!(root.len(), 1);

    // crosses 1.0 s: delay ends this frame, remove runs next frame
    tick(&mut root, 0.3, 2);
    assert_eq!(root.len(), 0);
}

#[test]
fn forever_action_never_finishes() {
    let mut root = Group::new();
    let mut s = Sprite::new();
    s.add_action(Action::forever(Action::delay(0.1)));
    root.add(s);

    tick(&mut root, 0.5, 100);

    let sprite = root.get(0).and_then(Node::as_sprite).unwrap();
    assert_eq!(sprite.action_count(), 1);
}

#[test]
fn repeated_move_accumulates_per_repetition() {
    let mut root = Group::new();
    let mut s = Sprite::new();
    s.add_action(Action::repeat(Action::move_by(10.0, 0.0, 1.0), 3));
    root.add(s);

    // exact frame boundaries: 3 repetitions of 1 s each
    tick(&mut root, 0.5, 8);

    let sprite = root.get(0).and_then(Node::as_sprite).unwrap();
    assert!(approx_eq(sprite.x, 30.0));
    assert_eq!(sprite.action_count(), 0);
}

#[test]
fn animation_finished_gates_following_action() {
    let mut root = Group::new();
    let mut s = Sprite::new();
    s.set_animation(Animation::from_grid("sheet", 40.0, 10.0, 1, 4, 0.25, false));
    s.add_action(Action::sequence(vec![
        Action::animation_finished(),
        Action::remove(),
    ]));
    root.add(s);

    tick(&mut root, 0.25, 3); // 0.75 s, animation still running
    assert_eq!(root.len(), 1);

    tick(&mut root, 0.25, 3); // past 1.0 s total, then remove fires
    assert_eq!(root.len(), 0);
}

// =============================================================================
// Physics-through-the-tree Tests
// =============================================================================

#[test]
fn accelerated_sprite_moves_through_group_update() {
    let mut root = Group::new();
    let mut s = Sprite::new();
    s.set_physics(100.0, 50.0, 0.0);
    s.add_action(Action::custom(|target, _dt, _elapsed| {
        if let Some(physics) = target.physics.as_mut() {
            physics.accelerate_at_angle(0.0);
        }
        false
    }));
    root.add(s);

    root.update(1.0);
    // thrust action ran after integration, so frame 1 only accumulates
    root.update(1.0);

    let sprite = root.get(0).and_then(Node::as_sprite).unwrap();
    let physics = sprite.physics.as_ref().unwrap();
    assert!(approx_eq(physics.speed(), 50.0));
    assert!(approx_eq(sprite.x, 50.0));
}

#[test]
fn platform_sprite_decays_horizontal_velocity_to_rest() {
    use tesserae::physics::Physics;

    let mut root = Group::new();
    let mut s = Sprite::new();
    s.physics = Some(Physics::platform(400.0, 100.0, 300.0, 450.0, 0.0, 700.0));
    s.physics.as_mut().unwrap().velocity.set_values(90.0, 0.0);
    root.add(s);

    let mut previous = 90.0;
    for _ in 0..30 {
        root.update(1.0 / 60.0);
        let sprite = root.get(0).and_then(Node::as_sprite).unwrap();
        let vx = sprite.physics.as_ref().unwrap().velocity.x;
        assert!(vx <= previous + EPSILON);
        previous = vx;
    }
    assert!(approx_eq(previous, 0.0));
}

// =============================================================================
// Traversal Safety Tests
// =============================================================================

#[test]
fn self_removal_does_not_skip_siblings() {
    let mut root = Group::new();

    let mut first = Sprite::new();
    first.set_position(100.0, 0.0);
    first.add_action(Action::remove());
    root.add(first);

    let mut second = Sprite::new();
    second.set_position(200.0, 0.0);
    second.add_action(Action::move_by(10.0, 0.0, 1.0));
    root.add(second);

    root.update(1.0);

    assert_eq!(root.len(), 1);
    let survivor = root.get(0).and_then(Node::as_sprite).unwrap();
    assert!(approx_eq(survivor.x, 210.0));
}

#[test]
fn nested_group_removal_is_swept_by_parent() {
    let mut root = Group::new();
    let mut inner = Group::new();
    inner.add(Sprite::new());
    root.add(inner);

    root.get_mut(0)
        .and_then(Node::as_group_mut)
        .unwrap()
        .remove();
    root.update(0.016);

    assert_eq!(root.len(), 0);
}

// =============================================================================
// Render Order Tests
// =============================================================================

#[test]
fn render_follows_insertion_order_and_skips_removed() {
    let mut root = Group::new();
    root.add(textured_sprite("background", 0.0, 0.0));
    root.add(textured_sprite("middle", 1.0, 0.0));
    root.add(textured_sprite("top", 2.0, 0.0));
    root.add(Label::new("score", 0.0, 0.0));

    root.get_mut(1).unwrap().remove();

    let mut renderer = RecordingRenderer::default();
    root.render(&mut renderer);

    let keys: Vec<&str> = renderer.regions.iter().map(|(k, _, _)| k.as_str()).collect();
    assert_eq!(keys, ["background", "top"]);
    assert_eq!(renderer.texts, ["score"]);
}

#[test]
fn invisible_and_textureless_sprites_draw_nothing() {
    let mut root = Group::new();
    let mut hidden = textured_sprite("hidden", 0.0, 0.0);
    hidden.visible = false;
    root.add(hidden);
    root.add(Sprite::new()); // no texture

    let mut renderer = RecordingRenderer::default();
    root.render(&mut renderer);

    assert!(renderer.regions.is_empty());
}
