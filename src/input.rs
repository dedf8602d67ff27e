//! Per-frame keyboard and mouse snapshot.
//!
//! [`Input::poll`] reads hardware state from raylib once per frame; game
//! logic then queries the snapshot and never touches raylib directly.
//! Defaults use WASD for primary movement and arrow keys for secondary
//! directions.

use raylib::prelude::*;

use crate::math::vector2;
use crate::stage::sprite::Sprite;

/// Boolean key state with an associated keyboard binding.
#[derive(Debug, Clone, Copy)]
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: KeyboardKey::KEY_NULL,
        }
    }
}

impl BoolState {
    fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            key_binding,
            ..Self::default()
        }
    }

    fn poll(&mut self, rl: &RaylibHandle) {
        self.active = rl.is_key_down(self.key_binding);
        self.just_pressed = rl.is_key_pressed(self.key_binding);
        self.just_released = rl.is_key_released(self.key_binding);
    }
}

/// Boolean button state for one mouse button.
#[derive(Debug, Clone, Copy)]
pub struct MouseState {
    pub active: bool,
    pub just_pressed: bool,
    pub just_released: bool,
    pub button_binding: MouseButton,
}

impl Default for MouseState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            button_binding: MouseButton::MOUSE_BUTTON_LEFT,
        }
    }
}

impl MouseState {
    fn poll(&mut self, rl: &RaylibHandle) {
        self.active = rl.is_mouse_button_down(self.button_binding);
        self.just_pressed = rl.is_mouse_button_pressed(self.button_binding);
        self.just_released = rl.is_mouse_button_released(self.button_binding);
    }
}

/// The per-frame input snapshot game logic reads from.
///
/// Fields are grouped by purpose: main movement (WASD), secondary
/// directions (arrow keys), action keys, and the left mouse button.
#[derive(Debug, Clone)]
pub struct Input {
    pub up: BoolState,
    pub left: BoolState,
    pub down: BoolState,
    pub right: BoolState,
    // Arrow keys
    pub arrow_up: BoolState,
    pub arrow_down: BoolState,
    pub arrow_left: BoolState,
    pub arrow_right: BoolState,
    // Action keys
    pub back: BoolState,
    pub space: BoolState,
    pub enter: BoolState,
    // Mouse
    pub mouse_left: MouseState,
    pub mouse_position: vector2::Vector2,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            up: BoolState::bound_to(KeyboardKey::KEY_W),
            left: BoolState::bound_to(KeyboardKey::KEY_A),
            down: BoolState::bound_to(KeyboardKey::KEY_S),
            right: BoolState::bound_to(KeyboardKey::KEY_D),
            arrow_up: BoolState::bound_to(KeyboardKey::KEY_UP),
            arrow_down: BoolState::bound_to(KeyboardKey::KEY_DOWN),
            arrow_left: BoolState::bound_to(KeyboardKey::KEY_LEFT),
            arrow_right: BoolState::bound_to(KeyboardKey::KEY_RIGHT),
            back: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
            space: BoolState::bound_to(KeyboardKey::KEY_SPACE),
            enter: BoolState::bound_to(KeyboardKey::KEY_ENTER),
            mouse_left: MouseState::default(),
            mouse_position: vector2::Vector2::zero(),
        }
    }
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the hardware state for this frame.
    pub fn poll(&mut self, rl: &RaylibHandle) {
        self.up.poll(rl);
        self.left.poll(rl);
        self.down.poll(rl);
        self.right.poll(rl);
        self.arrow_up.poll(rl);
        self.arrow_down.poll(rl);
        self.arrow_left.poll(rl);
        self.arrow_right.poll(rl);
        self.back.poll(rl);
        self.space.poll(rl);
        self.enter.poll(rl);
        self.mouse_left.poll(rl);
        let mouse = rl.get_mouse_position();
        self.mouse_position.set_values(mouse.x, mouse.y);
    }

    /// Whether the left mouse button was just pressed inside the sprite's
    /// boundary.
    pub fn is_clicked(&self, sprite: &Sprite) -> bool {
        self.mouse_left.just_pressed
            && sprite
                .boundary()
                .contains(self.mouse_position.x, self.mouse_position.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert!(!bs.just_pressed);
        assert!(!bs.just_released);
        assert_eq!(bs.key_binding, KeyboardKey::KEY_NULL);
    }

    #[test]
    fn test_input_default_all_inactive() {
        let input = Input::default();
        assert!(!input.up.active);
        assert!(!input.down.active);
        assert!(!input.left.active);
        assert!(!input.right.active);
        assert!(!input.space.just_pressed);
        assert!(!input.mouse_left.active);
    }

    #[test]
    fn test_input_default_key_bindings() {
        let input = Input::default();
        assert_eq!(input.up.key_binding, KeyboardKey::KEY_W);
        assert_eq!(input.left.key_binding, KeyboardKey::KEY_A);
        assert_eq!(input.down.key_binding, KeyboardKey::KEY_S);
        assert_eq!(input.right.key_binding, KeyboardKey::KEY_D);
        assert_eq!(input.arrow_up.key_binding, KeyboardKey::KEY_UP);
        assert_eq!(input.back.key_binding, KeyboardKey::KEY_ESCAPE);
        assert_eq!(input.space.key_binding, KeyboardKey::KEY_SPACE);
        assert_eq!(input.enter.key_binding, KeyboardKey::KEY_ENTER);
    }

    #[test]
    fn test_is_clicked_requires_press_inside_boundary() {
        let mut input = Input::default();
        let mut sprite = Sprite::new();
        sprite.set_size(10.0, 10.0);
        sprite.set_position(50.0, 50.0);

        input.mouse_position.set_values(50.0, 50.0);
        assert!(!input.is_clicked(&sprite)); // no press

        input.mouse_left.just_pressed = true;
        assert!(input.is_clicked(&sprite));

        input.mouse_position.set_values(100.0, 100.0);
        assert!(!input.is_clicked(&sprite)); // press outside
    }
}
