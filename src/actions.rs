//! Time-driven behaviors attached to sprites.
//!
//! An [`Action`] is applied to its target sprite once per frame until it
//! reports completion, at which point the sprite drops it. Actions attached
//! to a sprite run in parallel; only [`Action::sequence`] imposes ordering,
//! and only among the actions grouped inside it.
//!
//! Constructors cover the common behaviors (movement, rotation, fading,
//! delays, screen bounds) and the combinators [`Action::sequence`],
//! [`Action::repeat`], and [`Action::forever`]. Custom behaviors use
//! [`Action::custom`] with a closure:
//!
//! ```ignore
//! let teleport_right = Action::custom(|target, _dt, _elapsed| {
//!     target.move_by(100.0, 0.0);
//!     true
//! });
//! sprite.add_action(teleport_right);
//! ```

use crate::stage::sprite::Sprite;

/// Closure form of a custom per-frame behavior: `(target, dt, elapsed)`,
/// returning true once the behavior has completed.
pub type ActionFn = Box<dyn FnMut(&mut Sprite, f32, f32) -> bool>;

enum Behavior {
    MoveBy {
        dx: f32,
        dy: f32,
        duration: f32,
    },
    RotateBy {
        delta_angle: f32,
        duration: f32,
    },
    FadeOut {
        rate: f32,
    },
    FadeIn {
        rate: f32,
    },
    Delay {
        duration: f32,
    },
    Remove,
    AnimationFinished,
    BoundToScreen {
        width: f32,
        height: f32,
    },
    WrapToScreen {
        width: f32,
        height: f32,
    },
    DestroyOutsideScreen {
        width: f32,
        height: f32,
    },
    Sequence {
        children: Vec<Action>,
        index: usize,
    },
    Repeat {
        child: Box<Action>,
        total: u32,
        completed: u32,
    },
    Forever {
        child: Box<Action>,
    },
    Custom(ActionFn),
}

/// A unit of time-driven behavior applied to a sprite each frame.
///
/// Tracks the total time elapsed since it started; combinators own their
/// child actions and delegate elapsed-time tracking and reset to them.
pub struct Action {
    elapsed: f32,
    behavior: Behavior,
}

impl Action {
    fn from_behavior(behavior: Behavior) -> Self {
        Self {
            elapsed: 0.0,
            behavior,
        }
    }

    /// Move the target by a fixed amount over a period of time.
    /// Complete once `duration` has elapsed.
    ///
    /// Movement is applied per frame as `(dx / duration) * dt`; overshoot
    /// past `duration` on the final frame is not compensated, so the total
    /// displacement can slightly exceed `(dx, dy)` under uneven frame
    /// deltas.
    pub fn move_by(dx: f32, dy: f32, duration: f32) -> Self {
        Self::from_behavior(Behavior::MoveBy { dx, dy, duration })
    }

    /// Rotate the target by a fixed angle over a period of time.
    /// Complete once `duration` has elapsed. Overshoot on the final frame
    /// is not compensated, as with [`Action::move_by`].
    pub fn rotate_by(delta_angle: f32, duration: f32) -> Self {
        Self::from_behavior(Behavior::RotateBy {
            delta_angle,
            duration,
        })
    }

    /// Reduce the target's opacity by `rate` per second, clamped at 0.
    /// Complete once opacity reaches 0.
    ///
    /// To remove a sprite once it has faded out, use
    /// `Action::sequence(vec![Action::fade_out(rate), Action::remove()])`.
    pub fn fade_out(rate: f32) -> Self {
        Self::from_behavior(Behavior::FadeOut { rate })
    }

    /// Increase the target's opacity by `rate` per second, clamped at 1.
    /// Complete once opacity reaches 1.
    pub fn fade_in(rate: f32) -> Self {
        Self::from_behavior(Behavior::FadeIn { rate })
    }

    /// Wait for `duration` seconds. Typically used inside
    /// [`Action::sequence`].
    pub fn delay(duration: f32) -> Self {
        Self::from_behavior(Behavior::Delay { duration })
    }

    /// Remove the target from the group that contains it.
    /// Complete immediately.
    pub fn remove() -> Self {
        Self::from_behavior(Behavior::Remove)
    }

    /// Wait until the target's animation reports finished. A target with
    /// no animation counts as finished. Useful with [`Action::sequence`]
    /// and [`Action::remove`] to drop a sprite after its animation plays.
    pub fn animation_finished() -> Self {
        Self::from_behavior(Behavior::AnimationFinished)
    }

    /// Keep the target entirely within the screen by clamping its position
    /// every frame. Never completes.
    pub fn bound_to_screen(width: f32, height: f32) -> Self {
        Self::from_behavior(Behavior::BoundToScreen { width, height })
    }

    /// When the target moves completely past one screen edge, reappear at
    /// the opposite edge. Never completes.
    pub fn wrap_to_screen(width: f32, height: f32) -> Self {
        Self::from_behavior(Behavior::WrapToScreen { width, height })
    }

    /// Remove the target the first frame no part of it remains on screen.
    /// Complete once the target has been removed.
    pub fn destroy_outside_screen(width: f32, height: f32) -> Self {
        Self::from_behavior(Behavior::DestroyOutsideScreen { width, height })
    }

    /// Perform `children` one at a time, each starting only after all
    /// previous ones have completed. Complete once the last child is.
    pub fn sequence(children: Vec<Action>) -> Self {
        Self::from_behavior(Behavior::Sequence { children, index: 0 })
    }

    /// Repeat `child` a fixed number of times, resetting it after each
    /// completion. Complete once it has finished `total` times.
    pub fn repeat(child: Action, total: u32) -> Self {
        Self::from_behavior(Behavior::Repeat {
            child: Box::new(child),
            total,
            completed: 0,
        })
    }

    /// Repeat `child` forever, resetting it each time it finishes.
    /// Never completes.
    pub fn forever(child: Action) -> Self {
        Self::from_behavior(Behavior::Forever {
            child: Box::new(child),
        })
    }

    /// Wrap a closure as an action. The closure receives the target, the
    /// frame delta, and the total elapsed time, and returns true once
    /// complete.
    pub fn custom(f: impl FnMut(&mut Sprite, f32, f32) -> bool + 'static) -> Self {
        Self::from_behavior(Behavior::Custom(Box::new(f)))
    }

    /// Total time this action has been running.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Advance this action by `dt` and apply it to `target`.
    ///
    /// Returns true if the action has completed; callers drop the action
    /// on the first true. Completed actions left in place keep returning
    /// true.
    pub fn apply(&mut self, target: &mut Sprite, dt: f32) -> bool {
        self.elapsed += dt;
        let elapsed = self.elapsed;
        match &mut self.behavior {
            Behavior::MoveBy { dx, dy, duration } => {
                target.move_by(*dx / *duration * dt, *dy / *duration * dt);
                elapsed >= *duration
            }
            Behavior::RotateBy {
                delta_angle,
                duration,
            } => {
                target.rotate_by(*delta_angle / *duration * dt);
                elapsed >= *duration
            }
            Behavior::FadeOut { rate } => {
                target.opacity = (target.opacity - *rate * dt).max(0.0);
                target.opacity <= 0.0
            }
            Behavior::FadeIn { rate } => {
                target.opacity = (target.opacity + *rate * dt).min(1.0);
                target.opacity >= 1.0
            }
            Behavior::Delay { duration } => elapsed >= *duration,
            Behavior::Remove => {
                target.remove();
                true
            }
            Behavior::AnimationFinished => target
                .animation()
                .map_or(true, |anim| anim.is_finished()),
            Behavior::BoundToScreen { width, height } => {
                target.bound_to_screen(*width, *height);
                false
            }
            Behavior::WrapToScreen { width, height } => {
                target.wrap_to_screen(*width, *height);
                false
            }
            Behavior::DestroyOutsideScreen { width, height } => {
                if !target.is_on_screen(*width, *height) {
                    target.remove();
                    true
                } else {
                    false
                }
            }
            Behavior::Sequence { children, index } => {
                if let Some(current) = children.get_mut(*index) {
                    if current.apply(target, dt) {
                        *index += 1;
                    }
                }
                *index == children.len()
            }
            Behavior::Repeat {
                child,
                total,
                completed,
            } => {
                if child.apply(target, dt) {
                    *completed += 1;
                    child.reset();
                }
                completed == total
            }
            Behavior::Forever { child } => {
                if child.apply(target, dt) {
                    child.reset();
                }
                false
            }
            Behavior::Custom(f) => f(target, dt, elapsed),
        }
    }

    /// Restart this action: zero the elapsed time and recursively reset any
    /// child actions, sequence positions, and repeat counters.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        match &mut self.behavior {
            Behavior::Sequence { children, index } => {
                for child in children.iter_mut() {
                    child.reset();
                }
                *index = 0;
            }
            Behavior::Repeat {
                child, completed, ..
            } => {
                child.reset();
                *completed = 0;
            }
            Behavior::Forever { child } => child.reset(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::sprite::Sprite;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn sprite() -> Sprite {
        let mut s = Sprite::new();
        s.set_size(10.0, 10.0);
        s
    }

    // ==================== LEAF ACTION TESTS ====================

    #[test]
    fn test_move_by_interpolates_linearly() {
        let mut s = sprite();
        let mut a = Action::move_by(100.0, 50.0, 2.0);
        assert!(!a.apply(&mut s, 1.0));
        assert!(approx_eq(s.x, 50.0));
        assert!(approx_eq(s.y, 25.0));
        assert!(a.apply(&mut s, 1.0));
        assert!(approx_eq(s.x, 100.0));
        assert!(approx_eq(s.y, 50.0));
    }

    #[test]
    fn test_move_by_overshoot_not_compensated() {
        let mut s = sprite();
        let mut a = Action::move_by(100.0, 0.0, 1.0);
        assert!(!a.apply(&mut s, 0.75));
        assert!(a.apply(&mut s, 0.75));
        // 1.5 seconds of movement at 100/s: 150, not clamped to 100
        assert!(approx_eq(s.x, 150.0));
    }

    #[test]
    fn test_rotate_by() {
        let mut s = sprite();
        let mut a = Action::rotate_by(90.0, 1.0);
        assert!(!a.apply(&mut s, 0.5));
        assert!(approx_eq(s.angle, 45.0));
        assert!(a.apply(&mut s, 0.5));
        assert!(approx_eq(s.angle, 90.0));
    }

    #[test]
    fn test_fade_out_clamps_and_finishes() {
        let mut s = sprite();
        let mut a = Action::fade_out(0.5);
        assert!(!a.apply(&mut s, 1.0));
        assert!(approx_eq(s.opacity, 0.5));
        assert!(a.apply(&mut s, 1.0));
        assert!(approx_eq(s.opacity, 0.0));
        // keeps reporting finished and stays clamped
        assert!(a.apply(&mut s, 1.0));
        assert!(approx_eq(s.opacity, 0.0));
    }

    #[test]
    fn test_fade_in_clamps_at_one() {
        let mut s = sprite();
        s.opacity = 0.0;
        let mut a = Action::fade_in(0.6);
        assert!(!a.apply(&mut s, 1.0));
        assert!(approx_eq(s.opacity, 0.6));
        assert!(a.apply(&mut s, 1.0));
        assert!(approx_eq(s.opacity, 1.0));
    }

    #[test]
    fn test_delay_completes_at_duration() {
        let mut s = sprite();
        let mut a = Action::delay(1.0);
        assert!(!a.apply(&mut s, 0.4));
        assert!(!a.apply(&mut s, 0.4));
        assert!(a.apply(&mut s, 0.4));
    }

    #[test]
    fn test_remove_marks_target_and_completes_immediately() {
        let mut s = sprite();
        let mut a = Action::remove();
        assert!(a.apply(&mut s, 0.016));
        assert!(s.is_removed());
    }

    #[test]
    fn test_destroy_outside_screen() {
        let mut s = sprite();
        s.set_position(400.0, 300.0);
        let mut a = Action::destroy_outside_screen(800.0, 600.0);
        assert!(!a.apply(&mut s, 0.016));
        assert!(!s.is_removed());
        s.set_position(-100.0, 300.0);
        assert!(a.apply(&mut s, 0.016));
        assert!(s.is_removed());
    }

    #[test]
    fn test_bound_to_screen_never_completes() {
        let mut s = sprite();
        s.set_position(-50.0, -50.0);
        let mut a = Action::bound_to_screen(800.0, 600.0);
        assert!(!a.apply(&mut s, 0.016));
        assert!(approx_eq(s.x, 5.0));
        assert!(approx_eq(s.y, 5.0));
    }

    // ==================== COMBINATOR TESTS ====================

    #[test]
    fn test_sequence_runs_children_in_order() {
        let mut s = sprite();
        let mut a = Action::sequence(vec![
            Action::move_by(10.0, 0.0, 1.0),
            Action::move_by(0.0, 10.0, 1.0),
        ]);
        assert!(!a.apply(&mut s, 1.0));
        assert!(approx_eq(s.x, 10.0));
        assert!(approx_eq(s.y, 0.0));
        assert!(a.apply(&mut s, 1.0));
        assert!(approx_eq(s.y, 10.0));
    }

    #[test]
    fn test_sequence_delay_then_remove() {
        let mut s = sprite();
        let mut a = Action::sequence(vec![Action::delay(1.0), Action::remove()]);
        let mut frames = 0;
        let mut elapsed = 0.0;
        while !a.apply(&mut s, 0.3) {
            elapsed += 0.3;
            frames += 1;
            assert!(frames < 100);
        }
        // not removed before a full second had passed
        assert!(elapsed + 0.3 >= 1.0);
        assert!(s.is_removed());
    }

    #[test]
    fn test_repeat_counts_completions() {
        let mut s = sprite();
        let mut a = Action::repeat(Action::move_by(10.0, 0.0, 1.0), 3);
        assert!(!a.apply(&mut s, 1.0));
        assert!(!a.apply(&mut s, 1.0));
        assert!(a.apply(&mut s, 1.0));
        assert!(approx_eq(s.x, 30.0));
    }

    #[test]
    fn test_forever_never_finishes() {
        let mut s = sprite();
        let mut a = Action::forever(Action::delay(0.1));
        for _ in 0..1000 {
            assert!(!a.apply(&mut s, 0.5));
        }
    }

    #[test]
    fn test_reset_restarts_sequence() {
        let mut s = sprite();
        let mut a = Action::sequence(vec![Action::delay(1.0), Action::delay(1.0)]);
        assert!(!a.apply(&mut s, 1.0));
        a.reset();
        // after reset the full two seconds are required again
        assert!(!a.apply(&mut s, 1.0));
        assert!(a.apply(&mut s, 1.0));
    }

    #[test]
    fn test_reset_restarts_repeat_counter() {
        let mut s = sprite();
        let mut a = Action::repeat(Action::delay(1.0), 2);
        assert!(!a.apply(&mut s, 1.0));
        a.reset();
        assert!(!a.apply(&mut s, 1.0));
        assert!(a.apply(&mut s, 1.0));
    }

    #[test]
    fn test_custom_action_closure() {
        let mut s = sprite();
        let mut a = Action::custom(|target, _dt, elapsed| {
            target.move_by(1.0, 0.0);
            elapsed >= 0.5
        });
        assert!(!a.apply(&mut s, 0.3));
        assert!(a.apply(&mut s, 0.3));
        assert!(approx_eq(s.x, 2.0));
    }

    #[test]
    fn test_elapsed_accumulates() {
        let mut s = sprite();
        let mut a = Action::delay(10.0);
        a.apply(&mut s, 0.25);
        a.apply(&mut s, 0.50);
        assert!(approx_eq(a.elapsed(), 0.75));
    }
}
