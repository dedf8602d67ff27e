//! Kinematic physics for sprites.
//!
//! [`Physics`] simulates position from velocity and acceleration. Two
//! models are available:
//! - [`PhysicsMode::TopDown`] – deceleration applies to total speed; suited
//!   to games viewed from above
//! - [`PhysicsMode::Platform`] – horizontal deceleration plus constant
//!   downward gravity bounded by a terminal velocity; suited to side-view
//!   platformers
//!
//! Acceleration is an accumulator: multiple [`Physics::accelerate_at_angle`]
//! calls within one frame sum (e.g. diagonal movement), and the accumulator
//! resets to zero at the end of every [`Physics::update`].

use crate::math::vector2::Vector2;

/// Threshold below which the acceleration accumulator counts as "no thrust"
/// and deceleration kicks in.
const THRUST_EPSILON: f32 = 1e-3;

/// Selects the physical model used by [`Physics::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhysicsMode {
    /// Deceleration shrinks total speed; `max_speed` bounds total speed.
    TopDown,
    /// Horizontal and vertical axes are simulated independently:
    /// deceleration and `max_speed` apply to the horizontal axis only,
    /// gravity accelerates downward every frame, and vertical speed is
    /// bounded by `terminal_velocity`.
    Platform {
        /// Initial upward speed when jumping.
        jump_speed: f32,
        /// Constant downward acceleration.
        gravity: f32,
        /// Maximum vertical speed.
        terminal_velocity: f32,
    },
}

/// Velocity/acceleration state for one object.
///
/// `position` is copied in from the owning sprite before [`Physics::update`]
/// and copied back out afterwards (see [`crate::stage::sprite::Sprite::act`]).
#[derive(Debug, Clone)]
pub struct Physics {
    /// Position of the object.
    pub position: Vector2,
    /// Velocity (rate of change of position).
    pub velocity: Vector2,
    /// Acceleration accumulator, cleared at the end of every update.
    pub acceleration: Vector2,
    /// Amount of acceleration added by [`Physics::accelerate_at_angle`].
    pub acceleration_magnitude: f32,
    /// Maximum speed (top-down: total; platform: horizontal).
    pub max_speed: f32,
    /// Rate of speed reduction applied when not accelerating.
    pub deceleration_magnitude: f32,
    mode: PhysicsMode,
}

impl Physics {
    /// Create a top-down physics object.
    ///
    /// For objects traveling at constant speed, set acceleration and
    /// deceleration to 0.
    pub fn top_down(acceleration: f32, max_speed: f32, deceleration: f32) -> Self {
        Self {
            position: Vector2::zero(),
            velocity: Vector2::zero(),
            acceleration: Vector2::zero(),
            acceleration_magnitude: acceleration,
            max_speed,
            deceleration_magnitude: deceleration,
            mode: PhysicsMode::TopDown,
        }
    }

    /// Create a platformer physics object.
    ///
    /// `acceleration`, `max_speed`, and `deceleration` describe horizontal
    /// (walk/run) movement. Suggested jump/gravity/terminal values:
    /// 450, 700, 1000.
    pub fn platform(
        acceleration: f32,
        max_speed: f32,
        deceleration: f32,
        jump_speed: f32,
        gravity: f32,
        terminal_velocity: f32,
    ) -> Self {
        Self {
            position: Vector2::zero(),
            velocity: Vector2::zero(),
            acceleration: Vector2::zero(),
            acceleration_magnitude: acceleration,
            max_speed,
            deceleration_magnitude: deceleration,
            mode: PhysicsMode::Platform {
                jump_speed,
                gravity,
                terminal_velocity,
            },
        }
    }

    /// The model this object simulates.
    pub fn mode(&self) -> PhysicsMode {
        self.mode
    }

    /// Current speed (magnitude of velocity).
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Set speed while preserving the current motion angle.
    pub fn set_speed(&mut self, speed: f32) {
        self.velocity.set_length(speed);
    }

    /// Angle of motion in degrees, measured from the x-axis.
    /// Returns 0 when the speed is 0.
    pub fn motion_angle(&self) -> f32 {
        self.velocity.angle()
    }

    /// Set the angle of motion. Has no effect when the speed is 0.
    pub fn set_motion_angle(&mut self, angle_degrees: f32) {
        self.velocity.set_angle(angle_degrees);
    }

    /// Change the angle of motion assuming a collision with a flat surface
    /// inclined at `surface_angle_degrees`. Speed is preserved.
    pub fn bounce_against(&mut self, surface_angle_degrees: f32) {
        let relative_collision_angle = self.motion_angle() - surface_angle_degrees;
        let relative_bounce_angle = -relative_collision_angle;
        self.set_motion_angle(relative_bounce_angle + surface_angle_degrees);
    }

    /// Accelerate in the direction `angle_degrees` by
    /// [`Physics::acceleration_magnitude`]. Calls within one frame sum.
    pub fn accelerate_at_angle(&mut self, angle_degrees: f32) {
        let mut v = Vector2::zero();
        v.set_length(self.acceleration_magnitude);
        v.set_angle(angle_degrees);
        self.acceleration.add_vector(v);
    }

    /// Set vertical velocity to the configured jump speed (an instantaneous
    /// impulse, not an acceleration). Ignored with a warning in top-down
    /// mode, which has no jump.
    pub fn jump(&mut self) {
        match self.mode {
            PhysicsMode::Platform { jump_speed, .. } => {
                self.velocity.y = -jump_speed;
            }
            PhysicsMode::TopDown => {
                log::warn!("Physics::jump called on a top-down physics object; ignored");
            }
        }
    }

    /// Advance the simulation by `dt` seconds: integrate acceleration into
    /// velocity, apply deceleration when not accelerating, clamp speed,
    /// integrate position, and clear the acceleration accumulator.
    pub fn update(&mut self, dt: f32) {
        match self.mode {
            PhysicsMode::TopDown => self.update_top_down(dt),
            PhysicsMode::Platform {
                gravity,
                terminal_velocity,
                ..
            } => self.update_platform(dt, gravity, terminal_velocity),
        }
    }

    fn update_top_down(&mut self, dt: f32) {
        self.velocity
            .add_values(self.acceleration.x * dt, self.acceleration.y * dt);

        let mut speed = self.speed();

        // decelerate when not accelerating
        if self.acceleration.length() < THRUST_EPSILON {
            speed -= self.deceleration_magnitude * dt;
        }

        speed = speed.clamp(0.0, self.max_speed);
        self.set_speed(speed);

        self.position
            .add_values(self.velocity.x * dt, self.velocity.y * dt);

        self.acceleration.set_values(0.0, 0.0);
    }

    fn update_platform(&mut self, dt: f32, gravity: f32, terminal_velocity: f32) {
        // Decelerate walk speed when no thrust is active this frame.
        // Checked before gravity is accumulated, so gravity alone never
        // suppresses deceleration.
        if self.acceleration.length() < THRUST_EPSILON {
            let walk_direction = if self.velocity.x > 0.0 { 1.0 } else { -1.0 };
            let walk_speed =
                (self.velocity.x.abs() - self.deceleration_magnitude * dt).max(0.0);
            self.velocity.x = walk_speed * walk_direction;
        }

        self.acceleration.add_values(0.0, gravity);

        self.velocity
            .add_values(self.acceleration.x * dt, self.acceleration.y * dt);

        // per-axis clamps: the axes follow different physical models
        self.velocity.x = self.velocity.x.clamp(-self.max_speed, self.max_speed);
        self.velocity.y = self
            .velocity
            .y
            .clamp(-terminal_velocity, terminal_velocity);

        self.position
            .add_values(self.velocity.x * dt, self.velocity.y * dt);

        self.acceleration.set_values(0.0, 0.0);
    }
}
