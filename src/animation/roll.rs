//! The dice roll state machine
//!
//! A roll is a scripted animation, not a physics simulation. While rolling,
//! the die spins around one randomly chosen axis and drifts across the view,
//! bouncing off the edges. After a random number of frames it lands on a
//! random face, snapping to that face's tabulated orientation.

use std::f32::consts::TAU;

use cgmath::{Deg, Rad, Vector2, Vector3, Zero};
use log::debug;
use rand::{rngs::StdRng, Rng};

use super::{config::RollConfig, landing};

/// Whether the die is currently animating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollPhase {
    AtRest,
    Rolling,
}

/// Rotation axis of the die
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index into a `Vector3`
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Direction of travel per axis, `true` for positive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementSign {
    pub x: bool,
    pub y: bool,
}

/// Complete animation state of the die
#[derive(Debug, Clone, PartialEq)]
pub struct RollState {
    pub phase: RollPhase,
    pub frames_elapsed: u32,
    pub max_frames: u32,
    /// Rotation per axis, radians in `[0, 2π)`
    pub angle: Vector3<f32>,
    /// Radians per second, per axis
    pub angular_velocity: Vector3<f32>,
    /// Axis spinning during the current roll
    pub active_axis: Option<Axis>,
    pub translation: Vector2<f32>,
    /// Units per second, per axis (always non-negative)
    pub directional_velocity: Vector2<f32>,
    pub movement_sign: MovementSign,
    /// Face shown after the most recent landing
    pub last_face: Option<u8>,
}

impl RollState {
    fn new(config: &RollConfig) -> Self {
        let [x, y, z] = config.initial_angle_deg;
        Self {
            phase: RollPhase::AtRest,
            frames_elapsed: 0,
            max_frames: 0,
            angle: Vector3::new(
                Rad::from(Deg(x)).0,
                Rad::from(Deg(y)).0,
                Rad::from(Deg(z)).0,
            ),
            angular_velocity: Vector3::zero(),
            active_axis: None,
            translation: Vector2::zero(),
            directional_velocity: Vector2::zero(),
            movement_sign: MovementSign { x: true, y: true },
            last_face: None,
        }
    }
}

/// Drives the roll animation from frame ticks and roll requests
///
/// Owns its random source; seed it once and keep it for the life of the
/// animator so consecutive rolls stay independent.
pub struct RollAnimator<R: Rng = StdRng> {
    config: RollConfig,
    state: RollState,
    rng: R,
    frame_rate: f32,
    viewport: (u32, u32),
}

impl<R: Rng> RollAnimator<R> {
    /// Creates an animator resting on a random face at a random position
    ///
    /// # Panics
    /// Panics if `config` is invalid, see [`RollConfig::assert_valid`].
    pub fn new(config: RollConfig, rng: R) -> Self {
        config.assert_valid();

        let mut animator = Self {
            state: RollState::new(&config),
            frame_rate: config.nominal_frame_rate,
            viewport: (0, 0),
            config,
            rng,
        };

        let limit = animator.config.bounce_limit;
        animator.state.translation = Vector2::new(
            animator.rng.random_range(-limit..=limit),
            animator.rng.random_range(-limit..=limit),
        );
        animator.land();
        animator
    }

    pub fn state(&self) -> &RollState {
        &self.state
    }

    pub fn config(&self) -> &RollConfig {
        &self.config
    }

    /// Current rotation in radians
    pub fn angle(&self) -> Vector3<f32> {
        self.state.angle
    }

    pub fn translation(&self) -> Vector2<f32> {
        self.state.translation
    }

    pub fn is_rolling(&self) -> bool {
        self.state.phase == RollPhase::Rolling
    }

    pub fn last_face(&self) -> Option<u8> {
        self.state.last_face
    }

    /// Updates the viewport used to scale drift speeds
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
    }

    /// Starts a roll. Ignored while a roll is already in progress.
    ///
    /// `frame_rate` sizes the roll duration and spin speed; non-finite or
    /// sub-1 values fall back to the configured nominal rate, and faster
    /// rates are capped at `RollConfig::max_frame_rate`. `viewport` scales
    /// the drift speed.
    ///
    /// Returns whether a new roll started.
    pub fn request_roll(&mut self, frame_rate: f32, viewport: (u32, u32)) -> bool {
        if self.is_rolling() {
            return false;
        }

        self.frame_rate = if frame_rate.is_finite() && frame_rate >= 1.0 {
            frame_rate.min(self.config.max_frame_rate)
        } else {
            self.config.nominal_frame_rate
        };
        self.viewport = viewport;

        self.randomize_duration();
        self.randomize_spin();
        self.randomize_drift();
        self.state.frames_elapsed = 0;
        self.state.phase = RollPhase::Rolling;

        debug!(
            "Roll started: {} frames, axis {:?}, drift {:?}",
            self.state.max_frames, self.state.active_axis, self.state.directional_velocity
        );
        true
    }

    /// Advances the animation by one frame.
    ///
    /// Returns the face the die landed on if this frame ended the roll.
    pub fn tick(&mut self, delta_time: f32) -> Option<u8> {
        if !self.is_rolling() {
            return None;
        }

        self.bounce_and_move(delta_time);

        if let Some(axis) = self.state.active_axis {
            let i = axis.index();
            self.state.angle[i] =
                wrap_angle(self.state.angle[i] + self.state.angular_velocity[i] * delta_time);
        }

        self.state.frames_elapsed += 1;
        if self.state.frames_elapsed > self.state.max_frames {
            return Some(self.land());
        }
        None
    }

    fn bounce_and_move(&mut self, delta_time: f32) {
        let limit = self.config.bounce_limit;
        let translation = self.state.translation;
        let sign = &mut self.state.movement_sign;

        let bounce_x = (translation.x >= limit && sign.x) || (translation.x <= -limit && !sign.x);
        let bounce_y = (translation.y >= limit && sign.y) || (translation.y <= -limit && !sign.y);
        if bounce_x {
            sign.x = !sign.x;
        }
        if bounce_y {
            sign.y = !sign.y;
        }

        // New speeds on every bounce keep successive rolls looking different
        if bounce_x || bounce_y {
            self.randomize_spin();
            self.randomize_drift();
        }

        let sign = self.state.movement_sign;
        let velocity = self.state.directional_velocity;
        self.state.translation.x += signum(sign.x) * velocity.x * delta_time;
        self.state.translation.y += signum(sign.y) * velocity.y * delta_time;
    }

    fn randomize_duration(&mut self) {
        let fps = self.frame_rate as u32;
        let min = fps.saturating_mul(self.config.min_roll_seconds);
        let max = fps.saturating_mul(self.config.max_roll_seconds);
        self.state.max_frames = self.rng.random_range(min..=max);
    }

    /// Picks one axis to spin and a fresh speed for every axis
    fn randomize_spin(&mut self) {
        let axis = Axis::ALL[self.rng.random_range(0..Axis::ALL.len())];
        self.state.active_axis = Some(axis);

        let min = self.frame_rate * self.config.min_spin_factor;
        let max = self.frame_rate * self.config.max_spin_factor;
        let mut speed = || Rad::from(Deg(self.rng.random_range(min..=max))).0;
        self.state.angular_velocity = Vector3::new(speed(), speed(), speed());
    }

    fn randomize_drift(&mut self) {
        let (width, height) = self.viewport;
        let min = self.config.min_drift_factor;
        let max = self.config.max_drift_factor;
        self.state.directional_velocity = Vector2::new(
            self.rng.random_range(min..=max) * width as f32,
            self.rng.random_range(min..=max) * height as f32,
        );
    }

    /// Ends the roll on a random face and returns it
    fn land(&mut self) -> u8 {
        let face = self.rng.random_range(landing::FACES);
        // Every face in FACES has a table entry
        if let Some((x, y)) = landing::landing_angles(face) {
            self.state.angle.x = x.0;
            self.state.angle.y = y.0;
        }

        self.state.phase = RollPhase::AtRest;
        self.state.frames_elapsed = 0;
        self.state.active_axis = None;
        self.state.last_face = Some(face);

        debug!("Landed on face {}", face);
        face
    }
}

fn signum(positive: bool) -> f32 {
    if positive {
        1.0
    } else {
        -1.0
    }
}

/// Wraps an angle into `[0, 2π)`
fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}
