//! # Roll Animation
//!
//! The scripted dice roll: a two-state machine (`AtRest`, `Rolling`) advanced
//! once per frame, plus the table of landing orientations.
//!
//! ## Usage
//!
//! ```
//! use dicebox::animation::{RollAnimator, RollConfig};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut animator = RollAnimator::new(RollConfig::default(), StdRng::seed_from_u64(7));
//! animator.request_roll(60.0, (800, 600));
//! while animator.is_rolling() {
//!     animator.tick(1.0 / 60.0);
//! }
//! println!("rolled a {:?}", animator.last_face());
//! ```

pub mod config;
pub mod landing;
pub mod roll;

// Re-export main types
pub use config::RollConfig;
pub use landing::{landing_angles, FACES};
pub use roll::{Axis, MovementSign, RollAnimator, RollPhase, RollState};
