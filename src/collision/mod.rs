//! Collision detection against static worlds.
//!
//! - [`World`]: scene description with solid rectangles
//! - [`detect_collision`]: body polygon vs. obstacles, first overlap wins
//! - [`CollisionRecord`]: result of a rejected move, with amount hysteresis

mod detect;
mod record;
mod world;

pub use detect::{Contact, contact_point, detect_collision};
pub use record::{AmountGenerator, CollisionRecord, amount_from_sample};
pub use world::{CAR_KIND, DEFAULT_OBSTACLE_KIND, RectObject, SolidRect, World, WorldObject};
