//! The domain module encapsulates the simulation core. It defines the bodies of the arena, the
//! `World` holding them, and the rules governing their interactions: kinematics, collision
//! classification and reward.
//!
//! The module has no dependency on a game engine, so the same rules drive training runs and the
//! interactive visualization.

mod basis;
mod classifier;
mod collision;
pub mod physics;
mod reward;
mod world;

pub use basis::{Angle, Position, Vector, Velocity};
pub use classifier::{classify, Status};
pub use collision::{circles_overlap, segment_circle_overlap, HasCollision, LineSegment, Shape};
pub use reward::reward;
pub use world::{Body, BodyKind, Layout, Wall, World, FIXED_OBSTACLE_POSITIONS};
