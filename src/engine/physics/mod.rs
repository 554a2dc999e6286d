// Physics system using rapier2d
//
// Fighters only ever see physics through the state machine's query and
// output traits; this module is the rapier-backed side of that boundary.

pub mod body;
mod collision;
mod world;

pub use body::{BodyBuilder, ColliderBuilder2D, ColliderHandle, RigidBodyHandle};
pub use collision::CollisionGroups;
pub use world::PhysicsWorld;

// Re-export commonly used rapier types for convenience
pub use rapier2d::prelude::{QueryFilter, Real, Vector};
