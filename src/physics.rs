//! Linear dynamics of particles and rigid bodies,
//! and the collision shapes that ride along with them.

pub mod particle;
pub use particle::{Dynamics, Particle};

pub mod rigidbody;
pub use rigidbody::{Pose, RigidBody};

pub mod collision;
pub use collision::{CollisionPrimitive, CollisionSphere, Shape};

pub mod firework;
pub use firework::{Firework, Lifetime};

pub mod ballistic;
pub use ballistic::{AmmoRound, ShotBounds, ShotType};

pub mod field;
pub use field::AccelerationField;

#[cfg(feature = "serde-types")]
pub mod params;
#[cfg(feature = "serde-types")]
pub use params::ParticleParams;

pub mod world;
pub use world::{BodyKey, ColliderKey, FireworkKey, StepReport, World};

/// Errors from building physics objects out of user-provided values.
///
/// Contract violations inside the simulation itself (zero mass, non-positive time steps)
/// are programmer errors and panic in debug builds instead.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum PhysicsError {
    #[error("No body with key {0:?} exists in the world")]
    BodyNotFound(BodyKey),
    #[error("Mass must be positive and finite, got {0}; leave it out for an immovable object")]
    InvalidMass(f64),
    #[error("Sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f64),
    #[error("Damping must be in (0, 1], got {0}")]
    InvalidDamping(f64),
    #[error("An unused round has no shape and can't be spawned")]
    UnusedRound,
}
