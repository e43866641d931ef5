//! Dynamics core for small real-time physics simulations:
//! point masses integrated with semi-implicit Euler, rigid body poses,
//! and collision shapes whose world transforms follow their bodies.
//!
//! A typical loop calls [`World::step`] once per frame, then hands
//! [`World::colliders`] to an intersection library and
//! [`RigidBody::world_render_transform`] to a renderer.

// profiling spans, compiled out without the `tracy` feature
#[cfg(feature = "tracy")]
macro_rules! tracy_span {
    ($name:literal, $fn_name:literal) => {
        tracy_client::Client::running()
            .map(|client| client.span_alloc(Some($name), $fn_name, file!(), line!(), 0))
    };
}
#[cfg(not(feature = "tracy"))]
macro_rules! tracy_span {
    ($name:literal, $fn_name:literal) => {
        ()
    };
}

pub mod math;
pub use math::{uv, Affine3, Mat3, Mat4, Rotor3, Vec3};

pub mod physics;
#[cfg(feature = "serde-types")]
pub use physics::ParticleParams;
pub use physics::{
    ballistic::{self, AmmoRound, ShotBounds, ShotType},
    collision::{self, CollisionPrimitive, CollisionSphere, Shape},
    field::{self, AccelerationField},
    BodyKey, ColliderKey, Dynamics, Firework, FireworkKey, Lifetime, Particle, PhysicsError, Pose,
    RigidBody, StepReport, World,
};
