//! Projectile presets for ballistics demos.

use super::{
    BodyKey, ColliderKey, CollisionSphere, Dynamics, Particle, PhysicsError, RigidBody, World,
};
use crate::math::Vec3;

/// Where rounds are fired from unless told otherwise.
pub const DEFAULT_ORIGIN: Vec3 = Vec3 {
    x: 0.0,
    y: 1.5,
    z: 0.0,
};

/// The kinds of projectile that can be fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotType {
    /// A slot that isn't in use. Rounds become unused when they leave the play area.
    Unused,
    Pistol,
    Artillery,
    Fireball,
    /// The kind of laser bolt seen in films, not a realistic laser beam.
    Laser,
}

impl ShotType {
    /// Physical parameters of the shot at the moment of firing, positioned at the origin.
    pub fn particle(self) -> Particle {
        match self {
            ShotType::Unused => Particle::new(),
            ShotType::Pistol => Particle::with_mass(2.0)
                .with_velocity(Vec3::new(0.0, 0.0, 35.0))
                .with_acceleration(Vec3::new(0.0, -1.0, 0.0))
                .with_damping(0.99),
            ShotType::Artillery => Particle::with_mass(200.0)
                .with_velocity(Vec3::new(0.0, 30.0, 40.0))
                .with_acceleration(Vec3::new(0.0, -20.0, 0.0))
                .with_damping(0.99),
            // mostly blast damage, floats up
            ShotType::Fireball => Particle::with_mass(1.0)
                .with_velocity(Vec3::new(0.0, 0.0, 10.0))
                .with_acceleration(Vec3::new(0.0, 0.6, 0.0))
                .with_damping(0.9),
            // almost no weight and no gravity
            ShotType::Laser => Particle::with_mass(0.0001)
                .with_velocity(Vec3::new(0.0, 0.0, 100.0))
                .with_acceleration(Vec3::zero())
                .with_damping(0.99),
        }
    }

    /// Radius of the collision sphere for this shot, `None` for unused slots.
    pub fn radius(self) -> Option<f64> {
        match self {
            ShotType::Unused => None,
            ShotType::Pistol => Some(0.25),
            ShotType::Artillery => Some(0.5),
            ShotType::Fireball => Some(0.35),
            ShotType::Laser => Some(0.2),
        }
    }

    /// Fire a round of this type from the given position.
    pub fn fire(self, origin: Vec3) -> AmmoRound {
        AmmoRound {
            shot_type: self,
            particle: self.particle().with_position(origin),
        }
    }
}

/// Box that live rounds must stay inside of.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde-types",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ShotBounds {
    /// Rounds at or below this height have hit the ground.
    pub floor: f64,
    /// Rounds at or above this height have left the play area.
    pub ceiling: f64,
    /// Rounds further than this along the firing direction (z) have left the play area.
    pub range: f64,
}

impl Default for ShotBounds {
    fn default() -> Self {
        ShotBounds {
            floor: 0.0,
            ceiling: 35.0,
            range: 200.0,
        }
    }
}

impl ShotBounds {
    pub fn contains(&self, pos: Vec3) -> bool {
        pos.y > self.floor && pos.y < self.ceiling && pos.z <= self.range
    }
}

/// A single projectile in flight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmmoRound {
    pub shot_type: ShotType,
    pub particle: Particle,
}

impl AmmoRound {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.shot_type != ShotType::Unused
    }

    /// Mark the round unused if it has left the bounds.
    /// Returns true if this happened on this call.
    pub fn retire_if_out_of_bounds(&mut self, bounds: &ShotBounds) -> bool {
        if self.is_active() && !bounds.contains(self.particle.position()) {
            self.shot_type = ShotType::Unused;
            true
        } else {
            false
        }
    }

    /// Move an active round and retire it if it left the bounds.
    /// Returns true if the round is unused after the update.
    pub fn update(&mut self, duration: f64, bounds: &ShotBounds) -> bool {
        if self.is_active() {
            self.particle.integrate(duration);
            self.retire_if_out_of_bounds(bounds);
        }
        !self.is_active()
    }

    /// Put the round into a world as a rigid body with a collision sphere.
    /// Unused rounds have no sphere and fail with [`PhysicsError::UnusedRound`].
    pub fn spawn(self, world: &mut World) -> Result<(BodyKey, ColliderKey), PhysicsError> {
        let radius = self
            .shot_type
            .radius()
            .ok_or(PhysicsError::UnusedRound)?;
        let body_key = world.insert_body(RigidBody::new(self.particle));
        let coll_key = world.attach_sphere(CollisionSphere::try_new(body_key, radius)?)?;
        Ok((body_key, coll_key))
    }
}

impl Dynamics for AmmoRound {
    #[inline]
    fn motion(&self) -> &Particle {
        &self.particle
    }

    #[inline]
    fn motion_mut(&mut self) -> &mut Particle {
        &mut self.particle
    }
}
