use super::{Particle, PhysicsError};
use crate::math::vec3;

/// A builder to create [`Particle`][super::Particle]s from configuration files.
///
/// Every field has a default, so a config only needs to list what it changes.
/// A missing `mass` means the particle is immovable.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ParticleParams {
    pub position: [f64; 3],
    pub velocity: [f64; 3],
    pub acceleration: [f64; 3],
    pub damping: f64,
    pub mass: Option<f64>,
}

impl Default for ParticleParams {
    fn default() -> Self {
        ParticleParams {
            position: [0.0; 3],
            velocity: [0.0; 3],
            acceleration: [0.0; 3],
            damping: 1.0,
            mass: None,
        }
    }
}

impl ParticleParams {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = Some(mass);
        self
    }

    #[inline]
    pub fn with_position(mut self, pos: impl Into<[f64; 3]>) -> Self {
        self.position = pos.into();
        self
    }

    #[inline]
    pub fn with_velocity(mut self, vel: impl Into<[f64; 3]>) -> Self {
        self.velocity = vel.into();
        self
    }

    #[inline]
    pub fn with_acceleration(mut self, acc: impl Into<[f64; 3]>) -> Self {
        self.acceleration = acc.into();
        self
    }

    #[inline]
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Check the values and create the particle.
    pub fn build(self) -> Result<Particle, PhysicsError> {
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(PhysicsError::InvalidDamping(self.damping));
        }
        let mut particle = Particle::new()
            .with_position(vec3(self.position))
            .with_velocity(vec3(self.velocity))
            .with_acceleration(vec3(self.acceleration))
            .with_damping(self.damping);
        match self.mass {
            Some(m) if m > 0.0 && m.is_finite() => particle.set_mass(m),
            Some(m) => return Err(PhysicsError::InvalidMass(m)),
            None => particle.set_inverse_mass(0.0),
        }
        Ok(particle)
    }
}

impl TryFrom<ParticleParams> for Particle {
    type Error = PhysicsError;

    fn try_from(params: ParticleParams) -> Result<Self, Self::Error> {
        params.build()
    }
}
