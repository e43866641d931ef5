use super::{Dynamics, Particle};

/// Remaining lifetime of a short-lived object, counted down in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lifetime {
    pub age: f64,
}

impl Lifetime {
    #[inline]
    pub fn new(age: f64) -> Self {
        Lifetime { age }
    }

    /// Count down by `duration`. Returns true once the age has gone below zero.
    #[inline]
    pub fn tick(&mut self, duration: f64) -> bool {
        self.age -= duration;
        self.is_expired()
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.age < 0.0
    }
}

/// A particle with a fuse.
///
/// When the fuse runs out or the firework falls below the ground plane (`y < 0`)
/// it has reached the end of its life. Removing it is up to whoever owns it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Firework {
    pub particle: Particle,
    pub lifetime: Lifetime,
    /// Application-defined classification, not used by the simulation.
    pub kind: u32,
}

impl Firework {
    pub fn new(particle: Particle, age: f64, kind: u32) -> Self {
        Firework {
            particle,
            lifetime: Lifetime::new(age),
            kind,
        }
    }

    /// Move the firework and burn `duration` seconds of its fuse.
    /// Returns true if it should be removed.
    pub fn update(&mut self, duration: f64) -> bool {
        self.particle.integrate(duration);
        let burnt_out = self.lifetime.tick(duration);
        burnt_out || self.particle.position().y < 0.0
    }

    #[inline]
    pub fn age(&self) -> f64 {
        self.lifetime.age
    }
}

impl Dynamics for Firework {
    #[inline]
    fn motion(&self) -> &Particle {
        &self.particle
    }

    #[inline]
    fn motion_mut(&mut self) -> &mut Particle {
        &mut self.particle
    }
}
