use crate::math::Vec3;

/// A particle is the simplest object that can be simulated:
/// a point mass with position and velocity but no orientation.
///
/// This is the linear motion state shared by everything that moves.
/// Other entities ([`RigidBody`][super::RigidBody], [`Firework`][super::Firework])
/// embed one by value and expose it through [`Dynamics`].
///
/// Mass is stored as its inverse, which makes integration simpler and lets
/// immovable objects be represented with an inverse mass of zero
/// instead of an infinite mass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    inverse_mass: f64,
    /// Fraction of velocity kept after one second of motion.
    damping: f64,
    position: Vec3,
    velocity: Vec3,
    /// Constant acceleration, typically gravity.
    acceleration: Vec3,
    /// Force to apply on the next integration step only.
    force_accum: Vec3,
}

impl Default for Particle {
    fn default() -> Self {
        Particle {
            inverse_mass: 0.0,
            damping: 0.0,
            position: Vec3::zero(),
            velocity: Vec3::zero(),
            acceleration: Vec3::zero(),
            force_accum: Vec3::zero(),
        }
    }
}

impl Particle {
    /// Create a particle with all state zeroed.
    /// Note that a zero inverse mass means the particle is immovable until a mass is set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a movable particle with the given mass and no damping.
    pub fn with_mass(mass: f64) -> Self {
        let mut p = Self::default();
        p.set_mass(mass);
        p.damping = 1.0;
        p
    }

    // builder-style setters

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_acceleration(mut self, acceleration: Vec3) -> Self {
        self.acceleration = acceleration;
        self
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Advance the particle by `duration` seconds with semi-implicit Euler:
    /// position moves with the velocity from before this step,
    /// then velocity picks up constant acceleration plus accumulated force
    /// and is damped by `damping ^ duration`.
    ///
    /// Particles with infinite mass (zero inverse mass) do not move,
    /// but their force accumulator is still cleared.
    ///
    /// `duration` must be positive; this is checked in debug builds only.
    pub fn integrate(&mut self, duration: f64) {
        if self.inverse_mass <= 0.0 {
            self.clear_accumulator();
            return;
        }
        debug_assert!(duration > 0.0, "integrated with duration {}", duration);

        self.position += self.velocity * duration;

        let resulting_acc = self.acceleration + self.force_accum * self.inverse_mass;
        self.velocity += resulting_acc * duration;

        // exponential drag, consistent over varying frame durations
        self.velocity *= self.damping.powf(duration);

        self.clear_accumulator();
    }

    /// Add a force to be applied on the next integration step only.
    #[inline]
    pub fn add_force(&mut self, force: Vec3) {
        self.force_accum += force;
    }

    /// Zero the accumulated force. Called automatically by [`integrate`][Self::integrate].
    #[inline]
    pub fn clear_accumulator(&mut self) {
        self.force_accum = Vec3::zero();
    }

    #[inline]
    pub fn force_accum(&self) -> Vec3 {
        self.force_accum
    }

    // mass

    /// Set the mass of the particle. The mass must not be zero;
    /// for an immovable particle use `set_inverse_mass(0.0)` instead.
    pub fn set_mass(&mut self, mass: f64) {
        debug_assert!(mass != 0.0, "particle mass must not be zero");
        self.inverse_mass = 1.0 / mass;
    }

    /// Get the mass of the particle.
    ///
    /// An immovable particle returns `f64::MAX` rather than infinity
    /// to keep arithmetic on the result finite.
    pub fn mass(&self) -> f64 {
        if self.inverse_mass == 0.0 {
            f64::MAX
        } else {
            1.0 / self.inverse_mass
        }
    }

    /// Set the inverse mass directly. Zero means infinite mass.
    #[inline]
    pub fn set_inverse_mass(&mut self, inverse_mass: f64) {
        self.inverse_mass = inverse_mass;
    }

    #[inline]
    pub fn inverse_mass(&self) -> f64 {
        self.inverse_mass
    }

    /// True unless the particle is immovable.
    #[inline]
    pub fn has_finite_mass(&self) -> bool {
        self.inverse_mass != 0.0
    }

    // plain state accessors

    #[inline]
    pub fn damping(&self) -> f64 {
        self.damping
    }

    #[inline]
    pub fn set_damping(&mut self, damping: f64) {
        self.damping = damping;
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    #[inline]
    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    /// Apply an instantaneous change in velocity.
    #[inline]
    pub fn add_velocity(&mut self, delta: Vec3) {
        self.velocity += delta;
    }

    #[inline]
    pub fn acceleration(&self) -> Vec3 {
        self.acceleration
    }

    #[inline]
    pub fn set_acceleration(&mut self, acceleration: Vec3) {
        self.acceleration = acceleration;
    }
}

/// Anything that carries a [`Particle`] and can be driven forward in time.
pub trait Dynamics {
    fn motion(&self) -> &Particle;
    fn motion_mut(&mut self) -> &mut Particle;

    #[inline]
    fn integrate(&mut self, duration: f64) {
        self.motion_mut().integrate(duration);
    }

    #[inline]
    fn add_force(&mut self, force: Vec3) {
        self.motion_mut().add_force(force);
    }

    #[inline]
    fn position(&self) -> Vec3 {
        self.motion().position()
    }
}

impl Dynamics for Particle {
    #[inline]
    fn motion(&self) -> &Particle {
        self
    }

    #[inline]
    fn motion_mut(&mut self) -> &mut Particle {
        self
    }
}

//
// tests
//
