//! Accelerations that act on everything in the world, such as gravity.

use crate::math::Vec3;

/// An acceleration that may depend on position, applied to every dynamic object
/// in the world each step.
///
/// Values are accelerations in m/s², not forces. The world multiplies them
/// by each object's mass before adding them to its force accumulator,
/// which leaves immovable objects where they are.
pub trait AccelerationField: Sync {
    fn acceleration_at(&self, position: Vec3) -> Vec3;
}

/// No acceleration anywhere.
pub struct NoField;

impl AccelerationField for NoField {
    #[inline]
    fn acceleration_at(&self, _: Vec3) -> Vec3 {
        Vec3::zero()
    }
}

/// Uniform gravity, e.g. `UniformGravity(Vec3::new(0.0, -9.81, 0.0))`.
pub struct UniformGravity(pub Vec3);

impl AccelerationField for UniformGravity {
    #[inline]
    fn acceleration_at(&self, _: Vec3) -> Vec3 {
        self.0
    }
}

/// Inverse-square pull towards a point.
///
/// `softening` keeps the acceleration bounded near the center,
/// where it goes to zero. A negative `strength` pushes away instead.
pub struct Attractor {
    pub center: Vec3,
    /// Gravitational parameter of the attracting mass (G·M).
    pub strength: f64,
    pub softening: f64,
}

impl AccelerationField for Attractor {
    fn acceleration_at(&self, position: Vec3) -> Vec3 {
        let to_center = self.center - position;
        let dist_sq = to_center.mag_sq() + self.softening * self.softening;
        if dist_sq == 0.0 {
            return Vec3::zero();
        }
        to_center * (self.strength / (dist_sq * dist_sq.sqrt()))
    }
}

/// Two fields acting at once.
pub struct Combined<A, B>(pub A, pub B);

impl<A: AccelerationField, B: AccelerationField> AccelerationField for Combined<A, B> {
    fn acceleration_at(&self, position: Vec3) -> Vec3 {
        self.0.acceleration_at(position) + self.1.acceleration_at(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn combined_fields_add_up() {
        let field = Combined(
            UniformGravity(Vec3::new(0.0, -9.81, 0.0)),
            UniformGravity(Vec3::new(1.0, 0.0, 0.0)),
        );
        assert_eq!(field.acceleration_at(Vec3::zero()), Vec3::new(1.0, -9.81, 0.0));
        assert_eq!(NoField.acceleration_at(Vec3::new(1.0, 1.0, 1.0)), Vec3::zero());
    }

    #[test]
    fn attractor_follows_inverse_square() {
        let field = Attractor {
            center: Vec3::new(0.0, 10.0, 0.0),
            strength: 4.0,
            softening: 0.0,
        };
        let near = field.acceleration_at(Vec3::new(0.0, 9.0, 0.0));
        let far = field.acceleration_at(Vec3::new(0.0, 8.0, 0.0));
        assert_relative_eq!(near.y, 4.0);
        assert_relative_eq!(far.y, 1.0);
        assert_relative_eq!(near.x, 0.0);
        assert_eq!(field.acceleration_at(field.center), Vec3::zero());
    }

    #[test]
    fn softening_bounds_the_pull() {
        let field = Attractor {
            center: Vec3::zero(),
            strength: 1.0,
            softening: 1.0,
        };
        let close = field.acceleration_at(Vec3::new(1e-6, 0.0, 0.0));
        assert!(close.mag() < 1e-5);
        // peak of r / (r² + 1)^(3/2) is at r = 1/√2
        let peak = field.acceleration_at(Vec3::new(-std::f64::consts::FRAC_1_SQRT_2, 0.0, 0.0));
        assert!(peak.mag() < 0.4);
    }
}
