use super::{CollisionPrimitive, Shape};
use crate::{
    math::{Affine3, Vec3},
    physics::{BodyKey, PhysicsError},
};

/// A collision primitive that is tested as a sphere
/// centered at the primitive's origin.
#[derive(Clone, Copy, Debug)]
pub struct CollisionSphere {
    pub primitive: CollisionPrimitive,
    radius: f64,
}

impl CollisionSphere {
    /// Create a sphere at the origin of the body. The radius must be positive.
    pub fn new(body: BodyKey, radius: f64) -> Self {
        debug_assert!(radius > 0.0, "sphere radius must be positive, got {}", radius);
        CollisionSphere {
            primitive: CollisionPrimitive::new(body),
            radius,
        }
    }

    /// Fallible version of [`new`][Self::new] for radii coming from user data.
    pub fn try_new(body: BodyKey, radius: f64) -> Result<Self, PhysicsError> {
        if radius > 0.0 && radius.is_finite() {
            Ok(Self::new(body, radius))
        } else {
            Err(PhysicsError::InvalidRadius(radius))
        }
    }

    pub fn with_offset(mut self, offset: Affine3) -> Self {
        self.primitive = self.primitive.with_offset(offset);
        self
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// World-space center of the sphere as of the last `calculate_internals`.
    #[inline]
    pub fn center(&self) -> Vec3 {
        self.primitive.axis(3)
    }
}

impl Shape for CollisionSphere {
    #[inline]
    fn primitive(&self) -> &CollisionPrimitive {
        &self.primitive
    }

    #[inline]
    fn primitive_mut(&mut self) -> &mut CollisionPrimitive {
        &mut self.primitive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{Particle, RigidBody};
    use thunderdome as td;

    fn dummy_key() -> BodyKey {
        let mut arena = td::Arena::new();
        BodyKey(arena.insert(()))
    }

    #[test]
    fn center_follows_body_and_offset() {
        let mut body = RigidBody::new(Particle::with_mass(1.0).with_position(Vec3::new(0.0, 2.0, 0.0)));
        body.refresh_transform();

        let mut sphere = CollisionSphere::new(dummy_key(), 0.5)
            .with_offset(Affine3::from_translation(Vec3::new(0.0, 0.0, 1.0)));
        sphere.primitive_mut().calculate_internals(&body);

        assert_eq!(sphere.radius(), 0.5);
        assert_eq!(sphere.center(), Vec3::new(0.0, 2.0, 1.0));
        assert_eq!(sphere.primitive().axis(1), Vec3::unit_y());
    }

    #[test]
    fn rejects_bad_radius() {
        assert!(CollisionSphere::try_new(dummy_key(), 1.0).is_ok());
        assert!(matches!(
            CollisionSphere::try_new(dummy_key(), 0.0),
            Err(PhysicsError::InvalidRadius(r)) if r == 0.0
        ));
        assert!(CollisionSphere::try_new(dummy_key(), -2.0).is_err());
        assert!(CollisionSphere::try_new(dummy_key(), f64::NAN).is_err());
    }
}
