use crate::{
    math::{Affine3, Vec3},
    physics::{BodyKey, RigidBody},
};

/// A shape-less collision primitive attached to a rigid body with an offset.
///
/// The world transform is cached and only recomputed by
/// [`calculate_internals`][Self::calculate_internals]. Every simulation step
/// has to call it after the body's transform has been refreshed and before
/// anything reads [`transform`][Self::transform] or [`axis`][Self::axis].
#[derive(Clone, Copy, Debug)]
pub struct CollisionPrimitive {
    body: BodyKey,
    /// Transform from primitive space to body space.
    offset: Affine3,
    /// Transform from primitive space to world space.
    transform: Affine3,
    stale: bool,
}

impl CollisionPrimitive {
    /// Create a primitive at the origin of the body.
    pub fn new(body: BodyKey) -> Self {
        CollisionPrimitive {
            body,
            offset: Affine3::identity(),
            transform: Affine3::identity(),
            stale: false,
        }
    }

    pub fn with_offset(mut self, offset: Affine3) -> Self {
        self.offset = offset;
        self
    }

    #[inline]
    pub fn body(&self) -> BodyKey {
        self.body
    }

    #[inline]
    pub fn offset(&self) -> Affine3 {
        self.offset
    }

    /// Recompute the world transform as `body transform * offset`.
    ///
    /// Uses the transform from the body's last
    /// [`refresh_transform`][RigidBody::refresh_transform], which must have happened
    /// after the body last moved. This is checked in debug builds.
    pub fn calculate_internals(&mut self, body: &RigidBody) {
        debug_assert!(
            body.is_transform_current(),
            "calculated collision internals from a body whose transform wasn't refreshed"
        );
        self.transform = body.transform() * self.offset;
        self.stale = false;
    }

    /// Flag the cached transform as out of date.
    /// Done by the world when the body moves.
    #[inline]
    pub fn mark_stale(&mut self) {
        self.stale = true;
    }

    /// Whether the body may have moved since the last
    /// [`calculate_internals`][Self::calculate_internals].
    #[inline]
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Get the primitive-to-world transform.
    ///
    /// Before the first `calculate_internals` this is the identity.
    #[inline]
    pub fn transform(&self) -> Affine3 {
        debug_assert!(!self.stale, "read a collision transform before recalculating it");
        self.transform
    }

    /// Get one of the primitive's local axes in world space.
    /// Indices 0 to 2 are the X, Y and Z axes; 3 gives the world position of the primitive.
    ///
    /// Panics if `index > 3`.
    #[inline]
    pub fn axis(&self, index: usize) -> Vec3 {
        self.transform().column(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        math::{Mat3, Rotor3},
        physics::{Dynamics, Particle},
    };
    use std::f64::consts::FRAC_PI_2;
    use thunderdome as td;

    fn dummy_key() -> BodyKey {
        let mut arena = td::Arena::new();
        BodyKey(arena.insert(()))
    }

    fn body_at(pos: Vec3, orientation: Rotor3) -> RigidBody {
        let mut body = RigidBody::new(Particle::with_mass(1.0).with_position(pos))
            .with_orientation(orientation);
        body.refresh_transform();
        body
    }

    #[test]
    fn identity_before_any_calculation() {
        let prim = CollisionPrimitive::new(dummy_key())
            .with_offset(Affine3::from_translation(Vec3::new(1.0, 0.0, 0.0)));
        assert_eq!(prim.transform(), Affine3::identity());
        assert_eq!(prim.axis(0), Vec3::unit_x());
    }

    #[test]
    fn identity_offset_copies_body_transform() {
        let body = body_at(Vec3::new(3.0, -1.0, 2.0), Rotor3::from_rotation_xy(0.3));
        let mut prim = CollisionPrimitive::new(dummy_key());
        prim.calculate_internals(&body);
        assert_eq!(prim.transform(), body.transform());
    }

    #[test]
    fn transform_is_body_times_offset() {
        let body = body_at(Vec3::new(0.0, 5.0, 0.0), Rotor3::from_rotation_xz(FRAC_PI_2));
        let offset = Affine3::new(
            Mat3::new(
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(-1.0, 0.0, 0.0),
                Vec3::new(0.0, 0.0, 1.0),
            ),
            Vec3::new(1.0, 0.0, 0.0),
        );
        let mut prim = CollisionPrimitive::new(dummy_key()).with_offset(offset);
        prim.calculate_internals(&body);

        assert_eq!(prim.transform(), body.transform() * offset);
        assert_eq!(prim.axis(3), body.transform().transform_point(offset.translation));
    }

    #[test]
    fn axes_follow_recalculation() {
        let mut body = body_at(Vec3::zero(), Rotor3::identity());
        let mut prim = CollisionPrimitive::new(dummy_key());
        prim.calculate_internals(&body);
        assert_eq!(prim.axis(0), Vec3::unit_x());
        assert_eq!(prim.axis(1), Vec3::unit_y());
        assert_eq!(prim.axis(2), Vec3::unit_z());

        body.pose.orientation = Rotor3::from_rotation_xy(FRAC_PI_2);
        body.refresh_transform();
        // not recalculated yet, still the old axes
        assert_eq!(prim.axis(0), Vec3::unit_x());

        prim.calculate_internals(&body);
        let basis = body.transform().basis;
        for i in 0..3 {
            assert_eq!(prim.axis(i), basis.cols[i]);
        }
        assert!((prim.axis(0) - Vec3::unit_x()).mag() > 1.0);
    }

    #[test]
    fn stale_flag_cleared_by_calculation() {
        let body = body_at(Vec3::zero(), Rotor3::identity());
        let mut prim = CollisionPrimitive::new(dummy_key());
        assert!(!prim.is_stale());
        prim.mark_stale();
        assert!(prim.is_stale());
        prim.calculate_internals(&body);
        assert!(!prim.is_stale());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn unrefreshed_body_caught_in_debug() {
        let mut body = body_at(Vec3::zero(), Rotor3::identity());
        body.particle.set_velocity(Vec3::new(1.0, 0.0, 0.0));
        body.integrate(1.0);
        let mut prim = CollisionPrimitive::new(dummy_key());
        prim.calculate_internals(&body);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn stale_read_caught_in_debug() {
        let mut prim = CollisionPrimitive::new(dummy_key());
        prim.mark_stale();
        prim.transform();
    }
}
