use super::{Dynamics, Particle};
use crate::math::{Affine3, Mat4, Rotor3};

/// Orientation and the cached body-to-world transform of a rigid body.
///
/// There are no angular dynamics; the orientation only changes when set explicitly.
/// Integrating angular velocity would update `orientation` here before
/// [`RigidBody::refresh_transform`] folds it into the matrix.
#[derive(Clone, Copy, Debug)]
pub struct Pose {
    pub orientation: Rotor3,
    transform: Affine3,
}

impl Default for Pose {
    fn default() -> Self {
        Pose {
            orientation: Rotor3::identity(),
            transform: Affine3::identity(),
        }
    }
}

impl Pose {
    #[inline]
    pub fn transform(&self) -> Affine3 {
        self.transform
    }
}

/// A rigid body is a particle with a pose.
///
/// The transform converts points from body space to world space.
/// It is only updated by [`refresh_transform`][Self::refresh_transform],
/// so after integrating it lags behind the particle's position until refreshed.
#[derive(Clone, Copy, Debug, Default)]
pub struct RigidBody {
    pub particle: Particle,
    pub pose: Pose,
}

impl RigidBody {
    pub fn new(particle: Particle) -> Self {
        RigidBody {
            particle,
            pose: Pose::default(),
        }
    }

    pub fn with_orientation(mut self, orientation: Rotor3) -> Self {
        self.pose.orientation = orientation;
        self
    }

    /// Rebuild the transform matrix from the current orientation and position.
    pub fn refresh_transform(&mut self) {
        self.pose.transform = Affine3::new(
            self.pose.orientation.into_matrix(),
            self.particle.position(),
        );
    }

    /// Whether the transform matches the current position and orientation,
    /// i.e. nothing has moved the body since the last refresh.
    pub fn is_transform_current(&self) -> bool {
        self.pose.transform.translation == self.particle.position()
            && self.pose.transform.basis == self.pose.orientation.into_matrix()
    }

    /// Get the body-to-world transform as of the last refresh.
    #[inline]
    pub fn transform(&self) -> Affine3 {
        self.pose.transform
    }

    /// Get a 4x4 transform for rendering the body.
    ///
    /// Takes the basis from the transform matrix and the translation from the
    /// current position, so the result is up to date even if the transform
    /// hasn't been refreshed since the last integration step.
    pub fn world_render_transform(&self) -> Mat4 {
        Affine3::new(self.pose.transform.basis, self.particle.position()).into_homogeneous()
    }
}

impl Dynamics for RigidBody {
    #[inline]
    fn motion(&self) -> &Particle {
        &self.particle
    }

    #[inline]
    fn motion_mut(&mut self) -> &mut Particle {
        &mut self.particle
    }
}

impl From<Particle> for RigidBody {
    fn from(particle: Particle) -> Self {
        Self::new(particle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Vec3, Vec4};
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn transform_is_stale_until_refreshed() {
        let mut body = RigidBody::new(
            Particle::with_mass(1.0).with_velocity(Vec3::new(2.0, 0.0, 0.0)),
        );
        assert!(body.is_transform_current());
        body.integrate(1.0);
        assert_eq!(body.particle.position(), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(body.transform(), Affine3::identity());
        assert!(!body.is_transform_current());

        body.refresh_transform();
        assert_eq!(body.transform(), Affine3::from_translation(Vec3::new(2.0, 0.0, 0.0)));
        assert!(body.is_transform_current());
    }

    #[test]
    fn setting_pose_outdates_transform() {
        let mut body = RigidBody::new(Particle::with_mass(1.0));
        body.particle.set_position(Vec3::new(0.0, 1.0, 0.0));
        assert!(!body.is_transform_current());
        body.refresh_transform();

        body.pose.orientation = Rotor3::from_rotation_yz(0.5);
        assert!(!body.is_transform_current());
        body.refresh_transform();
        assert!(body.is_transform_current());
    }

    #[test]
    fn refresh_includes_orientation() {
        let rot = Rotor3::from_rotation_xz(FRAC_PI_2);
        let mut body = RigidBody::new(Particle::with_mass(1.0).with_position(Vec3::new(1.0, 2.0, 3.0)))
            .with_orientation(rot);
        body.refresh_transform();

        let tr = body.transform();
        assert_eq!(tr.basis, rot.into_matrix());
        assert_eq!(tr.translation, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn render_transform_tracks_position() {
        let mut body = RigidBody::new(
            Particle::with_mass(1.0).with_velocity(Vec3::new(0.0, 0.0, 4.0)),
        );
        body.refresh_transform();
        body.integrate(0.5);

        // no refresh, yet the render transform is at the new position
        let m = body.world_render_transform();
        assert_eq!(m * Vec4::new(0.0, 0.0, 0.0, 1.0), Vec4::new(0.0, 0.0, 2.0, 1.0));

        // refreshing doesn't translate twice
        body.refresh_transform();
        let m = body.world_render_transform();
        assert_eq!(m * Vec4::new(0.0, 0.0, 0.0, 1.0), Vec4::new(0.0, 0.0, 2.0, 1.0));
    }
}
