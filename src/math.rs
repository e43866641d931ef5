//! Types, aliases and helper operations for doing math with `ultraviolet`.
pub use ultraviolet as uv;

pub type Vec3 = uv::DVec3;
pub type Vec4 = uv::DVec4;
pub type Mat3 = uv::DMat3;
/// Homogeneous 4x4 matrix, used when handing transforms to a renderer.
pub type Mat4 = uv::DMat4;
/// Orientation of a body. Only used as a static pose here,
/// nothing integrates angular motion.
pub type Rotor3 = uv::DRotor3;

/// An affine transform stored as a 4x3 matrix:
/// a 3x3 linear part (the basis) and a translation column, with no projective row.
///
/// Transforming a point `p` gives `basis * p + translation`.
/// Columns 0 to 2 are the images of the local X, Y and Z axes,
/// column 3 is the translation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine3 {
    pub basis: Mat3,
    pub translation: Vec3,
}

impl Default for Affine3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Affine3 {
    #[inline]
    pub fn new(basis: Mat3, translation: Vec3) -> Self {
        Affine3 { basis, translation }
    }

    #[inline]
    pub fn identity() -> Self {
        Affine3 {
            basis: Mat3::identity(),
            translation: Vec3::zero(),
        }
    }

    #[inline]
    pub fn from_translation(translation: Vec3) -> Self {
        Affine3 {
            basis: Mat3::identity(),
            translation,
        }
    }

    /// A pure rotation about the origin.
    #[inline]
    pub fn from_rotation(rotation: Rotor3) -> Self {
        Affine3 {
            basis: rotation.into_matrix(),
            translation: Vec3::zero(),
        }
    }

    /// Get one of the four columns of the matrix.
    /// 0, 1 and 2 are the axes, 3 is the translation.
    ///
    /// Panics if `index > 3`.
    #[inline]
    pub fn column(&self, index: usize) -> Vec3 {
        match index {
            0..=2 => self.basis.cols[index],
            3 => self.translation,
            _ => panic!("Affine3 has 4 columns, tried to read column {}", index),
        }
    }

    #[inline]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.basis * p + self.translation
    }

    /// Transform a direction, ignoring the translation.
    #[inline]
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        self.basis * v
    }

    /// Extend to a 4x4 matrix with `(0, 0, 0, 1)` as the bottom row.
    pub fn into_homogeneous(self) -> Mat4 {
        let c = |v: Vec3, w: f64| Vec4::new(v.x, v.y, v.z, w);
        Mat4::new(
            c(self.basis.cols[0], 0.0),
            c(self.basis.cols[1], 0.0),
            c(self.basis.cols[2], 0.0),
            c(self.translation, 1.0),
        )
    }
}

/// Composition: `(a * b).transform_point(p) == a.transform_point(b.transform_point(p))`.
impl std::ops::Mul for Affine3 {
    type Output = Affine3;

    fn mul(self, rhs: Affine3) -> Self::Output {
        Affine3 {
            basis: self.basis * rhs.basis,
            translation: self.basis * rhs.translation + self.translation,
        }
    }
}

impl std::ops::MulAssign for Affine3 {
    fn mul_assign(&mut self, rhs: Affine3) {
        *self = *self * rhs;
    }
}

impl From<uv::DIsometry3> for Affine3 {
    fn from(iso: uv::DIsometry3) -> Self {
        Affine3 {
            basis: iso.rotation.into_matrix(),
            translation: iso.translation,
        }
    }
}

// vec utils

/// Convert a position-like value from config formats to a vector.
#[inline]
pub fn vec3(v: [f64; 3]) -> Vec3 {
    Vec3::new(v[0], v[1], v[2])
}
