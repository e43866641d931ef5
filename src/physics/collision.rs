//! Shapes attached to rigid bodies for collision testing.
//!
//! Nothing here computes intersections. The types only keep world-space
//! transforms up to date so that an intersection library can read them.

mod primitive;
pub use primitive::CollisionPrimitive;

mod sphere;
pub use sphere::CollisionSphere;

/// Access to the primitive part of a collision shape.
pub trait Shape {
    fn primitive(&self) -> &CollisionPrimitive;
    fn primitive_mut(&mut self) -> &mut CollisionPrimitive;
}

impl Shape for CollisionPrimitive {
    #[inline]
    fn primitive(&self) -> &CollisionPrimitive {
        self
    }

    #[inline]
    fn primitive_mut(&mut self) -> &mut CollisionPrimitive {
        self
    }
}
