use super::{
    collision::{CollisionSphere, Shape},
    AccelerationField, Dynamics, Firework, PhysicsError, RigidBody,
};

use itertools::Itertools;
use thunderdome as td;

/// Key type to look up a body stored in the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyKey(pub(crate) td::Index);

impl BodyKey {
    /// Get the underlying [`thunderdome::Index`][thunderdome::Index] of this key.
    /// Useful for creating your own mappings from bodies to other things,
    /// such as render objects.
    #[inline]
    pub fn index(&self) -> td::Index {
        self.0
    }
}

/// Key type to look up a collider stored in the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColliderKey(pub(crate) td::Index);

impl ColliderKey {
    #[inline]
    pub fn index(&self) -> td::Index {
        self.0
    }
}

/// Key type to look up a firework stored in the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FireworkKey(pub(crate) td::Index);

impl FireworkKey {
    #[inline]
    pub fn index(&self) -> td::Index {
        self.0
    }
}

/// What happened during a [`World::step`].
#[derive(Clone, Debug, Default)]
pub struct StepReport {
    /// Fireworks that reached the end of their life this step.
    /// They are still in the world; remove them with [`World::remove_firework`].
    pub expired_fireworks: Vec<FireworkKey>,
    /// Number of colliders dropped because their body no longer exists.
    pub dropped_colliders: usize,
}

/// Storage for everything that moves, plus the collision shapes attached to bodies.
///
/// A step runs in phases, each over every object before the next one starts:
/// integrate, refresh body transforms, recompute collider transforms.
/// Collision queries are only valid after the last phase.
pub struct World {
    substeps: usize,
    bodies: td::Arena<RigidBody>,
    colliders: td::Arena<CollisionSphere>,
    fireworks: td::Arena<Firework>,
}

impl Default for World {
    fn default() -> Self {
        Self::with_substeps(1)
    }
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a world that splits every step into the given number of substeps.
    pub fn with_substeps(substeps: usize) -> Self {
        assert!(substeps > 0, "a world needs at least one substep");
        World {
            substeps,
            bodies: td::Arena::new(),
            colliders: td::Arena::new(),
            fireworks: td::Arena::new(),
        }
    }

    #[inline]
    pub fn substeps(&self) -> usize {
        self.substeps
    }

    //
    // bodies
    //

    /// Insert a rigid body into the world.
    /// Its transform is refreshed so colliders attached to it start at its position.
    pub fn insert_body(&mut self, mut body: RigidBody) -> BodyKey {
        body.refresh_transform();
        BodyKey(self.bodies.insert(body))
    }

    /// Access a body if it still exists.
    #[inline]
    pub fn get_body(&self, body: BodyKey) -> Option<&RigidBody> {
        self.bodies.get(body.0)
    }

    /// Mutably access a body if it still exists.
    #[inline]
    pub fn get_body_mut(&mut self, body: BodyKey) -> Option<&mut RigidBody> {
        self.bodies.get_mut(body.0)
    }

    /// Remove a body from the world, returning it if it still existed.
    ///
    /// Colliders attached to this body will be automatically removed
    /// the next time collider transforms are calculated.
    #[inline]
    pub fn remove_body(&mut self, body: BodyKey) -> Option<RigidBody> {
        self.bodies.remove(body.0)
    }

    pub fn bodies(&self) -> impl Iterator<Item = (BodyKey, &RigidBody)> {
        self.bodies.iter().map(|(k, b)| (BodyKey(k), b))
    }

    //
    // colliders
    //

    /// Attach a sphere to the body it refers to.
    ///
    /// The body's transform is refreshed first, in case it was moved through
    /// [`get_body_mut`][Self::get_body_mut], and the sphere's transform
    /// is calculated from it right away.
    pub fn attach_sphere(&mut self, mut sphere: CollisionSphere) -> Result<ColliderKey, PhysicsError> {
        let body_key = sphere.primitive().body();
        let body = self
            .bodies
            .get_mut(body_key.0)
            .ok_or(PhysicsError::BodyNotFound(body_key))?;
        body.refresh_transform();
        sphere.primitive_mut().calculate_internals(body);
        Ok(ColliderKey(self.colliders.insert(sphere)))
    }

    /// Access a collider if it still exists.
    #[inline]
    pub fn get_collider(&self, coll: ColliderKey) -> Option<&CollisionSphere> {
        self.colliders.get(coll.0)
    }

    /// Mutably access a collider if it still exists.
    #[inline]
    pub fn get_collider_mut(&mut self, coll: ColliderKey) -> Option<&mut CollisionSphere> {
        self.colliders.get_mut(coll.0)
    }

    /// Access the body a collider is attached to, if both still exist.
    #[inline]
    pub fn get_collider_body(&self, coll: ColliderKey) -> Option<&RigidBody> {
        self.colliders
            .get(coll.0)
            .and_then(|c| self.bodies.get(c.primitive().body().0))
    }

    /// Remove a collider from the world, returning it if it still existed.
    /// The body it was attached to is not affected.
    #[inline]
    pub fn remove_collider(&mut self, coll: ColliderKey) -> Option<CollisionSphere> {
        self.colliders.remove(coll.0)
    }

    pub fn colliders(&self) -> impl Iterator<Item = (ColliderKey, &CollisionSphere)> {
        self.colliders.iter().map(|(k, c)| (ColliderKey(k), c))
    }

    //
    // fireworks
    //

    pub fn insert_firework(&mut self, firework: Firework) -> FireworkKey {
        FireworkKey(self.fireworks.insert(firework))
    }

    #[inline]
    pub fn get_firework(&self, fw: FireworkKey) -> Option<&Firework> {
        self.fireworks.get(fw.0)
    }

    #[inline]
    pub fn get_firework_mut(&mut self, fw: FireworkKey) -> Option<&mut Firework> {
        self.fireworks.get_mut(fw.0)
    }

    #[inline]
    pub fn remove_firework(&mut self, fw: FireworkKey) -> Option<Firework> {
        self.fireworks.remove(fw.0)
    }

    pub fn fireworks(&self) -> impl Iterator<Item = (FireworkKey, &Firework)> {
        self.fireworks.iter().map(|(k, f)| (FireworkKey(k), f))
    }

    /// Remove everything from the world.
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.colliders.clear();
        self.fireworks.clear();
    }

    //
    // simulation
    //

    /// Advance the world by `dt` seconds, running all phases once per substep.
    ///
    /// `dt` must be positive. Debug builds panic otherwise;
    /// release builds log a warning and skip the step.
    pub fn step(&mut self, dt: f64, field: &impl AccelerationField) -> StepReport {
        let _span = tracy_span!("world step", "step");

        debug_assert!(dt > 0.0, "stepped with duration {}", dt);
        if !(dt > 0.0 && dt.is_finite()) {
            log::warn!("skipping world step with invalid duration {}", dt);
            return StepReport::default();
        }

        let dt = dt / self.substeps as f64;
        let mut expired = Vec::new();
        let mut dropped_colliders = 0;
        for _substep in 0..self.substeps {
            expired.extend(self.integrate(dt, field));
            self.refresh_transforms();
            dropped_colliders += self.calculate_internals();
        }

        log::trace!(
            "stepped {} bodies, {} colliders, {} fireworks in {} substeps",
            self.bodies.len(),
            self.colliders.len(),
            self.fireworks.len(),
            self.substeps
        );

        StepReport {
            expired_fireworks: expired.into_iter().unique().collect(),
            dropped_colliders,
        }
    }

    /// First phase of a step: apply the acceleration field and integrate every body and firework.
    /// Returns the fireworks that expired.
    ///
    /// This invalidates collider transforms until [`calculate_internals`][Self::calculate_internals].
    pub fn integrate(&mut self, dt: f64, field: &impl AccelerationField) -> Vec<FireworkKey> {
        let _span = tracy_span!("integrate", "integrate");

        #[cfg(not(feature = "parallel"))]
        for (_, body) in self.bodies.iter_mut() {
            integrate_with_field(body, dt, field);
        }
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            let mut bodies: Vec<&mut RigidBody> = self.bodies.iter_mut().map(|(_, b)| b).collect();
            bodies
                .par_iter_mut()
                .for_each(|body| integrate_with_field(&mut **body, dt, field));
        }

        for (_, coll) in self.colliders.iter_mut() {
            coll.primitive_mut().mark_stale();
        }

        self.fireworks
            .iter_mut()
            .filter_map(|(key, fw)| {
                add_field_force(fw, field);
                fw.update(dt).then(|| FireworkKey(key))
            })
            .collect()
    }

    /// Second phase of a step: bring every body's transform up to date with its position.
    pub fn refresh_transforms(&mut self) {
        let _span = tracy_span!("refresh transforms", "refresh_transforms");

        for (_, body) in self.bodies.iter_mut() {
            body.refresh_transform();
        }
    }

    /// Last phase of a step: recompute every collider's world transform
    /// from its body. Colliders whose body is gone are removed.
    /// Returns the number of colliders removed.
    pub fn calculate_internals(&mut self) -> usize {
        let _span = tracy_span!("calculate collider internals", "calculate_internals");

        let bodies = &self.bodies;
        let count_before = self.colliders.len();
        self.colliders.retain(|key, coll| {
            let body_key = coll.primitive().body();
            match bodies.get(body_key.0) {
                Some(body) => {
                    coll.primitive_mut().calculate_internals(body);
                    true
                }
                None => {
                    log::debug!(
                        "dropping collider {:?}, its body {:?} was removed",
                        key,
                        body_key
                    );
                    false
                }
            }
        });
        count_before - self.colliders.len()
    }
}

/// Convert the field's acceleration into a force on the object.
/// Objects with infinite mass get nothing.
fn add_field_force(obj: &mut impl Dynamics, field: &impl AccelerationField) {
    let particle = obj.motion();
    if particle.has_finite_mass() {
        let force = field.acceleration_at(particle.position()) * particle.mass();
        obj.add_force(force);
    }
}

fn integrate_with_field(body: &mut RigidBody, dt: f64, field: &impl AccelerationField) {
    add_field_force(body, field);
    body.integrate(dt);
}

//
// tests
//
