use super::Layer;
use crate::math as m;

/// A collision found by [`CollisionDetector`][crate::physics::CollisionDetector].
///
/// One event is produced per layer the two colliders share,
/// so a single contact can show up several times with different `layer`s.
#[derive(Clone, Debug, PartialEq)]
pub struct CollisionEvent<T> {
    /// The active collider that went looking for the collision.
    pub source: hecs::Entity,
    /// The collider it ran into.
    pub target: hecs::Entity,
    /// Contact point in world space.
    ///
    /// For swept box collisions this is where the source's center is at the moment of contact.
    /// For polygon collisions it's the midpoint of the two centroids.
    pub point: m::Vec2,
    /// For swept box collisions, the target's surface normal facing the source
    /// (zero for exact corner hits and boxes that already overlapped).
    /// For polygon collisions, a unit normal pointing from the source towards the target.
    pub normal: m::Vec2,
    /// Fraction of the source's movement this frame before contact.
    /// Zero for boxes that already overlapped and for polygon collisions.
    pub time: f64,
    /// Penetration depth along the normal. Only nonzero for polygon collisions.
    pub depth: f64,
    pub layer: Layer,
    /// Game-defined classification of the collision.
    pub tag: T,
}

/// Collision events waiting to be resolved this frame.
///
/// Detection appends to the buffer and resolution empties it,
/// so it's empty again between frames.
#[derive(Clone, Debug)]
pub struct CollisionBuffer<T> {
    events: Vec<CollisionEvent<T>>,
}

impl<T> Default for CollisionBuffer<T> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<T> CollisionBuffer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, event: CollisionEvent<T>) {
        self.events.push(event);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CollisionEvent<T>> {
        self.events.iter()
    }

    /// Remove all events from the buffer, returning them in the order they were added.
    pub fn drain(&mut self) -> std::vec::Drain<'_, CollisionEvent<T>> {
        self.events.drain(..)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl<T> Extend<CollisionEvent<T>> for CollisionBuffer<T> {
    fn extend<I: IntoIterator<Item = CollisionEvent<T>>>(&mut self, iter: I) {
        self.events.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a CollisionBuffer<T> {
    type Item = &'a CollisionEvent<T>;
    type IntoIter = std::slice::Iter<'a, CollisionEvent<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Decides what kind of collision happened between two entities,
/// for game code to react to.
///
/// Implemented for closures taking the world and the source and target entities.
pub trait Classifier<T> {
    fn classify(&self, world: &hecs::World, source: hecs::Entity, target: hecs::Entity) -> T;
}

impl<T, F> Classifier<T> for F
where
    F: Fn(&hecs::World, hecs::Entity, hecs::Entity) -> T,
{
    #[inline]
    fn classify(&self, world: &hecs::World, source: hecs::Entity, target: hecs::Entity) -> T {
        self(world, source, target)
    }
}
