mod aabb;
pub use aabb::{Ray, RayHit, AABB};

mod collider;
pub use collider::{Collider, ColliderError, ColliderShape, ConvexPolygon, WorldPolygon};

mod layers;
pub use layers::{CollisionLayerMask, Layer, LayerIter, MAX_LAYERS};

mod event;
pub use event::{Classifier, CollisionBuffer, CollisionEvent};

pub mod broadphase;
pub use broadphase::{BroadPhase, BruteForce};

pub mod narrowphase;
pub use narrowphase::{Contact, ContactKind};

pub mod sat;
pub mod sweep;

use crate::transform::Transform;

/// References to the parts of an entity that we need to find out if it collides with anything.
/// Used internally in collision detection, exposed to allow custom broad phase algorithms.
#[derive(Clone, Copy, Debug)]
pub struct BodyRef<'a> {
    pub entity: hecs::Entity,
    pub coll: &'a Collider,
    pub tr: &'a Transform,
}
