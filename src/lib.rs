pub mod math;
pub use math::{uv, Angle, Rotor2, Unit, Vec2};

pub mod transform;
pub use transform::Transform;

pub mod physics;
pub use physics::{
    collision::{
        self, Classifier, Collider, ColliderError, ColliderShape, CollisionBuffer, CollisionEvent,
        CollisionLayerMask, ConvexPolygon, Layer, Ray, AABB,
    },
    CollisionDetector, CollisionPipeline, CollisionResolver, CollisionState, DiagonalPolicy,
    FrameCollisions, ResolvedCollision, ResolverParams, TouchSide, Velocity,
};
