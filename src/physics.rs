use crate::{math as m, transform::Transform};

pub mod collision;
pub use collision::{
    BroadPhase, BruteForce, Classifier, Collider, ColliderShape, CollisionBuffer, CollisionEvent,
    CollisionLayerMask, Layer,
};

pub mod detection;
pub use detection::CollisionDetector;

pub mod resolution;
pub use resolution::{
    CollisionResolver, DiagonalPolicy, ResolvedCollision, ResolverParams, TouchSide,
};

/// Velocity of an object.
///
/// Movement code integrates this into the [`Transform`],
/// and collision resolution zeroes the parts of it that move into obstacles.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(serde::Deserialize, serde::Serialize))]
pub struct Velocity {
    /// Linear velocity in units per second.
    pub linear: m::Vec2,
}

impl Velocity {
    #[inline]
    pub fn new(linear: m::Vec2) -> Self {
        Self { linear }
    }

    /// Start a new frame on the transform and move it by this velocity over `dt` seconds,
    /// so that the movement becomes the transform's delta for swept collision detection.
    pub fn apply_to_transform(&self, dt: f64, tr: &mut Transform) {
        tr.begin_frame();
        tr.translate((*self * dt).linear);
    }
}

impl std::ops::Mul<f64> for Velocity {
    type Output = Velocity;

    fn mul(self, rhs: f64) -> Self::Output {
        Velocity {
            linear: self.linear * rhs,
        }
    }
}

/// Marks whether an entity took part in a resolved collision during the last resolution pass.
///
/// Inserted by [`CollisionResolver`] on entities that don't have one yet.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CollisionState {
    pub is_colliding: bool,
    /// Number of resolved collisions the entity was part of, as either source or target.
    pub contact_count: u32,
}

/// Everything that happened during one [`CollisionPipeline::tick`].
#[derive(Clone, Debug)]
pub struct FrameCollisions<T> {
    /// All events found by detection, in detection order.
    pub events: Vec<CollisionEvent<T>>,
    /// The events that passed the resolver's filter and were still colliding when resolved,
    /// in resolution order.
    pub resolved: Vec<ResolvedCollision<T>>,
}

/// Collision detection and resolution together, along with the buffer between them.
pub struct CollisionPipeline<T, C, B = BruteForce> {
    pub detector: CollisionDetector<C, B>,
    pub resolver: CollisionResolver<T>,
    buffer: CollisionBuffer<T>,
}

impl<T, C: Classifier<T>> CollisionPipeline<T, C> {
    /// Create a pipeline with a default resolver.
    pub fn new(classifier: C) -> Self {
        Self {
            detector: CollisionDetector::new(classifier),
            resolver: CollisionResolver::default(),
            buffer: CollisionBuffer::new(),
        }
    }
}

impl<T, C: Classifier<T>, B: BroadPhase> CollisionPipeline<T, C, B> {
    #[inline]
    pub fn with_resolver(mut self, resolver: CollisionResolver<T>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Events waiting for resolution. Always empty between ticks.
    #[inline]
    pub fn buffer(&self) -> &CollisionBuffer<T> {
        &self.buffer
    }

    /// Detect and resolve collisions for one frame.
    /// Call after moving things for the frame.
    pub fn tick(&mut self, world: &mut hecs::World) -> FrameCollisions<T>
    where
        T: Clone,
    {
        self.detector.detect(world, &mut self.buffer);
        let events = self.buffer.iter().cloned().collect();
        let resolved = self.resolver.resolve(world, &mut self.buffer);
        FrameCollisions { events, resolved }
    }
}
