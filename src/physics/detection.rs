//! Finding collisions between colliders and turning them into events.

use std::marker::PhantomData;

use super::collision::{
    narrowphase, BodyRef, BroadPhase, BruteForce, Classifier, Collider, CollisionBuffer,
    CollisionEvent, Contact, LayerIter,
};
use crate::transform::Transform;

/// Detects collisions between every entity with a [`Collider`] and a [`Transform`]
/// and reports them as [`CollisionEvent`]s tagged by a [`Classifier`].
///
/// Active colliders (enabled and not passive) look for collisions with every other enabled
/// collider they share a layer with. Box pairs are swept along the active collider's
/// frame displacement, anything involving a convex polygon uses the separating axis test.
///
/// Detection never moves anything, so it can run as often as needed,
/// but events are only cleared by [`CollisionResolver`][super::CollisionResolver].
pub struct CollisionDetector<C, B = BruteForce> {
    classifier: C,
    _broad_phase: PhantomData<fn() -> B>,
}

impl<C> CollisionDetector<C> {
    /// Create a detector using brute force pairing.
    pub fn new(classifier: C) -> Self {
        Self {
            classifier,
            _broad_phase: PhantomData,
        }
    }
}

impl<C, B: BroadPhase> CollisionDetector<C, B> {
    /// Replace the broad phase algorithm.
    pub fn with_broad_phase<B2: BroadPhase>(self) -> CollisionDetector<C, B2> {
        CollisionDetector {
            classifier: self.classifier,
            _broad_phase: PhantomData,
        }
    }

    /// Refresh the world-space geometry of every collider,
    /// then append one event per shared layer of every collision found to `buffer`.
    ///
    /// Events come out in a deterministic order: by source in query order,
    /// then by target in query order, then by layer in ascending order.
    pub fn detect<T>(&self, world: &mut hecs::World, buffer: &mut CollisionBuffer<T>)
    where
        C: Classifier<T>,
    {
        for (_, (coll, tr)) in world.query_mut::<(&mut Collider, &Transform)>() {
            coll.update_world_vertices(tr);
        }

        let world = &*world;
        let hits = find_hits::<B>(world);

        let event_count_before = buffer.len();
        for hit in hits {
            for layer in hit.layers {
                buffer.push(CollisionEvent {
                    source: hit.source,
                    target: hit.target,
                    point: hit.contact.point,
                    normal: hit.contact.normal,
                    time: hit.contact.time,
                    depth: hit.contact.depth,
                    layer,
                    tag: self.classifier.classify(world, hit.source, hit.target),
                });
            }
        }
        log::debug!(
            "Detected {} collision events",
            buffer.len() - event_count_before
        );
    }
}

/// A pair that passed the narrow phase, waiting to be classified.
struct Hit {
    source: hecs::Entity,
    target: hecs::Entity,
    layers: LayerIter,
    contact: Contact,
}

/// Run the broad and narrow phases.
///
/// The query borrow is released before returning
/// so that classifiers are free to look at any component.
fn find_hits<B: BroadPhase>(world: &hecs::World) -> Vec<Hit> {
    let mut query = world.query::<(&Collider, &Transform)>();
    let bodies: Vec<BodyRef> = query
        .iter()
        .map(|(entity, (coll, tr))| BodyRef { entity, coll, tr })
        .collect();

    let pairs = B::pairs(&bodies);

    let check_pair = |&[source_idx, target_idx]: &[usize; 2]| -> Option<Hit> {
        let source = &bodies[source_idx];
        let target = &bodies[target_idx];
        if !source.coll.layers.shares_layer(&target.coll.layers) {
            return None;
        }
        let contact =
            narrowphase::intersection_check(source.coll, source.tr, target.coll, target.tr)?;
        Some(Hit {
            source: source.entity,
            target: target.entity,
            layers: source.coll.layers.shared_layers(&target.coll.layers),
            contact,
        })
    };

    // rayon's collect keeps the order of the input,
    // so the parallel scan produces exactly the same events as the serial one
    #[cfg(feature = "parallel")]
    let hits = {
        use rayon::prelude::*;
        pairs.par_iter().filter_map(check_pair).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let hits = pairs.iter().filter_map(check_pair).collect();

    hits
}
