//! Broad phase collision detection algorithms
//! are responsible for detecting pairs of possibly intersecting objects
//! for further, more accurate narrow phase inspection.

use super::BodyRef;

/// A broad phase algorithm.
pub trait BroadPhase {
    /// Returns `[source, target]` index pairs into `bodies` of potentially intersecting objects.
    ///
    /// Sources must be active colliders and targets enabled ones,
    /// no body may be paired with itself,
    /// and the pairs must come out in the same order every time for the same input.
    fn pairs(bodies: &[BodyRef<'_>]) -> Vec<[usize; 2]>;
}

/// The simplest possible broad phase algorithm,
/// which pairs every active object with every other enabled object.
/// Very inefficient, but can work for small systems.
pub struct BruteForce;

impl BroadPhase for BruteForce {
    fn pairs(bodies: &[BodyRef<'_>]) -> Vec<[usize; 2]> {
        let mut pairs = Vec::new();
        for (source_idx, source) in bodies.iter().enumerate() {
            if !source.coll.is_active() {
                continue;
            }
            for (target_idx, target) in bodies.iter().enumerate() {
                if target_idx != source_idx && target.coll.enabled {
                    pairs.push([source_idx, target_idx]);
                }
            }
        }

        pairs
    }
}
