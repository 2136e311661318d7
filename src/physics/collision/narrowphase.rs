//! Exact collision checks between pairs of colliders,
//! picking the algorithm based on the shapes involved.

use super::{
    sat,
    sweep::{self, SweepEnd},
    Collider, ColliderShape,
};
use crate::{math as m, transform::Transform};

/// A contact between two colliders, from the point of view of the first one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    pub point: m::Vec2,
    pub normal: m::Vec2,
    pub time: f64,
    pub depth: f64,
}

/// Which algorithm produced a contact. Determines how it gets resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactKind {
    /// Both colliders are boxes and the first one was swept along its frame displacement.
    Swept,
    /// At least one collider is a convex polygon and the contact is a minimum translation vector.
    Polygon,
}

impl ContactKind {
    pub fn of(coll1: &Collider, coll2: &Collider) -> Self {
        if coll1.is_box() && coll2.is_box() {
            ContactKind::Swept
        } else {
            ContactKind::Polygon
        }
    }
}

/// Checks two colliders for intersection.
///
/// The first collider is the one moving: box pairs are swept from its previous position
/// along its transform's delta.
/// Convex colliders must have had their world vertices updated for their current transforms.
pub fn intersection_check(
    coll1: &Collider,
    tr1: &Transform,
    coll2: &Collider,
    tr2: &Transform,
) -> Option<Contact> {
    contact_between(coll1, tr1, coll2, tr2, SweepEnd::Exclusive)
}

/// Checks whether a collision found earlier in the frame is still there.
///
/// Same as [`intersection_check`], except that a box whose movement now ends
/// flush against the other collider still counts,
/// since that is where resolving a swept collision leaves it.
pub fn recheck(
    coll1: &Collider,
    tr1: &Transform,
    coll2: &Collider,
    tr2: &Transform,
) -> Option<Contact> {
    contact_between(coll1, tr1, coll2, tr2, SweepEnd::Inclusive)
}

fn contact_between(
    coll1: &Collider,
    tr1: &Transform,
    coll2: &Collider,
    tr2: &Transform,
    end: SweepEnd,
) -> Option<Contact> {
    match (&coll1.shape, &coll2.shape) {
        (ColliderShape::Rect(bounds1), ColliderShape::Rect(bounds2)) => {
            let hit = sweep::sweep_rect(
                &bounds1.at_position(tr1.previous_position),
                tr1.delta(),
                &bounds2.at_position(tr2.position),
                end,
            )?;
            Some(Contact {
                point: hit.point,
                normal: hit.normal,
                time: hit.time,
                depth: 0.0,
            })
        }
        _ => polygon_polygon(coll1, tr1, coll2, tr2),
    }
}

fn polygon_polygon(
    coll1: &Collider,
    tr1: &Transform,
    coll2: &Collider,
    tr2: &Transform,
) -> Option<Contact> {
    if !coll1.world_aabb(tr1).intersects(&coll2.world_aabb(tr2)) {
        return None;
    }

    let poly1 = coll1.world_polygon(tr1);
    let poly2 = coll2.world_polygon(tr2);
    let pen = sat::polygon_polygon(&poly1, &poly2)?;

    Some(Contact {
        point: (sat::polygon_center(&poly1) + sat::polygon_center(&poly2)) / 2.0,
        normal: pen.normal.into_inner(),
        time: 0.0,
        depth: pen.depth,
    })
}
