//! Separating axis tests between convex polygons.

use super::AABB;
use crate::{
    math::{self as m, Unit},
    transform::Transform,
};

/// Edges shorter than this (squared) don't produce a separating axis.
const DEGENERATE_EDGE_LEN_SQ: f64 = 1e-12;

/// Minimum translation vector between two overlapping polygons.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Penetration {
    /// Unit normal pointing from the first polygon's centroid towards the second's.
    pub normal: Unit<m::Vec2>,
    pub depth: f64,
}

/// Check two convex polygons for overlap and find the minimum translation vector.
///
/// Polygons that merely touch (zero overlap on some axis) don't count as overlapping.
/// Returns `None` if either polygon has no non-degenerate edges.
pub fn polygon_polygon(poly_a: &[m::Vec2], poly_b: &[m::Vec2]) -> Option<Penetration> {
    let mut best: Option<Penetration> = None;

    for axis in edge_normals(poly_a).chain(edge_normals(poly_b)) {
        let (min_a, max_a) = project_polygon(poly_a, *axis);
        let (min_b, max_b) = project_polygon(poly_b, *axis);

        if min_a >= max_b || min_b >= max_a {
            return None;
        }

        let overlap = (max_a - min_b).min(max_b - min_a);
        if best.map_or(true, |b| overlap < b.depth) {
            best = Some(Penetration {
                normal: axis,
                depth: overlap,
            });
        }
    }

    let mut pen = best?;
    let direction = polygon_center(poly_b) - polygon_center(poly_a);
    if direction.dot(*pen.normal) < 0.0 {
        pen.normal = -pen.normal;
    }
    Some(pen)
}

/// Normalized perpendiculars of every non-degenerate edge of a polygon.
fn edge_normals(poly: &[m::Vec2]) -> impl '_ + Iterator<Item = Unit<m::Vec2>> {
    poly.iter()
        .zip(poly.iter().cycle().skip(1))
        .filter_map(|(curr, next)| {
            let axis = m::left_normal(*next - *curr);
            let len_sq = axis.mag_sq();
            if len_sq < DEGENERATE_EDGE_LEN_SQ {
                None
            } else {
                Some(Unit::new_normalize(axis))
            }
        })
}

/// Project every vertex of a polygon onto an axis, returning the min and max of the projections.
pub fn project_polygon(poly: &[m::Vec2], axis: m::Vec2) -> (f64, f64) {
    poly.iter()
        .map(|v| v.dot(axis))
        .fold((f64::MAX, f64::MIN), |(min, max), p| (min.min(p), max.max(p)))
}

/// Arithmetic mean of a polygon's vertices.
pub fn polygon_center(poly: &[m::Vec2]) -> m::Vec2 {
    poly.iter().copied().sum::<m::Vec2>() / poly.len() as f64
}

/// The corners of a box collider placed at a transform's position,
/// in the same order as [`AABB::corners`].
/// Rotation and scale are ignored, as they are for box colliders in general.
#[inline]
pub fn box_to_polygon(bounds: &AABB, tr: &Transform) -> [m::Vec2; 4] {
    bounds.at_position(tr.position).corners()
}

/// Bounding box of a set of vertices, used to reject polygon pairs before running SAT.
/// An empty set gives a zero-sized box at the origin.
pub fn compute_aabb(vertices: &[m::Vec2]) -> AABB {
    AABB::from_points(vertices).unwrap_or(AABB {
        min: m::Vec2::zero(),
        max: m::Vec2::zero(),
    })
}
