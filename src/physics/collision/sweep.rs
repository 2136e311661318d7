//! Continuous collision detection between moving axis-aligned boxes.

use super::{Ray, AABB};
use crate::math as m;

/// Distance a box may start inside a target and still count as touching its surface.
///
/// Placing a box flush against a target leaves it a rounding error away from the surface,
/// possibly on the inside.
pub const CONTACT_SLOP: f64 = 1e-9;

/// The first point of contact between a moving box and a static one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepHit {
    /// Position of the moving box's center at the moment of contact.
    pub point: m::Vec2,
    /// Normal of the target's surface that was hit, pointing against the movement.
    /// Zero if the boxes met exactly at a corner or were already overlapping.
    pub normal: m::Vec2,
    /// Fraction of the displacement travelled before contact.
    pub time: f64,
}

impl SweepHit {
    /// The boxes overlap before moving at all.
    const OVERLAP: SweepHit = SweepHit {
        point: m::Vec2 { x: 0.0, y: 0.0 },
        normal: m::Vec2 { x: 0.0, y: 0.0 },
        time: 0.0,
    };
}

/// Whether a contact exactly at the end of the displacement counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SweepEnd {
    /// Ending the movement flush against the target isn't a collision.
    Exclusive,
    /// Ending flush counts, within [`CONTACT_SLOP`].
    /// Used to check whether a box that was already stopped against a target is still there.
    Inclusive,
}

/// Sweep `moving` along `displacement` and find the first contact with `target`,
/// ignoring contacts at the very end of the displacement.
///
/// `moving` is the box at the start of the movement,
/// so anything it passes through on the way is found, however thin.
///
/// Without displacement this is a plain (strict) intersection test
/// reporting time zero and zero point and normal.
/// Contacts at or past the end of the displacement don't count.
pub fn dynamic_rect_vs_rect(
    moving: &AABB,
    displacement: m::Vec2,
    target: &AABB,
) -> Option<SweepHit> {
    sweep_rect(moving, displacement, target, SweepEnd::Exclusive)
}

/// [`dynamic_rect_vs_rect`] with a choice of how to treat the end of the displacement.
///
/// A box starting less than [`CONTACT_SLOP`] inside the target hits it at time zero
/// if it's moving into the target, and misses it otherwise.
/// One starting deeper inside is reported the same way as an overlap without displacement.
pub fn sweep_rect(
    moving: &AABB,
    displacement: m::Vec2,
    target: &AABB,
    end: SweepEnd,
) -> Option<SweepHit> {
    if displacement == m::Vec2::zero() {
        return moving.intersects(target).then_some(SweepHit::OVERLAP);
    }

    let expanded = target.expanded_by(moving.size());
    let ray = Ray {
        start: moving.center(),
        dir: displacement,
    };
    let hit = ray.cast_aabb(&expanded)?;

    let length = displacement.mag();
    let time = if hit.t < 0.0 && -hit.t * length <= CONTACT_SLOP {
        0.0
    } else {
        hit.t
    };
    if time < 0.0 {
        // the ray starts inside the expanded target, so the boxes already overlap,
        // but a box barely inside and moving away from the surface is left alone
        let slop = m::Vec2::broadcast(CONTACT_SLOP);
        let core = AABB {
            min: target.min + slop,
            max: target.max - slop,
        };
        return moving.intersects(&core).then_some(SweepHit::OVERLAP);
    }

    let before_end = match end {
        SweepEnd::Exclusive => time < 1.0,
        SweepEnd::Inclusive => (time - 1.0) * length <= CONTACT_SLOP,
    };
    before_end.then_some(SweepHit {
        point: hit.point,
        normal: hit.normal,
        time,
    })
}
