use crate::math as m;

/// Axis-aligned bounding box with floating point bounds.
///
/// The y axis grows downward in the games this is used with, so `min.y` is the top edge.
/// Nothing here depends on that except the naming of [`top`][Self::top] and [`bottom`][Self::bottom].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(serde::Deserialize, serde::Serialize))]
pub struct AABB {
    pub min: m::Vec2,
    pub max: m::Vec2,
}

impl AABB {
    /// Create a box from its top left corner and size.
    #[inline]
    pub fn new(position: m::Vec2, size: m::Vec2) -> Self {
        Self {
            min: position,
            max: position + size,
        }
    }

    /// Place local-space bounds at an entity's position.
    #[inline]
    pub fn at_position(&self, position: m::Vec2) -> Self {
        Self {
            min: self.min + position,
            max: self.max + position,
        }
    }

    /// The smallest box containing all the given points, or `None` if there are no points.
    pub fn from_points(points: &[m::Vec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut aabb = AABB {
            min: *first,
            max: *first,
        };
        for p in rest {
            aabb.min = aabb.min.min_by_component(*p);
            aabb.max = aabb.max.max_by_component(*p);
        }
        Some(aabb)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn size(&self) -> m::Vec2 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> m::Vec2 {
        self.min + self.size() / 2.0
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.max.x
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.max.y
    }

    /// Strict overlap test. Boxes that only share an edge don't intersect.
    #[inline]
    pub fn intersects(&self, other: &AABB) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Minkowski sum of this box and another box of the given size centered at the origin.
    ///
    /// Casting the other box's center as a point against the result
    /// is equivalent to sweeping the whole box against this one.
    #[inline]
    pub fn expanded_by(&self, size: m::Vec2) -> Self {
        AABB::new(self.min - size / 2.0, self.size() + size)
    }

    /// The four corners in clockwise order (with y pointing down), starting from the top left.
    #[inline]
    pub fn corners(&self) -> [m::Vec2; 4] {
        [
            self.min,
            m::Vec2::new(self.max.x, self.min.y),
            self.max,
            m::Vec2::new(self.min.x, self.max.y),
        ]
    }
}

/// A ray with a start point and a direction.
///
/// The direction is not normalized: distances along the ray are measured in multiples of it,
/// so a ray along a frame's displacement reports hits as fractions of that frame.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub start: m::Vec2,
    pub dir: m::Vec2,
}

/// Result of a ray hitting an [`AABB`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Distance along the ray to the entry point, in multiples of the ray's direction.
    pub t: f64,
    pub point: m::Vec2,
    /// Normal of the surface that was hit first.
    /// Zero if the ray entered exactly through a corner.
    pub normal: m::Vec2,
}

impl Ray {
    /// Slab test of this ray against a box.
    ///
    /// Returns `None` if the ray misses, points away from the box,
    /// or lies exactly on a slab boundary along an axis it doesn't move on
    /// (which makes the slab distances NaN).
    /// A ray starting inside the box hits it at a negative distance.
    pub fn cast_aabb(&self, target: &AABB) -> Option<RayHit> {
        // zero direction components become signed infinities
        let inv_dir = m::Vec2::one() / self.dir;
        let mut entry = (target.min - self.start) * inv_dir;
        let mut exit = (target.max - self.start) * inv_dir;

        if entry.x.is_nan() || entry.y.is_nan() || exit.x.is_nan() || exit.y.is_nan() {
            return None;
        }

        if entry.x > exit.x {
            std::mem::swap(&mut entry.x, &mut exit.x);
        }
        if entry.y > exit.y {
            std::mem::swap(&mut entry.y, &mut exit.y);
        }

        if entry.x > exit.y || entry.y > exit.x {
            return None;
        }

        let t = entry.x.max(entry.y);
        let t_exit = exit.x.min(exit.y);
        if t_exit < 0.0 {
            return None;
        }

        let normal = if entry.x > entry.y {
            if inv_dir.x < 0.0 {
                m::Vec2::new(1.0, 0.0)
            } else {
                m::Vec2::new(-1.0, 0.0)
            }
        } else if entry.x < entry.y {
            if inv_dir.y < 0.0 {
                m::Vec2::new(0.0, 1.0)
            } else {
                m::Vec2::new(0.0, -1.0)
            }
        } else {
            m::Vec2::zero()
        };

        Some(RayHit {
            t,
            point: self.start + t * self.dir,
            normal,
        })
    }
}
