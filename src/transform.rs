use crate::math::{self as m, Angle};

/// Position, rotation and scale of an entity, plus the position it had
/// at the end of the previous frame.
///
/// Swept collision detection casts boxes from the previous position to the current one,
/// so movement code should call
/// [`begin_frame`][Self::begin_frame] before moving an entity.
/// Collision resolution is the only part of this crate that writes to a Transform.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde-types", serde(default))]
pub struct Transform {
    pub position: m::Vec2,
    pub previous_position: m::Vec2,
    /// Rotation in radians.
    pub rotation: f64,
    pub scale: m::Vec2,
}

impl Default for Transform {
    fn default() -> Self {
        Self::from_position(m::Vec2::zero())
    }
}

impl Transform {
    /// Create a transform at a position that hasn't moved this frame.
    pub fn from_position(position: m::Vec2) -> Self {
        Transform {
            position,
            previous_position: position,
            rotation: 0.0,
            scale: m::Vec2::one(),
        }
    }

    /// Create a transform that moved from `previous` to `current` this frame.
    pub fn moving(previous: m::Vec2, current: m::Vec2) -> Self {
        Transform {
            previous_position: previous,
            ..Self::from_position(current)
        }
    }

    #[inline]
    pub fn with_rotation(mut self, angle: Angle) -> Self {
        self.rotation = angle.rad();
        self
    }

    #[inline]
    pub fn with_scale(mut self, scale: m::Vec2) -> Self {
        self.scale = scale;
        self
    }

    /// Displacement over the current frame.
    #[inline]
    pub fn delta(&self) -> m::Vec2 {
        self.position - self.previous_position
    }

    /// Roll the current position into the previous one, making the delta zero.
    #[inline]
    pub fn begin_frame(&mut self) {
        self.previous_position = self.position;
    }

    pub fn translate(&mut self, amount: m::Vec2) {
        self.position += amount;
    }
}
