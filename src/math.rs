//! Types, aliases and helper operations for doing math with `ultraviolet`.
use std::f64::consts::PI;
pub use ultraviolet as uv;

pub type Vec2 = uv::DVec2;
pub type Rotor2 = uv::DRotor2;

/// An angle in either degrees or radians.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(serde::Deserialize, serde::Serialize))]
pub enum Angle {
    Rad(f64),
    Deg(f64),
}
impl Angle {
    /// Get the angle as degrees.
    #[inline]
    pub fn deg(&self) -> f64 {
        match self {
            Angle::Rad(rad) => rad * 180.0 / PI,
            Angle::Deg(deg) => *deg,
        }
    }

    /// Get the angle as radians.
    #[inline]
    pub fn rad(&self) -> f64 {
        match self {
            Angle::Rad(rad) => *rad,
            Angle::Deg(deg) => deg * PI / 180.0,
        }
    }
}
impl Default for Angle {
    fn default() -> Self {
        Angle::Rad(0.0)
    }
}

/// A wrapper type to indicate a vector should always be normalized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Unit<T>(T);

impl Unit<Vec2> {
    pub fn new_normalize(v: Vec2) -> Self {
        Unit(v.normalized())
    }

    /// Unwrap into the plain vector.
    #[inline]
    pub fn into_inner(self) -> Vec2 {
        self.0
    }
}

impl<T> std::ops::Deref for Unit<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> std::ops::Neg for Unit<T>
where
    T: std::ops::Neg,
{
    type Output = Unit<<T as std::ops::Neg>::Output>;

    fn neg(self) -> Self::Output {
        Unit(-self.0)
    }
}

// Vec2 utils

#[inline]
pub fn left_normal(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}
