use super::{sat, CollisionLayerMask, AABB};
use crate::{math as m, transform::Transform};

/// Errors from constructing colliders.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ColliderError {
    #[error("A convex collider requires at least 3 vertices, got {0}")]
    TooFewVertices(usize),
}

/// A component that allows a game object to collide with others.
/// Note that a [`Transform`][crate::Transform] component must also be present.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(serde::Deserialize, serde::Serialize))]
pub struct Collider {
    pub shape: ColliderShape,
    #[cfg_attr(feature = "serde-types", serde(default))]
    pub layers: CollisionLayerMask,
    /// Passive colliders never look for collisions themselves,
    /// but active colliders can still collide with them.
    #[cfg_attr(feature = "serde-types", serde(default))]
    pub passive: bool,
    /// Disabled colliders don't participate in collision detection at all.
    #[cfg_attr(feature = "serde-types", serde(default = "default_enabled"))]
    pub enabled: bool,
}

#[cfg(feature = "serde-types")]
fn default_enabled() -> bool {
    true
}

/// The physical shape of a collider.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(serde::Deserialize, serde::Serialize))]
pub enum ColliderShape {
    /// An axis-aligned box in the owner's local space.
    /// Only translated by the owner's transform, never rotated or scaled.
    Rect(AABB),
    Convex(ConvexPolygon),
}

impl Collider {
    fn from_shape(shape: ColliderShape) -> Self {
        Collider {
            shape,
            layers: CollisionLayerMask::default(),
            passive: false,
            enabled: true,
        }
    }

    /// Create a box collider from bounds in local space.
    pub fn new_rect(bounds: AABB) -> Self {
        Self::from_shape(ColliderShape::Rect(bounds))
    }

    /// Create a box collider with its top left corner at `offset` from the owner's position.
    pub fn new_box(offset: m::Vec2, size: m::Vec2) -> Self {
        Self::new_rect(AABB::new(offset, size))
    }

    /// Create a convex polygon collider from local-space vertices in clockwise order.
    ///
    /// Convexity isn't checked. Concave polygons give wrong results in collision detection.
    pub fn new_convex(vertices: Vec<m::Vec2>) -> Result<Self, ColliderError> {
        Ok(Self::from_shape(ColliderShape::Convex(ConvexPolygon::new(
            vertices,
        )?)))
    }

    #[inline]
    pub fn with_layers(mut self, layers: CollisionLayerMask) -> Self {
        self.layers = layers;
        self
    }

    #[inline]
    pub fn with_passive(mut self, passive: bool) -> Self {
        self.passive = passive;
        self
    }

    #[inline]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Make a convex collider ignore its transform's rotation.
    /// Has no effect on box colliders, which never rotate.
    #[inline]
    pub fn with_ignore_transform_rotation(mut self, ignore: bool) -> Self {
        if let ColliderShape::Convex(poly) = &mut self.shape {
            poly.ignore_transform_rotation = ignore;
        }
        self
    }

    /// Whether this collider goes looking for collisions.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.enabled && !self.passive
    }

    #[inline]
    pub fn is_box(&self) -> bool {
        matches!(self.shape, ColliderShape::Rect(_))
    }

    /// Bring cached world-space geometry up to date with a transform.
    pub fn update_world_vertices(&mut self, tr: &Transform) {
        if let ColliderShape::Convex(poly) = &mut self.shape {
            poly.update_world_vertices(tr);
        }
    }

    /// Bounding box in world space.
    ///
    /// For convex colliders this is the box computed in the last
    /// [`update_world_vertices`][Self::update_world_vertices].
    pub fn world_aabb(&self, tr: &Transform) -> AABB {
        match &self.shape {
            ColliderShape::Rect(bounds) => bounds.at_position(tr.position),
            ColliderShape::Convex(poly) => poly.aabb,
        }
    }

    /// The collider as a polygon in world space.
    pub fn world_polygon(&self, tr: &Transform) -> WorldPolygon<'_> {
        match &self.shape {
            ColliderShape::Rect(bounds) => WorldPolygon::Quad(sat::box_to_polygon(bounds, tr)),
            ColliderShape::Convex(poly) => WorldPolygon::Vertices(&poly.world_vertices),
        }
    }
}

/// A world-space polygon that's either computed on the fly from a box
/// or borrowed from a convex collider's cache.
#[derive(Clone, Copy, Debug)]
pub enum WorldPolygon<'a> {
    Quad([m::Vec2; 4]),
    Vertices(&'a [m::Vec2]),
}

impl std::ops::Deref for WorldPolygon<'_> {
    type Target = [m::Vec2];

    fn deref(&self) -> &Self::Target {
        match self {
            WorldPolygon::Quad(q) => q,
            WorldPolygon::Vertices(v) => v,
        }
    }
}

/// A convex polygon with vertices in clockwise order.
///
/// Model vertices are in the owner's local space.
/// World vertices and the bounding box are derived from them and a transform
/// once per frame by collision detection.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(
    feature = "serde-types",
    serde(try_from = "ConvexPolygonDesc", into = "ConvexPolygonDesc")
)]
pub struct ConvexPolygon {
    model_vertices: Vec<m::Vec2>,
    world_vertices: Vec<m::Vec2>,
    aabb: AABB,
    /// Treat the transform's rotation as zero.
    /// Used for shapes whose rotation is already baked into the model vertices.
    pub ignore_transform_rotation: bool,
}

impl ConvexPolygon {
    pub fn new(model_vertices: Vec<m::Vec2>) -> Result<Self, ColliderError> {
        if model_vertices.len() < 3 {
            return Err(ColliderError::TooFewVertices(model_vertices.len()));
        }
        let world_vertices = model_vertices.clone();
        let aabb = sat::compute_aabb(&world_vertices);
        Ok(Self {
            model_vertices,
            world_vertices,
            aabb,
            ignore_transform_rotation: false,
        })
    }

    #[inline]
    pub fn model_vertices(&self) -> &[m::Vec2] {
        &self.model_vertices
    }

    #[inline]
    pub fn world_vertices(&self) -> &[m::Vec2] {
        &self.world_vertices
    }

    #[inline]
    pub fn aabb(&self) -> AABB {
        self.aabb
    }

    /// Scale, then rotate, then translate the model vertices into world space,
    /// and recompute the bounding box.
    pub fn update_world_vertices(&mut self, tr: &Transform) {
        let rotation = if self.ignore_transform_rotation {
            m::Rotor2::identity()
        } else {
            m::Rotor2::from_angle(tr.rotation)
        };
        for (world, model) in self.world_vertices.iter_mut().zip(&self.model_vertices) {
            *world = rotation * (*model * tr.scale) + tr.position;
        }
        self.aabb = sat::compute_aabb(&self.world_vertices);
    }
}

/// Serialized form of a [`ConvexPolygon`], without the derived world-space data.
#[cfg(feature = "serde-types")]
#[derive(serde::Deserialize, serde::Serialize)]
struct ConvexPolygonDesc {
    vertices: Vec<[f64; 2]>,
    #[serde(default)]
    ignore_transform_rotation: bool,
}

#[cfg(feature = "serde-types")]
impl TryFrom<ConvexPolygonDesc> for ConvexPolygon {
    type Error = ColliderError;

    fn try_from(desc: ConvexPolygonDesc) -> Result<Self, Self::Error> {
        let vertices = desc.vertices.into_iter().map(m::Vec2::from).collect();
        let mut poly = ConvexPolygon::new(vertices)?;
        poly.ignore_transform_rotation = desc.ignore_transform_rotation;
        Ok(poly)
    }
}

#[cfg(feature = "serde-types")]
impl From<ConvexPolygon> for ConvexPolygonDesc {
    fn from(poly: ConvexPolygon) -> Self {
        ConvexPolygonDesc {
            vertices: poly.model_vertices.into_iter().map(<[f64; 2]>::from).collect(),
            ignore_transform_rotation: poly.ignore_transform_rotation,
        }
    }
}
