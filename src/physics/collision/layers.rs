//! Collision layers and the masks that filter which colliders can touch.

/// Maximum number of distinct layers a [`CollisionLayerMask`] can hold.
pub const MAX_LAYERS: u8 = 64;

/// A single collision layer as reported in collision events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-types", derive(serde::Deserialize, serde::Serialize))]
pub enum Layer {
    Index(u8),
    /// The wildcard layer. Only reported when both sides of a collision are wildcards.
    Any,
}

/// A set of collision layers, plus an optional wildcard that matches any layer.
///
/// Two colliders can collide if their masks share a layer,
/// or if one of them is a wildcard and the other isn't empty.
/// A mask containing only the wildcard counts as non-empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-types", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde-types", serde(default))]
pub struct CollisionLayerMask {
    bits: u64,
    wildcard: bool,
}

impl Default for CollisionLayerMask {
    /// Colliders collide with everything unless told otherwise.
    fn default() -> Self {
        Self::wildcard()
    }
}

impl CollisionLayerMask {
    /// A mask with no layers, which never collides with anything.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            bits: 0,
            wildcard: false,
        }
    }

    /// A mask containing only the wildcard.
    #[inline]
    pub const fn wildcard() -> Self {
        Self {
            bits: 0,
            wildcard: true,
        }
    }

    /// Create a mask containing the given layers.
    ///
    /// # Panics
    /// Panics if any layer is not less than [`MAX_LAYERS`].
    pub fn from_layers(layers: impl IntoIterator<Item = u8>) -> Self {
        layers
            .into_iter()
            .fold(Self::empty(), |mask, layer| mask.with_layer(layer))
    }

    /// Add a layer in a builder-like chain.
    ///
    /// # Panics
    /// Panics if the layer is not less than [`MAX_LAYERS`].
    #[inline]
    pub fn with_layer(mut self, layer: u8) -> Self {
        self.insert(layer);
        self
    }

    /// Add the wildcard in a builder-like chain.
    #[inline]
    pub fn with_wildcard(mut self) -> Self {
        self.wildcard = true;
        self
    }

    /// Add a layer.
    ///
    /// # Panics
    /// Panics if the layer is not less than [`MAX_LAYERS`].
    pub fn insert(&mut self, layer: u8) {
        assert!(
            layer < MAX_LAYERS,
            "Collision layer {layer} out of range, must be less than {MAX_LAYERS}"
        );
        self.bits |= 1_u64 << layer;
    }

    /// Remove a layer. Does nothing if the layer isn't in the mask.
    pub fn remove(&mut self, layer: u8) {
        if layer < MAX_LAYERS {
            self.bits &= !(1_u64 << layer);
        }
    }

    #[inline]
    pub fn contains(&self, layer: u8) -> bool {
        layer < MAX_LAYERS && self.bits & (1_u64 << layer) != 0
    }

    #[inline]
    pub fn is_wildcard(&self) -> bool {
        self.wildcard
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0 && !self.wildcard
    }

    /// Iterate over the layers in this mask in ascending order,
    /// followed by [`Layer::Any`] if the mask has the wildcard.
    #[inline]
    pub fn iter(&self) -> LayerIter {
        LayerIter {
            curr_word: self.bits,
            any_pending: self.wildcard,
        }
    }

    /// Check whether two masks allow their colliders to touch. Symmetric.
    pub fn shares_layer(&self, other: &Self) -> bool {
        (self.wildcard && !other.is_empty())
            || (other.wildcard && !self.is_empty())
            || self.bits & other.bits != 0
    }

    /// The layers a collision between these two masks happens on.
    ///
    /// If one side is a wildcard, this is every layer of the other side.
    /// Otherwise it's the intersection of the two.
    pub fn shared_layers(&self, other: &Self) -> LayerIter {
        if self.wildcard && !other.is_empty() {
            other.iter()
        } else if other.wildcard && !self.is_empty() {
            self.iter()
        } else {
            LayerIter {
                curr_word: self.bits & other.bits,
                any_pending: false,
            }
        }
    }
}

impl FromIterator<u8> for CollisionLayerMask {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self::from_layers(iter)
    }
}

/// Iterator over the layers of a [`CollisionLayerMask`].
#[derive(Clone, Copy, Debug)]
pub struct LayerIter {
    // copy of the mask's bits that we remove bits from as we go
    curr_word: u64,
    any_pending: bool,
}

impl Iterator for LayerIter {
    type Item = Layer;

    fn next(&mut self) -> Option<Self::Item> {
        if self.curr_word != 0 {
            let first_bit_idx = self.curr_word.trailing_zeros();
            self.curr_word ^= 1 << first_bit_idx;
            return Some(Layer::Index(first_bit_idx as u8));
        }
        if self.any_pending {
            self.any_pending = false;
            return Some(Layer::Any);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.curr_word.count_ones() as usize + usize::from(self.any_pending);
        (len, Some(len))
    }
}

impl ExactSizeIterator for LayerIter {}
