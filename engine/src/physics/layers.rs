//! Layer masks
//!
//! Every collider lives on one of 32 layers. A probe carries a [`LayerMask`]
//! and only sees colliders whose layer bit is set in it.

use serde::{Deserialize, Serialize};

/// Number of addressable layers.
pub const LAYER_COUNT: u32 = 32;

/// Bit set of scene layers a probe may intersect.
///
/// Serializes as a plain integer so configs can write `"layer_mask": 5`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Hits nothing.
    pub const NONE: Self = Self(0);
    /// Hits every layer.
    pub const ALL: Self = Self(u32::MAX);
    /// Only layer 0.
    pub const DEFAULT: Self = Self(1);

    /// Mask containing a single layer. Layers past 31 yield an empty mask.
    pub fn from_layer(layer: u32) -> Self {
        if layer < LAYER_COUNT {
            Self(1 << layer)
        } else {
            Self::NONE
        }
    }

    /// Returns a copy of this mask with `layer` added.
    pub fn with_layer(self, layer: u32) -> Self {
        Self(self.0 | Self::from_layer(layer).0)
    }

    /// Returns a copy of this mask with `layer` removed.
    pub fn without_layer(self, layer: u32) -> Self {
        Self(self.0 & !Self::from_layer(layer).0)
    }

    #[inline]
    pub fn contains_layer(self, layer: u32) -> bool {
        layer < LAYER_COUNT && self.0 & (1 << layer) != 0
    }

    #[inline]
    pub fn intersects(self, other: LayerMask) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::ops::BitOr for LayerMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitAnd for LayerMask {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_layer_zero() {
        let mask = LayerMask::default();
        assert!(mask.contains_layer(0));
        assert!(!mask.contains_layer(1));
    }

    #[test]
    fn test_with_and_without_layer() {
        let mask = LayerMask::NONE.with_layer(3).with_layer(7);
        assert_eq!(mask.0, (1 << 3) | (1 << 7));
        assert!(mask.contains_layer(7));

        let mask = mask.without_layer(7);
        assert!(!mask.contains_layer(7));
        assert!(mask.contains_layer(3));
    }

    #[test]
    fn test_out_of_range_layer() {
        assert!(LayerMask::from_layer(32).is_empty());
        assert!(!LayerMask::ALL.contains_layer(40));
    }

    #[test]
    fn test_bit_ops() {
        let a = LayerMask::from_layer(1);
        let b = LayerMask::from_layer(2);
        assert!((a | b).intersects(b));
        assert!((a & b).is_empty());
    }

    #[test]
    fn test_serializes_as_integer() {
        let json = serde_json::to_string(&LayerMask(5)).unwrap();
        assert_eq!(json, "5");
        let mask: LayerMask = serde_json::from_str("12").unwrap();
        assert_eq!(mask, LayerMask(12));
    }
}
