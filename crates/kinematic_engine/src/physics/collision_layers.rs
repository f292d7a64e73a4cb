//! Collision layer system for filtering raycast queries
//!
//! Based on Game Engine Architecture 3rd Edition, Section 13.3.8:
//! "Most games need to filter collisions... This is typically done via
//! collision layers or groups."

use bitflags::bitflags;

bitflags! {
    /// Bit mask selecting which scene layers a query may hit
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LayerMask: u32 {
        /// Player character layer
        const PLAYER = 1 << 0;

        /// Enemy character layer
        const ENEMY = 1 << 1;

        /// Projectiles (bullets, missiles, etc.)
        const PROJECTILE = 1 << 2;

        /// Static environment geometry
        const ENVIRONMENT = 1 << 3;

        /// Trigger volumes (no physical response)
        const TRIGGER = 1 << 4;

        /// Debris and small physics objects
        const DEBRIS = 1 << 5;

        /// Moving platforms
        const PLATFORM = 1 << 6;

        /// Pickups and collectibles
        const PICKUP = 1 << 7;
    }
}

impl LayerMask {
    /// Mask matching every layer, including user-defined bits
    pub const ALL: Self = Self::from_bits_retain(u32::MAX);

    /// Mask matching no layer
    pub const NONE: Self = Self::empty();

    /// Whether an object on `layer` passes this query mask
    pub fn allows(self, layer: Self) -> bool {
        self.intersects(layer)
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        Self::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_matching_layer() {
        let mask = LayerMask::ENVIRONMENT | LayerMask::PLATFORM;
        assert!(mask.allows(LayerMask::ENVIRONMENT));
        assert!(mask.allows(LayerMask::PLATFORM));
        assert!(!mask.allows(LayerMask::ENEMY));
    }

    #[test]
    fn test_all_and_none() {
        assert!(LayerMask::ALL.allows(LayerMask::DEBRIS));
        // Custom bits outside the named set still match ALL
        assert!(LayerMask::ALL.allows(LayerMask::from_bits_retain(1 << 20)));
        assert!(!LayerMask::NONE.allows(LayerMask::PLAYER));
    }
}
