//! Entity implementation

use slotmap::Key;

slotmap::new_key_type! {
    /// Entity identifier
    ///
    /// Generational key into the world's transform store. Stale keys never
    /// alias a different entity.
    pub struct Entity;
}

impl Entity {
    /// Slot index of this entity, stable for the session
    pub fn id(&self) -> u32 {
        // Low 32 bits of the ffi form are the slot index
        (self.data().as_ffi() & 0xffff_ffff) as u32
    }
}

/// What an entity depicts
///
/// Used by the renderer to pick a mesh and by systems to find their targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Ground platform
    Platform,
    /// Static sun sphere
    Sun,
    /// Layered cone mountain
    Mountain,
    /// Tree root (groups trunk and canopy)
    Tree,
    /// Swaying tree trunk
    TreeTrunk,
    /// Swaying tree canopy
    TreeCanopy,
    /// Blooming flower
    Flower,
    /// Drifting cloud
    Cloud,
    /// Keyboard-steered butterfly
    Butterfly,
    /// Orbiting moon
    Moon,
}

impl EntityKind {
    /// Stable numeric code handed to the renderer
    pub fn code(self) -> u32 {
        match self {
            Self::Platform => 0,
            Self::Sun => 1,
            Self::Mountain => 2,
            Self::Tree => 3,
            Self::TreeTrunk => 4,
            Self::TreeCanopy => 5,
            Self::Flower => 6,
            Self::Cloud => 7,
            Self::Butterfly => 8,
            Self::Moon => 9,
        }
    }
}
