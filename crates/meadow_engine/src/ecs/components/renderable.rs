//! Renderable component
//!
//! Holds the material an entity was given at composition time. Materials are
//! resolved exactly once; the per-frame path only copies them into the
//! snapshot.

use crate::assets::MaterialRef;
use crate::ecs::Component;

/// Component for entities that can be rendered
#[derive(Debug, Clone, PartialEq)]
pub struct RenderableComponent {
    /// Material resolved by the composer
    pub material: MaterialRef,

    /// Opacity (0.0 = transparent, 1.0 = opaque)
    pub opacity: f32,

    /// Whether this object is visible
    pub visible: bool,
}

impl Component for RenderableComponent {}

impl RenderableComponent {
    /// Create an opaque, visible renderable
    pub fn new(material: MaterialRef) -> Self {
        Self {
            material,
            opacity: 1.0,
            visible: true,
        }
    }

    /// Builder pattern: set opacity
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }
}
