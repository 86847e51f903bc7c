//! Texture assets
//!
//! Textures are resolved once, while the scene is composed. A texture that
//! cannot be loaded never aborts composition: the entity gets a solid colour
//! material instead and a warning is logged.

pub mod texture;
pub mod provider;

pub use texture::TextureData;
pub use provider::{ImageTextureProvider, TextureLibrary};

use thiserror::Error;

use crate::foundation::collections::TypedHandle;

/// Handle to a loaded texture
pub type TextureHandle = TypedHandle<TextureData>;

/// Asset loading errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// The texture could not be found or read
    #[error("Texture '{id}' unavailable: {reason}")]
    Unavailable {
        /// Texture id as requested
        id: String,
        /// Underlying cause
        reason: String,
    },

    /// The file was read but is not a decodable image
    #[error("Texture '{id}' could not be decoded: {reason}")]
    Decode {
        /// Texture id as requested
        id: String,
        /// Underlying cause
        reason: String,
    },
}

/// Source of textures for the scene composer
pub trait TextureProvider {
    /// Load (or fetch from cache) the texture named `id`
    fn load(&mut self, id: &str) -> Result<TextureHandle, AssetError>;
}

/// Material attached to a renderable entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaterialRef {
    /// Sample a texture, multiplied by `tint`
    Textured {
        /// Texture to sample
        texture: TextureHandle,
        /// RGBA multiplier
        tint: [f32; 4],
    },
    /// Flat colour
    Solid {
        /// RGBA colour
        color: [f32; 4],
    },
}

impl MaterialRef {
    /// Flat colour material
    pub fn solid(color: [f32; 4]) -> Self {
        Self::Solid { color }
    }

    /// Colour handed to the renderer
    pub fn color(&self) -> [f32; 4] {
        match self {
            Self::Textured { tint, .. } => *tint,
            Self::Solid { color } => *color,
        }
    }

    /// Texture slot for the renderer, if textured
    pub fn texture_slot(&self) -> Option<u32> {
        match self {
            Self::Textured { texture, .. } => Some(texture.index()),
            Self::Solid { .. } => None,
        }
    }

    /// Whether this material samples a texture
    pub fn is_textured(&self) -> bool {
        matches!(self, Self::Textured { .. })
    }
}

/// Load `id` through `provider`, falling back to a solid `fallback` colour
pub fn resolve_material(provider: &mut dyn TextureProvider, id: &str, fallback: [f32; 4]) -> MaterialRef {
    match provider.load(id) {
        Ok(texture) => MaterialRef::Textured {
            texture,
            tint: [1.0, 1.0, 1.0, 1.0],
        },
        Err(err) => {
            log::warn!("{err}; using solid colour");
            MaterialRef::solid(fallback)
        }
    }
}
