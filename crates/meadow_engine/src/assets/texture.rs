//! Decoded texture pixels

use std::path::Path;

use super::AssetError;

/// RGBA8 pixels ready for upload by the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureData {
    /// Raw RGBA pixel data, row major
    pub data: Vec<u8>,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl TextureData {
    /// Decode an image file; `id` names the texture in errors
    pub fn from_file(id: &str, path: &Path) -> Result<Self, AssetError> {
        log::debug!("Loading texture '{id}' from {}", path.display());

        let img = image::open(path).map_err(|err| match err {
            image::ImageError::IoError(io) => AssetError::Unavailable {
                id: id.to_string(),
                reason: io.to_string(),
            },
            other => AssetError::Decode {
                id: id.to_string(),
                reason: other.to_string(),
            },
        })?;

        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        log::info!("Loaded texture '{id}' ({width}x{height})");

        Ok(Self {
            data: rgba.into_raw(),
            width,
            height,
        })
    }

    /// Decode an in-memory image
    pub fn from_bytes(id: &str, bytes: &[u8]) -> Result<Self, AssetError> {
        let rgba = image::load_from_memory(bytes)
            .map_err(|err| AssetError::Decode {
                id: id.to_string(),
                reason: err.to_string(),
            })?
            .to_rgba8();
        let (width, height) = rgba.dimensions();

        Ok(Self {
            data: rgba.into_raw(),
            width,
            height,
        })
    }

    /// A single-colour texture
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        let pixels = width as usize * height as usize;
        Self {
            data: color.repeat(pixels),
            width,
            height,
        }
    }

    /// Size of the pixel data in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_color() {
        let texture = TextureData::solid_color(4, 2, [255, 0, 0, 255]);
        assert_eq!(texture.size_bytes(), 4 * 2 * 4);
        assert_eq!(&texture.data[4..8], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_garbage_bytes_are_a_decode_error() {
        let result = TextureData::from_bytes("junk", b"definitely not an image");
        assert!(matches!(result, Err(AssetError::Decode { ref id, .. }) if id == "junk"));
    }
}
