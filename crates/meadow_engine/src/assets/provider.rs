//! File-backed texture provider

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::{AssetError, TextureData, TextureHandle, TextureProvider};
use crate::foundation::collections::HandleMap;

/// Loaded textures, addressable by handle or id
#[derive(Debug, Default)]
pub struct TextureLibrary {
    textures: HandleMap<TextureData>,
    by_id: HashMap<String, TextureHandle>,
}

impl TextureLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a texture under `id`, replacing nothing if `id` is already known
    pub fn insert(&mut self, id: &str, texture: TextureData) -> TextureHandle {
        if let Some(handle) = self.by_id.get(id) {
            return *handle;
        }
        let handle = TextureHandle::new(self.textures.insert(texture));
        self.by_id.insert(id.to_string(), handle);
        handle
    }

    /// Handle of a previously stored id
    pub fn handle(&self, id: &str) -> Option<TextureHandle> {
        self.by_id.get(id).copied()
    }

    /// Pixels behind a handle
    pub fn get(&self, handle: TextureHandle) -> Option<&TextureData> {
        self.textures.get(handle.key())
    }

    /// Number of textures
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Whether the library is empty
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

/// Loads PNG/JPEG textures from a directory with the `image` crate
///
/// Each id is a file name relative to the root and is decoded at most once.
#[derive(Debug)]
pub struct ImageTextureProvider {
    root: PathBuf,
    library: TextureLibrary,
}

impl ImageTextureProvider {
    /// Create a provider reading from `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            library: TextureLibrary::new(),
        }
    }

    /// Directory textures are read from
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Everything loaded so far
    pub fn library(&self) -> &TextureLibrary {
        &self.library
    }
}

impl TextureProvider for ImageTextureProvider {
    fn load(&mut self, id: &str) -> Result<TextureHandle, AssetError> {
        if let Some(handle) = self.library.handle(id) {
            return Ok(handle);
        }

        let texture = TextureData::from_file(id, &self.root.join(id))?;
        Ok(self.library.insert(id, texture))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{resolve_material, MaterialRef};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("meadow_assets_{name}_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_loads_png_once() {
        let dir = scratch_dir("png");
        image::RgbaImage::from_pixel(2, 3, image::Rgba([10, 20, 30, 255]))
            .save(dir.join("leaves.png"))
            .unwrap();

        let mut provider = ImageTextureProvider::new(&dir);
        let first = provider.load("leaves.png").unwrap();
        let second = provider.load("leaves.png").unwrap();

        assert_eq!(first, second);
        assert_eq!(provider.library().len(), 1);
        let texture = provider.library().get(first).unwrap();
        assert_eq!((texture.width, texture.height), (2, 3));
        assert_eq!(&texture.data[0..4], &[10, 20, 30, 255]);

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_missing_file_is_unavailable_and_falls_back() {
        let dir = scratch_dir("missing");
        let mut provider = ImageTextureProvider::new(&dir);

        assert!(matches!(
            provider.load("barkTexture.jpg"),
            Err(AssetError::Unavailable { ref id, .. }) if id == "barkTexture.jpg"
        ));

        let material = resolve_material(&mut provider, "barkTexture.jpg", [0.4, 0.25, 0.1, 1.0]);
        assert_eq!(material, MaterialRef::solid([0.4, 0.25, 0.1, 1.0]));

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_corrupt_file_is_a_decode_error() {
        let dir = scratch_dir("corrupt");
        std::fs::write(dir.join("cloud1.png"), b"not a png").unwrap();

        let mut provider = ImageTextureProvider::new(&dir);
        assert!(matches!(provider.load("cloud1.png"), Err(AssetError::Decode { .. })));

        std::fs::remove_dir_all(dir).ok();
    }
}
