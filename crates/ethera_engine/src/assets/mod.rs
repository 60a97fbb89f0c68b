//! Asset management system
//!
//! Resolves classpath-style resource paths against a list of search roots and
//! caches decoded images so spritesheets sharing a file share its pixels.

use crate::config::AssetConfig;
use image::RgbaImage;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Prefix accepted (and ignored) in resource paths
pub const CLASSPATH_PREFIX: &str = "classpath:";

/// Asset management system
pub struct AssetManager {
    search_paths: Vec<PathBuf>,
    images: HashMap<String, Arc<RgbaImage>>,
}

impl AssetManager {
    /// Create a new asset manager
    pub fn new(config: &AssetConfig) -> Self {
        Self::with_search_paths(config.search_paths.clone())
    }

    /// Create an asset manager with explicit search roots
    pub fn with_search_paths(search_paths: Vec<PathBuf>) -> Self {
        Self {
            search_paths,
            images: HashMap::new(),
        }
    }

    /// Add a search root, searched after the existing ones
    pub fn add_search_path<P: Into<PathBuf>>(&mut self, path: P) {
        self.search_paths.push(path.into());
    }

    /// Search roots in lookup order
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Resolve a resource path to an existing file
    ///
    /// Search roots are tried in order, then the path as given.
    ///
    /// # Errors
    /// Returns [`AssetError::NotFound`] when no candidate exists.
    pub fn resolve(&self, path: &str) -> Result<PathBuf, AssetError> {
        let relative = strip_classpath(path);

        self.search_paths
            .iter()
            .map(|root| root.join(relative))
            .chain(std::iter::once(PathBuf::from(relative)))
            .find(|candidate| candidate.is_file())
            .ok_or_else(|| AssetError::NotFound(path.to_string()))
    }

    /// Read the raw bytes of a resource
    ///
    /// # Errors
    /// Fails when the resource cannot be resolved or read.
    pub fn read_bytes(&self, path: &str) -> Result<Vec<u8>, AssetError> {
        let file_path = self.resolve(path)?;
        Ok(std::fs::read(file_path)?)
    }

    /// Load and parse a resource
    ///
    /// # Example
    /// ```ignore
    /// let hit = assets.load::<AudioAsset>("sounds/hit.wav")?;
    /// ```
    ///
    /// # Errors
    /// Fails when the resource cannot be read or parsed.
    pub fn load<T: Asset>(&self, path: &str) -> Result<T, AssetError> {
        let bytes = self.read_bytes(path)?;
        T::from_bytes(&bytes)
    }

    /// Load an image as RGBA8, reusing the cached copy when present
    ///
    /// # Errors
    /// Fails when the image cannot be resolved or decoded.
    pub fn load_image(&mut self, path: &str) -> Result<Arc<RgbaImage>, AssetError> {
        let key = strip_classpath(path).to_string();
        if let Some(image) = self.images.get(&key) {
            return Ok(Arc::clone(image));
        }

        let file_path = self.resolve(path)?;
        let image = Arc::new(decode_image(&file_path)?);
        self.images.insert(key, Arc::clone(&image));
        Ok(image)
    }

    /// Register an image created at runtime under a resource path
    pub fn insert_image(&mut self, path: &str, image: RgbaImage) -> Arc<RgbaImage> {
        let image = Arc::new(image);
        self.images.insert(strip_classpath(path).to_string(), Arc::clone(&image));
        image
    }

    /// Whether an image is cached under that path
    pub fn is_image_cached(&self, path: &str) -> bool {
        self.images.contains_key(strip_classpath(path))
    }

    /// Number of cached images
    pub fn cached_image_count(&self) -> usize {
        self.images.len()
    }
}

fn strip_classpath(path: &str) -> &str {
    path.strip_prefix(CLASSPATH_PREFIX).unwrap_or(path)
}

fn decode_image(path: &Path) -> Result<RgbaImage, AssetError> {
    log::debug!("Loading image from: {:?}", path);

    let img = image::open(path)
        .map_err(|e| AssetError::LoadFailed(format!("Failed to load image {}: {}", path.display(), e)))?;
    let rgba = img.to_rgba8();

    log::info!("Loaded image {}x{} from {:?}", rgba.width(), rgba.height(), path);
    Ok(rgba)
}

/// Asset trait for loadable resources
pub trait Asset: Sized {
    /// Load asset from raw bytes
    fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError>;

    /// Load asset from a file on disk
    fn from_file(path: &Path) -> Result<Self, AssetError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }
}

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset not found
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Failed to load asset
    #[error("Failed to load asset: {0}")]
    LoadFailed(String),

    /// Failed to write an asset to disk
    #[error("Failed to save asset: {0}")]
    SaveFailed(String),

    /// Invalid asset data
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Unsupported asset format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// IO error during asset loading
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Text(String);

    impl Asset for Text {
        fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
            String::from_utf8(bytes.to_vec())
                .map(Text)
                .map_err(|e| AssetError::InvalidData(e.to_string()))
        }
    }

    #[test]
    fn test_resolve_uses_search_paths_in_order() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        std::fs::write(second.path().join("note.txt"), "second").unwrap();

        let assets = AssetManager::with_search_paths(vec![first.path().into(), second.path().into()]);
        let text: Text = assets.load("classpath:note.txt").unwrap();
        assert_eq!(text.0, "second");

        std::fs::write(first.path().join("note.txt"), "first").unwrap();
        let text: Text = assets.load("note.txt").unwrap();
        assert_eq!(text.0, "first");
    }

    #[test]
    fn test_missing_resource() {
        let assets = AssetManager::with_search_paths(Vec::new());
        assert!(matches!(assets.resolve("nope/missing.png"), Err(AssetError::NotFound(_))));
    }

    #[test]
    fn test_images_are_cached() {
        let dir = tempfile::tempdir().unwrap();
        RgbaImage::from_pixel(3, 2, image::Rgba([1, 2, 3, 255]))
            .save(dir.path().join("tile.png"))
            .unwrap();

        let mut assets = AssetManager::with_search_paths(vec![dir.path().into()]);
        let a = assets.load_image("tile.png").unwrap();
        let b = assets.load_image("classpath:tile.png").unwrap();

        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.dimensions(), (3, 2));
        assert_eq!(assets.cached_image_count(), 1);
    }

    #[test]
    fn test_inserted_image_is_served_from_cache() {
        let mut assets = AssetManager::with_search_paths(Vec::new());
        assets.insert_image("generated/idle.png", RgbaImage::new(4, 4));

        assert!(assets.is_image_cached("classpath:generated/idle.png"));
        assert_eq!(assets.load_image("generated/idle.png").unwrap().width(), 4);
    }
}
