//! Path-deduplicating asset cache
//!
//! Exercises routinely load the same file more than once (the same metal
//! texture for several models). [`AssetCache`] reads each path once and
//! hands out shared references afterwards.
//!
//! # Example
//!
//! ```ignore
//! let mut cache = AssetCache::new();
//! let handle = cache.load::<Texture>("crate.bmp")?;
//! let texture: Arc<Texture> = cache.get::<Texture>(&handle).unwrap();
//! ```

use std::any::Any;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::asset_error::AssetError;

/// Sequential identifier of a cached asset, starting at 1
pub type AssetId = u64;

/// Handle returned by [`AssetCache::load`]
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct AssetHandle {
    id: AssetId,
    path: PathBuf,
}

impl AssetHandle {
    pub fn id(&self) -> AssetId {
        self.id
    }

    /// File the asset was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Types that can be loaded from a file on disk
pub trait Asset: Sized + Send + Sync + 'static {
    /// Load this asset from the given file path.
    ///
    /// # Errors
    ///
    /// Returns an [`AssetError`] if the file cannot be read or parsed.
    fn load_from_file(path: &Path) -> Result<Self, AssetError>;
}

/// Type-erased cache keyed by file path
pub struct AssetCache {
    assets: HashMap<AssetId, Arc<dyn Any + Send + Sync>>,
    path_index: HashMap<PathBuf, AssetId>,
    next_id: AssetId,
}

impl Default for AssetCache {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetCache {
    pub fn new() -> Self {
        Self {
            assets: HashMap::new(),
            path_index: HashMap::new(),
            next_id: 1,
        }
    }

    /// Load `path` as a `T`, or return the existing handle if it was loaded before
    ///
    /// A failed load leaves the cache unchanged.
    pub fn load<T: Asset>(&mut self, path: impl AsRef<Path>) -> Result<AssetHandle, AssetError> {
        let path = path.as_ref().to_path_buf();

        if let Some(&id) = self.path_index.get(&path) {
            log::debug!("Asset cache hit: {}", path.display());
            return Ok(AssetHandle { id, path });
        }

        let data: Arc<dyn Any + Send + Sync> = Arc::new(T::load_from_file(&path)?);
        let id = self.next_id;
        self.next_id += 1;

        self.assets.insert(id, data);
        self.path_index.insert(path.clone(), id);
        log::debug!("Loaded asset {} from {}", id, path.display());

        Ok(AssetHandle { id, path })
    }

    /// Shared reference to a cached asset
    ///
    /// Returns `None` if the handle is unknown or `T` is not the type it was
    /// loaded as.
    pub fn get<T: Asset>(&self, handle: &AssetHandle) -> Option<Arc<T>> {
        self.assets.get(&handle.id)?.clone().downcast::<T>().ok()
    }

    /// Number of distinct files loaded
    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }

    pub fn contains(&self, handle: &AssetHandle) -> bool {
        self.assets.contains_key(&handle.id)
    }
}
