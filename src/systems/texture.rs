//! Texture system
//!
//! Loads every configured BMP through the shared cache, so a texture listed
//! twice is only read once.

use std::sync::Arc;

use cgx_core::{AssetCache, AssetHandle, Texture};

use super::RunError;
use crate::config::TextureConfig;

/// A loaded texture and its cache handle
#[derive(Debug, Clone)]
pub struct TextureReport {
    pub handle: AssetHandle,
    pub texture: Arc<Texture>,
}

pub struct TextureSystem;

impl TextureSystem {
    pub fn run(config: &TextureConfig, cache: &mut AssetCache) -> Result<Vec<TextureReport>, RunError> {
        let mut loaded = Vec::with_capacity(config.paths.len());

        for path in &config.paths {
            let handle = cache.load::<Texture>(path)?;
            let Some(texture) = cache.get::<Texture>(&handle) else {
                log::warn!("{} is already cached as a different asset type, skipping texture", path);
                continue;
            };

            if !texture.is_power_of_two() {
                if config.require_power_of_two {
                    return Err(RunError::TextureSize {
                        path: path.clone(),
                        width: texture.width(),
                        height: texture.height(),
                    });
                }
                log::warn!(
                    "Texture {} is {}x{}; sizes that are not powers of two may not load on older drivers",
                    path,
                    texture.width(),
                    texture.height()
                );
            }

            loaded.push(TextureReport { handle, texture });
        }

        log::info!(
            "{} textures requested, {} distinct files loaded",
            config.paths.len(),
            cache.asset_count()
        );
        Ok(loaded)
    }
}
