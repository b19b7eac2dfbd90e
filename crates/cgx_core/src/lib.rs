//! Core routines for the CGX exercises
//!
//! - [`lorenz`] - Explicit Euler integration of the Lorenz attractor
//! - [`color`] - RGB/CMYK/HSV conversion and the three-way [`ColorEditor`]
//! - [`trace`] - GPS trace files and playback
//! - [`texture`] - Uncompressed 24-bit BMP textures
//! - [`AssetCache`] - Loads each data file once

mod asset_error;
mod asset_cache;
pub mod lorenz;
pub mod color;
pub mod trace;
pub mod texture;

pub use asset_error::AssetError;
pub use asset_cache::{Asset, AssetCache, AssetHandle, AssetId};
pub use lorenz::{Integrator, LorenzError, LorenzParams, Param, Steps, TrajectoryStats};
pub use color::{Cmyk, ColorEdit, ColorEditor, Component, Hsv, Rgb, Space};
pub use trace::Trace;
pub use texture::Texture;

// Re-export commonly used types from cgx_math for convenience
pub use cgx_math::{Bounds3, Vec3};
