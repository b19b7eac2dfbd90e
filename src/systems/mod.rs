//! Exercise systems
//!
//! One system per exercise. Each takes its configuration section, runs the
//! numeric core and returns a small report for the driver to log.

mod lorenz;
mod color;
mod trace;
mod texture;
mod scene;

pub use lorenz::{LorenzSystem, LorenzReport};
pub use color::{ColorSystem, ColorReport};
pub use trace::{TraceSystem, TraceReport};
pub use texture::{TextureSystem, TextureReport};
pub use scene::{SceneSystem, SceneReport};

use cgx_core::{AssetError, LorenzError};
use cgx_math::InvalidSphereStep;

/// Error from running one of the systems
#[derive(Debug)]
pub enum RunError {
    /// Invalid integrator settings
    Lorenz(LorenzError),
    /// Data or texture file could not be loaded or written
    Asset(AssetError),
    /// Sphere step does not tile the sphere
    Sphere(InvalidSphereStep),
    /// A texture breaks the power-of-two requirement
    TextureSize { path: String, width: u32, height: u32 },
}

impl From<LorenzError> for RunError {
    fn from(e: LorenzError) -> Self {
        RunError::Lorenz(e)
    }
}

impl From<AssetError> for RunError {
    fn from(e: AssetError) -> Self {
        RunError::Asset(e)
    }
}

impl From<InvalidSphereStep> for RunError {
    fn from(e: InvalidSphereStep) -> Self {
        RunError::Sphere(e)
    }
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunError::Lorenz(e) => write!(f, "Lorenz integration: {}", e),
            RunError::Asset(e) => write!(f, "{}", e),
            RunError::Sphere(e) => write!(f, "Sphere: {}", e),
            RunError::TextureSize { path, width, height } => write!(
                f,
                "Texture {} is {}x{}, not a power of two",
                path, width, height
            ),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunError::Lorenz(e) => Some(e),
            RunError::Asset(e) => Some(e),
            RunError::Sphere(e) => Some(e),
            RunError::TextureSize { .. } => None,
        }
    }
}
