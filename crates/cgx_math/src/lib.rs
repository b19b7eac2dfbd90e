//! 3D Mathematics Library
//!
//! This crate provides the vector, view and tessellation types shared by
//! the CGX exercises.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Bounds3`] - Axis-aligned bounding box
//! - [`ViewAngles`] - Azimuth/elevation of the viewer in degrees
//!
//! ## Geometry
//!
//! - [`SphereMesh`] - Polar-coordinate sphere made of pole fans and latitude strips
//! - [`ColoredVertex`] - Position and color, laid out for vertex buffers

mod vec3;
mod bounds;
pub mod view;
pub mod sphere;

pub use vec3::Vec3;
pub use bounds::Bounds3;
pub use view::{ViewAngles, sin_deg, cos_deg};
pub use sphere::{SphereMesh, ColoredVertex, InvalidSphereStep, polar_vertex};
