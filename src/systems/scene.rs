//! View and sphere geometry system
//!
//! Computes what the viewer setup of an exercise would hand to the GPU: the
//! eye position for the configured angles and the tessellated sphere.

use cgx_math::{SphereMesh, Vec3, ViewAngles};

use super::RunError;
use crate::config::{SphereConfig, ViewConfig};

#[derive(Debug, Clone)]
pub struct SceneReport {
    pub view: ViewAngles,
    pub eye: Vec3,
    pub up: Vec3,
    pub mesh: SphereMesh,
    /// Depth of the sphere center along the view direction
    pub center_depth: f64,
}

pub struct SceneSystem;

impl SceneSystem {
    pub fn run(view: &ViewConfig, sphere: &SphereConfig) -> Result<SceneReport, RunError> {
        let mut angles = ViewAngles::default();
        angles.rotate(view.th, view.ph);
        let eye = angles.eye_position(view.dim);
        let up = angles.up();

        let center = Vec3::from_array(sphere.center);
        let mesh = SphereMesh::new(center, sphere.radius, sphere.step)?;
        let triangles = mesh.to_triangle_list();

        log::info!(
            "View th={} ph={}: eye at ({:.3}, {:.3}, {:.3})",
            angles.th, angles.ph, eye.x, eye.y, eye.z
        );
        log::info!(
            "Sphere r={} step={}: {} strip vertices, {} triangles ({} bytes)",
            sphere.radius,
            sphere.step,
            mesh.vertex_count(),
            triangles.len() / 3,
            mesh.triangle_bytes().len()
        );

        Ok(SceneReport {
            view: angles,
            eye,
            up,
            center_depth: angles.depth(center),
            mesh,
        })
    }
}
