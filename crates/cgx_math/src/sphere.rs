//! Polar-coordinate sphere tessellation
//!
//! The sphere is built the way the fixed-function exercises draw it: a
//! triangle fan around each pole and a quad strip for every latitude band
//! in between. Each ring walks the full circle so the seam vertex is
//! repeated at `th = 360`.

use bytemuck::{Pod, Zeroable};

use crate::view::{cos_deg, sin_deg};
use crate::Vec3;

/// A vertex with position and color, ready for a vertex buffer
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ColoredVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// Unit-sphere vertex at azimuth `th` and latitude `ph` (degrees)
///
/// The color is derived from the angles so neighbouring bands are
/// distinguishable without lighting.
pub fn polar_vertex(th: f64, ph: f64) -> (Vec3, [f64; 3]) {
    let position = Vec3::new(sin_deg(th) * cos_deg(ph), sin_deg(ph), cos_deg(th) * cos_deg(ph));
    let color = [
        cos_deg(th) * cos_deg(th),
        sin_deg(ph) * sin_deg(ph),
        sin_deg(th) * sin_deg(th),
    ];
    (position, color)
}

/// Error for an angular step that does not tile the sphere
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSphereStep(pub i32);

impl std::fmt::Display for InvalidSphereStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sphere step {} must be positive, below 45 and divide 90", self.0)
    }
}

impl std::error::Error for InvalidSphereStep {}

/// Tessellated sphere as two pole fans and a list of latitude strips
#[derive(Clone, Debug)]
pub struct SphereMesh {
    center: Vec3,
    radius: f64,
    step: i32,
    /// Triangle fan: pole first, then the ring at `step - 90`
    south_cap: Vec<ColoredVertex>,
    /// Quad strips, alternating lower and upper ring vertices
    bands: Vec<Vec<ColoredVertex>>,
    /// Triangle fan: pole first, then the ring at `90 - step`
    north_cap: Vec<ColoredVertex>,
}

impl SphereMesh {
    /// Tessellate a sphere at `center` with `radius`, stepping `step` degrees
    pub fn new(center: Vec3, radius: f64, step: i32) -> Result<Self, InvalidSphereStep> {
        if step <= 0 || step >= 45 || 90 % step != 0 {
            return Err(InvalidSphereStep(step));
        }

        let vertex = |th: i32, ph: i32| {
            let (p, c) = polar_vertex(th as f64, ph as f64);
            let world = center + p * radius;
            ColoredVertex {
                position: [world.x as f32, world.y as f32, world.z as f32],
                color: [c[0] as f32, c[1] as f32, c[2] as f32],
            }
        };
        let ring = |ph: i32| (0..=360).step_by(step as usize).map(move |th| vertex(th, ph));

        let mut south_cap = vec![vertex(0, -90)];
        south_cap.extend(ring(step - 90));

        let mut bands = Vec::new();
        let mut ph = step - 90;
        while ph <= 90 - 2 * step {
            let strip = (0..=360)
                .step_by(step as usize)
                .flat_map(|th| [vertex(th, ph), vertex(th, ph + step)])
                .collect();
            bands.push(strip);
            ph += step;
        }

        let mut north_cap = vec![vertex(0, 90)];
        north_cap.extend(ring(90 - step));

        Ok(Self {
            center,
            radius,
            step,
            south_cap,
            bands,
            north_cap,
        })
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn step(&self) -> i32 {
        self.step
    }

    pub fn south_cap(&self) -> &[ColoredVertex] {
        &self.south_cap
    }

    pub fn bands(&self) -> &[Vec<ColoredVertex>] {
        &self.bands
    }

    pub fn north_cap(&self) -> &[ColoredVertex] {
        &self.north_cap
    }

    /// Total vertices across fans and strips
    pub fn vertex_count(&self) -> usize {
        self.south_cap.len()
            + self.north_cap.len()
            + self.bands.iter().map(Vec::len).sum::<usize>()
    }

    /// Flatten fans and strips into an independent-triangle list
    pub fn to_triangle_list(&self) -> Vec<ColoredVertex> {
        let mut out = Vec::new();
        for fan in [&self.south_cap, &self.north_cap] {
            for pair in fan[1..].windows(2) {
                out.extend([fan[0], pair[0], pair[1]]);
            }
        }
        for strip in &self.bands {
            // Quad strip: (a0, b0, a1, b1) -> two triangles per quad
            for quad in strip.windows(4).step_by(2) {
                out.extend([quad[0], quad[2], quad[1]]);
                out.extend([quad[1], quad[2], quad[3]]);
            }
        }
        out
    }

    /// Triangle list as raw bytes for a vertex buffer upload
    pub fn triangle_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.to_triangle_list()).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polar_vertex_poles() {
        let (north, color) = polar_vertex(0.0, 90.0);
        assert!(north.max_abs_diff(Vec3::Y) < 1e-12);
        assert!((color[1] - 1.0).abs() < 1e-12);

        let (front, _) = polar_vertex(0.0, 0.0);
        assert!(front.max_abs_diff(Vec3::Z) < 1e-12);
    }

    #[test]
    fn test_invalid_steps() {
        assert!(SphereMesh::new(Vec3::ZERO, 1.0, 0).is_err());
        assert!(SphereMesh::new(Vec3::ZERO, 1.0, -5).is_err());
        assert!(SphereMesh::new(Vec3::ZERO, 1.0, 7).is_err());
        assert!(SphereMesh::new(Vec3::ZERO, 1.0, 45).is_err());
    }

    #[test]
    fn test_structure_counts() {
        let mesh = SphereMesh::new(Vec3::ZERO, 1.0, 5).unwrap();
        let ring = 360 / 5 + 1;
        assert_eq!(mesh.south_cap().len(), 1 + ring);
        assert_eq!(mesh.north_cap().len(), 1 + ring);
        assert_eq!(mesh.bands().len(), (180 / 5 - 2) as usize);
        assert!(mesh.bands().iter().all(|b| b.len() == 2 * ring));
    }

    #[test]
    fn test_vertices_on_surface() {
        let center = Vec3::new(1.0, -2.0, 0.5);
        let mesh = SphereMesh::new(center, 3.0, 15).unwrap();
        for v in mesh.to_triangle_list() {
            let p = Vec3::new(v.position[0] as f64, v.position[1] as f64, v.position[2] as f64);
            assert!(((p - center).length() - 3.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_triangle_list_size() {
        let mesh = SphereMesh::new(Vec3::ZERO, 1.0, 30).unwrap();
        let per_ring = 360 / 30;
        let fans = 2 * per_ring;
        let bands = mesh.bands().len() * 2 * per_ring;
        let tris = mesh.to_triangle_list();
        assert_eq!(tris.len(), 3 * (fans + bands));
        assert_eq!(mesh.triangle_bytes().len(), tris.len() * std::mem::size_of::<ColoredVertex>());
    }
}
