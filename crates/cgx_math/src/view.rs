//! View angles shared by the exercises
//!
//! Every exercise orients its scene with an azimuth `th` (rotation about Y)
//! and an elevation `ph` (rotation about X), both whole degrees stepped by
//! the arrow keys.

use crate::Vec3;

/// Sine of an angle given in degrees
#[inline]
pub fn sin_deg(deg: f64) -> f64 {
    deg.to_radians().sin()
}

/// Cosine of an angle given in degrees
#[inline]
pub fn cos_deg(deg: f64) -> f64 {
    deg.to_radians().cos()
}

/// Azimuth and elevation of the viewer, in degrees
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ViewAngles {
    /// Azimuth
    pub th: i32,
    /// Elevation
    pub ph: i32,
}

impl ViewAngles {
    /// Degrees added per arrow-key press
    pub const ARROW_STEP: i32 = 5;

    pub const fn new(th: i32, ph: i32) -> Self {
        Self { th, ph }
    }

    /// Add to both angles, keeping each within (-360, 360)
    pub fn rotate(&mut self, dth: i32, dph: i32) {
        self.th = (self.th + dth) % 360;
        self.ph = (self.ph + dph) % 360;
    }

    /// Back to looking straight ahead
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Eye position for a perspective view orbiting the origin
    ///
    /// `dim` is the half-size of the scene; the eye sits at twice that
    /// distance.
    pub fn eye_position(&self, dim: f64) -> Vec3 {
        let (th, ph) = (self.th as f64, self.ph as f64);
        Vec3::new(
            -2.0 * dim * sin_deg(th) * cos_deg(ph),
            2.0 * dim * sin_deg(ph),
            2.0 * dim * cos_deg(th) * cos_deg(ph),
        )
    }

    /// Up vector matching [`eye_position`](Self::eye_position)
    pub fn up(&self) -> Vec3 {
        Vec3::new(0.0, cos_deg(self.ph as f64), 0.0)
    }

    /// Z component of `p` after projection onto the view direction
    ///
    /// Larger values are closer to the viewer; used to order faces when
    /// hidden-surface removal is done by hand.
    pub fn depth(&self, p: Vec3) -> f64 {
        let (th, ph) = (self.th as f64, self.ph as f64);
        -sin_deg(th) * cos_deg(ph) * p.x + sin_deg(ph) * p.y + cos_deg(th) * cos_deg(ph) * p.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_rotate_wraps() {
        let mut v = ViewAngles::new(355, 0);
        v.rotate(ViewAngles::ARROW_STEP, 0);
        assert_eq!(v.th, 0);

        let mut v = ViewAngles::new(-355, 0);
        v.rotate(-ViewAngles::ARROW_STEP, 0);
        assert_eq!(v.th, 0);

        let mut v = ViewAngles::new(0, 10);
        v.rotate(0, -15);
        assert_eq!(v.ph, -5);
    }

    #[test]
    fn test_reset() {
        let mut v = ViewAngles::new(40, -30);
        v.reset();
        assert_eq!(v, ViewAngles::default());
    }

    #[test]
    fn test_eye_position_default() {
        let eye = ViewAngles::default().eye_position(5.0);
        assert!(eye.max_abs_diff(Vec3::new(0.0, 0.0, 10.0)) < EPS);
    }

    #[test]
    fn test_eye_position_overhead() {
        let overhead = ViewAngles::new(0, 90);
        let eye = overhead.eye_position(1.0);
        assert!(eye.max_abs_diff(Vec3::new(0.0, 2.0, 0.0)) < EPS);
        assert!(overhead.up().y.abs() < EPS);
    }

    #[test]
    fn test_eye_distance_is_twice_dim() {
        let v = ViewAngles::new(35, -20);
        assert!((v.eye_position(3.0).length() - 6.0).abs() < EPS);
    }

    #[test]
    fn test_depth_matches_eye_direction() {
        let v = ViewAngles::new(30, 45);
        let toward_eye = v.eye_position(0.5);
        // The eye direction is a unit vector when dim = 0.5
        assert!((v.depth(toward_eye) - 1.0).abs() < EPS);
        assert!((v.depth(-toward_eye) + 1.0).abs() < EPS);
    }
}
