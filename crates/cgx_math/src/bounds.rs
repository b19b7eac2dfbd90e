//! Axis-aligned bounding box

use crate::Vec3;

/// Axis-aligned bounding box in 3D
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds3 {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds3 {
    /// Bounds containing a single point
    #[inline]
    pub fn from_point(p: Vec3) -> Self {
        Self { min: p, max: p }
    }

    /// Smallest bounds containing every point, or `None` for an empty set
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec3>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::from_point(first), |b, p| b.including(p)))
    }

    /// Grow the bounds to include `p`
    #[inline]
    pub fn including(self, p: Vec3) -> Self {
        Self {
            min: self.min.min_components(p),
            max: self.max.max_components(p),
        }
    }

    /// Midpoint of the box
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) / 2.0
    }

    /// Edge lengths along each axis
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}
