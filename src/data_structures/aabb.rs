//! Axis-aligned bounding boxes.
//!
//! Bodies store their box in model space. A world-space box is derived on
//! demand by pushing all eight corners through the node's world matrix, since
//! rotation or scale can turn a local box into something no longer aligned
//! with the world axes.

use cgmath::{Matrix4, Point3, Transform, Vector3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vector3<f32>,
    pub max: Vector3<f32>,
}

/// Closed interval test: touching intervals overlap.
pub fn intervals_overlap(min1: f32, max1: f32, min2: f32, max2: f32) -> bool {
    !(min1 > max2 || min2 > max1)
}

impl Aabb {
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    /// Box centered on the origin spanning `-half..half` on every axis.
    pub fn from_half_extents(half: Vector3<f32>) -> Self {
        Self {
            min: -half,
            max: half,
        }
    }

    /// Unit cube from `-1` to `1`, the extent of the stock cube mesh.
    pub fn unit() -> Self {
        Self::from_half_extents(Vector3::new(1.0, 1.0, 1.0))
    }

    /// Separating-axis test specialised for axis-aligned boxes.
    pub fn intersects(&self, other: &Aabb) -> bool {
        intervals_overlap(self.min.x, self.max.x, other.min.x, other.max.x)
            && intervals_overlap(self.min.y, self.max.y, other.min.y, other.max.y)
            && intervals_overlap(self.min.z, self.max.z, other.min.z, other.max.z)
    }

    pub fn corners(&self) -> [Point3<f32>; 8] {
        let (min, max) = (self.min, self.max);
        [
            Point3::new(min.x, min.y, min.z),
            Point3::new(min.x, min.y, max.z),
            Point3::new(min.x, max.y, min.z),
            Point3::new(min.x, max.y, max.z),
            Point3::new(max.x, min.y, min.z),
            Point3::new(max.x, min.y, max.z),
            Point3::new(max.x, max.y, min.z),
            Point3::new(max.x, max.y, max.z),
        ]
    }

    /// Transforms all corners and returns the smallest axis-aligned box that
    /// contains them.
    pub fn transformed(&self, transform: &Matrix4<f32>) -> Aabb {
        let mut min = Vector3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY);
        let mut max = Vector3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY);
        for corner in self.corners() {
            let p = transform.transform_point(corner);
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
        }
        Aabb { min, max }
    }

    pub fn is_well_formed(&self) -> bool {
        let finite = [self.min, self.max]
            .iter()
            .all(|v| v.x.is_finite() && v.y.is_finite() && v.z.is_finite());
        finite && self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::unit()
    }
}
