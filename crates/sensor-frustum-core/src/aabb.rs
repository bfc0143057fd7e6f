//! Axis-aligned bounding boxes.

use glam::DVec3;

use crate::Point;

/// An axis-aligned bounding box given by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner (x, y, z).
    pub min: Point,
    /// Maximum corner (x, y, z).
    pub max: Point,
}

impl Aabb {
    /// A box containing nothing. Expanding it by a point yields that point.
    pub const EMPTY: Self = Self {
        min: DVec3::new(f64::MAX, f64::MAX, f64::MAX),
        max: DVec3::new(f64::MIN, f64::MIN, f64::MIN),
    };

    /// Creates a box from its corners.
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Computes the tightest box around a set of points.
    ///
    /// Returns [`Aabb::EMPTY`] for an empty iterator.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        let mut aabb = Self::EMPTY;
        for point in points {
            aabb.expand(point);
        }
        aabb
    }

    /// Grows the box to include a point.
    pub fn expand(&mut self, point: Point) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Returns whether the box encloses at least one point.
    pub fn is_valid(&self) -> bool {
        self.min.cmple(self.max).all()
    }

    /// Returns whether a point lies inside the box, boundary included.
    pub fn contains(&self, point: Point) -> bool {
        self.min.cmple(point).all() && point.cmple(self.max).all()
    }

    /// Returns the center of the box.
    pub fn center(&self) -> Point {
        (self.min + self.max) * 0.5
    }

    /// Returns the side lengths of the box.
    pub fn extent(&self) -> DVec3 {
        self.max - self.min
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::EMPTY
    }
}
