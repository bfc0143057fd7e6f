//! Half-space boundaries used to describe the viewing frustum.
//!
//! A plane stores a unit normal and a signed offset. A point `p` is inside
//! when `dot(p, normal) >= distance`, i.e. on the side the normal points to.

use glam::DVec3;

use crate::Point;

/// How the inside half-space of a plane built from three points is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PlaneOrientation {
    /// Trust the winding of the points: the normal is
    /// `(p2 - p1) x (p3 - p1)`.
    #[default]
    Winding,
    /// Orient the plane so that the given interior point is inside,
    /// regardless of the winding of the points.
    Facing(Point),
}

/// An oriented plane `dot(normal, x) = distance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal pointing into the inside half-space.
    normal: DVec3,
    /// Signed offset of the plane along the normal.
    distance: f64,
}

impl Plane {
    /// Builds a plane through three points, with the inside given by their
    /// winding order.
    pub fn from_points(p1: Point, p2: Point, p3: Point) -> Self {
        let mut plane = Self::default();
        plane.set_from_points(p1, p2, p3);
        plane
    }

    /// Builds a plane through three points with an explicit inside sense.
    pub fn from_points_oriented(
        p1: Point,
        p2: Point,
        p3: Point,
        orientation: PlaneOrientation,
    ) -> Self {
        let mut plane = Self::from_points(p1, p2, p3);
        if let PlaneOrientation::Facing(interior) = orientation {
            if !plane.is_point_inside(interior) {
                plane.flip();
            }
        }
        plane
    }

    /// Builds a plane from a normal and offset. The normal is used as given.
    pub fn from_distance_normal(normal: DVec3, distance: f64) -> Self {
        Self { normal, distance }
    }

    /// Recomputes the plane so it passes through `p1`, `p2`, and `p3`.
    ///
    /// Collinear points produce a degenerate (non-finite) normal.
    pub fn set_from_points(&mut self, p1: Point, p2: Point, p3: Point) {
        let p1p2 = p2 - p1;
        let p1p3 = p3 - p1;

        self.normal = p1p2.cross(p1p3).normalize();
        self.distance = self.normal.dot(p1);
    }

    /// Sets the normal and offset directly. The normal must already be unit length.
    pub fn set_from_distance_normal(&mut self, normal: DVec3, distance: f64) {
        self.normal = normal;
        self.distance = distance;
    }

    /// Returns the unit normal.
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Returns the signed offset along the normal.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Returns the signed distance from a point to the plane.
    ///
    /// Non-negative values are inside.
    pub fn signed_distance(&self, point: Point) -> f64 {
        point.dot(self.normal) - self.distance
    }

    /// Returns whether a point lies on the inside of the plane. Points on the
    /// plane itself count as inside.
    pub fn is_point_inside(&self, point: Point) -> bool {
        log::trace!(
            "plane normal {:?} distance {} point {:?} signed distance {}",
            self.normal,
            self.distance,
            point,
            self.signed_distance(point)
        );
        point.dot(self.normal) >= self.distance
    }

    /// Swaps the inside and outside half-spaces.
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.distance = -self.distance;
    }

    /// Returns the same plane with the opposite inside sense.
    #[must_use]
    pub fn flipped(mut self) -> Self {
        self.flip();
        self
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self {
            normal: DVec3::Z,
            distance: 0.0,
        }
    }
}
