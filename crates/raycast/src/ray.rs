use std::ops::{Range, RangeInclusive};

use crate::math::point::Point;

use super::math::vec::Vec3;

/// A half-line starting at `origin`.
///
/// `direction` is normalized at construction. `bounds` is the open interval of
/// distances at which an intersection is accepted, which starts at [crate::EPSILON]
/// to avoid self-intersection.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point,
    pub direction: Vec3,
    pub bounds: (f32, f32),
}

impl Ray {
    pub fn new(origin: Point, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
            bounds: (crate::EPSILON, f32::INFINITY),
        }
    }
    pub fn new_with_range(origin: Point, direction: Vec3, range: Range<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
            bounds: (range.start, range.end),
        }
    }

    pub fn range(&self) -> RangeInclusive<f32> {
        self.bounds.0..=self.bounds.1
    }

    /// Whether a hit at distance `t` lies strictly inside the bounds
    pub fn accepts(&self, t: f32) -> bool {
        self.bounds.0 < t && t < self.bounds.1
    }

    pub fn at(&self, t: f32) -> Point {
        if !self.range().contains(&t) {
            crate::error_once!("a ray has been accessed out of bounds");
        }

        self.at_unchecked(t)
    }
    pub fn at_unchecked(&self, t: f32) -> Point {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::math::point::Point;

    use super::Ray;

    #[test]
    fn ray() {
        let eps = 0.01;
        let ray = Ray::new(Point::new(1., 0., 0.), Vec3::new(-1., 1., 0.));

        assert!((ray.direction.length() - 1.0).abs() < 1e-6);
        assert!(ray.at(1.0).vec().distance_squared(ray.origin.vec() + ray.direction) < eps);
        assert!(ray.at_unchecked(0.0).vec().distance_squared(ray.origin.vec()) < eps);
    }

    #[test]
    fn bounds_are_open() {
        let ray = Ray::new_with_range(Point::ORIGIN, Vec3::Z, 1.0..2.0);
        assert!(!ray.accepts(1.0));
        assert!(ray.accepts(1.5));
        assert!(!ray.accepts(2.0));
    }

    #[test]
    fn degenerate_direction() {
        let ray = Ray::new(Point::ORIGIN, Vec3::ZERO);
        assert_eq!(ray.direction, Vec3::ZERO);
    }
}
