use std::ops::{Add, AddAssign, Sub};

use glam::Vec3;

/// A position in world space.
///
/// Points and vectors do not mix freely: two points can be subtracted but not added.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point(pub Vec3);

impl Point {
    pub const ORIGIN: Point = Point(Vec3::ZERO);

    pub fn vec(self) -> Vec3 {
        self.0
    }

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    pub fn distance(self, other: Point) -> f32 {
        self.0.distance(other.0)
    }
}

impl From<Vec3> for Point {
    fn from(v: Vec3) -> Self {
        Point(v)
    }
}

impl Add<Vec3> for Point {
    type Output = Self;

    fn add(self, rhs: Vec3) -> Self::Output {
        Point(self.vec() + rhs)
    }
}

impl AddAssign<Vec3> for Point {
    fn add_assign(&mut self, rhs: Vec3) {
        self.0 += rhs;
    }
}

impl Sub<Vec3> for Point {
    type Output = Self;

    fn sub(self, rhs: Vec3) -> Self::Output {
        Point(self.vec() - rhs)
    }
}

/// We can sub two points but not add them
impl Sub for Point {
    type Output = Vec3;

    fn sub(self, rhs: Self) -> Self::Output {
        self.vec() - rhs.vec()
    }
}
