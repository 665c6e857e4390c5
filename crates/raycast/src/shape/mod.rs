//! Contains the objects that are meant to be rendered:
//! - Spheres
//! - Infinite planes
//! - Capless cylinders and cones
//! - Triangles
//! - Meshes
//!
//! Every shape answers the same two questions through [Shape]: where does a ray
//! first hit it and, when that matters, what does the surface look like there.
//! The closed set of shapes a scene can hold is [Primitive].

pub mod cone;
pub mod cylinder;
pub mod mesh;
pub mod plane;
pub mod primitive;
pub mod sphere;
pub mod triangle;

pub use cone::Cone;
pub use cylinder::Cylinder;
pub use mesh::Mesh;
pub use plane::Plane;
pub use primitive::{Primitive, PrimitiveKind};
pub use sphere::Sphere;
pub use triangle::Triangle;

use crate::ray::Ray;

/// An abstracted shape to be rendered by raytracing.
///
/// To render a shape we only need to know whether a ray intersect it and if so,
/// some information about the shape at the intersection point.
///
/// Only hits with a distance strictly inside `ray.bounds` are reported, and the
/// nearest one wins.
pub trait Shape: Sync + Send {
    /// Check whether `ray` intersect the shape defined by `self` if so, gives all the information needed
    fn intersection_full(&self, ray: Ray) -> FullIntersectionResult;

    /// Check whether `ray` intersect the shape defined by `self` if so, return the minimal amount of information
    /// It is often used to cast shadow rays
    fn intersect_bare(&self, ray: Ray) -> MinIntersectionResult;
}

pub mod local_info {
    use crate::{material::MaterialId, math::point::Point};
    use glam::Vec3;

    /// Contains all the local information needed to shade a point
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Full {
        pub pos: Point,
        /// Unit length geometric normal
        pub normal: Vec3,
        pub material: MaterialId,
    }

    /// Contains only the pure geometrical information needed to locate the point.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Minimum {
        pub pos: Point,
    }

    impl From<Full> for Minimum {
        fn from(full: Full) -> Self {
            Self { pos: full.pos }
        }
    }
}

/// Holds local informations and the time of a colision between a ray and a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayIntersection<LocalInfo> {
    pub t: f32,
    pub local_info: LocalInfo,
}

/// A `Result`-like type that takes care of intersections data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntersectionResult<LocalInfo> {
    Intersection(RayIntersection<LocalInfo>),
    NoIntersection,
}

impl<T> IntersectionResult<T> {
    pub fn or_then<F: FnOnce() -> Self>(self, f: F) -> Self {
        match self {
            Self::Intersection(_) => self,
            _ => f(),
        }
    }

    pub fn is_intersection(&self) -> bool {
        matches!(self, Self::Intersection(_))
    }

    pub fn t(&self) -> Option<f32> {
        match self {
            Self::Intersection(RayIntersection { t, .. }) => Some(*t),
            Self::NoIntersection => None,
        }
    }

    pub fn into_option(self) -> Option<RayIntersection<T>> {
        match self {
            Self::Intersection(i) => Some(i),
            Self::NoIntersection => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> IntersectionResult<U> {
        match self {
            Self::Intersection(RayIntersection { t, local_info }) => {
                IntersectionResult::Intersection(RayIntersection {
                    t,
                    local_info: f(local_info),
                })
            }
            Self::NoIntersection => IntersectionResult::NoIntersection,
        }
    }

    /// Keeps the nearest of both results, `self` on ties
    pub fn min(self, other: Self) -> Self {
        let Self::Intersection(RayIntersection { t: t1, .. }) = self else {
            return other;
        };
        let Self::Intersection(RayIntersection { t: t2, .. }) = other else {
            return self;
        };

        if t2 < t1 {
            other
        } else {
            self
        }
    }
}

pub type MinIntersectionResult = IntersectionResult<local_info::Minimum>;
pub type FullIntersectionResult = IntersectionResult<local_info::Full>;

#[cfg(test)]
mod tests {
    use crate::math::point::Point;

    use super::{local_info, IntersectionResult, RayIntersection};

    fn hit(t: f32, x: f32) -> IntersectionResult<local_info::Minimum> {
        IntersectionResult::Intersection(RayIntersection {
            t,
            local_info: local_info::Minimum {
                pos: Point::new(x, 0.0, 0.0),
            },
        })
    }

    #[test]
    fn min_keeps_nearest_and_first_on_ties() {
        assert_eq!(hit(2.0, 0.0).min(hit(1.0, 1.0)), hit(1.0, 1.0));
        assert_eq!(hit(1.0, 0.0).min(hit(1.0, 1.0)), hit(1.0, 0.0));
        assert_eq!(
            IntersectionResult::NoIntersection.min(hit(3.0, 0.0)),
            hit(3.0, 0.0)
        );
        assert_eq!(hit(3.0, 0.0).min(IntersectionResult::NoIntersection).t(), Some(3.0));
    }
}
