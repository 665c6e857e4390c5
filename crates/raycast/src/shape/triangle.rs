use glam::Vec3;

use crate::{
    material::MaterialId,
    math::{
        point::Point,
        transform::{Transform, Transformer},
    },
    ray::Ray,
};

use super::{
    local_info, FullIntersectionResult, IntersectionResult, MinIntersectionResult,
    RayIntersection, Shape,
};

/// A simple flat shaded triangle.
///
/// The face normal follows the winding: `(v1 - v0) x (v2 - v0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Point; 3],
    pub normal: Vec3,
    pub material: MaterialId,
}

impl Triangle {
    pub fn new(vertices: [Point; 3], material: MaterialId) -> Self {
        Self {
            vertices,
            normal: Self::face_normal(vertices),
            material,
        }
    }

    fn face_normal(vertices: [Point; 3]) -> Vec3 {
        let a = vertices[1] - vertices[0];
        let b = vertices[2] - vertices[0];
        a.cross(b).normalize_or_zero()
    }
}

/// A private type that stores the result of the Möller-Trumbore algorithm
enum MollerTrumboreResult {
    Result { t: f32 },
    NoResult,
}

impl MollerTrumboreResult {
    fn moller_trumbore(vertices: [Point; 3], ray: Ray) -> Self {
        let edge1 = vertices[1] - vertices[0];
        let edge2 = vertices[2] - vertices[0];

        let p = ray.direction.cross(edge2);
        let det = edge1.dot(p);
        if det.abs() < crate::PARALLEL_EPSILON {
            return Self::NoResult;
        }
        let inv_det = 1.0 / det;

        let s = ray.origin - vertices[0];
        let u = s.dot(p) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return Self::NoResult;
        }

        let q = s.cross(edge1);
        let v = ray.direction.dot(q) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return Self::NoResult;
        }

        let t = edge2.dot(q) * inv_det;
        if ray.accepts(t) {
            Self::Result { t }
        } else {
            Self::NoResult
        }
    }

    fn from_triangle(triangle: &Triangle, ray: Ray) -> Self {
        Self::moller_trumbore(triangle.vertices, ray)
    }
}

impl Shape for Triangle {
    fn intersection_full(&self, ray: Ray) -> FullIntersectionResult {
        self.intersect_bare(ray).map(|local_info::Minimum { pos }| local_info::Full {
            pos,
            normal: self.normal,
            material: self.material,
        })
    }

    fn intersect_bare(&self, ray: Ray) -> MinIntersectionResult {
        match MollerTrumboreResult::from_triangle(self, ray) {
            MollerTrumboreResult::Result { t } => IntersectionResult::Intersection(RayIntersection {
                t,
                local_info: local_info::Minimum { pos: ray.at(t) },
            }),
            MollerTrumboreResult::NoResult => IntersectionResult::NoIntersection,
        }
    }
}

impl Transformer<Triangle> for Transform {
    fn apply(&self, triangle: Triangle) -> Triangle {
        let vertices = triangle.vertices.map(|v| self.apply(v));
        Triangle::new(vertices, triangle.material)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::{material::MaterialId, math::point::Point, ray::Ray, shape::Shape};

    use super::Triangle;

    fn triangle() -> Triangle {
        Triangle::new(
            [
                Point::new(0.0, 0.0, 0.0),
                Point::new(1.0, 0.0, 0.0),
                Point::new(0.0, 1.0, 0.0),
            ],
            MaterialId(0),
        )
    }

    #[test]
    fn face_normal_follows_winding() {
        assert_eq!(triangle().normal, Vec3::Z);
    }

    #[test]
    fn hit_inside() {
        let ray = Ray::new(Point::new(0.25, 0.25, 3.0), -Vec3::Z);
        let hit = triangle().intersection_full(ray).into_option();
        assert!(hit.is_some_and(|hit| (hit.t - 3.0).abs() < 1e-5
            && hit.local_info.normal == Vec3::Z
            && hit.local_info.pos.distance(Point::new(0.25, 0.25, 0.0)) < 1e-5));
    }

    #[test]
    fn rejects_rays_just_outside_the_edges() {
        // Just past the hypotenuse: u + v > 1
        let ray = Ray::new(Point::new(0.51, 0.51, 3.0), -Vec3::Z);
        assert!(!triangle().intersect_bare(ray).is_intersection());

        // v < 0
        let ray = Ray::new(Point::new(0.5, -0.01, 3.0), -Vec3::Z);
        assert!(!triangle().intersect_bare(ray).is_intersection());

        // u < 0
        let ray = Ray::new(Point::new(-0.01, 0.5, 3.0), -Vec3::Z);
        assert!(!triangle().intersect_bare(ray).is_intersection());
    }

    #[test]
    fn back_face_is_hit_and_parallel_ray_missed() {
        let from_below = Ray::new(Point::new(0.25, 0.25, -1.0), Vec3::Z);
        assert!(triangle().intersect_bare(from_below).is_intersection());

        let grazing = Ray::new(Point::new(-1.0, 0.25, 0.0), Vec3::X);
        assert!(!triangle().intersect_bare(grazing).is_intersection());
    }
}
