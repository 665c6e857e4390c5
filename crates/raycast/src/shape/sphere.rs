use glam::Vec3;

use crate::{
    material::MaterialId,
    math::{
        float::solve_quadratic,
        point::Point,
        transform::{Transform, Transformer},
    },
    ray::Ray,
};

use super::{
    local_info, FullIntersectionResult, IntersectionResult, MinIntersectionResult,
    RayIntersection, Shape,
};

/// A simple sphere shape.
///
/// Normals are pointing outwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Point,
    pub radius: f32,
    pub material: MaterialId,
}

impl Sphere {
    pub fn new(center: Point, radius: f32, material: MaterialId) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn normal_at(&self, pos: Point) -> Vec3 {
        (pos - self.center).normalize_or_zero()
    }
}

impl Shape for Sphere {
    fn intersection_full(&self, ray: Ray) -> FullIntersectionResult {
        self.intersect_bare(ray).map(|local_info::Minimum { pos }| local_info::Full {
            pos,
            normal: self.normal_at(pos),
            material: self.material,
        })
    }

    fn intersect_bare(&self, ray: Ray) -> MinIntersectionResult {
        let oc = ray.origin - self.center;
        let a = ray.direction.length_squared();
        let b = 2.0 * oc.dot(ray.direction);
        let c = oc.length_squared() - self.radius * self.radius;

        let Some((t_near, t_far)) = solve_quadratic(a, b, c) else {
            return IntersectionResult::NoIntersection;
        };

        // Either the first hit is in range or the ray starts inside the sphere
        let t = if ray.accepts(t_near) {
            t_near
        } else if ray.accepts(t_far) {
            t_far
        } else {
            return IntersectionResult::NoIntersection;
        };

        IntersectionResult::Intersection(RayIntersection {
            t,
            local_info: local_info::Minimum { pos: ray.at(t) },
        })
    }
}

impl Transformer<Sphere> for Transform {
    fn apply(&self, sphere: Sphere) -> Sphere {
        Sphere {
            center: self.apply(sphere.center),
            radius: sphere.radius * self.max_scale(),
            ..sphere
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::{
        material::MaterialId,
        math::point::Point,
        ray::Ray,
        shape::{IntersectionResult, RayIntersection, Shape},
    };

    use super::Sphere;

    fn unit_sphere() -> Sphere {
        Sphere::new(Point::ORIGIN, 1.0, MaterialId(0))
    }

    #[test]
    fn hit_from_outside() {
        let ray = Ray::new(Point::new(0.0, 0.0, 5.0), -Vec3::Z);
        let IntersectionResult::Intersection(RayIntersection { t, local_info }) =
            unit_sphere().intersection_full(ray)
        else {
            panic!("the ray should hit the sphere");
        };

        assert!((t - 4.0).abs() < 1e-5);
        assert!(local_info.pos.distance(Point::new(0.0, 0.0, 1.0)) < 1e-5);
        assert!(local_info.normal.distance(Vec3::Z) < 1e-5);
        assert_eq!(local_info.material, MaterialId(0));
    }

    #[test]
    fn hit_from_inside_uses_far_root() {
        let ray = Ray::new(Point::ORIGIN, Vec3::X);
        let t = unit_sphere().intersect_bare(ray).t();
        assert!(t.is_some_and(|t| (t - 1.0).abs() < 1e-5));
    }

    #[test]
    fn miss_and_behind() {
        let miss = Ray::new(Point::new(0.0, 2.0, 5.0), -Vec3::Z);
        assert!(!unit_sphere().intersect_bare(miss).is_intersection());

        let behind = Ray::new(Point::new(0.0, 0.0, 5.0), Vec3::Z);
        assert!(!unit_sphere().intersect_bare(behind).is_intersection());
    }

    #[test]
    fn respects_ray_bounds() {
        let ray = Ray::new_with_range(Point::new(0.0, 0.0, 5.0), -Vec3::Z, 0.0..3.0);
        assert!(!unit_sphere().intersect_bare(ray).is_intersection());
    }
}
