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

/// A finite cone without its base disk.
///
/// The surface opens from `apex` along the unit `axis` and reaches `radius`
/// at distance `height`, where the base would be.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cone {
    pub apex: Point,
    pub axis: Vec3,
    pub radius: f32,
    pub height: f32,
    pub material: MaterialId,
}

impl Cone {
    pub fn new(apex: Point, axis: Vec3, radius: f32, height: f32, material: MaterialId) -> Self {
        Self {
            apex,
            axis: axis.normalize_or_zero(),
            radius,
            height,
            material,
        }
    }

    /// A cone described from the center of its base, pointing towards `tip_direction`
    pub fn from_base(
        base_center: Point,
        tip_direction: Vec3,
        radius: f32,
        height: f32,
        material: MaterialId,
    ) -> Self {
        let tip_direction = tip_direction.normalize_or_zero();
        Self::new(
            base_center + tip_direction * height,
            -tip_direction,
            radius,
            height,
            material,
        )
    }

    fn axial(&self, p: Point) -> f32 {
        (p - self.apex).dot(self.axis)
    }

    /// Squared cosine of the half-angle at the apex
    fn cos2(&self) -> f32 {
        let h2 = self.height * self.height;
        h2 / (h2 + self.radius * self.radius)
    }

    pub fn normal_at(&self, pos: Point) -> Vec3 {
        let cp = pos - self.apex;
        let radial = (cp - self.axis * cp.dot(self.axis)).normalize_or_zero();
        (radial - self.axis * (self.radius / self.height)).normalize_or_zero()
    }
}

impl Shape for Cone {
    fn intersection_full(&self, ray: Ray) -> FullIntersectionResult {
        self.intersect_bare(ray).map(|local_info::Minimum { pos }| local_info::Full {
            pos,
            normal: self.normal_at(pos),
            material: self.material,
        })
    }

    fn intersect_bare(&self, ray: Ray) -> MinIntersectionResult {
        if self.height <= 0.0 {
            return IntersectionResult::NoIntersection;
        }

        let cos2 = self.cos2();
        let oc = ray.origin - self.apex;
        let dv = ray.direction.dot(self.axis);
        let ocv = oc.dot(self.axis);

        let a = dv * dv - ray.direction.length_squared() * cos2;
        let b = 2.0 * (dv * ocv - ray.direction.dot(oc) * cos2);
        let c = ocv * ocv - oc.length_squared() * cos2;

        let Some((t_near, t_far)) = solve_quadratic(a, b, c) else {
            return IntersectionResult::NoIntersection;
        };

        // The quadric is a double cone, the axial range keeps the right nappe
        for t in [t_near, t_far] {
            if !ray.accepts(t) {
                continue;
            }
            let pos = ray.at(t);
            if (0.0..=self.height).contains(&self.axial(pos)) {
                return IntersectionResult::Intersection(RayIntersection {
                    t,
                    local_info: local_info::Minimum { pos },
                });
            }
        }
        IntersectionResult::NoIntersection
    }
}

impl Transformer<Cone> for Transform {
    fn apply(&self, cone: Cone) -> Cone {
        let span: Vec3 = self.apply(cone.axis * cone.height);
        Cone {
            apex: self.apply(cone.apex),
            axis: span.normalize_or_zero(),
            height: span.length(),
            radius: cone.radius * self.max_scale(),
            ..cone
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

    use super::Cone;

    /// Apex at y = 2, base of radius 1 on the floor
    fn hat() -> Cone {
        Cone::new(Point::new(0.0, 2.0, 0.0), -Vec3::Y, 1.0, 2.0, MaterialId(0))
    }

    #[test]
    fn side_hit() {
        let ray = Ray::new(Point::new(0.0, 1.0, 5.0), -Vec3::Z);
        let IntersectionResult::Intersection(RayIntersection { t, local_info }) =
            hat().intersection_full(ray)
        else {
            panic!("the ray should hit the cone");
        };

        assert!((t - 4.5).abs() < 1e-4);
        assert!(local_info.pos.distance(Point::new(0.0, 1.0, 0.5)) < 1e-4);
        let expected = Vec3::new(0.0, 0.5, 1.0).normalize();
        assert!(local_info.normal.distance(expected) < 1e-4);
    }

    #[test]
    fn mirrored_nappe_is_ignored() {
        // At y = 3 the ray only crosses the nappe above the apex
        let ray = Ray::new(Point::new(0.0, 3.0, 5.0), -Vec3::Z);
        assert!(!hat().intersect_bare(ray).is_intersection());
    }

    #[test]
    fn below_base_misses() {
        let ray = Ray::new(Point::new(0.0, -0.5, 5.0), -Vec3::Z);
        assert!(!hat().intersect_bare(ray).is_intersection());
    }

    #[test]
    fn flat_cone_never_hit() {
        let flat = Cone::new(Point::ORIGIN, Vec3::Y, 1.0, 0.0, MaterialId(0));
        let ray = Ray::new(Point::new(0.0, 5.0, 0.0), -Vec3::Y);
        assert!(!flat.intersect_bare(ray).is_intersection());
    }

    #[test]
    fn from_base_matches_apex_form() {
        let cone = Cone::from_base(Point::ORIGIN, Vec3::Y, 1.0, 2.0, MaterialId(0));
        assert!(cone.apex.distance(hat().apex) < 1e-6);
        assert!(cone.axis.distance(hat().axis) < 1e-6);
    }
}
