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

/// A finite cylinder without caps.
///
/// It starts at `base` and extends `height` along the unit `axis`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    pub base: Point,
    pub axis: Vec3,
    pub radius: f32,
    pub height: f32,
    pub material: MaterialId,
}

impl Cylinder {
    pub fn new(base: Point, axis: Vec3, radius: f32, height: f32, material: MaterialId) -> Self {
        Self {
            base,
            axis: axis.normalize_or_zero(),
            radius,
            height,
            material,
        }
    }

    /// Signed distance of `p` from the base, measured along the axis
    fn axial(&self, p: Point) -> f32 {
        (p - self.base).dot(self.axis)
    }

    pub fn normal_at(&self, pos: Point) -> Vec3 {
        let on_axis = self.base + self.axis * self.axial(pos);
        (pos - on_axis).normalize_or_zero()
    }
}

impl Shape for Cylinder {
    fn intersection_full(&self, ray: Ray) -> FullIntersectionResult {
        self.intersect_bare(ray).map(|local_info::Minimum { pos }| local_info::Full {
            pos,
            normal: self.normal_at(pos),
            material: self.material,
        })
    }

    fn intersect_bare(&self, ray: Ray) -> MinIntersectionResult {
        let oc = ray.origin - self.base;
        let d_perp = ray.direction - self.axis * ray.direction.dot(self.axis);
        let oc_perp = oc - self.axis * oc.dot(self.axis);

        let a = d_perp.length_squared();
        let b = 2.0 * d_perp.dot(oc_perp);
        let c = oc_perp.length_squared() - self.radius * self.radius;

        // Rays along the axis give a == 0 and never touch the side
        let Some((t_near, t_far)) = solve_quadratic(a, b, c) else {
            return IntersectionResult::NoIntersection;
        };

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

impl Transformer<Cylinder> for Transform {
    fn apply(&self, cylinder: Cylinder) -> Cylinder {
        let span: Vec3 = self.apply(cylinder.axis * cylinder.height);
        Cylinder {
            base: self.apply(cylinder.base),
            axis: span.normalize_or_zero(),
            height: span.length(),
            radius: cylinder.radius * self.max_scale(),
            ..cylinder
        }
    }
}
