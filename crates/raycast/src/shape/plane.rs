use glam::Vec3;

use crate::{
    material::MaterialId,
    math::{
        float::FloatAsExt,
        point::Point,
        transform::{Transform, Transformer},
    },
    ray::Ray,
};

use super::{
    local_info, FullIntersectionResult, IntersectionResult, MinIntersectionResult,
    RayIntersection, Shape,
};

/// An infinite plane going through `point`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub point: Point,
    /// Unit normal, the same on the whole plane
    pub normal: Vec3,
    pub material: MaterialId,
}

impl Plane {
    /// The normal is normalized, a zero normal makes a plane no ray can hit
    pub fn new(point: Point, normal: Vec3, material: MaterialId) -> Self {
        Self {
            point,
            normal: normal.normalize_or_zero(),
            material,
        }
    }
}

impl Shape for Plane {
    fn intersection_full(&self, ray: Ray) -> FullIntersectionResult {
        self.intersect_bare(ray).map(|local_info::Minimum { pos }| local_info::Full {
            pos,
            normal: self.normal,
            material: self.material,
        })
    }

    fn intersect_bare(&self, ray: Ray) -> MinIntersectionResult {
        let Some(denom) = ray
            .direction
            .dot(self.normal)
            .into_non_zero(crate::PARALLEL_EPSILON)
        else {
            return IntersectionResult::NoIntersection;
        };

        let t = (self.point - ray.origin).dot(self.normal) / denom;
        if !ray.accepts(t) {
            return IntersectionResult::NoIntersection;
        }

        IntersectionResult::Intersection(RayIntersection {
            t,
            local_info: local_info::Minimum { pos: ray.at(t) },
        })
    }
}

impl Transformer<Plane> for Transform {
    fn apply(&self, plane: Plane) -> Plane {
        Plane {
            point: self.apply(plane.point),
            normal: self.apply_normal(plane.normal),
            ..plane
        }
    }
}
