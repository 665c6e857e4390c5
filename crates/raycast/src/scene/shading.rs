use crate::{
    color::{self, Color},
    material::Reflectance,
    math::vec::ReflectVecExt,
    ray::Ray,
};

use super::{HitRecord, Scene};

impl Scene {
    /// Color of the ambient light, black when the scene has none
    pub fn ambient_intensity(&self) -> Color {
        self.ambient_light
            .map(|light| light.intensity)
            .unwrap_or(color::BLACK)
    }

    /// Phong shading of `hit`, seen along `ray`.
    ///
    /// Each enabled light that reaches the point unoccluded adds a diffuse
    /// and a specular term. The result is clamped to `[0, 1]`.
    pub fn compute_lighting(&self, hit: &HitRecord, ray: Ray) -> Color {
        let info = hit.local_info;
        let material = self.material(info.material);
        let Reflectance { ambient, diffuse } = material.reflectance_at(info.pos, &self.textures);

        let normal = info.normal;
        let view = -ray.direction;
        let mut color = ambient * self.ambient_intensity();

        for light in self.located_lights() {
            let Some(incidence) = light.incidence(info.pos) else {
                continue;
            };

            let n_dot_l = normal.dot(incidence.direction);
            if n_dot_l <= 0.0 {
                continue;
            }
            if self.is_occluded(info.pos, incidence.direction, incidence.distance) {
                continue;
            }

            color += diffuse * incidence.intensity * n_dot_l;

            // Mirror of the incoming light direction (-L, pointing from the light to
            // the surface), so a viewer on the mirror direction sees V.R = 1. Mirroring
            // L itself would point back into the surface and never light anything.
            let reflected = (-incidence.direction).reflect(normal);
            let v_dot_r = view.dot(reflected);
            if v_dot_r > 0.0 {
                // A negative shininess overflows for grazing views, 0 * inf would be NaN
                let highlight = v_dot_r.powf(material.shininess).min(f32::MAX);
                color += material.specular * incidence.intensity * highlight;
            }
        }

        color.clamp(0.0, 1.0)
    }

    /// The color seen along `ray`, the background if it hits nothing
    pub fn trace_ray(&self, ray: Ray) -> Color {
        crate::counter!("Traced rays");

        match self.intersect(ray) {
            Some(hit) => self.compute_lighting(&hit, ray),
            None => self.background,
        }
    }
}
