//! The scene: an arena of objects, materials, textures and lights.
//!
//! Everything is inserted once, then the scene is only read while rendering,
//! so it can be shared between threads without locking.

pub mod examples;
mod shading;

use std::fmt::Display;

use crate::{
    camera::Camera,
    color::Color,
    light::{AmbientLight, DirectionalLight, Light, PointLight, SpotLight},
    material::{Material, MaterialDescriptor, MaterialId, Raster, TextureId},
    math::point::Point,
    ray::Ray,
    shape::{local_info, IntersectionResult, Primitive, PrimitiveKind, Shape},
};

/// Index of an object in [Scene::objects]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: Option<String>,
    pub primitive: Primitive,
}

/// The nearest intersection of a ray with the scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    pub object: ObjectId,
    pub t: f32,
    pub local_info: local_info::Full,
}

/// What lies under a pixel
#[derive(Debug, Clone, PartialEq)]
pub struct Pick {
    pub object: ObjectId,
    pub kind: PrimitiveKind,
    pub name: Option<String>,
    pub point: Point,
    pub distance: f32,
}

impl Display for Pick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Point(p) = self.point;
        writeln!(f, "Type: {}", self.kind)?;
        writeln!(f, "Name: {}", self.name.as_deref().unwrap_or("<unnamed>"))?;
        writeln!(f, "Point: ({:.3}, {:.3}, {:.3})", p.x, p.y, p.z)?;
        write!(f, "Distance: {:.3}", self.distance)
    }
}

#[derive(Debug, Clone)]
pub struct Scene {
    pub objects: Vec<SceneObject>,
    pub materials: Vec<MaterialDescriptor>,
    pub textures: Vec<Raster>,

    pub ambient_light: Option<AmbientLight>,
    pub point_lights: Vec<PointLight>,
    pub directional_lights: Vec<DirectionalLight>,
    pub spot_lights: Vec<SpotLight>,

    /// Color of rays escaping the scene
    pub background: Color,
    /// Offset of shadow ray origins along the direction to the light
    pub shadow_bias: f32,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            objects: Vec::new(),
            materials: Vec::new(),
            textures: Vec::new(),
            ambient_light: None,
            point_lights: Vec::new(),
            directional_lights: Vec::new(),
            spot_lights: Vec::new(),
            background: Color::new(0.1, 0.1, 0.15),
            shadow_bias: crate::SHADOW_BIAS,
        }
    }
}

impl Scene {
    /// Insert an object in the scene
    pub fn insert_object<T: Into<Primitive>>(&mut self, object: T) -> ObjectId {
        self.objects.push(SceneObject {
            name: None,
            primitive: object.into(),
        });
        ObjectId(self.objects.len() - 1)
    }

    /// Insert an object that can be picked by name
    pub fn insert_named_object<T: Into<Primitive>>(
        &mut self,
        name: impl Into<String>,
        object: T,
    ) -> ObjectId {
        self.objects.push(SceneObject {
            name: Some(name.into()),
            primitive: object.into(),
        });
        ObjectId(self.objects.len() - 1)
    }

    /// Insert a material and returns the Material ID associated with this material
    pub fn insert_material(&mut self, label: Option<String>, material: Material) -> MaterialId {
        self.materials.push(MaterialDescriptor { label, material });
        MaterialId(self.materials.len() - 1)
    }

    pub fn insert_texture(&mut self, raster: Raster) -> TextureId {
        self.textures.push(raster);
        TextureId(self.textures.len() - 1)
    }

    /// Insert a light in the scene.
    ///
    /// There is a single ambient light: inserting one replaces the previous one.
    pub fn insert_light<L: Into<Light>>(&mut self, light: L) {
        match light.into() {
            Light::Ambient(l) => self.set_ambient_light(l),
            Light::Point(l) => self.point_lights.push(l),
            Light::Directional(l) => self.directional_lights.push(l),
            Light::Spot(l) => self.spot_lights.push(l),
        }
    }

    pub fn set_ambient_light(&mut self, light: AmbientLight) {
        self.ambient_light = Some(light);
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id.0)
    }

    /// The material behind `id`, [Material::DEFAULT] when `id` is not in the scene
    pub fn material(&self, id: MaterialId) -> Material {
        match self.materials.get(id.0) {
            Some(descriptor) => descriptor.material,
            None => {
                crate::warn_once!("material {} is not in the scene, using the default", id.0);
                Material::DEFAULT
            }
        }
    }

    /// Every light that has a position or a direction
    pub fn located_lights(&self) -> impl Iterator<Item = Light> + '_ {
        let points = self.point_lights.iter().copied().map(Light::from);
        let directionals = self.directional_lights.iter().copied().map(Light::from);
        let spots = self.spot_lights.iter().copied().map(Light::from);
        points.chain(directionals).chain(spots)
    }

    /// The nearest hit along `ray`, ties go to the object inserted first
    pub fn intersect(&self, mut ray: Ray) -> Option<HitRecord> {
        let mut nearest = None;
        for (i, object) in self.objects.iter().enumerate() {
            if let IntersectionResult::Intersection(hit) = object.primitive.intersection_full(ray) {
                ray.bounds.1 = hit.t;
                nearest = Some(HitRecord {
                    object: ObjectId(i),
                    t: hit.t,
                    local_info: hit.local_info,
                });
            }
        }
        nearest
    }

    /// Whether something stands between `point` and a light `distance` away in `direction`
    pub fn is_occluded(&self, point: Point, direction: glam::Vec3, distance: f32) -> bool {
        crate::counter!("Shadow rays");

        let bias = self.shadow_bias;
        if distance <= bias {
            return false;
        }

        let origin = point + direction * bias;
        let ray = Ray::new_with_range(origin, direction, crate::EPSILON..distance - bias);
        self.objects
            .iter()
            .any(|object| object.primitive.intersect_bare(ray).is_intersection())
    }

    pub fn is_in_shadow(&self, point: Point, light_position: Point) -> bool {
        let to_light = light_position - point;
        self.is_occluded(point, to_light.normalize_or_zero(), to_light.length())
    }

    /// The object seen through pixel (`x`, `y`) of `camera`
    pub fn pick(&self, camera: &Camera, x: u32, y: u32) -> Option<Pick> {
        let hit = self.intersect(camera.ray(x, y))?;
        let object = &self.objects[hit.object.0];
        Some(Pick {
            object: hit.object,
            kind: object.primitive.kind(),
            name: object.name.clone(),
            point: hit.local_info.pos,
            distance: hit.t,
        })
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::{
        camera::Camera,
        color,
        light::{AmbientLight, PointLight},
        material::{Material, MaterialId},
        math::point::Point,
        ray::Ray,
        shape::{Plane, PrimitiveKind, Sphere},
    };

    use super::{ObjectId, Scene};

    fn two_spheres() -> Scene {
        let mut scene = Scene::default();
        let material = scene.insert_material(None, Material::default());
        scene.insert_named_object("far", Sphere::new(Point::new(0.0, 0.0, -10.0), 1.0, material));
        scene.insert_named_object("near", Sphere::new(Point::new(0.0, 0.0, -5.0), 1.0, material));
        scene
    }

    #[test]
    fn nearest_hit_wins() {
        let scene = two_spheres();
        let hit = scene.intersect(Ray::new(Point::ORIGIN, -Vec3::Z));
        assert!(hit.is_some_and(|hit| hit.object == ObjectId(1) && (hit.t - 4.0).abs() < 1e-5));

        assert!(scene.intersect(Ray::new(Point::ORIGIN, Vec3::Z)).is_none());
    }

    #[test]
    fn ties_go_to_first_inserted() {
        let mut scene = Scene::default();
        let a = scene.insert_material(Some("a".to_owned()), Material::default());
        let b = scene.insert_material(Some("b".to_owned()), Material::default());
        scene.insert_object(Plane::new(Point::ORIGIN, Vec3::Y, a));
        scene.insert_object(Plane::new(Point::ORIGIN, Vec3::Y, b));

        let hit = scene.intersect(Ray::new(Point::new(0.0, 1.0, 0.0), -Vec3::Y));
        assert!(hit.is_some_and(|hit| hit.object == ObjectId(0) && hit.local_info.material == a));
    }

    #[test]
    fn light_insertion_dispatches_by_kind() {
        let mut scene = Scene::default();
        scene.insert_light(AmbientLight {
            intensity: color::gray(0.1),
        });
        scene.insert_light(AmbientLight {
            intensity: color::gray(0.3),
        });
        scene.insert_light(PointLight::new(Point::ORIGIN, color::WHITE));

        assert_eq!(
            scene.ambient_light.map(|l| l.intensity),
            Some(color::gray(0.3))
        );
        assert_eq!(scene.point_lights.len(), 1);
        assert_eq!(scene.located_lights().count(), 1);
    }

    #[test]
    fn shadow_ray_stops_at_the_light() {
        let scene = two_spheres();
        let point = Point::ORIGIN;
        // The near sphere is between the point and a light behind it
        assert!(scene.is_in_shadow(point, Point::new(0.0, 0.0, -20.0)));
        // A light in front of the near sphere is visible
        assert!(!scene.is_in_shadow(point, Point::new(0.0, 0.0, -2.0)));
        // Nothing in the other direction
        assert!(!scene.is_in_shadow(point, Point::new(0.0, 0.0, 20.0)));
    }

    #[test]
    fn missing_material_falls_back() {
        let scene = Scene::default();
        assert_eq!(scene.material(MaterialId(42)), Material::DEFAULT);
    }

    #[test]
    fn pick_reports_the_nearest_named_object() {
        let scene = two_spheres();
        let camera = Camera::new(
            Point::ORIGIN,
            Point::new(0.0, 0.0, -1.0),
            Vec3::Y,
            1.0,
            2.0,
            2.0,
            101,
            101,
        );

        let pick = scene.pick(&camera, 50, 50);
        assert!(pick.as_ref().is_some_and(|p| p.kind == PrimitiveKind::Sphere
            && p.name.as_deref() == Some("near")
            && (p.distance - 4.0).abs() < 1e-4
            && p.point.distance(Point::new(0.0, 0.0, -4.0)) < 1e-3));

        let report = pick.map(|p| p.to_string()).unwrap_or_default();
        assert!(report.contains("Type: Sphere"));
        assert!(report.contains("Name: near"));

        assert!(scene.pick(&camera, 0, 0).is_none());
    }
}
