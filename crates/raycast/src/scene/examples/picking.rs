use glam::Vec3;

use crate::{
    camera::Camera,
    color::Color,
    light::{AmbientLight, PointLight},
    material::Material,
    math::point::Point,
    scene::Scene,
    shape::{Cylinder, Plane, Sphere},
};

/// A few named objects on a floor, for testing picking.
pub struct PickingScene;

impl PickingScene {
    pub fn insert_into(scene: &mut Scene) {
        let red = scene.insert_material(
            Some("Red".to_owned()),
            Material::new(
                Color::new(0.2, 0.0, 0.0),
                Color::new(0.8, 0.1, 0.1),
                Color::new(0.8, 0.8, 0.8),
                50.0,
            ),
        );
        let blue = scene.insert_material(
            Some("Blue".to_owned()),
            Material::new(
                Color::new(0.0, 0.0, 0.2),
                Color::new(0.2, 0.3, 0.8),
                Color::new(0.9, 0.9, 0.9),
                100.0,
            ),
        );
        let green = scene.insert_material(
            Some("Green".to_owned()),
            Material::new(
                Color::new(0.0, 0.2, 0.0),
                Color::new(0.3, 0.8, 0.3),
                Color::new(0.2, 0.2, 0.2),
                10.0,
            ),
        );
        let floor = scene.insert_material(
            Some("Floor".to_owned()),
            Material::new(
                Color::new(0.3, 0.3, 0.3),
                Color::new(0.6, 0.6, 0.6),
                Color::new(0.1, 0.1, 0.1),
                5.0,
            ),
        );

        scene.insert_named_object("Red sphere", Sphere::new(Point::new(5.0, 2.0, 5.0), 1.0, red));
        scene.insert_named_object("Blue sphere", Sphere::new(Point::new(3.0, 1.0, 7.0), 0.8, blue));
        scene.insert_named_object(
            "Green cylinder",
            Cylinder::new(Point::new(7.0, 0.0, 6.0), Vec3::Y, 0.5, 2.5, green),
        );
        scene.insert_named_object("Floor", Plane::new(Point::ORIGIN, Vec3::Y, floor));

        scene.insert_light(AmbientLight {
            intensity: Color::new(0.3, 0.3, 0.3),
        });
        scene.insert_light(PointLight::new(
            Point::new(5.0, 6.0, 3.0),
            Color::new(0.8, 0.8, 0.8),
        ));
    }

    pub fn camera(width: u32, height: u32) -> Camera {
        Camera::new(
            Point::new(10.0, 4.0, 2.0),
            Point::new(5.0, 2.0, 5.0),
            Vec3::Y,
            3.0,
            4.0,
            4.0,
            width,
            height,
        )
    }

    /// Pixels worth picking, with what should be there
    pub fn probes(width: u32, height: u32) -> Vec<(u32, u32, &'static str)> {
        let at = |fx: f32, fy: f32| ((fx * width as f32) as u32, (fy * height as f32) as u32);
        [
            (at(0.5, 0.5), "center"),
            (at(0.4, 0.4), "upper left"),
            (at(0.6, 0.6), "lower right"),
            (at(0.8, 0.2), "upper right side"),
            (at(0.2, 0.8), "lower left side"),
            (at(0.5, 0.8), "lower center"),
            ((0, 0), "top left corner"),
            ((width.saturating_sub(1), height.saturating_sub(1)), "bottom right corner"),
        ]
        .into_iter()
        .map(|((x, y), label)| (x, y, label))
        .collect()
    }
}
