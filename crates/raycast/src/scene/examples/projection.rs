use glam::Vec3;

use crate::{
    camera::Camera,
    color::Color,
    light::{AmbientLight, PointLight, SpotLight},
    material::{Material, Procedural, Texture},
    math::point::Point,
    scene::Scene,
    shape::{Cone, Cylinder, Mesh, Plane, Sphere, Triangle},
};

/// One primitive of each kind on a checkered floor, to compare projections.
pub struct ProjectionScene;

impl ProjectionScene {
    pub fn insert_into(scene: &mut Scene) {
        scene.set_background(Color::new(0.2, 0.2, 0.25));

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
        let yellow = scene.insert_material(
            Some("Yellow".to_owned()),
            Material::new(
                Color::new(0.2, 0.2, 0.0),
                Color::new(0.9, 0.8, 0.2),
                Color::new(0.5, 0.5, 0.5),
                30.0,
            ),
        );
        let floor = scene.insert_material(
            Some("Checkerboard".to_owned()),
            Material::new(
                Color::new(0.3, 0.25, 0.2),
                Color::new(0.6, 0.5, 0.4),
                Color::new(0.1, 0.1, 0.1),
                5.0,
            )
            .with_texture(Texture::Procedural(Procedural::Checker {
                scale: 1.0,
                odd: Color::new(0.3, 0.3, 0.3),
                even: Color::new(0.8, 0.8, 0.8),
            })),
        );

        scene.insert_named_object("Central sphere", Sphere::new(Point::new(5.0, 2.0, 5.0), 1.0, red));
        scene.insert_named_object("Blue sphere", Sphere::new(Point::new(3.0, 1.0, 7.0), 0.8, blue));
        scene.insert_named_object(
            "Cylinder",
            Cylinder::new(Point::new(7.0, 0.0, 6.0), Vec3::Y, 0.5, 2.5, green),
        );
        scene.insert_named_object(
            "Cone",
            Cone::from_base(Point::new(6.5, 0.0, 3.0), Vec3::Y, 0.6, 1.5, yellow),
        );
        scene.insert_named_object(
            "Triangle",
            Triangle::new(
                [
                    Point::new(2.0, 0.0, 3.0),
                    Point::new(3.5, 0.0, 2.0),
                    Point::new(2.5, 2.0, 2.5),
                ],
                yellow,
            ),
        );
        scene.insert_named_object(
            "Box",
            Mesh::cuboid(Point::new(3.5, 0.0, 4.0), Point::new(4.3, 0.8, 4.8), blue),
        );
        scene.insert_named_object("Floor", Plane::new(Point::ORIGIN, Vec3::Y, floor));

        scene.insert_light(AmbientLight {
            intensity: Color::new(0.3, 0.3, 0.3),
        });
        scene.insert_light(PointLight::new(
            Point::new(5.0, 6.0, 3.0),
            Color::new(0.8, 0.8, 0.8),
        ));
        scene.insert_light(SpotLight::new(
            Point::new(5.0, 5.0, 8.0),
            Vec3::new(0.0, -1.0, -0.6),
            Color::new(0.4, 0.4, 0.3),
            25.0,
            4.0,
        ));
    }

    /// The same viewpoint is used for every projection
    pub fn camera(width: u32, height: u32) -> Camera {
        let aspect = width as f32 / height.max(1) as f32;
        Camera::new(
            Point::new(10.0, 4.0, 2.0),
            Point::new(5.0, 2.0, 5.0),
            Vec3::Y,
            3.0,
            8.0 * aspect,
            8.0,
            width,
            height,
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{camera::Camera, renderer::Renderer, scene::Scene};

    use super::ProjectionScene;

    #[test]
    fn every_projection_renders_something() {
        let mut scene = Scene::default();
        ProjectionScene::insert_into(&mut scene);
        let mut camera = ProjectionScene::camera(32, 32);

        let projections: [fn(&mut Camera); 4] = [
            Camera::set_perspective,
            Camera::set_orthographic,
            Camera::set_oblique_cavalier,
            Camera::set_oblique_cabinet,
        ];

        let mut frames = Vec::new();
        for set_projection in projections {
            set_projection(&mut camera);
            let frame = Renderer::new(&scene, &camera).render_frame();
            assert!(frame.pixels.iter().any(|&c| c != scene.background));
            frames.push(frame);
        }

        assert_ne!(frames[0], frames[1]);
        assert_ne!(frames[2], frames[3]);
    }
}
