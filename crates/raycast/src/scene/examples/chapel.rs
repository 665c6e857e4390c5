use glam::Vec3;

use crate::{
    camera::Camera,
    color::Color,
    light::{AmbientLight, DirectionalLight, PointLight},
    material::{Mapping, Material, Procedural, Raster, Texture},
    math::point::Point,
    scene::Scene,
    shape::{Cone, Cylinder, Mesh, Plane, Sphere},
};

/// A small chapel: wooden pews and altar, a monstrance, a candle and a stained glass window.
pub struct ChapelScene;

impl ChapelScene {
    /// `window_texture` is wrapped around the two round side windows
    pub fn insert_into(scene: &mut Scene, window_texture: Option<Raster>) {
        scene.set_background(Color::new(0.3, 0.35, 0.4));

        let altar = scene.insert_material(
            Some("Altar".to_owned()),
            Material::new(
                Color::new(0.6, 0.6, 0.6),
                Color::new(0.9, 0.9, 0.9),
                Color::new(0.5, 0.5, 0.5),
                30.0,
            ),
        );
        let gold = scene.insert_material(
            Some("Gold".to_owned()),
            Material::new(
                Color::new(0.3, 0.25, 0.1),
                Color::new(0.9, 0.75, 0.3),
                Color::new(1.0, 0.95, 0.7),
                100.0,
            ),
        );
        let wall = scene.insert_material(
            Some("Wall".to_owned()),
            Material::new(
                Color::new(0.35, 0.33, 0.30),
                Color::new(0.7, 0.68, 0.65),
                Color::new(0.2, 0.2, 0.2),
                10.0,
            ),
        );
        let floor = scene.insert_material(
            Some("Floor".to_owned()),
            Material::new(
                Color::new(0.3, 0.25, 0.18),
                Color::new(0.6, 0.5, 0.4),
                Color::new(0.3, 0.25, 0.2),
                20.0,
            ),
        );
        let candle = scene.insert_material(
            Some("Candle".to_owned()),
            Material::new(
                Color::new(0.4, 0.1, 0.1),
                Color::new(0.8, 0.2, 0.15),
                Color::new(1.0, 0.4, 0.3),
                60.0,
            ),
        );
        let wood = scene.insert_material(
            Some("Wood".to_owned()),
            Material::new(
                Color::new(0.9, 0.7, 0.5),
                Color::new(0.9, 0.7, 0.5),
                Color::new(0.3, 0.3, 0.3),
                20.0,
            )
            .with_texture(Texture::Procedural(Procedural::wood())),
        );
        let stained_glass = scene.insert_material(
            Some("Stained glass".to_owned()),
            Material::new(
                Color::new(1.0, 1.0, 1.0),
                Color::new(1.0, 1.0, 1.0),
                Color::new(0.5, 0.5, 0.5),
                50.0,
            )
            .with_texture(Texture::Procedural(Procedural::StainedGlass {
                origin: Point::new(5.4, 3.0, 19.5),
                u_axis: Vec3::new(1.2, 0.0, 0.0),
                v_axis: Vec3::new(0.0, 2.8, 0.0),
            })),
        );

        let window_material = Material::new(
            Color::new(0.4, 0.5, 0.6),
            Color::new(0.6, 0.7, 0.8),
            Color::new(0.8, 0.9, 1.0),
            50.0,
        );
        let window_texture = window_texture.map(|raster| scene.insert_texture(raster));

        // Structure
        scene.insert_named_object("Floor", Plane::new(Point::new(6.0, 0.0, 10.0), Vec3::Y, floor));
        scene.insert_named_object(
            "Front wall",
            Plane::new(Point::new(6.0, 0.0, 20.0), -Vec3::Z, wall),
        );
        scene.insert_named_object("Left wall", Plane::new(Point::new(0.0, 0.0, 10.0), Vec3::X, wall));
        scene.insert_named_object(
            "Right wall",
            Plane::new(Point::new(12.0, 0.0, 10.0), -Vec3::X, wall),
        );
        scene.insert_named_object("Ceiling", Plane::new(Point::new(6.0, 8.0, 10.0), -Vec3::Y, wall));

        // Altar and monstrance
        let altar_height = 0.8;
        scene.insert_named_object(
            "Altar",
            Mesh::cuboid(
                Point::new(4.5, 0.0, 17.5),
                Point::new(7.5, altar_height, 18.5),
                wood,
            ),
        );
        let monstrance = Point::new(6.0, altar_height + 0.6, 18.0);
        scene.insert_named_object(
            "Monstrance stand",
            Cone::new(Point::new(6.0, altar_height, 18.0), Vec3::Y, 0.2, 0.3, gold),
        );
        scene.insert_named_object("Host", Sphere::new(monstrance, 0.14, altar));
        for i in 0..7 {
            let angle = i as f32 * std::f32::consts::TAU / 7.0;
            let ray = monstrance + 0.3 * Vec3::new(angle.cos(), angle.sin(), 0.0);
            scene.insert_object(Sphere::new(ray, 0.03, gold));
        }

        // Stained glass window, a rectangle under a triangular top
        let mut window = Mesh::new(stained_glass);
        let [b1, b2, b3, b4, top] = [
            Point::new(5.4, 3.0, 19.5),
            Point::new(6.6, 3.0, 19.5),
            Point::new(6.6, 5.0, 19.5),
            Point::new(5.4, 5.0, 19.5),
            Point::new(6.0, 5.8, 19.5),
        ];
        window.push_triangle([b1, b2, b3]);
        window.push_triangle([b1, b3, b4]);
        window.push_triangle([b4, b3, top]);
        scene.insert_named_object("Stained glass", window);

        // Round side windows
        for (name, center) in [
            ("Left window", Point::new(1.0, 5.0, 17.0)),
            ("Right window", Point::new(11.0, 5.0, 17.0)),
        ] {
            let material = match window_texture {
                Some(raster) => window_material.with_texture(Texture::Image {
                    raster,
                    mapping: Mapping::Spherical { center },
                }),
                None => window_material,
            };
            let material = scene.insert_material(Some(name.to_owned()), material);
            scene.insert_named_object(name, Sphere::new(center, 0.8, material));
        }

        // Pews
        for row in 0..4 {
            let z = 3.0 + row as f32 * 2.2;
            for x in [2.0, 10.0] {
                scene.insert_named_object(
                    format!("Pew {row}"),
                    Mesh::cuboid(
                        Point::new(x - 1.0, 0.0, z - 0.25),
                        Point::new(x + 1.0, 0.45, z + 0.25),
                        wood,
                    ),
                );
            }
        }

        scene.insert_named_object(
            "Candle",
            Cylinder::new(Point::new(8.0, 1.1, 17.5), Vec3::Y, 0.12, 0.3, candle),
        );

        scene.insert_light(AmbientLight {
            intensity: Color::new(0.3, 0.3, 0.3),
        });
        scene.insert_light(DirectionalLight::new(
            Vec3::new(0.0, -0.6, 0.4),
            Color::new(0.3, 0.3, 0.3),
        ));
        scene.insert_light(PointLight::new(
            Point::new(6.0, 5.0, 17.0),
            Color::new(0.3, 0.3, 0.3),
        ));
        scene.insert_light(PointLight::new(
            Point::new(8.0, 1.25, 17.5),
            Color::new(2.0, 0.5, 0.3),
        ));
    }

    /// From the entrance, looking at the altar
    pub fn camera(width: u32, height: u32) -> Camera {
        let aspect = width as f32 / height.max(1) as f32;
        Camera::new(
            Point::new(6.0, 2.0, 1.0),
            Point::new(6.0, 2.0, 17.0),
            Vec3::Y,
            1.0,
            1.5 * aspect,
            1.5,
            width,
            height,
        )
    }
}
