use std::path::Path;

use anyhow::Context;

use crate::{
    color::Color,
    material::{Material, MaterialId},
    math::{
        point::Point,
        transform::{Transform, Transformer},
    },
    scene::{ObjectId, Scene},
    shape::Mesh,
};

pub trait ObjLoaderExt {
    /// Load every model of a Wavefront OBJ file into a single mesh object.
    ///
    /// Materials described by the companion MTL file are inserted in the scene,
    /// faces without one use `default_material`.
    fn load_obj<P: AsRef<Path>>(
        &mut self,
        mesh_path: P,
        transform: &Transform,
        default_material: MaterialId,
    ) -> anyhow::Result<ObjectId>;
}

impl ObjLoaderExt for Scene {
    fn load_obj<P: AsRef<Path>>(
        &mut self,
        mesh_path: P,
        transform: &Transform,
        default_material: MaterialId,
    ) -> anyhow::Result<ObjectId> {
        let mesh_path = mesh_path.as_ref();
        log::info!("Loading mesh {}", mesh_path.display());

        let (models, materials) = tobj::load_obj(mesh_path, &tobj::GPU_LOAD_OPTIONS)
            .with_context(|| format!("failed to load OBJ file {}", mesh_path.display()))?;

        let material_ids: Vec<MaterialId> = match materials {
            Ok(materials) => materials
                .into_iter()
                .map(|material| {
                    log::debug!(
                        "Inserting material {} with diffuse {:?}",
                        material.name,
                        material.diffuse
                    );
                    self.insert_material(
                        Some(material.name),
                        Material::new(
                            Color::from_array(material.ambient),
                            Color::from_array(material.diffuse),
                            Color::from_array(material.specular),
                            material.shininess,
                        ),
                    )
                })
                .collect(),
            Err(err) => {
                log::debug!("No material for {}: {err}", mesh_path.display());
                Vec::new()
            }
        };

        let mut merged = Mesh::new(default_material);
        for model in models {
            let mesh = model.mesh;
            log::debug!("Loading model {}", model.name);

            let material = mesh
                .material_id
                .and_then(|id| material_ids.get(id).copied())
                .unwrap_or(default_material);

            let vertices: Vec<Point> = mesh
                .positions
                .chunks_exact(3)
                .map(|p| transform.apply(Point::new(p[0], p[1], p[2])))
                .collect();
            let faces: Vec<[usize; 3]> = mesh
                .indices
                .chunks_exact(3)
                .map(|f| [f[0] as usize, f[1] as usize, f[2] as usize])
                .collect();

            merged.merge(Mesh::from_indexed(&vertices, &faces, material));
        }

        log::info!(
            "Loaded {} triangles from {}",
            merged.len(),
            mesh_path.display()
        );
        Ok(self.insert_named_object(mesh_path.display().to_string(), merged))
    }
}
