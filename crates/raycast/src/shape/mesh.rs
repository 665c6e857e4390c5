use crate::{
    material::MaterialId,
    math::{
        point::Point,
        transform::{Transform, Transformer},
    },
    ray::Ray,
};

use super::{
    FullIntersectionResult, IntersectionResult, MinIntersectionResult, Shape, Triangle,
};

/// An ordered list of triangles sharing a default material.
///
/// Intersection is a linear scan: fine for furniture, slow for scanned models.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    pub material: MaterialId,
    triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new(material: MaterialId) -> Self {
        Self {
            material,
            triangles: Vec::new(),
        }
    }

    pub fn push_triangle(&mut self, vertices: [Point; 3]) {
        self.triangles.push(Triangle::new(vertices, self.material));
    }

    /// Push a triangle that does not use the mesh material
    pub fn push_triangle_with_material(&mut self, vertices: [Point; 3], material: MaterialId) {
        self.triangles.push(Triangle::new(vertices, material));
    }

    /// Build a mesh out of a vertex buffer and triangle faces indexing it.
    ///
    /// Faces refering to a vertex outside the buffer are skipped.
    pub fn from_indexed(vertices: &[Point], faces: &[[usize; 3]], material: MaterialId) -> Self {
        let mut mesh = Self::new(material);
        mesh.triangles.reserve(faces.len());
        for face in faces {
            match face.map(|i| vertices.get(i).copied()) {
                [Some(a), Some(b), Some(c)] => mesh.push_triangle([a, b, c]),
                _ => crate::warn_once!("mesh face {face:?} refers to a missing vertex"),
            }
        }
        mesh
    }

    /// An axis aligned box spanning `min` to `max`, normals pointing outwards
    pub fn cuboid(min: Point, max: Point, material: MaterialId) -> Self {
        let corners: Vec<Point> = (0..8)
            .map(|i| {
                Point::new(
                    if i & 1 == 0 { min.0.x } else { max.0.x },
                    if i & 2 == 0 { min.0.y } else { max.0.y },
                    if i & 4 == 0 { min.0.z } else { max.0.z },
                )
            })
            .collect();

        const FACES: [[usize; 3]; 12] = [
            // -X
            [0, 4, 6],
            [0, 6, 2],
            // +X
            [1, 3, 7],
            [1, 7, 5],
            // -Y
            [0, 1, 5],
            [0, 5, 4],
            // +Y
            [2, 6, 7],
            [2, 7, 3],
            // -Z
            [0, 2, 3],
            [0, 3, 1],
            // +Z
            [4, 5, 7],
            [4, 7, 6],
        ];
        Self::from_indexed(&corners, &FACES, material)
    }

    /// Appends all the triangles of `other`, keeping their materials
    pub fn merge(&mut self, other: Mesh) {
        self.triangles.extend(other.triangles);
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

impl Shape for Mesh {
    fn intersection_full(&self, mut ray: Ray) -> FullIntersectionResult {
        let mut nearest = IntersectionResult::NoIntersection;
        for triangle in &self.triangles {
            if let IntersectionResult::Intersection(hit) = triangle.intersection_full(ray) {
                // Only strictly nearer hits get through from now on
                ray.bounds.1 = hit.t;
                nearest = IntersectionResult::Intersection(hit);
            }
        }
        nearest
    }

    fn intersect_bare(&self, mut ray: Ray) -> MinIntersectionResult {
        let mut nearest = IntersectionResult::NoIntersection;
        for triangle in &self.triangles {
            if let IntersectionResult::Intersection(hit) = triangle.intersect_bare(ray) {
                ray.bounds.1 = hit.t;
                nearest = IntersectionResult::Intersection(hit);
            }
        }
        nearest
    }
}

impl Transformer<Mesh> for Transform {
    fn apply(&self, mesh: Mesh) -> Mesh {
        Mesh {
            material: mesh.material,
            triangles: mesh.triangles.into_iter().map(|t| self.apply(t)).collect(),
        }
    }
}
