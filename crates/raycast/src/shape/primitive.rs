use derive_more::Display;

use crate::{
    material::MaterialId,
    math::transform::{Transform, Transformer},
    ray::Ray,
};

use super::{
    Cone, Cylinder, FullIntersectionResult, Mesh, MinIntersectionResult, Plane, Shape, Sphere,
    Triangle,
};

/// Every kind of shape a scene can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
    Cylinder(Cylinder),
    Cone(Cone),
    Triangle(Triangle),
    Mesh(Mesh),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum PrimitiveKind {
    Sphere,
    Plane,
    Cylinder,
    Cone,
    Triangle,
    Mesh,
}

impl Primitive {
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Primitive::Sphere(_) => PrimitiveKind::Sphere,
            Primitive::Plane(_) => PrimitiveKind::Plane,
            Primitive::Cylinder(_) => PrimitiveKind::Cylinder,
            Primitive::Cone(_) => PrimitiveKind::Cone,
            Primitive::Triangle(_) => PrimitiveKind::Triangle,
            Primitive::Mesh(_) => PrimitiveKind::Mesh,
        }
    }

    /// The material of the shape, the default one for a mesh
    pub fn material(&self) -> MaterialId {
        match self {
            Primitive::Sphere(s) => s.material,
            Primitive::Plane(s) => s.material,
            Primitive::Cylinder(s) => s.material,
            Primitive::Cone(s) => s.material,
            Primitive::Triangle(s) => s.material,
            Primitive::Mesh(s) => s.material,
        }
    }

    fn as_shape(&self) -> &dyn Shape {
        match self {
            Primitive::Sphere(s) => s,
            Primitive::Plane(s) => s,
            Primitive::Cylinder(s) => s,
            Primitive::Cone(s) => s,
            Primitive::Triangle(s) => s,
            Primitive::Mesh(s) => s,
        }
    }
}

impl Shape for Primitive {
    fn intersection_full(&self, ray: Ray) -> FullIntersectionResult {
        self.as_shape().intersection_full(ray)
    }

    fn intersect_bare(&self, ray: Ray) -> MinIntersectionResult {
        self.as_shape().intersect_bare(ray)
    }
}

impl Transformer<Primitive> for Transform {
    fn apply(&self, primitive: Primitive) -> Primitive {
        match primitive {
            Primitive::Sphere(s) => Primitive::Sphere(self.apply(s)),
            Primitive::Plane(s) => Primitive::Plane(self.apply(s)),
            Primitive::Cylinder(s) => Primitive::Cylinder(self.apply(s)),
            Primitive::Cone(s) => Primitive::Cone(self.apply(s)),
            Primitive::Triangle(s) => Primitive::Triangle(self.apply(s)),
            Primitive::Mesh(s) => Primitive::Mesh(self.apply(s)),
        }
    }
}

macro_rules! impl_from_shape {
    ($($shape:ident),*) => {
        $(
            impl From<$shape> for Primitive {
                fn from(shape: $shape) -> Self {
                    Primitive::$shape(shape)
                }
            }
        )*
    };
}

impl_from_shape!(Sphere, Plane, Cylinder, Cone, Triangle, Mesh);
