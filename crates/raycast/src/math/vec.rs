pub use glam::Vec3;

use crate::color::Color;

pub trait ColorAsVec3Ext {
    fn vec(&self) -> Vec3;
}

impl ColorAsVec3Ext for Color {
    fn vec(&self) -> Vec3 {
        Vec3::from_array(self.0)
    }
}

pub trait Vec3AsColorExt {
    fn color(&self) -> Color;
}

impl Vec3AsColorExt for Vec3 {
    fn color(&self) -> Color {
        Color(self.to_array())
    }
}

pub trait ReflectVecExt {
    fn reflect(self, normal: Vec3) -> Vec3;
}

impl ReflectVecExt for Vec3 {
    /// Mirror `self` about the unit `normal`: `v - 2(v.n)n`
    fn reflect(self, normal: Vec3) -> Vec3 {
        self - (2.0 * self.dot(normal) * normal)
    }
}
