use glam::{Quat, Vec3};

use super::point::Point;

/// Represents a transformation as scale, then rotation, then translation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub scale: Vec3,
    pub rot: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

pub trait Transformer<T> {
    fn apply(&self, v: T) -> T;
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        scale: Vec3::ONE,
        rot: Quat::IDENTITY,
    };

    pub fn translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    pub fn scaling(scale: Vec3) -> Self {
        Self {
            scale,
            ..Self::IDENTITY
        }
    }

    /// Rotation of `angle` radians around an arbitrary `axis`
    pub fn rotation(axis: Vec3, angle: f32) -> Self {
        Self {
            rot: Quat::from_axis_angle(axis.normalize_or_zero(), angle),
            ..Self::IDENTITY
        }
    }

    pub fn into_matrix(&self) -> glam::Mat4 {
        glam::Mat4::from_scale_rotation_translation(self.scale, self.rot, self.translation)
    }

    /// Largest stretch factor of the transform, used to scale radii and lengths
    pub fn max_scale(&self) -> f32 {
        self.scale.abs().max_element()
    }

    /// Transform a surface normal. The result is normalized.
    ///
    /// Normals go through the inverse transpose, which for scale + rotation
    /// boils down to dividing by the scale before rotating.
    pub fn apply_normal(&self, normal: Vec3) -> Vec3 {
        self.rot.mul_vec3(normal / self.scale).normalize_or_zero()
    }
}

impl Transformer<Vec3> for Transform {
    /// Apply scale then rotation but not translation !
    fn apply(&self, v: Vec3) -> Vec3 {
        self.rot.mul_vec3(self.scale * v)
    }
}

impl Transformer<Point> for Transform {
    /// Apply scale then rotation then translation
    fn apply(&self, v: Point) -> Point {
        let scaled_rotated = self.rot.mul_vec3(self.scale * v.vec());
        Point(scaled_rotated) + self.translation
    }
}
