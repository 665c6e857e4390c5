//! Phong reflectance coefficients, optionally driven by a texture.

pub mod texture;

pub use texture::{Mapping, Procedural, Raster, Texture, TextureId};

use crate::{color::Color, math::point::Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MaterialId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Ambient reflectance `ka`
    pub ambient: Color,
    /// Diffuse reflectance `kd`
    pub diffuse: Color,
    /// Specular reflectance `ks`
    pub specular: Color,
    /// Specular exponent
    pub shininess: f32,
    /// When bound, replaces `ambient` and `diffuse` with the texture color at the hit point
    pub texture: Texture,
}

/// The effective ambient and diffuse reflectances at a point of a surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reflectance {
    pub ambient: Color,
    pub diffuse: Color,
}

impl Material {
    pub const DEFAULT: Self = Self {
        ambient: Color::new(0.1, 0.1, 0.1),
        diffuse: Color::new(0.7, 0.7, 0.7),
        specular: Color::new(0.5, 0.5, 0.5),
        shininess: 10.0,
        texture: Texture::None,
    };

    pub fn new(ambient: Color, diffuse: Color, specular: Color, shininess: f32) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            shininess,
            texture: Texture::None,
        }
    }

    pub fn with_texture(self, texture: Texture) -> Self {
        Self { texture, ..self }
    }

    pub fn reflectance_at(&self, p: Point, rasters: &[Raster]) -> Reflectance {
        match self.texture.color_at(p, rasters) {
            Some(color) => Reflectance {
                ambient: color,
                diffuse: color,
            },
            None => Reflectance {
                ambient: self.ambient,
                diffuse: self.diffuse,
            },
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone)]
pub struct MaterialDescriptor {
    pub label: Option<String>,
    pub material: Material,
}
