//! Surface color functions evaluated at a 3D hit point.
//!
//! A texture is either procedural (a closed set of patterns) or sampled from a
//! raster image owned by the scene and referenced through a [TextureId].

use std::path::Path;

use anyhow::Context;
use glam::Vec3;

use crate::{
    color::{self, Color},
    math::point::Point,
};

pub type Uv = [f32; 2];

/// Index of a [Raster] in the scene texture store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Texture {
    #[default]
    None,
    Procedural(Procedural),
    Image {
        raster: TextureId,
        mapping: Mapping,
    },
}

impl Texture {
    /// Color of the texture at `p`, `None` when no texture is bound.
    pub fn color_at(&self, p: Point, rasters: &[Raster]) -> Option<Color> {
        match *self {
            Texture::None => None,
            Texture::Procedural(procedural) => Some(procedural.color(p)),
            Texture::Image { raster, mapping } => {
                let color = match rasters.get(raster.0) {
                    Some(raster) => raster.sample(mapping.uv(p)),
                    None => {
                        crate::warn_once!("texture {} is not in the scene", raster.0);
                        color::MISSING_TEXTURE
                    }
                };
                Some(color)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Procedural {
    /// Two-tone bands along `axis`, like growth rings seen from the side
    Wood {
        axis: Vec3,
        frequency: f32,
        light: Color,
        dark: Color,
    },
    /// A window spanned by `u_axis` and `v_axis` from its corner `origin`:
    /// a yellow cross, concentric rings at the center, one color per quadrant
    StainedGlass {
        origin: Point,
        u_axis: Vec3,
        v_axis: Vec3,
    },
    /// Alternating squares of side `1 / scale` in the `xz` plane
    Checker { scale: f32, odd: Color, even: Color },
}

impl Procedural {
    pub fn wood() -> Self {
        Procedural::Wood {
            axis: Vec3::Y,
            frequency: 1.0,
            light: Color::new(1.0, 0.8, 0.3),
            dark: Color::new(0.3, 0.15, 0.05),
        }
    }

    pub fn color(&self, p: Point) -> Color {
        match *self {
            Procedural::Wood {
                axis,
                frequency,
                light,
                dark,
            } => {
                let grain = f32::sin(p.vec().dot(axis) * frequency) * 0.5 + 0.5;
                if grain > 0.5 {
                    light
                } else {
                    dark
                }
            }
            Procedural::StainedGlass {
                origin,
                u_axis,
                v_axis,
            } => {
                let local = p - origin;
                let u = local.dot(u_axis) / u_axis.length_squared();
                let v = local.dot(v_axis) / v_axis.length_squared();
                stained_glass(u, v)
            }
            Procedural::Checker { scale, odd, even } => {
                let x = (p.0.x * scale).floor();
                let z = (p.0.z * scale).floor();
                let parity = (x + z).rem_euclid(2.0);
                if parity < 0.5 {
                    even
                } else {
                    odd
                }
            }
        }
    }
}

fn stained_glass(u: f32, v: f32) -> Color {
    const CROSS_HALF_WIDTH: f32 = 0.15;
    let du = u - 0.5;
    let dv = v - 0.5;

    if du.abs() < CROSS_HALF_WIDTH || dv.abs() < CROSS_HALF_WIDTH {
        return color::YELLOW;
    }

    let dist = f32::sqrt(du * du + dv * dv);
    if dist < 0.15 {
        return color::WHITE;
    }
    if dist < 0.25 {
        return color::RED;
    }
    if dist < 0.35 {
        return Color::new(0.0, 0.5, 1.0);
    }

    match (du > 0.0, dv > 0.0) {
        (true, true) => color::GREEN,
        (false, true) => Color::new(1.0, 0.8, 0.0),
        (false, false) => color::MAGENTA,
        (true, false) => Color::new(1.0, 0.5, 0.0),
    }
}

/// How a hit point is turned into texture coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mapping {
    /// Longitude / latitude around `center`
    Spherical { center: Point },
    /// The `x` and `z` world coordinates, tiled every `1 / scale`
    Planar { scale: f32 },
}

impl Mapping {
    pub fn uv(&self, p: Point) -> Uv {
        match *self {
            Mapping::Spherical { center } => {
                let d = (p - center).normalize_or_zero();
                let theta = f32::atan2(d.z, d.x);
                let phi = d.y.clamp(-1.0, 1.0).asin();
                let u = (theta + std::f32::consts::PI) / std::f32::consts::TAU;
                let v = (phi + std::f32::consts::FRAC_PI_2) / std::f32::consts::PI;
                [u, v]
            }
            Mapping::Planar { scale } => [
                (p.0.x * scale).rem_euclid(1.0),
                (p.0.z * scale).rem_euclid(1.0),
            ],
        }
    }
}

/// An image texture. A raster that failed to load samples to [color::MISSING_TEXTURE].
#[derive(Debug, Clone, Default)]
pub struct Raster {
    pub label: Option<String>,
    image: Option<image::RgbImage>,
}

impl Raster {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        log::info!("Loading texture {}", path.display());
        let image = image::open(path)
            .with_context(|| format!("failed to load texture {}", path.display()))?
            .into_rgb8();
        log::debug!("Texture {}: {}x{}", path.display(), image.width(), image.height());

        Ok(Self {
            label: Some(path.display().to_string()),
            image: Some(image),
        })
    }

    /// Load `path`, falling back to a missing raster if loading fails
    pub fn load_or_missing<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(raster) => raster,
            Err(err) => {
                log::error!("{err:#}");
                Self::missing()
            }
        }
    }

    pub fn from_image(image: image::RgbImage) -> Self {
        Self {
            label: None,
            image: Some(image),
        }
    }

    pub fn missing() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.image.is_some()
    }

    /// Nearest pixel lookup, `uv` wraps around and `v` points up
    pub fn sample(&self, uv: Uv) -> Color {
        let Some(image) = self.image.as_ref().filter(|i| i.width() > 0 && i.height() > 0) else {
            crate::warn_once!("sampling a texture that is not loaded");
            return color::MISSING_TEXTURE;
        };

        let [u, v] = uv;
        let u = u - u.floor();
        let v = v - v.floor();

        let max_x = image.width() - 1;
        let max_y = image.height() - 1;
        let x = ((u * max_x as f32) as u32).min(max_x);
        let y = (((1.0 - v) * max_y as f32) as u32).min(max_y);

        let image::Rgb([r, g, b]) = *image.get_pixel(x, y);
        Color::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }
}
