//! Light sources.
//!
//! The ambient light is a uniform term. Point, directional and spot lights are
//! located: seen from a surface point they have a direction, a distance used to
//! bound shadow rays, and an intensity.

use glam::Vec3;

use crate::{
    color::{self, Color},
    math::point::Point,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub intensity: Color,
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self {
            intensity: color::gray(0.2),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Point,
    pub intensity: Color,
    pub enabled: bool,
}

impl PointLight {
    pub fn new(position: Point, intensity: Color) -> Self {
        Self {
            position,
            intensity,
            enabled: true,
        }
    }
}

/// A light infinitely far away, shining along `direction`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// Unit direction the light travels in
    pub direction: Vec3,
    pub intensity: Color,
    pub enabled: bool,
}

impl DirectionalLight {
    pub fn new(direction: Vec3, intensity: Color) -> Self {
        Self {
            direction: direction.normalize_or_zero(),
            intensity,
            enabled: true,
        }
    }
}

/// A point light restricted to a cone around `direction`.
///
/// Inside the cone the intensity falls off as `cos(angle to axis)^falloff`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotLight {
    pub position: Point,
    /// Unit axis of the cone
    pub direction: Vec3,
    pub intensity: Color,
    /// Cosine of the half-angle of the cone
    pub cos_cutoff: f32,
    pub falloff: f32,
    pub enabled: bool,
}

impl SpotLight {
    /// `cutoff` is the half-angle of the cone, in degrees
    pub fn new(
        position: Point,
        direction: Vec3,
        intensity: Color,
        cutoff: f32,
        falloff: f32,
    ) -> Self {
        Self {
            position,
            direction: direction.normalize_or_zero(),
            intensity,
            cos_cutoff: cutoff.to_radians().cos(),
            falloff,
            enabled: true,
        }
    }

    /// Intensity received at `p`, black outside of the cone.
    ///
    /// A cone wider than a half-space still leaves everything behind the
    /// light in the dark.
    pub fn intensity_at(&self, p: Point) -> Color {
        let to_point = (p - self.position).normalize_or_zero();
        let cos = to_point.dot(self.direction);
        if cos < self.cos_cutoff || cos <= 0.0 {
            color::BLACK
        } else {
            self.intensity * cos.powf(self.falloff)
        }
    }
}

/// How a located light is seen from a surface point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Incidence {
    /// Unit vector from the point towards the light
    pub direction: Vec3,
    /// Distance to the light, infinite for directional lights
    pub distance: f32,
    pub intensity: Color,
}

/// Any light, used to insert lights of all kinds into a scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Ambient(AmbientLight),
    Point(PointLight),
    Directional(DirectionalLight),
    Spot(SpotLight),
}

impl Light {
    pub fn intensity(&self) -> Color {
        match self {
            Light::Ambient(l) => l.intensity,
            Light::Point(l) => l.intensity,
            Light::Directional(l) => l.intensity,
            Light::Spot(l) => l.intensity,
        }
    }

    pub fn is_enabled(&self) -> bool {
        match self {
            Light::Ambient(_) => true,
            Light::Point(l) => l.enabled,
            Light::Directional(l) => l.enabled,
            Light::Spot(l) => l.enabled,
        }
    }

    /// The light as seen from `p`.
    ///
    /// `None` for the ambient light, disabled lights and points the light
    /// does not reach.
    pub fn incidence(&self, p: Point) -> Option<Incidence> {
        if !self.is_enabled() {
            return None;
        }

        match *self {
            Light::Ambient(_) => None,
            Light::Point(light) => {
                let to_light = light.position - p;
                Some(Incidence {
                    direction: to_light.normalize_or_zero(),
                    distance: to_light.length(),
                    intensity: light.intensity,
                })
            }
            Light::Directional(light) => Some(Incidence {
                direction: -light.direction,
                distance: f32::INFINITY,
                intensity: light.intensity,
            }),
            Light::Spot(light) => {
                let intensity = light.intensity_at(p);
                if intensity == color::BLACK {
                    return None;
                }
                let to_light = light.position - p;
                Some(Incidence {
                    direction: to_light.normalize_or_zero(),
                    distance: to_light.length(),
                    intensity,
                })
            }
        }
    }
}

impl From<AmbientLight> for Light {
    fn from(l: AmbientLight) -> Self {
        Light::Ambient(l)
    }
}

impl From<PointLight> for Light {
    fn from(l: PointLight) -> Self {
        Light::Point(l)
    }
}

impl From<DirectionalLight> for Light {
    fn from(l: DirectionalLight) -> Self {
        Light::Directional(l)
    }
}

impl From<SpotLight> for Light {
    fn from(l: SpotLight) -> Self {
        Light::Spot(l)
    }
}
