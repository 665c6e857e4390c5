//! RGB color algebra.
//!
//! Channels are nominally in `[0, 1]` but may exceed it while light contributions
//! are summed; they are clamped only when a final color is produced.

use std::ops::{Add, AddAssign, Div, Mul};

use crate::math::vec::{ColorAsVec3Ext, Vec3AsColorExt};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Zeroable, bytemuck::Pod)]
pub struct Color(pub [f32; 3]);

pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
pub const RED: Color = Color::new(1.0, 0.0, 0.0);
pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);
pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);
pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0);
pub const CYAN: Color = Color::new(0.0, 1.0, 1.0);
pub const MAGENTA: Color = Color::new(1.0, 0.0, 1.0);

/// Returned when sampling a texture that could not be loaded
pub const MISSING_TEXTURE: Color = MAGENTA;

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self([r, g, b])
    }

    pub const fn from_array(arr: [f32; 3]) -> Self {
        Self(arr)
    }

    pub const fn to_array(self) -> [f32; 3] {
        self.0
    }

    pub const fn r(self) -> f32 {
        self.0[0]
    }

    pub const fn g(self) -> f32 {
        self.0[1]
    }

    pub const fn b(self) -> f32 {
        self.0[2]
    }

    /// Restrict each channel to `[min, max]` independently, a NaN channel becomes `min`
    pub fn clamp(self, min: f32, max: f32) -> Self {
        Self(self.0.map(|c| c.max(min).min(max)))
    }

    /// Quantize to 8 bits per channel, rounding `c * 255` into `[0, 255]`
    pub fn to_byte_array(self) -> [u8; 3] {
        self.0.map(|c| (c * 255.).round().clamp(0., 255.) as u8)
    }
}

pub fn gray(c: f32) -> Color {
    Color::new(c, c, c)
}

impl Add for Color {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        (self.vec() + rhs.vec()).color()
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Channel-wise product, used to filter light by a reflectance
impl Mul for Color {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        (self.vec() * rhs.vec()).color()
    }
}

impl Mul<f32> for Color {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        (self.vec() * rhs).color()
    }
}

impl Mul<Color> for f32 {
    type Output = Color;

    fn mul(self, rhs: Color) -> Self::Output {
        rhs * self
    }
}

impl Div<f32> for Color {
    type Output = Self;

    fn div(self, rhs: f32) -> Self::Output {
        (self.vec() / rhs).color()
    }
}

impl From<[f32; 3]> for Color {
    fn from(val: [f32; 3]) -> Self {
        Color(val)
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(val: Color) -> Self {
        image::Rgb(val.to_byte_array())
    }
}
