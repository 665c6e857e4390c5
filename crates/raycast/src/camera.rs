use glam::Vec3;

use crate::{math::point::Point, ray::Ray};

/// How rays leave the view plane
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Projection {
    /// All rays start at the eye and go through the view plane
    #[default]
    Perspective,
    /// Parallel rays along the view direction, one origin per pixel
    Orthographic,
    /// Parallel rays tilted by `angle` (radians) with a depth scale `factor`
    Oblique { angle: f32, factor: f32 },
}

impl Projection {
    pub const CAVALIER: Self = Projection::Oblique {
        angle: std::f32::consts::FRAC_PI_4,
        factor: 1.0,
    };

    /// 63.4 degrees, half depth
    pub const CABINET: Self = Projection::Oblique {
        angle: 1.106_539,
        factor: 0.5,
    };
}

/// Orthonormal basis of the camera: `u` right, `v` up, `w` backwards
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    pub u: Vec3,
    pub v: Vec3,
    pub w: Vec3,
}

impl CameraFrame {
    fn new(eye: Point, at: Point, up: Vec3) -> Self {
        let w = match (eye - at).try_normalize() {
            Some(w) => w,
            None => {
                crate::warn_once!("camera eye and target are the same point, looking down -Z");
                Vec3::Z
            }
        };
        let u = match up.cross(w).try_normalize() {
            Some(u) => u,
            None => {
                crate::warn_once!("camera up vector is parallel to the view direction");
                w.any_orthonormal_vector()
            }
        };
        let v = w.cross(u);
        Self { u, v, w }
    }
}

/// A pinhole camera looking from `eye` to `at`.
///
/// The view plane sits `focal_distance` in front of the eye and spans
/// `view_width` by `view_height` world units, split into `width` by `height` pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    eye: Point,
    at: Point,
    up: Vec3,
    frame: CameraFrame,

    pub focal_distance: f32,
    /// Width of the view plane, in world unit
    pub view_width: f32,
    /// Height of the view plane, in world unit
    pub view_height: f32,
    /// Width of the image, in pixel
    pub width: u32,
    /// Height of the image, in pixel
    pub height: u32,
    pub projection: Projection,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(
            Point::ORIGIN,
            Point::new(0.0, 0.0, -1.0),
            Vec3::Y,
            1.0,
            2.0,
            2.0,
            500,
            500,
        )
    }
}

impl Camera {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        eye: Point,
        at: Point,
        up: Vec3,
        focal_distance: f32,
        view_width: f32,
        view_height: f32,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            eye,
            at,
            up,
            frame: CameraFrame::new(eye, at, up),
            focal_distance,
            view_width,
            view_height,
            width,
            height,
            projection: Projection::default(),
        }
    }

    pub fn eye(&self) -> Point {
        self.eye
    }

    pub fn at(&self) -> Point {
        self.at
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn frame(&self) -> CameraFrame {
        self.frame
    }

    pub fn look_at(&mut self, eye: Point, at: Point, up: Vec3) {
        self.eye = eye;
        self.at = at;
        self.up = up;
        self.frame = CameraFrame::new(eye, at, up);
    }

    /// Moves the eye and its target together
    pub fn translate(&mut self, delta: Vec3) {
        self.eye += delta;
        self.at += delta;
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Scales the view plane, a factor below 1 zooms in
    pub fn zoom(&mut self, factor: f32) {
        self.view_width *= factor;
        self.view_height *= factor;
    }

    /// Sizes the view plane for a vertical field of view of `fov` degrees
    pub fn set_fov(&mut self, fov: f32) {
        self.view_height = 2.0 * self.focal_distance * (fov.to_radians() / 2.0).tan();
        self.view_width = self.view_height * self.aspect_ratio();
    }

    pub fn set_perspective(&mut self) {
        self.projection = Projection::Perspective;
    }

    pub fn set_orthographic(&mut self) {
        self.projection = Projection::Orthographic;
    }

    /// Oblique projection, `Projection::CAVALIER` is `set_oblique(45.0, 1.0)`
    pub fn set_oblique(&mut self, angle: f32, factor: f32) {
        self.projection = Projection::Oblique {
            angle: angle.to_radians(),
            factor,
        };
    }

    pub fn set_oblique_cavalier(&mut self) {
        self.projection = Projection::CAVALIER;
    }

    pub fn set_oblique_cabinet(&mut self) {
        self.projection = Projection::CABINET;
    }

    /// The ray going through the center of pixel (`x`, `y`), `(0, 0)` being the top left pixel
    pub fn ray(&self, x: u32, y: u32) -> Ray {
        self.ray_at(ViewportCoord::from_pixel(self, x, y))
    }

    pub fn ray_at(&self, coords: ViewportCoord) -> Ray {
        let CameraFrame { u, v, w } = self.frame;
        let offset = coords.vx * self.view_width * u + coords.vy * self.view_height * v;

        match self.projection {
            Projection::Perspective => {
                Ray::new(self.eye, offset - self.focal_distance * w)
            }
            Projection::Orthographic => Ray::new(self.eye + offset, -w),
            Projection::Oblique { angle, factor } => {
                let tilt = factor * (angle.cos() * u + angle.sin() * v);
                Ray::new(self.eye + offset, -w + tilt)
            }
        }
    }
}

/// Represent a coordinate on the view plane.
///
/// Both `vx` and `vy` are in the range $\left[-0.5, 0.5\right]$,
/// `vx` growing to the right and `vy` growing upwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportCoord {
    pub vx: f32,
    pub vy: f32,
}

impl ViewportCoord {
    /// Center of the pixel (`x`, `y`), rows are counted from the top
    pub fn from_pixel(camera: &Camera, x: u32, y: u32) -> Self {
        let un = (x as f32 + 0.5) / camera.width.max(1) as f32;
        let vn = (y as f32 + 0.5) / camera.height.max(1) as f32;
        Self {
            vx: un - 0.5,
            vy: 0.5 - vn,
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::math::point::Point;

    use super::{Camera, Projection};

    fn front_camera() -> Camera {
        Camera::new(
            Point::new(0.0, 0.0, 5.0),
            Point::ORIGIN,
            Vec3::Y,
            1.0,
            2.0,
            2.0,
            100,
            100,
        )
    }

    #[test]
    fn frame_is_orthonormal() {
        let camera = Camera::new(
            Point::new(10.0, 4.0, 2.0),
            Point::new(5.0, 2.0, 5.0),
            Vec3::Y,
            3.0,
            8.0,
            8.0,
            400,
            400,
        );
        let frame = camera.frame();
        for axis in [frame.u, frame.v, frame.w] {
            assert!((axis.length() - 1.0).abs() < 1e-6);
        }
        assert!(frame.u.dot(frame.v).abs() < 1e-6);
        assert!(frame.v.dot(frame.w).abs() < 1e-6);
        assert!(frame.w.dot(frame.u).abs() < 1e-6);
    }

    #[test]
    fn default_camera_looks_down_z() {
        let camera = Camera::default();
        assert_eq!(camera.frame().w, Vec3::Z);
        assert_eq!(camera.frame().u, Vec3::X);
        assert_eq!(camera.frame().v, Vec3::Y);
        assert_eq!((camera.width, camera.height), (500, 500));
        assert_eq!(camera.projection, Projection::Perspective);
    }

    #[test]
    fn perspective_rays_are_unit_and_row_zero_is_top() {
        let camera = front_camera();
        for (x, y) in [(0, 0), (50, 50), (99, 0), (0, 99), (99, 99)] {
            let ray = camera.ray(x, y);
            assert!((ray.direction.length() - 1.0).abs() < 1e-6);
            assert_eq!(ray.origin, camera.eye());
        }
        assert!(camera.ray(0, 0).direction.y > 0.0);
        assert!(camera.ray(0, 0).direction.x < 0.0);
        assert!(camera.ray(99, 99).direction.y < 0.0);
    }

    #[test]
    fn orthographic_versus_perspective() {
        let mut camera = front_camera();
        let (a, b) = (camera.ray(10, 50), camera.ray(90, 50));
        assert_eq!(a.origin, b.origin);
        assert!(a.direction.distance(b.direction) > 1e-3);

        camera.set_orthographic();
        let (a, b) = (camera.ray(10, 50), camera.ray(90, 50));
        assert!(a.direction.distance(b.direction) < 1e-6);
        assert!(a.direction.distance(-Vec3::Z) < 1e-6);
        assert!(a.origin.distance(b.origin) > 1e-3);
    }

    #[test]
    fn oblique_rays_are_parallel_and_tilted() {
        let mut camera = front_camera();
        camera.set_oblique(45.0, 1.0);

        let (a, b) = (camera.ray(0, 0), camera.ray(99, 99));
        assert!(a.direction.distance(b.direction) < 1e-6);
        let expected = Vec3::new(
            std::f32::consts::FRAC_1_SQRT_2,
            std::f32::consts::FRAC_1_SQRT_2,
            -1.0,
        )
        .normalize();
        assert!(a.direction.distance(expected) < 1e-5);

        camera.set_oblique_cavalier();
        assert!(camera.ray(0, 0).direction.distance(expected) < 1e-5);

        camera.set_oblique_cabinet();
        assert_eq!(camera.projection, Projection::CABINET);
        let mut by_degrees = front_camera();
        by_degrees.set_oblique(63.4, 0.5);
        let (
            Projection::Oblique { angle, factor },
            Projection::Oblique {
                angle: expected_angle,
                factor: expected_factor,
            },
        ) = (camera.projection, by_degrees.projection)
        else {
            panic!("cabinet is an oblique projection");
        };
        assert!((angle - expected_angle).abs() < 1e-6);
        assert_eq!(factor, expected_factor);
    }

    #[test]
    fn zoom_and_fov() {
        let mut camera = front_camera();
        camera.zoom(0.5);
        assert_eq!((camera.view_width, camera.view_height), (1.0, 1.0));

        camera.width = 200;
        camera.set_fov(90.0);
        assert!((camera.view_height - 2.0).abs() < 1e-5);
        assert!((camera.view_width - 4.0).abs() < 1e-5);
    }

    #[test]
    fn translate_keeps_frame() {
        let mut camera = front_camera();
        let frame = camera.frame();
        camera.translate(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(camera.eye(), Point::new(1.0, 2.0, 8.0));
        assert_eq!(camera.at(), Point::new(1.0, 2.0, 3.0));
        assert_eq!(camera.frame(), frame);
    }

    #[test]
    fn degenerate_up_still_gives_a_frame() {
        let camera = Camera::new(
            Point::new(0.0, 5.0, 0.0),
            Point::ORIGIN,
            Vec3::Y,
            1.0,
            2.0,
            2.0,
            10,
            10,
        );
        let frame = camera.frame();
        assert!((frame.u.length() - 1.0).abs() < 1e-5);
        assert!(frame.u.dot(frame.w).abs() < 1e-5);
    }
}
