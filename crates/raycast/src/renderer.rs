//! Drives the camera and the scene over a whole image.

use rayon::{
    prelude::{IndexedParallelIterator, ParallelIterator},
    slice::ParallelSliceMut,
};

use crate::{camera::Camera, color::Color, scene::Scene};

/// Receives the pixels of a render, one `(row, col, color)` at a time.
pub trait PixelSink {
    fn put(&mut self, row: u32, col: u32, color: Color);
}

impl<F: FnMut(u32, u32, Color)> PixelSink for F {
    fn put(&mut self, row: u32, col: u32, color: Color) {
        self(row, col, color)
    }
}

/// A rendered image, pixels stored row-major, row 0 being the top of the image
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl Frame {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::default(); width as usize * height as usize],
        }
    }

    pub fn get(&self, row: u32, col: u32) -> Option<Color> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.pixels
            .get(row as usize * self.width as usize + col as usize)
            .copied()
    }

    /// 8 bit per channel image, colors are clamped then quantized
    pub fn to_rgb_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| {
            self.get(y, x).unwrap_or_default().into()
        })
    }

    /// Floating point image, colors are kept as is
    pub fn to_hdr_image(&self) -> Option<image::Rgb32FImage> {
        let raw: &[f32] = bytemuck::cast_slice(&self.pixels);
        image::Rgb32FImage::from_raw(self.width, self.height, raw.to_vec())
    }
}

impl PixelSink for Frame {
    fn put(&mut self, row: u32, col: u32, color: Color) {
        if row >= self.height || col >= self.width {
            crate::error_once!("pixel ({row}, {col}) is out of the frame");
            return;
        }
        self.pixels[row as usize * self.width as usize + col as usize] = color;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Number of consecutive rows rendered by a single task
    pub rows_per_task: u32,
    /// Render on the rayon thread pool
    pub threaded: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            rows_per_task: 8,
            threaded: true,
        }
    }
}

pub struct Renderer<'a> {
    pub scene: &'a Scene,
    pub camera: &'a Camera,
    pub options: RenderOptions,
}

impl<'a> Renderer<'a> {
    pub fn new(scene: &'a Scene, camera: &'a Camera) -> Self {
        Self {
            scene,
            camera,
            options: RenderOptions::default(),
        }
    }

    pub fn with_options(self, options: RenderOptions) -> Self {
        Self { options, ..self }
    }

    /// Color of the pixel in column `x`, row `y`
    pub fn process_pixel(&self, x: u32, y: u32) -> Color {
        self.scene.trace_ray(self.camera.ray(x, y))
    }

    /// Sequential render, pixels are handed to `sink` in row-major order
    pub fn render<S: PixelSink>(&self, sink: &mut S) {
        for row in 0..self.camera.height {
            for col in 0..self.camera.width {
                sink.put(row, col, self.process_pixel(col, row));
            }
        }
    }

    pub fn render_frame(&self) -> Frame {
        self.render_frame_with_progress(|_| ())
    }

    /// Render the whole image, calling `on_rows_done` with the number of rows
    /// every time a task is over.
    pub fn render_frame_with_progress<F: Fn(u32) + Sync>(&self, on_rows_done: F) -> Frame {
        let mut frame = Frame::new(self.camera.width, self.camera.height);
        if frame.pixels.is_empty() {
            return frame;
        }

        let width = self.camera.width as usize;
        let rows_per_task = self.options.rows_per_task.max(1) as usize;
        let render_rows = |(task, pixels): (usize, &mut [Color])| {
            let first_row = task * rows_per_task;
            for (i, pixel) in pixels.iter_mut().enumerate() {
                let row = (first_row + i / width) as u32;
                let col = (i % width) as u32;
                *pixel = self.process_pixel(col, row);
            }
            on_rows_done((pixels.len() / width) as u32);
        };

        if self.options.threaded {
            frame
                .pixels
                .par_chunks_mut(width * rows_per_task)
                .enumerate()
                .for_each(render_rows);
        } else {
            frame
                .pixels
                .chunks_mut(width * rows_per_task)
                .enumerate()
                .for_each(render_rows);
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use glam::Vec3;

    use crate::{
        camera::Camera,
        color,
        light::{AmbientLight, PointLight},
        material::Material,
        math::point::Point,
        scene::Scene,
        shape::{Plane, Sphere},
    };

    use super::{Frame, PixelSink, RenderOptions, Renderer};

    fn scene() -> Scene {
        let mut scene = Scene::default();
        let red = scene.insert_material(
            Some("red".to_owned()),
            Material::new(
                color::gray(0.1),
                color::Color::new(0.8, 0.1, 0.1),
                color::gray(0.5),
                20.0,
            ),
        );
        let floor = scene.insert_material(None, Material::default());
        scene.insert_object(Sphere::new(Point::new(0.0, 0.0, -4.0), 1.0, red));
        scene.insert_object(Plane::new(Point::new(0.0, -1.0, 0.0), Vec3::Y, floor));
        scene.insert_light(AmbientLight {
            intensity: color::gray(0.3),
        });
        scene.insert_light(PointLight::new(Point::new(2.0, 4.0, 0.0), color::WHITE));
        scene
    }

    fn camera() -> Camera {
        Camera::new(
            Point::ORIGIN,
            Point::new(0.0, 0.0, -1.0),
            Vec3::Y,
            1.0,
            2.0,
            2.0,
            24,
            17,
        )
    }

    #[test]
    fn sequential_render_is_row_major() {
        let (scene, camera) = (scene(), camera());
        let renderer = Renderer::new(&scene, &camera);

        let mut visited = Vec::new();
        renderer.render(&mut |row: u32, col: u32, _: color::Color| visited.push((row, col)));
        assert_eq!(visited.len(), 24 * 17);
        assert_eq!(visited[0], (0, 0));
        assert_eq!(visited[1], (0, 1));
        assert_eq!(visited[24], (1, 0));
    }

    #[test]
    fn threaded_and_sequential_frames_match() {
        let (scene, camera) = (scene(), camera());

        let mut sequential = Frame::new(camera.width, camera.height);
        Renderer::new(&scene, &camera).render(&mut sequential);

        let rows = AtomicU32::new(0);
        let threaded = Renderer::new(&scene, &camera)
            .with_options(RenderOptions {
                rows_per_task: 5,
                threaded: true,
            })
            .render_frame_with_progress(|n| {
                rows.fetch_add(n, Ordering::Relaxed);
            });

        let monothreaded = Renderer::new(&scene, &camera)
            .with_options(RenderOptions {
                rows_per_task: 3,
                threaded: false,
            })
            .render_frame();

        assert_eq!(rows.load(Ordering::Relaxed), camera.height);
        assert_eq!(threaded, sequential);
        assert_eq!(monothreaded, sequential);
    }

    #[test]
    fn center_pixel_sees_the_sphere() {
        let (scene, camera) = (scene(), camera());
        let renderer = Renderer::new(&scene, &camera);
        let color = renderer.process_pixel(12, 8);
        assert!(color.r() > color.g());
        assert!(color.r() > color.b());

        // Top rows look at the sky
        assert_eq!(renderer.process_pixel(0, 0), scene.background);
    }

    #[test]
    fn frame_to_images() {
        let mut frame = Frame::new(2, 1);
        frame.put(0, 1, color::Color::new(2.0, 0.5, 0.0));

        let rgb = frame.to_rgb_image();
        assert_eq!(rgb.get_pixel(1, 0).0, [255, 128, 0]);
        assert_eq!(rgb.get_pixel(0, 0).0, [0, 0, 0]);

        let hdr = frame.to_hdr_image();
        assert!(hdr.is_some_and(|hdr| hdr.get_pixel(1, 0).0 == [2.0, 0.5, 0.0]));

        // Out of bounds writes are dropped
        frame.put(3, 3, color::WHITE);
        assert_eq!(frame.get(3, 3), None);
    }
}
