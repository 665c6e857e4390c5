use core::fmt::Display;

use clap::ValueEnum;
use raycast::{
    camera::Camera,
    material::Raster,
    scene::{
        examples::{ChapelScene, PickingScene, ProjectionScene},
        Scene,
    },
};

#[derive(Debug, Default, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum AvailableScene {
    #[default]
    Chapel,
    Picking,
    Projection,
}

impl AvailableScene {
    /// `window_texture` is only used by the chapel
    pub fn insert_into(self, scene: &mut Scene, window_texture: Option<Raster>) {
        match self {
            AvailableScene::Chapel => ChapelScene::insert_into(scene, window_texture),
            AvailableScene::Picking => PickingScene::insert_into(scene),
            AvailableScene::Projection => ProjectionScene::insert_into(scene),
        }
    }

    pub fn camera(self, dimensions: Dimensions) -> Camera {
        let Dimensions { width, height } = dimensions;
        match self {
            AvailableScene::Chapel => ChapelScene::camera(width, height),
            AvailableScene::Picking => PickingScene::camera(width, height),
            AvailableScene::Projection => ProjectionScene::camera(width, height),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum AvailableProjection {
    #[default]
    Perspective,
    Orthographic,
    Cavalier,
    Cabinet,
}

impl AvailableProjection {
    pub fn apply(self, camera: &mut Camera) {
        match self {
            AvailableProjection::Perspective => camera.set_perspective(),
            AvailableProjection::Orthographic => camera.set_orthographic(),
            AvailableProjection::Cavalier => camera.set_oblique_cavalier(),
            AvailableProjection::Cabinet => camera.set_oblique_cabinet(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl std::str::FromStr for Dimensions {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (width, height) = parse_pair(s)?;
        if width == 0 || height == 0 {
            return Err(anyhow::anyhow!("Dimensions must be non zero"));
        }
        Ok(Dimensions { width, height })
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}x{}", self.width, self.height))
    }
}

/// A pixel, as `column`x`row` from the top left corner
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PixelPosition {
    pub x: u32,
    pub y: u32,
}

impl std::str::FromStr for PixelPosition {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = parse_pair(s)?;
        Ok(PixelPosition { x, y })
    }
}

impl Display for PixelPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}x{}", self.x, self.y))
    }
}

fn parse_pair(s: &str) -> anyhow::Result<(u32, u32)> {
    let mut split_it = s.split('x');
    let (Some(a), Some(b), None) = (split_it.next(), split_it.next(), split_it.next()) else {
        return Err(anyhow::anyhow!("Incorrect format, see help"));
    };
    Ok((a.trim().parse()?, b.trim().parse()?))
}

#[cfg(test)]
mod tests {
    use super::{AvailableProjection, AvailableScene, Dimensions, PixelPosition};
    use raycast::camera::Projection;

    #[test]
    fn parse_dimensions() {
        let d: Dimensions = "800x600".parse().unwrap();
        assert_eq!(d, Dimensions { width: 800, height: 600 });
        assert_eq!(d.to_string(), "800x600");

        assert!("800".parse::<Dimensions>().is_err());
        assert!("800x".parse::<Dimensions>().is_err());
        assert!("0x600".parse::<Dimensions>().is_err());
        assert!("1x2x3".parse::<Dimensions>().is_err());
    }

    #[test]
    fn parse_pixel_position() {
        let p: PixelPosition = "0x12".parse().unwrap();
        assert_eq!(p, PixelPosition { x: 0, y: 12 });
        assert!("-1x2".parse::<PixelPosition>().is_err());
    }

    #[test]
    fn projection_selector() {
        let mut camera = AvailableScene::Projection.camera(Dimensions {
            width: 40,
            height: 30,
        });
        AvailableProjection::Orthographic.apply(&mut camera);
        assert_eq!(camera.projection, Projection::Orthographic);
        AvailableProjection::Cavalier.apply(&mut camera);
        assert_eq!(camera.projection, Projection::CAVALIER);
        AvailableProjection::Cabinet.apply(&mut camera);
        assert_eq!(camera.projection, Projection::CABINET);
        AvailableProjection::Perspective.apply(&mut camera);
        assert_eq!(camera.projection, Projection::Perspective);
    }
}
