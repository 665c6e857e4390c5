mod output;
mod progress;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use output::{FileOutput, FinalOutput};
use progress::Progress;
use raycast::{
    camera::Camera,
    material::Raster,
    renderer::{RenderOptions, Renderer},
    scene::{examples::PickingScene, Scene},
    utils::{counter::report_counters, timer::timed_scope_log},
};
use utils::{AvailableProjection, AvailableScene, Dimensions, PixelPosition};

#[derive(Parser, Debug)]
pub struct Args {
    #[arg(long, value_enum, default_value_t)]
    /// Scene selector
    scene: AvailableScene,

    #[arg(short, long, default_value = "800x600")]
    /// Screen dimension in format `width`x`height`
    dimensions: Dimensions,

    #[arg(short, long, value_enum, default_value_t)]
    projection: AvailableProjection,

    #[arg(long)]
    /// Vertical field of view in degrees, overrides the scene view plane
    fov: Option<f32>,

    #[arg(long)]
    /// Scale applied to the view plane, below 1 zooms in
    zoom: Option<f32>,

    #[arg(short, long, default_value = "output/render.png")]
    /// The image format follows the extension (png, ppm, jpg...)
    output: PathBuf,

    #[arg(long)]
    /// Also save the unclamped colors, e.g. to an `.exr` file
    hdr_output: Option<PathBuf>,

    #[arg(long)]
    /// Image mapped on the chapel side windows
    texture: Option<PathBuf>,

    #[arg(long)]
    /// Report the object under pixel `x`x`y`. Can be repeated.
    /// The picking scene probes a few known pixels when none is given.
    pick: Vec<PixelPosition>,

    #[arg(long)]
    /// Render on the current thread only
    monothreaded: bool,

    #[arg(long, default_value_t = 8)]
    rows_per_task: u32,
}

fn build_scene(args: &Args) -> (Scene, Camera) {
    let window_texture = args.texture.as_ref().map(Raster::load_or_missing);

    let mut scene = Scene::default();
    args.scene.insert_into(&mut scene, window_texture);
    log::info!(
        "Scene {:?}: {} objects, {} materials",
        args.scene,
        scene.objects.len(),
        scene.materials.len()
    );

    let mut camera = args.scene.camera(args.dimensions);
    args.projection.apply(&mut camera);
    if let Some(fov) = args.fov {
        camera.set_fov(fov);
    }
    if let Some(zoom) = args.zoom {
        camera.zoom(zoom);
    }
    (scene, camera)
}

fn report_picks(args: &Args, scene: &Scene, camera: &Camera) {
    let picks: Vec<(PixelPosition, Option<&str>)> =
        if args.pick.is_empty() && args.scene == AvailableScene::Picking {
            PickingScene::probes(camera.width, camera.height)
                .into_iter()
                .map(|(x, y, label)| (PixelPosition { x, y }, Some(label)))
                .collect()
        } else {
            args.pick.iter().map(|&p| (p, None)).collect()
        };

    for (position, label) in picks {
        if position.x >= camera.width || position.y >= camera.height {
            log::warn!("Pick {position} is outside of the image");
            continue;
        }
        match label {
            Some(label) => println!("Pick at {position} ({label}):"),
            None => println!("Pick at {position}:"),
        }
        match scene.pick(camera, position.x, position.y) {
            Some(pick) => println!("{pick}"),
            None => println!("no object hit"),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let (scene, camera) = build_scene(&args);
    report_picks(&args, &scene, &camera);

    let options = RenderOptions {
        rows_per_task: args.rows_per_task,
        threaded: !args.monothreaded,
    };
    let renderer = Renderer::new(&scene, &camera).with_options(options);
    let progress = Progress::new(args.dimensions.height as usize);

    log::info!("Rendering {} with {:?}", args.dimensions, options);
    let frame = timed_scope_log("Render", || {
        renderer.render_frame_with_progress(|rows| {
            progress.add(rows as usize);
            progress.print();
        })
    })
    .res;
    println!();

    let output = FileOutput {
        hdr_path: args.hdr_output.clone(),
        ..FileOutput::new(args.output.clone())
    };
    output.commit(&frame)?;

    report_counters();
    Ok(())
}
