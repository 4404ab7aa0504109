use clap::Parser;
use log::{error, info};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;
use phong_tracer::canvas::Canvas;
use phong_tracer::config::{demo_scene, load_scene_config};
use phong_tracer::output::{output_format, save_canvas};
use phong_tracer::render::Renderer;
use phong_tracer::scene::Scene;

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.into());

    // Log application startup with version information
    info!("phong-tracer - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    // Fail on a bad output path before spending time on the render
    output_format(&args.output)?;

    let scene = load_scene(args)?;
    info!(
        "Scene: {} spheres, {} lights; image {}x{}",
        scene.spheres().len(),
        scene.lights().len(),
        args.width,
        args.height
    );

    let mut canvas = Canvas::new(args.width, args.height);
    Renderer::new()
        .with_recursion_depth(args.depth)
        .with_parallel(args.parallel)
        .with_progress(!args.no_progress)
        .render(&scene, &mut canvas);

    save_canvas(&canvas, &args.output)?;
    Ok(())
}

fn load_scene(args: &Args) -> Result<Scene, Box<dyn std::error::Error>> {
    match &args.scene {
        Some(path) => {
            info!("Loading scene from {}", path.display());
            Ok(load_scene_config(path)?.to_scene()?)
        }
        None => {
            info!("No scene file given, rendering the demo scene");
            Ok(demo_scene())
        }
    }
}
