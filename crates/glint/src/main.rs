//! Glint: render the Cornell box with the CPU path tracer.

mod cli;
mod scene;

use std::io::{self, BufWriter};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use glint_renderer::{save_image, write_ppm, Camera, RayTracer, Sampler};

use cli::Args;

const ASPECT_RATIO: f32 = 16.0 / 9.0;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    log::info!("Starting Glint");

    let mut world = scene::cornell_box();
    if let Some(path) = &args.mesh {
        let mesh = glint_core::load_obj(path)
            .with_context(|| format!("Failed to load mesh {}", path.display()))?;
        scene::add_mesh(&mut world, &mesh);
    }

    let image = args.image_config(ASPECT_RATIO)?;

    let tracer = RayTracer::new(world, Camera::new(ASPECT_RATIO), image);
    let mut sampler = Sampler::new(args.seed);

    let start = Instant::now();
    let buffer = tracer.render(&mut sampler);
    log::info!("Rendered in {:?}", start.elapsed());

    if args.writes_to_stdout() {
        let stdout = io::stdout();
        write_ppm(&buffer, BufWriter::new(stdout.lock())).context("Failed to write image to stdout")?;
    } else {
        save_image(&buffer, &args.output)
            .with_context(|| format!("Failed to save {}", args.output.display()))?;
    }

    Ok(())
}
