//! Simple path tracer example.
//!
//! Renders two spheres on a floor under a single point light and saves the
//! result in PPM format.

use glint_renderer::{
    save_image, Camera, Colour, ImageConfig, Material, ObjectList, Plane, RayTracer, Sampler,
    Sphere, Vec3, DEFAULT_SEED,
};

fn main() {
    println!("Glint Path Tracer - Simple Example");
    println!("==================================");

    // Build the scene
    let start = std::time::Instant::now();
    let world = build_scene();
    println!("Scene built in {:?} ({} objects)", start.elapsed(), world.len());

    let image = ImageConfig::new(16.0 / 9.0, 400, 16);
    let tracer = RayTracer::new(world, Camera::new(image.aspect_ratio), image);

    println!(
        "Rendering {}x{} @ {} spp...",
        image.width, image.height, image.samples_per_pixel
    );

    // Render
    let start = std::time::Instant::now();
    let buffer = tracer.render(&mut Sampler::new(DEFAULT_SEED));
    println!("Rendered in {:?}", start.elapsed());

    // Save as PPM
    let filename = "output.ppm";
    if let Err(e) = save_image(&buffer, filename) {
        eprintln!("Failed to save image: {}", e);
        std::process::exit(1);
    }
    println!("Saved to {}", filename);
}

fn build_scene() -> ObjectList {
    let mut world = ObjectList::new();

    // Ground
    world.add(Plane::new(
        Vec3::new(-4.0, -1.0, -5.0),
        Vec3::new(-4.0, -1.0, 4.0),
        Vec3::new(4.0, -1.0, -5.0),
        Vec3::new(4.0, -1.0, 4.0),
        Vec3::Y,
        Material::default(),
    ));

    // Mirror ball
    world.add(Sphere::new(Vec3::new(-1.0, -0.5, 0.0), 0.5, Material::mirror()));

    // Warm matte ball
    world.add(Sphere::new(
        Vec3::new(1.0, -0.5, 0.0),
        0.5,
        Material::matte(Colour::new(0.5, 0.25, 0.1), Colour::new(1.0, 0.5, 0.2)),
    ));

    world
}
