//! The Cornell box scene.

use glint_core::Mesh;
use glint_math::Vec3;
use glint_renderer::{Colour, Material, ObjectList, Plane, Sphere};

/// Five walls and two balls; the floor and the left ball are mirrors.
pub fn cornell_box() -> ObjectList {
    let mut world = ObjectList::new();

    // Back
    world.add(Plane::new(
        Vec3::new(-2.0, -1.0, 2.0),
        Vec3::new(-2.0, 1.0, 2.0),
        Vec3::new(2.0, -1.0, 2.0),
        Vec3::new(2.0, 1.0, 2.0),
        Vec3::new(0.0, 0.0, -1.0),
        Material::default(),
    ));

    // Left, red
    world.add(Plane::new(
        Vec3::new(-2.0, -1.0, -5.0),
        Vec3::new(-2.0, 1.0, -5.0),
        Vec3::new(-2.0, -1.0, 2.0),
        Vec3::new(-2.0, 1.0, 2.0),
        Vec3::new(1.0, 0.0, 0.0),
        Material::matte(Colour::new(0.5, 0.0, 0.0), Colour::new(1.0, 0.0, 0.0)),
    ));

    // Right, green
    world.add(Plane::new(
        Vec3::new(2.0, -1.0, -5.0),
        Vec3::new(2.0, 1.0, -5.0),
        Vec3::new(2.0, -1.0, 2.0),
        Vec3::new(2.0, 1.0, 2.0),
        Vec3::new(-1.0, 0.0, 0.0),
        Material::matte(Colour::new(0.0, 0.5, 0.0), Colour::new(0.0, 1.0, 0.0)),
    ));

    // Floor
    world.add(Plane::new(
        Vec3::new(-2.0, -1.0, -5.0),
        Vec3::new(-2.0, -1.0, 2.0),
        Vec3::new(2.0, -1.0, -5.0),
        Vec3::new(2.0, -1.0, 2.0),
        Vec3::new(0.0, 1.0, 0.0),
        Material::mirror(),
    ));

    // Ceiling
    world.add(Plane::new(
        Vec3::new(-2.0, 1.0, -5.0),
        Vec3::new(-2.0, 1.0, 2.0),
        Vec3::new(2.0, 1.0, -5.0),
        Vec3::new(2.0, 1.0, 2.0),
        Vec3::new(0.0, -1.0, 0.0),
        Material::default(),
    ));

    world.add(Sphere::new(Vec3::new(-1.0, -0.5, 0.0), 0.5, Material::mirror()));
    world.add(Sphere::new(Vec3::new(1.0, -0.5, 0.0), 0.5, Material::default()));

    world
}

/// Append every face of `mesh` to `world` with the default material.
pub fn add_mesh(world: &mut ObjectList, mesh: &Mesh) -> usize {
    let added = world.add_mesh(mesh, Material::default());
    log::info!("Added {} mesh triangles to the scene", added);
    added
}
