use crate::camera::{view_transform, Camera};
use crate::error::*;
use crate::light::PointLight;
use crate::material::Material;
use crate::shape::Sphere;
use crate::transform::*;
use crate::world::World;
use crate::*;

use std::f64::consts::PI;

/// Two concentric spheres lit from the upper left, used throughout the tests.
pub fn default_world() -> Result<World> {
    let outer = Sphere::new().with_material(Material {
        color: RGB::new(0.8, 1.0, 0.6),
        diffuse: 0.7,
        specular: 0.2,
        ..Default::default()
    });
    let inner = Sphere::with_transform(scaling(0.5, 0.5, 0.5))?;

    Ok(World {
        objects: vec![outer, inner],
        lights: vec![PointLight::new(point(-10.0, 10.0, -10.0), RGB::all(1.0))?],
    })
}

/// Three spheres resting on a floor in front of two walls, all walls being
/// heavily flattened spheres.
pub fn three_spheres(w: usize, h: usize, fov: f64) -> Result<(Camera, World)> {
    let wall = Material {
        color: RGB::new(1.0, 0.9, 0.9),
        specular: 0.0,
        ..Default::default()
    };

    let floor = Sphere::with_transform(scaling(10.0, 0.01, 10.0))?.with_material(wall.clone());

    let left_wall = Sphere::with_transform(
        TransformChain::new()
            .then(scaling(10.0, 0.01, 10.0))
            .then(rotation_x(PI / 2.0))
            .then(rotation_y(-PI / 4.0))
            .then(translation(0.0, 0.0, 5.0))
            .compose()?,
    )?
    .with_material(wall.clone());

    let right_wall = Sphere::with_transform(
        TransformChain::new()
            .then(scaling(10.0, 0.01, 10.0))
            .then(rotation_x(PI / 2.0))
            .then(rotation_y(PI / 4.0))
            .then(translation(0.0, 0.0, 5.0))
            .compose()?,
    )?
    .with_material(wall);

    let middle = Sphere::with_transform(translation(-0.5, 1.0, 0.5))?.with_material(Material {
        color: RGB::new(0.1, 1.0, 0.5),
        diffuse: 0.7,
        specular: 0.3,
        ..Default::default()
    });

    let right = Sphere::with_transform(compose(&[
        scaling(0.5, 0.5, 0.5),
        translation(1.5, 0.5, -0.5),
    ])?)?
    .with_material(Material {
        color: RGB::new(0.5, 1.0, 0.1),
        diffuse: 0.7,
        specular: 0.3,
        ..Default::default()
    });

    let left = Sphere::with_transform(compose(&[
        scaling(0.33, 0.33, 0.33),
        translation(-1.5, 0.33, -0.75),
    ])?)?
    .with_material(Material {
        color: RGB::new(1.0, 0.8, 0.1),
        diffuse: 0.7,
        specular: 0.3,
        ..Default::default()
    });

    let world = World {
        objects: vec![floor, left_wall, right_wall, middle, right, left],
        lights: vec![PointLight::new(point(-10.0, 10.0, -10.0), RGB::all(1.0))?],
    };

    let camera = Camera::new(w, h, fov).with_transform(view_transform(
        &point(0.0, 1.5, -5.0),
        &point(0.0, 1.0, 0.0),
        &vector(0.0, 1.0, 0.0),
    )?)?;

    Ok((camera, world))
}
