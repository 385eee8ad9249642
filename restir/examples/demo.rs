//! Renders a few frames of a built-in scene and saves the last one.
//!
//! Usage:
//!
//! ```text
//! cargo run --release --example demo -- [scene] [output.png]
//! ```
//!
//! Alternatively, `scene` can be a path to a JSON scene description.

use std::env;
use std::f32::consts::FRAC_PI_3;
use std::path::Path;
use std::process::ExitCode;

use glam::{uvec2, vec3, Vec3};
use log::{error, info};
use restir::{
    Camera, Engine, Material, SceneDescription, SceneRegistry, SimpleScene,
};

const FRAMES: usize = 8;

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,

        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> restir::Result<()> {
    let mut args = env::args().skip(1);
    let scene_name = args.next().unwrap_or_else(|| "arcade".into());
    let output = args.next().unwrap_or_else(|| "restir.png".into());

    let geometry = SimpleScene::new()
        .with_plane(Vec3::ZERO, Vec3::Y, Material::default())
        .with_sphere(
            vec3(-0.6, 0.5, 0.0),
            0.5,
            Material::glossy(vec3(0.9, 0.3, 0.2), 0.5, 32.0),
        )
        .with_sphere(
            vec3(0.7, 0.35, 0.4),
            0.35,
            Material::diffuse(vec3(0.2, 0.5, 0.9)),
        )
        .with_cuboid(
            vec3(-0.3, 0.0, -1.2),
            vec3(0.5, 0.8, -0.6),
            Material::diffuse(vec3(0.9, 0.9, 0.6)),
        );

    let scene = if Path::new(&scene_name).is_file() {
        SceneDescription::load(&scene_name)?
    } else {
        SceneRegistry::builtin().get(&scene_name, &geometry.bounds())?
    };

    let engine = Engine::new(geometry, scene)?;

    let mut camera = engine.create_camera(Camera::looking_at(
        uvec2(640, 480),
        vec3(0.0, 2.0, 4.0),
        vec3(0.0, 0.3, 0.0),
        Vec3::Y,
        FRAC_PI_3,
    ))?;

    for _ in 0..FRAMES {
        camera.render(&engine)?;
    }

    camera.output().save_png(&output)?;

    info!("Saved {} frame(s) into `{output}`", camera.frame());

    Ok(())
}
