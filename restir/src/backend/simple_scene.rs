use glam::{uvec2, Vec3};
use rayon::prelude::*;
use restir_shaders::prim_raster::{self, PrimaryHit};

use crate::{gpu, Backend, BoundingBox, Result};

/// Minimal ray-traced scene made of analytic shapes.
#[derive(Clone, Debug, Default)]
pub struct SimpleScene {
    objects: Vec<Object>,
}

impl SimpleScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an infinite plane passing through `point`.
    pub fn with_plane(
        mut self,
        point: Vec3,
        normal: Vec3,
        material: Material,
    ) -> Self {
        let normal = normal.normalize();

        self.objects.push(Object {
            shape: Shape::Plane {
                normal,
                offset: normal.dot(point),
            },
            material,
        });

        self
    }

    pub fn with_sphere(
        mut self,
        center: Vec3,
        radius: f32,
        material: Material,
    ) -> Self {
        self.objects.push(Object {
            shape: Shape::Sphere { center, radius },
            material,
        });

        self
    }

    pub fn with_cuboid(
        mut self,
        min: Vec3,
        max: Vec3,
        material: Material,
    ) -> Self {
        self.objects.push(Object {
            shape: Shape::Cuboid(BoundingBox::new(min.min(max), min.max(max))),
            material,
        });

        self
    }

    /// Returns bounds of all finite objects.
    pub fn bounds(&self) -> BoundingBox {
        self.objects
            .iter()
            .filter_map(|object| object.shape.bounds())
            .collect()
    }

    /// Returns the closest surface hit by given ray.
    pub fn trace(&self, ray: &gpu::Ray) -> Option<PrimaryHit> {
        let mut closest: Option<PrimaryHit> = None;

        for object in &self.objects {
            let Some((distance, normal)) = object.shape.hit(ray) else {
                continue;
            };

            if closest.map_or(true, |closest| distance < closest.distance) {
                closest = Some(PrimaryHit {
                    distance,
                    normal,
                    albedo: object.material.albedo,
                    specular: object.material.specular,
                    shininess: object.material.shininess,
                });
            }
        }

        closest
    }
}

impl Backend for SimpleScene {
    fn render_gbuffer(
        &self,
        camera: &gpu::Camera,
        out: &mut [gpu::GBufferData],
    ) -> Result<()> {
        let width = camera.screen_size().x.max(1) as usize;

        out.par_iter_mut().enumerate().for_each(|(idx, out)| {
            let pos = uvec2((idx % width) as u32, (idx / width) as u32);

            prim_raster::main(pos, camera, |ray| self.trace(&ray), out);
        });

        Ok(())
    }

    fn is_occluded(&self, ray: &gpu::Ray, max_distance: f32) -> Result<bool> {
        Ok(self.objects.iter().any(|object| {
            object
                .shape
                .hit(ray)
                .is_some_and(|(distance, _)| distance < max_distance)
        }))
    }

    fn describe(&self) -> String {
        format!("simple scene ({} objects)", self.objects.len())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub albedo: Vec3,
    pub specular: f32,
    pub shininess: f32,
}

impl Material {
    pub fn diffuse(albedo: Vec3) -> Self {
        Self {
            albedo,
            specular: 0.0,
            shininess: 1.0,
        }
    }

    pub fn glossy(albedo: Vec3, specular: f32, shininess: f32) -> Self {
        Self {
            albedo,
            specular,
            shininess,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::diffuse(Vec3::splat(0.8))
    }
}

#[derive(Clone, Debug)]
struct Object {
    shape: Shape,
    material: Material,
}

#[derive(Clone, Debug)]
enum Shape {
    Plane { normal: Vec3, offset: f32 },
    Sphere { center: Vec3, radius: f32 },
    Cuboid(BoundingBox),
}

impl Shape {
    fn hit(&self, ray: &gpu::Ray) -> Option<(f32, Vec3)> {
        match self {
            Shape::Plane { normal, offset } => {
                let denom = normal.dot(ray.direction());

                if denom.abs() <= f32::EPSILON {
                    return None;
                }

                let distance = (offset - normal.dot(ray.origin())) / denom;

                (distance > 0.0).then_some((distance, *normal))
            }

            Shape::Sphere { center, radius } => {
                let oc = ray.origin() - *center;
                let b = oc.dot(ray.direction());
                let c = oc.length_squared() - radius * radius;
                let discriminant = b * b - c;

                if discriminant < 0.0 {
                    return None;
                }

                let sqrt = discriminant.sqrt();

                let distance = if -b - sqrt > 0.0 {
                    -b - sqrt
                } else if -b + sqrt > 0.0 {
                    -b + sqrt
                } else {
                    return None;
                };

                let normal = (ray.at(distance) - *center) / *radius;

                Some((distance, normal))
            }

            Shape::Cuboid(bb) => bb.hit(ray),
        }
    }

    fn bounds(&self) -> Option<BoundingBox> {
        match self {
            Shape::Plane { .. } => None,

            Shape::Sphere { center, radius } => Some(BoundingBox::new(
                *center - Vec3::splat(*radius),
                *center + Vec3::splat(*radius),
            )),

            Shape::Cuboid(bb) => Some(*bb),
        }
    }
}
