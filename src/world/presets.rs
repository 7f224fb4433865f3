use super::{Actor, Scene};
use crate::materials::Material;
use crate::math::*;

use lazy_static::lazy_static;

lazy_static! {
    /// The default scene, built on first use and read only afterwards.
    pub static ref RTWEEKEND: Scene = Scene::rtweekend();
    pub static ref CORNELL: Scene = Scene::cornell();
}

impl Scene {
    /// Ground plane sphere, three large feature spheres, a ring of small spheres and an overhead lamp.
    pub fn rtweekend() -> Scene {
        let mut actors = vec![
            Actor::sphere(
                Vec3::new(0.0, -1000.0, 0.0),
                1000.0,
                Material::diffuse(Colorf::splat(0.5)),
            ),
            Actor::sphere(
                Vec3::new(0.0, 1.0, 0.0),
                1.0,
                Material::specular(Colorf::splat(0.95)),
            ),
            Actor::sphere(
                Vec3::new(-4.0, 1.0, 0.0),
                1.0,
                Material::diffuse(Colorf::new(0.4, 0.2, 0.1)),
            ),
            Actor::sphere(
                Vec3::new(4.0, 1.0, 0.0),
                1.0,
                Material::specular(Colorf::new(0.7, 0.6, 0.5)),
            ),
            Actor::sphere(
                Vec3::new(0.0, 12.0, 4.0),
                4.0,
                Material::light(Colorf::splat(4.0)),
            ),
        ];

        let ring = 12;
        for i in 0..ring {
            let angle = 2.0 * PI * i as f64 / ring as f64;
            let center = Vec3::new(6.5 * angle.cos(), 0.2, 6.5 * angle.sin());
            let color = Colorf::new(
                0.5 + 0.5 * angle.cos(),
                0.5 + 0.5 * (angle + 2.0 * PI / 3.0).cos(),
                0.5 + 0.5 * (angle + 4.0 * PI / 3.0).cos(),
            );
            let material = if i % 3 == 0 {
                Material::specular(color)
            } else {
                Material::diffuse(color)
            };
            actors.push(Actor::sphere(center, 0.2, material));
        }
        Scene::new(actors)
    }

    /// Box built from huge wall spheres, a mirror ball, a diffuse ball and a lamp poking through the ceiling.
    /// The walls bulge outwards so that the inside of the box lies outside every sphere.
    pub fn cornell() -> Scene {
        Scene::new(vec![
            // left
            Actor::sphere(
                Vec3::new(-1e5 + 1.0, 40.8, 81.6),
                1e5,
                Material::diffuse(Colorf::new(0.75, 0.25, 0.25)),
            ),
            // right
            Actor::sphere(
                Vec3::new(1e5 + 99.0, 40.8, 81.6),
                1e5,
                Material::diffuse(Colorf::new(0.25, 0.25, 0.75)),
            ),
            // back
            Actor::sphere(
                Vec3::new(50.0, 40.8, -1e5),
                1e5,
                Material::diffuse(Colorf::splat(0.75)),
            ),
            // front
            Actor::sphere(
                Vec3::new(50.0, 40.8, 1e5 + 170.0),
                1e5,
                Material::diffuse(COLOR_BLACK),
            ),
            // floor
            Actor::sphere(
                Vec3::new(50.0, -1e5, 81.6),
                1e5,
                Material::diffuse(Colorf::splat(0.75)),
            ),
            // ceiling
            Actor::sphere(
                Vec3::new(50.0, 1e5 + 81.6, 81.6),
                1e5,
                Material::diffuse(Colorf::splat(0.75)),
            ),
            Actor::sphere(
                Vec3::new(27.0, 16.5, 47.0),
                16.5,
                Material::specular(Colorf::splat(0.999)),
            ),
            Actor::sphere(
                Vec3::new(73.0, 16.5, 78.0),
                16.5,
                Material::diffuse(Colorf::splat(0.75)),
            ),
            Actor::sphere(
                Vec3::new(50.0, 681.6 - 0.27, 81.6),
                600.0,
                Material::light(Colorf::splat(12.0)),
            ),
        ])
    }
}
