use crate::{
    color::Color,
    hittable::{Hit, Hittable},
    material::Material,
    ray::Ray,
    sphere::Sphere,
};
use glam::{vec3, Vec3};

/// Ordered sphere list, scanned linearly for every ray.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    spheres: Vec<Sphere>,
}

impl Scene {
    pub fn new() -> Self {
        Self { spheres: vec![] }
    }

    pub fn with_spheres(spheres: Vec<Sphere>) -> Self {
        Self { spheres }
    }

    /// Scene the interactive view opens with: two diffuse unit spheres, a
    /// large emissive sphere overhead and a huge sphere acting as the ground.
    pub fn showcase() -> Self {
        Self::with_spheres(vec![
            Sphere::new(Vec3::ZERO, 1., Material::diffuse(vec3(1., 0., 0.))),
            Sphere::new(vec3(2., 0., 0.), 1., Material::diffuse(vec3(0., 0., 1.))),
            Sphere::new(vec3(0., 5., 5.), 4., Material::emissive(Color::ONE, 1.)),
            Sphere::new(vec3(0., -101., 0.), 100., Material::diffuse(Color::ONE)),
        ])
    }

    pub fn add(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    /// Smallest-distance hit over all spheres, or [`Hit::MISS`].
    pub fn trace_nearest(&self, ray: &Ray) -> Hit {
        self.spheres
            .iter()
            .fold(Hit::MISS, |nearest, sphere| nearest.nearest(sphere.intersect(ray)))
    }
}

impl Hittable for Scene {
    fn intersect(&self, ray: &Ray) -> Hit {
        self.trace_nearest(ray)
    }
}

impl From<Vec<Sphere>> for Scene {
    fn from(value: Vec<Sphere>) -> Self {
        Self::with_spheres(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(center: Vec3, radius: f32, tag: f32) -> Sphere {
        Sphere::new(center, radius, Material::diffuse(Vec3::splat(tag)))
    }

    #[test]
    fn test_empty_scene_misses() {
        let scene = Scene::new();
        let hit = scene.trace_nearest(&Ray::new(Vec3::ZERO, Vec3::X));
        assert!(!hit.hit);
        assert_eq!(hit.distance, 1_000_000.);
    }

    #[test]
    fn test_nearest_of_overlapping_spheres() {
        let far_first: Scene = vec![
            tagged(vec3(0., 0., -10.), 1., 0.2),
            tagged(vec3(0., 0., -5.), 1., 0.8),
        ]
        .into();
        let hit = far_first.trace_nearest(&Ray::new(Vec3::ZERO, Vec3::NEG_Z));
        assert!(hit.hit);
        assert!((hit.distance - 4.).abs() < 1e-5);
        assert_eq!(hit.material.color, Vec3::splat(0.8));
    }

    #[test]
    fn test_ties_keep_first_sphere() {
        let scene: Scene = vec![
            tagged(vec3(0., 0., -5.), 1., 0.1),
            tagged(vec3(0., 0., -5.), 1., 0.9),
        ]
        .into();
        let hit = scene.trace_nearest(&Ray::new(Vec3::ZERO, Vec3::NEG_Z));
        assert_eq!(hit.material.color, Vec3::splat(0.1));
    }

    #[test]
    fn test_sphere_behind_wins_over_sphere_ahead() {
        let mut scene = Scene::new();
        scene.add(tagged(vec3(0., 0., -5.), 1., 0.5));
        scene.add(tagged(vec3(0., 0., 5.), 1., 0.7));
        let hit = scene.trace_nearest(&Ray::new(Vec3::ZERO, Vec3::NEG_Z));
        assert!(hit.distance < 0.);
        assert_eq!(hit.material.color, Vec3::splat(0.7));
    }

    #[test]
    fn test_showcase_layout() {
        let scene = Scene::showcase();
        assert_eq!(scene.len(), 4);
        let light = scene.spheres()[2];
        assert_eq!(light.material.emitted(), Color::ONE);
        assert_eq!(scene.spheres()[3].radius, 100.);
    }
}
