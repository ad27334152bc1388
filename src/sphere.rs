use crate::{
    hittable::{Hit, Hittable},
    material::Material,
    ray::Ray,
};
use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

impl Hittable for Sphere {
    /// Only the near root of the quadratic is considered, and it is not
    /// range checked: a ray starting inside the sphere, or pointing away
    /// from it, still reports the near root at a negative distance.
    fn intersect(&self, ray: &Ray) -> Hit {
        let oc = ray.orig - self.center;
        let a = ray.dir.dot(ray.dir);
        let b = 2. * oc.dot(ray.dir);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4. * a * c;
        if discriminant < 0. {
            return Hit::MISS;
        }

        let distance = (-b - discriminant.sqrt()) / (2. * a);
        let position = ray.at(distance);
        Hit {
            position,
            normal: (position - self.center) / self.radius,
            distance,
            material: self.material,
            hit: true,
        }
    }
}
