use crate::{material::Material, ray::Ray};
use glam::Vec3;

/// Distance carried by [`Hit::MISS`]. Any real intersection closer than this
/// replaces it.
pub const FAR_DISTANCE: f32 = 1_000_000.;

pub trait Hittable {
    fn intersect(&self, ray: &Ray) -> Hit;
}

/// Intersection record. `distance` and the geometric fields are meaningless
/// when `hit` is false.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub position: Vec3,
    pub normal: Vec3,
    pub distance: f32,
    pub material: Material,
    pub hit: bool,
}

impl Hit {
    pub const MISS: Self = Self {
        position: Vec3::ZERO,
        normal: Vec3::ZERO,
        distance: FAR_DISTANCE,
        material: Material {
            color: Vec3::ZERO,
            emissive_color: Vec3::ZERO,
            emissive_strength: 0.,
        },
        hit: false,
    };

    /// Keep `self` unless `other` is a real hit strictly closer than it.
    /// On ties the earlier record wins.
    pub fn nearest(self, other: Self) -> Self {
        if other.hit && other.distance < self.distance {
            other
        } else {
            self
        }
    }
}

impl Default for Hit {
    fn default() -> Self {
        Self::MISS
    }
}
