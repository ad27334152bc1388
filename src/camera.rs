use crate::{ray::Ray, vectors::Vec3Extensions};
use glam::{vec3, Vec2, Vec3};

/// Default look target of the interactive view.
pub const DEFAULT_TARGET: Vec3 = vec3(1., 0., 0.);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub pos: Vec3,
    pub target: Vec3,
}

/// Orthonormal view frame derived from a [`Camera`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    pub forwards: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, DEFAULT_TARGET)
    }
}

impl Camera {
    pub fn new(pos: Vec3, target: Vec3) -> Self {
        Self { pos, target }
    }

    /// World up is +Y. A camera sitting on its target looks down -Z, and a
    /// view straight up or down takes its right vector from +Z instead.
    pub fn basis(&self) -> CameraBasis {
        let forwards = (self.target - self.pos)
            .try_normalize()
            .unwrap_or(Vec3::NEG_Z);

        let mut right = Vec3::Y.cross(forwards);
        if right.near_zero() {
            right = Vec3::Z.cross(forwards);
        }
        let right = right.normalize();
        let up = forwards.cross(right);

        CameraBasis {
            forwards,
            right,
            up,
        }
    }

    /// Unit direction through screen coordinate `uv` on an image plane one
    /// unit in front of the camera.
    pub fn look_at(&self, uv: Vec2) -> Vec3 {
        let CameraBasis {
            forwards,
            right,
            up,
        } = self.basis();
        let center = self.pos + forwards;
        let point = center + right * uv.x + up * uv.y;
        (point - self.pos).normalize()
    }

    pub fn get_ray(&self, uv: Vec2) -> Ray {
        Ray::new(self.pos, self.look_at(uv))
    }
}
