use glam::Vec3;

pub trait Vec3Extensions {
    /// `1.0` when `self` lies in the closed hemisphere around `normal`,
    /// `-1.0` otherwise. Exactly perpendicular vectors count as inside.
    fn hemisphere_sign(self, normal: Self) -> f32;
    fn near_zero(&self) -> bool;
}

impl Vec3Extensions for Vec3 {
    fn hemisphere_sign(self, normal: Self) -> f32 {
        if normal.dot(self) < 0. {
            -1.
        } else {
            1.
        }
    }

    fn near_zero(&self) -> bool {
        self.abs_diff_eq(Self::ZERO, 1e-8)
    }
}
