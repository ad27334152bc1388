//! Per-pixel pseudo-random number generation.
//!
//! [`PixelRng`] is a tiny stateful generator carried by value through a
//! single pixel's work. Every draw mutates the 32-bit state in place, so a
//! pixel's sequence is fully determined by its seed and the number of draws.

use crate::vectors::Vec3Extensions;
use glam::{vec3, Vec3};
use rand::{RngCore, SeedableRng};
use std::f32::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRng {
    state: u32,
}

impl PixelRng {
    /// NOTE: a zero seed is a fixed point of the mixing function, every draw
    /// from it returns 0.
    pub fn seed(state: u32) -> Self {
        Self { state }
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    /// Additive xorshift step. Returns the new state.
    pub fn next_u32(&mut self) -> u32 {
        let mut s = self.state.wrapping_add(self.state << 10);
        s ^= s >> 6;
        s = s.wrapping_add(s << 3);
        s ^= s >> 11;
        s = s.wrapping_add(s << 15);
        self.state = s;
        s
    }

    /// Uniform draw in `[0, 1]`. The upper bound is reachable for states near
    /// `u32::MAX`, it is not filtered out.
    pub fn next_f32(&mut self) -> f32 {
        self.next_u32() as f32 / 4294967295.0
    }

    /// Standard normal draw (Box-Muller, cosine branch).
    ///
    /// When the second uniform draw is exactly 1.0 the log term is `ln(0)`
    /// and the result is not finite.
    pub fn next_gaussian(&mut self) -> f32 {
        let theta = 2.0 * PI * self.next_f32();
        let rho = (-2.0 * (1.0 - self.next_f32()).ln()).sqrt();
        rho * theta.cos()
    }

    /// Uniformly distributed direction on the unit sphere.
    pub fn next_direction(&mut self) -> Vec3 {
        let x = self.next_gaussian();
        let y = self.next_gaussian();
        let z = self.next_gaussian();
        vec3(x, y, z).normalize()
    }

    /// Uniform direction flipped into the hemisphere around `normal`.
    /// Directions exactly perpendicular to `normal` are kept as drawn.
    pub fn next_hemisphere_direction(&mut self, normal: Vec3) -> Vec3 {
        let direction = self.next_direction();
        direction * direction.hemisphere_sign(normal)
    }
}

impl RngCore for PixelRng {
    fn next_u32(&mut self) -> u32 {
        PixelRng::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        let lo = PixelRng::next_u32(self) as u64;
        let hi = PixelRng::next_u32(self) as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = PixelRng::next_u32(self).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for PixelRng {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::seed(u32::from_le_bytes(seed))
    }
}
