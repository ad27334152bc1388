use crate::color::Color;

/// Diffuse albedo plus emission. Emission is added as light regardless of
/// `color`; `color` only attenuates light gathered by later bounces.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Material {
    pub color: Color,
    pub emissive_color: Color,
    pub emissive_strength: f32,
}

impl Material {
    pub fn new(color: Color, emissive_color: Color, emissive_strength: f32) -> Self {
        Self {
            color,
            emissive_color,
            emissive_strength,
        }
    }

    pub fn diffuse(color: Color) -> Self {
        Self::new(color, Color::ZERO, 0.)
    }

    pub fn emissive(emissive_color: Color, emissive_strength: f32) -> Self {
        Self::new(Color::ZERO, emissive_color, emissive_strength)
    }

    pub fn emitted(&self) -> Color {
        self.emissive_color * self.emissive_strength
    }
}
