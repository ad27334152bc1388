//! Progressive Monte-Carlo path tracing of sphere scenes.
//!
//! A [`Renderer`] blends one noisy frame per call into a caller-owned
//! [`PixelBuffer`], converging toward the mean image over successive frames.

pub mod buffer;
pub mod camera;
pub mod color;
pub mod error;
pub mod hittable;
pub mod material;
pub mod ray;
pub mod raytracer;
pub mod rng;
pub mod scene;
pub mod settings;
pub mod sphere;
pub mod tracer;
pub mod vectors;

pub use buffer::PixelBuffer;
pub use camera::Camera;
pub use color::Color;
pub use error::{Error, Result};
pub use hittable::{Hit, Hittable};
pub use material::Material;
pub use ray::Ray;
pub use raytracer::{render, Renderer};
pub use rng::PixelRng;
pub use scene::Scene;
pub use settings::RtSettings;
pub use sphere::Sphere;
