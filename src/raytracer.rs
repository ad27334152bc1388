//! Per-pixel sampling and progressive accumulation.
//!
//! [`render`] is the frame kernel: every pixel is seeded from its
//! coordinates and the frame index, averages `samples` paths through the
//! same screen coordinate, and blends the average into the buffer as a
//! running mean. [`Renderer`] wraps the kernel with the frame counter and
//! resets it whenever the image being converged to changes.

use crate::{
    buffer::PixelBuffer,
    camera::Camera,
    color::Color,
    error::Result,
    rng::PixelRng,
    scene::Scene,
    settings::RtSettings,
    tracer::accumulate_light,
};
use glam::{vec2, Vec2, Vec3};
use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, info};

/// Seed of the generator for pixel `(i, j)` on a given frame. All arithmetic
/// wraps at 32 bits.
pub fn pixel_seed(i: u32, j: u32, frame_count: u64) -> u32 {
    i.wrapping_mul(420420)
        .wrapping_mul(j)
        .wrapping_mul(696969)
        .wrapping_add(696969)
        .wrapping_add((frame_count as u32).wrapping_mul(42069))
}

/// Centered screen coordinate of pixel `(i, j)`, scaled by the row count.
/// `resolution` is `(rows, cols)`; the result is `(horizontal, vertical)`.
pub fn pixel_uv(i: usize, j: usize, resolution: Vec2) -> Vec2 {
    let uv = (vec2(i as f32, j as f32) - 0.5 * resolution) / resolution.x;
    vec2(uv.y, uv.x)
}

/// Mean light of `samples` paths cast through the same coordinate. There is
/// no sub-pixel jitter; samples differ only in their bounce directions.
pub fn sample_pixel(
    scene: &Scene,
    camera: &Camera,
    uv: Vec2,
    rng: &mut PixelRng,
    max_bounces: u32,
    samples: u32,
) -> Color {
    let ray = camera.get_ray(uv);
    let total = (0..samples).fold(Color::ZERO, |acc, _| {
        acc + accumulate_light(scene, ray, rng, max_bounces)
    });
    total / samples as f32
}

/// Running-mean update: frame `frame_count` is weighted `1 / (frame_count + 1)`,
/// so frame 0 replaces whatever finite value was there.
pub fn blend(previous: Color, sample: Color, frame_count: u64) -> Color {
    let w = 1. / (frame_count as f32 + 1.);
    previous * (1. - w) + sample * w
}

/// Render one progressive frame into `buffer`.
///
/// `max_bounces` and `samples` must both be at least 1; [`RtSettings`]
/// validates them for callers going through [`Renderer`].
#[tracing::instrument(level = "trace", skip_all, fields(frame = frame_count))]
pub fn render(
    frame_count: u64,
    camera: &Camera,
    buffer: &mut PixelBuffer,
    scene: &Scene,
    max_bounces: u32,
    samples: u32,
) {
    debug_assert!(max_bounces >= 1 && samples >= 1);

    let cols = buffer.cols();
    let resolution = vec2(buffer.rows() as f32, cols as f32);

    buffer
        .as_mut_slice()
        .par_iter_mut()
        .enumerate()
        .for_each(|(idx, pixel)| {
            let (i, j) = (idx / cols, idx % cols);
            let mut rng = PixelRng::seed(pixel_seed(i as u32, j as u32, frame_count));
            let uv = pixel_uv(i, j, resolution);
            let sample = sample_pixel(scene, camera, uv, &mut rng, max_bounces, samples);
            *pixel = blend(*pixel, sample, frame_count);
        });
}

/// Owns the frame counter and the parameters accumulation depends on.
///
/// Any change to the camera, bounce limit or sample count restarts
/// accumulation at frame 0. The pixel buffer itself is not cleared: the
/// first frame after a reset is weighted 1 and overwrites it.
#[derive(Debug)]
pub struct Renderer {
    scene: Scene,
    camera: Camera,
    settings: RtSettings,
    frame_count: u64,
    pool: Option<rayon::ThreadPool>,
}

impl Renderer {
    pub fn new(scene: Scene, settings: RtSettings) -> Result<Self> {
        settings.validate()?;
        let pool = build_pool(settings.threads)?;
        info!(
            spheres = scene.len(),
            max_bounces = settings.max_bounces,
            samples = settings.samples,
            threads = ?settings.threads,
            "Created renderer"
        );

        Ok(Self {
            scene,
            camera: Camera::default(),
            settings,
            frame_count: 0,
            pool,
        })
    }

    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = camera;
        self
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn settings(&self) -> &RtSettings {
        &self.settings
    }

    /// Index of the next frame to be rendered.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Blend one more frame into `buffer` and advance the frame counter.
    pub fn render(&mut self, buffer: &mut PixelBuffer) {
        let start = Instant::now();
        let RtSettings {
            max_bounces,
            samples,
            ..
        } = self.settings;

        let mut frame = || {
            render(
                self.frame_count,
                &self.camera,
                buffer,
                &self.scene,
                max_bounces,
                samples,
            )
        };
        match &self.pool {
            Some(pool) => pool.install(frame),
            None => frame(),
        }

        debug!(
            frame = self.frame_count,
            pixels = buffer.len(),
            elapsed = ?start.elapsed(),
            "Rendered frame"
        );
        self.frame_count += 1;
    }

    pub fn reset(&mut self) {
        if self.frame_count != 0 {
            info!(frames = self.frame_count, "Accumulation reset");
        }
        self.frame_count = 0;
    }

    pub fn set_settings(&mut self, settings: RtSettings) -> Result<()> {
        settings.validate()?;
        if settings.threads != self.settings.threads {
            self.pool = build_pool(settings.threads)?;
        }
        let changed = self.settings.changes_output(&settings);
        self.settings = settings;
        if changed {
            self.reset();
        }
        Ok(())
    }

    pub fn set_samples(&mut self, samples: u32) -> Result<()> {
        self.set_settings(RtSettings {
            samples,
            ..self.settings
        })
    }

    pub fn set_max_bounces(&mut self, max_bounces: u32) -> Result<()> {
        self.set_settings(RtSettings {
            max_bounces,
            ..self.settings
        })
    }

    pub fn set_camera(&mut self, camera: Camera) {
        if camera != self.camera {
            self.camera = camera;
            self.reset();
        }
    }

    pub fn set_camera_position(&mut self, pos: Vec3) {
        self.set_camera(Camera { pos, ..self.camera });
    }
}

fn build_pool(threads: Option<usize>) -> Result<Option<rayon::ThreadPool>> {
    let Some(threads) = threads else {
        return Ok(None);
    };
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|idx| format!("render-{idx}"))
        .build()?;
    Ok(Some(pool))
}
