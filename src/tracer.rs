use crate::{color::Color, ray::Ray, rng::PixelRng, scene::Scene};

/// Light gathered along one path of at most `max_bounces` segments.
///
/// Each surface reached adds its emission scaled by the product of the
/// albedos seen before it. The bounce direction is the surface normal
/// perturbed by a uniform unit vector, with no pdf weighting, so this is a
/// biased estimator. Background contributes nothing.
pub fn accumulate_light(
    scene: &Scene,
    mut ray: Ray,
    rng: &mut PixelRng,
    max_bounces: u32,
) -> Color {
    let mut light = Color::ZERO;
    let mut throughput = Color::ONE;

    for _ in 0..max_bounces {
        let hit = scene.trace_nearest(&ray);
        if !hit.hit {
            break;
        }

        ray.orig = hit.position;
        ray.dir = (hit.normal + rng.next_direction()).normalize();

        light += throughput * hit.material.emitted();
        throughput *= hit.material.color;
    }

    light
}
