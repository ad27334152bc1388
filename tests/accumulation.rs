use accumrayz::{
    raytracer::{pixel_seed, pixel_uv, sample_pixel},
    render, Camera, Color, Material, PixelBuffer, PixelRng, Renderer, RtSettings, Scene, Sphere,
};
use glam::{vec2, vec3, Vec3};

const ROWS: usize = 18;
const COLS: usize = 32;

fn lit_scene() -> Scene {
    Scene::with_spheres(vec![
        Sphere::new(Vec3::ZERO, 1., Material::diffuse(vec3(0.8, 0.4, 0.2))),
        Sphere::new(vec3(2.5, 0., 0.), 1., Material::diffuse(vec3(0.2, 0.4, 0.8))),
        Sphere::new(vec3(0., 8., 0.), 4., Material::emissive(Color::ONE, 1.5)),
    ])
}

fn camera() -> Camera {
    Camera::new(vec3(0., 0.5, 9.), vec3(1., 0., 0.))
}

fn mean_abs_diff(a: &PixelBuffer, b: &PixelBuffer) -> f32 {
    let total: f32 = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(x, y)| {
            let d = (*x - *y).abs();
            d.x + d.y + d.z
        })
        .sum();
    total / (a.len() * 3) as f32
}

#[test]
fn red_sphere_without_light_renders_black() {
    let scene = Scene::with_spheres(vec![Sphere::new(
        Vec3::ZERO,
        1.,
        Material::diffuse(vec3(1., 0., 0.)),
    )]);
    let camera = Camera::new(vec3(0., 0., 10.), Vec3::ZERO);
    let mut buffer = PixelBuffer::new(ROWS, COLS);
    render(0, &camera, &mut buffer, &scene, 1, 1);

    assert_eq!(buffer.get(ROWS / 2, COLS / 2), Color::ZERO);
    assert!(buffer.as_slice().iter().all(|c| *c == Color::ZERO));
}

#[test]
fn buffer_holds_mean_of_all_frames() {
    let scene = lit_scene();
    let camera = camera();
    let (max_bounces, samples) = (3, 2);
    let frames = 12u64;

    let mut buffer = PixelBuffer::new(ROWS, COLS);
    for frame in 0..frames {
        render(frame, &camera, &mut buffer, &scene, max_bounces, samples);
    }

    let resolution = vec2(ROWS as f32, COLS as f32);
    for i in 0..ROWS {
        for j in 0..COLS {
            let uv = pixel_uv(i, j, resolution);
            let sum = (0..frames).fold(Color::ZERO, |acc, frame| {
                let mut rng = PixelRng::seed(pixel_seed(i as u32, j as u32, frame));
                acc + sample_pixel(&scene, &camera, uv, &mut rng, max_bounces, samples)
            });
            let expected = sum / frames as f32;
            let got = buffer.get(i, j);
            assert!(
                got.abs_diff_eq(expected, 1e-4 * expected.max_element().max(1.)),
                "pixel ({i}, {j}): {got} vs {expected}"
            );
        }
    }
}

#[test]
fn error_shrinks_as_frames_accumulate() {
    let scene = lit_scene();
    let camera = camera();
    let mut reference = PixelBuffer::new(ROWS, COLS);
    for frame in 0..512 {
        render(frame, &camera, &mut reference, &scene, 3, 1);
    }

    let mut renderer = Renderer::new(scene, RtSettings::new(3, 1))
        .unwrap()
        .with_camera(camera);
    let mut buffer = PixelBuffer::new(ROWS, COLS);
    let mut errors = vec![];
    for frame in 1..=64 {
        renderer.render(&mut buffer);
        if [2, 16, 64].contains(&frame) {
            errors.push(mean_abs_diff(&buffer, &reference));
        }
    }

    assert!(errors[0] > errors[1], "{errors:?}");
    assert!(errors[1] > errors[2], "{errors:?}");
}

#[test]
fn camera_move_restarts_accumulation() {
    let moved = Camera::new(vec3(1., 1., 8.), Vec3::ZERO);

    let mut renderer = Renderer::new(lit_scene(), RtSettings::default())
        .unwrap()
        .with_camera(camera());
    let mut buffer = PixelBuffer::new(ROWS, COLS);
    for _ in 0..5 {
        renderer.render(&mut buffer);
    }
    renderer.set_camera(moved);
    renderer.render(&mut buffer);

    let mut fresh = Renderer::new(lit_scene(), RtSettings::default())
        .unwrap()
        .with_camera(moved);
    let mut expected = PixelBuffer::new(ROWS, COLS);
    fresh.render(&mut expected);

    assert_eq!(buffer, expected);
    assert_eq!(renderer.frame_count(), 1);
}

#[test]
fn invalid_settings_fail_fast() {
    assert!(Renderer::new(Scene::showcase(), RtSettings::new(1, 0)).is_err());
    assert!(Renderer::new(Scene::showcase(), RtSettings::new(0, 1)).is_err());
    assert!(Renderer::new(Scene::showcase(), RtSettings::new(1, 1)).is_ok());
}
