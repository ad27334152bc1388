use accumrayz::{color::write_ppm, PixelBuffer, Renderer, RtSettings, Scene};
use std::io::{self, BufWriter, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

const WINDOW_WIDTH: u32 = 1280;
const WINDOW_HEIGHT: u32 = 720;
const RESOLUTION_FACTOR: f32 = 0.25;
const FRAMES: u32 = 64;

fn main() -> accumrayz::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut buffer = PixelBuffer::scaled(WINDOW_WIDTH, WINDOW_HEIGHT, RESOLUTION_FACTOR);
    let mut renderer = Renderer::new(Scene::showcase(), RtSettings::new(4, 2))?;

    for _ in 0..FRAMES {
        renderer.render(&mut buffer);
    }
    info!(
        frames = renderer.frame_count(),
        rows = buffer.rows(),
        cols = buffer.cols(),
        "Writing preview"
    );

    let mut out = BufWriter::new(io::stdout().lock());
    write_ppm(&mut out, &buffer)?;
    out.flush()?;
    Ok(())
}
