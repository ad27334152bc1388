use crate::buffer::PixelBuffer;
use glam::Vec3;
use std::io::{self, Write};

/// Linear RGB, unclamped.
pub type Color = Vec3;

pub fn write_color(out: &mut impl Write, pixel_color: &Color) -> io::Result<()> {
    let c = pixel_color.clamp(Color::ZERO, Color::ONE);
    write!(
        out,
        "{} {} {} ",
        (255.99 * c.x) as u8,
        (255.99 * c.y) as u8,
        (255.99 * c.z) as u8
    )
}

/// Plain PPM (P3). Row 0 of the buffer is the bottom of the image, so rows
/// are written last to first. A buffer with no pixels is written as 0x0.
pub fn write_ppm(out: &mut impl Write, buffer: &PixelBuffer) -> io::Result<()> {
    if buffer.is_empty() {
        return writeln!(out, "P3\n0 0\n255");
    }

    writeln!(out, "P3\n{} {}\n255", buffer.cols(), buffer.rows())?;
    for row in buffer.as_slice().chunks(buffer.cols()).rev() {
        for pixel in row {
            write_color(out, pixel)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
