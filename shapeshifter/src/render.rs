//! Waveform rendering
//!
//! Draws one wave as a connected line plot: sample index along x, amplitude
//! along y with zero at the vertical centre and positive values upward.

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::SAMPLES_PER_WAVE;
use crate::error::Result;
use crate::model::Wave;

/// Rendered image width, one column per sample
pub const IMAGE_WIDTH: u32 = SAMPLES_PER_WAVE as u32;

/// Rendered image height
pub const IMAGE_HEIGHT: u32 = 256;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const STROKE: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Map a sample to its image row
///
/// `i16::MAX` lands on row 0. `i16::MIN` lands one past the bottom edge,
/// so the result is clamped to the last row.
pub fn sample_to_y(sample: i16) -> u32 {
    let h = IMAGE_HEIGHT as i32;
    let y = -(sample as i32) * h / i16::MAX as i32 / 2 + h / 2;
    y.clamp(0, h - 1) as u32
}

/// Render a wave on a white background
pub fn draw_wave(wave: &Wave) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(IMAGE_WIDTH, IMAGE_HEIGHT, BACKGROUND);

    let mut path = LinePath::default();
    for (x, &sample) in wave.samples().iter().enumerate() {
        let point = (x as i32, sample_to_y(sample) as i32);
        if x == 0 {
            path.move_to(point);
        } else {
            path.line_to(point);
        }
    }
    path.stroke(&mut img, STROKE);

    img
}

/// Render a wave and encode it as PNG
pub fn encode_png(wave: &Wave) -> Result<Vec<u8>> {
    let mut png_bytes = Vec::new();
    draw_wave(wave).write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)?;
    Ok(png_bytes)
}

/// Polyline built point by point and stroked once
#[derive(Default)]
struct LinePath {
    points: Vec<(i32, i32)>,
}

impl LinePath {
    fn move_to(&mut self, point: (i32, i32)) {
        self.points.clear();
        self.points.push(point);
    }

    fn line_to(&mut self, point: (i32, i32)) {
        self.points.push(point);
    }

    fn stroke(&self, img: &mut RgbaImage, color: Rgba<u8>) {
        match self.points.as_slice() {
            [] => {}
            [only] => plot(img, *only, color),
            points => {
                for segment in points.windows(2) {
                    draw_segment(img, segment[0], segment[1], color);
                }
            }
        }
    }
}

/// Bresenham line between two points, endpoints included
fn draw_segment(img: &mut RgbaImage, from: (i32, i32), to: (i32, i32), color: Rgba<u8>) {
    let (mut x, mut y) = from;
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let sx = if x < to.0 { 1 } else { -1 };
    let sy = if y < to.1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        plot(img, (x, y), color);
        if (x, y) == to {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

fn plot(img: &mut RgbaImage, (x, y): (i32, i32), color: Rgba<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}
