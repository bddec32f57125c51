//! Equirectangular earth texture: ocean gradient with flat-shaded landmasses.
//!
//! Rasterized on the CPU once at startup and served as PNG, so the browser
//! only has to upload it.

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};

use super::SceneError;
use super::landmasses::{LANDMASSES, Rgb};

pub const TEXTURE_WIDTH: u32 = 2048;
pub const TEXTURE_HEIGHT: u32 = 1024;
pub const OUTLINE_WIDTH: f32 = 1.5;

/// Vertical ocean gradient, top to bottom.
const OCEAN_STOPS: [(f32, Rgb); 5] = [
    (0.0, [0x0C, 0x2D, 0x6B]),
    (0.3, [0x1A, 0x4A, 0x8A]),
    (0.5, [0x15, 0x65, 0xC0]),
    (0.7, [0x1A, 0x4A, 0x8A]),
    (1.0, [0x0C, 0x2D, 0x6B]),
];

pub struct EarthTexture {
    image: RgbaImage,
}

impl EarthTexture {
    /// Rasterize at `width` x `height`. Zero dimensions are raised to 1.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn render(width: u32, height: u32) -> Self {
        let (width, height) = (width.max(1), height.max(1));
        let mut image = RgbaImage::new(width, height);

        for y in 0..height {
            let t = (y as f32 + 0.5) / height as f32;
            let color = opaque(ocean_color(t));
            for x in 0..width {
                image.put_pixel(x, y, color);
            }
        }

        for land in &LANDMASSES {
            let points: Vec<(f32, f32)> = land
                .points
                .iter()
                .map(|&(lat, lng)| project(lat, lng, width, height))
                .collect();
            fill_polygon(&mut image, &points, opaque(land.fill));
            if let Some(outline) = land.outline {
                stroke_polygon(&mut image, &points, opaque(outline), OUTLINE_WIDTH);
            }
        }

        Self { image }
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        self.image.get_pixel_checked(x, y).map(|p| [p[0], p[1], p[2]])
    }

    /// # Errors
    ///
    /// Returns [`SceneError::TextureEncode`] if the PNG encoder fails.
    pub fn encode_png(&self) -> Result<Vec<u8>, SceneError> {
        let mut out = Cursor::new(Vec::new());
        self.image.write_to(&mut out, ImageFormat::Png)?;
        Ok(out.into_inner())
    }
}

/// Equirectangular projection into pixel space.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn project(lat: f32, lng: f32, width: u32, height: u32) -> (f32, f32) {
    (((lng + 180.0) / 360.0) * width as f32, ((90.0 - lat) / 180.0) * height as f32)
}

/// Ocean color at vertical position `t` in `[0, 1]`.
#[must_use]
pub fn ocean_color(t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    for pair in OCEAN_STOPS.windows(2) {
        let ((t0, c0), (t1, c1)) = (pair[0], pair[1]);
        if t <= t1 {
            let f = if t1 > t0 { (t - t0) / (t1 - t0) } else { 0.0 };
            return [mix(c0[0], c1[0], f), mix(c0[1], c1[1], f), mix(c0[2], c1[2], f)];
        }
    }
    OCEAN_STOPS[OCEAN_STOPS.len() - 1].1
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn mix(a: u8, b: u8, f: f32) -> u8 {
    (f32::from(a) + (f32::from(b) - f32::from(a)) * f).round().clamp(0.0, 255.0) as u8
}

fn opaque(c: Rgb) -> Rgba<u8> {
    Rgba([c[0], c[1], c[2], 255])
}

// =============================================================================
// RASTERIZATION
// =============================================================================

/// Scanline fill using the non-zero winding rule, sampling pixel centres.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn fill_polygon(image: &mut RgbaImage, points: &[(f32, f32)], color: Rgba<u8>) {
    if points.len() < 3 {
        return;
    }
    let (width, height) = image.dimensions();
    let mut crossings: Vec<(f32, i32)> = Vec::new();

    for y in 0..height {
        let cy = y as f32 + 0.5;
        crossings.clear();
        for (i, &(x0, y0)) in points.iter().enumerate() {
            let (x1, y1) = points[(i + 1) % points.len()];
            let winding = if y0 <= cy && y1 > cy {
                1
            } else if y1 <= cy && y0 > cy {
                -1
            } else {
                continue;
            };
            let x = x0 + (cy - y0) / (y1 - y0) * (x1 - x0);
            crossings.push((x, winding));
        }
        crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut winding = 0;
        for pair in crossings.windows(2) {
            winding += pair[0].1;
            if winding == 0 {
                continue;
            }
            let start = (pair[0].0 - 0.5).ceil().max(0.0);
            let end = (pair[1].0 - 0.5).ceil().min(width as f32);
            let mut x = start;
            while x < end {
                image.put_pixel(x as u32, y, color);
                x += 1.0;
            }
        }
    }
}

/// Closed outline of `line_width` pixels, stamped along each edge.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn stroke_polygon(image: &mut RgbaImage, points: &[(f32, f32)], color: Rgba<u8>, line_width: f32) {
    let (width, height) = image.dimensions();
    let half = (line_width / 2.0).max(0.5);
    let reach = half.ceil() as i64;

    let mut stamp = |px: f32, py: f32| {
        let (cx, cy) = (px.floor() as i64, py.floor() as i64);
        for dy in -reach..=reach {
            for dx in -reach..=reach {
                let (x, y) = (cx + dx, cy + dy);
                if x < 0 || y < 0 || x >= i64::from(width) || y >= i64::from(height) {
                    continue;
                }
                let (ex, ey) = (x as f32 + 0.5 - px, y as f32 + 0.5 - py);
                if ex * ex + ey * ey <= half * half {
                    image.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    };

    for (i, &(x0, y0)) in points.iter().enumerate() {
        let (x1, y1) = points[(i + 1) % points.len()];
        let steps = ((x1 - x0).hypot(y1 - y0) * 2.0).ceil().max(1.0) as u32;
        for s in 0..=steps {
            let t = s as f32 / steps as f32;
            stamp(x0 + (x1 - x0) * t, y0 + (y1 - y0) * t);
        }
    }
}

#[cfg(test)]
#[path = "texture_test.rs"]
mod tests;
