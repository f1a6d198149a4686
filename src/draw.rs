//! Per-pixel drawing primitives for the icon canvas.
//!
//! Everything here works directly on an `RgbaImage` with plain coordinate
//! loops and distance tests; curve edges get a one-pixel anti-aliased rim.

use image::{Rgba, RgbaImage};

/// Source-over blend of `color` onto the pixel at (x, y), weighted by
/// `coverage` in `[0, 1]` on top of the color's own alpha.
pub fn blend_pixel(img: &mut RgbaImage, x: u32, y: u32, color: Rgba<u8>, coverage: f32) {
    if x >= img.width() || y >= img.height() {
        return;
    }
    let alpha = (color[3] as f32 / 255.0) * coverage.clamp(0.0, 1.0);
    if alpha <= 0.0 {
        return;
    }
    let dst = img.get_pixel_mut(x, y);
    for c in 0..3 {
        dst[c] = (color[c] as f32 * alpha + dst[c] as f32 * (1.0 - alpha)) as u8;
    }
    let out_a = alpha + (dst[3] as f32 / 255.0) * (1.0 - alpha);
    dst[3] = (out_a * 255.0).round() as u8;
}

/// Fill the whole canvas with an opaque vertical linear gradient from `top`
/// to `bottom`. Each row interpolates at ratio `y / height`, color channels
/// truncated to integer.
pub fn fill_vertical_gradient(img: &mut RgbaImage, top: Rgba<u8>, bottom: Rgba<u8>) {
    let height = img.height();
    for y in 0..height {
        let ratio = y as f64 / height as f64;
        let mut row_color = Rgba([255u8; 4]);
        for c in 0..3 {
            row_color[c] = (top[c] as f64 * (1.0 - ratio) + bottom[c] as f64 * ratio) as u8;
        }
        for x in 0..img.width() {
            img.put_pixel(x, y, row_color);
        }
    }
}

/// Stroke a circle outline centered at (cx, cy). The stroke straddles the
/// radius evenly.
pub fn stroke_circle(
    img: &mut RgbaImage,
    cx: f32,
    cy: f32,
    radius: f32,
    stroke: f32,
    color: Rgba<u8>,
) {
    let half = stroke / 2.0;
    let (x0, x1, y0, y1) = circle_bounds(img, cx, cy, radius + half + 1.0);
    for y in y0..y1 {
        for x in x0..x1 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            let band = ((dx * dx + dy * dy).sqrt() - radius).abs();
            if band <= half {
                blend_pixel(img, x, y, color, 1.0);
            } else if band <= half + 1.0 {
                // Anti-aliasing edge
                blend_pixel(img, x, y, color, half + 1.0 - band);
            }
        }
    }
}

/// Fill a solid disc centered at (cx, cy).
pub fn fill_circle(img: &mut RgbaImage, cx: f32, cy: f32, radius: f32, color: Rgba<u8>) {
    let (x0, x1, y0, y1) = circle_bounds(img, cx, cy, radius + 1.0);
    for y in y0..y1 {
        for x in x0..x1 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            let distance = (dx * dx + dy * dy).sqrt();
            if distance <= radius {
                blend_pixel(img, x, y, color, 1.0);
            } else if distance <= radius + 1.0 {
                blend_pixel(img, x, y, color, radius + 1.0 - distance);
            }
        }
    }
}

/// Draw a straight line segment of the given stroke width by testing every
/// pixel in the segment's bounding box against its distance to the segment.
pub fn draw_line(
    img: &mut RgbaImage,
    from: (f32, f32),
    to: (f32, f32),
    width: f32,
    color: Rgba<u8>,
) {
    let half = width / 2.0;
    let pad = half + 1.0;
    let x0 = (from.0.min(to.0) - pad).floor().max(0.0) as u32;
    let y0 = (from.1.min(to.1) - pad).floor().max(0.0) as u32;
    let x1 = ((from.0.max(to.0) + pad).ceil() as u32).min(img.width());
    let y1 = ((from.1.max(to.1) + pad).ceil() as u32).min(img.height());

    for y in y0..y1 {
        for x in x0..x1 {
            let d = segment_distance((x as f32 + 0.5, y as f32 + 0.5), from, to);
            if d <= half {
                blend_pixel(img, x, y, color, 1.0);
            } else if d <= half + 1.0 {
                blend_pixel(img, x, y, color, half + 1.0 - d);
            }
        }
    }
}

/// Distance from point `p` to the segment `a`-`b`.
fn segment_distance(p: (f32, f32), a: (f32, f32), b: (f32, f32)) -> f32 {
    let (abx, aby) = (b.0 - a.0, b.1 - a.1);
    let (apx, apy) = (p.0 - a.0, p.1 - a.1);
    let len_sq = abx * abx + aby * aby;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        ((apx * abx + apy * aby) / len_sq).clamp(0.0, 1.0)
    };
    let (dx, dy) = (apx - t * abx, apy - t * aby);
    (dx * dx + dy * dy).sqrt()
}

/// Clamp a circle's bounding box to the canvas.
fn circle_bounds(img: &RgbaImage, cx: f32, cy: f32, reach: f32) -> (u32, u32, u32, u32) {
    let x0 = (cx - reach).floor().max(0.0) as u32;
    let y0 = (cy - reach).floor().max(0.0) as u32;
    let x1 = ((cx + reach).ceil() as u32).min(img.width());
    let y1 = ((cy + reach).ceil() as u32).min(img.height());
    (x0, x1, y0, y1)
}
