//! The parametric icon renderer: one fixed clock-and-dollar composition,
//! scaled to any requested pixel size.

use crate::draw;
use crate::glyph::GlyphFace;
use crate::style::StyleConfig;
use image::RgbaImage;

/// Stroke widths scale as `pixel_size / divisor` but never drop below 2 px,
/// so the smallest icons still draw visible lines.
pub fn stroke_width(pixel_size: u32, divisor: u32) -> f32 {
    (pixel_size / divisor).max(2) as f32
}

/// Render the icon at `pixel_size × pixel_size`.
///
/// Compositing order: gradient background, clock face outline, the two
/// hands, center dot, then the shadowed accent glyph. Both hands point at
/// 3 o'clock (angle 0), a deliberate fixed pose carried over from the
/// shipped icon rather than a live time readout.
pub fn render(pixel_size: u32, style: &StyleConfig, glyph: &GlyphFace) -> RgbaImage {
    let mut img = RgbaImage::new(pixel_size, pixel_size);

    draw::fill_vertical_gradient(&mut img, style.background, style.background2);

    let center = pixel_size as f32 / 2.0;
    let clock_radius = pixel_size as f32 / 3.0;
    let stroke = stroke_width(pixel_size, 64);

    draw::stroke_circle(&mut img, center, center, clock_radius, stroke, style.face);

    let angle = 0.0f32;
    let hour_len = clock_radius / 2.0;
    let minute_len = clock_radius * 0.7;
    for len in [hour_len, minute_len] {
        let end = (center + len * angle.cos(), center + len * angle.sin());
        draw::draw_line(&mut img, (center, center), end, stroke, style.hand);
    }

    draw::fill_circle(&mut img, center, center, stroke_width(pixel_size, 32), style.hand);

    // Accent glyph in the lower-right quadrant, shadow first.
    let glyph_px = (pixel_size as f32 / 8.0).max(12.0);
    let anchor = (pixel_size / 2 + pixel_size / 4) as i32;
    glyph.draw(
        &mut img,
        style.accent_glyph,
        (anchor + 2, anchor + 2),
        glyph_px,
        style.shadow,
    );
    glyph.draw(&mut img, style.accent_glyph, (anchor, anchor), glyph_px, style.accent);

    img
}
