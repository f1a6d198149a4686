//! Accent glyph rendering with font fallback.
//!
//! Loads the first readable system font from a fixed path list and rasterizes
//! glyphs through rusttype. When no font file can be read (stripped-down
//! containers, unusual installs) a built-in 5×7 bitmap face takes over, so
//! glyph drawing never fails.

use crate::draw::blend_pixel;
use image::{Rgba, RgbaImage};
use rusttype::{point, Font, Scale};

/// System font files probed in order at renderer initialization.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// A 5×7 dollar sign, one bitmask row per scanline.
const BITMAP_DOLLAR: [u8; 7] = [
    0b00100, 0b01111, 0b10100, 0b01110, 0b00101, 0b11110, 0b00100,
];

/// Hollow box used for characters the bitmap face does not know.
const BITMAP_BOX: [u8; 7] = [
    0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111,
];

/// The glyph face chosen for the lifetime of a generation run.
pub enum GlyphFace {
    /// A scalable font loaded from a system path.
    Scalable(Font<'static>),
    /// Built-in bitmap fallback.
    Bitmap,
}

impl GlyphFace {
    /// Probe the candidate font paths; fall back to the bitmap face when
    /// none of them yields a parseable font. Never errors.
    pub fn load() -> Self {
        for path in FONT_CANDIDATES {
            if let Ok(data) = std::fs::read(path) {
                if let Some(font) = Font::try_from_vec(data) {
                    return GlyphFace::Scalable(font);
                }
            }
        }
        GlyphFace::Bitmap
    }

    /// Draw `ch` with its top-left corner near `origin`, sized to roughly
    /// `px` pixels tall, blending coverage into the canvas.
    pub fn draw(&self, img: &mut RgbaImage, ch: char, origin: (i32, i32), px: f32, color: Rgba<u8>) {
        match self {
            GlyphFace::Scalable(font) => draw_scalable(font, img, ch, origin, px, color),
            GlyphFace::Bitmap => draw_bitmap(img, ch, origin, px, color),
        }
    }
}

fn draw_scalable(
    font: &Font<'static>,
    img: &mut RgbaImage,
    ch: char,
    origin: (i32, i32),
    px: f32,
    color: Rgba<u8>,
) {
    let scale = Scale::uniform(px);
    let ascent = font.v_metrics(scale).ascent;
    let glyph = font
        .glyph(ch)
        .scaled(scale)
        .positioned(point(origin.0 as f32, origin.1 as f32 + ascent));

    if let Some(bb) = glyph.pixel_bounding_box() {
        glyph.draw(|gx, gy, coverage| {
            let x = bb.min.x + gx as i32;
            let y = bb.min.y + gy as i32;
            if x >= 0 && y >= 0 {
                blend_pixel(img, x as u32, y as u32, color, coverage);
            }
        });
    }
}

fn draw_bitmap(img: &mut RgbaImage, ch: char, origin: (i32, i32), px: f32, color: Rgba<u8>) {
    let rows = match ch {
        '$' => &BITMAP_DOLLAR,
        _ => &BITMAP_BOX,
    };
    // One bitmap cell per seventh of the requested height, at least 1 px.
    let cell = ((px / 7.0) as i32).max(1);

    for (row, bits) in rows.iter().enumerate() {
        for col in 0..5 {
            if bits & (0b10000 >> col) == 0 {
                continue;
            }
            let x0 = origin.0 + col as i32 * cell;
            let y0 = origin.1 + row as i32 * cell;
            for dy in 0..cell {
                for dx in 0..cell {
                    let (x, y) = (x0 + dx, y0 + dy);
                    if x >= 0 && y >= 0 {
                        blend_pixel(img, x as u32, y as u32, color, 1.0);
                    }
                }
            }
        }
    }
}
