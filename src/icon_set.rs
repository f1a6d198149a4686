//! The fixed icon size table and the per-size generation loop.

use crate::contents_json::{write_contents_json, ImageEntry};
use crate::glyph::GlyphFace;
use crate::render::render;
use crate::style::StyleConfig;
use anyhow::{Context, Result};
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::{ColorType, ImageEncoder, RgbaImage};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Device target category for one generated size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Idiom {
    Phone,
    Tablet,
    Marketing,
}

impl Idiom {
    pub fn as_str(self) -> &'static str {
        match self {
            Idiom::Phone => "iphone",
            Idiom::Tablet => "ipad",
            Idiom::Marketing => "ios-marketing",
        }
    }
}

/// Display scale factor for one generated size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleFactor {
    X1,
    X2,
    X3,
}

impl ScaleFactor {
    pub fn as_str(self) -> &'static str {
        match self {
            ScaleFactor::X1 => "1x",
            ScaleFactor::X2 => "2x",
            ScaleFactor::X3 => "3x",
        }
    }
}

/// One required output size plus its platform metadata.
#[derive(Debug, Clone, Copy)]
pub struct IconSpec {
    pub logical_name: &'static str,
    pub pixel_size: u32,
    pub idiom: Idiom,
    pub scale: ScaleFactor,
}

impl IconSpec {
    pub fn filename(&self) -> String {
        format!("{}.png", self.logical_name)
    }

    /// The manifest `size` string. The marketing entry is listed in pixels;
    /// every other idiom is listed in points, pixel size divided by its
    /// scale denominator of 2 with integer truncation (so 29 px → "14x14").
    pub fn size_string(&self) -> String {
        let side = match self.idiom {
            Idiom::Marketing => self.pixel_size,
            _ => self.pixel_size / 2,
        };
        format!("{side}x{side}")
    }

    pub fn manifest_entry(&self) -> ImageEntry {
        ImageEntry {
            filename: self.filename(),
            idiom: self.idiom.as_str(),
            platform: "ios",
            size: self.size_string(),
            scale: match self.idiom {
                Idiom::Marketing => None,
                _ => Some(self.scale.as_str()),
            },
        }
    }
}

/// Every size the app ships, in the order the asset catalog lists them.
pub fn icon_specs() -> &'static [IconSpec] {
    use Idiom::*;
    use ScaleFactor::*;

    const SPECS: &[IconSpec] = &[
        IconSpec { logical_name: "appicon-1024", pixel_size: 1024, idiom: Marketing, scale: X1 },
        IconSpec { logical_name: "appicon-180", pixel_size: 180, idiom: Phone, scale: X3 },
        IconSpec { logical_name: "appicon-120", pixel_size: 120, idiom: Phone, scale: X2 },
        IconSpec { logical_name: "appicon-167", pixel_size: 167, idiom: Tablet, scale: X2 },
        IconSpec { logical_name: "appicon-152", pixel_size: 152, idiom: Tablet, scale: X2 },
        IconSpec { logical_name: "appicon-76", pixel_size: 76, idiom: Tablet, scale: X1 },
        IconSpec { logical_name: "appicon-40", pixel_size: 40, idiom: Phone, scale: X2 },
        IconSpec { logical_name: "appicon-29", pixel_size: 29, idiom: Phone, scale: X1 },
        IconSpec { logical_name: "appicon-20", pixel_size: 20, idiom: Phone, scale: X1 },
    ];
    SPECS
}

/// Render and write one PNG per spec into `out_dir`, then the Contents.json
/// descriptor when `with_manifest` is set.
///
/// Directory creation failure aborts the whole run; a failed PNG write
/// aborts with the offending filename in the error chain and leaves
/// previously written files intact.
pub fn generate_all(
    specs: &[IconSpec],
    style: &StyleConfig,
    out_dir: &Path,
    with_manifest: bool,
) -> Result<()> {
    create_dir_all(out_dir).context("Can't create output directory")?;

    // One font probe for the whole run.
    let glyph = GlyphFace::load();

    println!("Generating app icons...");
    let mut images = Vec::with_capacity(specs.len());
    for spec in specs {
        let img = render(spec.pixel_size, style, &glyph);
        let filename = spec.filename();
        write_png(&img, &out_dir.join(&filename))
            .with_context(|| format!("Failed to write {filename}"))?;
        println!("  ✓ Generated {filename} ({0}x{0})", spec.pixel_size);

        if with_manifest {
            images.push(spec.manifest_entry());
        }
    }

    if with_manifest {
        write_contents_json(out_dir, images)?;
        println!("  ✓ Generated Contents.json");
    }

    Ok(())
}

// Encode the buffer as a compressed PNG file.
fn write_png(img: &RgbaImage, path: &Path) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    let encoder =
        PngEncoder::new_with_quality(&mut out, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(img.as_raw(), img.width(), img.height(), ColorType::Rgba8)?;
    out.flush()?;
    Ok(())
}
