//! Contents.json data model for Apple's asset catalog format.
//!
//! Only the fields the AppIcon.appiconset descriptor actually carries are
//! modeled here. Serde serializes struct fields in declaration order, which
//! keeps the emitted key order stable across runs.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// Root structure of a Contents.json file.
#[derive(Serialize, Debug, Clone)]
pub struct ContentsFile {
    /// One entry per generated icon file, in generation order.
    pub images: Vec<ImageEntry>,

    /// Authorship and format version block.
    pub info: Info,
}

/// One icon file's platform metadata.
#[derive(Serialize, Debug, Clone)]
pub struct ImageEntry {
    /// Name of the PNG file next to the descriptor.
    pub filename: String,

    /// Device target: "iphone", "ipad", or "ios-marketing".
    pub idiom: &'static str,

    pub platform: &'static str,

    /// Display size in points ("60x60"), or in pixels for the marketing
    /// entry ("1024x1024").
    pub size: String,

    /// Scale factor ("1x", "2x", "3x"); the marketing entry carries none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<&'static str>,
}

/// The fixed `{author, version}` trailer Xcode expects.
#[derive(Serialize, Debug, Clone)]
pub struct Info {
    pub author: &'static str,
    pub version: u8,
}

impl Default for Info {
    fn default() -> Self {
        Self {
            author: "xcode",
            version: 1,
        }
    }
}

impl ContentsFile {
    pub fn new(images: Vec<ImageEntry>) -> Self {
        Self {
            images,
            info: Info::default(),
        }
    }
}

/// Serialize the descriptor and write it as `Contents.json` in `dir`.
pub fn write_contents_json(dir: &Path, images: Vec<ImageEntry>) -> Result<()> {
    let contents = ContentsFile::new(images);
    let json =
        serde_json::to_string_pretty(&contents).context("Failed to serialize Contents.json")?;
    std::fs::write(dir.join("Contents.json"), json).context("Failed to write Contents.json file")
}
