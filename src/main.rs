use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod contents_json;
mod draw;
mod glyph;
mod icon_set;
mod render;
mod style;

#[derive(Debug, Parser)]
#[clap(
    name = "appicon-gen",
    about = "Generate the TIS app icon at every required iOS size"
)]
struct Args {
    /// Output directory for the generated PNGs and Contents.json.
    #[clap(short, long, value_name = "DIR", default_value = "./AppIcon.appiconset")]
    output: PathBuf,

    /// Write the icon PNGs only, without a Contents.json manifest.
    #[clap(long)]
    skip_manifest: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let style = style::StyleConfig::default();
    icon_set::generate_all(
        icon_set::icon_specs(),
        &style,
        &args.output,
        !args.skip_manifest,
    )
}
