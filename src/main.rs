use clap::Parser;
use mkslides::config::SlideConfig;
use mkslides::{output, pipeline};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mkslides")]
#[command(about = "Batch-convert a folder of images into fixed-size captioned slides")]
#[command(long_about = "\
Batch-convert a folder of images into fixed-size captioned slides

Every jpg/png directly inside the input directory becomes one 400x200
slide in the output directory, scaled and cropped to fit, with the
filename drawn over a translucent box:

  in/
  ├── dawn at the lake.jpg     →  out/dawn at the lake.jpg
  └── mountains.png            →  out/mountains.jpg

The output directory must already exist; mkslides never creates it.
Slide dimensions, caption typography, and the extension allow-list are
fixed settings in the binary (see SlideConfig) — there are no config
files to manage.")]
#[command(version)]
struct Cli {
    /// Input directory of source images
    #[arg(long, default_value = "in")]
    source: PathBuf,

    /// Output directory (must already exist)
    #[arg(long, default_value = "out")]
    output: PathBuf,

    /// TrueType font used for captions
    #[arg(long, default_value = "OpenSans-ExtraBold.ttf")]
    font: PathBuf,

    /// Keep original dimensions — skip the scale-and-crop stage
    #[arg(long)]
    no_resize: bool,

    /// Skip the caption overlay
    #[arg(long)]
    no_captions: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = SlideConfig {
        input_dir: cli.source,
        output_dir: cli.output,
        font_path: cli.font,
        resize: !cli.no_resize,
        captions: !cli.no_captions,
        ..SlideConfig::default()
    };

    let summary = pipeline::run(&config)?;
    output::print_run_output(&summary, &config);

    Ok(())
}
