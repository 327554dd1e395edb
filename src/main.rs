use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use carousel::constants::{RENDER_HEIGHT, RENDER_WIDTH};
use carousel::{SliderConfig, SliderController, run};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod catalog;
mod texture_loader;
mod window;

use crate::texture_loader::load_sorted_image_paths;
use crate::window::RaylibWindow;

/// Shows the images of a directory as an autoplaying carousel.
#[derive(Parser, Debug)]
#[command(name = "carousel", version)]
struct Args {
    /// Directory holding the slide images, shown in file-name order
    image_directory: PathBuf,

    /// Time each slide stays up under autoplay, in milliseconds
    #[arg(long, default_value_t = 5000)]
    interval_ms: u64,

    #[arg(long, default_value_t = RENDER_WIDTH)]
    width: i32,

    #[arg(long, default_value_t = RENDER_HEIGHT)]
    height: i32,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = SliderConfig::new(Duration::from_millis(args.interval_ms))
        .context("invalid --interval-ms")?;
    let image_paths = load_sorted_image_paths(&args.image_directory)?;
    info!(
        directory = %args.image_directory.display(),
        images = image_paths.len(),
        "loading slides"
    );

    let mut window = RaylibWindow::open(args.width, args.height);
    let slides = window.load_slides(&image_paths);
    if slides.is_empty() {
        bail!(
            "none of the images in {} could be loaded",
            args.image_directory.display()
        );
    }

    let mut controller = SliderController::new(slides, config)?;
    run(&mut controller, &mut window)
}
