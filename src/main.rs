use std::{ffi::OsString, path::Path};

use anyhow::{Context, Result};
use c_array::render_c_array;
use error::Image2cError;
use log::{error, info};
use rgb565::rgb888_to_rgb565_swapped;

mod c_array;
mod error;
mod rgb565;
mod utils;

const OUTPUT_FILE: &str = "image.c";

fn main() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .try_init();

    let args: Vec<OsString> = std::env::args_os().collect();

    if let Err(err) = run(&args) {
        let code = match err.downcast_ref::<Image2cError>() {
            Some(e @ Image2cError::Usage { .. }) => {
                println!("{err}");
                e.exit_code()
            }
            Some(e) => {
                eprintln!("{err}");
                error!("{err}");
                e.exit_code()
            }
            None => {
                eprintln!("{err:#}");
                error!("{err:#}");
                1
            }
        };
        std::process::exit(code);
    }
}

fn run(args: &[OsString]) -> Result<()> {
    if args.len() != 2 {
        let program = args
            .first()
            .map(|arg| arg.to_string_lossy().into_owned())
            .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
        return Err(Image2cError::Usage { program }.into());
    }

    let input = Path::new(&args[1]);
    info!("decode {}", input.display());
    let img = utils::load_rgb_image(input)?;
    let (width, height) = img.dimensions();

    let rgb565 = rgb888_to_rgb565_swapped(&img);
    info!("{width}x{height}, {} pixels", rgb565.len());
    let source = render_c_array(&rgb565);

    std::fs::write(OUTPUT_FILE, source)
        .with_context(|| format!("failed to write {OUTPUT_FILE}"))?;

    println!("Output written to {OUTPUT_FILE}");
    Ok(())
}
