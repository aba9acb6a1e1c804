//! Headless CPU render of the configured scene
//!
//! Usage: tileblend-render <out.png> [width] [height]
//!
//! Reads the same config.toml as the viewer. Width and height default to the
//! configured window size.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tileblend::Viewer;
use tileblend_config::Config;
use tileblend_renderer::CpuSurface;

struct Args {
    output: PathBuf,
    width: Option<u32>,
    height: Option<u32>,
}

fn parse_args() -> Result<Args> {
    let mut args = std::env::args().skip(1);
    let Some(output) = args.next() else {
        bail!("usage: tileblend-render <out.png> [width] [height]");
    };

    let mut dimension = |name: &str| -> Result<Option<u32>> {
        args.next()
            .map(|s| s.parse::<u32>().with_context(|| format!("invalid {name}: {s:?}")))
            .transpose()
    };
    let width = dimension("width")?;
    let height = dimension("height")?;

    Ok(Args {
        output: PathBuf::from(output),
        width,
        height,
    })
}

fn load_config() -> Result<(Config, PathBuf)> {
    let config_dir = Config::config_dir()?;
    let path = Config::config_file_path()?;
    let config = if path.exists() {
        Config::load_from(&path)?
    } else {
        log::info!("No config at {:?}, rendering defaults", path);
        Config::default()
    };
    Ok((config, config_dir))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn,tileblend=info")).init();

    let args = parse_args()?;
    let (config, config_dir) = load_config()?;

    let width = args.width.unwrap_or(config.window.width);
    let height = args.height.unwrap_or(config.window.height);

    let mut viewer = Viewer::from_config(&config, &config_dir);
    let texture = viewer
        .source()
        .to_texture()
        .context("Source image has no pixels")?;

    let mut surface = CpuSurface::new(width, height, texture);
    viewer.draw(&mut surface);
    surface
        .save(&args.output)
        .with_context(|| format!("Failed to write {:?}", args.output))?;

    println!("{}", args.output.display());
    Ok(())
}
