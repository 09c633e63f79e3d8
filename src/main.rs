use std::path::PathBuf;

use anyhow::Context;
use avatars::{Composer, Config, Request, Variant};
use clap::Parser;

/// Generate a deterministic SVG avatar
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Name (or other text) to draw the avatar for
    #[arg(default_value = "User")]
    name: String,

    /// Avatar variant (see `--list`)
    #[arg(short = 't', long = "type")]
    variant: Option<String>,

    /// Width and height of the output, in pixels
    #[arg(short, long)]
    size: Option<u32>,

    /// Primary colour as hex, overriding the one derived from the name
    #[arg(short, long)]
    color: Option<String>,

    /// Source image for the `portrait` variant (URL or local path)
    #[arg(short, long)]
    image: Option<String>,

    /// Config file
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Write the SVG to this file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    output: Option<PathBuf>,

    /// List the available variants and exit
    #[arg(long)]
    list: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if cli.list {
        for v in Variant::ALL {
            println!("{:<14} {}", v.name(), v.description());
        }
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    let composer = Composer::with_local_files(&config)?;
    let request = Request {
        variant: cli.variant.as_deref().unwrap_or(&config.render.variant),
        name: &cli.name,
        size: cli.size.unwrap_or(config.render.size),
        color: cli.color.as_deref(),
        image_url: cli.image.as_deref(),
    };
    let svg = composer.compose_request(&request)?.to_svg_string();

    match &cli.output {
        Some(path) => std::fs::write(path, svg)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{}", svg),
    }
    Ok(())
}
