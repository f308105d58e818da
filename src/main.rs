mod config;
mod gallery;
mod replay;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use canvas::catalog::{ShapeCategory, ShapeType};
use canvas::doc::{Bounds, Element};
use canvas::geometry::synthesize_path;
use canvas::render::shape_svg;
use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::config::AppConfig;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("unknown shape type: {0}")]
    UnknownShape(#[from] canvas::catalog::ParseShapeError),
    #[error("io failed for {path}: {source}")]
    Io { path: String, source: io::Error },
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("replay failed: {0}")]
    Replay(#[from] replay::ReplayError),
}

#[derive(Parser, Debug)]
#[command(name = "slidecraft", about = "Shape geometry and transform engine tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List shape kinds by category with their handle policy.
    Catalog,
    /// Synthesize the outline of one shape kind.
    Path {
        shape: String,
        #[arg(long, default_value_t = 100.0)]
        width: f64,
        #[arg(long, default_value_t = 100.0)]
        height: f64,
        /// Print styled SVG markup instead of the command list.
        #[arg(long)]
        svg: bool,
    },
    /// Write an SVG contact sheet of every shape kind.
    Gallery {
        #[arg(long, env = "SLIDECRAFT_GALLERY_OUT", default_value = "gallery.svg")]
        out: PathBuf,
        #[arg(long, default_value_t = 120.0)]
        cell: f64,
        #[arg(long, default_value_t = 8)]
        columns: usize,
    },
    /// Run a JSON gesture script and print the resulting slide.
    Replay {
        /// Script path, or `-` for stdin.
        script: String,
        /// Also print every emitted action.
        #[arg(long)]
        actions: bool,
    },
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let config = AppConfig::from_env();
    tracing_subscriber::fmt().with_max_level(config.log_level).with_writer(io::stderr).init();

    match cli.command {
        Command::Catalog => {
            run_catalog(&config);
            Ok(())
        }
        Command::Path { shape, width, height, svg } => run_path(&shape, width, height, svg),
        Command::Gallery { out, cell, columns } => run_gallery(&out, cell, columns),
        Command::Replay { script, actions } => run_replay(&config, &script, actions),
    }
}

fn run_catalog(config: &AppConfig) {
    for category in ShapeCategory::ALL {
        println!("{}", category.label());
        for shape in ShapeType::in_category(category) {
            let handles = if config.engine.is_resize_locked(shape) { "skew only" } else { "resize, rotate, skew" };
            println!("  {:<22} {:<22} {handles}", shape.as_str(), shape.display_name());
        }
    }
}

fn run_path(raw: &str, width: f64, height: f64, svg: bool) -> Result<(), CliError> {
    let shape: ShapeType = raw.parse()?;
    if svg {
        let element = Element::shape(shape, Bounds::new(0.0, 0.0, width, height));
        if let Some(markup) = shape_svg(&element) {
            println!("{markup}");
        }
        return Ok(());
    }
    let path = synthesize_path(shape, width, height);
    let subpaths = path.subpath_count();
    tracing::info!(%shape, width, height, subpaths, closed = path.is_closed(), "synthesized");
    print_json(&serde_json::json!({
        "d": path.to_svg_d(),
        "closed": path.is_closed(),
        "subpaths": subpaths,
        "bounds": path.bounds(),
        "points": path.end_points(),
    }))
}

fn run_gallery(out: &Path, cell: f64, columns: usize) -> Result<(), CliError> {
    let markup = gallery::render_gallery(&ShapeType::ALL, cell, columns);
    fs::write(out, markup).map_err(|source| CliError::Io { path: out.display().to_string(), source })?;
    tracing::info!(path = %out.display(), shapes = ShapeType::ALL.len(), "gallery written");
    Ok(())
}

fn run_replay(config: &AppConfig, source: &str, with_actions: bool) -> Result<(), CliError> {
    let raw = read_source(source)?;
    let script: replay::Script = serde_json::from_str(&raw)?;
    let outcome = replay::run(script, config.engine.clone())?;
    tracing::info!(actions = outcome.actions.len(), elements = outcome.slide.len(), "replay finished");
    if with_actions {
        print_json(&serde_json::to_value(&outcome)?)
    } else {
        print_json(&serde_json::to_value(&outcome.slide)?)
    }
}

fn read_source(source: &str) -> Result<String, CliError> {
    let io_err = |source_err| CliError::Io { path: source.to_owned(), source: source_err };
    if source == "-" {
        let mut raw = String::new();
        io::stdin().read_to_string(&mut raw).map_err(io_err)?;
        return Ok(raw);
    }
    fs::read_to_string(source).map_err(io_err)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
