//! Render command - Render a template against a data file.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, info};

use whisker_formats::DataDocument;
use whisker_templates::{RenderSettings, Renderer};

#[derive(Args)]
pub struct RenderArgs {
    /// Template file
    #[arg(short, long)]
    template: PathBuf,

    /// Data file (.json, .yaml or .yml)
    #[arg(short, long)]
    data: PathBuf,

    /// Match keys case-insensitively
    #[arg(long)]
    ignore_case: bool,

    /// Maximum number of nested context frames
    #[arg(long)]
    max_depth: Option<usize>,

    /// Settings file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn execute(args: RenderArgs) -> Result<()> {
    let output = render(&args)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &output)
                .with_context(|| format!("Failed to write output: {:?}", path))?;
            info!("Wrote {} bytes to {:?}", output.len(), path);
        }
        None => print!("{}", output),
    }

    Ok(())
}

/// Settings from the config file, overridden by command-line flags.
fn settings(args: &RenderArgs) -> Result<RenderSettings> {
    let mut settings = match &args.config {
        Some(path) => RenderSettings::load(path)
            .with_context(|| format!("Failed to load settings: {:?}", path))?,
        None => RenderSettings::default(),
    };

    if args.ignore_case {
        settings.ignore_case = true;
    }
    if let Some(max_depth) = args.max_depth {
        if max_depth == 0 {
            anyhow::bail!("Invalid argument: --max-depth must be at least 1");
        }
        settings.max_depth = max_depth;
    }

    debug!("Render settings: {:?}", settings);
    Ok(settings)
}

fn render(args: &RenderArgs) -> Result<String> {
    let settings = settings(args)?;

    let source = fs::read_to_string(&args.template)
        .with_context(|| format!("Template not found: {:?}", args.template))?;
    let document = DataDocument::load(&args.data)
        .with_context(|| format!("Failed to load data: {:?}", args.data))?;

    info!("Rendering {:?} with {} data", args.template, document.format());

    let renderer = Renderer::standard(settings);
    renderer
        .render(&source, document.as_node())
        .with_context(|| format!("Failed to render template: {:?}", args.template))
}
