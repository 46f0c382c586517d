//! Resolve command - Show what a variable path resolves to.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use whisker_core::Lookup;
use whisker_formats::DataDocument;
use whisker_templates::{RenderSettings, Renderer};

#[derive(Args)]
pub struct ResolveArgs {
    /// Data file (.json, .yaml or .yml)
    #[arg(short, long)]
    data: PathBuf,

    /// Dotted variable path, or `.` for the whole document
    path: String,

    /// Match keys case-insensitively
    #[arg(long)]
    ignore_case: bool,
}

pub fn execute(args: ResolveArgs) -> Result<()> {
    let document = DataDocument::load(&args.data)
        .with_context(|| format!("Failed to load data: {:?}", args.data))?;
    info!("Resolving '{}' in {:?}", args.path, args.data);

    let renderer = Renderer::standard(RenderSettings::new().with_ignore_case(args.ignore_case));
    let lookup = renderer.lookup(&args.path, document.as_node())?;

    println!("{}", describe(&lookup));
    Ok(())
}

fn describe(lookup: &Lookup) -> String {
    match lookup {
        Lookup::Found(value) => format!("found {}: {}", value.kind(), value),
        Lookup::FoundNull => "found null".to_string(),
        Lookup::NotFound => "not found".to_string(),
    }
}
