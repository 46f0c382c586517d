//! CLI command definitions.
//!
//! Each subcommand maps to one use of the renderer.

use clap::{Parser, Subcommand};

pub mod formats;
pub mod render;
pub mod resolve;

/// whisker - logic-less templates over JSON and YAML data
#[derive(Parser)]
#[command(name = "whisker")]
#[command(version, about = "whisker - logic-less templates over JSON and YAML data")]
#[command(long_about = r#"
whisker renders mustache-style templates against JSON or YAML documents.

COMMANDS:
  render   → Render a template file against a data file
  resolve  → Show what a single variable path resolves to
  formats  → List the supported data formats and node types

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Data error
  4 - Template error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a template against a data file
    Render(render::RenderArgs),

    /// Resolve a variable path against a data file
    Resolve(resolve::ResolveArgs),

    /// List supported data formats
    Formats(formats::FormatsArgs),
}
