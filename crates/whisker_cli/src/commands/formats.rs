//! Formats command - List supported data formats.

use anyhow::Result;
use clap::Args;

use whisker_core::GetterRegistry;
use whisker_formats::standard_registry;

#[derive(Args)]
pub struct FormatsArgs {
    /// Also list the registered node types
    #[arg(long)]
    types: bool,
}

pub fn execute(args: FormatsArgs) -> Result<()> {
    let registry = standard_registry();
    for line in describe(&registry, args.types) {
        println!("{}", line);
    }
    Ok(())
}

fn describe(registry: &GetterRegistry, types: bool) -> Vec<String> {
    let mut lines: Vec<String> = registry.formats().iter().map(|f| format!("- {}", f)).collect();
    if types {
        lines.push(format!("{} node types:", registry.len()));
        lines.extend(registry.type_names().into_iter().map(|t| format!("  {}", t)));
    }
    lines
}
