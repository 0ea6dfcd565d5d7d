//! Resolve command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use xcgen_core::{ResolveOptions, resolve};

/// Resolve a variable from the generated build settings
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Variable name to extract (e.g. FLUTTER_ROOT)
    key: String,

    /// Directory of the calling helper script
    #[arg(long, default_value = ".")]
    base_dir: PathBuf,

    /// Do not consult the alternate Flutter/ location
    #[arg(long)]
    no_fallback: bool,

    /// Run 'flutter pub get' once if the settings file is missing
    #[arg(long)]
    fetch: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn execute(args: ResolveArgs) -> Result<()> {
    let options = ResolveOptions {
        try_fallback_path: !args.no_fallback,
        attempt_regeneration: args.fetch,
    };

    let resolution = resolve(&args.base_dir, &args.key, &options)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
    } else {
        println!("{}", resolution.value);
    }

    Ok(())
}
