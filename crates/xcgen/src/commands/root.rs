//! Flutter-root command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use xcgen_core::{ResolveOptions, flutter_root};

/// Print the resolved Flutter SDK root
#[derive(Args, Debug)]
pub struct FlutterRootArgs {
    /// Directory of the calling helper script
    #[arg(long, default_value = ".")]
    base_dir: PathBuf,

    /// Run 'flutter pub get' once if the settings file is missing
    #[arg(long)]
    fetch: bool,
}

pub fn execute(args: FlutterRootArgs) -> Result<()> {
    let options = ResolveOptions {
        attempt_regeneration: args.fetch,
        ..ResolveOptions::default()
    };

    let root = flutter_root(&args.base_dir, &options)?;
    println!("{}", root.display());
    Ok(())
}
