//! Podhelper command implementation
//!
//! After the root is resolved, packaging tooling hands control to the
//! Flutter-side pod helper; this prints where that entry point lives.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use xcgen_core::{ResolveOptions, flutter_root, podhelper_path};

/// Print the pod helper entry point under the Flutter SDK root
#[derive(Args, Debug)]
pub struct PodhelperArgs {
    /// Directory of the calling helper script
    #[arg(long, default_value = ".")]
    base_dir: PathBuf,

    /// Run 'flutter pub get' once if the settings file is missing
    #[arg(long)]
    fetch: bool,
}

pub fn execute(args: PodhelperArgs) -> Result<()> {
    let options = ResolveOptions {
        attempt_regeneration: args.fetch,
        ..ResolveOptions::default()
    };

    let root = flutter_root(&args.base_dir, &options)?;
    println!("{}", podhelper_path(&root).display());
    Ok(())
}
