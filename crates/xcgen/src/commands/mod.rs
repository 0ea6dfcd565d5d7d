//! CLI command dispatch and execution

use anyhow::Result;
use clap::{Parser, Subcommand};

mod podhelper;
mod resolve;
mod root;

/// xcgen - Flutter iOS build-settings resolution
#[derive(Parser, Debug)]
#[command(
    name = "xcgen",
    version,
    about = "Resolve variables from Flutter's generated Xcode build settings",
    long_about = "Locates Generated.xcconfig near a helper-script directory (optionally regenerating it via 'flutter pub get') and extracts build variables for iOS packaging tooling"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a variable from the generated build settings
    Resolve(resolve::ResolveArgs),

    /// Print the resolved Flutter SDK root
    FlutterRoot(root::FlutterRootArgs),

    /// Print the pod helper entry point under the Flutter SDK root
    Podhelper(podhelper::PodhelperArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Resolve(args) => resolve::execute(args),
            Commands::FlutterRoot(args) => root::execute(args),
            Commands::Podhelper(args) => podhelper::execute(args),
        }
    }
}
