//! Core library for xcgen
//!
//! Locates Flutter's generated Xcode build-settings file
//! (`Generated.xcconfig`), optionally regenerating it via `flutter pub get`
//! when absent, and extracts named variables from its line-oriented
//! contents for iOS packaging tooling.

pub mod fetch;
pub mod logging;
pub mod resolver;
pub mod settings;

pub use resolver::{
    FLUTTER_ROOT_KEY, Resolution, ResolveError, ResolveOptions, flutter_root, podhelper_path,
    resolve, resolve_variable,
};
pub use settings::GeneratedSettings;
