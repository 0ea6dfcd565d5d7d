//! Generated settings discovery and variable resolution
//!
//! Flutter's build tooling writes `Generated.xcconfig` either as a sibling
//! of the helper's directory or under an alternate `Flutter/` subdirectory
//! depending on project layout. Resolution probes both conventional
//! locations, optionally running the dependency fetch once when neither
//! exists, then scans the file for the requested variable.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::fetch;
use crate::settings::GeneratedSettings;

/// File name of the generated build settings
pub const GENERATED_FILE: &str = "Generated.xcconfig";

/// Variable naming the Flutter SDK root
pub const FLUTTER_ROOT_KEY: &str = "FLUTTER_ROOT";

/// Alternate subdirectory checked when the primary location is absent
const FALLBACK_SUBDIR: &str = "Flutter";

/// Resolution error
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Settings file absent at every conventional location
    #[error("{} must exist. Run 'flutter pub get' first.", .path.display())]
    ConfigurationMissing {
        /// Last attempted candidate path
        path: PathBuf,
    },

    /// Settings file present but the variable never appears
    #[error("{key} not found in {}.", .path.display())]
    VariableNotFound {
        /// Requested variable name
        key: String,
        /// Settings file that was scanned
        path: PathBuf,
    },

    /// I/O error reading an existing settings file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Behavior switches for resolution
///
/// Unifies the two helper-script variants: whether the alternate `Flutter/`
/// location is consulted, and whether a missing file triggers a one-shot
/// dependency fetch before failing.
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Consult `../Flutter/Generated.xcconfig` when the primary is absent
    pub try_fallback_path: bool,
    /// Run `flutter pub get` once when neither candidate exists
    pub attempt_regeneration: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            try_fallback_path: true,
            attempt_regeneration: false,
        }
    }
}

/// A successfully resolved variable
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    /// Requested variable name
    pub key: String,
    /// Whitespace-trimmed value
    pub value: String,
    /// Settings file the value came from
    pub path: PathBuf,
}

/// Resolve `key` from the generated build settings near `base_dir`
///
/// `base_dir` is the directory of the calling helper script; the primary
/// candidate is `base_dir/../Generated.xcconfig`. First match in file order
/// wins. Errors are terminal: no retry beyond the optional single fetch.
pub fn resolve(
    base_dir: &Path,
    key: &str,
    options: &ResolveOptions,
) -> Result<Resolution, ResolveError> {
    let parent = base_dir.join("..");
    let primary = parent.join(GENERATED_FILE);
    let fallback = options
        .try_fallback_path
        .then(|| parent.join(FALLBACK_SUBDIR).join(GENERATED_FILE));

    let mut found = locate(&primary, fallback.as_deref());
    if found.is_none() && options.attempt_regeneration {
        debug!("{} missing, running dependency fetch", primary.display());
        fetch::run_pub_get(base_dir);
        found = locate(&primary, fallback.as_deref());
    }

    let Some(path) = found else {
        return Err(ResolveError::ConfigurationMissing {
            path: fallback.unwrap_or(primary),
        });
    };

    let settings = GeneratedSettings::load(&path)?;
    match settings.extract(key) {
        Some(value) => Ok(Resolution {
            key: key.to_string(),
            value,
            path,
        }),
        None => Err(ResolveError::VariableNotFound {
            key: key.to_string(),
            path,
        }),
    }
}

/// First existing candidate, primary before fallback
fn locate(primary: &Path, fallback: Option<&Path>) -> Option<PathBuf> {
    if primary.exists() {
        return Some(primary.to_path_buf());
    }
    fallback.filter(|p| p.exists()).map(Path::to_path_buf)
}

/// Resolve `key` and return the value only
pub fn resolve_variable(
    base_dir: &Path,
    key: &str,
    options: &ResolveOptions,
) -> Result<String, ResolveError> {
    resolve(base_dir, key, options).map(|r| r.value)
}

/// Resolve the Flutter SDK root path
pub fn flutter_root(base_dir: &Path, options: &ResolveOptions) -> Result<PathBuf, ResolveError> {
    resolve_variable(base_dir, FLUTTER_ROOT_KEY, options).map(PathBuf::from)
}

/// Pod helper entry point under the Flutter SDK root
///
/// Path computation only; invoking the helper is the caller's concern.
pub fn podhelper_path(flutter_root: &Path) -> PathBuf {
    flutter_root
        .join("packages")
        .join("flutter_tools")
        .join("bin")
        .join("podhelper")
}
