//! Best-effort dependency fetch for regenerating build settings

use std::path::Path;
use std::process::Command;
use tracing::{debug, warn};

const DEFAULT_FLUTTER_BIN: &str = "flutter";

/// Fetch executable name, overridable via `XCGEN_FLUTTER_BIN`
fn flutter_bin() -> String {
    match std::env::var("XCGEN_FLUTTER_BIN") {
        Ok(bin) if !bin.trim().is_empty() => bin,
        _ => DEFAULT_FLUTTER_BIN.to_string(),
    }
}

/// Run `flutter pub get` in `working_dir`, best-effort.
///
/// The exit status is not checked: a missing executable or a failed run is
/// logged and otherwise ignored. The caller re-checks for the generated
/// file afterwards.
pub fn run_pub_get(working_dir: &Path) {
    let bin = flutter_bin();
    debug!("running '{bin} pub get' in {}", working_dir.display());

    match Command::new(&bin)
        .args(["pub", "get"])
        .current_dir(working_dir)
        .status()
    {
        Ok(status) if !status.success() => {
            warn!("'{bin} pub get' exited with {status}");
        }
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("{bin} not found. Install the Flutter SDK and ensure it is on PATH");
        }
        Err(e) => {
            warn!("Failed to run '{bin} pub get': {e}");
        }
    }
}
