//! Generated build-settings file loading and extraction

use std::path::{Path, PathBuf};

use crate::resolver::ResolveError;

/// A loaded `Generated.xcconfig` settings file
///
/// Produced by an upstream build step and consumed read-only here; the
/// resolver never writes to it.
#[derive(Debug)]
pub struct GeneratedSettings {
    path: PathBuf,
    contents: String,
}

impl GeneratedSettings {
    /// Load a settings file from disk
    pub fn load(path: &Path) -> Result<Self, ResolveError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            contents,
        })
    }

    /// Path the settings were loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Extract the first value for `key` from a line matching `key=value`
    ///
    /// The key must sit at the start of the line. The value is trimmed of
    /// leading and trailing whitespace. Returns `None` if no line matches.
    pub fn extract(&self, key: &str) -> Option<String> {
        self.contents.lines().find_map(|line| {
            line.strip_prefix(key)
                .and_then(|rest| rest.strip_prefix('='))
                .map(|value| value.trim().to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn settings_from(contents: &str) -> GeneratedSettings {
        GeneratedSettings {
            path: PathBuf::from("Generated.xcconfig"),
            contents: contents.to_string(),
        }
    }

    #[test]
    fn test_extract_basic() {
        let settings = settings_from("FLUTTER_ROOT=/sdk/flutter\n");
        assert_eq!(
            settings.extract("FLUTTER_ROOT"),
            Some("/sdk/flutter".to_string())
        );
    }

    #[test]
    fn test_extract_trims_value_whitespace() {
        let settings = settings_from("FLUTTER_ROOT=   /sdk/flutter  \n");
        assert_eq!(
            settings.extract("FLUTTER_ROOT"),
            Some("/sdk/flutter".to_string())
        );
    }

    #[test]
    fn test_extract_first_match_wins() {
        let settings = settings_from("FLUTTER_ROOT=/first\nFLUTTER_ROOT=/second\n");
        assert_eq!(settings.extract("FLUTTER_ROOT"), Some("/first".to_string()));
    }

    #[test]
    fn test_extract_skips_other_keys() {
        let contents = "FLUTTER_APPLICATION_PATH=/app\nFLUTTER_ROOT=/sdk/flutter\nCOCOAPODS_PARALLEL_CODE_SIGN=true\n";
        let settings = settings_from(contents);
        assert_eq!(
            settings.extract("FLUTTER_ROOT"),
            Some("/sdk/flutter".to_string())
        );
    }

    #[test]
    fn test_extract_key_anchored_at_line_start() {
        // A longer key ending in the requested name must not match
        let settings = settings_from("OTHER_FLUTTER_ROOT=/wrong\n");
        assert_eq!(settings.extract("FLUTTER_ROOT"), None);

        // Neither does an indented key
        let settings = settings_from("  FLUTTER_ROOT=/wrong\n");
        assert_eq!(settings.extract("FLUTTER_ROOT"), None);
    }

    #[test]
    fn test_extract_missing_key() {
        let settings = settings_from("FLUTTER_BUILD_DIR=build\n");
        assert_eq!(settings.extract("FLUTTER_ROOT"), None);
    }

    #[test]
    fn test_extract_empty_value() {
        let settings = settings_from("FLUTTER_ROOT=\n");
        assert_eq!(settings.extract("FLUTTER_ROOT"), Some(String::new()));
    }

    #[test]
    fn test_extract_value_containing_equals() {
        // Only the first '=' separates key from value
        let settings = settings_from("DART_DEFINES=a=1,b=2\n");
        assert_eq!(settings.extract("DART_DEFINES"), Some("a=1,b=2".to_string()));
    }

    #[test]
    fn test_load_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Generated.xcconfig");
        std::fs::write(&path, "FLUTTER_ROOT=/sdk/flutter\n").unwrap();

        let settings = GeneratedSettings::load(&path).unwrap();
        assert_eq!(settings.path(), path.as_path());
        assert_eq!(
            settings.extract("FLUTTER_ROOT"),
            Some("/sdk/flutter".to_string())
        );
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.xcconfig");

        let result = GeneratedSettings::load(&path);
        assert!(matches!(result, Err(ResolveError::Io(_))));
    }
}
