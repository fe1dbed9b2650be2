use serde::Deserialize;
use std::path::Path;

use color_harmony::HarmonyMode;

/// Application configuration loaded from an optional config.yaml
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Harmony mode used when a session is created without one
    #[serde(default = "default_mode")]
    pub default_mode: String,
}

fn default_mode() -> String {
    "analogous".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_mode: default_mode(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file.
    ///
    /// A missing path or unreadable/unparsable file falls back to the
    /// defaults with a warning; the server always starts.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_yaml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), %e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// The configured default harmony mode.
    ///
    /// Unrecognized names degrade to `random`, same as the API's mode
    /// handling.
    pub fn default_mode(&self) -> HarmonyMode {
        HarmonyMode::parse(&self.default_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_when_no_path() {
        let config = AppConfig::load(None);
        assert_eq!(config.default_mode(), HarmonyMode::Analogous);
    }

    #[test]
    fn test_defaults_when_file_missing() {
        let config = AppConfig::load(Some(Path::new("/nonexistent/config.yaml")));
        assert_eq!(config.default_mode(), HarmonyMode::Analogous);
    }

    #[test]
    fn test_load_from_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_mode: triadic").unwrap();

        let config = AppConfig::load(Some(file.path()));
        assert_eq!(config.default_mode(), HarmonyMode::Triadic);
    }

    #[test]
    fn test_unknown_mode_degrades_to_random() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_mode: tetradic").unwrap();

        let config = AppConfig::load(Some(file.path()));
        assert_eq!(config.default_mode(), HarmonyMode::Random);
    }

    #[test]
    fn test_malformed_yaml_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_mode: [not, a, string").unwrap();

        let config = AppConfig::load(Some(file.path()));
        assert_eq!(config.default_mode(), HarmonyMode::Analogous);
    }
}
