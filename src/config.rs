//! Configuration file loading.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Input used when neither the CLI nor the config names one.
pub const DEFAULT_INPUT: &str = "0.png";

/// Output directory used when neither the CLI nor the config names one.
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default paths (used when the matching CLI argument is absent).
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Default paths from the config file.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Default input image.
    pub input: String,
    /// Default output directory.
    pub output_dir: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self { input: DEFAULT_INPUT.to_string(), output_dir: DEFAULT_OUTPUT_DIR.to_string() }
    }
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }

    /// Input path: the CLI value if given, else the configured default.
    #[must_use]
    pub fn input(&self, cli: Option<&str>) -> PathBuf {
        PathBuf::from(cli.unwrap_or(&self.defaults.input))
    }

    /// Output directory: the CLI value if given, else the configured default.
    #[must_use]
    pub fn output_dir(&self, cli: Option<&str>) -> PathBuf {
        PathBuf::from(cli.unwrap_or(&self.defaults.output_dir))
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `STRIPSLICE_CONFIG` environment variable
/// 3. `~/.config/stripslice/config.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("STRIPSLICE_CONFIG") {
        return PathBuf::from(p);
    }

    default_config_path()
}

/// Default config path: `~/.config/stripslice/config.toml`.
fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config/stripslice/config.toml")
    } else {
        PathBuf::from("stripslice.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.defaults.input, "0.png");
        assert_eq!(config.defaults.output_dir, ".");
    }

    #[test]
    fn load_nonexistent_returns_defaults() {
        let config = Config::load(Path::new("/nonexistent/path/config.toml")).unwrap();
        assert_eq!(config.defaults.input, "0.png");
    }

    #[test]
    fn load_valid_toml() {
        let dir = std::env::temp_dir().join("stripslice_config_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(
            &path,
            r#"
[defaults]
input = "scan.jpg"
output_dir = "strips"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.defaults.input, "scan.jpg");
        assert_eq!(config.defaults.output_dir, "strips");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_partial_toml_keeps_other_defaults() {
        let dir = std::env::temp_dir().join("stripslice_config_partial_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "[defaults]\noutput_dir = \"out\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.defaults.input, "0.png");
        assert_eq!(config.defaults.output_dir, "out");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_invalid_toml() {
        let dir = std::env::temp_dir().join("stripslice_config_bad_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "this is not valid toml {{{").unwrap();

        assert!(Config::load(&path).is_err());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn strip_count_is_not_configurable() {
        let dir = std::env::temp_dir().join("stripslice_config_count_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "[defaults]\nstrips = 4\n").unwrap();

        assert!(Config::load(&path).is_err());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn cli_values_win() {
        let config = Config::default();
        assert_eq!(config.input(Some("a.png")), PathBuf::from("a.png"));
        assert_eq!(config.input(None), PathBuf::from("0.png"));
        assert_eq!(config.output_dir(Some("out")), PathBuf::from("out"));
        assert_eq!(config.output_dir(None), PathBuf::from("."));
    }

    #[test]
    fn discover_explicit_path() {
        let path = discover_config_path(Some("/tmp/my-config.toml"));
        assert_eq!(path, PathBuf::from("/tmp/my-config.toml"));
    }
}
