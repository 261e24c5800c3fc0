use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Port the server listens on when the config file does not say otherwise.
pub const DEFAULT_PORT: u16 = 9000;

/// Base URL of the Open-Meteo geocoding API.
pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1";

/// Base URL of the Open-Meteo forecast API.
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1";

/// Top-level configuration, optionally stored on disk.
///
/// Every field can be set individually; anything missing from the TOML file
/// falls back to the defaults above.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// TCP port the HTTP server binds.
    pub port: u16,

    /// Base URL of the geocoding provider, without the `/search` suffix.
    pub geocoding_url: String,

    /// Base URL of the forecast provider, without the `/forecast` suffix.
    pub forecast_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            geocoding_url: DEFAULT_GEOCODING_URL.to_string(),
            forecast_url: DEFAULT_FORECAST_URL.to_string(),
        }
    }
}

impl Config {
    /// Load config from the platform config directory, or return defaults if
    /// no file exists yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, use defaults.
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load config from an explicit path. Unlike [`Config::load`], a missing
    /// file is an error here: the caller asked for this file specifically.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-service", "weather-server")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_point_at_open_meteo() {
        let cfg = Config::default();

        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.geocoding_url, "https://geocoding-api.open-meteo.com/v1");
        assert_eq!(cfg.forecast_url, "https://api.open-meteo.com/v1");
    }

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "port = 8080").expect("write config");

        let cfg = Config::load_from(file.path()).expect("config must parse");

        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.geocoding_url, DEFAULT_GEOCODING_URL);
        assert_eq!(cfg.forecast_url, DEFAULT_FORECAST_URL);
    }

    #[test]
    fn full_file_overrides_everything() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            "port = 3000\n\
             geocoding_url = \"http://localhost:1234\"\n\
             forecast_url = \"http://localhost:5678\""
        )
        .expect("write config");

        let cfg = Config::load_from(file.path()).expect("config must parse");

        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.geocoding_url, "http://localhost:1234");
        assert_eq!(cfg.forecast_url, "http://localhost:5678");
    }

    #[test]
    fn load_from_errors_on_missing_file() {
        let err = Config::load_from(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn load_from_errors_on_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "port = \"not a number\"").expect("write config");

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
