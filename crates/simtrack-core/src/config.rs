//! Tracker configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level simtrack configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Directory where chart pages are written.
    #[serde(default = "default_chart_dir")]
    pub chart_dir: PathBuf,
    /// Block after writing a chart until the operator presses Enter.
    #[serde(default = "default_true")]
    pub wait_for_dismiss: bool,
    /// Seed for reproducible sessions. Unset means OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_chart_dir() -> PathBuf {
    PathBuf::from("./simtrack-charts")
}

fn default_true() -> bool {
    true
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            chart_dir: default_chart_dir(),
            wait_for_dismiss: true,
            seed: None,
        }
    }
}

/// Load config from an explicit path, or fall back to the defaults.
///
/// No file is searched for implicitly; a path that was given but does not
/// exist is an error.
pub fn load_config_from(path: Option<&Path>) -> Result<TrackerConfig> {
    let Some(path) = path else {
        return Ok(TrackerConfig::default());
    };
    if !path.exists() {
        anyhow::bail!("config file not found: {}", path.display());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config = toml::from_str::<TrackerConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))?;

    tracing::debug!(?config, path = %path.display(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = TrackerConfig::default();
        assert_eq!(config.chart_dir, PathBuf::from("./simtrack-charts"));
        assert!(config.wait_for_dismiss);
        assert!(config.seed.is_none());
    }

    #[test]
    fn no_path_means_defaults() {
        assert_eq!(load_config_from(None).unwrap(), TrackerConfig::default());
    }

    #[test]
    fn parse_partial_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("simtrack.toml");
        std::fs::write(&path, "seed = 11\nwait_for_dismiss = false\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.seed, Some(11));
        assert!(!config.wait_for_dismiss);
        assert_eq!(config.chart_dir, PathBuf::from("./simtrack-charts"));
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let err = load_config_from(Some(Path::new("no-such-simtrack.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn malformed_config_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "seed = \"not a number\"").unwrap();

        let err = load_config_from(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse config"));
    }
}
