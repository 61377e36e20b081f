//! Configuration management for `keep2bear`.
//!
//! Settings are layered, later layers winning:
//! - built-in defaults
//! - YAML config file (`--config`, `KEEP2BEAR_CONFIG`, or `./keep2bear.yaml`)
//! - command-line flags (which also read `KEEP2BEAR_*` environment variables)

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Deserialize;
use thiserror::Error;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "keep2bear.yaml";

/// Prefix of the per-run directory created with `--timestamped`.
pub const RUN_DIR_PREFIX: &str = "keep2bear";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Contents of a YAML config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub ignore_colors: Option<bool>,
    pub timestamped: Option<bool>,
    pub log_file: Option<PathBuf>,
}

impl FileConfig {
    /// Parse a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML for
    /// this schema.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn parse(text: &str) -> Result<Self, serde_yaml::Error> {
        let blank = text.lines().all(|line| {
            let line = line.trim();
            line.is_empty() || line.starts_with('#')
        });
        if blank {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    /// Load the explicit file, or the default one if present.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit file is missing or any file is invalid.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let default = Path::new(DEFAULT_CONFIG_FILE);
        if default.is_file() {
            tracing::debug!("Using config file {}", default.display());
            return Self::load(default);
        }
        Ok(Self::default())
    }
}

/// Values that come from the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub ignore_colors: bool,
    pub timestamped: bool,
    pub log_file: Option<PathBuf>,
}

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub input: PathBuf,
    pub output_root: PathBuf,
    pub ignore_colors: bool,
    pub timestamped: bool,
    pub log_file: Option<PathBuf>,
}

impl ConvertConfig {
    /// Merge the config file with command-line values.
    ///
    /// Boolean flags can only switch a feature on; leave them off on the
    /// command line to take the file's value.
    #[must_use]
    pub fn resolve(input: PathBuf, output_root: PathBuf, file: &FileConfig, cli: &CliOverrides) -> Self {
        Self {
            input,
            output_root,
            ignore_colors: cli.ignore_colors || file.ignore_colors.unwrap_or(false),
            timestamped: cli.timestamped || file.timestamped.unwrap_or(false),
            log_file: cli.log_file.clone().or_else(|| file.log_file.clone()),
        }
    }

    /// Directory the bundles are written into.
    #[must_use]
    pub fn output_dir(&self, now: DateTime<Local>) -> PathBuf {
        if self.timestamped {
            self.output_root
                .join(format!("{RUN_DIR_PREFIX}_{}", now.format("%Y%m%d_%H%M%S")))
        } else {
            self.output_root.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_full_file() {
        let file = FileConfig::parse("ignore_colors: true\ntimestamped: false\nlog_file: run.log\n")
            .unwrap();
        assert_eq!(file.ignore_colors, Some(true));
        assert_eq!(file.timestamped, Some(false));
        assert_eq!(file.log_file, Some(PathBuf::from("run.log")));
    }

    #[test]
    fn test_parse_empty_file() {
        assert_eq!(FileConfig::parse("").unwrap(), FileConfig::default());
        assert_eq!(FileConfig::parse("# comments only\n").unwrap(), FileConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(FileConfig::parse("ignore_colours: true\n").is_err());
    }

    #[test]
    fn test_load_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keep2bear.yaml");
        fs::write(&path, "timestamped: [oops").unwrap();
        let err = FileConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("keep2bear.yaml"));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = FileConfig::discover(Some(Path::new("/nonexistent/keep2bear.yaml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_cli_wins_over_file() {
        let file = FileConfig {
            ignore_colors: Some(false),
            timestamped: Some(true),
            log_file: Some(PathBuf::from("file.log")),
        };
        let cli = CliOverrides {
            ignore_colors: true,
            timestamped: false,
            log_file: Some(PathBuf::from("cli.log")),
        };
        let config = ConvertConfig::resolve("in".into(), "out".into(), &file, &cli);
        assert!(config.ignore_colors);
        assert!(config.timestamped);
        assert_eq!(config.log_file, Some(PathBuf::from("cli.log")));
    }

    #[test]
    fn test_output_dir() {
        let now = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        let mut config = ConvertConfig::resolve(
            "in".into(),
            "out".into(),
            &FileConfig::default(),
            &CliOverrides::default(),
        );
        assert_eq!(config.output_dir(now), PathBuf::from("out"));

        config.timestamped = true;
        assert_eq!(
            config.output_dir(now),
            PathBuf::from("out").join("keep2bear_20240309_070501")
        );
    }
}
