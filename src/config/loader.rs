//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::merger::merge_configs;
use crate::config::schema::QuizConfig;
use crate::error::{QuizError, Result};

/// Config file locations in merge order (later overrides earlier).
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// User's global config: `~/.quizdeck/config.yml`
    pub user_global: Option<PathBuf>,

    /// Project config: `./.quizdeck.yml`
    pub project: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover existing config files relative to `cwd`.
    pub fn discover(cwd: &Path) -> Self {
        Self {
            user_global: Self::find_user_global(),
            project: existing(cwd.join(".quizdeck.yml")),
        }
    }

    fn find_user_global() -> Option<PathBuf> {
        let home = std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE"))?;
        existing(PathBuf::from(home).join(".quizdeck").join("config.yml"))
    }

    /// All existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.user_global.iter().chain(self.project.iter()).collect()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.is_file().then_some(path)
}

/// Command-line values that take precedence over every file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl QuizConfig {
    /// Apply command-line overrides.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(url) = &overrides.base_url {
            self.endpoint.base_url = url.clone();
        }
        if let Some(secs) = overrides.timeout_secs {
            self.endpoint.timeout_secs = secs;
        }
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            QuizError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            QuizError::Io(e)
        }
    })
}

/// Parse YAML content into a [`QuizConfig`]. `source_path` is for errors.
pub fn parse_config(content: &str, source_path: &Path) -> Result<QuizConfig> {
    if content.trim().is_empty() {
        return Ok(QuizConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| QuizError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load one config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist and
/// `ConfigParseError` if its YAML doesn't fit the schema.
pub fn load_config_file(path: &Path) -> Result<QuizConfig> {
    parse_config(&read(path)?, path)
}

/// Load a config file as a raw YAML value, for merging.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    serde_yaml::from_str(&read(path)?).map_err(|e| QuizError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge every discovered config file.
///
/// With no files present the defaults are returned.
pub fn load_merged_config(paths: &ConfigPaths) -> Result<QuizConfig> {
    let files = paths.all_existing();
    let Some(last) = files.last() else {
        return Ok(QuizConfig::default());
    };

    let layers = files
        .iter()
        .map(|path| {
            debug!("Loading config layer {}", path.display());
            load_config_value(path)
        })
        .collect::<Result<Vec<_>>>()?;

    serde_yaml::from_value(merge_configs(&layers)).map_err(|e| QuizError::ConfigParseError {
        path: last.to_path_buf(),
        message: e.to_string(),
    })
}

/// Resolve the effective configuration.
///
/// An explicit path is loaded alone; otherwise discovered files are merged.
/// Overrides are applied last.
pub fn load_config(
    explicit: Option<&Path>,
    cwd: &Path,
    overrides: &ConfigOverrides,
) -> Result<QuizConfig> {
    let mut config = match explicit {
        Some(path) => load_config_file(path)?,
        None => load_merged_config(&ConfigPaths::discover(cwd))?,
    };
    config.apply_overrides(overrides);
    debug!("Using question store at {}", config.endpoint.base_url);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{OutputMode, DEFAULT_BASE_URL};
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn discover_finds_project_file() {
        let temp = TempDir::new().unwrap();
        write(&temp, ".quizdeck.yml", "settings:\n  default_output: quiet\n");
        let paths = ConfigPaths::discover(temp.path());
        assert_eq!(paths.project, Some(temp.path().join(".quizdeck.yml")));
    }

    #[test]
    fn discover_without_project_file() {
        let temp = TempDir::new().unwrap();
        assert!(ConfigPaths::discover(temp.path()).project.is_none());
    }

    #[test]
    fn project_overrides_user_global() {
        let temp = TempDir::new().unwrap();
        let global = write(
            &temp,
            "global.yml",
            "endpoint:\n  base_url: https://global.example\n  timeout_secs: 12\n",
        );
        let project = write(&temp, "project.yml", "endpoint:\n  base_url: https://project.example\n");
        let paths = ConfigPaths {
            user_global: Some(global),
            project: Some(project),
        };

        let config = load_merged_config(&paths).unwrap();
        assert_eq!(config.endpoint.base_url, "https://project.example");
        assert_eq!(config.endpoint.timeout_secs, 12);
    }

    #[test]
    fn no_files_gives_defaults() {
        let config = load_merged_config(&ConfigPaths::default()).unwrap();
        assert_eq!(config.endpoint.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn blank_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "blank.yml", "");
        assert_eq!(load_config_file(&path).unwrap(), QuizConfig::default());
    }

    #[test]
    fn missing_explicit_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = load_config_file(&temp.path().join("nope.yml")).unwrap_err();
        assert!(matches!(err, QuizError::ConfigNotFound { .. }));
    }

    #[test]
    fn schema_mismatch_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "bad.yml", "endpoint:\n  timeout_secs: soon\n");
        let err = load_config_file(&path).unwrap_err();
        assert!(matches!(err, QuizError::ConfigParseError { .. }));
    }

    #[test]
    fn overrides_win_over_file() {
        let temp = TempDir::new().unwrap();
        let path = write(
            &temp,
            "config.yml",
            "endpoint:\n  base_url: https://file.example\nsettings:\n  default_output: verbose\n",
        );
        let overrides = ConfigOverrides {
            base_url: Some("http://127.0.0.1:8080".to_string()),
            timeout_secs: Some(2),
        };

        let config = load_config(Some(&path), temp.path(), &overrides).unwrap();
        assert_eq!(config.endpoint.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.endpoint.timeout_secs, 2);
        assert_eq!(config.settings.default_output, OutputMode::Verbose);
    }
}
