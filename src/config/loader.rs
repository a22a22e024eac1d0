//! Configuration file discovery and loading.
//!
//! An explicit path always wins. Otherwise the project config is tried
//! before the user's global one, and the first file found is used.

use crate::config::schema::ShellConfig;
use crate::error::{Result, ShellError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Candidate configuration files in priority order.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .desmin/config.yml under the working directory
    pub project: Option<PathBuf>,

    /// User's global config: ~/.desmin/config.yml
    pub user_global: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given working directory.
    pub fn discover(cwd: &Path) -> Self {
        Self {
            project: existing(cwd.join(".desmin").join("config.yml")),
            user_global: dirs::home_dir()
                .and_then(|home| existing(home.join(".desmin").join("config.yml"))),
        }
    }

    /// The file that should be loaded, if any.
    pub fn first_existing(&self) -> Option<&Path> {
        self.project.as_deref().or(self.user_global.as_deref())
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load the shell configuration.
///
/// With `explicit` set, exactly that file is loaded. Otherwise the
/// discovered files are tried and defaults are used when none exists.
///
/// # Errors
///
/// Returns `ConfigNotFound` if an explicit file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<ShellConfig> {
    if let Some(path) = explicit {
        return load_config_file(path);
    }

    match ConfigPaths::discover(cwd).first_existing() {
        Some(path) => load_config_file(path),
        None => {
            debug!("No config file found, using defaults");
            Ok(ShellConfig::default())
        }
    }
}

/// Load a single config file and parse it into ShellConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ShellConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ShellError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ShellError::Io(e)
        }
    })?;

    debug!("Loading config from {}", path.display());
    parse_config(&content, path)
}

/// Parse YAML content into ShellConfig.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ShellConfig> {
    if content.trim().is_empty() {
        return Ok(ShellConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| ShellError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_project_config(dir: &Path, content: &str) -> PathBuf {
        let desmin_dir = dir.join(".desmin");
        fs::create_dir_all(&desmin_dir).unwrap();
        let path = desmin_dir.join("config.yml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn discover_finds_project_config() {
        let temp = TempDir::new().unwrap();
        let path = write_project_config(temp.path(), "settings:\n  echo_prompt: false\n");
        let paths = ConfigPaths::discover(temp.path());
        assert_eq!(paths.project.as_deref(), Some(path.as_path()));
        assert_eq!(paths.first_existing(), Some(path.as_path()));
    }

    #[test]
    fn load_config_uses_project_file() {
        let temp = TempDir::new().unwrap();
        write_project_config(temp.path(), "settings:\n  strict_not_found: true\n");
        let config = load_config(None, temp.path()).unwrap();
        assert!(config.settings.strict_not_found);
    }

    #[test]
    fn explicit_path_wins() {
        let temp = TempDir::new().unwrap();
        write_project_config(temp.path(), "settings:\n  strict_not_found: true\n");
        let explicit = temp.path().join("other.yml");
        fs::write(&explicit, "settings:\n  output: quiet\n").unwrap();

        let config = load_config(Some(&explicit), temp.path()).unwrap();
        assert!(!config.settings.strict_not_found);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let result = load_config(Some(&temp.path().join("absent.yml")), temp.path());
        assert!(matches!(result, Err(ShellError::ConfigNotFound { .. })));
    }

    #[test]
    fn invalid_yaml_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.yml");
        fs::write(&path, "settings: [unclosed").unwrap();
        let result = load_config_file(&path);
        match result {
            Err(ShellError::ConfigParseError { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse_config("", Path::new("empty.yml")).unwrap();
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn wrong_field_type_is_a_parse_error() {
        let result = parse_config("settings:\n  echo_prompt: sometimes\n", Path::new("x.yml"));
        assert!(matches!(result, Err(ShellError::ConfigParseError { .. })));
    }
}
